use crate::error::SimStateError;
use crate::types::HostPlatform;

/// Platform gate: the first pipeline stage.
///
/// Must run before any permission prompt or native call — a prompt on a
/// platform where the feature is meaningless is a contract violation, not
/// just wasted work.
pub fn ensure_supported(platform: &HostPlatform) -> Result<(), SimStateError> {
    if platform.is_android() {
        return Ok(());
    }
    log::warn!("sim state requested on unsupported platform '{}'", platform.name());
    Err(SimStateError::unsupported(platform.name()))
}
