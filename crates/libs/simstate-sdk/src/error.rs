use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine codes carried by every [`SimStateError`] variant.
pub mod code {
    pub const UNSUPPORTED_PLATFORM: &str = "UNSUPPORTED_PLATFORM";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const NATIVE_MODULE_ERROR: &str = "NATIVE_MODULE_ERROR";
}

/// Fault raised by an injected capability provider.
///
/// Never reaches the caller directly: the pipeline translates it into the
/// [`SimStateError`] variant owned by the failing stage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{message}")]
#[non_exhaustive]
pub struct SourceFault {
    pub message: String,
}

impl SourceFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The complete error taxonomy of the pipeline. Every failure surfaces as
/// exactly one of these three kinds; no raw provider fault escapes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SimStateError {
    /// The host platform is not Android. The feature is unavailable there
    /// and no permission prompt is ever shown.
    #[error("SIM state is only available on Android devices (got '{platform}')")]
    Unsupported { platform: String },

    /// A required runtime permission was denied, or the permission stage
    /// itself faulted. The caller may re-prompt or direct the user to
    /// settings.
    #[error("{message}")]
    PermissionDenied { message: String },

    /// The native query or mapping stage raised an unexpected fault.
    #[error("Native SIM state access failed: {cause}")]
    Native { cause: String },
}

impl SimStateError {
    pub fn unsupported(platform: impl Into<String>) -> Self {
        Self::Unsupported { platform: platform.into() }
    }

    pub fn permission_denied() -> Self {
        Self::PermissionDenied {
            message: "Required SIM permissions were not granted by the user".to_owned(),
        }
    }

    pub fn native(cause: impl Into<String>) -> Self {
        Self::Native { cause: cause.into() }
    }

    /// Stable identifying code, matching the codes the boundary has always
    /// exposed.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unsupported { .. } => code::UNSUPPORTED_PLATFORM,
            Self::PermissionDenied { .. } => code::PERMISSION_DENIED,
            Self::Native { .. } => code::NATIVE_MODULE_ERROR,
        }
    }

    /// Returns `true` when a later call might succeed without a platform
    /// change: denied permissions can be re-granted and native faults may
    /// be transient.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. } | Self::Native { .. })
    }

    /// Returns `true` when the user can resolve the failure themselves.
    pub fn is_user_actionable(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

impl From<SourceFault> for SimStateError {
    /// The designated native-stage translation: any fault escaping the
    /// query bridge or mapper becomes [`SimStateError::Native`] carrying
    /// the original description.
    fn from(fault: SourceFault) -> Self {
        Self::native(fault.message)
    }
}
