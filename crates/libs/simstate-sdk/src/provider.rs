//! Capability provider surface.
//!
//! The native singleton of older designs is replaced by an injected
//! provider: three focused traits combine into one composite, and
//! `Arc<dyn CapabilityProvider>` is the handle the client holds for the
//! lifetime of the process. Providers are read-only after construction.

use async_trait::async_trait;

use crate::error::SourceFault;
use crate::types::{HostPlatform, PermissionId, PermissionRationale, RawSubscription};

/// Identifies the platform the process is running on.
pub trait HostInfo: Send + Sync {
    fn platform(&self) -> HostPlatform;
}

/// Runtime permission negotiation with the host.
#[async_trait]
pub trait PermissionHost: Send + Sync {
    /// Request one runtime permission, suspending while the host presents
    /// its dialog. Returns whether the user granted it.
    ///
    /// The rationale influences dialog presentation only.
    async fn request_permission(
        &self,
        id: PermissionId,
        rationale: Option<&PermissionRationale>,
    ) -> Result<bool, SourceFault>;

    /// Whether the permission is held right now.
    ///
    /// Consulted again at field-access time rather than trusting an earlier
    /// grant: hosts can revoke permissions mid-session.
    fn check_permission(&self, id: PermissionId) -> bool;
}

/// The two native read-only telephony queries.
#[async_trait]
pub trait TelephonySource: Send + Sync {
    /// Total physical SIM slots the hardware exposes, independent of
    /// occupancy or permission state.
    async fn slot_count(&self) -> Result<u32, SourceFault>;

    /// Active subscriptions in enumeration order. An empty list means no
    /// active SIMs or an unavailable subsystem; neither is a fault.
    async fn active_subscriptions(&self) -> Result<Vec<RawSubscription>, SourceFault>;
}

/// Composite capability surface the pipeline consumes.
///
/// Automatically implemented for any type implementing all three
/// sub-traits. Use `Arc<dyn CapabilityProvider>` as the handle type.
pub trait CapabilityProvider: HostInfo + PermissionHost + TelephonySource {}

impl<T> CapabilityProvider for T where T: HostInfo + PermissionHost + TelephonySource {}
