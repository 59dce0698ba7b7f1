use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::SourceFault;
use crate::provider::{HostInfo, PermissionHost, TelephonySource};
use crate::types::{HostPlatform, PermissionId, PermissionRationale, RawSubscription};

/// An in-memory capability provider with fixed answers.
///
/// The substitute for the real native binding in tests and demos: platform,
/// grant decisions, currently-held permissions, slot count and subscription
/// list are all set up front and never change.
///
/// `grant`/`deny` control what a permission *request* returns; the held set
/// controls what [`PermissionHost::check_permission`] returns at field
/// access time. By default granting a permission also marks it held;
/// [`StaticProvider::revoke_held`] separates the two to model a grant
/// revoked mid-session.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    platform: Option<HostPlatform>,
    grants: BTreeSet<PermissionId>,
    held: BTreeSet<PermissionId>,
    slot_count: u32,
    subscriptions: Vec<RawSubscription>,
}

impl StaticProvider {
    /// An Android provider with no permissions granted and no SIMs.
    pub fn android() -> Self {
        Self { platform: Some(HostPlatform::Android), ..Self::default() }
    }

    pub fn with_platform(mut self, platform: HostPlatform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Mark a permission as granted on request and currently held.
    pub fn grant(mut self, id: PermissionId) -> Self {
        self.grants.insert(id);
        self.held.insert(id);
        self
    }

    pub fn deny(mut self, id: PermissionId) -> Self {
        self.grants.remove(&id);
        self.held.remove(&id);
        self
    }

    /// Keep the request outcome granted but drop the permission from the
    /// held set, as a host revoking the grant mid-session would.
    pub fn revoke_held(mut self, id: PermissionId) -> Self {
        self.held.remove(&id);
        self
    }

    pub fn with_slot_count(mut self, slot_count: u32) -> Self {
        self.slot_count = slot_count;
        self
    }

    pub fn with_subscription(mut self, subscription: RawSubscription) -> Self {
        self.subscriptions.push(subscription);
        self
    }
}

impl HostInfo for StaticProvider {
    fn platform(&self) -> HostPlatform {
        self.platform.clone().unwrap_or(HostPlatform::Other("unknown".to_owned()))
    }
}

#[async_trait]
impl PermissionHost for StaticProvider {
    async fn request_permission(
        &self,
        id: PermissionId,
        _rationale: Option<&PermissionRationale>,
    ) -> Result<bool, SourceFault> {
        Ok(self.grants.contains(&id))
    }

    fn check_permission(&self, id: PermissionId) -> bool {
        self.held.contains(&id)
    }
}

#[async_trait]
impl TelephonySource for StaticProvider {
    async fn slot_count(&self) -> Result<u32, SourceFault> {
        Ok(self.slot_count)
    }

    async fn active_subscriptions(&self) -> Result<Vec<RawSubscription>, SourceFault> {
        Ok(self.subscriptions.clone())
    }
}
