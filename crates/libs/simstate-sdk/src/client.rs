//! The retrieval pipeline.
//!
//! One linear chain with a suspension point per host interaction: platform
//! gate, then sequential permission requests, then the native query, then
//! the pure mapping. Each stage short-circuits with its own error kind; no
//! stage overlaps another and no call is retried or cached.

use std::sync::Arc;

use crate::config::SimStateConfig;
use crate::error::{SimStateError, SourceFault};
use crate::permission;
use crate::platform;
use crate::provider::CapabilityProvider;
use crate::snapshot;
use crate::types::{PermissionId, RawSimSnapshot, SimStateSnapshot, REQUIRED_PERMISSIONS};

/// Entry point handle. Constructed once with an injected provider and
/// reused read-only across calls; each call is otherwise independent.
pub struct SimStateClient {
    provider: Arc<dyn CapabilityProvider>,
    config: SimStateConfig,
}

impl SimStateClient {
    pub fn new(provider: Arc<dyn CapabilityProvider>) -> Self {
        Self::with_config(provider, SimStateConfig::default())
    }

    pub fn with_config(provider: Arc<dyn CapabilityProvider>, config: SimStateConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch the device's SIM state.
    ///
    /// Runs the full pipeline and resolves with a complete snapshot or
    /// rejects with exactly one [`SimStateError`]; there is no partial
    /// success, no cancellation, and no caching between calls.
    pub async fn get_sim_state(&self) -> Result<SimStateSnapshot, SimStateError> {
        platform::ensure_supported(&self.provider.platform())?;

        let outcome = permission::request_all(
            self.provider.as_ref(),
            &REQUIRED_PERMISSIONS,
            &self.config.rationales,
        )
        .await?;
        debug_assert!(outcome.all_granted());

        let raw = self.query_native().await?;
        Ok(snapshot::map_snapshot(raw))
    }

    /// Native query bridge: slot count, then the subscription list, then
    /// the per-entry number redaction.
    ///
    /// The permission re-check happens here at access time rather than
    /// trusting the orchestrator's earlier outcome — grants can be revoked
    /// while this call is in flight. Either phone permission suffices to
    /// read the number.
    async fn query_native(&self) -> Result<RawSimSnapshot, SourceFault> {
        let slot_count = self.provider.slot_count().await?;
        let entries = self.provider.active_subscriptions().await?;
        log::debug!("native query: {slot_count} slots, {} active subscriptions", entries.len());

        let subscriptions = entries
            .into_iter()
            .map(|mut sub| {
                // Checked per entry, not hoisted: the host can revoke a
                // grant between two lookups.
                let number_readable = self
                    .provider
                    .check_permission(PermissionId::ReadPhoneNumbers)
                    || self.provider.check_permission(PermissionId::ReadPhoneState);
                if !number_readable && sub.number.take().is_some() {
                    log::debug!("redacting phone number for subscription {}", sub.id);
                }
                sub
            })
            .collect();

        Ok(RawSimSnapshot { slot_count, subscriptions })
    }
}
