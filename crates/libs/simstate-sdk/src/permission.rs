//! Permission orchestration.
//!
//! Requests are issued strictly one at a time, in the fixed order of
//! [`REQUIRED_PERMISSIONS`]: the host cannot present two system dialogs at
//! once, and overlapping prompts are host-undefined behavior. The aggregate
//! succeeds only when every permission in the sequence is granted; the
//! first denial stops the sequence.

use std::collections::BTreeMap;

use crate::error::SimStateError;
use crate::provider::PermissionHost;
use crate::types::{PermissionId, PermissionOutcome, PermissionRationale};

/// Request every permission in `order`, awaiting each host decision before
/// issuing the next.
///
/// Returns the per-permission outcome on full success. A denial reports
/// only the aggregate failure, never per-permission detail. A host fault
/// while presenting a dialog is a failure of this stage and maps to
/// [`SimStateError::PermissionDenied`] as well — after a fault the prompt
/// outcome is unknowable.
pub async fn request_all<H: PermissionHost + ?Sized>(
    host: &H,
    order: &[PermissionId],
    rationales: &BTreeMap<PermissionId, PermissionRationale>,
) -> Result<PermissionOutcome, SimStateError> {
    let mut outcome = PermissionOutcome::default();

    for &id in order {
        let granted = host
            .request_permission(id, rationales.get(&id))
            .await
            .map_err(|fault| {
                log::warn!("permission request for {} faulted: {fault}", id.android_name());
                SimStateError::permission_denied()
            })?;
        log::debug!(
            "permission {} {}",
            id.android_name(),
            if granted { "granted" } else { "denied" }
        );
        outcome.record(id, granted);
        if !granted {
            // The pipeline is already doomed; do not prompt for the rest.
            return Err(SimStateError::permission_denied());
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceFault;
    use crate::types::REQUIRED_PERMISSIONS;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedHost {
        answers: BTreeMap<PermissionId, Result<bool, SourceFault>>,
        requested: Mutex<Vec<PermissionId>>,
    }

    impl ScriptedHost {
        fn new(answers: Vec<(PermissionId, Result<bool, SourceFault>)>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<PermissionId> {
            self.requested.lock().expect("requested mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl PermissionHost for ScriptedHost {
        async fn request_permission(
            &self,
            id: PermissionId,
            _rationale: Option<&PermissionRationale>,
        ) -> Result<bool, SourceFault> {
            self.requested.lock().expect("requested mutex poisoned").push(id);
            self.answers.get(&id).cloned().unwrap_or(Ok(false))
        }

        fn check_permission(&self, id: PermissionId) -> bool {
            matches!(self.answers.get(&id), Some(Ok(true)))
        }
    }

    #[tokio::test]
    async fn requests_follow_the_fixed_order() {
        let host = ScriptedHost::new(vec![
            (PermissionId::ReadPhoneState, Ok(true)),
            (PermissionId::ReadPhoneNumbers, Ok(true)),
        ]);

        let outcome = request_all(&host, &REQUIRED_PERMISSIONS, &BTreeMap::new())
            .await
            .expect("all granted");
        assert!(outcome.all_granted());
        assert_eq!(
            host.requested(),
            vec![PermissionId::ReadPhoneState, PermissionId::ReadPhoneNumbers]
        );
    }

    #[tokio::test]
    async fn first_denial_stops_the_sequence() {
        let host = ScriptedHost::new(vec![
            (PermissionId::ReadPhoneState, Ok(false)),
            (PermissionId::ReadPhoneNumbers, Ok(true)),
        ]);

        let err = request_all(&host, &REQUIRED_PERMISSIONS, &BTreeMap::new())
            .await
            .expect_err("denied");
        assert_eq!(err.code(), crate::error::code::PERMISSION_DENIED);
        assert_eq!(host.requested(), vec![PermissionId::ReadPhoneState]);
    }

    #[tokio::test]
    async fn host_fault_maps_to_permission_denied() {
        let host = ScriptedHost::new(vec![(
            PermissionId::ReadPhoneState,
            Err(SourceFault::new("activity detached")),
        )]);

        let err = request_all(&host, &REQUIRED_PERMISSIONS, &BTreeMap::new())
            .await
            .expect_err("faulted");
        assert_eq!(err.code(), crate::error::code::PERMISSION_DENIED);
    }

    #[tokio::test]
    async fn denied_second_permission_still_fails_the_aggregate() {
        let host = ScriptedHost::new(vec![
            (PermissionId::ReadPhoneState, Ok(true)),
            (PermissionId::ReadPhoneNumbers, Ok(false)),
        ]);

        let err = request_all(&host, &REQUIRED_PERMISSIONS, &BTreeMap::new())
            .await
            .expect_err("denied");
        assert_eq!(
            err.to_string(),
            "Required SIM permissions were not granted by the user"
        );
        assert_eq!(
            host.requested(),
            vec![PermissionId::ReadPhoneState, PermissionId::ReadPhoneNumbers]
        );
    }
}
