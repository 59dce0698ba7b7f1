//! End-to-end runs of the public API against the in-memory provider.

use std::sync::Arc;

use simstate_sdk::{
    HostPlatform, PermissionId, RawSubscription, SimStateClient, StaticProvider,
};

fn dual_sim_provider() -> StaticProvider {
    StaticProvider::android()
        .grant(PermissionId::ReadPhoneState)
        .grant(PermissionId::ReadPhoneNumbers)
        .with_slot_count(2)
        .with_subscription(RawSubscription {
            id: 1,
            slot_index: 0,
            carrier_name: Some("Carrier X".to_owned()),
            display_name: Some("Personal".to_owned()),
            country_iso: Some("us".to_owned()),
            number: Some("+15551234567".to_owned()),
            is_active: true,
        })
        .with_subscription(RawSubscription {
            id: 4,
            slot_index: 1,
            carrier_name: Some("Carrier Y".to_owned()),
            display_name: Some("Work".to_owned()),
            country_iso: Some("gb".to_owned()),
            number: None,
            is_active: true,
        })
}

#[tokio::test]
async fn dual_sim_snapshot_has_the_documented_wire_shape() {
    let client = SimStateClient::new(Arc::new(dual_sim_provider()));
    let snapshot = client.get_sim_state().await.expect("pipeline succeeds");

    assert_eq!(snapshot.sim_count, 2);
    assert_eq!(snapshot.active_sim_count, 2);

    let value = serde_json::to_value(&snapshot).expect("snapshot serializes");
    assert_eq!(value["simCount"], 2);
    assert_eq!(value["activeSimCount"], 2);
    assert_eq!(value["simCards"][0]["phoneNumber"], "+15551234567");
    assert_eq!(value["simCards"][1]["carrierName"], "Carrier Y");
    // Absent optionals serialize as null, never as sentinel values.
    assert_eq!(value["simCards"][1]["phoneNumber"], serde_json::Value::Null);
}

#[tokio::test]
async fn non_android_provider_is_rejected_up_front() {
    let provider = dual_sim_provider().with_platform(HostPlatform::Web);
    let client = SimStateClient::new(Arc::new(provider));

    let err = client.get_sim_state().await.expect_err("unsupported");
    assert_eq!(err.code(), simstate_sdk::error_code::UNSUPPORTED_PLATFORM);
}

#[tokio::test]
async fn denying_one_permission_fails_the_whole_call() {
    let provider = dual_sim_provider().deny(PermissionId::ReadPhoneNumbers);
    let client = SimStateClient::new(Arc::new(provider));

    let err = client.get_sim_state().await.expect_err("denied");
    assert_eq!(err.code(), simstate_sdk::error_code::PERMISSION_DENIED);
    assert!(err.is_user_actionable());
}

#[tokio::test]
async fn revoked_grant_redacts_numbers_but_keeps_the_rest() {
    let provider = dual_sim_provider()
        .revoke_held(PermissionId::ReadPhoneState)
        .revoke_held(PermissionId::ReadPhoneNumbers);
    let client = SimStateClient::new(Arc::new(provider));

    let snapshot = client.get_sim_state().await.expect("pipeline succeeds");
    assert!(snapshot.sim_cards.iter().all(|card| card.phone_number.is_none()));
    assert_eq!(snapshot.sim_cards[0].carrier_name.as_deref(), Some("Carrier X"));
    assert_eq!(snapshot.active_sim_count, 2);
}
