use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Host platform ─────────────────────────────────────────────────────────────

/// Platform identifier reported by the injected host environment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum HostPlatform {
    Android,
    Ios,
    Web,
    Other(String),
}

impl HostPlatform {
    pub fn is_android(&self) -> bool {
        matches!(self, Self::Android)
    }

    /// Name used in error messages and logs.
    pub fn name(&self) -> &str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Web => "web",
            Self::Other(name) => name.as_str(),
        }
    }
}

// ── Permissions ───────────────────────────────────────────────────────────────

/// Runtime permissions the pipeline negotiates. No other permission is ever
/// requested.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PermissionId {
    ReadPhoneState,
    ReadPhoneNumbers,
}

impl PermissionId {
    /// Host-defined permission constant.
    pub const fn android_name(self) -> &'static str {
        match self {
            Self::ReadPhoneState => "android.permission.READ_PHONE_STATE",
            Self::ReadPhoneNumbers => "android.permission.READ_PHONE_NUMBERS",
        }
    }
}

/// Request order is fixed: phone-state first, then phone-numbers. The host
/// cannot present two dialogs at once, so the orchestrator awaits each
/// decision before issuing the next request.
pub const REQUIRED_PERMISSIONS: [PermissionId; 2] =
    [PermissionId::ReadPhoneState, PermissionId::ReadPhoneNumbers];

/// Dialog text shown with a permission prompt. Presentation only — the
/// grant/deny outcome is never affected by the rationale.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PermissionRationale {
    pub title: String,
    pub message: String,
    pub button_positive: String,
    pub button_negative: Option<String>,
    pub button_neutral: Option<String>,
}

/// Per-permission grant results for a single invocation. Never persisted
/// past the call that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionOutcome {
    grants: BTreeMap<PermissionId, bool>,
}

impl PermissionOutcome {
    pub fn record(&mut self, id: PermissionId, granted: bool) {
        self.grants.insert(id, granted);
    }

    pub fn granted(&self, id: PermissionId) -> bool {
        self.grants.get(&id).copied().unwrap_or(false)
    }

    pub fn all_granted(&self) -> bool {
        !self.grants.is_empty() && self.grants.values().all(|granted| *granted)
    }
}

// ── Raw native snapshot ───────────────────────────────────────────────────────

/// One raw entry from the active-subscription source, before mapping.
///
/// `number` is populated by the source; the bridge clears it when the
/// permission re-check at access time fails.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawSubscription {
    pub id: i32,
    pub slot_index: i32,
    pub carrier_name: Option<String>,
    pub display_name: Option<String>,
    pub country_iso: Option<String>,
    pub number: Option<String>,
    pub is_active: bool,
}

/// Output of the native query stage, input to the mapper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSimSnapshot {
    pub slot_count: u32,
    pub subscriptions: Vec<RawSubscription>,
}

// ── Boundary result types ─────────────────────────────────────────────────────

/// One active subscription.
///
/// `slot_index` is stable for the lifetime of the physical slot; `id` is
/// stable for the lifetime of the inserted subscription, not the slot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SimCardRecord {
    pub id: i32,
    pub slot_index: i32,
    pub carrier_name: Option<String>,
    pub display_name: Option<String>,
    pub country_iso: Option<String>,
    /// Present only when the phone-number-read capability held at lookup
    /// time.
    pub phone_number: Option<String>,
    pub is_ready: bool,
}

impl From<RawSubscription> for SimCardRecord {
    fn from(raw: RawSubscription) -> Self {
        Self {
            id: raw.id,
            slot_index: raw.slot_index,
            carrier_name: raw.carrier_name,
            display_name: raw.display_name,
            country_iso: raw.country_iso,
            phone_number: raw.number,
            is_ready: raw.is_active,
        }
    }
}

/// Aggregate SIM state for the device.
///
/// `sim_count` is the total physical slots regardless of occupancy.
/// `active_sim_count` always equals `sim_cards.len()`. Order of `sim_cards`
/// is the subscription-source enumeration order, not sorted by slot.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SimStateSnapshot {
    pub sim_count: u32,
    pub active_sim_count: u32,
    pub sim_cards: Vec<SimCardRecord>,
}
