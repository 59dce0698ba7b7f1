use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{PermissionId, PermissionRationale};

/// Per-call configuration. Only dialog presentation is configurable; the
/// permission set and request order are fixed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct SimStateConfig {
    /// Optional rationale dialog text, keyed by permission. Missing entries
    /// fall back to the host's bare prompt.
    pub rationales: BTreeMap<PermissionId, PermissionRationale>,
}

impl Default for SimStateConfig {
    fn default() -> Self {
        let mut rationales = BTreeMap::new();
        rationales.insert(
            PermissionId::ReadPhoneNumbers,
            PermissionRationale {
                title: "Phone Numbers Permission".to_owned(),
                message: "Your app needs access to your phone number for identification purposes."
                    .to_owned(),
                button_positive: "OK".to_owned(),
                button_negative: Some("Cancel".to_owned()),
                button_neutral: Some("Ask Me Later".to_owned()),
            },
        );
        Self { rationales }
    }
}
