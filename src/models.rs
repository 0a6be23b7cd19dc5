//! Frontend Models
//!
//! Data structures matching the OnionGate API.

use serde::{Deserialize, Serialize};

/// Domain returned by `POST /domains` (matches backend marshalling)
///
/// Every field is optional here: the banner only needs whatever arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisteredDomain {
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub onion_address: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
    #[serde(default)]
    pub updated_since_synced: Option<bool>,
    #[serde(default)]
    pub service_last_online: Option<String>,
    #[serde(default)]
    pub service_online: Option<bool>,
    /// JWT authorizing future updates of this domain
    #[serde(default)]
    pub update_token: Option<String>,
}

/// Validation message for one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// What a finished request means for the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx; details are `None` when the body did not parse
    Registered(Option<RegisteredDomain>),
    /// Non-2xx with per-field messages
    Rejected(Vec<FieldError>),
    /// Anything else, with a message for the generic alert
    Failed(String),
}

/// Lifecycle of the most recent submission.
///
/// `Succeeded` and `Failed` stay until the next submit; the form is idle
/// again in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}
