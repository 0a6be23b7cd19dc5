//! Signup Form State Store
//!
//! Form-level state with field-level reactivity via reactive_stores.
//! Per-field error messages live in the binding table instead.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Phase, RegisteredDomain};

#[derive(Clone, Debug, Default, Store)]
pub struct SignupState {
    /// Lifecycle of the latest submission
    pub phase: Phase,
    /// Whether `.form-success-alert` is shown
    pub success_visible: bool,
    /// Details of the domain just registered, if the response parsed
    pub registered: Option<RegisteredDomain>,
    /// Text of `.form-error-alert`; hidden when None
    pub alert: Option<String>,
}

pub type SignupStore = Store<SignupState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_phase(store: &SignupStore, phase: Phase) {
    *store.phase().write() = phase;
}

pub fn store_show_success(store: &SignupStore, domain: Option<RegisteredDomain>) {
    *store.registered().write() = domain;
    *store.success_visible().write() = true;
}

pub fn store_hide_success(store: &SignupStore) {
    *store.success_visible().write() = false;
    *store.registered().write() = None;
}

pub fn store_set_alert(store: &SignupStore, message: Option<String>) {
    *store.alert().write() = message;
}
