//! Signup Form Context
//!
//! Shared form state provided via Leptos Context API. This is the view
//! the controller renders into.

use leptos::prelude::*;

use crate::bindings::FieldBindings;
use crate::controller::FormView;
use crate::models::{Phase, RegisteredDomain};
use crate::store::{self, SignupState, SignupStore};

#[derive(Clone, Copy)]
pub struct SignupContext {
    pub store: SignupStore,
    pub bindings: StoredValue<FieldBindings>,
}

impl SignupContext {
    pub fn new(bindings: FieldBindings) -> Self {
        Self {
            store: SignupStore::new(SignupState::default()),
            bindings: StoredValue::new(bindings),
        }
    }
}

impl FormView for SignupContext {
    fn clear_errors(&self) {
        self.bindings.with_value(FieldBindings::clear);
        store::store_set_alert(&self.store, None);
    }

    fn hide_success(&self) {
        store::store_hide_success(&self.store);
    }

    fn show_success(&self, domain: Option<RegisteredDomain>) {
        store::store_show_success(&self.store, domain);
    }

    fn show_field_error(&self, field: &str, message: &str) -> bool {
        self.bindings.with_value(|bindings| bindings.show(field, message))
    }

    fn show_alert(&self, message: &str) {
        store::store_set_alert(&self.store, Some(message.to_string()));
    }

    fn set_phase(&self, phase: Phase) {
        store::store_set_phase(&self.store, phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::SIGNUP_FIELDS;
    use crate::store::SignupStateStoreFields;
    use leptos::reactive::owner::Owner;

    fn help_of(ctx: &SignupContext, field: &str) -> Option<String> {
        ctx.bindings
            .with_value(|bindings| bindings.find(field).and_then(|binding| binding.help.get_untracked()))
    }

    #[test]
    fn test_field_error_flags_group() {
        Owner::new().with(|| {
            let ctx = SignupContext::new(FieldBindings::new(SIGNUP_FIELDS));

            assert!(ctx.show_field_error("domain_name", "This subdomain is not allowed"));

            assert_eq!(help_of(&ctx, "domain_name").as_deref(), Some("This subdomain is not allowed"));
            assert_eq!(help_of(&ctx, "public"), None);
            let group = ctx.bindings.with_value(|bindings| bindings.find("domain_name").unwrap().current_group_class());
            assert!(group.ends_with("has-error"));
        });
    }

    #[test]
    fn test_clear_errors_also_hides_alert() {
        Owner::new().with(|| {
            let ctx = SignupContext::new(FieldBindings::new(SIGNUP_FIELDS));
            ctx.show_field_error("domain_name", "too short");
            ctx.show_alert("zone: Unknown zone");

            ctx.clear_errors();

            assert_eq!(help_of(&ctx, "domain_name"), None);
            assert_eq!(ctx.store.alert().get_untracked(), None);
        });
    }

    #[test]
    fn test_success_banner_toggles() {
        Owner::new().with(|| {
            let ctx = SignupContext::new(FieldBindings::new(SIGNUP_FIELDS));
            let domain = RegisteredDomain {
                domain_name: Some("hidden.oniongate.com".to_string()),
                ..Default::default()
            };

            ctx.show_success(Some(domain.clone()));
            ctx.set_phase(Phase::Succeeded);
            assert!(ctx.store.success_visible().get_untracked());
            assert_eq!(ctx.store.registered().get_untracked(), Some(domain));
            assert_eq!(ctx.store.phase().get_untracked(), Phase::Succeeded);

            ctx.hide_success();
            assert!(!ctx.store.success_visible().get_untracked());
            assert_eq!(ctx.store.registered().get_untracked(), None);
        });
    }
}
