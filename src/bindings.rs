//! Field Bindings
//!
//! Binding table from field name to the reactive state behind its
//! `{name}_group` and `{name}_help` elements. Built once per form.

use leptos::prelude::*;

/// Input control rendered for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text { placeholder: &'static str, required: bool },
    /// Always submits one of `options` (value, label); the first is selected
    Select { options: &'static [(&'static str, &'static str)] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Arguments accepted by `POST /domains`
pub const SIGNUP_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "domain_name",
        label: "Subdomain",
        kind: FieldKind::Text { placeholder: "yourname", required: true },
    },
    FieldSpec {
        name: "public",
        label: "Domain listing",
        kind: FieldKind::Select {
            options: &[("true", "Public: list it on this resolver"), ("false", "Private: do not list it")],
        },
    },
];

/// One field's error state. `help` being Some means the help element is
/// shown with that text and the group carries `has-error`.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub spec: &'static FieldSpec,
    pub help: RwSignal<Option<String>>,
}

impl FieldBinding {
    pub fn group_class(&self) -> String {
        format!("form-group {}_group", self.spec.name)
    }

    /// Group class including `has-error` while a message is shown
    pub fn current_group_class(&self) -> String {
        if self.help.with(Option::is_some) {
            format!("{} has-error", self.group_class())
        } else {
            self.group_class()
        }
    }

    pub fn help_class(&self) -> String {
        format!("help-block {}_help", self.spec.name)
    }
}

#[derive(Clone)]
pub struct FieldBindings(Vec<FieldBinding>);

impl FieldBindings {
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        Self(
            specs
                .iter()
                .map(|spec| FieldBinding { spec, help: RwSignal::new(None) })
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldBinding> {
        self.0.iter()
    }

    pub fn find(&self, name: &str) -> Option<&FieldBinding> {
        self.0.iter().find(|binding| binding.spec.name == name)
    }

    /// Reveal `message` on the field; false if the field is not bound
    pub fn show(&self, name: &str, message: &str) -> bool {
        match self.find(name) {
            Some(binding) => {
                binding.help.set(Some(message.to_string()));
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        for binding in &self.0 {
            if binding.help.with_untracked(Option::is_some) {
                binding.help.set(None);
            }
        }
    }
}
