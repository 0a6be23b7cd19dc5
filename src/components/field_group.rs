//! Field Group Component
//!
//! One labelled control with its inline help message.

use leptos::prelude::*;

use crate::bindings::{FieldBinding, FieldKind};

/// Renders `{name}_group` / `{name}_help` for a bound field
#[component]
pub fn FieldGroup(binding: FieldBinding) -> impl IntoView {
    let name = binding.spec.name;
    let help = binding.help;
    let help_class = binding.help_class();

    let control = match binding.spec.kind {
        FieldKind::Text { placeholder, required } => view! {
            <label for=name>{binding.spec.label}</label>
            <input
                type="text"
                class="form-control"
                id=name
                name=name
                placeholder=placeholder
                required=required
            />
        }
        .into_any(),
        FieldKind::Select { options } => view! {
            <label for=name>{binding.spec.label}</label>
            <select class="form-control" id=name name=name>
                {options
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class=move || binding.current_group_class()>
            {control}
            <span
                class=help_class
                style:display=move || if help.with(Option::is_some) { "block" } else { "none" }
            >
                {move || help.get().unwrap_or_default()}
            </span>
        </div>
    }
}
