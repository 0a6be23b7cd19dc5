//! Form Alert Components
//!
//! Success banner and generic error banner, scoped to the signup form.

use leptos::prelude::*;

use crate::context::SignupContext;
use crate::store::SignupStateStoreFields;

/// `.form-success-alert`, with the registered domain when known
#[component]
pub fn SuccessAlert() -> impl IntoView {
    let ctx = use_context::<SignupContext>().expect("SignupContext should be provided");
    let store = ctx.store;

    view! {
        <div
            class="alert alert-success form-success-alert"
            role="status"
            style:display=move || if store.success_visible().get() { "block" } else { "none" }
        >
            <strong>"Your domain has been registered."</strong>
            {move || store.registered().get().map(|domain| view! {
                {domain.domain_name.map(|name| view! {
                    <p class="registered-domain">{name}" now resolves through OnionGate."</p>
                })}
                {domain.update_token.map(|token| view! {
                    <p>"Keep this update token, it is the only way to change or delete the domain later:"</p>
                    <pre class="update-token">{token}</pre>
                })}
            })}
        </div>
    }
}

/// `.form-error-alert` for failures that belong to no single field
#[component]
pub fn ErrorAlert() -> impl IntoView {
    let ctx = use_context::<SignupContext>().expect("SignupContext should be provided");
    let store = ctx.store;

    view! {
        <div
            class="alert alert-danger form-error-alert"
            role="alert"
            style:display=move || if store.alert().with(Option::is_some) { "block" } else { "none" }
        >
            {move || {
                alert_lines(&store.alert().get().unwrap_or_default())
                    .into_iter()
                    .map(|line| view! { <div>{line}</div> })
                    .collect_view()
            }}
        </div>
    }
}

/// One entry per line; blank lines dropped
fn alert_lines(message: &str) -> Vec<String> {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
