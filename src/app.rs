//! OnionGate Signup App
//!
//! Root component: the signup form, or a notice when the page did not
//! configure the API.

use leptos::prelude::*;

use crate::components::SignupForm;
use crate::config::SignupConfig;
use crate::error::SignupResult;

#[component]
pub fn App(config: SignupResult<SignupConfig>) -> impl IntoView {
    match config {
        Ok(config) => view! { <SignupForm config=config /> }.into_any(),
        Err(e) => {
            log::error!("signup form disabled: {}", e);
            view! {
                <div class="alert alert-danger form-error-alert" role="alert">
                    "Registration is unavailable right now. Please try again later."
                </div>
            }
            .into_any()
        }
    }
}
