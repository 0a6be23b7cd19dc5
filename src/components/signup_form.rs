//! Subdomain Signup Form Component
//!
//! Renders `#subdomain-signup-form` and hands each submission to the
//! [`SignupController`].

use std::rc::Rc;

use form_payload::FormPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::bindings::{FieldBindings, SIGNUP_FIELDS};
use crate::commands::HttpSignupApi;
use crate::components::{ErrorAlert, FieldGroup, SuccessAlert};
use crate::config::SignupConfig;
use crate::context::SignupContext;
use crate::controller::SignupController;
use crate::error::{SignupError, SignupResult};
use crate::models::Phase;
use crate::store::SignupStateStoreFields;

pub const FORM_ID: &str = "subdomain-signup-form";

type Controller = SignupController<HttpSignupApi, SignupContext>;

#[component]
pub fn SignupForm(config: SignupConfig) -> impl IntoView {
    let bindings = FieldBindings::new(SIGNUP_FIELDS);
    let ctx = SignupContext::new(bindings.clone());
    provide_context(ctx);

    log::info!("signup form bound to {}", config.endpoint());
    let controller: Rc<Controller> = Rc::new(SignupController::new(HttpSignupApi::new(&config), ctx));
    let controller = StoredValue::new_local(controller);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();

        match read_form(&ev) {
            Ok(payload) => spawn_local(async move {
                controller.submit(payload).await;
            }),
            Err(e) => controller.reject_locally(&e),
        }
    };

    let submitting = move || ctx.store.phase().get() == Phase::Submitting;

    view! {
        <form id=FORM_ID aria-busy=move || submitting().to_string() on:submit=on_submit>
            <SuccessAlert />
            <ErrorAlert />
            {bindings.iter().map(|binding| view! { <FieldGroup binding=*binding /> }).collect_view()}
            <button type="submit" class="btn btn-primary">
                {move || if submitting() { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}

fn read_form(ev: &web_sys::SubmitEvent) -> SignupResult<FormPayload> {
    let form = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
        .ok_or_else(|| SignupError::Form("submit event has no form target".to_string()))?;
    FormPayload::from_form(&form).map_err(|e| SignupError::Form(format!("{:?}", e)))
}
