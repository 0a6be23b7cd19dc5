//! Submission Controller
//!
//! Runs one request/response cycle per form submission and renders the
//! result through a [`FormView`].
//!
//! Every submission takes a generation ticket. Only the newest ticket may
//! touch the view when its response arrives; older responses are dropped,
//! so the last submission wins regardless of completion order.

use std::cell::Cell;

use form_payload::FormPayload;

use crate::commands::{interpret_response, SignupApi, UNREACHABLE_MESSAGE};
use crate::error::SignupError;
use crate::models::{Phase, RegisteredDomain, SubmitOutcome};

/// Everything the controller is allowed to change on screen
pub trait FormView {
    /// Hide every field help message, drop every group error marker and
    /// hide the generic alert
    fn clear_errors(&self);
    fn hide_success(&self);
    fn show_success(&self, domain: Option<RegisteredDomain>);
    /// Returns false when the form has no binding for `field`
    fn show_field_error(&self, field: &str, message: &str) -> bool;
    fn show_alert(&self, message: &str);
    fn set_phase(&self, phase: Phase);
}

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ticket(u64);

pub struct SignupController<A, V> {
    api: A,
    view: V,
    generation: Cell<u64>,
}

impl<A: SignupApi, V: FormView> SignupController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            generation: Cell::new(0),
        }
    }

    /// Submit one payload.
    ///
    /// Returns the outcome that was rendered, or `None` when a newer
    /// submission started while this one was in flight.
    pub async fn submit(&self, payload: FormPayload) -> Option<SubmitOutcome> {
        let ticket = self.begin();

        let outcome = match self.api.register_domain(&payload).await {
            Ok(response) => interpret_response(&response),
            Err(e) => {
                log::warn!("signup #{} failed: {}", ticket.0, e);
                SubmitOutcome::Failed(UNREACHABLE_MESSAGE.to_string())
            }
        };

        if !self.is_current(ticket) {
            log::debug!("discarding stale response for submission #{}", ticket.0);
            return None;
        }

        self.render(&outcome);
        Some(outcome)
    }

    /// The form could not be serialized; show why without sending anything.
    pub fn reject_locally(&self, error: &SignupError) {
        let ticket = self.begin();
        log::error!("signup #{} aborted: {}", ticket.0, error);
        self.render(&SubmitOutcome::Failed(
            "The form could not be read. Please reload the page and try again.".to_string(),
        ));
    }

    fn begin(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);

        self.view.clear_errors();
        self.view.hide_success();
        self.view.set_phase(Phase::Submitting);
        Ticket(next)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    fn render(&self, outcome: &SubmitOutcome) {
        self.view.clear_errors();

        match outcome {
            SubmitOutcome::Registered(domain) => {
                log::info!("domain registered");
                self.view.show_success(domain.clone());
                self.view.set_phase(Phase::Succeeded);
            }
            SubmitOutcome::Rejected(errors) => {
                let mut unbound = Vec::new();
                for error in errors {
                    if !self.view.show_field_error(&error.field, &error.message) {
                        log::warn!("no field bound for error on '{}'", error.field);
                        unbound.push(format!("{}: {}", error.field, error.message));
                    }
                }
                if !unbound.is_empty() {
                    self.view.show_alert(&unbound.join("\n"));
                }
                self.view.set_phase(Phase::Failed);
            }
            SubmitOutcome::Failed(message) => {
                self.view.show_alert(message);
                self.view.set_phase(Phase::Failed);
            }
        }
    }
}
