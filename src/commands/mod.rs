//! OnionGate API Bindings
//!
//! Frontend access to the domain signup resource.

mod domains;

use async_trait::async_trait;
use form_payload::FormPayload;
use reqwest::header::ACCEPT;

use crate::config::SignupConfig;
use crate::error::{SignupError, SignupResult};

pub use domains::*;

/// Raw HTTP answer, interpreted later by [`interpret_response`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Transport used by the controller.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait SignupApi {
    /// POST the payload to the signup endpoint
    async fn register_domain(&self, payload: &FormPayload) -> SignupResult<ApiResponse>;
}

/// `SignupApi` over the browser fetch API (reqwest's wasm backend)
#[derive(Debug, Clone)]
pub struct HttpSignupApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSignupApi {
    pub fn new(config: &SignupConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
        }
    }
}

#[async_trait(?Send)]
impl SignupApi for HttpSignupApi {
    async fn register_domain(&self, payload: &FormPayload) -> SignupResult<ApiResponse> {
        log::debug!("POST {} ({} fields)", self.endpoint, payload.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SignupError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SignupError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
