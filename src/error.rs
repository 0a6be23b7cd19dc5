//! Frontend Errors

use thiserror::Error;

pub type SignupResult<T> = Result<T, SignupError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignupError {
    /// Neither `$API_ROOT` nor `data-api-root` was provided by the page
    #[error("API root is not configured")]
    MissingApiRoot,
    #[error("could not read the form: {0}")]
    Form(String),
    #[error("request failed: {0}")]
    Transport(String),
}
