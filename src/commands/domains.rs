//! Domain Signup Responses
//!
//! Maps what `POST /domains` answered onto a [`SubmitOutcome`].

use serde::Deserialize;
use serde_json::Value;

use super::ApiResponse;
use crate::models::{FieldError, RegisteredDomain, SubmitOutcome};

/// Shown when the request never got an answer
pub const UNREACHABLE_MESSAGE: &str =
    "Could not reach the OnionGate API. Check your connection and try again.";

/// Error body envelope used by the API
#[derive(Deserialize)]
struct ErrorBody {
    message: Value,
}

/// Interpret a finished request.
///
/// Never fails: bodies that are not the documented shape end up as
/// [`SubmitOutcome::Failed`] with a generic message.
pub fn interpret_response(response: &ApiResponse) -> SubmitOutcome {
    if (200..300).contains(&response.status) {
        return match serde_json::from_str::<RegisteredDomain>(&response.body) {
            Ok(domain) => SubmitOutcome::Registered(Some(domain)),
            Err(e) => {
                log::warn!("signup succeeded but the response did not parse: {}", e);
                SubmitOutcome::Registered(None)
            }
        };
    }

    let generic = || {
        SubmitOutcome::Failed(format!(
            "The server could not register this domain (HTTP {}). Please try again later.",
            response.status
        ))
    };

    let body = match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => body,
        Err(e) => {
            log::warn!("HTTP {} with unreadable error body: {}", response.status, e);
            return generic();
        }
    };

    match body.message {
        Value::Object(fields) if !fields.is_empty() => SubmitOutcome::Rejected(
            fields
                .into_iter()
                .map(|(field, message)| FieldError {
                    field,
                    message: match message {
                        Value::String(text) => text,
                        other => other.to_string(),
                    },
                })
                .collect(),
        ),
        Value::String(text) if !text.trim().is_empty() => SubmitOutcome::Failed(text),
        _ => generic(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_created_domain_parsed() {
        let outcome = interpret_response(&response(
            200,
            r#"{"domain_name":"hidden.oniongate.com","zone":"oniongate.com","onion_address":null,
                "service_online":false,"update_token":"eyJ0eXAi.token"}"#,
        ));
        let SubmitOutcome::Registered(Some(domain)) = outcome else {
            panic!("expected registered domain, got {:?}", outcome);
        };
        assert_eq!(domain.domain_name.as_deref(), Some("hidden.oniongate.com"));
        assert_eq!(domain.update_token.as_deref(), Some("eyJ0eXAi.token"));
        assert_eq!(domain.onion_address, None);
    }

    #[test]
    fn test_success_with_unparseable_body_still_registered() {
        assert_eq!(
            interpret_response(&response(201, "<html>ok</html>")),
            SubmitOutcome::Registered(None)
        );
    }

    #[test]
    fn test_field_errors_mapped() {
        let outcome = interpret_response(&response(
            422,
            r#"{"message":{"email":"already taken"}}"#,
        ));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FieldError {
                field: "email".to_string(),
                message: "already taken".to_string(),
            }])
        );
    }

    #[test]
    fn test_field_errors_keep_server_order() {
        let outcome = interpret_response(&response(
            422,
            r#"{"message":{"public":"Boolean value must be true or false","domain_name":"too short"}}"#,
        ));
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(fields, vec!["public", "domain_name"]);
    }

    #[test]
    fn test_non_string_field_message_kept_as_json() {
        let outcome = interpret_response(&response(400, r#"{"message":{"public":["bad","worse"]}}"#));
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors[0].field, "public");
        assert_eq!(errors[0].message, r#"["bad","worse"]"#);
    }

    #[test]
    fn test_string_message_goes_to_alert() {
        assert_eq!(
            interpret_response(&response(404, r#"{"message":"The requested URL was not found"}"#)),
            SubmitOutcome::Failed("The requested URL was not found".to_string())
        );
    }

    #[test]
    fn test_malformed_body_falls_back() {
        for body in ["<h1>Internal Server Error</h1>", "", "{}", r#"{"message":{}}"#, r#"{"message":42}"#] {
            let SubmitOutcome::Failed(text) = interpret_response(&response(500, body)) else {
                panic!("expected fallback for {:?}", body);
            };
            assert!(text.contains("HTTP 500"), "{}", text);
        }
    }
}
