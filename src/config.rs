//! Signup Configuration
//!
//! The hosting page supplies the API root once, before the app starts.

use wasm_bindgen::JsValue;

use crate::error::{SignupError, SignupResult};

/// Page global holding the API root
const API_ROOT_GLOBAL: &str = "$API_ROOT";
/// Fallback attribute on the mount element
const API_ROOT_ATTR: &str = "data-api-root";

/// Immutable settings injected into the controller
#[derive(Debug, Clone, PartialEq)]
pub struct SignupConfig {
    api_root: String,
}

impl SignupConfig {
    /// Normalize the API root. An empty root means same-origin, so the
    /// endpoint becomes the relative path `/domains`.
    pub fn new(api_root: &str) -> Self {
        Self {
            api_root: api_root.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read `$API_ROOT` from `window`, then `data-api-root` from `mount`.
    pub fn from_page(mount: Option<&web_sys::Element>) -> SignupResult<Self> {
        if let Some(root) = web_sys::window().and_then(|win| global_string(&win, API_ROOT_GLOBAL)) {
            return Ok(Self::new(&root));
        }
        mount
            .and_then(|el| el.get_attribute(API_ROOT_ATTR))
            .map(|root| Self::new(&root))
            .ok_or(SignupError::MissingApiRoot)
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// URL of the domain signup resource
    pub fn endpoint(&self) -> String {
        format!("{}/domains", self.api_root)
    }
}

fn global_string(win: &web_sys::Window, key: &str) -> Option<String> {
    js_sys::Reflect::get(win, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}
