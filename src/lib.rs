//! Market Console: sign-in and per-market pricing configuration for the browser.
//!
//! The forms themselves live in [`screens`]; their rules live in [`auth`] and
//! [`market`] as plain functions over plain drafts, so they can be exercised
//! without a DOM. The same rules are exported to JavaScript below.

use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod market;
pub mod screens;
pub mod validation;

pub use auth::{
    prepare_auth, submit_auth, validate_auth, AuthField, AuthMode, AuthRequest, CredentialsDraft,
    PendingSignIn,
};
pub use market::{
    save_config, validate_config, ConfigField, Market, MarketConfig, ProfitType, SaveError,
};
pub use validation::{ErrorMap, FieldError, Rank};

/// Failures crossing the JS/WASM boundary.
#[derive(Debug)]
pub enum BridgeError {
    /// The value handed in from JavaScript did not have the draft's shape.
    Decode(String),
    /// A result could not be turned back into a JS value.
    Encode(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Decode(e) => write!(f, "Failed to read draft: {}", e),
            BridgeError::Encode(e) => write!(f, "Failed to encode result: {}", e),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<BridgeError> for JsValue {
    fn from(e: BridgeError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, BridgeError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Decode(e.to_string()))
}

/// Plain objects, not `Map`s, so error maps read naturally from JS.
fn encode<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, BridgeError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BridgeError::Encode(e.to_string()))
}

/// Validate a credentials draft from JavaScript. Returns a `{ field: message }` object.
#[wasm_bindgen(js_name = validateAuth)]
pub fn validate_auth_js(draft: JsValue) -> Result<JsValue, JsValue> {
    let draft: CredentialsDraft = decode(draft)?;
    Ok(encode(&validate_auth(&draft))?)
}

/// Validate a market configuration draft from JavaScript.
#[wasm_bindgen(js_name = validateConfig)]
pub fn validate_config_js(draft: JsValue) -> Result<JsValue, JsValue> {
    let draft: MarketConfig = decode(draft)?;
    Ok(encode(&validate_config(&draft))?)
}

/// Simulated sign-in. The promise resolves after the fixed delay, or rejects
/// straight away with the error map.
#[wasm_bindgen(js_name = submitAuth)]
pub async fn submit_auth_js(draft: JsValue) -> Result<(), JsValue> {
    let draft: CredentialsDraft = decode(draft)?;
    match submit_auth(&draft).await {
        Ok(_) => Ok(()),
        Err(errors) => Err(encode(&errors)?),
    }
}

/// Save a configuration. Returns the JSON body that would be posted, or
/// throws the error map.
#[wasm_bindgen(js_name = saveConfig)]
pub fn save_config_js(draft: JsValue) -> Result<String, JsValue> {
    let draft: MarketConfig = decode(draft)?;
    match save_config(&draft) {
        Ok(body) => Ok(body),
        Err(SaveError::Invalid(errors)) => Err(encode(&errors)?),
        Err(SaveError::Encode(e)) => Err(BridgeError::Encode(e).into()),
    }
}
