#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use market_console::{save_config_js, validate_auth_js, validate_config_js};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn object(pairs: &[(&str, &str)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (k, v) in pairs {
        Reflect::set(&obj, &JsValue::from_str(k), &JsValue::from_str(v)).unwrap();
    }
    obj.into()
}

fn keys(value: &JsValue) -> Vec<String> {
    let mut keys: Vec<String> = js_sys::Object::keys::<JsValue>(value.unchecked_ref())
        .iter()
        .filter_map(|k| k.as_string())
        .collect();
    keys.sort();
    keys
}

#[wasm_bindgen_test]
fn auth_errors_come_back_as_plain_object() {
    let errors = validate_auth_js(object(&[("email", "bad"), ("password", "123456")])).unwrap();
    assert_eq!(keys(&errors), vec!["email"]);
    let msg = Reflect::get(&errors, &JsValue::from_str("email")).unwrap();
    assert_eq!(msg.as_string().as_deref(), Some("Email is invalid"));
}

#[wasm_bindgen_test]
fn sign_up_mode_is_read_from_js() {
    let errors = validate_auth_js(object(&[("mode", "signUp")])).unwrap();
    assert_eq!(keys(&errors), vec!["confirmPassword", "email", "password"]);
}

#[wasm_bindgen_test]
fn empty_config_reports_all_fields() {
    let errors = validate_config_js(js_sys::Object::new().into()).unwrap();
    assert_eq!(keys(&errors).len(), 8);
}

#[wasm_bindgen_test]
fn save_returns_json_body() {
    let body = save_config_js(object(&[
        ("usProfitType", "amount"),
        ("usProfitValue", "150"),
        ("caProfitType", "percentage"),
        ("caProfitValue", "12.5"),
        ("usRankMin", "100"),
        ("usRankMax", "500"),
        ("caRankMin", "100"),
        ("caRankMax", "100"),
    ]))
    .unwrap();
    assert!(body.contains("\"usProfitValue\":\"150\""));
}

#[wasm_bindgen_test]
fn malformed_draft_is_a_bridge_error() {
    let err = validate_config_js(JsValue::from_f64(3.0)).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Failed to read draft"));
}
