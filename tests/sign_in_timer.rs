#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use market_console::{
    prepare_auth, submit_auth, AuthField, AuthMode, CredentialsDraft, PendingSignIn,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn valid_draft() -> CredentialsDraft {
    CredentialsDraft {
        email: "a@b.com".into(),
        password: "123456".into(),
        ..Default::default()
    }
}

fn started(delay_ms: u32) -> (PendingSignIn, Rc<Cell<bool>>) {
    let fired = Rc::new(Cell::new(false));
    let request = prepare_auth(&valid_draft()).unwrap();
    let flag = fired.clone();
    let pending = PendingSignIn::start(request, delay_ms, move |_| flag.set(true));
    (pending, fired)
}

#[wasm_bindgen_test]
async fn pending_sign_in_completes() {
    let (_pending, fired) = started(10);
    assert!(!fired.get());
    TimeoutFuture::new(50).await;
    assert!(fired.get());
}

#[wasm_bindgen_test]
async fn cancelled_sign_in_never_fires() {
    let (pending, fired) = started(10);
    pending.cancel();
    TimeoutFuture::new(50).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn dropped_sign_in_never_fires() {
    let (pending, fired) = started(10);
    drop(pending);
    TimeoutFuture::new(50).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn submit_resolves_with_request() {
    let mut draft = valid_draft();
    draft.mode = AuthMode::SignUp;
    draft.confirm_password = "123456".into();
    let request = submit_auth(&draft).await.unwrap();
    assert_eq!(request.endpoint(), "/api/auth/signup");
    assert_eq!(request.email, "a@b.com");
}

#[wasm_bindgen_test]
async fn submit_rejects_invalid_draft() {
    let mut draft = valid_draft();
    draft.email = "bad".into();
    let errors = submit_auth(&draft).await.unwrap_err();
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![AuthField::Email]);
}
