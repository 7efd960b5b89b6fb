use crate::auth::{AuthField, CredentialsDraft};
use crate::market::{ConfigField, MarketConfig};
use crate::validation::ErrorMap;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A form draft that can be edited field by field.
pub trait FormDraft: Clone + Default + PartialEq + 'static {
    type Field: Copy + Ord + 'static;

    fn set_field(&mut self, field: Self::Field, value: String);
}

impl FormDraft for CredentialsDraft {
    type Field = AuthField;

    fn set_field(&mut self, field: AuthField, value: String) {
        CredentialsDraft::set_field(self, field, value);
    }
}

impl FormDraft for MarketConfig {
    type Field = ConfigField;

    fn set_field(&mut self, field: ConfigField, value: String) {
        MarketConfig::set_field(self, field, value);
    }
}

/// Holds a draft, its last validation result, and the callbacks that edit them.
#[derive(Clone)]
pub struct FormHandle<D: FormDraft> {
    /// The current draft.
    pub draft: D,
    /// Errors from the most recent submit. Not cleared by edits.
    pub errors: Rc<ErrorMap<D::Field>>,
    /// Overwrite a single field with new text.
    pub set_field: Callback<(D::Field, String)>,
    /// Swap in a whole new draft and drop any shown errors.
    pub replace: Callback<D>,
    /// Publish the outcome of a validation pass; an empty map clears the form.
    pub set_errors: Callback<ErrorMap<D::Field>>,
}

impl<D: FormDraft> FormHandle<D> {
    pub fn error(&self, field: D::Field) -> Option<AttrValue> {
        self.errors.get(&field).cloned().map(AttrValue::from)
    }

    /// `oninput` handler that copies the element's value into `field`.
    pub fn text_input(&self, field: D::Field) -> Callback<InputEvent> {
        self.set_field.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    }
}

/// Custom hook to manage a form draft and its error map.
#[hook]
pub fn use_form<D: FormDraft>() -> FormHandle<D> {
    let draft_handle: UseStateHandle<D> = use_state(D::default);
    let errors_handle: UseStateHandle<Rc<ErrorMap<D::Field>>> =
        use_state(|| Rc::new(ErrorMap::new()));

    let set_field = {
        let draft_handle = draft_handle.clone();
        Callback::from(move |(field, value): (D::Field, String)| {
            let mut next = (*draft_handle).clone();
            next.set_field(field, value);
            draft_handle.set(next);
        })
    };

    let replace = {
        let draft_handle = draft_handle.clone();
        let errors_handle = errors_handle.clone();
        Callback::from(move |next: D| {
            draft_handle.set(next);
            errors_handle.set(Rc::new(ErrorMap::new()));
        })
    };

    let set_errors = {
        let errors_handle = errors_handle.clone();
        Callback::from(move |errors: ErrorMap<D::Field>| {
            errors_handle.set(Rc::new(errors));
        })
    };

    FormHandle {
        draft: (*draft_handle).clone(),
        errors: (*errors_handle).clone(),
        set_field,
        replace,
        set_errors,
    }
}
