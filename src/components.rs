//! Pure Yew view components shared by both screens.
//!
//! Nothing in here validates or stores anything; every component renders
//! from props and reports interaction through callbacks.

use crate::config::SUPPRESSED_NUMBER_KEYS;
use crate::market::{Market, ProfitType};
use yew::prelude::*;

/// Whether a numeric field should swallow `key`.
///
/// Only a typing guard: pasted or programmatic values still reach the
/// validators untouched.
pub fn suppresses_key(input_type: &str, key: &str) -> bool {
    input_type == "number" && SUPPRESSED_NUMBER_KEYS.contains(&key)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Default,
    Disabled,
    Loading,
}

impl ButtonState {
    /// Loading wins over disabled.
    pub fn from_flags(disabled: bool, loading: bool) -> Self {
        if loading {
            ButtonState::Loading
        } else if disabled {
            ButtonState::Disabled
        } else {
            ButtonState::Default
        }
    }

    pub fn interactive(self) -> bool {
        self == ButtonState::Default
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Clickable control with default, disabled and loading states.
///
/// While loading the label stays in the layout but is hidden, so the button
/// keeps its width under the spinner.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let state = ButtonState::from_flags(props.disabled, props.loading);

    let leading = match (state, props.icon.clone()) {
        (ButtonState::Loading, _) => html! { <span class="spinner" aria-hidden="true"></span> },
        (_, Some(icon)) => html! { <span class="btn-icon">{ icon }</span> },
        (_, None) => html! {},
    };

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!(props.variant.class(), props.class.clone())}
            disabled={!state.interactive()}
            aria-busy={(state == ButtonState::Loading).to_string()}
            onclick={props.onclick.clone()}
        >
            { leading }
            <span class={classes!((state == ButtonState::Loading).then_some("label-hidden"))}>
                { for props.children.iter() }
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Callback<InputEvent>,
}

/// Labeled text field with optional leading icon and inline error.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let onkeydown = {
        let input_type = props.input_type.clone();
        Callback::from(move |e: KeyboardEvent| {
            if suppresses_key(&input_type, &e.key()) {
                e.prevent_default();
            }
        })
    };

    html! {
        <div class="form-group">
            if let Some(label) = props.label.clone() {
                <label for={props.id.clone()}>{ label }</label>
            }
            <div class="input-wrapper">
                if let Some(icon) = props.icon.clone() {
                    <span class="input-icon">{ icon }</span>
                }
                <input
                    id={props.id.clone()}
                    type={props.input_type.clone()}
                    class={classes!(
                        "input-field",
                        props.icon.is_some().then_some("with-icon"),
                        props.error.is_some().then_some("invalid"),
                    )}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    min={props.min.clone()}
                    step={props.step.clone()}
                    oninput={props.oninput.clone()}
                    {onkeydown}
                />
            </div>
            if let Some(err) = props.error.clone() {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfitTypeToggleProps {
    pub selected: Option<ProfitType>,
    pub onselect: Callback<ProfitType>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(ProfitTypeToggle)]
pub fn profit_type_toggle(props: &ProfitTypeToggleProps) -> Html {
    let option = |profit_type: ProfitType, label: &'static str| {
        let active = props.selected == Some(profit_type);
        html! {
            <button
                type="button"
                class={classes!("toggle-option", active.then_some("active"))}
                onclick={props.onselect.reform(move |_: MouseEvent| profit_type)}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="profit-type">
            <div class="toggle-group">
                { option(ProfitType::Amount, "Amount ($)") }
                { option(ProfitType::Percentage, "Percentage (%)") }
            </div>
            if let Some(err) = props.error.clone() {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfitCardProps {
    pub market: Market,
    pub profit_type: Option<ProfitType>,
    pub value: AttrValue,
    #[prop_or_default]
    pub type_error: Option<AttrValue>,
    #[prop_or_default]
    pub value_error: Option<AttrValue>,
    pub onselect: Callback<ProfitType>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ProfitCard)]
pub fn profit_card(props: &ProfitCardProps) -> Html {
    html! {
        <section class="card">
            <header class="card-header">
                <span class="icon icon-dollar" aria-hidden="true"></span>
                <div>
                    <h2>{ format!("{} Profit Margin", props.market.name()) }</h2>
                    <p class="card-subtitle">{ props.market.region() }</p>
                </div>
            </header>
            <ProfitTypeToggle
                selected={props.profit_type}
                onselect={props.onselect.clone()}
                error={props.type_error.clone()}
            />
            <Input
                input_type="number"
                placeholder={AttrValue::Static(ProfitType::placeholder(props.profit_type))}
                value={props.value.clone()}
                error={props.value_error.clone()}
                min="0"
                step="0.01"
                oninput={props.oninput.clone()}
            />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RankRangeCardProps {
    pub market: Market,
    pub min: AttrValue,
    pub max: AttrValue,
    #[prop_or_default]
    pub min_error: Option<AttrValue>,
    #[prop_or_default]
    pub max_error: Option<AttrValue>,
    pub oninput_min: Callback<InputEvent>,
    pub oninput_max: Callback<InputEvent>,
}

#[function_component(RankRangeCard)]
pub fn rank_range_card(props: &RankRangeCardProps) -> Html {
    html! {
        <section class="card">
            <header class="card-header">
                <span class="icon icon-trend" aria-hidden="true"></span>
                <div>
                    <h2>{ format!("{} Rank Range", props.market.name()) }</h2>
                    <p class="card-subtitle">{ format!("Amazon {} sales rank", props.market.name()) }</p>
                </div>
            </header>
            <div class="form-row">
                <Input
                    input_type="number"
                    label="Min Rank"
                    placeholder="e.g., 10000"
                    value={props.min.clone()}
                    error={props.min_error.clone()}
                    min="0"
                    step="1"
                    oninput={props.oninput_min.clone()}
                />
                <Input
                    input_type="number"
                    label="Max Rank"
                    placeholder="e.g., 30000"
                    value={props.max.clone()}
                    error={props.max_error.clone()}
                    min="0"
                    step="1"
                    oninput={props.oninput_max.clone()}
                />
            </div>
        </section>
    }
}
