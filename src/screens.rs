//! The two screens: sign-in/sign-up and the market configuration dashboard.

use crate::auth::{prepare_auth, AuthField, AuthMode, CredentialsDraft, PendingSignIn};
use crate::components::{Button, ButtonVariant, Input, ProfitCard, RankRangeCard};
use crate::config::SIGN_IN_DELAY_MS;
use crate::hooks::use_form;
use crate::market::{save_config, ConfigField, Market, MarketConfig, ProfitType, SaveError};
use log::{debug, warn};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_auth_success: Callback<()>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let form = use_form::<CredentialsDraft>();
    let loading = use_state(|| false);
    let pending = use_mut_ref(|| None::<PendingSignIn>);

    // Tearing the screen down cancels any sign-in still waiting on its timer.
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(sign_in) = pending.borrow_mut().take() {
                    sign_in.cancel();
                }
            }
        });
    }

    let onsubmit = {
        let draft = form.draft.clone();
        let set_errors = form.set_errors.clone();
        let loading = loading.clone();
        let pending = pending.clone();
        let on_auth_success = props.on_auth_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            match prepare_auth(&draft) {
                Ok(request) => {
                    set_errors.emit(Default::default());
                    loading.set(true);
                    let loading = loading.clone();
                    let on_auth_success = on_auth_success.clone();
                    let sign_in = PendingSignIn::start(request, SIGN_IN_DELAY_MS, move |_| {
                        loading.set(false);
                        on_auth_success.emit(());
                    });
                    *pending.borrow_mut() = Some(sign_in);
                }
                Err(errors) => set_errors.emit(errors),
            }
        })
    };

    let toggle_mode = {
        let draft = form.draft.clone();
        let replace = form.replace.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = draft.clone();
            next.toggle_mode();
            debug!("auth mode -> {:?}", next.mode);
            replace.emit(next);
        })
    };

    let signing_in = form.draft.mode == AuthMode::SignIn;

    html! {
        <div class="auth-screen">
            <div class="card auth-card">
                <div class="auth-header">
                    <span class="icon icon-sparkles" aria-hidden="true"></span>
                    <h1>{ if signing_in { "Welcome Back" } else { "Create Account" } }</h1>
                    <p class="subtitle">
                        { if signing_in { "Sign in to continue" } else { "Start your journey today" } }
                    </p>
                </div>

                <form class="auth-form" {onsubmit}>
                    <Input
                        id="email"
                        input_type="email"
                        label="Email Address"
                        placeholder="you@example.com"
                        value={form.draft.email.clone()}
                        error={form.error(AuthField::Email)}
                        icon={html! { <span class="icon icon-mail" aria-hidden="true"></span> }}
                        oninput={form.text_input(AuthField::Email)}
                    />
                    <Input
                        id="password"
                        input_type="password"
                        label="Password"
                        placeholder="••••••••"
                        value={form.draft.password.clone()}
                        error={form.error(AuthField::Password)}
                        icon={html! { <span class="icon icon-lock" aria-hidden="true"></span> }}
                        oninput={form.text_input(AuthField::Password)}
                    />
                    if !signing_in {
                        <Input
                            id="confirm-password"
                            input_type="password"
                            label="Confirm Password"
                            placeholder="••••••••"
                            value={form.draft.confirm_password.clone()}
                            error={form.error(AuthField::ConfirmPassword)}
                            icon={html! { <span class="icon icon-lock" aria-hidden="true"></span> }}
                            oninput={form.text_input(AuthField::ConfirmPassword)}
                        />
                    }
                    <Button button_type="submit" loading={*loading} class="submit">
                        { if signing_in { "Sign In" } else { "Sign Up" } }
                    </Button>
                </form>

                <p class="auth-toggle">
                    { if signing_in { "Don't have an account?" } else { "Already have an account?" } }
                    <button type="button" class="link-button" onclick={toggle_mode}>
                        { if signing_in { "Sign Up" } else { "Sign In" } }
                    </button>
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardScreenProps {
    pub on_logout: Callback<()>,
}

#[function_component(DashboardScreen)]
pub fn dashboard_screen(props: &DashboardScreenProps) -> Html {
    let form = use_form::<MarketConfig>();

    let onsave = {
        let draft = form.draft.clone();
        let set_errors = form.set_errors.clone();
        Callback::from(move |_: MouseEvent| match save_config(&draft) {
            Ok(_) => set_errors.emit(Default::default()),
            Err(SaveError::Invalid(errors)) => set_errors.emit(errors),
            Err(err) => warn!("{}", err),
        })
    };

    let profit_card = |market: Market| {
        let select = form.set_field.reform(move |profit_type: ProfitType| {
            (ConfigField::profit_type(market), profit_type.as_str().to_string())
        });
        let value_field = ConfigField::profit_value(market);
        html! {
            <ProfitCard
                {market}
                profit_type={form.draft.profit_type(market)}
                value={AttrValue::from(form.draft.field(value_field).to_string())}
                type_error={form.error(ConfigField::profit_type(market))}
                value_error={form.error(value_field)}
                onselect={select}
                oninput={form.text_input(value_field)}
            />
        }
    };

    let rank_card = |market: Market| {
        let min_field = ConfigField::rank_min(market);
        let max_field = ConfigField::rank_max(market);
        html! {
            <RankRangeCard
                {market}
                min={AttrValue::from(form.draft.field(min_field).to_string())}
                max={AttrValue::from(form.draft.field(max_field).to_string())}
                min_error={form.error(min_field)}
                max_error={form.error(max_field)}
                oninput_min={form.text_input(min_field)}
                oninput_max={form.text_input(max_field)}
            />
        }
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{ "Market Configuration" }</h1>
                    <p class="subtitle">{ "Set your profit margins and rank ranges" }</p>
                </div>
                <Button
                    variant={ButtonVariant::Secondary}
                    icon={html! { <span class="icon icon-logout" aria-hidden="true"></span> }}
                    onclick={props.on_logout.reform(|_: MouseEvent| ())}
                >
                    { "Logout" }
                </Button>
            </header>

            <div class="config-grid">
                { profit_card(Market::Us) }
                { profit_card(Market::Ca) }
                { rank_card(Market::Us) }
                { rank_card(Market::Ca) }
            </div>

            <div class="save-row">
                <Button onclick={onsave} class="save">
                    { "Save Configuration" }
                </Button>
            </div>
        </div>
    }
}
