//! Entry point for the Market Console app.
//! Switches between the auth and dashboard screens on an `authenticated` flag.

use log::info;
use market_console::logging;
use market_console::screens::{AuthScreen, DashboardScreen};
use yew::prelude::*;

/// Root component. There is no router: the flag alone decides which screen
/// is shown, so an unauthenticated visitor always lands on the auth screen.
#[function_component]
pub fn App() -> Html {
    let authenticated = use_state(|| false);

    let on_auth_success = {
        let authenticated = authenticated.clone();
        Callback::from(move |_: ()| {
            info!("signed in");
            authenticated.set(true);
        })
    };

    let on_logout = {
        let authenticated = authenticated.clone();
        Callback::from(move |_: ()| {
            info!("signed out");
            authenticated.set(false);
        })
    };

    html! {
        <main class="app">
            if *authenticated {
                <DashboardScreen {on_logout} />
            } else {
                <AuthScreen {on_auth_success} />
            }
        </main>
    }
}

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
