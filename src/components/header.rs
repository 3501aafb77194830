//! Top app bar with the title and the single login/logout action.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::wallet::WalletSession;
use crate::routes::AppRoute;
use crate::state::session::SessionState;

/// Header bar.
///
/// The button label and its delegate come from the session captured at
/// mount; clicking never updates local state, the wallet reloads the page.
#[component]
pub fn AppHeader(session: SessionState, wallet: Arc<dyn WalletSession>) -> impl IntoView {
    let location = use_location();
    let action = session.action();

    let on_action = move |_| action.dispatch(&*wallet);

    let home_current = move || (AppRoute::resolve(&location.pathname.get()) == Some(AppRoute::Home)).then_some("page");

    view! {
        <header class="app-bar">
            <button class="app-bar__menu" aria-label="menu">
                "\u{2630}"
            </button>
            <a href=AppRoute::Home.path() class="app-bar__title" aria-current=home_current>
                <h3>"Q&A on NEAR"</h3>
            </a>
            <span class="app-bar__spacer"></span>
            {session.account_id.map(|id| view! { <span class="app-bar__account">{id}</span> })}
            <button class="btn app-bar__action" on:click=on_action>
                {action.label()}
            </button>
        </header>
    }
}
