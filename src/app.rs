//! Application shell: header plus routed content.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::header::AppHeader;
use crate::context::AppContext;
use crate::pages::{detail::DetailQuestionPage, home::HomePage};
use crate::routes::AppRoute;
use crate::state::session::SessionState;

/// Root application component.
///
/// Reads the wallet's signed-in status once, here, and provides the session
/// snapshot and the startup context to the pages.
#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_meta_context();

    let session = SessionState::capture(&*ctx.wallet, ctx.account_id.clone());
    log::info!("shell mounted (signed in: {})", session.signed_in);

    let wallet = ctx.wallet.clone();
    provide_context(session.clone());
    provide_context(ctx);

    view! {
        <Title text="Q&A on NEAR"/>

        <Router>
            <AppHeader session wallet/>
            <main class="content">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(AppRoute::Detail.segment()) view=DetailQuestionPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    log::warn!("no route for {}", location.pathname.get_untracked());

    view! { <p class="not-found">"Page not found."</p> }
}
