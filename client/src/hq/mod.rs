mod bases;
mod buildings;
mod planets;
mod recipes;
mod store;

use leptos::prelude::*;

use crate::route::{self, CurrentRoute, Route};
use crate::session::{self, CurrentSession};
use crate::theme;
use crate::transport::Api;
use bases::BaseSection;
use buildings::BuildingSection;
use planets::PlanetSection;
use recipes::RecipeSection;
use store::HqStore;

const LOGIN_REQUIRED_MESSAGE: &str = "No auth token found. Please login.";

/// The dashboard. Requires a session; without one it reports and sends the
/// player to the login page.
#[component]
pub(crate) fn HqPage() -> impl IntoView {
    let api: Api = expect_context();
    let CurrentSession(current_session) = expect_context();
    let CurrentRoute(current_route) = expect_context();

    let store = HqStore::new(api, current_session);
    provide_context(store);

    if current_session.with_untracked(Option::is_some) {
        store.refresh_all();
    }

    Effect::new(move || {
        if current_session.with(Option::is_none) && current_route.get_untracked() == Route::Hq {
            web_sys::console::warn_1(&LOGIN_REQUIRED_MESSAGE.into());
            route::navigate(current_route, Route::Login);
        }
    });

    // A refresh can remove the selected base or building out from under us.
    Effect::new(move || {
        store.bases.track();
        store.buildings.track();
        store.prune_selection();
    });

    let logout = move |_: leptos::ev::MouseEvent| {
        session::sign_out(current_session);
        store.clear();
        route::navigate(current_route, Route::Landing);
    };

    view! {
        <div style=theme::PAGE>
            <div style="max-width: 72rem; margin: 0 auto; padding: 24px 16px;">
                <header style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                    <h1 style="font-size: 2.25rem; font-weight: 700; margin: 0;">"HQ"</h1>
                    <Show when=move || current_session.with(Option::is_some)>
                        <button style=theme::button(theme::GRAY) on:click=logout>"Logout"</button>
                    </Show>
                </header>
                <Show
                    when=move || current_session.with(Option::is_some)
                    fallback=|| view! { <p>{LOGIN_REQUIRED_MESSAGE}</p> }
                >
                    <p style="margin-bottom: 24px;">"Welcome! You are logged in!"</p>
                    <PlanetSection />
                    <BaseSection />
                    <BuildingSection />
                    <RecipeSection />
                </Show>
                {move || store.message.get().map(|text| view! { <p style=theme::MESSAGE>{text}</p> })}
            </div>
        </div>
    }
}
