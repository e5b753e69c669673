use leptos::prelude::*;

use crate::pages::auth::{AuthForm, AuthMode};
use crate::route::{self, CurrentRoute, Route};
use crate::theme;

#[component]
pub(crate) fn LandingPage() -> impl IntoView {
    let CurrentRoute(current_route) = expect_context();

    view! {
        <div style=theme::PAGE>
            <header style="text-align: center; padding: 24px 0;">
                <h1 style="font-size: 2.25rem; font-weight: 700; margin: 0 0 8px;">"Commerce Galaxy"</h1>
                <p style="font-size: 1.125rem; margin: 0;">"The ultimate space trading game"</p>
            </header>
            <main style="display: flex; flex-direction: column; align-items: center; padding: 0 16px;">
                <p style="max-width: 28rem; text-align: center; margin-bottom: 24px;">
                    "Join the universe of intergalactic commerce. Trade goods, join trade associations, and dominate the galaxy!"
                </p>
                <AuthForm mode=AuthMode::Login />
                <button
                    type="button"
                    style=format!("{} margin-top: 16px;", theme::button(theme::GREEN))
                    on:click=move |_| route::navigate(current_route, Route::Register)
                >
                    "Register"
                </button>
            </main>
        </div>
    }
}
