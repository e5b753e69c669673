use leptos::prelude::*;

use commerce_galaxy_shared::ApiClient;

use crate::config::ClientConfig;
use crate::hq::HqPage;
use crate::pages::{LandingPage, LoginPage, RegisterPage};
use crate::route::{self, CurrentRoute, Route};
use crate::session::{self, CurrentSession};
use crate::transport::HttpTransport;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let current_route: RwSignal<Route> = RwSignal::new(route::current_location());
    let current_session = RwSignal::new(session::load());

    provide_context(CurrentRoute(current_route));
    provide_context(CurrentSession(current_session));
    provide_context(ApiClient::new(HttpTransport::new(config.api_base_url)));

    Effect::new(move || {
        route::bind_popstate(current_route);
        on_cleanup(|| {
            route::unbind_popstate();
        });
    });

    move || match current_route.get() {
        Route::Landing => view! { <LandingPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::Hq => view! { <HqPage /> }.into_any(),
    }
}
