use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Landing,
    Login,
    Register,
    Hq,
}

impl Route {
    pub(crate) fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/hq" => Route::Hq,
            _ => Route::Landing,
        }
    }

    pub(crate) fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Hq => "/hq",
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CurrentRoute(pub RwSignal<Route>);

struct PopStateBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::PopStateEvent)>,
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopStateBinding>> = const { RefCell::new(None) };
}

pub(crate) fn current_location() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Landing)
}

/// Push `to` onto the browser history and switch the rendered page.
pub(crate) fn navigate(route: RwSignal<Route>, to: Route) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
        && current_location() != to
        && let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(to.path()))
    {
        web_sys::console::warn_1(&e);
    }
    route.set(to);
}

/// Follow back/forward buttons. Re-binding replaces the previous listener.
pub(crate) fn bind_popstate(route: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    unbind_popstate();

    let handler = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_: web_sys::PopStateEvent| {
        route.set(current_location());
    });
    if window
        .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        POPSTATE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(PopStateBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}

pub(crate) fn unbind_popstate() {
    POPSTATE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "popstate",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/register/"), Route::Register);
        assert_eq!(Route::from_path("/hq"), Route::Hq);
    }

    #[test]
    fn unknown_paths_land_on_index() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/missing"), Route::Landing);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Landing, Route::Login, Route::Register, Route::Hq] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
