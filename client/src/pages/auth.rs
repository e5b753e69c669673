use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use commerce_galaxy_shared::{Credentials, Operation};

use crate::route::{self, CurrentRoute, Route};
use crate::session::{self, CurrentSession};
use crate::theme;
use crate::transport::Api;

const FIELD: &str = "padding: 8px 16px; width: 100%; box-sizing: border-box; background: #374151; color: #ffffff; border: none; border-radius: 4px;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn idle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    fn busy_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Loading...",
            AuthMode::Register => "Registering...",
        }
    }
}

/// Field-level validation; `None` when the form may be submitted.
pub(crate) fn validate(email: &str, password: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        return Some("Email is required");
    }
    if password.is_empty() {
        return Some("Password is required");
    }
    None
}

/// E-mail/password form shared by the landing, login and register pages.
/// Login stores the session and opens HQ; registration continues to login.
#[component]
pub(crate) fn AuthForm(mode: AuthMode) -> impl IntoView {
    let api: Api = expect_context();
    let CurrentSession(current_session) = expect_context();
    let CurrentRoute(current_route) = expect_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let api = StoredValue::new(api);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let credentials = Credentials {
            username: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Some(problem) = validate(&credentials.username, &credentials.password) {
            error.set(problem.to_string());
            return;
        }

        loading.set(true);
        error.set(String::new());
        let api = api.get_value();
        spawn_local(async move {
            let outcome = match mode {
                AuthMode::Login => api.login(&credentials).await.map(|session| {
                    session::sign_in(current_session, session);
                    Route::Hq
                }),
                AuthMode::Register => api.register(&credentials).await.map(|()| Route::Login),
            };
            loading.set(false);
            match outcome {
                Ok(next) => {
                    email.set(String::new());
                    password.set(String::new());
                    route::navigate(current_route, next);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("{} error: {e}", mode.idle_label()).into());
                    let operation = match mode {
                        AuthMode::Login => Operation::Login,
                        AuthMode::Register => Operation::Register,
                    };
                    error.set(e.user_message(operation));
                }
            }
        });
    };

    view! {
        <form
            on:submit=on_submit
            style="display: flex; flex-direction: column; gap: 16px; background: #1f2937; padding: 24px; border-radius: 6px;"
        >
            <div>
                <label for="email" style="display: block; font-size: 0.875rem; color: #d1d5db;">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="Email"
                    style=FIELD
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="password" style="display: block; font-size: 0.875rem; color: #d1d5db;">"Password"</label>
                <input
                    id="password"
                    type="password"
                    placeholder="Password"
                    style=FIELD
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            {move || {
                let text = error.get();
                (!text.is_empty()).then(|| view! { <p style=theme::ERROR>{text}</p> })
            }}
            <button type="submit" style=theme::button(theme::BLUE) disabled=move || loading.get()>
                {move || if loading.get() { mode.busy_label() } else { mode.idle_label() }}
            </button>
        </form>
    }
}

#[component]
pub(crate) fn LoginPage() -> impl IntoView {
    view! {
        <div style=theme::PAGE>
            <div style="max-width: 28rem; margin: 0 auto; padding-top: 15vh;">
                <h1 style="font-size: 2.25rem; font-weight: 700; text-align: center; margin-bottom: 24px;">"Login"</h1>
                <AuthForm mode=AuthMode::Login />
            </div>
        </div>
    }
}

#[component]
pub(crate) fn RegisterPage() -> impl IntoView {
    view! {
        <div style=theme::PAGE>
            <div style="max-width: 28rem; margin: 0 auto; padding-top: 15vh;">
                <h1 style="font-size: 2.25rem; font-weight: 700; text-align: center; margin-bottom: 24px;">"Register"</h1>
                <AuthForm mode=AuthMode::Register />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn requires_both_fields() {
        assert_eq!(validate("", "pw"), Some("Email is required"));
        assert_eq!(validate("  ", "pw"), Some("Email is required"));
        assert_eq!(validate("pilot@example.test", ""), Some("Password is required"));
    }

    #[test]
    fn accepts_filled_form() {
        assert_eq!(validate("pilot@example.test", "secret"), None);
    }
}
