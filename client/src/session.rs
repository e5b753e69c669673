use gloo_storage::{SessionStorage, Storage};
use leptos::prelude::*;

use commerce_galaxy_shared::Session;

const SESSION_KEY: &str = "commerce_galaxy_session";

/// Logged-in player, or `None`. Seeded from session storage at boot.
#[derive(Clone, Copy)]
pub(crate) struct CurrentSession(pub RwSignal<Option<Session>>);

pub(crate) fn load() -> Option<Session> {
    SessionStorage::get::<Session>(SESSION_KEY)
        .ok()
        .filter(|session| !session.token.is_empty())
}

pub(crate) fn store(session: &Session) {
    if let Err(e) = SessionStorage::set(SESSION_KEY, session) {
        web_sys::console::warn_1(&format!("Could not persist session: {e}").into());
    }
}

pub(crate) fn clear() {
    SessionStorage::delete(SESSION_KEY);
}

/// Save and publish a fresh session.
pub(crate) fn sign_in(current: RwSignal<Option<Session>>, session: Session) {
    store(&session);
    current.set(Some(session));
}

pub(crate) fn sign_out(current: RwSignal<Option<Session>>) {
    clear();
    current.set(None);
}
