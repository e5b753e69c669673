use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use commerce_galaxy_shared::{
    ApiError, Base, Building, CatalogItem, Collection, Operation, Planet, Recipe, Selection,
    Session,
};

use crate::transport::Api;

/// Everything the HQ sections share: fetched collections, the drill-down
/// selection and the page-level message line.
#[derive(Clone, Copy)]
pub(crate) struct HqStore {
    pub api: StoredValue<Api>,
    pub session: RwSignal<Option<Session>>,
    pub planets: RwSignal<Collection<Planet>>,
    pub bases: RwSignal<Collection<Base>>,
    pub buildings: RwSignal<Collection<Building>>,
    pub catalogs: RwSignal<Collection<CatalogItem>>,
    pub recipes: RwSignal<Collection<Recipe>>,
    pub selection: RwSignal<Selection>,
    pub message: RwSignal<Option<String>>,
}

impl HqStore {
    pub(crate) fn new(api: Api, session: RwSignal<Option<Session>>) -> Self {
        Self {
            api: StoredValue::new(api),
            session,
            planets: RwSignal::new(Collection::default()),
            bases: RwSignal::new(Collection::default()),
            buildings: RwSignal::new(Collection::default()),
            catalogs: RwSignal::new(Collection::default()),
            recipes: RwSignal::new(Collection::default()),
            selection: RwSignal::new(Selection::default()),
            message: RwSignal::new(None),
        }
    }

    pub(crate) fn refresh_all(self) {
        self.refresh_planets();
        self.refresh_bases();
        self.refresh_buildings();
        self.refresh_catalogs();
        self.refresh_recipes();
    }

    pub(crate) fn refresh_planets(self) {
        let (api, session) = self.handles();
        refresh(self.planets, self.message, Operation::FetchPlanets, async move {
            api.planets(session.as_ref()).await
        });
    }

    pub(crate) fn refresh_bases(self) {
        let (api, session) = self.handles();
        refresh(self.bases, self.message, Operation::FetchBases, async move {
            api.bases(session.as_ref()).await
        });
    }

    pub(crate) fn refresh_buildings(self) {
        let (api, session) = self.handles();
        refresh(self.buildings, self.message, Operation::FetchBuildings, async move {
            api.buildings(session.as_ref()).await
        });
    }

    pub(crate) fn refresh_catalogs(self) {
        let (api, session) = self.handles();
        refresh(self.catalogs, self.message, Operation::FetchCatalogs, async move {
            api.catalogs(session.as_ref()).await
        });
    }

    pub(crate) fn refresh_recipes(self) {
        let (api, session) = self.handles();
        refresh(self.recipes, self.message, Operation::FetchRecipes, async move {
            api.recipes(session.as_ref()).await
        });
    }

    /// Snapshot of the API client and session for use inside a future.
    pub(crate) fn handles(self) -> (Api, Option<Session>) {
        (self.api.get_value(), self.session.get_untracked())
    }

    pub(crate) fn clear(self) {
        self.planets.update(Collection::clear);
        self.bases.update(Collection::clear);
        self.buildings.update(Collection::clear);
        self.catalogs.update(Collection::clear);
        self.recipes.update(Collection::clear);
        self.selection.set(Selection::default());
    }

    /// Drop selections whose target disappeared in the last refresh.
    pub(crate) fn prune_selection(self) {
        let mut next = self.selection.get_untracked();
        self.bases.with_untracked(|bases| {
            if bases.is_loaded() {
                next.retain_bases(bases.items());
            }
        });
        self.buildings.with_untracked(|buildings| {
            if buildings.is_loaded() {
                next.retain_buildings(buildings.items());
            }
        });
        if next != self.selection.get_untracked() {
            self.selection.set(next);
        }
    }
}

fn refresh<T, F>(
    collection: RwSignal<Collection<T>>,
    message: RwSignal<Option<String>>,
    operation: Operation,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(ticket) = collection.try_update(Collection::begin_refresh) else {
        return;
    };
    spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            web_sys::console::warn_1(&format!("{operation:?} failed: {e}").into());
        }
        let failure = collection
            .try_update(|items| items.apply(ticket, result, operation))
            .flatten();
        if let Some(text) = failure {
            message.set(Some(text));
        }
    });
}

/// Run a write against the API, then report through `message`.
/// `on_success` runs only after the server accepted the write.
pub(crate) fn mutate<F>(
    message: RwSignal<Option<String>>,
    operation: Operation,
    call: F,
    on_success: impl FnOnce() + 'static,
) where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    spawn_local(async move {
        match call.await {
            Ok(()) => {
                message.set(operation.success_message().map(str::to_string));
                on_success();
            }
            Err(e) => {
                if !matches!(e, ApiError::MissingAuth | ApiError::MissingSelection(_)) {
                    web_sys::console::error_1(&format!("{operation:?} failed: {e}").into());
                }
                message.set(Some(e.user_message(operation)));
            }
        }
    });
}
