//! Writes against a single building.
//!
//! A [`BuildingEdit`] carries the request body together with the building as it
//! will look once the server accepts it. The local collection only changes in
//! [`BuildingEdit::settle`] on success, and an [`EditGate`] keeps one write in
//! flight at a time.

use chrono::{DateTime, Utc};

use crate::api::{ApiClient, Transport};
use crate::collection::Collection;
use crate::error::{ApiError, Operation};
use crate::model::{Building, BuildingUpdate, Recipe, Session};
use crate::queue::{self, Direction};

pub const ALREADY_PRODUCING_MESSAGE: &str =
    "This building is already producing. Add the recipe to the queue instead.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingEdit {
    pub update: BuildingUpdate,
    pub confirmed: Building,
}

impl BuildingEdit {
    fn queued(building: &Building, next: Vec<Recipe>) -> Self {
        let update = BuildingUpdate::queue(queue::ids(&next));
        let mut confirmed = building.clone();
        confirmed.queue = next;
        Self { update, confirmed }
    }

    pub fn append(building: &Building, recipe: &Recipe) -> Self {
        Self::queued(building, queue::appended(&building.queue, recipe))
    }

    /// `None` at the queue boundaries, so nothing is sent.
    pub fn move_item(building: &Building, index: usize, direction: Direction) -> Option<Self> {
        queue::moved(&building.queue, index, direction).map(|next| Self::queued(building, next))
    }

    pub fn remove_item(building: &Building, index: usize) -> Option<Self> {
        queue::removed(&building.queue, index).map(|next| Self::queued(building, next))
    }

    /// Refused while the building is still producing something else.
    pub fn start(building: &Building, recipe: &Recipe, now: DateTime<Utc>) -> Result<Self, &'static str> {
        if !building.is_idle() {
            return Err(ALREADY_PRODUCING_MESSAGE);
        }
        let mut confirmed = building.clone();
        confirmed.producing = Some(recipe.clone());
        confirmed.start_time = Some(now);
        Ok(Self {
            update: BuildingUpdate::start(&recipe.id, now),
            confirmed,
        })
    }

    pub fn cancel(building: &Building) -> Self {
        let mut confirmed = building.clone();
        confirmed.producing = None;
        confirmed.start_time = None;
        Self {
            update: BuildingUpdate::cancel_production(),
            confirmed,
        }
    }

    pub fn building_id(&self) -> &str {
        &self.confirmed.id
    }

    pub async fn send<T: Transport>(
        &self,
        api: &ApiClient<T>,
        session: Option<&Session>,
    ) -> Result<(), ApiError> {
        api.update_building(session, self.building_id(), &self.update)
            .await
    }

    /// Commit on success, leave `buildings` as the server last confirmed it on
    /// failure. Returns the message to show either way.
    pub fn settle(self, buildings: &mut Collection<Building>, result: Result<(), ApiError>) -> String {
        match result {
            Ok(()) => {
                let Self { confirmed, .. } = self;
                let id = confirmed.id.clone();
                buildings.patch(|b| b.id == id, move |b| *b = confirmed);
                Operation::UpdateBuilding
                    .success_message()
                    .unwrap_or_default()
                    .to_string()
            }
            Err(e) => e.user_message(Operation::UpdateBuilding),
        }
    }
}

/// Admits one building write at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditGate {
    in_flight: bool,
}

impl EditGate {
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// `false` while another write is pending; the caller must then send nothing.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::api::RawResponse;
    use crate::api::testing::{ScriptedTransport, ok};
    use crate::model::{BaseRef, CatalogItem, NamedRef};

    fn session() -> Session {
        Session {
            token: "tok".into(),
            user_id: "u1".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn catalog() -> CatalogItem {
        CatalogItem {
            id: "c1".into(),
            name: "Smelter".into(),
            size: 4,
            kind: "industry".into(),
        }
    }

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            name: format!("Recipe {id}"),
            symbol: String::new(),
            time: 600,
            amount: 1,
            kind: "metal".into(),
            resource: NamedRef {
                id: "res".into(),
                name: "Ore".into(),
            },
            catalog: catalog(),
        }
    }

    fn building(queue: &[&str]) -> Building {
        Building {
            id: "b1".into(),
            catalog: catalog(),
            base: BaseRef {
                id: "base1".into(),
                name: "Outpost".into(),
            },
            producing: None,
            start_time: None,
            queue: queue.iter().map(|id| recipe(id)).collect(),
        }
    }

    fn loaded(building: Building) -> Collection<Building> {
        let mut buildings = Collection::default();
        let ticket = buildings.begin_refresh();
        buildings.apply(ticket, Ok(vec![building]), Operation::FetchBuildings);
        buildings
    }

    fn queue_of(buildings: &Collection<Building>) -> Vec<String> {
        queue::ids(&buildings.items()[0].queue)
    }

    #[test]
    fn confirmed_append_commits_the_new_queue() {
        let mut buildings = loaded(building(&[]));
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok("{}")]));

        let edit = BuildingEdit::append(&buildings.items()[0].clone(), &recipe("r1"));
        let result = block_on(edit.send(&api, Some(&session())));
        let message = edit.settle(&mut buildings, result);

        assert_eq!(message, "Building updated successfully.");
        assert_eq!(queue_of(&buildings), vec!["r1"]);
        let sent = api.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/buildings/b1");
        assert_eq!(sent[0].body, Some(json!({ "queue": ["r1"] })));
    }

    #[test]
    fn failed_write_leaves_last_confirmed_queue() {
        let mut buildings = loaded(building(&["a", "b"]));
        let api = ApiClient::new(ScriptedTransport::replying(vec![Ok(RawResponse {
            status: 500,
            body: String::new(),
        })]));

        let edit = BuildingEdit::move_item(&buildings.items()[0].clone(), 0, Direction::Down)
            .expect("swap is possible");
        let result = block_on(edit.send(&api, Some(&session())));
        let message = edit.settle(&mut buildings, result);

        assert_eq!(message, "Failed to update building.");
        assert_eq!(queue_of(&buildings), vec!["a", "b"]);
    }

    #[test]
    fn second_edit_while_pending_sends_nothing() {
        let buildings = loaded(building(&["a"]));
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok("{}"), ok("{}")]));
        let mut gate = EditGate::default();
        let current = buildings.items()[0].clone();

        assert!(gate.try_begin());
        let first = BuildingEdit::append(&current, &recipe("r1"));
        let first_session = session();
        let pending = first.send(&api, Some(&first_session));

        let second = BuildingEdit::append(&current, &recipe("r2"));
        if gate.try_begin() {
            block_on(second.send(&api, Some(&session()))).unwrap();
        }

        block_on(pending).unwrap();
        gate.finish();
        assert_eq!(api.transport().sent.borrow().len(), 1);
        assert!(!gate.is_busy());
        assert!(gate.try_begin());
    }

    #[test]
    fn start_on_producing_building_is_refused_before_sending() {
        let mut producing = building(&[]);
        producing.producing = Some(recipe("r0"));
        producing.start_time = Some(now());

        let refused = BuildingEdit::start(&producing, &recipe("r1"), now());
        assert_eq!(refused, Err(ALREADY_PRODUCING_MESSAGE));
    }

    #[test]
    fn start_on_idle_building_commits_producing_and_start_time() {
        let mut buildings = loaded(building(&[]));
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok("{}")]));

        let edit = BuildingEdit::start(&buildings.items()[0].clone(), &recipe("r1"), now())
            .expect("idle building accepts a start");
        let result = block_on(edit.send(&api, Some(&session())));
        edit.settle(&mut buildings, result);

        let committed = &buildings.items()[0];
        assert_eq!(committed.producing.as_ref().map(|r| r.id.as_str()), Some("r1"));
        assert_eq!(committed.start_time, Some(now()));
        let sent = api.transport().sent.borrow();
        assert_eq!(
            sent[0].body,
            Some(json!({ "producing": "r1", "startTime": "2024-05-01T12:00:00.000Z" }))
        );
    }

    #[test]
    fn cancel_clears_both_fields() {
        let mut running = building(&[]);
        running.producing = Some(recipe("r0"));
        running.start_time = Some(now());
        let edit = BuildingEdit::cancel(&running);
        assert_eq!(edit.update, BuildingUpdate::cancel_production());
        assert!(edit.confirmed.producing.is_none());
        assert!(edit.confirmed.start_time.is_none());
    }

    #[test]
    fn boundary_moves_produce_no_edit() {
        let current = building(&["a", "b"]);
        assert!(BuildingEdit::move_item(&current, 0, Direction::Up).is_none());
        assert!(BuildingEdit::move_item(&current, 1, Direction::Down).is_none());
        assert!(BuildingEdit::remove_item(&current, 2).is_none());
    }
}
