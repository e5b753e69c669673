use crate::error::{ApiError, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// A fetched list plus the bookkeeping that keeps late responses from
/// overwriting newer ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    latest_issued: u64,
    loaded: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            latest_issued: 0,
            loaded: false,
        }
    }
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_issued = self.latest_issued.wrapping_add(1);
        RefreshTicket(self.latest_issued)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.latest_issued
    }

    /// Apply the outcome of a refresh. Failures keep the current items and yield
    /// the message to show; stale tickets are ignored entirely.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<T>, ApiError>,
        operation: Operation,
    ) -> Option<String> {
        if !self.is_current(ticket) {
            return None;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                None
            }
            Err(e) => Some(e.user_message(operation)),
        }
    }

    /// Replace the first item matching `predicate` in place.
    pub fn patch(&mut self, predicate: impl Fn(&T) -> bool, update: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| predicate(item)) {
            Some(item) => {
                update(item);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.loaded = false;
        self.latest_issued = self.latest_issued.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RETRY_LATER_MESSAGE;

    #[test]
    fn failed_refresh_keeps_items_and_reports_retry() {
        let mut planets = Collection::default();
        let first = planets.begin_refresh();
        planets.apply(first, Ok(vec!["Vega", "Altair"]), Operation::FetchPlanets);

        let second = planets.begin_refresh();
        let message = planets.apply(
            second,
            Err(ApiError::Network("offline".into())),
            Operation::FetchPlanets,
        );
        assert_eq!(message.as_deref(), Some(RETRY_LATER_MESSAGE));
        assert_eq!(planets.items(), &["Vega", "Altair"]);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut bases = Collection::default();
        let older = bases.begin_refresh();
        let newer = bases.begin_refresh();
        bases.apply(newer, Ok(vec![2]), Operation::FetchBases);
        assert!(bases.apply(older, Ok(vec![1]), Operation::FetchBases).is_none());
        assert_eq!(bases.items(), &[2]);
    }

    #[test]
    fn stale_failure_produces_no_message() {
        let mut bases: Collection<u8> = Collection::default();
        let older = bases.begin_refresh();
        let _newer = bases.begin_refresh();
        let message = bases.apply(
            older,
            Err(ApiError::Network("late".into())),
            Operation::FetchBases,
        );
        assert!(message.is_none());
    }

    #[test]
    fn patch_updates_matching_item() {
        let mut items = Collection::default();
        let ticket = items.begin_refresh();
        items.apply(ticket, Ok(vec![(1, "a"), (2, "b")]), Operation::FetchBuildings);
        assert!(items.patch(|item| item.0 == 2, |item| item.1 = "z"));
        assert!(!items.patch(|item| item.0 == 9, |item| item.1 = "never"));
        assert_eq!(items.items(), &[(1, "a"), (2, "z")]);
    }

    #[test]
    fn clear_invalidates_in_flight_refresh() {
        let mut items = Collection::default();
        let ticket = items.begin_refresh();
        items.clear();
        items.apply(ticket, Ok(vec![1]), Operation::FetchCatalogs);
        assert!(items.items().is_empty());
        assert!(!items.is_loaded());
    }
}
