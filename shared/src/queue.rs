//! Production queue edits.
//!
//! Every edit returns the candidate queue without touching the current one, so the
//! caller can persist it and commit only once the server has accepted it. `None`
//! means the edit is a no-op and nothing should be sent.

use crate::model::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub fn appended(queue: &[Recipe], recipe: &Recipe) -> Vec<Recipe> {
    let mut next = queue.to_vec();
    next.push(recipe.clone());
    next
}

pub fn moved(queue: &[Recipe], index: usize, direction: Direction) -> Option<Vec<Recipe>> {
    if index >= queue.len() {
        return None;
    }
    let swap_with = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index + 1,
    };
    if swap_with >= queue.len() {
        return None;
    }
    let mut next = queue.to_vec();
    next.swap(index, swap_with);
    Some(next)
}

pub fn removed(queue: &[Recipe], index: usize) -> Option<Vec<Recipe>> {
    if index >= queue.len() {
        return None;
    }
    let mut next = queue.to_vec();
    next.remove(index);
    Some(next)
}

pub fn ids(queue: &[Recipe]) -> Vec<String> {
    queue.iter().map(|recipe| recipe.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogItem, NamedRef};

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            name: format!("Recipe {id}"),
            symbol: String::new(),
            time: 60,
            amount: 1,
            kind: "part".into(),
            resource: NamedRef {
                id: "res".into(),
                name: "Ore".into(),
            },
            catalog: CatalogItem {
                id: "c1".into(),
                name: "Workshop".into(),
                size: 2,
                kind: "industry".into(),
            },
        }
    }

    fn queue(list: &[&str]) -> Vec<Recipe> {
        list.iter().map(|id| recipe(id)).collect()
    }

    #[test]
    fn append_to_empty_queue_yields_single_id() {
        let next = appended(&[], &recipe("r1"));
        assert_eq!(ids(&next), vec!["r1"]);
    }

    #[test]
    fn append_keeps_duplicates_in_order() {
        let next = appended(&queue(&["a", "b"]), &recipe("a"));
        assert_eq!(ids(&next), vec!["a", "b", "a"]);
    }

    #[test]
    fn move_up_at_head_is_noop() {
        assert!(moved(&queue(&["a", "b"]), 0, Direction::Up).is_none());
    }

    #[test]
    fn move_down_at_tail_is_noop() {
        assert!(moved(&queue(&["a", "b"]), 1, Direction::Down).is_none());
    }

    #[test]
    fn move_swaps_neighbours() {
        let q = queue(&["a", "b", "c"]);
        assert_eq!(ids(&moved(&q, 1, Direction::Up).unwrap()), vec!["b", "a", "c"]);
        assert_eq!(ids(&moved(&q, 1, Direction::Down).unwrap()), vec!["a", "c", "b"]);
    }

    #[test]
    fn move_out_of_range_is_noop() {
        assert!(moved(&queue(&["a"]), 3, Direction::Up).is_none());
        assert!(moved(&[], 0, Direction::Down).is_none());
    }

    #[test]
    fn remove_drops_only_that_index() {
        let next = removed(&queue(&["a", "b", "a"]), 2).unwrap();
        assert_eq!(ids(&next), vec!["a", "b"]);
        assert!(removed(&queue(&["a"]), 1).is_none());
    }

    #[test]
    fn edits_leave_input_untouched() {
        let q = queue(&["a", "b"]);
        let _ = moved(&q, 0, Direction::Down);
        let _ = removed(&q, 0);
        assert_eq!(ids(&q), vec!["a", "b"]);
    }
}
