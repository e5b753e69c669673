use std::cell::RefCell;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use commerce_galaxy_shared::Building;
use commerce_galaxy_shared::production::countdown_label;

const TICK_MS: u32 = 1_000;

thread_local! {
    // Dropping the interval cancels it.
    static PRODUCTION_TICKER: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

/// Point the countdown at `building`, replacing any previous ticker.
/// Idle or absent buildings clear the label and schedule nothing.
pub(crate) fn watch(building: Option<Building>, label: RwSignal<Option<String>>) {
    stop();

    let Some(building) = building.filter(|b| b.active_production().is_some()) else {
        label.set(None);
        return;
    };

    label.set(countdown_label(&building, chrono::Utc::now()));
    let interval = Interval::new(TICK_MS, move || {
        label.set(countdown_label(&building, chrono::Utc::now()));
    });

    PRODUCTION_TICKER.with(|slot| {
        *slot.borrow_mut() = Some(interval);
    });
}

pub(crate) fn stop() {
    PRODUCTION_TICKER.with(|slot| {
        let _old = slot.borrow_mut().take();
    });
}
