use chrono::{DateTime, Utc};

use crate::model::Building;

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds left until `started_at + duration_secs`, never negative.
pub fn remaining_ms(started_at: DateTime<Utc>, duration_secs: u64, now: DateTime<Utc>) -> i64 {
    let duration_ms = i64::try_from(duration_secs)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);
    let ends_at = started_at.timestamp_millis().saturating_add(duration_ms);
    ends_at.saturating_sub(now.timestamp_millis()).max(0)
}

/// Days, hours or minutes with one decimal, picking the largest unit that is at least 1.
pub fn format_remaining(ms: i64) -> String {
    let ms = ms.max(0);
    if ms >= MS_PER_DAY {
        format!("{:.1} days", one_decimal(ms, MS_PER_DAY))
    } else if ms >= MS_PER_HOUR {
        format!("{:.1} hours", one_decimal(ms, MS_PER_HOUR))
    } else {
        format!("{:.1} minutes", one_decimal(ms, MS_PER_MINUTE))
    }
}

// `{:.1}` alone rounds ties to even; ties go up here (0.25 -> 0.3).
fn one_decimal(ms: i64, unit: i64) -> f64 {
    (ms as f64 / unit as f64 * 10.0).round() / 10.0
}

/// Countdown text for a building, `None` while it has nothing in fabrication.
pub fn countdown_label(building: &Building, now: DateTime<Utc>) -> Option<String> {
    let (recipe, started_at) = building.active_production()?;
    Some(format_remaining(remaining_ms(started_at, recipe.time, now)))
}
