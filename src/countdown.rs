use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Remaining time under this many hours flags the countdown as urgent.
pub const URGENCY_THRESHOLD_HOURS: i64 = 12;

/// Snapshot of the time left until a payment deadline.
///
/// Derived, never stored: callers re-invoke [`compute_countdown`] on each
/// render tick or poll. `minutes_remaining` is always in `0..60` while the
/// deadline is in the future.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct CountdownState {
    pub hours_remaining: i64,
    pub minutes_remaining: i64,
    pub is_urgent: bool,
}

/// Computes the countdown to `deadline` as seen at `now`.
///
/// `now` is an explicit parameter so the function stays pure and a single
/// invocation works from one clock sample; the caller decides when and how
/// often to resample. A deadline at or before `now` reports zero time left
/// and is always urgent.
pub fn compute_countdown(deadline: DateTime<Utc>, now: DateTime<Utc>) -> CountdownState {
    let remaining = deadline - now;
    if remaining <= Duration::zero() {
        return CountdownState {
            hours_remaining: 0,
            minutes_remaining: 0,
            is_urgent: true,
        };
    }

    let hours_remaining = remaining.num_hours();
    let minutes_remaining = remaining.num_minutes() % 60;

    CountdownState {
        hours_remaining,
        minutes_remaining,
        is_urgent: hours_remaining < URGENCY_THRESHOLD_HOURS,
    }
}
