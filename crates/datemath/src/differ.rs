//! Calendar-aware differences between instants.
//!
//! [`diff`] gives an unsigned year/month/day breakdown between the days two
//! instants fall on. The `*_from` queries count one unit each between the raw
//! instants and are signed: positive when `instant` is later than `date`.

use chrono::NaiveTime;

use crate::calendar::{months_between, shift_months, Calendar, Instant, Unit};
use crate::components::{Component, ComponentSet};
use crate::error::{DateMathError, Result};
use crate::instant::normalize;

/// Year/month/day distance between the local days of `a` and `b`.
///
/// Both instants are normalized first and the distance is always measured
/// from the earlier day to the later one, so every field is non-negative and
/// `diff(a, b) == diff(b, a)`.
///
/// Months are counted as the most whole months that fit, shifting the earlier
/// date with end-of-month clamping; the remaining days are counted from that
/// shifted date. January 31 to March 1 of a common year is one month and one
/// day, because January 31 plus one month clamps to February 28.
///
/// # Errors
///
/// Propagates normalization failures at the edges of the representable range.
pub fn diff(calendar: &Calendar, a: Instant, b: Instant) -> Result<ComponentSet> {
    let a = normalize(calendar, a)?;
    let b = normalize(calendar, b)?;
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };

    // Compare dates, not wall clocks: a day can start after 00:00 when DST
    // skips midnight.
    let from = calendar.local(earlier).date().and_time(NaiveTime::MIN);
    let to = calendar.local(later).date().and_time(NaiveTime::MIN);
    let months = months_between(from, to);
    let anchor = shift_months(from, months).ok_or_else(|| {
        DateMathError::OutOfRange(format!("{months} months from {from}"))
    })?;

    Ok(ComponentSet::default()
        .with(Component::Year, months / 12)
        .with(Component::Month, months % 12)
        .with(Component::Day, (to - anchor).num_days()))
}

pub fn years_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Year, date, instant)
}

pub fn months_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Month, date, instant)
}

pub fn weeks_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Week, date, instant)
}

pub fn days_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Day, date, instant)
}

pub fn hours_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Hour, date, instant)
}

pub fn minutes_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Minute, date, instant)
}

pub fn seconds_from(calendar: &Calendar, instant: Instant, date: Instant) -> i64 {
    calendar.delta(Unit::Second, date, instant)
}
