//! Applying component sets to instants, and day normalization.

use crate::calendar::{Calendar, Instant};
use crate::components::{negate, Component, ComponentSet};
use crate::convert::days;
use crate::error::Result;

/// `instant + components`, interpreted by `calendar`.
///
/// Month arithmetic follows [`Calendar::add_components`]: adding one month
/// to January 31 lands on the last day of February.
///
/// # Errors
///
/// Returns [`crate::DateMathError::OutOfRange`] when the result cannot be
/// represented.
pub fn add_to_instant(
    calendar: &Calendar,
    instant: Instant,
    components: &ComponentSet,
) -> Result<Instant> {
    calendar.add_components(instant, components)
}

/// `components + instant`, the same as [`add_to_instant`].
pub fn add_instant_to(
    calendar: &Calendar,
    components: &ComponentSet,
    instant: Instant,
) -> Result<Instant> {
    add_to_instant(calendar, instant, components)
}

/// `instant - components`: adds the negated set.
///
/// Not always the inverse of [`add_to_instant`]. Clamping makes
/// `Jan 31 + 1 month - 1 month` land on Jan 28 (or 29 in a leap year).
pub fn subtract_from_instant(
    calendar: &Calendar,
    instant: Instant,
    components: &ComponentSet,
) -> Result<Instant> {
    add_to_instant(calendar, instant, &negate(components))
}

/// Truncate an instant to the start of its local day.
///
/// Usually local midnight. When midnight is skipped by a DST transition the
/// day starts at the first instant after the gap.
///
/// # Errors
///
/// Returns an error only when the calendar cannot rebuild the day, which
/// happens at the edges of the representable range.
pub fn normalize(calendar: &Calendar, instant: Instant) -> Result<Instant> {
    let date = calendar.decompose(instant, &[Component::Year, Component::Month, Component::Day]);
    calendar.compose(&date)
}

/// The start of `instant`'s local day, moved `n` days.
pub fn offset(calendar: &Calendar, instant: Instant, n: i64) -> Result<Instant> {
    add_to_instant(calendar, normalize(calendar, instant)?, &days(n))
}
