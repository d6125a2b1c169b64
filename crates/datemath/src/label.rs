//! Short "time since" labels such as `"3d"` or `"1y"`.

use crate::calendar::{Calendar, Instant, Unit};

/// The coarsest unit in which `instant` is at least one whole unit after
/// `date`, with its count.
///
/// Units are tried in [`Unit::ALL`] order. Returns `None` when `instant` is
/// not later than `date` by at least one second.
pub fn coarsest_elapsed(
    calendar: &Calendar,
    instant: Instant,
    date: Instant,
) -> Option<(Unit, i64)> {
    Unit::ALL.into_iter().find_map(|unit| {
        let count = calendar.delta(unit, date, instant);
        (count > 0).then_some((unit, count))
    })
}

/// Render the coarsest elapsed unit as `"<count><letter>"`.
///
/// Letters are `y`, `M`, `w`, `d`, `h`, `m`, `s`. Only one unit is ever
/// reported: 14 months is `"1y"`, not `"1y2M"`. Returns an empty string when
/// `instant` is not after `date`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use datemath::{label::offset_from, Calendar};
///
/// let cal = Calendar::utc();
/// let now = Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap();
/// let earlier = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
/// assert_eq!(offset_from(&cal, now, earlier), "1h");
/// assert_eq!(offset_from(&cal, earlier, now), "");
/// ```
pub fn offset_from(calendar: &Calendar, instant: Instant, date: Instant) -> String {
    coarsest_elapsed(calendar, instant, date)
        .map(|(unit, count)| format!("{}{}", count, unit.letter()))
        .unwrap_or_default()
}
