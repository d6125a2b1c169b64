//! The calendar every operation is interpreted through.
//!
//! A [`Calendar`] is the proleptic Gregorian calendar viewed through one IANA
//! timezone. It decomposes instants into local wall-clock fields, composes
//! fields back into instants, adds component offsets, and measures whole-unit
//! deltas. It is a plain `Copy` value handed to each operation, so tests and
//! callers can pick a zone without touching process-wide state.

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, Offset,
    TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::components::{Component, ComponentSet};
use crate::error::{DateMathError, Result};

/// An absolute point in time.
pub type Instant = DateTime<Utc>;

/// A unit of elapsed calendar time, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every unit, coarsest first.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Suffix used in elapsed labels. Months are `M`, minutes are `m`.
    pub fn letter(self) -> char {
        match self {
            Unit::Year => 'y',
            Unit::Month => 'M',
            Unit::Week => 'w',
            Unit::Day => 'd',
            Unit::Hour => 'h',
            Unit::Minute => 'm',
            Unit::Second => 's',
        }
    }
}

/// Gregorian calendar in a fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for Calendar {
    type Err = DateMathError;

    /// Parse an IANA timezone name such as `"America/New_York"`.
    fn from_str(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| DateMathError::InvalidTimezone(name.to_string()))
    }
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Read the requested fields off the local wall clock.
    ///
    /// Only the listed components are defined in the result.
    pub fn decompose(&self, instant: Instant, components: &[Component]) -> ComponentSet {
        let local = self.local(instant);
        let mut fields = ComponentSet::default();
        for &component in components {
            let value = match component {
                Component::Second => i64::from(local.second()),
                Component::Minute => i64::from(local.minute()),
                Component::Hour => i64::from(local.hour()),
                Component::Day => i64::from(local.day()),
                Component::Month => i64::from(local.month()),
                Component::Year => i64::from(local.year()),
            };
            fields.set(component, Some(value));
        }
        fields
    }

    /// Build an instant from local wall-clock fields.
    ///
    /// `year` is required. `month` and `day` default to 1, the time fields
    /// to 0. Local times that DST skips or repeats are resolved as described
    /// on [`Calendar::resolve_local`].
    ///
    /// # Errors
    ///
    /// Returns [`DateMathError::InvalidComposition`] when `year` is undefined
    /// or any field is out of range for its unit (month 13, February 30,
    /// hour 24, ...).
    pub fn compose(&self, fields: &ComponentSet) -> Result<Instant> {
        let year = fields.year.ok_or_else(|| {
            DateMathError::InvalidComposition("year is undefined".to_string())
        })?;
        let local = local_from_fields(year, fields).ok_or_else(|| {
            tracing::debug!(
                ?fields,
                tz = self.tz.name(),
                "fields do not form a local date-time"
            );
            DateMathError::InvalidComposition(format!("no local date-time for {fields:?}"))
        })?;
        self.resolve_local(local)
    }

    /// Map a local wall-clock time to an instant.
    ///
    /// A repeated local time (clocks turned back) resolves to the earlier
    /// instant. A skipped local time (clocks turned forward) is read with the
    /// offset in force before the gap, which lands just past the gap: 02:30
    /// on a US spring-forward day becomes 03:30 daylight time.
    pub fn resolve_local(&self, local: NaiveDateTime) -> Result<Instant> {
        match self.tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => {
                tracing::trace!(
                    %local,
                    tz = self.tz.name(),
                    "repeated local time, taking the earlier instant"
                );
                Ok(earliest.with_timezone(&Utc))
            }
            LocalResult::None => {
                tracing::debug!(%local, tz = self.tz.name(), "local time falls in a gap");
                // Offsets never change twice within a day, so the offset a day
                // earlier is the one in force before the gap.
                let before = local
                    .checked_sub_signed(Duration::days(1))
                    .map(|probe| self.tz.offset_from_utc_datetime(&probe).fix())
                    .ok_or_else(|| out_of_range(&local))?;
                local
                    .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
                    .map(|utc| utc.and_utc())
                    .ok_or_else(|| out_of_range(&local))
            }
        }
    }

    /// Add a component offset to an instant.
    ///
    /// Years and months are folded into one month count and applied to the
    /// local date, clamping the day to the end of the target month. Days are
    /// then applied to the local date and the result is resolved back to an
    /// instant. Hours, minutes and seconds are applied last as elapsed time.
    /// Undefined fields count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`DateMathError::OutOfRange`] when the result cannot be
    /// represented.
    pub fn add_components(&self, instant: Instant, components: &ComponentSet) -> Result<Instant> {
        let overflow = || DateMathError::OutOfRange(format!("{components:?} added to {instant}"));

        let months = components
            .effective(Component::Year)
            .checked_mul(12)
            .and_then(|m| m.checked_add(components.effective(Component::Month)))
            .ok_or_else(overflow)?;
        let days = components.effective(Component::Day);

        let mut result = instant;
        if months != 0 || days != 0 {
            let local = shift_months(self.local(instant), months)
                .and_then(|local| local.checked_add_signed(Duration::try_days(days)?))
                .ok_or_else(overflow)?;
            result = self.resolve_local(local)?;
        }

        let seconds = components
            .effective(Component::Hour)
            .checked_mul(3600)
            .and_then(|s| s.checked_add(components.effective(Component::Minute).checked_mul(60)?))
            .and_then(|s| s.checked_add(components.effective(Component::Second)))
            .ok_or_else(overflow)?;
        Duration::try_seconds(seconds)
            .and_then(|elapsed| result.checked_add_signed(elapsed))
            .ok_or_else(overflow)
    }

    /// Whole `unit`s from `from` to `to`, negative when `to` is earlier.
    ///
    /// Years, months, weeks and days are counted on the local wall clock;
    /// hours, minutes and seconds are elapsed time. Partial units are
    /// dropped, so the count truncates toward `from`.
    pub fn delta(&self, unit: Unit, from: Instant, to: Instant) -> i64 {
        match unit {
            Unit::Year => months_between(self.local(from), self.local(to)) / 12,
            Unit::Month => months_between(self.local(from), self.local(to)),
            Unit::Week => self.whole_days(from, to) / 7,
            Unit::Day => self.whole_days(from, to),
            Unit::Hour => (to - from).num_hours(),
            Unit::Minute => (to - from).num_minutes(),
            Unit::Second => (to - from).num_seconds(),
        }
    }

    pub(crate) fn local(&self, instant: Instant) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    fn whole_days(&self, from: Instant, to: Instant) -> i64 {
        (self.local(to) - self.local(from)).num_days()
    }
}

/// Largest month count `m` (smallest, when going backwards) such that
/// shifting `from` by `m` months does not pass `to`.
pub(crate) fn months_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let mut months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());
    if to >= from {
        if shift_months(from, months).is_none_or(|anchor| anchor > to) {
            months -= 1;
        }
    } else if shift_months(from, months).is_none_or(|anchor| anchor < to) {
        months += 1;
    }
    months
}

/// Shift a local time by whole months, clamping to the end of short months.
pub(crate) fn shift_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        local.checked_add_months(magnitude)
    } else {
        local.checked_sub_months(magnitude)
    }
}

fn local_from_fields(year: i64, fields: &ComponentSet) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        field_or(fields.month, 1)?,
        field_or(fields.day, 1)?,
    )?;
    date.and_hms_opt(
        field_or(fields.hour, 0)?,
        field_or(fields.minute, 0)?,
        field_or(fields.second, 0)?,
    )
}

fn field_or(value: Option<i64>, default: u32) -> Option<u32> {
    value.map_or(Some(default), |v| u32::try_from(v).ok())
}

fn out_of_range(local: &NaiveDateTime) -> DateMathError {
    DateMathError::OutOfRange(format!("local time {local} cannot be resolved"))
}
