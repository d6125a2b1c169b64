//! Tests for the year/month/day diff and the single-unit `*_from` queries.

use chrono::{TimeZone, Utc};
use datemath::{
    days_from, diff, hours_from, minutes_from, months_from, seconds_from, weeks_from, years_from,
    Calendar, Component, ComponentSet, Instant,
};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn date(y: i32, mo: u32, d: u32) -> Instant {
    utc(y, mo, d, 0, 0, 0)
}

fn ymd(year: i64, month: i64, day: i64) -> ComponentSet {
    ComponentSet::default()
        .with(Component::Year, year)
        .with(Component::Month, month)
        .with(Component::Day, day)
}

// ── diff ────────────────────────────────────────────────────────────────────

#[test]
fn diff_two_months_fourteen_days() {
    let cal = Calendar::utc();
    assert_eq!(diff(&cal, date(2024, 1, 1), date(2024, 3, 15)).unwrap(), ymd(0, 2, 14));
}

#[test]
fn diff_is_order_independent() {
    let cal = Calendar::utc();
    let a = date(2024, 1, 1);
    let b = date(2024, 3, 15);

    assert_eq!(diff(&cal, a, b).unwrap(), diff(&cal, b, a).unwrap());
}

#[test]
fn diff_ignores_time_of_day() {
    let cal = Calendar::utc();
    let result = diff(&cal, utc(2024, 1, 1, 23, 0, 0), utc(2024, 3, 15, 1, 0, 0)).unwrap();

    assert_eq!(result, ymd(0, 2, 14));
    assert_eq!(result.hour, None);
    assert_eq!(result.minute, None);
    assert_eq!(result.second, None);
}

#[test]
fn diff_same_day_is_zero() {
    let cal = Calendar::utc();
    assert_eq!(
        diff(&cal, utc(2024, 6, 1, 1, 0, 0), utc(2024, 6, 1, 22, 0, 0)).unwrap(),
        ymd(0, 0, 0)
    );
}

#[test]
fn diff_across_short_month_clamps_the_anchor() {
    let cal = Calendar::utc();
    // Jan 31 + 1 month clamps to Feb 28, one day short of Mar 1.
    assert_eq!(diff(&cal, date(2023, 1, 31), date(2023, 3, 1)).unwrap(), ymd(0, 1, 1));
    assert_eq!(diff(&cal, date(2020, 2, 29), date(2024, 3, 1)).unwrap(), ymd(4, 0, 1));
}

#[test]
fn diff_across_year_boundary() {
    let cal = Calendar::utc();
    assert_eq!(diff(&cal, date(2023, 12, 25), date(2024, 1, 5)).unwrap(), ymd(0, 0, 11));
    assert_eq!(diff(&cal, date(2021, 7, 4), date(2024, 9, 10)).unwrap(), ymd(3, 2, 6));
}

#[test]
fn diff_counts_local_days_across_dst() {
    let cal: Calendar = "America/New_York".parse().unwrap();
    // Noon EST on the 9th to noon EDT on the 11th.
    let result = diff(&cal, utc(2024, 3, 9, 17, 0, 0), utc(2024, 3, 11, 16, 0, 0)).unwrap();
    assert_eq!(result, ymd(0, 0, 2));
}

#[test]
fn diff_counts_a_day_that_starts_after_a_skipped_midnight() {
    let cal: Calendar = "America/Sao_Paulo".parse().unwrap();
    // 2018-11-04 12:00 -02:00 to 2018-11-05 00:30 -02:00. The first day
    // starts at 01:00 local, so its start is only 23 hours before the next.
    let result = diff(&cal, utc(2018, 11, 4, 14, 0, 0), utc(2018, 11, 5, 2, 30, 0)).unwrap();
    assert_eq!(result, ymd(0, 0, 1));

    // A month counted from that day still reaches the same date a month on.
    let result = diff(&cal, utc(2018, 11, 4, 14, 0, 0), utc(2018, 12, 4, 14, 0, 0)).unwrap();
    assert_eq!(result, ymd(0, 1, 0));
}

// ── *_from ──────────────────────────────────────────────────────────────────

#[test]
fn hours_from_one_hour_later() {
    let cal = Calendar::utc();
    let later = utc(2024, 3, 10, 10, 0, 0);
    let earlier = utc(2024, 3, 10, 9, 0, 0);

    assert_eq!(hours_from(&cal, later, earlier), 1);
    assert_eq!(minutes_from(&cal, later, earlier), 60);
    assert_eq!(seconds_from(&cal, later, earlier), 3600);
    assert_eq!(days_from(&cal, later, earlier), 0);
}

#[test]
fn from_queries_over_fourteen_months() {
    let cal = Calendar::utc();
    let later = date(2024, 3, 10);
    let earlier = date(2023, 1, 10);

    assert_eq!(years_from(&cal, later, earlier), 1);
    assert_eq!(months_from(&cal, later, earlier), 14);
    assert_eq!(days_from(&cal, later, earlier), 425);
    assert_eq!(weeks_from(&cal, later, earlier), 60);
    assert_eq!(hours_from(&cal, later, earlier), 425 * 24);
}

#[test]
fn from_queries_are_negative_when_earlier() {
    let cal = Calendar::utc();
    let later = date(2024, 3, 10);
    let earlier = date(2023, 1, 10);

    assert_eq!(years_from(&cal, earlier, later), -1);
    assert_eq!(months_from(&cal, earlier, later), -14);
    assert_eq!(weeks_from(&cal, earlier, later), -60);
    assert_eq!(seconds_from(&cal, earlier, later), -425 * 86_400);
}

#[test]
fn from_queries_drop_partial_units() {
    let cal = Calendar::utc();
    let date = utc(2024, 1, 15, 12, 0, 0);

    assert_eq!(months_from(&cal, utc(2024, 2, 15, 11, 59, 59), date), 0);
    assert_eq!(months_from(&cal, utc(2024, 2, 15, 12, 0, 0), date), 1);
    assert_eq!(days_from(&cal, utc(2024, 1, 16, 11, 0, 0), date), 0);
    assert_eq!(weeks_from(&cal, utc(2024, 1, 21, 12, 0, 0), date), 0);
    assert_eq!(weeks_from(&cal, utc(2024, 1, 22, 12, 0, 0), date), 1);
}
