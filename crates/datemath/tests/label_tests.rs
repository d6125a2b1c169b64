//! Tests for coarsest-unit elapsed labels.

use chrono::{TimeZone, Utc};
use datemath::{coarsest_elapsed, offset_from, Calendar, Instant, Unit};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn one_hour_ago() {
    let cal = Calendar::utc();
    assert_eq!(offset_from(&cal, utc(2024, 3, 10, 10, 0, 0), utc(2024, 3, 10, 9, 0, 0)), "1h");
}

#[test]
fn years_win_over_smaller_units() {
    let cal = Calendar::utc();
    // Fourteen months apart reports only the year.
    let label = offset_from(&cal, utc(2024, 3, 10, 0, 0, 0), utc(2023, 1, 10, 0, 0, 0));
    assert_eq!(label, "1y");
}

#[test]
fn each_unit_letter() {
    let cal = Calendar::utc();
    let date = utc(2024, 1, 1, 0, 0, 0);

    let cases = [
        (utc(2026, 6, 1, 0, 0, 0), "2y"),
        (utc(2024, 4, 1, 0, 0, 0), "3M"),
        (utc(2024, 1, 22, 0, 0, 0), "3w"),
        (utc(2024, 1, 5, 0, 0, 0), "4d"),
        (utc(2024, 1, 1, 5, 0, 0), "5h"),
        (utc(2024, 1, 1, 0, 6, 0), "6m"),
        (utc(2024, 1, 1, 0, 0, 7), "7s"),
    ];

    for (instant, expected) in cases {
        assert_eq!(offset_from(&cal, instant, date), expected, "{instant}");
    }
}

#[test]
fn months_are_capital_m_minutes_lowercase() {
    let cal = Calendar::utc();
    let date = utc(2024, 1, 1, 0, 0, 0);

    assert_eq!(offset_from(&cal, utc(2024, 2, 1, 0, 0, 0), date), "1M");
    assert_eq!(offset_from(&cal, utc(2024, 1, 1, 0, 1, 0), date), "1m");
}

#[test]
fn almost_a_month_falls_back_to_weeks() {
    let cal = Calendar::utc();
    // 30 days from Jan 15 is Feb 14, one day short of a whole month.
    assert_eq!(
        offset_from(&cal, utc(2024, 2, 14, 0, 0, 0), utc(2024, 1, 15, 0, 0, 0)),
        "4w"
    );
}

#[test]
fn same_or_future_date_is_empty() {
    let cal = Calendar::utc();
    let t = utc(2024, 3, 10, 10, 0, 0);

    assert_eq!(offset_from(&cal, t, t), "");
    assert_eq!(offset_from(&cal, t, utc(2025, 3, 10, 10, 0, 0)), "");
    assert_eq!(offset_from(&cal, t, utc(2024, 3, 10, 10, 0, 1)), "");
}

#[test]
fn sub_second_gap_is_empty() {
    let cal = Calendar::utc();
    let date = utc(2024, 3, 10, 10, 0, 0);
    let instant = date + chrono::Duration::milliseconds(999);

    assert_eq!(offset_from(&cal, instant, date), "");
    assert_eq!(coarsest_elapsed(&cal, instant, date), None);
}

#[test]
fn coarsest_elapsed_reports_unit_and_count() {
    let cal = Calendar::utc();
    assert_eq!(
        coarsest_elapsed(&cal, utc(2024, 1, 1, 3, 30, 0), utc(2024, 1, 1, 0, 0, 0)),
        Some((Unit::Hour, 3))
    );
}

#[test]
fn label_uses_calendar_days_across_dst() {
    let cal: Calendar = "America/New_York".parse().unwrap();
    // Midnight to midnight over spring-forward is 23 hours but still a day.
    assert_eq!(offset_from(&cal, utc(2024, 3, 11, 4, 0, 0), utc(2024, 3, 10, 5, 0, 0)), "1d");
    assert_eq!(
        offset_from(&Calendar::utc(), utc(2024, 3, 11, 4, 0, 0), utc(2024, 3, 10, 5, 0, 0)),
        "23h"
    );
}
