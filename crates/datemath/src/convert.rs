//! Single-unit constructors: `days(5)`, `hours(3)`, `weeks(2)`.
//!
//! Each returns a [`ComponentSet`] with exactly one field defined. The
//! singular forms are aliases so that `day(1)` reads naturally.

use crate::components::{Component, ComponentSet};

fn only(component: Component, n: i64) -> ComponentSet {
    ComponentSet::default().with(component, n)
}

pub fn seconds(n: i64) -> ComponentSet {
    only(Component::Second, n)
}

pub fn second(n: i64) -> ComponentSet {
    seconds(n)
}

pub fn minutes(n: i64) -> ComponentSet {
    only(Component::Minute, n)
}

pub fn minute(n: i64) -> ComponentSet {
    minutes(n)
}

pub fn hours(n: i64) -> ComponentSet {
    only(Component::Hour, n)
}

pub fn hour(n: i64) -> ComponentSet {
    hours(n)
}

pub fn days(n: i64) -> ComponentSet {
    only(Component::Day, n)
}

pub fn day(n: i64) -> ComponentSet {
    days(n)
}

/// `n` weeks, stored as `7 * n` days. There is no week field.
///
/// # Panics
///
/// Overflows like `*` when `7 * n` does not fit in an `i64`.
pub fn weeks(n: i64) -> ComponentSet {
    only(Component::Day, 7 * n)
}

pub fn week(n: i64) -> ComponentSet {
    weeks(n)
}

pub fn months(n: i64) -> ComponentSet {
    only(Component::Month, n)
}

pub fn month(n: i64) -> ComponentSet {
    months(n)
}

pub fn years(n: i64) -> ComponentSet {
    only(Component::Year, n)
}

pub fn year(n: i64) -> ComponentSet {
    years(n)
}
