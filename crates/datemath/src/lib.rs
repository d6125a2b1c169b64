//! # datemath
//!
//! Calendar-aware arithmetic over `chrono` instants.
//!
//! Build offsets from plain integers (`days(3)`, `months(1)`), combine them
//! with `+`, `-` and unary `-`, and apply them to instants through an explicit
//! [`Calendar`] (a Gregorian calendar in one IANA timezone). The same calendar
//! truncates instants to the start of their day, measures year/month/day
//! differences and renders short "time since" labels.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datemath::{days, diff, hours, normalize, offset_from, add_to_instant, Calendar};
//!
//! let cal = Calendar::utc();
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
//!
//! let later = add_to_instant(&cal, start, &(days(74) + hours(2))).unwrap();
//! assert_eq!(later, Utc.with_ymd_and_hms(2024, 3, 15, 11, 30, 0).unwrap());
//!
//! let delta = diff(&cal, start, later).unwrap();
//! assert_eq!((delta.year, delta.month, delta.day), (Some(0), Some(2), Some(14)));
//!
//! let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
//! assert_eq!(normalize(&cal, later).unwrap(), midnight);
//! assert_eq!(offset_from(&cal, later, start), "2M");
//! ```
//!
//! ## Modules
//!
//! - [`components`] — `ComponentSet`, combine/add/subtract/negate and operators
//! - [`convert`] — integer → single-unit `ComponentSet` constructors
//! - [`calendar`] — `Calendar`: decompose, compose, add components, unit deltas
//! - [`instant`] — apply component sets to instants, normalize, day offsets
//! - [`differ`] — year/month/day diff and single-unit `*_from` queries
//! - [`label`] — coarsest-unit elapsed labels
//! - [`error`] — Error types

pub mod calendar;
pub mod components;
pub mod convert;
pub mod differ;
pub mod error;
pub mod instant;
pub mod label;

pub use calendar::{Calendar, Instant, Unit};
pub use components::{add, combine, negate, subtract, Component, ComponentSet};
pub use convert::{
    day, days, hour, hours, minute, minutes, month, months, second, seconds, week, weeks, year,
    years,
};
pub use differ::{
    days_from, diff, hours_from, minutes_from, months_from, seconds_from, weeks_from, years_from,
};
pub use error::DateMathError;
pub use instant::{add_instant_to, add_to_instant, normalize, offset, subtract_from_instant};
pub use label::{coarsest_elapsed, offset_from};
