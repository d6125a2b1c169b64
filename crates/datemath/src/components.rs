//! Calendar component sets and the arithmetic defined over them.
//!
//! A [`ComponentSet`] holds up to six calendar offsets. Each field is
//! independently present or absent; an absent field means "no change in that
//! unit" and counts as zero whenever two sets are combined.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// One of the six fields of a [`ComponentSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Component {
    /// All fields, finest first.
    pub const ALL: [Component; 6] = [
        Component::Second,
        Component::Minute,
        Component::Hour,
        Component::Day,
        Component::Month,
        Component::Year,
    ];
}

/// A set of calendar offsets, one optional integer per unit.
///
/// Undefined fields are skipped when serialized and default to undefined
/// when deserialized, so `{"day":3}` round-trips as `days(3)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl ComponentSet {
    /// Read one field.
    pub fn get(&self, component: Component) -> Option<i64> {
        match component {
            Component::Second => self.second,
            Component::Minute => self.minute,
            Component::Hour => self.hour,
            Component::Day => self.day,
            Component::Month => self.month,
            Component::Year => self.year,
        }
    }

    /// Overwrite one field, defined or not.
    pub fn set(&mut self, component: Component, value: Option<i64>) {
        let slot = match component {
            Component::Second => &mut self.second,
            Component::Minute => &mut self.minute,
            Component::Hour => &mut self.hour,
            Component::Day => &mut self.day,
            Component::Month => &mut self.month,
            Component::Year => &mut self.year,
        };
        *slot = value;
    }

    /// Builder form of [`ComponentSet::set`] that defines the field.
    pub fn with(mut self, component: Component, value: i64) -> Self {
        self.set(component, Some(value));
        self
    }

    /// True when no field is defined.
    pub fn is_empty(&self) -> bool {
        Component::ALL.iter().all(|&c| self.get(c).is_none())
    }

    /// The field's value, or zero when undefined.
    pub(crate) fn effective(&self, component: Component) -> i64 {
        self.get(component).unwrap_or(0)
    }
}

/// Merge two sets field by field: `lhs + rhs * multiplier`.
///
/// Undefined inputs count as zero and every field of the result is defined,
/// even when both inputs left it unset.
///
/// # Panics
///
/// Field arithmetic is plain `i64` arithmetic, so it panics on overflow in
/// debug builds and wraps in release builds, as `+` and `*` do.
pub fn combine(lhs: &ComponentSet, rhs: &ComponentSet, multiplier: i64) -> ComponentSet {
    let mut result = ComponentSet::default();
    for component in Component::ALL {
        let value = lhs.effective(component) + rhs.effective(component) * multiplier;
        result.set(component, Some(value));
    }
    result
}

/// `combine(lhs, rhs, 1)`.
pub fn add(lhs: &ComponentSet, rhs: &ComponentSet) -> ComponentSet {
    combine(lhs, rhs, 1)
}

/// `combine(lhs, rhs, -1)`.
pub fn subtract(lhs: &ComponentSet, rhs: &ComponentSet) -> ComponentSet {
    combine(lhs, rhs, -1)
}

/// Negate every defined field. Undefined fields stay undefined.
///
/// # Panics
///
/// Overflows like unary `-` when a field is `i64::MIN`.
pub fn negate(components: &ComponentSet) -> ComponentSet {
    let mut result = ComponentSet::default();
    for component in Component::ALL {
        result.set(component, components.get(component).map(|v| -v));
    }
    result
}

impl Add for ComponentSet {
    type Output = ComponentSet;

    fn add(self, rhs: ComponentSet) -> ComponentSet {
        add(&self, &rhs)
    }
}

impl Sub for ComponentSet {
    type Output = ComponentSet;

    fn sub(self, rhs: ComponentSet) -> ComponentSet {
        subtract(&self, &rhs)
    }
}

impl Neg for ComponentSet {
    type Output = ComponentSet;

    fn neg(self) -> ComponentSet {
        negate(&self)
    }
}
