use crate::core;
use crate::types::unit::{Unit, UnitSet};

/// A parsed time change directive.
///
/// Holds one signed value per granularity plus the set of granularities the
/// input named. Depending on `mode` the values are either absolute field
/// values (`Override`) or signed deltas (`Offset`) — a change is entirely one
/// or the other, never mixed, because the mode is decided once by the leading
/// sign of the token.
///
/// A change with an empty `present` set is valid and applies as the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,

    /// Granularities named in the token, cascaded down to seconds.
    pub present: UnitSet,
    pub mode: ChangeMode,
}

impl Change {
    /// A change that names no granularity and applies as the identity.
    pub fn empty(mode: ChangeMode) -> Self {
        Change {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            present: UnitSet::EMPTY,
            mode,
        }
    }

    /// Check if no granularity is present
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    pub fn value(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Second => self.second,
            Unit::Minute => self.minute,
            Unit::Hour => self.hour,
            Unit::Day => self.day,
            Unit::Month => self.month,
            Unit::Year => self.year,
        }
    }

    pub(crate) fn set_value(&mut self, unit: Unit, quantity: i64) {
        match unit {
            Unit::Second => self.second = quantity,
            Unit::Minute => self.minute = quantity,
            Unit::Hour => self.hour = quantity,
            Unit::Day => self.day = quantity,
            Unit::Month => self.month = quantity,
            Unit::Year => self.year = quantity,
        }
    }

    /// Applies this change to a Unix timestamp (seconds, UTC) and returns the
    /// resulting timestamp. See `core::apply`.
    pub fn apply(&self, base: i64) -> i64 {
        core::apply::apply(self, base)
    }
}

/// How the values of a [`Change`] are interpreted when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMode {
    /// Values replace the corresponding calendar fields of the base timestamp.
    Override,
    /// Values are added to the corresponding calendar fields, with carry.
    Offset,
}

impl std::fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            ChangeMode::Override => "override",
            ChangeMode::Offset => "offset",
        };
        f.write_str(label)
    }
}
