use chrono::{DateTime, Datelike, Months, TimeDelta, TimeZone, Timelike, Utc};

use crate::types::change::{Change, ChangeMode};
use crate::types::unit::Unit;

/// Applies `change` to a Unix timestamp (seconds, pinned to UTC).
///
/// Units are walked finest-first (second → year) and only present units are
/// touched. Override values are turned into a delta from the current field so
/// the calendar arithmetic carries out-of-range values into the next coarser
/// field, exactly as an in-place field set would. Day and month overrides
/// below 1 are clamped up to 1 first.
///
/// Calendar arithmetic that cannot be represented (timestamp outside the
/// calendar domain, delta overflow) returns `base` unchanged.
pub(crate) fn apply(change: &Change, base: i64) -> i64 {
    if change.is_empty() {
        return base;
    }

    let Some(start) = Utc.timestamp_opt(base, 0).single() else {
        // shouldn't happen: every Unix timestamp maps to a calendar date
        return base;
    };

    let mut moment: DateTime<Utc> = start;
    for unit in Unit::ASCENDING {
        if !change.present.contains(unit) {
            continue;
        }
        let delta: Option<i64> = match change.mode {
            ChangeMode::Override => {
                floor_clamp(unit, change.value(unit)).checked_sub(field(moment, unit))
            }
            ChangeMode::Offset => Some(change.value(unit)),
        };
        moment = match delta.and_then(|delta| shift(moment, unit, delta)) {
            Some(next) => next,
            None => return base,
        };
    }

    moment.timestamp()
}

/// Overriding the day or month with a value below 1 pins it to 1.
fn floor_clamp(unit: Unit, value: i64) -> i64 {
    match unit {
        Unit::Day | Unit::Month => value.max(1),
        _ => value,
    }
}

fn field(moment: DateTime<Utc>, unit: Unit) -> i64 {
    match unit {
        Unit::Second => i64::from(moment.second()),
        Unit::Minute => i64::from(moment.minute()),
        Unit::Hour => i64::from(moment.hour()),
        Unit::Day => i64::from(moment.day()),
        Unit::Month => i64::from(moment.month()),
        Unit::Year => i64::from(moment.year()),
    }
}

fn shift(moment: DateTime<Utc>, unit: Unit, delta: i64) -> Option<DateTime<Utc>> {
    match unit {
        Unit::Second => moment.checked_add_signed(TimeDelta::try_seconds(delta)?),
        Unit::Minute => moment.checked_add_signed(TimeDelta::try_minutes(delta)?),
        Unit::Hour => moment.checked_add_signed(TimeDelta::try_hours(delta)?),
        Unit::Day => moment.checked_add_signed(TimeDelta::try_days(delta)?),
        Unit::Month => shift_months(moment, delta),
        Unit::Year => shift_months(moment, delta.checked_mul(12)?),
    }
}

// Month steps land on the same day-of-month, clamped to the month length
// (Jan 31 + 1 month = Feb 28/29).
fn shift_months(moment: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    if months >= 0 {
        moment.checked_add_months(Months::new(u32::try_from(months).ok()?))
    } else {
        moment.checked_sub_months(Months::new(u32::try_from(months.unsigned_abs()).ok()?))
    }
}
