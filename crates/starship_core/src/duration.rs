use std::str::FromStr;

use crate::raw::{parse_number, RawScalar};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_WEEK: f64 = 7.0;
/// Average, leap years included.
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const HOURS_PER_WEEK: f64 = HOURS_PER_DAY * DAYS_PER_WEEK;
pub const HOURS_PER_YEAR: f64 = HOURS_PER_DAY * DAYS_PER_YEAR;
pub const HOURS_PER_MONTH: f64 = HOURS_PER_YEAR / MONTHS_PER_YEAR;

/// A normalized numeric field: either a finite, non-negative value or unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Known(f64),
    Unknown,
}

impl Quantity {
    /// Legacy numeric marker for an unknown value.
    pub const SENTINEL: f64 = -1.0;

    pub fn from_number(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            // Collapse -0.0 so it never renders as a negative.
            Quantity::Known(value + 0.0)
        } else {
            Quantity::Unknown
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Quantity::Known(value) => Some(value),
            Quantity::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Quantity::Known(_))
    }

    /// The value, or [`Quantity::SENTINEL`] when unknown.
    pub fn to_sentinel(self) -> f64 {
        self.value().unwrap_or(Self::SENTINEL)
    }
}

/// Units accepted after the amount in a duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    pub fn hours(self) -> f64 {
        match self {
            DurationUnit::Hour => 1.0,
            DurationUnit::Day => HOURS_PER_DAY,
            DurationUnit::Week => HOURS_PER_WEEK,
            DurationUnit::Month => HOURS_PER_MONTH,
            DurationUnit::Year => HOURS_PER_YEAR,
        }
    }
}

impl FromStr for DurationUnit {
    type Err = ();

    /// Accepts lowercase singular or plural (one trailing `s`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let singular = token.strip_suffix('s').unwrap_or(token);
        match singular {
            "hour" => Ok(DurationUnit::Hour),
            "day" => Ok(DurationUnit::Day),
            "week" => Ok(DurationUnit::Week),
            "month" => Ok(DurationUnit::Month),
            "year" => Ok(DurationUnit::Year),
            _ => Err(()),
        }
    }
}

/// Convert a raw duration (hours as a number, or `"<amount> <unit>"`) to hours.
pub fn parse_hours(input: &RawScalar) -> Quantity {
    match input {
        RawScalar::Number(hours) => Quantity::from_number(*hours),
        RawScalar::Text(text) => parse_hours_str(text),
        RawScalar::Other(_) => Quantity::Unknown,
    }
}

/// String form of [`parse_hours`]. A bare number is taken as hours; otherwise
/// the first token is the amount and the second the unit, and any further
/// tokens are ignored.
pub fn parse_hours_str(input: &str) -> Quantity {
    if let Some(hours) = parse_number(input) {
        return Quantity::from_number(hours);
    }

    let mut words = input.split_whitespace();
    let (Some(amount), Some(unit)) = (words.next(), words.next()) else {
        return Quantity::Unknown;
    };

    // A negative amount covers the -1 "already unknown" marker.
    let Some(amount) = parse_number(amount).filter(|a| *a >= 0.0) else {
        return Quantity::Unknown;
    };

    match unit.parse::<DurationUnit>() {
        Ok(unit) => Quantity::from_number(amount * unit.hours()),
        Err(()) => Quantity::Unknown,
    }
}
