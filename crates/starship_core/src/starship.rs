use thiserror::Error;

use crate::duration::{parse_hours, Quantity};
use crate::raw::{RawScalar, RawStarship};

/// Why a stops count could not be produced.
///
/// The first three variants are preconditions and are checked in declaration
/// order; `ZeroRange` is only reported once all of them pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StopsError {
    #[error("Invalid distance")]
    InvalidDistance,
    #[error("Unknown MGLT")]
    UnknownMglt,
    #[error("Unknown consumables")]
    UnknownConsumables,
    #[error("Cannot resupply: zero range")]
    ZeroRange,
}

/// A starship, normalized from one API record.
#[derive(Debug, Clone, PartialEq)]
pub struct Starship {
    name: String,
    consumables: Quantity,
    mglt: Quantity,
}

impl Starship {
    pub fn new(name: impl Into<String>, consumables: Quantity, mglt: Quantity) -> Self {
        Self {
            name: name.into(),
            consumables,
            mglt,
        }
    }

    /// Never fails: fields that cannot be normalized become [`Quantity::Unknown`].
    pub fn from_raw(raw: RawStarship) -> Self {
        let consumables = raw
            .consumables
            .as_ref()
            .map_or(Quantity::Unknown, parse_hours);
        let mglt = raw
            .mglt
            .as_ref()
            .and_then(RawScalar::as_number)
            .map_or(Quantity::Unknown, Quantity::from_number);

        Self {
            name: raw.name.unwrap_or_default(),
            consumables,
            mglt,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hours of consumables carried before a resupply is needed.
    pub fn consumables_hours(&self) -> Quantity {
        self.consumables
    }

    /// Megalights travelled per hour.
    pub fn mglt(&self) -> Quantity {
        self.mglt
    }

    /// Number of resupply stops needed to travel `distance` megalights.
    ///
    /// Direction does not matter, so the absolute distance is used, and the
    /// last partial leg needs no stop, so the count is rounded down.
    pub fn stops_needed(&self, distance: impl Into<RawScalar>) -> Result<u64, StopsError> {
        let distance = distance
            .into()
            .as_number()
            .ok_or(StopsError::InvalidDistance)?
            .abs();
        let mglt = self.mglt.value().ok_or(StopsError::UnknownMglt)?;
        let consumables = self
            .consumables
            .value()
            .ok_or(StopsError::UnknownConsumables)?;

        if distance == 0.0 {
            return Ok(0);
        }
        let range = mglt * consumables;
        if range == 0.0 {
            return Err(StopsError::ZeroRange);
        }
        // `as` saturates at u64::MAX for tiny ranges.
        Ok((distance / range).floor() as u64)
    }
}

impl From<RawStarship> for Starship {
    fn from(raw: RawStarship) -> Self {
        Starship::from_raw(raw)
    }
}
