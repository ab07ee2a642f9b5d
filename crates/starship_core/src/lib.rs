//! Starship core: duration normalization, starship records, the stops
//! calculation and the pure frontend state machine.
mod duration;
mod effect;
mod msg;
mod raw;
mod starship;
mod state;
mod update;
mod view_model;

pub use duration::{
    parse_hours, parse_hours_str, DurationUnit, Quantity, DAYS_PER_WEEK, DAYS_PER_YEAR,
    HOURS_PER_DAY, HOURS_PER_MONTH, HOURS_PER_WEEK, HOURS_PER_YEAR, MONTHS_PER_YEAR,
};
pub use effect::Effect;
pub use msg::Msg;
pub use raw::{RawScalar, RawStarship};
pub use starship::{Starship, StopsError};
pub use state::{AppState, LoadId, SessionState};
pub use update::update;
pub use view_model::{group_thousands, AppViewModel, StopsCell, StopsRowView};
