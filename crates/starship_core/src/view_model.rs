use std::fmt;

use crate::{SessionState, StopsError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    /// `"N of M starships loaded."` once the first page has arrived.
    pub progress_label: Option<String>,
    pub progress_percent: Option<u8>,
    pub last_url: Option<String>,
    pub error_message: Option<String>,
    pub distance: String,
    pub rows: Vec<StopsRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopsRowView {
    pub name: String,
    pub stops: StopsCell,
}

/// Table cell for a stops result: a count, or the reason there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopsCell {
    Stops(u64),
    Unavailable(StopsError),
}

impl StopsCell {
    /// Counts are right-aligned in the table; messages are not.
    pub fn is_numeric(&self) -> bool {
        matches!(self, StopsCell::Stops(_))
    }
}

impl From<Result<u64, StopsError>> for StopsCell {
    fn from(result: Result<u64, StopsError>) -> Self {
        match result {
            Ok(stops) => StopsCell::Stops(stops),
            Err(err) => StopsCell::Unavailable(err),
        }
    }
}

impl fmt::Display for StopsCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopsCell::Stops(stops) => f.write_str(&group_thousands(*stops)),
            StopsCell::Unavailable(err) => write!(f, "{err}"),
        }
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
