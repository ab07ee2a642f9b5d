use serde::Deserialize;

/// A loosely typed scalar as it appears in an API payload.
///
/// The API reports numbers as strings (`"75"`), as words (`"unknown"`,
/// `"n/a"`) or as JSON numbers depending on the field and record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawScalar {
    /// The finite numeric value of this scalar, if it has one.
    ///
    /// Strings are trimmed before parsing; empty strings, `NaN` and infinities
    /// are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawScalar::Number(value) => Some(*value).filter(|v| v.is_finite()),
            RawScalar::Text(text) => parse_number(text),
            RawScalar::Other(_) => None,
        }
    }
}

impl From<f64> for RawScalar {
    fn from(value: f64) -> Self {
        RawScalar::Number(value)
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        RawScalar::Text(value.to_string())
    }
}

impl From<String> for RawScalar {
    fn from(value: String) -> Self {
        RawScalar::Text(value)
    }
}

impl From<&RawScalar> for RawScalar {
    fn from(value: &RawScalar) -> Self {
        value.clone()
    }
}

/// One item of a page's `results` array. Only the fields used for the stops
/// calculation are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawStarship {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub consumables: Option<RawScalar>,
    #[serde(default, rename = "MGLT", alias = "speed")]
    pub mglt: Option<RawScalar>,
}

pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
