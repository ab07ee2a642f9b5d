use std::fmt;

use starship_core::{LoadId, Starship};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProgress {
    pub load_id: LoadId,
    pub url: String,
    pub loaded: usize,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Progress(LoadProgress),
    Loaded {
        load_id: LoadId,
        result: Result<Vec<Starship>, LoadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    /// URL after redirects; relative pagination links resolve against it.
    pub final_url: String,
    pub content_type: Option<String>,
}

/// A fatal failure of a catalog load. The message is user facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoadError {
    pub kind: FailureKind,
    pub message: String,
}

impl LoadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Parse,
    PaginationLoop,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Parse => write!(f, "malformed page"),
            FailureKind::PaginationLoop => write!(f, "pagination loop"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
