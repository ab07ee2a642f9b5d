use serde::Deserialize;
use starship_core::RawStarship;

use crate::{FailureKind, LoadError};

/// One page of the catalog as served by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPage {
    pub results: Vec<RawStarship>,
    /// Total number of records across all pages.
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
}

impl RawPage {
    /// Link to the following page. An empty string counts as no link.
    pub fn next_link(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.trim().is_empty())
    }
}

pub fn decode_page(bytes: &[u8]) -> Result<RawPage, LoadError> {
    serde_json::from_slice(bytes)
        .map_err(|err| LoadError::new(FailureKind::Parse, format!("Malformed page: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_results_count_and_next() {
        let page = decode_page(
            br#"{"count":2,"next":"https://swapi.dev/api/starships/?page=2","previous":null,
                "results":[{"name":"CR90 corvette","consumables":"1 year","MGLT":"60"}]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 1);
        assert_eq!(
            page.next_link(),
            Some("https://swapi.dev/api/starships/?page=2")
        );
    }

    #[test]
    fn null_or_empty_next_ends_pagination() {
        let page = decode_page(br#"{"count":0,"next":null,"results":[]}"#).unwrap();
        assert_eq!(page.next_link(), None);
        let page = decode_page(br#"{"count":0,"next":"","results":[]}"#).unwrap();
        assert_eq!(page.next_link(), None);
    }

    #[test]
    fn missing_results_is_a_parse_error() {
        let err = decode_page(br#"{"count":3}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::Parse);
        let err = decode_page(b"<html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::Parse);
    }
}
