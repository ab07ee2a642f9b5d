use std::collections::HashSet;

use engine_logging::{engine_debug, engine_info, engine_warn};
use starship_core::Starship;
use url::Url;

use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::page::decode_page;
use crate::progress::{PageProgress, ProgressSink};
use crate::{FailureKind, LoadError};

/// First page of the starship catalog.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/starships/";

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub url: String,
    pub starships: Vec<Starship>,
    /// Total the server reports across all pages.
    pub count: u64,
}

/// Where the next page comes from: the start URL, or a link as written in
/// the previous page together with the URL it is relative to.
enum NextPage {
    Start(String),
    Link { base: String, link: String },
}

/// Lazy sequence of catalog pages, following `next` links.
///
/// Each page's URL is only known once the previous one has been decoded, so
/// pages are fetched strictly one after another. A page is yielded before its
/// `next` link is resolved, so a bad link fails the following step. The
/// sequence ends after the last page or after the first error, and cannot be
/// restarted.
pub struct Pages<'a> {
    fetcher: &'a dyn Fetcher,
    next: Option<NextPage>,
    visited: HashSet<String>,
}

impl<'a> Pages<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, start_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            next: Some(NextPage::Start(start_url.into())),
            visited: HashSet::new(),
        }
    }

    pub async fn next_page(&mut self) -> Option<Result<Page, LoadError>> {
        let url = match self.next.take()? {
            NextPage::Start(url) => url,
            NextPage::Link { base, link } => match resolve_link(&base, &link) {
                Ok(url) => url,
                Err(err) => return Some(Err(err)),
            },
        };
        if !self.visited.insert(normalize(&url)) {
            return Some(Err(LoadError::new(
                FailureKind::PaginationLoop,
                format!("Pagination loop: {url} was already loaded"),
            )));
        }
        Some(self.fetch_page(url).await)
    }

    async fn fetch_page(&mut self, url: String) -> Result<Page, LoadError> {
        let output = self.fetcher.fetch(&url).await?;
        let raw = decode_page(&output.bytes)?;
        engine_info!("data loaded from {}", url);
        engine_debug!(
            "page {} ({:?}) carried {} of {} records, next={:?}",
            url,
            output.content_type,
            raw.results.len(),
            raw.count,
            raw.next_link()
        );

        self.next = raw.next_link().map(|link| NextPage::Link {
            base: output.final_url.clone(),
            link: link.to_string(),
        });

        Ok(Page {
            url,
            starships: raw.results.into_iter().map(Starship::from_raw).collect(),
            count: raw.count,
        })
    }
}

/// Loads the whole starship catalog, one page at a time.
pub struct CatalogLoader<F: Fetcher = ReqwestFetcher> {
    fetcher: F,
    base_url: String,
}

impl<F: Fetcher> CatalogLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pages(&self) -> Pages<'_> {
        self.pages_from(&self.base_url)
    }

    pub fn pages_from(&self, url: &str) -> Pages<'_> {
        Pages::new(&self.fetcher, url)
    }

    /// Fetch every page starting at the base URL.
    pub async fn load_all(
        &self,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<Vec<Starship>, LoadError> {
        self.load_all_from(&self.base_url, progress).await
    }

    /// Fetch every page starting at `url`, reporting after each one.
    ///
    /// Any failure fails the whole load; starships from earlier pages are
    /// dropped rather than returned.
    pub async fn load_all_from(
        &self,
        url: &str,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<Vec<Starship>, LoadError> {
        let mut starships = Vec::new();
        let mut pages = self.pages_from(url);

        while let Some(page) = pages.next_page().await {
            let page = page.inspect_err(|err| {
                engine_warn!("catalog load from {} failed: {} ({})", url, err, err.kind);
            })?;
            starships.extend(page.starships);
            if let Some(sink) = progress {
                sink.on_page(&PageProgress {
                    url: &page.url,
                    starships: &starships,
                    total: page.count,
                });
            }
        }

        engine_info!("catalog complete: {} starships", starships.len());
        Ok(starships)
    }
}

fn resolve_link(base: &str, link: &str) -> Result<String, LoadError> {
    Url::parse(base)
        .and_then(|base| base.join(link))
        .map(String::from)
        .map_err(|err| {
            LoadError::new(
                FailureKind::InvalidUrl,
                format!("Invalid next link {link:?}: {err}"),
            )
        })
}

fn normalize(url: &str) -> String {
    Url::parse(url).map_or_else(|_| url.to_string(), String::from)
}
