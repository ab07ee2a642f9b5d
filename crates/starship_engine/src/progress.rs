use std::sync::mpsc;

use starship_core::{LoadId, Starship};

use crate::{CatalogEvent, LoadProgress};

/// Snapshot handed to a [`ProgressSink`] after each page is appended.
#[derive(Debug, Clone, Copy)]
pub struct PageProgress<'a> {
    /// URL the page was fetched from.
    pub url: &'a str,
    /// Every starship loaded so far, in page order.
    pub starships: &'a [Starship],
    /// Total the server expects across all pages.
    pub total: u64,
}

/// Called once per page, in page order, before the next page is requested.
/// Implementations must not block for long; the load waits on them.
pub trait ProgressSink: Send + Sync {
    fn on_page(&self, progress: &PageProgress<'_>);
}

impl<F> ProgressSink for F
where
    F: Fn(&PageProgress<'_>) + Send + Sync,
{
    fn on_page(&self, progress: &PageProgress<'_>) {
        self(progress)
    }
}

/// A no-op progress sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_page(&self, _progress: &PageProgress<'_>) {}
}

/// Forwards page counts to a channel as [`CatalogEvent::Progress`].
pub struct ChannelProgressSink {
    load_id: LoadId,
    tx: mpsc::Sender<CatalogEvent>,
}

impl ChannelProgressSink {
    pub fn new(load_id: LoadId, tx: mpsc::Sender<CatalogEvent>) -> Self {
        Self { load_id, tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn on_page(&self, progress: &PageProgress<'_>) {
        let _ = self.tx.send(CatalogEvent::Progress(LoadProgress {
            load_id: self.load_id,
            url: progress.url.to_string(),
            loaded: progress.starships.len(),
            total: progress.total,
        }));
    }
}
