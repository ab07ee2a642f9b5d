//! Starship engine: paginated catalog retrieval and progress reporting.
mod catalog;
mod engine;
mod fetch;
mod page;
mod progress;
mod types;

pub use catalog::{CatalogLoader, Page, Pages, DEFAULT_BASE_URL};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use page::{decode_page, RawPage};
pub use progress::{ChannelProgressSink, NullProgress, PageProgress, ProgressSink};
pub use types::{CatalogEvent, FailureKind, FetchOutput, LoadError, LoadProgress};
