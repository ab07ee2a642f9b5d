use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use starship_core::LoadId;
use thiserror::Error;

use crate::catalog::CatalogLoader;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::progress::ChannelProgressSink;
use crate::{CatalogEvent, LoadError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] LoadError),
}

enum EngineCommand {
    Load { load_id: LoadId },
}

/// Runs catalog loads on a background thread and reports [`CatalogEvent`]s.
///
/// Loads run one at a time in the order they were requested.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<CatalogEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, base_url: impl Into<String>) -> Result<Self, EngineError> {
        let loader = CatalogLoader::new(ReqwestFetcher::new(settings)?).with_base_url(base_url);
        Self::with_loader(loader)
    }

    pub fn with_loader<F>(loader: CatalogLoader<F>) -> Result<Self, EngineError>
    where
        F: Fetcher + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(&loader, command, &event_tx));
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Queue a full catalog load. Events for it carry `load_id`.
    pub fn start_load(&self, load_id: LoadId) {
        let _ = self.cmd_tx.send(EngineCommand::Load { load_id });
    }

    pub fn try_recv(&self) -> Option<CatalogEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<CatalogEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command<F: Fetcher>(
    loader: &CatalogLoader<F>,
    command: EngineCommand,
    event_tx: &mpsc::Sender<CatalogEvent>,
) {
    match command {
        EngineCommand::Load { load_id } => {
            engine_info!("load {} starting at {}", load_id, loader.base_url());
            let sink = ChannelProgressSink::new(load_id, event_tx.clone());
            let result = loader.load_all(Some(&sink)).await;
            if let Err(err) = &result {
                engine_warn!("load {} failed: {}", load_id, err);
            }
            let _ = event_tx.send(CatalogEvent::Loaded { load_id, result });
        }
    }
}
