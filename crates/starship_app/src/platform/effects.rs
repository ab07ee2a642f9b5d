use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use starship_core::{Effect, Msg};
use starship_engine::{CatalogEvent, EngineError, EngineHandle, FetchSettings};

/// Executes core effects against the engine and turns engine events into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, base_url: &str) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings, base_url)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog { load_id } => {
                    engine_info!("LoadCatalog load_id={}", load_id);
                    self.engine.start_load(load_id);
                }
            }
        }
    }

    /// Next engine event as a message, or `Msg::Tick` if none arrives in `wait`.
    pub fn next_msg(&self, wait: Duration) -> Msg {
        match self.engine.recv_timeout(wait) {
            Some(event) => map_event(event),
            None => Msg::Tick,
        }
    }
}

fn map_event(event: CatalogEvent) -> Msg {
    match event {
        CatalogEvent::Progress(progress) => Msg::LoadProgress {
            load_id: progress.load_id,
            url: progress.url,
            loaded: progress.loaded,
            total: progress.total,
        },
        CatalogEvent::Loaded { load_id, result } => Msg::LoadFinished {
            load_id,
            result: result.map_err(|err| {
                engine_warn!("Load {} failed: {} ({})", load_id, err, err.kind);
                err.to_string()
            }),
        },
    }
}
