use crate::view_model::{AppViewModel, StopsCell, StopsRowView};
use crate::Starship;

pub type LoadId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    session: SessionState,
    load_id: LoadId,
    starships: Vec<Starship>,
    loaded: usize,
    total: Option<u64>,
    last_url: Option<String>,
    error: Option<String>,
    distance_input: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Id of the most recently started load; events for older ids are stale.
    pub fn load_id(&self) -> LoadId {
        self.load_id
    }

    pub fn starships(&self) -> &[Starship] {
        &self.starships
    }

    pub fn distance_input(&self) -> &str {
        &self.distance_input
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let progress_label = self
            .total
            .map(|total| format!("{} of {} starships loaded.", self.loaded, total));
        let progress_percent = self.total.map(|total| percent(self.loaded, total));

        let rows = if self.session == SessionState::Ready && !self.distance_input.trim().is_empty()
        {
            self.starships
                .iter()
                .map(|ship| StopsRowView {
                    name: ship.name().to_string(),
                    stops: StopsCell::from(ship.stops_needed(self.distance_input.as_str())),
                })
                .collect()
        } else {
            Vec::new()
        };

        AppViewModel {
            session: self.session,
            progress_label,
            progress_percent,
            last_url: self.last_url.clone(),
            error_message: self.error.clone(),
            distance: self.distance_input.clone(),
            rows,
            dirty: self.dirty,
        }
    }

    /// Reset for a fresh load. The previous catalog is dropped wholesale.
    pub(crate) fn begin_load(&mut self) -> LoadId {
        self.load_id += 1;
        self.session = SessionState::Loading;
        self.starships.clear();
        self.loaded = 0;
        self.total = None;
        self.last_url = None;
        self.error = None;
        self.mark_dirty();
        self.load_id
    }

    pub(crate) fn apply_progress(&mut self, load_id: LoadId, url: String, loaded: usize, total: u64) {
        if !self.is_current(load_id) {
            return;
        }
        self.loaded = loaded;
        self.total = Some(total);
        self.last_url = Some(url);
        self.mark_dirty();
    }

    pub(crate) fn apply_finished(
        &mut self,
        load_id: LoadId,
        result: Result<Vec<Starship>, String>,
    ) {
        if !self.is_current(load_id) {
            return;
        }
        match result {
            Ok(starships) => {
                self.loaded = starships.len();
                self.starships = starships;
                self.session = SessionState::Ready;
            }
            Err(message) => {
                self.starships.clear();
                self.error = Some(message);
                self.session = SessionState::Failed;
            }
        }
        self.mark_dirty();
    }

    /// Always marks the state dirty so re-entering a distance recalculates.
    pub(crate) fn set_distance(&mut self, input: String) {
        self.distance_input = input;
        self.mark_dirty();
    }

    fn is_current(&self, load_id: LoadId) -> bool {
        self.session == SessionState::Loading && load_id == self.load_id
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn percent(loaded: usize, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (loaded as u64).saturating_mul(100) / total;
    pct.min(100) as u8
}
