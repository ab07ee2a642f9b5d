use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Start => match state.session() {
            SessionState::Idle => vec![Effect::LoadCatalog {
                load_id: state.begin_load(),
            }],
            SessionState::Loading | SessionState::Ready | SessionState::Failed => Vec::new(),
        },
        Msg::RetryClicked => match state.session() {
            SessionState::Failed | SessionState::Ready => vec![Effect::LoadCatalog {
                load_id: state.begin_load(),
            }],
            // A load cannot be cancelled, so a retry while loading is dropped.
            SessionState::Idle | SessionState::Loading => Vec::new(),
        },
        Msg::LoadProgress {
            load_id,
            url,
            loaded,
            total,
        } => {
            state.apply_progress(load_id, url, loaded, total);
            Vec::new()
        }
        Msg::LoadFinished { load_id, result } => {
            state.apply_finished(load_id, result);
            Vec::new()
        }
        Msg::DistanceChanged(input) => {
            state.set_distance(input);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
