use pretty_assertions::assert_eq;
use starship_core::{
    update, AppState, Effect, Msg, Quantity, SessionState, Starship, StopsCell, StopsError,
    StopsRowView,
};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn started() -> (AppState, u64) {
    let (state, effects) = update(AppState::new(), Msg::Start);
    let load_id = match effects.as_slice() {
        [Effect::LoadCatalog { load_id }] => *load_id,
        other => panic!("unexpected effects {other:?}"),
    };
    (state, load_id)
}

fn fleet() -> Vec<Starship> {
    vec![
        Starship::new("Millennium Falcon", Quantity::Known(1461.0), Quantity::Known(75.0)),
        Starship::new("Death Star", Quantity::Known(26298.0), Quantity::Unknown),
    ]
}

#[test]
fn start_enters_loading_and_requests_a_load() {
    init_logging();
    let (mut state, load_id) = started();

    assert_eq!(load_id, 1);
    assert_eq!(state.session(), SessionState::Loading);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    // A second start while loading is ignored.
    let (_state, effects) = update(state, Msg::Start);
    assert!(effects.is_empty());
}

#[test]
fn progress_updates_label_and_percent() {
    let (state, load_id) = started();
    let (state, _) = update(
        state,
        Msg::LoadProgress {
            load_id,
            url: "https://swapi.dev/api/starships/".to_string(),
            loaded: 10,
            total: 36,
        },
    );

    let view = state.view();
    assert_eq!(view.progress_label.as_deref(), Some("10 of 36 starships loaded."));
    assert_eq!(view.progress_percent, Some(27));
    assert_eq!(view.last_url.as_deref(), Some("https://swapi.dev/api/starships/"));
    assert_eq!(view.session, SessionState::Loading);
}

#[test]
fn finished_load_fills_rows_for_the_current_distance() {
    let (state, load_id) = started();
    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id,
            result: Ok(fleet()),
        },
    );
    assert_eq!(state.session(), SessionState::Ready);
    assert_eq!(state.view().progress_label, None);
    assert!(state.view().rows.is_empty());

    let (state, _) = update(state, Msg::DistanceChanged("1000000".to_string()));
    assert_eq!(
        state.view().rows,
        vec![
            StopsRowView {
                name: "Millennium Falcon".to_string(),
                stops: StopsCell::Stops(9),
            },
            StopsRowView {
                name: "Death Star".to_string(),
                stops: StopsCell::Unavailable(StopsError::UnknownMglt),
            },
        ]
    );

    let (state, _) = update(state, Msg::DistanceChanged("far".to_string()));
    assert!(state
        .view()
        .rows
        .iter()
        .all(|row| row.stops == StopsCell::Unavailable(StopsError::InvalidDistance)));
}

#[test]
fn failure_keeps_message_and_retry_starts_a_new_load() {
    let (state, load_id) = started();
    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id,
            result: Err("Server error: 500 Internal Server Error".to_string()),
        },
    );
    let view = state.view();
    assert_eq!(view.session, SessionState::Failed);
    assert_eq!(
        view.error_message.as_deref(),
        Some("Server error: 500 Internal Server Error")
    );

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(effects, vec![Effect::LoadCatalog { load_id: 2 }]);
    assert_eq!(state.session(), SessionState::Loading);
    assert_eq!(state.view().error_message, None);
}

#[test]
fn reload_replaces_the_catalog_wholesale() {
    let (state, load_id) = started();
    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id,
            result: Ok(fleet()),
        },
    );
    assert_eq!(state.starships().len(), 2);

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(effects, vec![Effect::LoadCatalog { load_id: 2 }]);
    assert!(state.starships().is_empty());

    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id: 2,
            result: Ok(fleet()[..1].to_vec()),
        },
    );
    assert_eq!(state.starships().len(), 1);
}

#[test]
fn events_from_a_stale_load_are_ignored() {
    let (state, first) = started();
    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id: first,
            result: Err("boom".to_string()),
        },
    );
    let (state, _) = update(state, Msg::RetryClicked);

    let (state, _) = update(
        state,
        Msg::LoadProgress {
            load_id: first,
            url: "stale".to_string(),
            loaded: 99,
            total: 99,
        },
    );
    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id: first,
            result: Ok(fleet()),
        },
    );

    assert_eq!(state.session(), SessionState::Loading);
    assert_eq!(state.view().progress_label, None);
    assert!(state.starships().is_empty());
}

#[test]
fn retry_is_ignored_while_loading() {
    let (state, _) = started();
    let (state, effects) = update(state, Msg::RetryClicked);
    assert!(effects.is_empty());
    assert_eq!(state.load_id(), 1);
}

#[test]
fn tick_leaves_the_state_untouched() {
    let (mut state, _) = started();
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state.clone(), Msg::Tick);
    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(!next.consume_dirty());
}
