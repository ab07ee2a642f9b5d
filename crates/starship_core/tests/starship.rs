use starship_core::{Quantity, RawScalar, RawStarship, Starship, StopsError};

fn raw(name: Option<&str>, consumables: Option<&str>, mglt: Option<&str>) -> RawStarship {
    RawStarship {
        name: name.map(str::to_string),
        consumables: consumables.map(RawScalar::from),
        mglt: mglt.map(RawScalar::from),
    }
}

#[test]
fn record_is_normalized_from_raw_fields() {
    let ship = Starship::from_raw(raw(Some("Millennium Falcon"), Some("2 months"), Some("75")));

    assert_eq!(ship.name(), "Millennium Falcon");
    assert_eq!(ship.consumables_hours(), Quantity::Known(1461.0));
    assert_eq!(ship.mglt(), Quantity::Known(75.0));
}

#[test]
fn record_is_normalized_from_json() {
    let raw: RawStarship = serde_json::from_str(
        r#"{"name":"Y-wing","model":"BTL Y-wing","consumables":"1 week","MGLT":80}"#,
    )
    .unwrap();
    let ship = Starship::from(raw);

    assert_eq!(ship.consumables_hours(), Quantity::Known(168.0));
    assert_eq!(ship.mglt(), Quantity::Known(80.0));
}

#[test]
fn missing_and_invalid_fields_degrade_to_unknown() {
    let ship = Starship::from_raw(raw(None, Some("unknown"), Some("n/a")));
    assert_eq!(ship.name(), "");
    assert_eq!(ship.consumables_hours(), Quantity::Unknown);
    assert_eq!(ship.mglt(), Quantity::Unknown);

    let ship = Starship::from_raw(RawStarship::default());
    assert_eq!(ship.consumables_hours(), Quantity::Unknown);
    assert_eq!(ship.mglt(), Quantity::Unknown);

    let ship = Starship::from_raw(raw(Some("Odd"), Some("1 day"), Some("-5")));
    assert_eq!(ship.mglt(), Quantity::Unknown);

    let ship = Starship::from_raw(raw(Some("Blank"), Some("1 day"), Some("")));
    assert_eq!(ship.mglt(), Quantity::Unknown);
}

#[test]
fn zero_speed_is_known_not_unknown() {
    let ship = Starship::from_raw(raw(Some("Station"), Some("0"), Some("0")));
    assert_eq!(ship.mglt(), Quantity::Known(0.0));
    assert_eq!(ship.consumables_hours(), Quantity::Known(0.0));
}

#[test]
fn stops_are_floored_over_the_absolute_distance() {
    let falcon = Starship::new("Millennium Falcon", Quantity::Known(1461.0), Quantity::Known(75.0));
    assert_eq!(falcon.stops_needed(1_000_000.0), Ok(9));
    assert_eq!(falcon.stops_needed(-1_000_000.0), Ok(9));
    assert_eq!(falcon.stops_needed("1000000"), Ok(9));
    assert_eq!(falcon.stops_needed(109_575.0), Ok(1));
    assert_eq!(falcon.stops_needed(109_574.0), Ok(0));

    let y_wing = Starship::from_raw(raw(Some("Y-wing"), Some("1 week"), Some("80")));
    assert_eq!(y_wing.stops_needed(1_000_000.0), Ok(74));

    let transport = Starship::from_raw(raw(Some("Rebel transport"), Some("6 months"), Some("20")));
    assert_eq!(transport.stops_needed(1_000_000.0), Ok(11));
}

#[test]
fn invalid_distance_wins_over_every_other_error() {
    let unknown_all = Starship::new("Test", Quantity::Unknown, Quantity::Unknown);
    assert_eq!(unknown_all.stops_needed("unknown"), Err(StopsError::InvalidDistance));
    assert_eq!(unknown_all.stops_needed(""), Err(StopsError::InvalidDistance));
    assert_eq!(unknown_all.stops_needed(f64::NAN), Err(StopsError::InvalidDistance));
}

#[test]
fn unknown_mglt_wins_over_unknown_consumables() {
    let unknown_all = Starship::new("Test", Quantity::Unknown, Quantity::Unknown);
    assert_eq!(unknown_all.stops_needed(1_000_000.0), Err(StopsError::UnknownMglt));

    let unknown_mglt = Starship::from_raw(raw(Some("Test 1"), Some("3 weeks"), Some("unknown")));
    assert_eq!(unknown_mglt.stops_needed(1_000_000.0), Err(StopsError::UnknownMglt));
}

#[test]
fn unknown_consumables_is_reported_last() {
    let ship = Starship::from_raw(raw(Some("Test 2"), Some("unknown"), Some("88")));
    assert_eq!(ship.stops_needed(1_000_000.0), Err(StopsError::UnknownConsumables));
}

#[test]
fn zero_range_is_an_explicit_error_unless_nothing_is_travelled() {
    let station = Starship::new("Station", Quantity::Known(8766.0), Quantity::Known(0.0));
    assert_eq!(station.stops_needed(10.0), Err(StopsError::ZeroRange));
    assert_eq!(station.stops_needed(0.0), Ok(0));
}

#[test]
fn error_messages_match_the_table_text() {
    assert_eq!(StopsError::InvalidDistance.to_string(), "Invalid distance");
    assert_eq!(StopsError::UnknownMglt.to_string(), "Unknown MGLT");
    assert_eq!(StopsError::UnknownConsumables.to_string(), "Unknown consumables");
}
