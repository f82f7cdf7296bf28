use chrono::{NaiveDate, TimeZone, Utc};
use edmtrain_api::types::{EventsResponse, LocationsResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_events_full() {
    let json = load_fixture("events.json");
    let resp: EventsResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.events.len(), 2);

    let event = &resp.events[0];
    assert_eq!(event.id, 3151725);
    assert_eq!(event.link, "https://edmtrain.com/denver-co?event=3151725");
    assert_eq!(event.name.as_deref(), Some("Decadence Colorado"));
    assert_eq!(
        event.ticket_link.as_deref(),
        Some("https://www.axs.com/events/528819/decadence-colorado-tickets")
    );
    assert_eq!(event.ages.as_deref(), Some("18+"));
    assert!(event.festival_ind);
    assert!(event.electronic_genre_ind);
    assert!(!event.other_genre_ind);
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
    assert_eq!(
        event.created_date,
        Utc.with_ymd_and_hms(2024, 9, 12, 17, 42, 20).unwrap()
    );

    assert_eq!(event.venue.id, 70941);
    assert_eq!(event.venue.name, "Colorado Convention Center");
    assert_eq!(event.venue.location, "Denver, CO");
    assert_eq!(
        event.venue.address.as_deref(),
        Some("700 14th St, Denver, CO 80202")
    );
    assert_eq!(event.venue.state.as_deref(), Some("CO"));
    assert_eq!(event.venue.latitude, Some(39.7433814));
    assert_eq!(event.venue.longitude, Some(-104.9970151));
    assert!(!event.venue.is_virtual());

    assert_eq!(event.artist_list.len(), 2);
    assert_eq!(event.artist_list[0].id, 259);
    assert_eq!(event.artist_list[0].name, "Zeds Dead");
    assert_eq!(event.artist_list[1].name, "Subtronics");
}

#[test]
fn deserialize_virtual_event_with_missing_optionals() {
    let json = load_fixture("events.json");
    let resp: EventsResponse = serde_json::from_str(&json).unwrap();

    let event = &resp.events[1];
    assert_eq!(event.id, 3412001);
    assert!(event.name.is_none());
    assert!(event.ticket_link.is_none());
    assert!(event.ages.is_none());
    assert!(event.artist_list.is_empty());

    assert!(event.venue.is_virtual());
    assert_eq!(event.venue.name, "Insomniac TV");
    assert!(event.venue.address.is_none());
    assert!(event.venue.state.is_none());
    assert!(event.venue.latitude.is_none());
    assert!(event.venue.longitude.is_none());
}

#[test]
fn envelope_accepts_both_array_keys() {
    let named_key: EventsResponse =
        serde_json::from_str(r#"{"success": true, "events": []}"#).unwrap();
    assert!(named_key.success);
    assert!(named_key.events.is_empty());

    let data_key: EventsResponse =
        serde_json::from_str(r#"{"success": true, "data": []}"#).unwrap();
    assert!(data_key.events.is_empty());

    let locations: LocationsResponse =
        serde_json::from_str(r#"{"success": true, "locations": []}"#).unwrap();
    assert!(locations.locations.is_empty());
}

#[test]
fn failure_envelope_keeps_the_server_message() {
    let resp: EventsResponse =
        serde_json::from_str(r#"{"success": false, "message": "bad token"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("bad token"));
    assert!(resp.events.is_empty());
}

#[test]
fn deserialize_locations() {
    let json = load_fixture("locations.json");
    let resp: LocationsResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.locations.len(), 2);

    let denver = &resp.locations[0];
    assert_eq!(denver.id, 36);
    assert_eq!(denver.city.as_deref(), Some("Denver"));
    assert_eq!(denver.state.as_deref(), Some("Colorado"));
    assert_eq!(denver.state_code.as_deref(), Some("CO"));
    assert_eq!(denver.latitude, 39.7392358);
    assert_eq!(denver.link.as_deref(), Some("https://edmtrain.com/denver-co"));

    assert_eq!(resp.locations[1].state_code.as_deref(), Some("WA"));
}

#[test]
fn deserialize_location_with_missing_optionals() {
    let json = r#"{"success": true, "data": [{"id": 105, "latitude": 0.0, "longitude": 0.0}]}"#;
    let resp: LocationsResponse = serde_json::from_str(json).unwrap();

    let location = &resp.locations[0];
    assert_eq!(location.id, 105);
    assert!(location.city.is_none());
    assert!(location.state.is_none());
    assert!(location.state_code.is_none());
    assert!(location.link.is_none());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let result = serde_json::from_str::<EventsResponse>("{not valid json}");
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"success": true, "data": [{"id": 1}]}"#;
    let result = serde_json::from_str::<EventsResponse>(json);
    assert!(result.is_err());
}
