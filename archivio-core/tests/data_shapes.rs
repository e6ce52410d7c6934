use archivio_core::aid::{Aid, AidUseRequest};
use archivio_core::challenge::{AttemptOutcome, AttemptRequest, Challenge, Outcome};
use archivio_core::settings::EventSettings;
use archivio_core::user::{Role, User};
use serde_json::{Value, json};

// The backend is authoritative for these payload shapes; the fixtures here
// mirror its responses field for field.

#[test]
fn challenge_payload_parses_with_optional_fields_absent() {
    let json = r#"{
        "id": "ch-1",
        "name": "Porta sigillata",
        "description": "Una porta di ferro senza serratura visibile.",
        "tests": [
            {
                "attribute": "Vigore + Scasso",
                "difficulty": 6,
                "success_text": "La porta cede.",
                "tie_text": "La porta scricchiola.",
                "failure_text": "La porta non si muove."
            }
        ]
    }"#;
    let c: Challenge = serde_json::from_str(json).unwrap();
    assert!(c.keywords.is_empty());
    assert!(!c.allow_refuge_defense);
    assert_eq!(c.tests.len(), 1);
}

#[test]
fn attempt_request_serializes_every_field() {
    let req = AttemptRequest {
        challenge_id: "ch-1".into(),
        test_index: 1,
        player_value: 4,
        use_refuge: true,
    };
    let v: Value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        json!({
            "challenge_id": "ch-1",
            "test_index": 1,
            "player_value": 4,
            "use_refuge": true
        })
    );
}

#[test]
fn attempt_outcome_parses_the_full_bundle() {
    let json = r#"{
        "player_value": 4,
        "player_roll": 6,
        "player_result": 24,
        "difficulty": 6,
        "difficulty_roll": 4,
        "difficulty_result": 24,
        "outcome": "tie",
        "message": "Parità: La porta scricchiola."
    }"#;
    let o: AttemptOutcome = serde_json::from_str(json).unwrap();
    assert_eq!(o.outcome, Outcome::Tie);
    assert_eq!(o.player_result, o.difficulty_result);
}

#[test]
fn aid_payload_tolerates_missing_window_fields() {
    let json = r#"{
        "id": "aid-1",
        "name": "Collegamento",
        "attribute": "Intelligenza",
        "levels": [
            {"level": 2, "level_name": "minore", "text": "Un indizio."}
        ]
    }"#;
    let a: Aid = serde_json::from_str(json).unwrap();
    assert!(a.event_date.is_empty());
    assert!(a.end_date.is_none() && a.start_time.is_none() && a.end_time.is_none());
}

#[test]
fn aid_use_request_matches_the_endpoint_body() {
    let req = AidUseRequest {
        aid_id: "aid-1".into(),
        level: 4,
        player_attribute_value: 5,
    };
    let v: Value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        json!({"aid_id": "aid-1", "level": 4, "player_attribute_value": 5})
    );
}

#[test]
fn user_role_is_lowercase_on_the_wire() {
    let json = r#"{
        "id": "u-1",
        "email": "custode@archivio.it",
        "username": "custode",
        "role": "admin",
        "max_actions": 10,
        "used_actions": 3
    }"#;
    let u: User = serde_json::from_str(json).unwrap();
    assert_eq!(u.role, Role::Admin);
    assert!(u.role.is_admin());

    let player: User = serde_json::from_str(&json.replace("admin", "player")).unwrap();
    assert_eq!(player.role, Role::Player);
}

#[test]
fn settings_round_trip_preserves_the_window() {
    let s = EventSettings {
        event_window_start: Some("2025-06-14T18:00".into()),
        event_window_end: Some("2025-06-15T02:00".into()),
        ..EventSettings::default()
    };
    let back: EventSettings = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
    assert_eq!(back, s);
    assert_eq!(back.window_key(), "2025-06-14T18:00|2025-06-15T02:00");
}
