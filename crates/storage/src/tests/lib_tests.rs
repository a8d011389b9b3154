use super::*;

use chrono::{TimeZone, Utc};
use shared::domain::{
    AuthIdentity, AuthState, Reservation, ReservationId, ReservationStatus, RoomId, UserId,
};
use tempfile::tempdir;

fn sample_auth() -> AuthState {
    AuthState {
        user: Some(AuthIdentity {
            id: UserId::from("user_1"),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }),
        is_authenticated: true,
    }
}

fn sample_reservation() -> Reservation {
    Reservation {
        id: ReservationId::from("res_1700000000000_abc123def"),
        room_id: RoomId::from("room-3"),
        room_type: "Suite".to_string(),
        user_id: UserId::from("user_1"),
        check_in: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
        check_out: Utc.with_ymd_and_hms(2026, 9, 3, 0, 0, 0).unwrap(),
        total_price: 700,
        status: ReservationStatus::Confirmed,
        created_at: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
    }
}

#[test]
fn returns_defaults_when_store_is_empty() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    let auth = store.load_auth();
    assert!(auth.user.is_none());
    assert!(!auth.is_authenticated);
    assert!(store.load_reservations().is_empty());
}

#[test]
fn creates_missing_store_directory() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("nested").join("store");

    LocalStore::open(&nested).expect("store");
    assert!(nested.exists());
}

#[test]
fn round_trips_auth_state() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    store.save_auth(&sample_auth()).expect("save auth");
    let loaded = store.load_auth();

    assert!(loaded.is_authenticated);
    let user = loaded.user.expect("user");
    assert_eq!(user.id, UserId::from("user_1"));
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn clear_auth_removes_the_entry() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    store.save_auth(&sample_auth()).expect("save auth");
    store.clear_auth().expect("clear auth");

    assert!(store.get_item(AUTH_KEY).expect("get").is_none());
    assert!(!store.load_auth().is_authenticated);
}

#[test]
fn round_trips_reservations() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    let reservation = sample_reservation();
    store
        .save_reservations(std::slice::from_ref(&reservation))
        .expect("save reservations");
    let loaded = store.load_reservations();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, reservation.id);
    assert_eq!(loaded[0].total_price, 700);
    assert_eq!(loaded[0].status, ReservationStatus::Confirmed);
    assert_eq!(loaded[0].check_in, reservation.check_in);
}

#[test]
fn malformed_auth_document_degrades_to_anonymous() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    store.set_item(AUTH_KEY, "{not valid json").expect("set");

    let auth = store.load_auth();
    assert!(auth.user.is_none());
    assert!(!auth.is_authenticated);
}

#[test]
fn malformed_reservations_document_degrades_to_empty() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    store.set_item(RESERVATIONS_KEY, "[{\"id\":").expect("set");
    assert!(store.load_reservations().is_empty());
}

#[test]
fn persisted_documents_use_camel_case_keys() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    store.save_auth(&sample_auth()).expect("save auth");
    let raw_auth = store.get_item(AUTH_KEY).expect("get").expect("auth doc");
    assert!(raw_auth.contains("\"isAuthenticated\":true"));

    store
        .save_reservations(&[sample_reservation()])
        .expect("save reservations");
    let raw = store
        .get_item(RESERVATIONS_KEY)
        .expect("get")
        .expect("reservations doc");
    assert!(raw.contains("\"roomId\""));
    assert!(raw.contains("\"totalPrice\""));
    assert!(raw.contains("\"status\":\"confirmed\""));
}

#[test]
fn removing_missing_entry_is_a_noop() {
    let dir = tempdir().expect("tempdir");
    let store = LocalStore::open(dir.path()).expect("store");

    store.remove_item("never-written").expect("remove");
}
