use super::*;

use chrono::TimeZone;
use shared::domain::ReservationStatus;
use tempfile::{tempdir, TempDir};

fn test_rooms() -> Vec<Room> {
    let mut rooms = Vec::new();
    for (id, type_id, price) in [
        ("room-a", "Single Room", 100),
        ("room-b", "Double Room", 180),
        ("room-c", "Suite", 480),
    ] {
        rooms.push(Room {
            id: RoomId::from(id),
            room_type: type_id.to_string(),
            type_id: type_id.to_string(),
            price_per_night: price,
            capacity: 2,
            amenities: Vec::new(),
            images: Vec::new(),
            description: String::new(),
            availability: true,
        });
    }
    rooms
}

fn identity() -> AuthIdentity {
    AuthIdentity {
        id: shared::domain::UserId::from("user_1"),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    }
}

fn open_session(dir: &TempDir) -> StorefrontSession {
    let store = LocalStore::open(dir.path()).expect("store");
    StorefrontSession::open(
        store,
        test_rooms(),
        SessionOptions {
            rooms_per_page: 2,
            booking_delay: Duration::ZERO,
        },
    )
}

fn dates() -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    (
        Some(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()),
        Some(Utc.with_ymd_and_hms(2026, 9, 3, 0, 0, 0).unwrap()),
    )
}

#[test]
fn login_persists_and_logout_clears_the_auth_document() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);

    session.login(identity()).expect("login");
    let store = LocalStore::open(dir.path()).expect("store");
    assert!(store.load_auth().is_authenticated);
    assert!(store
        .get_item(storage::AUTH_KEY)
        .expect("get")
        .is_some());

    session.logout().expect("logout");
    assert!(store.get_item(storage::AUTH_KEY).expect("get").is_none());
    assert!(!session.auth().is_authenticated);
}

#[test]
fn reopening_a_session_restores_persisted_state() {
    let dir = tempdir().expect("tempdir");

    {
        let mut session = open_session(&dir);
        session.login(identity()).expect("login");
        session
            .dispatch(Intent::Reservations(ReservationIntent::Add(
                ReservationDraft {
                    room_id: RoomId::from("room-a"),
                    room_type: "Single Room".to_string(),
                    user_id: shared::domain::UserId::from("user_1"),
                    check_in: dates().0.unwrap(),
                    check_out: dates().1.unwrap(),
                    total_price: 200,
                },
            )))
            .expect("add");
    }

    let session = open_session(&dir);
    assert!(session.auth().is_authenticated);
    assert_eq!(session.reservations().reservations.len(), 1);
    assert_eq!(session.reservations().reservations[0].total_price, 200);
}

#[tokio::test]
async fn booking_creates_a_confirmed_reservation_and_flips_availability() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);
    session.login(identity()).expect("login");

    let (check_in, check_out) = dates();
    let reservation = session
        .book(&RoomId::from("room-a"), check_in, check_out)
        .await
        .expect("book");

    // $100/night for 2 nights.
    assert_eq!(reservation.total_price, 200);
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.room_type, "Single Room");
    assert!(!session
        .catalog()
        .room(&RoomId::from("room-a"))
        .expect("room")
        .availability);
    assert!(!session.booking_in_flight());

    // Persisted alongside the transition.
    let store = LocalStore::open(dir.path()).expect("store");
    assert_eq!(store.load_reservations().len(), 1);
}

#[tokio::test]
async fn booking_requires_authentication() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);

    let (check_in, check_out) = dates();
    let err = session
        .book(&RoomId::from("room-a"), check_in, check_out)
        .await
        .expect_err("must fail");
    assert_eq!(
        err.downcast_ref::<BookingError>(),
        Some(&BookingError::NotAuthenticated)
    );
    assert!(session.reservations().reservations.is_empty());
}

#[tokio::test]
async fn booking_rejects_missing_or_inverted_dates() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);
    session.login(identity()).expect("login");

    let err = session
        .book(&RoomId::from("room-a"), None, dates().1)
        .await
        .expect_err("missing date");
    assert_eq!(
        err.downcast_ref::<BookingError>(),
        Some(&BookingError::MissingDates)
    );

    let err = session
        .book(&RoomId::from("room-a"), dates().1, dates().0)
        .await
        .expect_err("inverted range");
    assert_eq!(
        err.downcast_ref::<BookingError>(),
        Some(&BookingError::InvalidDateRange)
    );

    // Validation failures leave both state and storage untouched.
    assert!(session.reservations().reservations.is_empty());
    let store = LocalStore::open(dir.path()).expect("store");
    assert!(store
        .get_item(storage::RESERVATIONS_KEY)
        .expect("get")
        .is_none());
}

#[tokio::test]
async fn booking_an_unknown_room_fails() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);
    session.login(identity()).expect("login");

    let (check_in, check_out) = dates();
    let err = session
        .book(&RoomId::from("room-z"), check_in, check_out)
        .await
        .expect_err("unknown room");
    assert_eq!(
        err.downcast_ref::<BookingError>(),
        Some(&BookingError::RoomNotFound(RoomId::from("room-z")))
    );
}

#[tokio::test]
async fn cancellation_does_not_restore_availability_by_itself() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);
    session.login(identity()).expect("login");

    let (check_in, check_out) = dates();
    let reservation = session
        .book(&RoomId::from("room-b"), check_in, check_out)
        .await
        .expect("book");

    session.cancel_reservation(&reservation.id).expect("cancel");
    assert_eq!(
        session
            .reservations()
            .get(&reservation.id)
            .expect("reservation")
            .status,
        ReservationStatus::Cancelled
    );
    // Still flagged unavailable until the caller restores it.
    assert!(!session
        .catalog()
        .room(&RoomId::from("room-b"))
        .expect("room")
        .availability);

    session
        .restore_room_availability(&RoomId::from("room-b"))
        .expect("restore");
    assert!(session
        .catalog()
        .room(&RoomId::from("room-b"))
        .expect("room")
        .availability);
}

#[test]
fn cancelling_an_unknown_reservation_is_silent() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_session(&dir);

    session
        .cancel_reservation(&ReservationId::from("res_missing"))
        .expect("cancel");
    assert!(session.reservations().reservations.is_empty());
}
