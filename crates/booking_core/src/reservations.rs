use chrono::{DateTime, Utc};
use shared::domain::{Reservation, ReservationId, ReservationStatus, RoomId, UserId};
use uuid::Uuid;

const SECONDS_PER_NIGHT: i64 = 86_400;
const ID_SUFFIX_LEN: usize = 9;

/// Reservation slice: an append-only list of bookings. Records are never
/// deleted; cancellation only flips the status.
#[derive(Debug, Clone, Default)]
pub struct ReservationsState {
    pub reservations: Vec<Reservation>,
}

/// Caller-supplied fields of a new booking; id, status and creation timestamp
/// are filled in by the transition.
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub room_id: RoomId,
    pub room_type: String,
    pub user_id: UserId,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub total_price: u32,
}

#[derive(Debug, Clone)]
pub enum ReservationIntent {
    Add(ReservationDraft),
    Cancel(ReservationId),
}

impl ReservationsState {
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self { reservations }
    }

    pub fn apply(mut self, intent: ReservationIntent, now: DateTime<Utc>) -> Self {
        match intent {
            ReservationIntent::Add(draft) => {
                self.reservations.push(Reservation {
                    id: generate_reservation_id(now),
                    room_id: draft.room_id,
                    room_type: draft.room_type,
                    user_id: draft.user_id,
                    check_in: draft.check_in,
                    check_out: draft.check_out,
                    total_price: draft.total_price,
                    status: ReservationStatus::Confirmed,
                    created_at: now,
                });
            }
            ReservationIntent::Cancel(id) => {
                // Unknown ids are ignored.
                if let Some(reservation) =
                    self.reservations.iter_mut().find(|r| r.id == id)
                {
                    reservation.status = ReservationStatus::Cancelled;
                }
            }
        }
        self
    }

    pub fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }

    pub fn active(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::Confirmed)
            .collect()
    }

    pub fn for_user(&self, user_id: &UserId) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| &r.user_id == user_id)
            .collect()
    }

    /// Lifetime spend: the sum of confirmed reservation totals for a user.
    pub fn total_spent(&self, user_id: &UserId) -> u64 {
        self.reservations
            .iter()
            .filter(|r| &r.user_id == user_id && r.status == ReservationStatus::Confirmed)
            .map(|r| u64::from(r.total_price))
            .sum()
    }
}

/// Number of nights between two instants, rounded up to whole nights.
/// Zero when the range is empty or inverted.
pub fn nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let seconds = check_out.signed_duration_since(check_in).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + SECONDS_PER_NIGHT - 1) / SECONDS_PER_NIGHT
}

pub fn total_price(price_per_night: u32, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> u32 {
    let nights = nights(check_in, check_out);
    u32::try_from(nights).map_or(0, |n| price_per_night.saturating_mul(n))
}

fn generate_reservation_id(now: DateTime<Utc>) -> ReservationId {
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix: String = uuid.chars().take(ID_SUFFIX_LEN).collect();
    ReservationId(format!("res_{}_{}", now.timestamp_millis(), suffix))
}

#[cfg(test)]
#[path = "tests/reservations_tests.rs"]
mod tests;
