use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use shared::{
    domain::{AuthIdentity, AuthState, Reservation, ReservationId, Room, RoomId},
    error::BookingError,
};
use storage::LocalStore;

use crate::{
    auth::{self, AuthIntent},
    catalog::{CatalogIntent, CatalogState, DEFAULT_ROOMS_PER_PAGE},
    reservations::{self, ReservationDraft, ReservationIntent, ReservationsState},
};

/// Artificial delay standing in for the booking round-trip.
pub const DEFAULT_BOOKING_DELAY: Duration = Duration::from_millis(1500);

/// The full state tree. Each slice is owned exclusively by its module and only
/// changes through [`AppState::apply`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub reservations: ReservationsState,
    pub auth: AuthState,
}

#[derive(Debug, Clone)]
pub enum Intent {
    Catalog(CatalogIntent),
    Reservations(ReservationIntent),
    Auth(AuthIntent),
}

impl AppState {
    /// Pure transition: consumes the current state and returns the next one.
    /// `now` is threaded in so reservation timestamps stay testable.
    pub fn apply(self, intent: Intent, now: DateTime<Utc>) -> Self {
        match intent {
            Intent::Catalog(intent) => Self {
                catalog: self.catalog.apply(intent),
                ..self
            },
            Intent::Reservations(intent) => Self {
                reservations: self.reservations.apply(intent, now),
                ..self
            },
            Intent::Auth(intent) => Self {
                auth: auth::apply(self.auth, intent),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub rooms_per_page: usize,
    pub booking_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rooms_per_page: DEFAULT_ROOMS_PER_PAGE,
            booking_delay: DEFAULT_BOOKING_DELAY,
        }
    }
}

/// Session facade over the state tree: rehydrates persisted slices at startup,
/// applies intents, and persists the touched slice after each successful
/// transition. The transitions themselves stay side-effect-free.
pub struct StorefrontSession {
    state: AppState,
    store: LocalStore,
    booking_delay: Duration,
    booking_in_flight: bool,
}

enum PersistTarget {
    Auth,
    Reservations,
}

fn persistence_target(intent: &Intent) -> Option<PersistTarget> {
    match intent {
        Intent::Auth(_) => Some(PersistTarget::Auth),
        Intent::Reservations(_) => Some(PersistTarget::Reservations),
        // The room list is a static seed; catalog state is never persisted.
        Intent::Catalog(_) => None,
    }
}

impl StorefrontSession {
    pub fn open(store: LocalStore, rooms: Vec<Room>, options: SessionOptions) -> Self {
        let auth = store.load_auth();
        let reservations = ReservationsState::new(store.load_reservations());

        if let Some(user) = &auth.user {
            info!(user_id = %user.id, "restored authenticated session");
        }
        debug!(
            reservations = reservations.reservations.len(),
            rooms = rooms.len(),
            "session opened"
        );

        Self {
            state: AppState {
                catalog: CatalogState::new(rooms, options.rooms_per_page),
                reservations,
                auth,
            },
            store,
            booking_delay: options.booking_delay,
            booking_in_flight: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.state.catalog
    }

    pub fn reservations(&self) -> &ReservationsState {
        &self.state.reservations
    }

    pub fn auth(&self) -> &AuthState {
        &self.state.auth
    }

    pub fn booking_in_flight(&self) -> bool {
        self.booking_in_flight
    }

    /// Applies an intent and persists the slice it touches.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        self.dispatch_at(intent, Utc::now())
    }

    fn dispatch_at(&mut self, intent: Intent, now: DateTime<Utc>) -> Result<()> {
        let target = persistence_target(&intent);
        debug!(?intent, "applying intent");

        let state = std::mem::take(&mut self.state);
        self.state = state.apply(intent, now);

        match target {
            Some(PersistTarget::Auth) => {
                if self.state.auth.is_authenticated {
                    self.store.save_auth(&self.state.auth)?;
                } else {
                    self.store.clear_auth()?;
                }
            }
            Some(PersistTarget::Reservations) => {
                self.store
                    .save_reservations(&self.state.reservations.reservations)?;
            }
            None => {}
        }
        Ok(())
    }

    pub fn login(&mut self, identity: AuthIdentity) -> Result<()> {
        info!(user_id = %identity.id, "login");
        self.dispatch(Intent::Auth(AuthIntent::Login(identity)))
    }

    pub fn signup(&mut self, identity: AuthIdentity) -> Result<()> {
        info!(user_id = %identity.id, "signup");
        self.dispatch(Intent::Auth(AuthIntent::Signup(identity)))
    }

    pub fn logout(&mut self) -> Result<()> {
        info!("logout");
        self.dispatch(Intent::Auth(AuthIntent::Logout))
    }

    /// Books a room: validates input, waits out the simulated booking delay,
    /// then issues the add-reservation and availability-flip intents. The two
    /// dispatches are deliberately separate, matching the storefront contract.
    pub async fn book(
        &mut self,
        room_id: &RoomId,
        check_in: Option<DateTime<Utc>>,
        check_out: Option<DateTime<Utc>>,
    ) -> Result<Reservation> {
        if self.booking_in_flight {
            return Err(BookingError::BookingInProgress.into());
        }
        if !self.state.auth.is_authenticated {
            return Err(BookingError::NotAuthenticated.into());
        }
        let user_id = self
            .state
            .auth
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .ok_or(BookingError::NotAuthenticated)?;

        let (check_in, check_out) = match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return Err(BookingError::MissingDates.into()),
        };
        if check_in >= check_out {
            return Err(BookingError::InvalidDateRange.into());
        }

        let room = self
            .state
            .catalog
            .room(room_id)
            .cloned()
            .ok_or_else(|| BookingError::RoomNotFound(room_id.clone()))?;
        let total_price = reservations::total_price(room.price_per_night, check_in, check_out);

        self.booking_in_flight = true;
        tokio::time::sleep(self.booking_delay).await;

        let draft = ReservationDraft {
            room_id: room.id.clone(),
            room_type: room.room_type.clone(),
            user_id,
            check_in,
            check_out,
            total_price,
        };
        let result = self
            .dispatch(Intent::Reservations(ReservationIntent::Add(draft)))
            .and_then(|()| {
                self.dispatch(Intent::Catalog(CatalogIntent::SetAvailability {
                    room_id: room.id.clone(),
                    available: false,
                }))
            });
        self.booking_in_flight = false;
        result?;

        let reservation = self
            .state
            .reservations
            .reservations
            .last()
            .cloned()
            .context("reservation missing after booking")?;
        info!(
            reservation_id = %reservation.id,
            room_id = %room.id,
            total_price,
            "booking confirmed"
        );
        Ok(reservation)
    }

    /// Flips a reservation to cancelled. Does not restore room availability;
    /// callers issue [`StorefrontSession::restore_room_availability`]
    /// separately, as the dashboard does.
    pub fn cancel_reservation(&mut self, id: &ReservationId) -> Result<()> {
        info!(reservation_id = %id, "cancelling reservation");
        self.dispatch(Intent::Reservations(ReservationIntent::Cancel(id.clone())))
    }

    pub fn restore_room_availability(&mut self, room_id: &RoomId) -> Result<()> {
        self.dispatch(Intent::Catalog(CatalogIntent::SetAvailability {
            room_id: room_id.clone(),
            available: true,
        }))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
