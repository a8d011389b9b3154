use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(RoomId);
id_newtype!(ReservationId);
id_newtype!(UserId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => f.write_str("confirmed"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// A room in the fixed inventory. Persisted documents use camelCase keys, so
/// every serializable domain type pins that rename explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    /// Display label, e.g. "Double Room".
    pub room_type: String,
    /// Filter key; the inventory uses the display labels as type ids.
    pub type_id: String,
    pub price_per_night: u32,
    pub capacity: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
    pub availability: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    /// Denormalized copy of the room's display label at booking time.
    pub room_type: String,
    pub user_id: UserId,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub total_price: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthIdentity {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Auth slice state, persisted verbatim under the `auth` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<AuthIdentity>,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomTypeFilter {
    All,
    Type(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomFilters {
    /// Inclusive lower and upper bound on price per night.
    pub price_range: (u32, u32),
    pub room_type: RoomTypeFilter,
}

impl Default for RoomFilters {
    fn default() -> Self {
        Self {
            price_range: (0, 1000),
            room_type: RoomTypeFilter::All,
        }
    }
}

/// Partial filter update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub price_range: Option<(u32, u32)>,
    pub room_type: Option<RoomTypeFilter>,
}
