use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::RoomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing transient notification, the toast analogue. Presentation layers
/// decide how to render it; stores only produce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            description: None,
        }
    }

    pub fn success_with(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            description: None,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(description) = &self.description {
            write!(f, " {description}")?;
        }
        Ok(())
    }
}

/// Booking validation failures. These abort the operation before any state
/// transition runs and are surfaced to the user as a [`Notice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please login to book a room")]
    NotAuthenticated,
    #[error("Please select check-in and check-out dates")]
    MissingDates,
    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,
    #[error("A booking is already in progress")]
    BookingInProgress,
    #[error("Room '{0}' was not found")]
    RoomNotFound(RoomId),
}

impl From<&BookingError> for Notice {
    fn from(value: &BookingError) -> Self {
        Notice::error(value.to_string())
    }
}
