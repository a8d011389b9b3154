pub mod auth;
pub mod catalog;
pub mod reservations;
pub mod seed;
pub mod session;

pub use session::{AppState, Intent, SessionOptions, StorefrontSession};
