//! # Services Module
//!
//! Everything that talks to the outside world: the bearer-credential session
//! context, the store traits the domain layer consumes, and the HTTP client
//! that implements them against the remote admin API.

pub mod api;
pub mod session;
pub mod traits;

pub use api::ApiClient;
pub use session::Session;
pub use traits::{BookingStore, ItineraryStore, TourStore};
