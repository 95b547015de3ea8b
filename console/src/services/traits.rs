//! # Store Traits
//!
//! This module defines the store abstraction traits that the domain layer
//! consumes. The production implementation talks to the remote admin API over
//! HTTP; tests substitute in-memory stubs without touching the domain code.
//!
//! Every operation takes the session context explicitly so the credential is
//! attached per call rather than read from process-wide state.

use anyhow::Result;
use shared::{Booking, BookingPatch, BookingStatus, Itinerary, Tour, TourInput};

use crate::services::session::Session;

/// Trait defining the interface for booking store operations.
///
/// All operations are synchronous: the console is a single-operator desktop
/// app and serializes its remote calls on the UI thread.
pub trait BookingStore: Send + Sync {
    /// List bookings, optionally restricted to a single status
    fn list_bookings(&self, session: &Session, status: Option<BookingStatus>) -> Result<Vec<Booking>>;

    /// Apply a sparse update to one booking; fields absent from the patch
    /// keep their stored value
    fn update_booking(&self, session: &Session, patch: &BookingPatch) -> Result<()>;

    /// Delete a booking by id
    fn delete_booking(&self, session: &Session, id: i64) -> Result<()>;
}

/// Trait defining the interface for tour store operations.
pub trait TourStore: Send + Sync {
    /// List all tours
    fn list_tours(&self, session: &Session) -> Result<Vec<Tour>>;

    /// Create a tour; the store assigns the id
    fn create_tour(&self, session: &Session, input: &TourInput) -> Result<()>;

    /// Replace the fields of an existing tour
    fn update_tour(&self, session: &Session, id: i64, input: &TourInput) -> Result<()>;

    /// Delete a tour. The store marks bookings attached to it as unpaired,
    /// so callers should reload bookings afterwards.
    fn delete_tour(&self, session: &Session, id: i64) -> Result<()>;
}

/// Trait defining the interface for itinerary store operations.
pub trait ItineraryStore: Send + Sync {
    /// List the itinerary days of one tour, ordered by day number
    fn list_itineraries(&self, session: &Session, tour_id: i64) -> Result<Vec<Itinerary>>;

    /// Persist a new itinerary day (`record.id` must be `None`)
    fn create_itinerary(&self, session: &Session, record: &Itinerary) -> Result<()>;

    /// Update a persisted itinerary day (`record.id` must be `Some`)
    fn update_itinerary(&self, session: &Session, record: &Itinerary) -> Result<()>;

    /// Delete an itinerary day by id
    fn delete_itinerary(&self, session: &Session, id: i64) -> Result<()>;
}
