//! # Remote API Client
//!
//! The admin backend exposes one endpoint taking `POST` bodies of the form
//! `{"action": <name>, "data": <object>}`, authenticated with a bearer token.
//! This module wraps that protocol in a typed client and implements the store
//! traits on top of it.
//!
//! Calls are blocking; the console issues them from the UI thread one at a
//! time (see the domain layer for how stale reloads are discarded).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared::{Booking, BookingPatch, BookingStatus, Itinerary, Tour, TourInput};
use thiserror::Error;

use crate::services::session::{NotLoggedIn, Session};
use crate::services::traits::{BookingStore, ItineraryStore, TourStore};

/// Default endpoint of a local supabase-style functions host. Override with
/// `TREK_API_URL` or [`ApiClient::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "http://localhost:54321/functions/v1/admin-api";

/// Errors produced by the remote API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    NotLoggedIn(#[from] NotLoggedIn),

    #[error("could not reach the booking store: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not encode the {action} request: {source}")]
    Encode {
        action: &'static str,
        source: serde_json::Error,
    },

    #[error("{action} rejected by the store (status {status}): {message}")]
    Rejected {
        action: &'static str,
        status: u16,
        message: String,
    },

    #[error("malformed response to {action}: {source}")]
    Malformed {
        action: &'static str,
        source: reqwest::Error,
    },
}

/// Envelope for every outbound request.
#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    action: &'a str,
    data: Value,
}

/// Error payload the store attaches to non-2xx responses when it can.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the admin API. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client pointed at `TREK_API_URL` when set, else the default endpoint.
    pub fn from_env() -> Self {
        match std::env::var("TREK_API_URL") {
            Ok(url) if !url.trim().is_empty() => {
                log::info!("using admin API at {}", url.trim());
                Self::with_base_url(url.trim().to_string())
            }
            _ => Self::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check a candidate credential by issuing the cheapest authenticated
    /// read. Any non-error response means the token is accepted.
    pub fn verify_token(&self, token: &str) -> bool {
        let probe = Session::with_token(token);
        match self.list_tours(&probe) {
            Ok(_) => true,
            Err(error) => {
                log::warn!("token verification failed: {:#}", error);
                false
            }
        }
    }

    /// Send one action to the store and decode the JSON response.
    fn call<T: serde::de::DeserializeOwned>(
        &self,
        session: &Session,
        action: &'static str,
        data: Value,
    ) -> Result<T, ApiError> {
        let token = session.bearer()?;
        log::debug!("calling {}", action);

        let response = self
            .http
            .post(&self.base_url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
            .json(&ApiRequest { action, data })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError::Rejected {
                action,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .map_err(|source| ApiError::Malformed { action, source })
    }

    /// Send one action and ignore the response body beyond "it was JSON".
    fn call_ack(&self, session: &Session, action: &'static str, data: Value) -> Result<(), ApiError> {
        let _: Value = self.call(session, action, data)?;
        Ok(())
    }
}

/// `get_bookings` data: `{}` for everything, `{"status": ...}` when filtered.
fn bookings_filter_body(status: Option<BookingStatus>) -> Value {
    match status {
        Some(status) => json!({ "status": status }),
        None => json!({}),
    }
}

/// `update_tour` data: the tour fields with the id folded in.
fn tour_update_body(id: i64, input: &TourInput) -> Result<Value, serde_json::Error> {
    let mut data = serde_json::to_value(input)?;
    if let Value::Object(ref mut fields) = data {
        fields.insert("id".to_string(), Value::from(id));
    }
    Ok(data)
}

impl BookingStore for ApiClient {
    fn list_bookings(&self, session: &Session, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
        Ok(self.call(session, "get_bookings", bookings_filter_body(status))?)
    }

    fn update_booking(&self, session: &Session, patch: &BookingPatch) -> Result<()> {
        let data = serde_json::to_value(patch).map_err(|source| ApiError::Encode {
            action: "update_booking",
            source,
        })?;
        self.call_ack(session, "update_booking", data)?;
        Ok(())
    }

    fn delete_booking(&self, session: &Session, id: i64) -> Result<()> {
        self.call_ack(session, "delete_booking", json!({ "id": id }))?;
        Ok(())
    }
}

impl TourStore for ApiClient {
    fn list_tours(&self, session: &Session) -> Result<Vec<Tour>> {
        Ok(self.call(session, "get_all_tours", json!({}))?)
    }

    fn create_tour(&self, session: &Session, input: &TourInput) -> Result<()> {
        let data = serde_json::to_value(input).map_err(|source| ApiError::Encode {
            action: "create_tour",
            source,
        })?;
        self.call_ack(session, "create_tour", data)?;
        Ok(())
    }

    fn update_tour(&self, session: &Session, id: i64, input: &TourInput) -> Result<()> {
        let data = tour_update_body(id, input).map_err(|source| ApiError::Encode {
            action: "update_tour",
            source,
        })?;
        self.call_ack(session, "update_tour", data)?;
        Ok(())
    }

    fn delete_tour(&self, session: &Session, id: i64) -> Result<()> {
        self.call_ack(session, "delete_tour", json!({ "id": id }))?;
        Ok(())
    }
}

impl ItineraryStore for ApiClient {
    fn list_itineraries(&self, session: &Session, tour_id: i64) -> Result<Vec<Itinerary>> {
        Ok(self.call(session, "get_itineraries", json!({ "tour_id": tour_id }))?)
    }

    fn create_itinerary(&self, session: &Session, record: &Itinerary) -> Result<()> {
        let data = serde_json::to_value(record).map_err(|source| ApiError::Encode {
            action: "create_itinerary",
            source,
        })?;
        self.call_ack(session, "create_itinerary", data)?;
        Ok(())
    }

    fn update_itinerary(&self, session: &Session, record: &Itinerary) -> Result<()> {
        let data = serde_json::to_value(record).map_err(|source| ApiError::Encode {
            action: "update_itinerary",
            source,
        })?;
        self.call_ack(session, "update_itinerary", data)?;
        Ok(())
    }

    fn delete_itinerary(&self, session: &Session, id: i64) -> Result<()> {
        self.call_ack(session, "delete_itinerary", json!({ "id": id }))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_envelope_has_action_and_data() {
        let envelope = ApiRequest {
            action: "get_bookings",
            data: json!({ "status": "pending" }),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["action"], "get_bookings");
        assert_eq!(value["data"]["status"], "pending");
    }

    #[test]
    fn unfiltered_booking_list_sends_empty_data() {
        assert_eq!(bookings_filter_body(None), json!({}));
    }

    #[test]
    fn filtered_booking_list_sends_wire_status() {
        assert_eq!(
            bookings_filter_body(Some(BookingStatus::Confirmed)),
            json!({ "status": "confirmed" })
        );
    }

    #[test]
    fn tour_update_body_folds_id_into_fields() {
        let input = TourInput {
            name: "Ausangate".to_string(),
            days: 4,
            ..TourInput::default()
        };
        let body = tour_update_body(12, &input).unwrap();
        assert_eq!(body["id"], 12);
        assert_eq!(body["name"], "Ausangate");
        assert_eq!(body["days"], 4);
    }

    #[test]
    fn error_body_decodes_store_messages() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"booking not found"}"#).unwrap();
        assert_eq!(body.error, "booking not found");
    }

    #[test]
    fn calls_without_a_session_fail_before_any_io() {
        let client = ApiClient::with_base_url("http://127.0.0.1:1/never-reached");
        let session = Session::new();
        let result = client.list_bookings(&session, None);
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<ApiError>().is_some());
        assert_eq!(error.to_string(), NotLoggedIn.to_string());
    }
}
