use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states a booking can be in, as stored by the remote API.
///
/// The wire representation is the lowercase name (`"pending"`, `"confirmed"`,
/// `"canceled"`, `"unpaired"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Reservation received, not yet confirmed by an operator
    Pending,
    /// Confirmed departure
    Confirmed,
    /// Canceled by the customer or an operator
    Canceled,
    /// No tour is currently associated (e.g. its tour was deleted)
    Unpaired,
}

impl BookingStatus {
    /// All statuses, in the order the console presents them.
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Canceled,
        BookingStatus::Unpaired,
    ];

    /// Human-readable label for dropdowns and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Canceled => "Canceled",
            BookingStatus::Unpaired => "Unpaired",
        }
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Canceled => "canceled",
            BookingStatus::Unpaired => "unpaired",
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer's reservation for a tour departure.
///
/// Owned by the remote store; the console only ever holds a transient cached
/// copy, refreshed wholesale on load and after mutations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Referenced tour, or `None` for an unpaired booking
    pub tour_id: Option<i64>,
    pub full_name: String,
    pub phone: String,
    pub nationality: String,
    /// Identity document number, when collected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Free-text operator note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub number_of_people: u32,
    /// Departure day as a plain `YYYY-MM-DD` string. Kept as text on purpose:
    /// grouping parses the fixed fields directly instead of going through a
    /// locale- or timezone-aware date type.
    pub departure_date: String,
    /// Total price agreed for this booking
    pub applied_price: f64,
    pub status: BookingStatus,
}

/// Sparse update for a single booking.
///
/// Every mutable field is optional and serialized only when present, so the
/// remote store keeps its existing value for anything the user left blank.
/// Built exclusively by the edit-form builder; see the console's form module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPatch {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_people: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
}

impl BookingPatch {
    /// Patch carrying only the id, with every field left untouched.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            tour_id: None,
            status: None,
            full_name: None,
            phone: None,
            nationality: None,
            document: None,
            note: None,
            number_of_people: None,
            applied_price: None,
            departure_date: None,
        }
    }

    /// Patch that changes the status and nothing else.
    pub fn status_only(id: i64, status: BookingStatus) -> Self {
        let mut patch = Self::new(id);
        patch.status = Some(status);
        patch
    }
}

/// Publication state of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Active,
    Inactive,
}

impl TourStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TourStatus::Active => "Active",
            TourStatus::Inactive => "Inactive",
        }
    }
}

impl Default for TourStatus {
    fn default() -> Self {
        TourStatus::Active
    }
}

impl fmt::Display for TourStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourStatus::Active => write!(f, "active"),
            TourStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A bookable trip product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tour {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Display strings ("4600 m", "Hard", ...), never parsed by the console
    pub altitude: String,
    pub difficulty: String,
    pub distance: String,
    pub temperature: String,
    /// Duration in days
    pub days: u32,
    /// Walking hours per day
    pub hours: u32,
    /// Per-person price tiers by group size
    pub price_one: f64,
    pub price_couple: f64,
    pub price_three_to_five: f64,
    pub price_six_plus: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub status: TourStatus,
}

/// Fields of a tour as sent to `create_tour` / `update_tour` (everything but
/// the id, which the store assigns).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TourInput {
    pub name: String,
    pub description: String,
    pub altitude: String,
    pub difficulty: String,
    pub distance: String,
    pub temperature: String,
    pub days: u32,
    pub hours: u32,
    pub price_one: f64,
    pub price_couple: f64,
    pub price_three_to_five: f64,
    pub price_six_plus: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub status: TourStatus,
}

/// One scheduled activity within an itinerary day.
///
/// Times are opaque `HH:MM` strings; the console never does arithmetic on
/// them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

/// Day-by-day plan entry attached to a tour. `id` is `None` until the record
/// has been persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub tour_id: i64,
    /// 1-based day number within the tour
    pub day: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Headline counts shown on the dashboard, derived locally from the loaded
/// collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tours: usize,
    pub active_tours: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
}

/// Severity of a transient user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
}

/// Transient notification emitted by the domain layer and auto-dismissed by
/// the presentation layer after a fixed interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking {
            id: 7,
            tour_id: Some(2),
            full_name: "Ada Qoyllur".to_string(),
            phone: "+51 900 000 000".to_string(),
            nationality: "Peru".to_string(),
            document: Some("X1234567".to_string()),
            note: None,
            number_of_people: 3,
            departure_date: "2024-03-15".to_string(),
            applied_price: 450.0,
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn booking_status_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");

        let parsed: BookingStatus = serde_json::from_str("\"unpaired\"").unwrap();
        assert_eq!(parsed, BookingStatus::Unpaired);
    }

    #[test]
    fn booking_round_trips_through_json() {
        let booking = sample_booking();
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn booking_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 1,
            "tour_id": null,
            "full_name": "Test",
            "phone": "123",
            "nationality": "PE",
            "number_of_people": 2,
            "departure_date": "2024-01-02",
            "applied_price": 100.0,
            "status": "pending"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.tour_id, None);
        assert_eq!(booking.document, None);
        assert_eq!(booking.note, None);
    }

    #[test]
    fn empty_patch_serializes_to_id_only() {
        let value = serde_json::to_value(BookingPatch::new(9)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["id"], 9);
    }

    #[test]
    fn status_only_patch_carries_exactly_id_and_status() {
        let value = serde_json::to_value(BookingPatch::status_only(9, BookingStatus::Canceled)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["id"], 9);
        assert_eq!(object["status"], "canceled");
    }

    #[test]
    fn absent_patch_fields_are_omitted_not_null() {
        let mut patch = BookingPatch::new(3);
        patch.applied_price = Some(150.0);
        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("applied_price"));
        assert!(!object.contains_key("number_of_people"));
        assert!(!object.contains_key("departure_date"));
        assert!(!object.contains_key("tour_id"));
    }

    #[test]
    fn tour_list_fields_default_to_empty() {
        let json = r#"{
            "id": 4,
            "name": "Salkantay",
            "description": "",
            "altitude": "4600 m",
            "difficulty": "Hard",
            "distance": "72 km",
            "temperature": "-5 to 20",
            "days": 5,
            "hours": 8,
            "price_one": 500.0,
            "price_couple": 450.0,
            "price_three_to_five": 420.0,
            "price_six_plus": 390.0,
            "status": "active"
        }"#;
        let tour: Tour = serde_json::from_str(json).unwrap();
        assert!(tour.images.is_empty());
        assert!(tour.includes.is_empty());
        assert!(tour.recommendations.is_empty());
    }

    #[test]
    fn unsaved_itinerary_omits_id() {
        let record = Itinerary {
            id: None,
            tour_id: 4,
            day: 1,
            activities: vec![Activity {
                name: "Trailhead briefing".to_string(),
                start_time: "07:00".to_string(),
                end_time: "07:30".to_string(),
            }],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(!value.as_object().unwrap().contains_key("id"));
    }
}
