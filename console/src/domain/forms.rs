//! # Form State
//!
//! Raw text state for the edit dialogs, plus the builders that turn it into
//! typed records. Inputs stay strings until save. The booking builder emits a
//! sparse patch: optional numeric and date fields that are blank or
//! unparseable are omitted outright, never coerced to zero or empty, so the
//! store keeps whatever it already has for them. The tour builder is the
//! opposite: tours are always written whole, with blank numerics defaulting
//! to zero.

use shared::{Booking, BookingPatch, BookingStatus, Tour, TourInput, TourStatus};

/// Editable copy of a booking's fields, bound to the edit dialog's inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub full_name: String,
    pub phone: String,
    pub nationality: String,
    pub document: String,
    pub note: String,
    pub number_of_people: String,
    pub applied_price: String,
    pub departure_date: String,
    pub status: BookingStatus,
    pub tour_id: Option<i64>,
}

impl BookingForm {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            full_name: booking.full_name.clone(),
            phone: booking.phone.clone(),
            nationality: booking.nationality.clone(),
            document: booking.document.clone().unwrap_or_default(),
            note: booking.note.clone().unwrap_or_default(),
            number_of_people: booking.number_of_people.to_string(),
            applied_price: booking.applied_price.to_string(),
            // Keep only the date part in case the store sent a datetime
            departure_date: booking.departure_date.chars().take(10).collect(),
            status: booking.status,
            tour_id: booking.tour_id,
        }
    }

    /// Build the sparse patch for this form.
    ///
    /// Text fields are always sent: the dialog prefills them from the
    /// record, so whatever they hold is deliberate. The price is included
    /// only when it parses as a number; the people count only when it parses
    /// as a positive integer; the departure date only when non-empty; the
    /// tour reference only when a tour is selected.
    pub fn to_patch(&self, id: i64) -> BookingPatch {
        let mut patch = BookingPatch::new(id);
        patch.status = Some(self.status);
        patch.full_name = Some(self.full_name.clone());
        patch.phone = Some(self.phone.clone());
        patch.nationality = Some(self.nationality.clone());
        patch.document = Some(self.document.clone());
        patch.note = Some(self.note.clone());

        let price = self.applied_price.trim();
        if !price.is_empty() {
            if let Ok(amount) = price.parse::<f64>() {
                patch.applied_price = Some(amount);
            }
        }

        if let Ok(count) = self.number_of_people.trim().parse::<u32>() {
            if count > 0 {
                patch.number_of_people = Some(count);
            }
        }

        let date = self.departure_date.trim();
        if !date.is_empty() {
            patch.departure_date = Some(date.to_string());
        }

        patch.tour_id = self.tour_id;
        patch
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Editable copy of a tour's fields. The list fields are one comma-separated
/// line each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourForm {
    pub name: String,
    pub description: String,
    pub altitude: String,
    pub difficulty: String,
    pub distance: String,
    pub temperature: String,
    pub days: String,
    pub hours: String,
    pub price_one: String,
    pub price_couple: String,
    pub price_three_to_five: String,
    pub price_six_plus: String,
    pub images: String,
    pub includes: String,
    pub recommendations: String,
    pub status: TourStatus,
}

impl TourForm {
    pub fn from_tour(tour: &Tour) -> Self {
        Self {
            name: tour.name.clone(),
            description: tour.description.clone(),
            altitude: tour.altitude.clone(),
            difficulty: tour.difficulty.clone(),
            distance: tour.distance.clone(),
            temperature: tour.temperature.clone(),
            days: tour.days.to_string(),
            hours: tour.hours.to_string(),
            price_one: tour.price_one.to_string(),
            price_couple: tour.price_couple.to_string(),
            price_three_to_five: tour.price_three_to_five.to_string(),
            price_six_plus: tour.price_six_plus.to_string(),
            images: join_list(&tour.images),
            includes: join_list(&tour.includes),
            recommendations: join_list(&tour.recommendations),
            status: tour.status,
        }
    }

    pub fn to_input(&self) -> TourInput {
        TourInput {
            name: self.name.clone(),
            description: self.description.clone(),
            altitude: self.altitude.clone(),
            difficulty: self.difficulty.clone(),
            distance: self.distance.clone(),
            temperature: self.temperature.clone(),
            days: parse_count(&self.days),
            hours: parse_count(&self.hours),
            price_one: parse_amount(&self.price_one),
            price_couple: parse_amount(&self.price_couple),
            price_three_to_five: parse_amount(&self.price_three_to_five),
            price_six_plus: parse_amount(&self.price_six_plus),
            images: split_list(&self.images),
            includes: split_list(&self.includes),
            recommendations: split_list(&self.recommendations),
            status: self.status,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Split a comma-separated line into trimmed, non-empty entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking {
            id: 42,
            tour_id: Some(3),
            full_name: "Ada Qoyllur".to_string(),
            phone: "+51 900 111 222".to_string(),
            nationality: "Peru".to_string(),
            document: Some("X1234567".to_string()),
            note: Some("vegetarian".to_string()),
            number_of_people: 4,
            departure_date: "2024-05-20T00:00:00".to_string(),
            applied_price: 380.0,
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn from_booking_prefills_every_field() {
        let form = BookingForm::from_booking(&sample_booking());
        assert_eq!(form.full_name, "Ada Qoyllur");
        assert_eq!(form.document, "X1234567");
        assert_eq!(form.note, "vegetarian");
        assert_eq!(form.number_of_people, "4");
        assert_eq!(form.applied_price, "380");
        assert_eq!(form.departure_date, "2024-05-20");
        assert_eq!(form.status, BookingStatus::Confirmed);
        assert_eq!(form.tour_id, Some(3));
    }

    #[test]
    fn patch_includes_parsed_price_and_omits_blank_people_count() {
        let mut form = BookingForm::default();
        form.number_of_people = "".to_string();
        form.applied_price = "150".to_string();

        let patch = form.to_patch(1);
        assert_eq!(patch.applied_price, Some(150.0));
        assert_eq!(patch.number_of_people, None);
    }

    #[test]
    fn patch_omits_unparseable_numbers() {
        let mut form = BookingForm::default();
        form.applied_price = "about 150".to_string();
        form.number_of_people = "a few".to_string();

        let patch = form.to_patch(1);
        assert_eq!(patch.applied_price, None);
        assert_eq!(patch.number_of_people, None);
    }

    #[test]
    fn patch_requires_positive_people_count() {
        let mut form = BookingForm::default();
        form.number_of_people = "0".to_string();
        assert_eq!(form.to_patch(1).number_of_people, None);

        form.number_of_people = "-2".to_string();
        assert_eq!(form.to_patch(1).number_of_people, None);

        form.number_of_people = "3".to_string();
        assert_eq!(form.to_patch(1).number_of_people, Some(3));
    }

    #[test]
    fn patch_always_carries_text_fields_and_status() {
        let form = BookingForm::from_booking(&sample_booking());
        let patch = form.to_patch(42);
        assert_eq!(patch.id, 42);
        assert_eq!(patch.status, Some(BookingStatus::Confirmed));
        assert_eq!(patch.full_name.as_deref(), Some("Ada Qoyllur"));
        assert_eq!(patch.phone.as_deref(), Some("+51 900 111 222"));
        assert_eq!(patch.document.as_deref(), Some("X1234567"));
        assert_eq!(patch.note.as_deref(), Some("vegetarian"));
    }

    #[test]
    fn patch_omits_blank_departure_date() {
        let mut form = BookingForm::default();
        form.departure_date = "  ".to_string();
        assert_eq!(form.to_patch(1).departure_date, None);

        form.departure_date = "2024-06-01".to_string();
        assert_eq!(form.to_patch(1).departure_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn patch_without_selected_tour_omits_the_reference() {
        let mut form = BookingForm::default();
        form.tour_id = None;
        let value = serde_json::to_value(form.to_patch(1)).unwrap();
        assert!(!value.as_object().unwrap().contains_key("tour_id"));

        form.tour_id = Some(9);
        assert_eq!(form.to_patch(1).tour_id, Some(9));
    }

    #[test]
    fn blank_tour_numerics_default_to_zero() {
        let mut form = TourForm::default();
        form.name = "Salkantay".to_string();
        form.days = "".to_string();
        form.hours = "six".to_string();
        form.price_one = " 500 ".to_string();

        let input = form.to_input();
        assert_eq!(input.days, 0);
        assert_eq!(input.hours, 0);
        assert_eq!(input.price_one, 500.0);
        assert_eq!(input.price_couple, 0.0);
    }

    #[test]
    fn tour_list_lines_split_on_commas_and_drop_blanks() {
        let mut form = TourForm::default();
        form.includes = "guide, meals,, tents ".to_string();

        let input = form.to_input();
        assert_eq!(input.includes, vec!["guide", "meals", "tents"]);
    }

    #[test]
    fn tour_form_round_trips_list_fields() {
        let tour = Tour {
            id: 1,
            name: "Ausangate".to_string(),
            description: "High pass circuit".to_string(),
            altitude: "5200 m".to_string(),
            difficulty: "Hard".to_string(),
            distance: "70 km".to_string(),
            temperature: "-10 to 18".to_string(),
            days: 6,
            hours: 7,
            price_one: 650.0,
            price_couple: 600.0,
            price_three_to_five: 560.0,
            price_six_plus: 520.0,
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            includes: vec!["guide".to_string(), "meals".to_string()],
            recommendations: vec!["sun cream".to_string()],
            status: TourStatus::Active,
        };

        let form = TourForm::from_tour(&tour);
        assert_eq!(form.includes, "guide, meals");

        let input = form.to_input();
        assert_eq!(input.images, tour.images);
        assert_eq!(input.includes, tour.includes);
        assert_eq!(input.recommendations, tour.recommendations);
        assert_eq!(input.days, 6);
    }
}
