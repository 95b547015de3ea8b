//! Calendar domain logic for the booking console.
//!
//! This module contains the month-grid math and the grouping of bookings by
//! departure day. The UI only handles presentation; everything here is pure
//! and directly testable.
//!
//! Months are zero-based throughout (0 = January, 11 = December) to match
//! the grid contract; the 1-based month written inside a `YYYY-MM-DD`
//! departure date is converted at the grouping boundary.

use shared::Booking;
use std::collections::HashMap;

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month (zero-based) and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Get the weekday of day 1 of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    use chrono::{Datelike, NaiveDate};

    if let Some(date) = NaiveDate::from_ymd_opt(year, month + 1, 1) {
        // chrono's weekday(): Monday = 0 through num_days_from_monday;
        // our format: Sunday = 0, Monday = 1, ..., Saturday = 6
        date.weekday().num_days_from_sunday()
    } else {
        log::warn!("no first day for month {} of {}", month, year);
        0
    }
}

/// Get the human-readable name for a zero-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Invalid Month",
    }
}

/// Build the month grid as a flat, row-major sequence of cells.
///
/// `None` is a padding cell. The sequence starts with one padding cell per
/// weekday before day 1, then the days of the month in order, then padding
/// until the length is a whole number of weeks.
pub fn build_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let first_weekday = first_weekday_of_month(year, month);
    let days = days_in_month(year, month);

    let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
    for _ in 0..first_weekday {
        cells.push(None);
    }
    for day in 1..=days {
        cells.push(Some(day));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// Shift a (year, zero-based month) cursor by any number of months, rolling
/// over into adjacent years in either direction.
pub fn change_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month as i64 + delta as i64;
    ((total.div_euclid(12)) as i32, total.rem_euclid(12) as u32)
}

/// Split a departure date into (year, 1-based month, day).
///
/// The `YYYY-MM-DD` structure is fixed, so the fields are split and parsed
/// directly. Running the string through a locale- or timezone-aware date
/// parser instead can shift the date by a day near midnight boundaries,
/// which moves a booking into the wrong calendar cell. A `T...` time suffix
/// is cut first in case the store ever appends one.
pub fn parse_departure_date(date_str: &str) -> Option<(i32, u32, u32)> {
    if let Some(date_part) = date_str.split('T').next() {
        let parts: Vec<&str> = date_part.split('-').collect();
        if parts.len() == 3 {
            if let (Ok(year), Ok(month), Ok(day)) = (
                parts[0].parse::<i32>(),
                parts[1].parse::<u32>(),
                parts[2].parse::<u32>(),
            ) {
                return Some((year, month, day));
            }
        }
    }
    None
}

/// Format a departure date for display, falling back to the raw string when
/// it does not parse.
pub fn format_departure_date(date_str: &str) -> String {
    if let Some((year, month, day)) = parse_departure_date(date_str) {
        if (1..=12).contains(&month) {
            return format!("{} {}, {}", month_name(month - 1), day, year);
        }
    }
    date_str.to_string()
}

/// Group bookings by departure day for the displayed (year, zero-based
/// month).
///
/// A booking lands in exactly the bucket its own `departure_date` names, and
/// only when that date falls inside the displayed month. Bookings with
/// malformed dates, or dates naming a day the month does not have, are
/// skipped; the field comes from an external store, so bad values are a
/// data-quality issue rather than an error here. Within a day, bookings keep
/// the order of the source collection.
pub fn bookings_by_day(bookings: &[Booking], year: i32, month: u32) -> HashMap<u32, Vec<Booking>> {
    let mut by_day: HashMap<u32, Vec<Booking>> = HashMap::new();
    let days = days_in_month(year, month);

    for booking in bookings {
        if let Some((b_year, b_month, b_day)) = parse_departure_date(&booking.departure_date) {
            if b_year != year || b_month != month + 1 {
                continue;
            }
            if b_day >= 1 && b_day <= days {
                by_day.entry(b_day).or_insert_with(Vec::new).push(booking.clone());
            } else {
                log::debug!(
                    "booking {} names impossible day {} of {}/{}, skipping",
                    booking.id,
                    b_day,
                    b_month,
                    b_year
                );
            }
        } else {
            log::debug!(
                "booking {} has unparseable departure date {:?}, skipping",
                booking.id,
                booking.departure_date
            );
        }
    }

    by_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BookingStatus;

    fn booking_on(id: i64, departure_date: &str) -> Booking {
        Booking {
            id,
            tour_id: Some(1),
            full_name: format!("Guest {}", id),
            phone: "+51 900 000 000".to_string(),
            nationality: "Peru".to_string(),
            document: None,
            note: None,
            number_of_people: 2,
            departure_date: departure_date.to_string(),
            applied_price: 100.0,
            status: BookingStatus::Pending,
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 0), 31); // January
        assert_eq!(days_in_month(2024, 1), 29); // February, leap year
        assert_eq!(days_in_month(2023, 1), 28); // February, regular year
        assert_eq!(days_in_month(2024, 3), 30); // April
        assert_eq!(days_in_month(2024, 11), 31); // December
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100)); // divisible by 100 but not 400
        assert_eq!(days_in_month(2100, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn test_first_weekday_of_month() {
        assert_eq!(first_weekday_of_month(2024, 0), 1); // Jan 1 2024 was a Monday
        assert_eq!(first_weekday_of_month(2024, 1), 4); // Feb 1 2024 was a Thursday
        assert_eq!(first_weekday_of_month(2024, 8), 0); // Sep 1 2024 was a Sunday
        assert_eq!(first_weekday_of_month(2024, 5), 6); // Jun 1 2024 was a Saturday
    }

    #[test]
    fn test_build_grid_layout_for_leap_february() {
        let grid = build_grid(2024, 1);
        // Thursday start: 4 leading blanks + 29 days = 33, padded to 35
        assert_eq!(grid.len(), 35);
        assert!(grid[..4].iter().all(|cell| cell.is_none()));
        assert_eq!(grid[4], Some(1));
        assert_eq!(grid[32], Some(29));
        assert!(grid[33..].iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_build_grid_needs_no_trailing_padding_for_exact_weeks() {
        // Feb 2026 starts on a Sunday and has 28 days: exactly four weeks
        assert_eq!(first_weekday_of_month(2026, 1), 0);
        let grid = build_grid(2026, 1);
        assert_eq!(grid.len(), 28);
        assert_eq!(grid[0], Some(1));
        assert_eq!(grid[27], Some(28));
    }

    #[test]
    fn test_build_grid_shape_holds_across_years() {
        for year in 2019..=2030 {
            for month in 0..12 {
                let grid = build_grid(year, month);
                assert_eq!(grid.len() % 7, 0, "grid {}/{} not whole weeks", month, year);

                let days: Vec<u32> = grid.iter().filter_map(|cell| *cell).collect();
                let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
                assert_eq!(days, expected, "grid {}/{} days wrong", month, year);

                let leading = grid.iter().take_while(|cell| cell.is_none()).count();
                assert_eq!(leading as u32, first_weekday_of_month(year, month));
            }
        }
    }

    #[test]
    fn test_change_month_rolls_over_year_boundaries() {
        assert_eq!(change_month(2024, 11, 1), (2025, 0));
        assert_eq!(change_month(2024, 0, -1), (2023, 11));
        assert_eq!(change_month(2024, 5, 1), (2024, 6));
        assert_eq!(change_month(2024, 5, -1), (2024, 4));
    }

    #[test]
    fn test_change_month_accepts_large_deltas() {
        assert_eq!(change_month(2024, 5, 25), (2026, 6));
        assert_eq!(change_month(2024, 0, -13), (2022, 11));
        assert_eq!(change_month(2024, 3, 0), (2024, 3));
        assert_eq!(change_month(2024, 3, -48), (2020, 3));
    }

    #[test]
    fn test_parse_departure_date() {
        assert_eq!(parse_departure_date("2024-03-15"), Some((2024, 3, 15)));
        assert_eq!(parse_departure_date("2024-03-15T10:00:00"), Some((2024, 3, 15)));
        assert_eq!(parse_departure_date("2024-03"), None);
        assert_eq!(parse_departure_date("2024-xx-15"), None);
        assert_eq!(parse_departure_date("soon"), None);
        assert_eq!(parse_departure_date(""), None);
    }

    #[test]
    fn test_format_departure_date() {
        assert_eq!(format_departure_date("2024-03-15"), "March 15, 2024");
        assert_eq!(format_departure_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_bookings_by_day_places_booking_under_its_own_day() {
        let bookings = vec![booking_on(1, "2024-03-15")];

        let march = bookings_by_day(&bookings, 2024, 2);
        assert_eq!(march.len(), 1);
        assert_eq!(march[&15].len(), 1);
        assert_eq!(march[&15][0].id, 1);

        // Same collection viewed a month later: no bucket at all
        let april = bookings_by_day(&bookings, 2024, 3);
        assert!(april.is_empty());
    }

    #[test]
    fn test_bookings_by_day_ignores_other_years() {
        let bookings = vec![booking_on(1, "2023-03-15")];
        let index = bookings_by_day(&bookings, 2024, 2);
        assert!(index.is_empty());
    }

    #[test]
    fn test_bookings_by_day_excludes_impossible_dates() {
        let bookings = vec![
            booking_on(1, "2024-02-30"), // February has no day 30
            booking_on(2, "2024-02-00"),
            booking_on(3, "2024-02-10"),
        ];
        let index = bookings_by_day(&bookings, 2024, 1);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&10].len(), 1);
        assert_eq!(index[&10][0].id, 3);
    }

    #[test]
    fn test_bookings_by_day_excludes_malformed_dates() {
        let bookings = vec![booking_on(1, "whenever"), booking_on(2, "")];
        let index = bookings_by_day(&bookings, 2024, 1);
        assert!(index.is_empty());
    }

    #[test]
    fn test_bookings_by_day_keeps_source_order_within_a_day() {
        let bookings = vec![
            booking_on(5, "2024-03-15"),
            booking_on(2, "2024-03-15"),
            booking_on(9, "2024-03-14"),
        ];
        let index = bookings_by_day(&bookings, 2024, 2);
        let day_15: Vec<i64> = index[&15].iter().map(|b| b.id).collect();
        assert_eq!(day_15, vec![5, 2]);
        assert_eq!(index[&14][0].id, 9);
    }

    #[test]
    fn test_bookings_by_day_accepts_datetime_suffix() {
        let bookings = vec![booking_on(1, "2024-03-15T23:59:00")];
        let index = bookings_by_day(&bookings, 2024, 2);
        assert_eq!(index[&15][0].id, 1);
    }
}
