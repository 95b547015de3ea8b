//! # Dashboard Stats
//!
//! Headline counts derived from whatever tours and bookings are already
//! cached. Pure so the dashboard can recompute on every frame.

use shared::{Booking, BookingStatus, DashboardStats, Tour, TourStatus};

/// Count the totals shown on the dashboard cards.
pub fn dashboard_stats(tours: &[Tour], bookings: &[Booking]) -> DashboardStats {
    DashboardStats {
        total_tours: tours.len(),
        active_tours: tours
            .iter()
            .filter(|tour| tour.status == TourStatus::Active)
            .count(),
        total_bookings: bookings.len(),
        pending_bookings: bookings
            .iter()
            .filter(|booking| booking.status == BookingStatus::Pending)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour(id: i64, status: TourStatus) -> Tour {
        Tour {
            id,
            name: format!("Tour {}", id),
            status,
            ..Tour::default()
        }
    }

    fn booking(id: i64, status: BookingStatus) -> Booking {
        Booking {
            id,
            status,
            ..Booking::default()
        }
    }

    #[test]
    fn counts_split_by_status() {
        let tours = vec![
            tour(1, TourStatus::Active),
            tour(2, TourStatus::Inactive),
            tour(3, TourStatus::Active),
        ];
        let bookings = vec![
            booking(10, BookingStatus::Pending),
            booking(11, BookingStatus::Confirmed),
            booking(12, BookingStatus::Pending),
            booking(13, BookingStatus::Canceled),
        ];

        let stats = dashboard_stats(&tours, &bookings);

        assert_eq!(stats.total_tours, 3);
        assert_eq!(stats.active_tours, 2);
        assert_eq!(stats.total_bookings, 4);
        assert_eq!(stats.pending_bookings, 2);
    }

    #[test]
    fn empty_caches_count_zero() {
        let stats = dashboard_stats(&[], &[]);
        assert_eq!(stats.total_tours, 0);
        assert_eq!(stats.active_tours, 0);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.pending_bookings, 0);
    }
}
