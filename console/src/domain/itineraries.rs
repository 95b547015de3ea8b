//! # Itinerary Drafts
//!
//! Local editing state for a tour's day-by-day plan. All reconciliation of
//! nested activity edits happens here, in memory; persistence is one remote
//! call per day record and lives in the tour service. Text edits go straight
//! into the records through `days_mut`; the operations below cover the
//! structural changes.

use shared::{Activity, Itinerary};

/// The itinerary days of one tour, as currently edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryDraft {
    days: Vec<Itinerary>,
}

impl ItineraryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft from the store's records, ordered by day number.
    pub fn from_records(mut records: Vec<Itinerary>) -> Self {
        records.sort_by_key(|record| record.day);
        Self { days: records }
    }

    pub fn days(&self) -> &[Itinerary] {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut Vec<Itinerary> {
        &mut self.days
    }

    pub fn get(&self, index: usize) -> Option<&Itinerary> {
        self.days.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// First day number not yet taken: one past the highest existing day.
    pub fn next_day_number(&self) -> u32 {
        self.days.iter().map(|record| record.day).max().unwrap_or(0) + 1
    }

    /// Append a fresh, unsaved day with one blank activity to fill in.
    pub fn add_day(&mut self, tour_id: i64) {
        self.days.push(Itinerary {
            id: None,
            tour_id,
            day: self.next_day_number(),
            activities: vec![Activity::default()],
        });
    }

    /// Append a blank activity to one day.
    pub fn add_activity(&mut self, day_index: usize) {
        if let Some(day) = self.days.get_mut(day_index) {
            day.activities.push(Activity::default());
        }
    }

    /// Remove a single activity, keeping its siblings in order.
    pub fn remove_activity(&mut self, day_index: usize, activity_index: usize) {
        if let Some(day) = self.days.get_mut(day_index) {
            if activity_index < day.activities.len() {
                day.activities.remove(activity_index);
            }
        }
    }

    /// Remove a day from the draft, returning the record so the caller can
    /// delete it remotely when it was already persisted.
    pub fn remove_day(&mut self, day_index: usize) -> Option<Itinerary> {
        if day_index < self.days.len() {
            Some(self.days.remove(day_index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(id: Option<i64>, day: u32) -> Itinerary {
        Itinerary {
            id,
            tour_id: 1,
            day,
            activities: vec![Activity {
                name: "Hike".to_string(),
                start_time: "08:00".to_string(),
                end_time: "14:00".to_string(),
            }],
        }
    }

    #[test]
    fn from_records_orders_by_day_number() {
        let draft = ItineraryDraft::from_records(vec![day(Some(3), 3), day(Some(1), 1), day(Some(2), 2)]);
        let order: Vec<u32> = draft.days().iter().map(|d| d.day).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn add_day_picks_one_past_the_highest_day() {
        let mut draft = ItineraryDraft::from_records(vec![day(Some(1), 1), day(Some(2), 4)]);
        draft.add_day(1);

        let added = draft.days().last().unwrap();
        assert_eq!(added.day, 5);
        assert_eq!(added.id, None);
        assert_eq!(added.activities.len(), 1);
        assert_eq!(added.activities[0], Activity::default());
    }

    #[test]
    fn add_day_on_empty_draft_starts_at_one() {
        let mut draft = ItineraryDraft::new();
        draft.add_day(7);
        assert_eq!(draft.days()[0].day, 1);
        assert_eq!(draft.days()[0].tour_id, 7);
    }

    #[test]
    fn remove_activity_keeps_sibling_order() {
        let mut draft = ItineraryDraft::from_records(vec![day(Some(1), 1)]);
        draft.add_activity(0);
        draft.add_activity(0);
        draft.days_mut()[0].activities[1].name = "Lunch".to_string();
        draft.days_mut()[0].activities[2].name = "Camp".to_string();

        draft.remove_activity(0, 1);

        let names: Vec<&str> = draft.days()[0]
            .activities
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Hike", "Camp"]);
    }

    #[test]
    fn out_of_bounds_removals_are_ignored() {
        let mut draft = ItineraryDraft::from_records(vec![day(Some(1), 1)]);
        draft.remove_activity(5, 0);
        draft.remove_activity(0, 9);
        assert_eq!(draft.remove_day(3), None);
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.days()[0].activities.len(), 1);
    }

    #[test]
    fn remove_day_hands_back_the_record() {
        let mut draft = ItineraryDraft::from_records(vec![day(Some(9), 1), day(None, 2)]);
        let removed = draft.remove_day(0).unwrap();
        assert_eq!(removed.id, Some(9));
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.days()[0].day, 2);
    }
}
