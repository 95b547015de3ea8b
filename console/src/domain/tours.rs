//! # Tour Service
//!
//! Cached tours, tour CRUD, and the per-tour itinerary planner. Writes go to
//! the store first, then the affected collection is re-fetched, same as the
//! booking service. Mutation methods return whether the store accepted the
//! write so the UI can close its editor only on success; the outcome itself
//! is reported through notices either way.

use shared::{Notice, Tour, TourInput};

use crate::domain::itineraries::ItineraryDraft;
use crate::domain::FetchSeq;
use crate::services::{ItineraryStore, Session, TourStore};

/// Display name for a booking's tour reference.
pub fn tour_label(tour_id: Option<i64>, tours: &[Tour]) -> String {
    match tour_id {
        None => "Unpaired".to_string(),
        Some(id) => tours
            .iter()
            .find(|tour| tour.id == id)
            .map(|tour| tour.name.clone())
            .unwrap_or_else(|| format!("Tour #{}", id)),
    }
}

/// Cached tours plus the itinerary planner state.
pub struct TourService<S> {
    store: S,
    tours: Vec<Tour>,
    notices: Vec<Notice>,
    loads: FetchSeq,
    /// Tour whose itinerary planner is open, if any
    planner_tour: Option<i64>,
    draft: ItineraryDraft,
}

impl<S: TourStore + ItineraryStore> TourService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            tours: Vec::new(),
            notices: Vec::new(),
            loads: FetchSeq::new(),
            planner_tour: None,
            draft: ItineraryDraft::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn tour_name(&self, tour_id: Option<i64>) -> String {
        tour_label(tour_id, &self.tours)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn load_tours(&mut self, session: &Session) {
        let seq = self.loads.begin();
        let result = self.store.list_tours(session);
        self.finish_load(seq, result);
    }

    fn finish_load(&mut self, seq: u64, result: anyhow::Result<Vec<Tour>>) {
        if !self.loads.is_current(seq) {
            log::debug!("discarding stale tour load #{}", seq);
            return;
        }
        match result {
            Ok(tours) => {
                log::info!("loaded {} tours", tours.len());
                self.tours = tours;
                // Close the planner if its tour is gone
                if let Some(tour_id) = self.planner_tour {
                    if !self.tours.iter().any(|t| t.id == tour_id) {
                        self.close_planner();
                    }
                }
            }
            Err(error) => {
                log::warn!("failed to load tours: {:#}", error);
                self.notices
                    .push(Notice::error(format!("Failed to load tours: {:#}", error)));
            }
        }
    }

    pub fn create_tour(&mut self, session: &Session, input: &TourInput) -> bool {
        match self.store.create_tour(session, input) {
            Ok(()) => {
                self.notices.push(Notice::success("Tour created"));
                self.load_tours(session);
                true
            }
            Err(error) => {
                log::warn!("creating tour failed: {:#}", error);
                self.notices
                    .push(Notice::error(format!("Failed to create tour: {:#}", error)));
                false
            }
        }
    }

    pub fn update_tour(&mut self, session: &Session, id: i64, input: &TourInput) -> bool {
        match self.store.update_tour(session, id, input) {
            Ok(()) => {
                self.notices.push(Notice::success("Tour updated"));
                self.load_tours(session);
                true
            }
            Err(error) => {
                log::warn!("updating tour {} failed: {:#}", id, error);
                self.notices
                    .push(Notice::error(format!("Failed to update tour: {:#}", error)));
                false
            }
        }
    }

    /// Delete a tour. The store unpairs any bookings attached to it, so the
    /// caller should reload bookings when this returns true.
    pub fn delete_tour(&mut self, session: &Session, id: i64) -> bool {
        match self.store.delete_tour(session, id) {
            Ok(()) => {
                if self.planner_tour == Some(id) {
                    self.close_planner();
                }
                self.notices.push(Notice::success("Tour deleted"));
                self.load_tours(session);
                true
            }
            Err(error) => {
                log::warn!("deleting tour {} failed: {:#}", id, error);
                self.notices
                    .push(Notice::error(format!("Failed to delete tour: {:#}", error)));
                false
            }
        }
    }

    /// Open the day-by-day planner for one tour, loading its records.
    pub fn open_planner(&mut self, session: &Session, tour_id: i64) {
        match self.store.list_itineraries(session, tour_id) {
            Ok(records) => {
                self.draft = ItineraryDraft::from_records(records);
                self.planner_tour = Some(tour_id);
            }
            Err(error) => {
                log::warn!("loading itinerary for tour {} failed: {:#}", tour_id, error);
                self.notices
                    .push(Notice::error(format!("Failed to load itinerary: {:#}", error)));
            }
        }
    }

    pub fn close_planner(&mut self) {
        self.planner_tour = None;
        self.draft = ItineraryDraft::new();
    }

    pub fn planner_tour(&self) -> Option<i64> {
        self.planner_tour
    }

    pub fn draft(&self) -> &ItineraryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItineraryDraft {
        &mut self.draft
    }

    /// Persist one day of the open planner: create when it has never been
    /// saved, update otherwise. On success the planner list is re-fetched so
    /// freshly assigned ids land in the draft.
    pub fn save_day(&mut self, session: &Session, day_index: usize) {
        let tour_id = match self.planner_tour {
            Some(tour_id) => tour_id,
            None => return,
        };
        let record = match self.draft.get(day_index) {
            Some(record) => record.clone(),
            None => return,
        };

        let result = if record.id.is_some() {
            self.store.update_itinerary(session, &record)
        } else {
            self.store.create_itinerary(session, &record)
        };

        match result {
            Ok(()) => {
                self.notices.push(Notice::success("Itinerary day saved"));
                self.refresh_planner(session, tour_id);
            }
            Err(error) => {
                log::warn!("saving itinerary day failed: {:#}", error);
                self.notices
                    .push(Notice::error(format!("Failed to save itinerary day: {:#}", error)));
            }
        }
    }

    /// Remove one day from the planner. Persisted records are deleted
    /// remotely first; unsaved ones just drop out of the draft.
    pub fn delete_day(&mut self, session: &Session, day_index: usize) {
        let persisted_id = self.draft.get(day_index).and_then(|record| record.id);
        match persisted_id {
            Some(id) => match self.store.delete_itinerary(session, id) {
                Ok(()) => {
                    self.draft.remove_day(day_index);
                    self.notices.push(Notice::success("Itinerary day deleted"));
                }
                Err(error) => {
                    log::warn!("deleting itinerary {} failed: {:#}", id, error);
                    self.notices.push(Notice::error(format!(
                        "Failed to delete itinerary day: {:#}",
                        error
                    )));
                }
            },
            None => {
                self.draft.remove_day(day_index);
            }
        }
    }

    /// Re-fetch the open planner's records, keeping it open. Unsaved days
    /// are lost on refresh, which only happens right after a save.
    fn refresh_planner(&mut self, session: &Session, tour_id: i64) {
        match self.store.list_itineraries(session, tour_id) {
            Ok(records) => {
                self.draft = ItineraryDraft::from_records(records);
            }
            Err(error) => {
                log::warn!("refreshing itinerary for tour {} failed: {:#}", tour_id, error);
                self.notices
                    .push(Notice::error(format!("Failed to refresh itinerary: {:#}", error)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use shared::{Activity, Itinerary, Severity, TourStatus};
    use std::sync::Mutex;

    fn tour(id: i64, name: &str, status: TourStatus) -> Tour {
        Tour {
            id,
            name: name.to_string(),
            description: String::new(),
            altitude: "4600 m".to_string(),
            difficulty: "Hard".to_string(),
            distance: "60 km".to_string(),
            temperature: "0 to 20".to_string(),
            days: 4,
            hours: 7,
            price_one: 500.0,
            price_couple: 460.0,
            price_three_to_five: 430.0,
            price_six_plus: 400.0,
            images: Vec::new(),
            includes: Vec::new(),
            recommendations: Vec::new(),
            status,
        }
    }

    #[derive(Default)]
    struct StubStore {
        tours: Mutex<Vec<Tour>>,
        itineraries: Mutex<Vec<Itinerary>>,
        next_id: Mutex<i64>,
        fail: Mutex<bool>,
    }

    impl StubStore {
        fn with_tours(tours: Vec<Tour>) -> Self {
            let stub = Self::default();
            *stub.next_id.lock().unwrap() = 100;
            *stub.tours.lock().unwrap() = tours;
            stub
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn failing(&self) -> bool {
            *self.fail.lock().unwrap()
        }

        fn assign_id(&self) -> i64 {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        }
    }

    impl TourStore for StubStore {
        fn list_tours(&self, _session: &Session) -> anyhow::Result<Vec<Tour>> {
            if self.failing() {
                bail!("store offline");
            }
            Ok(self.tours.lock().unwrap().clone())
        }

        fn create_tour(&self, _session: &Session, input: &TourInput) -> anyhow::Result<()> {
            if self.failing() {
                bail!("store offline");
            }
            let id = self.assign_id();
            self.tours.lock().unwrap().push(Tour {
                id,
                name: input.name.clone(),
                description: input.description.clone(),
                altitude: input.altitude.clone(),
                difficulty: input.difficulty.clone(),
                distance: input.distance.clone(),
                temperature: input.temperature.clone(),
                days: input.days,
                hours: input.hours,
                price_one: input.price_one,
                price_couple: input.price_couple,
                price_three_to_five: input.price_three_to_five,
                price_six_plus: input.price_six_plus,
                images: input.images.clone(),
                includes: input.includes.clone(),
                recommendations: input.recommendations.clone(),
                status: input.status,
            });
            Ok(())
        }

        fn update_tour(&self, _session: &Session, id: i64, input: &TourInput) -> anyhow::Result<()> {
            if self.failing() {
                bail!("store offline");
            }
            let mut tours = self.tours.lock().unwrap();
            if let Some(existing) = tours.iter_mut().find(|t| t.id == id) {
                existing.name = input.name.clone();
                existing.status = input.status;
                existing.days = input.days;
            }
            Ok(())
        }

        fn delete_tour(&self, _session: &Session, id: i64) -> anyhow::Result<()> {
            if self.failing() {
                bail!("store offline");
            }
            self.tours.lock().unwrap().retain(|t| t.id != id);
            Ok(())
        }
    }

    impl ItineraryStore for StubStore {
        fn list_itineraries(&self, _session: &Session, tour_id: i64) -> anyhow::Result<Vec<Itinerary>> {
            if self.failing() {
                bail!("store offline");
            }
            Ok(self
                .itineraries
                .lock()
                .unwrap()
                .iter()
                .filter(|record| record.tour_id == tour_id)
                .cloned()
                .collect())
        }

        fn create_itinerary(&self, _session: &Session, record: &Itinerary) -> anyhow::Result<()> {
            if self.failing() {
                bail!("store offline");
            }
            let mut stored = record.clone();
            stored.id = Some(self.assign_id());
            self.itineraries.lock().unwrap().push(stored);
            Ok(())
        }

        fn update_itinerary(&self, _session: &Session, record: &Itinerary) -> anyhow::Result<()> {
            if self.failing() {
                bail!("store offline");
            }
            let mut records = self.itineraries.lock().unwrap();
            if let Some(existing) = records.iter_mut().find(|r| r.id == record.id) {
                *existing = record.clone();
            }
            Ok(())
        }

        fn delete_itinerary(&self, _session: &Session, id: i64) -> anyhow::Result<()> {
            if self.failing() {
                bail!("store offline");
            }
            self.itineraries.lock().unwrap().retain(|r| r.id != Some(id));
            Ok(())
        }
    }

    fn service_with(tours: Vec<Tour>) -> (TourService<StubStore>, Session) {
        let mut service = TourService::new(StubStore::with_tours(tours));
        let session = Session::with_token("test-token");
        service.load_tours(&session);
        (service, session)
    }

    #[test]
    fn tour_label_covers_all_reference_shapes() {
        let tours = vec![tour(1, "Salkantay", TourStatus::Active)];
        assert_eq!(tour_label(Some(1), &tours), "Salkantay");
        assert_eq!(tour_label(Some(9), &tours), "Tour #9");
        assert_eq!(tour_label(None, &tours), "Unpaired");
    }

    #[test]
    fn create_tour_reloads_on_success() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        let input = TourInput {
            name: "Ausangate".to_string(),
            ..TourInput::default()
        };

        assert!(service.create_tour(&session, &input));
        assert_eq!(service.tours().len(), 2);
        assert_eq!(service.take_notices()[0].severity, Severity::Success);
    }

    #[test]
    fn failed_create_leaves_cache_and_reports() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        service.store().set_fail(true);

        assert!(!service.create_tour(&session, &TourInput::default()));
        assert_eq!(service.tours().len(), 1);
        assert_eq!(service.take_notices()[0].severity, Severity::Error);
    }

    #[test]
    fn update_tour_refreshes_the_record() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        let input = TourInput {
            name: "Salkantay Express".to_string(),
            status: TourStatus::Inactive,
            ..TourInput::default()
        };

        assert!(service.update_tour(&session, 1, &input));
        assert_eq!(service.tours()[0].name, "Salkantay Express");
        assert_eq!(service.tours()[0].status, TourStatus::Inactive);
    }

    #[test]
    fn delete_tour_closes_its_open_planner() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        service.open_planner(&session, 1);
        assert_eq!(service.planner_tour(), Some(1));

        assert!(service.delete_tour(&session, 1));
        assert_eq!(service.planner_tour(), None);
        assert!(service.tours().is_empty());
    }

    #[test]
    fn planner_save_assigns_ids_through_refresh() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        service.open_planner(&session, 1);
        assert!(service.draft().is_empty());

        service.draft_mut().add_day(1);
        service.draft_mut().days_mut()[0].activities[0] = Activity {
            name: "Trailhead briefing".to_string(),
            start_time: "07:00".to_string(),
            end_time: "07:30".to_string(),
        };
        service.save_day(&session, 0);

        assert_eq!(service.draft().len(), 1);
        assert!(service.draft().days()[0].id.is_some(), "refresh brings the assigned id");
        assert_eq!(service.draft().days()[0].activities[0].name, "Trailhead briefing");
    }

    #[test]
    fn deleting_unsaved_day_stays_local() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        service.open_planner(&session, 1);
        service.draft_mut().add_day(1);

        service.delete_day(&session, 0);

        assert!(service.draft().is_empty());
        // No remote record was ever created
        assert!(service.store().itineraries.lock().unwrap().is_empty());
        assert!(service.take_notices().is_empty());
    }

    #[test]
    fn deleting_persisted_day_removes_the_record() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        service.open_planner(&session, 1);
        service.draft_mut().add_day(1);
        service.save_day(&session, 0);
        assert_eq!(service.store().itineraries.lock().unwrap().len(), 1);

        service.delete_day(&session, 0);

        assert!(service.draft().is_empty());
        assert!(service.store().itineraries.lock().unwrap().is_empty());
    }

    #[test]
    fn failed_planner_load_does_not_open() {
        let (mut service, session) = service_with(vec![tour(1, "Salkantay", TourStatus::Active)]);
        service.store().set_fail(true);

        service.open_planner(&session, 1);

        assert_eq!(service.planner_tour(), None);
        assert_eq!(service.take_notices()[0].severity, Severity::Error);
    }
}
