//! # Booking Service
//!
//! Owns the cached booking collection and coordinates every mutation against
//! the remote store: select a booking, change its status, save field edits,
//! delete, reload. A mutation reconciles the cache either by patching the one
//! record in place or by re-fetching the whole collection; both are exposed
//! as distinct operations so each screen picks its strategy deliberately.
//!
//! A remote failure never touches the cache: the collection stays exactly as
//! it was and the failure surfaces as a transient notice. Successes surface
//! as success notices the same way.

use shared::{Booking, BookingPatch, BookingStatus, Notice};

use crate::domain::forms::BookingForm;
use crate::domain::FetchSeq;
use crate::services::{BookingStore, Session};

/// Stage of the booking detail dialog.
///
/// `Closed -> Viewing -> Editing -> Saving`, then back to `Closed` when the
/// save lands or to `Editing` (input intact) when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogStage {
    #[default]
    Closed,
    /// Read-only detail view
    Viewing,
    /// Edit form open, possibly holding unsaved input
    Editing,
    /// Remote update in flight
    Saving,
}

/// Cached bookings plus everything needed to view and mutate one of them.
pub struct BookingService<S> {
    store: S,
    bookings: Vec<Booking>,
    /// Status filter of the last load; reloads reuse it
    filter: Option<BookingStatus>,
    selected_id: Option<i64>,
    stage: DialogStage,
    form: BookingForm,
    notices: Vec<Notice>,
    loads: FetchSeq,
}

impl<S: BookingStore> BookingService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            bookings: Vec::new(),
            filter: None,
            selected_id: None,
            stage: DialogStage::Closed,
            form: BookingForm::default(),
            notices: Vec::new(),
            loads: FetchSeq::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn filter(&self) -> Option<BookingStatus> {
        self.filter
    }

    pub fn stage(&self) -> DialogStage {
        self.stage
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    /// The booking the dialog is showing, resolved against the cache so the
    /// view always reflects the latest reconciled state.
    pub fn selected_booking(&self) -> Option<&Booking> {
        self.selected_id
            .and_then(|id| self.bookings.iter().find(|b| b.id == id))
    }

    /// Drain pending notices for the presentation layer to display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Select a booking for detail display, or clear the selection. Clearing
    /// also dismisses the detail dialog.
    pub fn select_booking(&mut self, id: Option<i64>) {
        match id {
            Some(id) => {
                self.selected_id = Some(id);
                self.stage = DialogStage::Viewing;
            }
            None => self.close_dialog(),
        }
    }

    pub fn close_dialog(&mut self) {
        self.selected_id = None;
        self.stage = DialogStage::Closed;
        self.form.clear();
    }

    /// Switch the open detail view into edit mode, prefilling the form from
    /// the cached record.
    pub fn begin_edit(&mut self) {
        if let Some(booking) = self.selected_booking() {
            self.form = BookingForm::from_booking(booking);
            self.stage = DialogStage::Editing;
        }
    }

    /// Drop unsaved edits and fall back to the read-only view.
    pub fn cancel_edit(&mut self) {
        if self.stage == DialogStage::Editing {
            self.form.clear();
            self.stage = DialogStage::Viewing;
        }
    }

    /// Re-fetch the collection, optionally server-filtered by status.
    pub fn load_bookings(&mut self, session: &Session, filter: Option<BookingStatus>) {
        self.filter = filter;
        let seq = self.loads.begin();
        let result = self.store.list_bookings(session, filter);
        self.finish_load(seq, result);
    }

    /// Re-fetch with the filter of the previous load.
    pub fn reload(&mut self, session: &Session) {
        let seq = self.loads.begin();
        let result = self.store.list_bookings(session, self.filter);
        self.finish_load(seq, result);
    }

    /// Apply a completed fetch, unless a newer fetch has been issued since:
    /// stale responses are discarded so an old month's data can never
    /// overwrite a newer navigation.
    fn finish_load(&mut self, seq: u64, result: anyhow::Result<Vec<Booking>>) {
        if !self.loads.is_current(seq) {
            log::debug!("discarding stale booking load #{}", seq);
            return;
        }
        match result {
            Ok(bookings) => {
                log::info!("loaded {} bookings", bookings.len());
                self.bookings = bookings;
                // The reload may have dropped the selected booking (deleted
                // remotely, or filtered out); close rather than show a ghost
                if let Some(id) = self.selected_id {
                    if !self.bookings.iter().any(|b| b.id == id) {
                        self.close_dialog();
                    }
                }
            }
            Err(error) => {
                log::warn!("failed to load bookings: {:#}", error);
                self.notices
                    .push(Notice::error(format!("Failed to load bookings: {:#}", error)));
            }
        }
    }

    /// Change one booking's status, reconciling the cache by patching the
    /// matching record in place on success. All other fields stay untouched.
    pub fn change_status(&mut self, session: &Session, id: i64, status: BookingStatus) {
        match self
            .store
            .update_booking(session, &BookingPatch::status_only(id, status))
        {
            Ok(()) => {
                if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
                    booking.status = status;
                } else {
                    log::warn!("booking {} not in cache after status change", id);
                }
                self.notices.push(Notice::success("Booking status updated"));
            }
            Err(error) => {
                log::warn!("status change for booking {} failed: {:#}", id, error);
                self.notices
                    .push(Notice::error(format!("Failed to update booking: {:#}", error)));
            }
        }
    }

    /// Change one booking's status, reconciling the cache by re-fetching the
    /// whole collection on success. The update happens before the re-fetch,
    /// so the reloaded data always reflects it.
    pub fn change_status_and_reload(&mut self, session: &Session, id: i64, status: BookingStatus) {
        match self
            .store
            .update_booking(session, &BookingPatch::status_only(id, status))
        {
            Ok(()) => {
                self.notices.push(Notice::success("Booking status updated"));
                self.reload(session);
            }
            Err(error) => {
                log::warn!("status change for booking {} failed: {:#}", id, error);
                self.notices
                    .push(Notice::error(format!("Failed to update booking: {:#}", error)));
            }
        }
    }

    /// Persist the open edit form as a sparse patch. On success the dialog
    /// closes, the form resets, and the collection is re-fetched; on failure
    /// the form keeps the user's input so no work is lost.
    pub fn save_edits(&mut self, session: &Session) {
        let id = match self.selected_id {
            Some(id) => id,
            None => return,
        };
        if self.stage != DialogStage::Editing {
            return;
        }

        self.stage = DialogStage::Saving;
        let patch = self.form.to_patch(id);
        match self.store.update_booking(session, &patch) {
            Ok(()) => {
                self.notices.push(Notice::success("Booking updated"));
                self.close_dialog();
                self.reload(session);
            }
            Err(error) => {
                log::warn!("saving booking {} failed: {:#}", id, error);
                self.notices
                    .push(Notice::error(format!("Failed to update booking: {:#}", error)));
                self.stage = DialogStage::Editing;
            }
        }
    }

    /// Delete a booking and re-fetch the collection. Confirmation is the
    /// UI's responsibility; this goes straight to the store.
    pub fn delete_booking(&mut self, session: &Session, id: i64) {
        match self.store.delete_booking(session, id) {
            Ok(()) => {
                if self.selected_id == Some(id) {
                    self.close_dialog();
                }
                self.notices.push(Notice::success("Booking deleted"));
                self.reload(session);
            }
            Err(error) => {
                log::warn!("deleting booking {} failed: {:#}", id, error);
                self.notices
                    .push(Notice::error(format!("Failed to delete booking: {:#}", error)));
            }
        }
    }
}
