//! # UI Components Module
//!
//! This module organizes all UI components for the console. Each submodule
//! holds `impl TrekConsoleApp` render blocks for one aspect of the interface.
//!
//! ## Module Organization:
//! - `login` - Token entry screen shown before a session exists
//! - `header` - Application header with tab navigation and session controls
//! - `dashboard` - Stat cards and the recent bookings list
//! - `tours` - Tour catalog list with per-tour actions
//! - `tour_editor` - Create/edit tour modal
//! - `planner` - Day-by-day itinerary planner modal
//! - `bookings` - Bookings table with status filter
//! - `booking_modal` - Booking detail dialog (view / edit / saving)
//! - `calendar` - Monthly departure calendar
//! - `toasts` - Transient success/error notifications

use eframe::egui;

use crate::ui::app_state::TrekConsoleApp;

pub mod booking_modal;
pub mod bookings;
pub mod calendar;
pub mod dashboard;
pub mod header;
pub mod login;
pub mod planner;
pub mod toasts;
pub mod tour_editor;
pub mod tours;

impl TrekConsoleApp {
    /// Render all modals
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_booking_modal(ctx);
        self.render_tour_editor(ctx);
        self.render_planner(ctx);
        self.render_delete_tour_confirm(ctx);
        self.render_delete_booking_confirm(ctx);
    }
}
