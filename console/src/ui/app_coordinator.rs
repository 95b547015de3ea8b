//! # App Coordinator Module
//!
//! This module contains the main application coordination logic: the
//! `eframe::App` implementation with the primary update loop.
//!
//! ## Application Flow:
//! 1. Gate everything behind the login screen until a token is verified
//! 2. Re-fetch the current tab's data when the window regains focus
//! 3. Collect service notices into toasts and expire old ones
//! 4. Render header, current tab content, modals, and toasts

use std::time::Duration;

use eframe::egui;

use crate::domain::bookings::DialogStage;
use crate::ui::app_state::{ConsoleTab, TrekConsoleApp};

impl eframe::App for TrekConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.session.is_authenticated() {
            self.render_login_screen(ctx);
            return;
        }

        // Other operators may have changed data while this window was in the
        // background; re-fetch when focus comes back
        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if focused && !self.window_focused {
            log::info!("🔄 Window refocused, refreshing data");
            self.load_tab_data();
        }
        self.window_focused = focused;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_topmost_overlay();
        }

        self.collect_notices();
        self.prune_toasts();
        if !self.toasts.is_empty() {
            // Keep repainting so expiry happens without user input
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.current_tab {
                ConsoleTab::Dashboard => self.render_dashboard(ui),
                ConsoleTab::Tours => self.render_tours_tab(ui),
                ConsoleTab::Bookings => self.render_bookings_tab(ui),
                ConsoleTab::Calendar => self.render_calendar_tab(ui),
            }
        });

        self.render_modals(ctx);
        self.render_toasts(ctx);
    }
}

impl TrekConsoleApp {
    /// Close whichever overlay is closest to the user, one per key press.
    fn close_topmost_overlay(&mut self) {
        if self.confirm_delete_booking.is_some() {
            self.confirm_delete_booking = None;
        } else if self.confirm_delete_tour.is_some() {
            self.confirm_delete_tour = None;
        } else if self.tours.planner_tour().is_some() {
            self.tours.close_planner();
        } else if self.show_tour_editor {
            self.close_tour_editor();
        } else if self.bookings.stage() == DialogStage::Editing {
            self.bookings.cancel_edit();
        } else {
            self.bookings.close_dialog();
        }
    }
}
