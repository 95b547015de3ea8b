//! # Dashboard Tab
//!
//! Headline stat cards over the cached collections, plus the most recent
//! bookings for a quick glance at what came in.

use eframe::egui;

use crate::domain::calendar::format_departure_date;
use crate::domain::stats::dashboard_stats;
use crate::ui::app_state::TrekConsoleApp;

/// One stat card with a big number over a caption.
fn stat_card(ui: &mut egui::Ui, label: &str, value: usize, color: egui::Color32) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(248, 248, 250))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(220, 220, 225)))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_min_width(140.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(value.to_string())
                        .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(color),
                );
                ui.label(
                    egui::RichText::new(label)
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(egui::Color32::from_rgb(100, 100, 100)),
                );
            });
        });
}

impl TrekConsoleApp {
    /// Render the dashboard tab
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let stats = dashboard_stats(self.tours.tours(), self.bookings.bookings());

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            stat_card(ui, "Tours", stats.total_tours, egui::Color32::from_rgb(70, 130, 180));
            ui.add_space(12.0);
            stat_card(ui, "Active tours", stats.active_tours, egui::Color32::from_rgb(34, 139, 34));
            ui.add_space(12.0);
            stat_card(ui, "Bookings", stats.total_bookings, egui::Color32::from_rgb(70, 130, 180));
            ui.add_space(12.0);
            stat_card(
                ui,
                "Pending bookings",
                stats.pending_bookings,
                egui::Color32::from_rgb(255, 140, 0),
            );
        });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(
            egui::RichText::new("Recent bookings")
                .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                .strong(),
        );
        ui.add_space(8.0);

        if self.bookings.bookings().is_empty() {
            ui.label("No bookings yet.");
            return;
        }

        // Newest first, capped at five
        let mut recent: Vec<_> = self.bookings.bookings().to_vec();
        recent.sort_by_key(|booking| std::cmp::Reverse(booking.id));
        recent.truncate(5);

        let mut clicked = None;
        for booking in &recent {
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                if ui
                    .link(
                        egui::RichText::new(&booking.full_name)
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .strong(),
                    )
                    .clicked()
                {
                    clicked = Some(booking.id);
                }
                ui.label(format_departure_date(&booking.departure_date));
                ui.label(format!("{} people", booking.number_of_people));
                ui.label(
                    egui::RichText::new(booking.status.label())
                        .color(Self::status_color(booking.status)),
                );
            });
            ui.add_space(2.0);
        }

        if let Some(id) = clicked {
            self.bookings.select_booking(Some(id));
        }
    }
}
