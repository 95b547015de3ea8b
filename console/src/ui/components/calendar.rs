//! # Calendar Tab
//!
//! Monthly departure calendar: a Sunday-first grid of the selected month with
//! a clickable chip per booking on its departure day. Month navigation moves
//! a plain (year, month) cursor; no data reload is needed because grouping
//! happens locally over the cached collection.

use eframe::egui;

use crate::domain::calendar::{build_grid, bookings_by_day};
use crate::ui::app_state::TrekConsoleApp;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Chips shown per day before collapsing into a "+N more" line.
const MAX_CHIPS_PER_DAY: usize = 3;

impl TrekConsoleApp {
    /// Render the calendar tab
    pub fn render_calendar_tab(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        self.render_month_controls(ui);
        ui.add_space(8.0);

        let grid = build_grid(self.selected_year, self.selected_month);
        let by_day = bookings_by_day(
            self.bookings.bookings(),
            self.selected_year,
            self.selected_month,
        );

        let today = {
            use chrono::Datelike;
            let now = chrono::Local::now();
            (now.year() == self.selected_year && now.month0() == self.selected_month)
                .then(|| now.day())
        };

        let mut clicked = None;

        ui.columns(7, |columns| {
            for (index, name) in WEEKDAYS.iter().enumerate() {
                columns[index].vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(*name)
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(egui::Color32::from_rgb(100, 100, 100)),
                    );
                });
            }
        });
        ui.add_space(4.0);

        for week in grid.chunks(7) {
            ui.columns(7, |columns| {
                for (index, cell) in week.iter().enumerate() {
                    let ui = &mut columns[index];
                    match cell {
                        None => {
                            // Filler cell outside the month
                            egui::Frame::none()
                                .fill(egui::Color32::from_rgb(240, 240, 242))
                                .rounding(egui::Rounding::same(4.0))
                                .show(ui, |ui| {
                                    ui.set_min_height(88.0);
                                    ui.set_width(ui.available_width());
                                });
                        }
                        Some(day) => {
                            let is_today = today == Some(*day);
                            let stroke = if is_today {
                                egui::Stroke::new(2.0, egui::Color32::from_rgb(70, 130, 180))
                            } else {
                                egui::Stroke::new(1.0, egui::Color32::from_rgb(220, 220, 225))
                            };

                            egui::Frame::none()
                                .fill(egui::Color32::WHITE)
                                .stroke(stroke)
                                .rounding(egui::Rounding::same(4.0))
                                .inner_margin(egui::Margin::same(4.0))
                                .show(ui, |ui| {
                                    ui.set_min_height(80.0);
                                    ui.set_width(ui.available_width());

                                    ui.label(
                                        egui::RichText::new(day.to_string())
                                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                            .strong(),
                                    );

                                    if let Some(day_bookings) = by_day.get(day) {
                                        for booking in day_bookings.iter().take(MAX_CHIPS_PER_DAY) {
                                            let chip = egui::Button::new(
                                                egui::RichText::new(&booking.full_name)
                                                    .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                                                    .color(egui::Color32::WHITE),
                                            )
                                            .fill(Self::status_color(booking.status))
                                            .rounding(egui::Rounding::same(4.0))
                                            .min_size(egui::vec2(ui.available_width(), 16.0));

                                            if ui.add(chip).clicked() {
                                                clicked = Some(booking.id);
                                            }
                                        }

                                        if day_bookings.len() > MAX_CHIPS_PER_DAY {
                                            ui.label(
                                                egui::RichText::new(format!(
                                                    "+{} more",
                                                    day_bookings.len() - MAX_CHIPS_PER_DAY
                                                ))
                                                .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                                                .color(egui::Color32::from_rgb(120, 120, 120)),
                                            );
                                        }
                                    }
                                });
                        }
                    }
                }
            });
            ui.add_space(4.0);
        }

        if let Some(id) = clicked {
            self.bookings.select_booking(Some(id));
        }
    }

    /// Draw the month navigation controls
    fn render_month_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            if ui
                .add(egui::Button::new("<").min_size(egui::vec2(32.0, 28.0)))
                .clicked()
            {
                self.navigate_to_previous_month();
            }

            ui.add_space(12.0);

            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{} {}",
                        self.current_month_name(),
                        self.selected_year
                    ))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong(),
                )
                .selectable(false),
            );

            ui.add_space(12.0);

            if ui
                .add(egui::Button::new(">").min_size(egui::vec2(32.0, 28.0)))
                .clicked()
            {
                self.navigate_to_next_month();
            }
        });
    }
}
