//! # Tours Tab
//!
//! Tour catalog table with per-tour actions: edit, delete, and the itinerary
//! planner. Creation goes through the same editor modal, opened empty.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::TourStatus;

use crate::ui::app_state::TrekConsoleApp;

enum TourAction {
    Edit(i64),
    Delete(i64),
    Planner(i64),
}

fn duration_text(days: u32, hours: u32) -> String {
    match (days > 0, hours > 0) {
        (true, true) => format!("{} days, {} hours/day", days, hours),
        (true, false) => format!("{} days", days),
        (false, true) => format!("{} hours", hours),
        (false, false) => "-".to_string(),
    }
}

fn description_caption(description: &str) -> String {
    let mut caption: String = description.chars().take(50).collect();
    if description.chars().count() > 50 {
        caption.push_str("...");
    }
    caption
}

impl TrekConsoleApp {
    /// Render the tours tab
    pub fn render_tours_tab(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Tour catalog")
                    .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                if ui.button("➕ New tour").clicked() {
                    self.open_tour_creator();
                }
            });
        });
        ui.add_space(8.0);

        if self.tours.tours().is_empty() {
            ui.label("No tours yet. Create the first one to start taking bookings.");
            return;
        }

        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(220.0)) // NAME
            .column(Column::initial(90.0)) // DIFFICULTY
            .column(Column::initial(80.0)) // DISTANCE
            .column(Column::initial(140.0)) // DURATION
            .column(Column::initial(90.0)) // PRICE
            .column(Column::initial(70.0)) // STATUS
            .column(Column::remainder()) // ACTIONS
            .header(28.0, |mut header| {
                for title in [
                    "Name",
                    "Difficulty",
                    "Distance",
                    "Duration",
                    "Price (1p)",
                    "Status",
                    "",
                ] {
                    header.col(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for tour in self.tours.tours() {
                    body.row(36.0, |mut row| {
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&tour.name)
                                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                        .strong(),
                                );
                                if !tour.description.is_empty() {
                                    ui.label(
                                        egui::RichText::new(description_caption(&tour.description))
                                            .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                                            .color(egui::Color32::from_rgb(120, 120, 120)),
                                    );
                                }
                            });
                        });
                        row.col(|ui| {
                            ui.label(&tour.difficulty);
                        });
                        row.col(|ui| {
                            ui.label(&tour.distance);
                        });
                        row.col(|ui| {
                            ui.label(duration_text(tour.days, tour.hours));
                        });
                        row.col(|ui| {
                            ui.label(format!("${:.0}", tour.price_one));
                        });
                        row.col(|ui| {
                            let status_color = match tour.status {
                                TourStatus::Active => egui::Color32::from_rgb(34, 139, 34),
                                TourStatus::Inactive => egui::Color32::from_rgb(120, 120, 120),
                            };
                            ui.label(
                                egui::RichText::new(tour.status.label()).color(status_color),
                            );
                        });
                        row.col(|ui| {
                            if ui.button("📋 Itinerary").clicked() {
                                action = Some(TourAction::Planner(tour.id));
                            }
                            if ui.button("✏ Edit").clicked() {
                                action = Some(TourAction::Edit(tour.id));
                            }
                            if ui.button("🗑").on_hover_text("Delete tour").clicked() {
                                action = Some(TourAction::Delete(tour.id));
                            }
                        });
                    });
                }
            });

        match action {
            Some(TourAction::Edit(id)) => self.open_tour_editor(id),
            Some(TourAction::Delete(id)) => self.confirm_delete_tour = Some(id),
            Some(TourAction::Planner(id)) => self.tours.open_planner(&self.session, id),
            None => {}
        }
    }

    /// Render the delete-tour confirmation dialog
    pub fn render_delete_tour_confirm(&mut self, ctx: &egui::Context) {
        let tour_id = match self.confirm_delete_tour {
            Some(id) => id,
            None => return,
        };
        let tour_name = self.tours.tour_name(Some(tour_id));

        egui::Window::new("Delete tour")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Delete \"{}\"? Its bookings stay but become unpaired.",
                    tour_name
                ));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.delete_tour_confirmed(tour_id);
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete_tour = None;
                    }
                });
            });
    }
}
