//! # Tour Editor Modal
//!
//! Create/edit form for a tour. The same modal serves both: it is opened
//! empty for creation and prefilled for editing, and the footer button
//! submits through [`TrekConsoleApp::submit_tour_editor`].

use eframe::egui;
use shared::TourStatus;

use crate::ui::app_state::TrekConsoleApp;

fn form_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(280.0));
    ui.end_row();
}

impl TrekConsoleApp {
    /// Render the tour editor modal
    pub fn render_tour_editor(&mut self, ctx: &egui::Context) {
        if !self.show_tour_editor {
            return;
        }

        let title = if self.editing_tour_id.is_some() {
            "Edit tour"
        } else {
            "New tour"
        };

        let mut open = true;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                    egui::Grid::new("tour_editor_grid")
                        .num_columns(2)
                        .spacing([12.0, 8.0])
                        .show(ui, |ui| {
                            form_row(ui, "Name", &mut self.tour_form.name);

                            ui.label("Description");
                            ui.add(
                                egui::TextEdit::multiline(&mut self.tour_form.description)
                                    .desired_width(280.0)
                                    .desired_rows(3),
                            );
                            ui.end_row();

                            form_row(ui, "Altitude", &mut self.tour_form.altitude);
                            form_row(ui, "Difficulty", &mut self.tour_form.difficulty);
                            form_row(ui, "Distance", &mut self.tour_form.distance);
                            form_row(ui, "Temperature", &mut self.tour_form.temperature);
                            form_row(ui, "Days", &mut self.tour_form.days);
                            form_row(ui, "Hours per day", &mut self.tour_form.hours);
                            form_row(ui, "Price (1 person)", &mut self.tour_form.price_one);
                            form_row(ui, "Price (couple)", &mut self.tour_form.price_couple);
                            form_row(ui, "Price (3-5 people)", &mut self.tour_form.price_three_to_five);
                            form_row(ui, "Price (6+ people)", &mut self.tour_form.price_six_plus);

                            ui.label("Image URLs");
                            ui.add(
                                egui::TextEdit::multiline(&mut self.tour_form.images)
                                    .desired_width(280.0)
                                    .desired_rows(2),
                            );
                            ui.end_row();

                            form_row(ui, "Includes", &mut self.tour_form.includes);
                            form_row(ui, "Recommendations", &mut self.tour_form.recommendations);

                            ui.label("Status");
                            egui::ComboBox::from_id_source("tour_editor_status")
                                .selected_text(self.tour_form.status.label())
                                .show_ui(ui, |ui| {
                                    ui.selectable_value(
                                        &mut self.tour_form.status,
                                        TourStatus::Active,
                                        TourStatus::Active.label(),
                                    );
                                    ui.selectable_value(
                                        &mut self.tour_form.status,
                                        TourStatus::Inactive,
                                        TourStatus::Inactive.label(),
                                    );
                                });
                            ui.end_row();
                        });

                    ui.label(
                        egui::RichText::new("Lists are comma-separated.")
                            .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                            .color(egui::Color32::from_rgb(130, 130, 130)),
                    );
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let save_enabled = !self.tour_form.name.trim().is_empty();
                    let save_label = if self.editing_tour_id.is_some() {
                        "Save changes"
                    } else {
                        "Create tour"
                    };

                    let save_response =
                        ui.add_enabled(save_enabled, egui::Button::new(save_label));
                    if save_response.clicked() {
                        self.submit_tour_editor();
                    }
                    if !save_enabled {
                        save_response.on_hover_text("The tour needs a name");
                    }

                    if ui.button("Cancel").clicked() {
                        self.close_tour_editor();
                    }
                });
            });

        if !open {
            self.close_tour_editor();
        }
    }
}
