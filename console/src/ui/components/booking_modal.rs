//! # Booking Detail Modal
//!
//! The booking dialog in its three visible stages: read-only view, edit form,
//! and the in-flight saving state. Which stage shows is owned by the booking
//! service; this module only renders it and forwards the button presses.

use eframe::egui;
use shared::{Booking, BookingStatus};

use crate::domain::bookings::DialogStage;
use crate::domain::calendar::format_departure_date;
use crate::ui::app_state::TrekConsoleApp;

fn view_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(
        egui::RichText::new(label).color(egui::Color32::from_rgb(100, 100, 100)),
    );
    ui.label(value);
    ui.end_row();
}

fn edit_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(240.0));
    ui.end_row();
}

impl TrekConsoleApp {
    /// Render the booking detail modal for whatever stage the dialog is in
    pub fn render_booking_modal(&mut self, ctx: &egui::Context) {
        let stage = self.bookings.stage();
        if stage == DialogStage::Closed {
            return;
        }
        let booking = match self.bookings.selected_booking() {
            Some(booking) => booking.clone(),
            None => return,
        };

        match stage {
            DialogStage::Viewing => self.render_booking_view(ctx, &booking),
            DialogStage::Editing => self.render_booking_edit(ctx, false),
            DialogStage::Saving => self.render_booking_edit(ctx, true),
            DialogStage::Closed => {}
        }
    }

    /// Read-only stage with quick status changes
    fn render_booking_view(&mut self, ctx: &egui::Context, booking: &Booking) {
        let mut quick_status = None;

        egui::Window::new("Booking details")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("booking_view_grid")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        view_row(ui, "Full name", &booking.full_name);
                        view_row(ui, "Phone", &booking.phone);
                        view_row(ui, "Nationality", &booking.nationality);
                        view_row(ui, "Document", booking.document.as_deref().unwrap_or("-"));
                        view_row(ui, "People", &booking.number_of_people.to_string());
                        view_row(
                            ui,
                            "Departure",
                            &format_departure_date(&booking.departure_date),
                        );
                        view_row(ui, "Tour", &self.tours.tour_name(booking.tour_id));
                        view_row(ui, "Price", &format!("${:.2}", booking.applied_price));
                        view_row(ui, "Note", booking.note.as_deref().unwrap_or("-"));

                        ui.label(
                            egui::RichText::new("Status")
                                .color(egui::Color32::from_rgb(100, 100, 100)),
                        );
                        ui.label(
                            egui::RichText::new(booking.status.label())
                                .strong()
                                .color(Self::status_color(booking.status)),
                        );
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("Set status:");
                    for status in BookingStatus::ALL {
                        if status == booking.status {
                            continue;
                        }
                        if ui
                            .button(
                                egui::RichText::new(status.label())
                                    .color(Self::status_color(status)),
                            )
                            .clicked()
                        {
                            quick_status = Some(status);
                        }
                    }
                });

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if ui.button("✏ Edit").clicked() {
                        self.bookings.begin_edit();
                    }
                    if ui.button("🗑 Delete booking").clicked() {
                        self.confirm_delete_booking = Some(booking.id);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            self.bookings.close_dialog();
                        }
                    });
                });
            });

        if let Some(status) = quick_status {
            self.bookings.change_status(&self.session, booking.id, status);
        }
    }

    /// Edit form stage; `saving` renders the same form locked with a spinner
    fn render_booking_edit(&mut self, ctx: &egui::Context, saving: bool) {
        egui::Window::new("Edit booking")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!saving, |ui| {
                    egui::Grid::new("booking_edit_grid")
                        .num_columns(2)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            let form = self.bookings.form_mut();
                            edit_row(ui, "Full name", &mut form.full_name);
                            edit_row(ui, "Phone", &mut form.phone);
                            edit_row(ui, "Nationality", &mut form.nationality);
                            edit_row(ui, "Document", &mut form.document);
                            edit_row(ui, "People", &mut form.number_of_people);
                            edit_row(ui, "Departure (YYYY-MM-DD)", &mut form.departure_date);
                            edit_row(ui, "Price", &mut form.applied_price);
                            edit_row(ui, "Note", &mut form.note);
                        });

                    ui.add_space(6.0);

                    egui::Grid::new("booking_edit_combos")
                        .num_columns(2)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Status");
                            let mut status = self.bookings.form().status;
                            egui::ComboBox::from_id_source("booking_edit_status")
                                .selected_text(status.label())
                                .show_ui(ui, |ui| {
                                    for candidate in BookingStatus::ALL {
                                        ui.selectable_value(
                                            &mut status,
                                            candidate,
                                            candidate.label(),
                                        );
                                    }
                                });
                            if status != self.bookings.form().status {
                                self.bookings.form_mut().status = status;
                            }
                            ui.end_row();

                            ui.label("Tour");
                            let mut tour_id = self.bookings.form().tour_id;
                            egui::ComboBox::from_id_source("booking_edit_tour")
                                .selected_text(self.tours.tour_name(tour_id))
                                .show_ui(ui, |ui| {
                                    ui.selectable_value(&mut tour_id, None, "Unpaired");
                                    for tour in self.tours.tours() {
                                        ui.selectable_value(
                                            &mut tour_id,
                                            Some(tour.id),
                                            &tour.name,
                                        );
                                    }
                                });
                            if tour_id != self.bookings.form().tour_id {
                                self.bookings.form_mut().tour_id = tour_id;
                            }
                            ui.end_row();
                        });
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if saving {
                        ui.spinner();
                        ui.label("Saving...");
                    } else {
                        if ui.button("💾 Save").clicked() {
                            self.bookings.save_edits(&self.session);
                        }
                        if ui.button("Cancel").clicked() {
                            self.bookings.cancel_edit();
                        }
                    }
                });
            });
    }
}
