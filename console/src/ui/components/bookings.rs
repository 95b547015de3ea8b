//! # Bookings Tab
//!
//! The bookings table with its status filter. Changing the filter re-fetches
//! server-side; changing a status from a row persists the patch and then
//! reloads the whole collection.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::BookingStatus;

use crate::domain::calendar::format_departure_date;
use crate::ui::app_state::TrekConsoleApp;

enum RowAction {
    Open(i64),
    Delete(i64),
    Status(i64, BookingStatus),
}

impl TrekConsoleApp {
    /// Render the bookings tab
    pub fn render_bookings_tab(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Bookings")
                    .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.add_space(16.0);
            ui.label("Status:");

            let previous = self.bookings_filter;
            egui::ComboBox::from_id_source("bookings_status_filter")
                .selected_text(match self.bookings_filter {
                    None => "All statuses",
                    Some(status) => status.label(),
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.bookings_filter, None, "All statuses");
                    for status in BookingStatus::ALL {
                        ui.selectable_value(&mut self.bookings_filter, Some(status), status.label());
                    }
                });
            if self.bookings_filter != previous {
                self.bookings.load_bookings(&self.session, self.bookings_filter);
            }
        });
        ui.add_space(8.0);

        if self.bookings.bookings().is_empty() {
            ui.label("No bookings match this filter.");
            return;
        }

        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(160.0)) // NAME
            .column(Column::initial(110.0)) // PHONE
            .column(Column::initial(90.0)) // NATIONALITY
            .column(Column::initial(55.0)) // PEOPLE
            .column(Column::initial(110.0)) // DEPARTURE
            .column(Column::initial(130.0)) // TOUR
            .column(Column::initial(70.0)) // PRICE
            .column(Column::initial(110.0)) // STATUS
            .column(Column::remainder()) // ACTIONS
            .header(28.0, |mut header| {
                for title in [
                    "Name",
                    "Phone",
                    "Nationality",
                    "People",
                    "Departure",
                    "Tour",
                    "Price",
                    "Status",
                    "",
                ] {
                    header.col(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for booking in self.bookings.bookings() {
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            if ui.link(&booking.full_name).clicked() {
                                action = Some(RowAction::Open(booking.id));
                            }
                        });
                        row.col(|ui| {
                            ui.label(&booking.phone);
                        });
                        row.col(|ui| {
                            ui.label(&booking.nationality);
                        });
                        row.col(|ui| {
                            ui.label(booking.number_of_people.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format_departure_date(&booking.departure_date));
                        });
                        row.col(|ui| {
                            ui.label(self.tours.tour_name(booking.tour_id));
                        });
                        row.col(|ui| {
                            ui.label(format!("${:.2}", booking.applied_price));
                        });
                        row.col(|ui| {
                            let mut status = booking.status;
                            egui::ComboBox::from_id_source(("booking_row_status", booking.id))
                                .selected_text(
                                    egui::RichText::new(status.label())
                                        .color(Self::status_color(status)),
                                )
                                .show_ui(ui, |ui| {
                                    for candidate in BookingStatus::ALL {
                                        ui.selectable_value(
                                            &mut status,
                                            candidate,
                                            candidate.label(),
                                        );
                                    }
                                });
                            if status != booking.status {
                                action = Some(RowAction::Status(booking.id, status));
                            }
                        });
                        row.col(|ui| {
                            if ui.button("🗑").on_hover_text("Delete booking").clicked() {
                                action = Some(RowAction::Delete(booking.id));
                            }
                        });
                    });
                }
            });

        match action {
            Some(RowAction::Open(id)) => self.bookings.select_booking(Some(id)),
            Some(RowAction::Delete(id)) => self.confirm_delete_booking = Some(id),
            Some(RowAction::Status(id, status)) => {
                self.bookings.change_status_and_reload(&self.session, id, status)
            }
            None => {}
        }
    }

    /// Render the delete-booking confirmation dialog
    pub fn render_delete_booking_confirm(&mut self, ctx: &egui::Context) {
        let booking_id = match self.confirm_delete_booking {
            Some(id) => id,
            None => return,
        };
        let name = self
            .bookings
            .bookings()
            .iter()
            .find(|b| b.id == booking_id)
            .map(|b| b.full_name.clone())
            .unwrap_or_else(|| format!("booking #{}", booking_id));

        egui::Window::new("Delete booking")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!("Delete the booking for {}? This cannot be undone.", name));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.confirm_delete_booking = None;
                        self.bookings.delete_booking(&self.session, booking_id);
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete_booking = None;
                    }
                });
            });
    }
}
