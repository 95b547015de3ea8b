//! # Itinerary Planner Modal
//!
//! Day-by-day editor for one tour's itinerary. Activity fields edit the
//! draft in place; saving or deleting a day goes through the tour service so
//! persisted records and unsaved draft days are handled correctly.

use eframe::egui;

use crate::ui::app_state::TrekConsoleApp;

enum PlannerAction {
    SaveDay(usize),
    DeleteDay(usize),
    AddActivity(usize),
    RemoveActivity(usize, usize),
    AddDay,
    Close,
}

impl TrekConsoleApp {
    /// Render the itinerary planner modal
    pub fn render_planner(&mut self, ctx: &egui::Context) {
        let tour_id = match self.tours.planner_tour() {
            Some(id) => id,
            None => return,
        };
        let tour_name = self.tours.tour_name(Some(tour_id));

        let mut action = None;

        egui::Window::new(format!("Itinerary for {}", tour_name))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(480.0);

                egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                    if self.tours.draft().is_empty() {
                        ui.label("No days planned yet.");
                        ui.add_space(6.0);
                    }

                    for (day_index, day) in
                        self.tours.draft_mut().days_mut().iter_mut().enumerate()
                    {
                        egui::Frame::none()
                            .fill(egui::Color32::from_rgb(248, 248, 250))
                            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(220, 220, 225)))
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(egui::Margin::same(10.0))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new("Day")
                                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                            .strong(),
                                    );
                                    // Renumbering is allowed; blank or zero
                                    // input keeps the previous number
                                    let mut day_text = day.day.to_string();
                                    let response = ui.add(
                                        egui::TextEdit::singleline(&mut day_text)
                                            .desired_width(36.0),
                                    );
                                    if response.changed() {
                                        if let Ok(number) = day_text.trim().parse::<u32>() {
                                            if number > 0 {
                                                day.day = number;
                                            }
                                        }
                                    }
                                    if day.id.is_none() {
                                        ui.label(
                                            egui::RichText::new("unsaved")
                                                .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                                                .color(egui::Color32::from_rgb(255, 140, 0)),
                                        );
                                    }
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui.button("🗑").on_hover_text("Delete this day").clicked() {
                                                action = Some(PlannerAction::DeleteDay(day_index));
                                            }
                                            if ui.button("💾 Save day").clicked() {
                                                action = Some(PlannerAction::SaveDay(day_index));
                                            }
                                        },
                                    );
                                });

                                ui.add_space(4.0);

                                for (activity_index, activity) in
                                    day.activities.iter_mut().enumerate()
                                {
                                    ui.horizontal(|ui| {
                                        ui.add(
                                            egui::TextEdit::singleline(&mut activity.name)
                                                .hint_text("Activity")
                                                .desired_width(200.0),
                                        );
                                        ui.add(
                                            egui::TextEdit::singleline(&mut activity.start_time)
                                                .hint_text("08:00")
                                                .desired_width(56.0),
                                        );
                                        ui.label("to");
                                        ui.add(
                                            egui::TextEdit::singleline(&mut activity.end_time)
                                                .hint_text("10:00")
                                                .desired_width(56.0),
                                        );
                                        if ui.button("✖").clicked() {
                                            action = Some(PlannerAction::RemoveActivity(
                                                day_index,
                                                activity_index,
                                            ));
                                        }
                                    });
                                }

                                if ui.button("➕ Activity").clicked() {
                                    action = Some(PlannerAction::AddActivity(day_index));
                                }
                            });
                        ui.add_space(6.0);
                    }
                });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("➕ Add day").clicked() {
                        action = Some(PlannerAction::AddDay);
                    }
                    if ui.button("Close").clicked() {
                        action = Some(PlannerAction::Close);
                    }
                });
            });

        match action {
            Some(PlannerAction::SaveDay(index)) => self.tours.save_day(&self.session, index),
            Some(PlannerAction::DeleteDay(index)) => self.tours.delete_day(&self.session, index),
            Some(PlannerAction::AddActivity(index)) => self.tours.draft_mut().add_activity(index),
            Some(PlannerAction::RemoveActivity(day, activity)) => {
                self.tours.draft_mut().remove_activity(day, activity)
            }
            Some(PlannerAction::AddDay) => self.tours.draft_mut().add_day(tour_id),
            Some(PlannerAction::Close) => self.tours.close_planner(),
            None => {}
        }
    }
}
