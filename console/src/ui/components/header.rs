//! # Header Component
//!
//! Application header: title on the left, tab navigation in the middle, and
//! session controls (refresh, logout) on the right.

use eframe::egui;

use crate::ui::app_state::{ConsoleTab, TrekConsoleApp};

impl TrekConsoleApp {
    /// Render the application header row
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("🏔 Trek Console")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.add_space(24.0);

            for tab in ConsoleTab::ALL {
                let selected = self.current_tab == tab;
                if ui
                    .selectable_label(selected, egui::RichText::new(tab.label()).size(15.0))
                    .clicked()
                {
                    self.switch_tab(tab);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);

                if ui.button("Log out").clicked() {
                    self.logout();
                }

                if ui
                    .button("🔄 Refresh")
                    .on_hover_text("Re-fetch the data shown on this tab")
                    .clicked()
                {
                    self.load_tab_data();
                }
            });
        });
        ui.add_space(6.0);
    }
}
