//! # Login Screen
//!
//! Token entry screen shown while no session exists. The token is verified
//! against the remote API before anything else becomes reachable.

use eframe::egui;

use crate::ui::app_state::TrekConsoleApp;

impl TrekConsoleApp {
    /// Render the full-window login screen
    pub fn render_login_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);

                ui.label(
                    egui::RichText::new("🏔 Trek Console")
                        .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                        .strong(),
                );

                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new("Sign in with your operator access token")
                        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                        .color(egui::Color32::from_rgb(100, 100, 100)),
                );

                ui.add_space(30.0);

                let input_response = ui.add(
                    egui::TextEdit::singleline(&mut self.token_input)
                        .hint_text("Access token")
                        .password(true)
                        .desired_width(320.0)
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
                );

                if self.token_input.is_empty() {
                    input_response.request_focus();
                }

                let submitted = input_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(12.0);

                if let Some(error) = &self.login_error {
                    ui.label(
                        egui::RichText::new(error)
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .color(egui::Color32::from_rgb(220, 53, 69)),
                    );
                    ui.add_space(8.0);
                }

                let login_button = egui::Button::new(
                    egui::RichText::new("Sign in")
                        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                        .color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(70, 130, 180))
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(140.0, 36.0));

                if ui.add(login_button).clicked() || submitted {
                    self.submit_login();
                }
            });
        });
    }
}
