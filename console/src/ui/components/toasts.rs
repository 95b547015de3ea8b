//! # Toast Notifications
//!
//! Transient success/error notices stacked in the top-right corner. The
//! coordinator prunes them after [`crate::ui::app_state::TOAST_TTL`]; this
//! module only draws whatever is currently alive.

use eframe::egui;

use crate::ui::app_state::TrekConsoleApp;

impl TrekConsoleApp {
    /// Render the toast stack
    pub fn render_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_stack"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let color = Self::severity_color(toast.notice.severity);

                    egui::Frame::window(&ui.style())
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(1.5, color))
                        .rounding(egui::Rounding::same(8.0))
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.notice.message)
                                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                    .color(color),
                            );
                        });

                    ui.add_space(6.0);
                }
            });
    }
}
