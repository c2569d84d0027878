use crate::app::Docpane;
use crate::registry;
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl Docpane {
    pub(super) fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.vertical(|ui| {
                ui.heading("ASP.NET Core Web API");
                ui.label(
                    RichText::new("Complete Implementation Documentation")
                        .small()
                        .color(theme::TEXT_MUTED),
                );
            });

            // Breadcrumb for the current section, useful when the sidebar is collapsed
            if let Some(section) = registry::find(&self.active_section) {
                ui.add_space(12.0);
                ui.label(RichText::new(icons::CARET_RIGHT).color(theme::TEXT_MUTED));
                ui.label(
                    RichText::new(format!("{} {}", section.icon, section.title))
                        .color(theme::TEXT_SECONDARY),
                );
            }

            // === Right Side: Version & Close ===
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close_btn = ui
                    .add(egui::Button::new(icons::X).min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Close");
                if close_btn.clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .weak(),
                );
            });
        });
    }
}
