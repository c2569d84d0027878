use crate::app::Docpane;
use crate::registry::SECTIONS;
use crate::ui::responsive;
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl Docpane {
    /// Expanded sidebar: section list in registry order.
    pub(super) fn display_sidebar(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        // Header with collapse toggle
        ui.horizontal(|ui| {
            ui.heading("Sections");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(icons::CARET_LEFT)
                            .min_size(egui::vec2(20.0, 20.0))
                            .frame(false),
                    )
                    .on_hover_text("Collapse panel")
                    .clicked()
                {
                    self.sidebar_collapsed = true;
                    self.persist_layout();
                }
            });
        });
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            self.sidebar_section_list(ui);
        });
    }

    fn sidebar_section_list(&mut self, ui: &mut Ui) {
        for section in SECTIONS {
            let is_active = self.active_section == section.id;

            let frame = if is_active {
                egui::Frame::NONE
                    .fill(theme::colors::SELECTION_BG)
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(6, 4))
                    .stroke(egui::Stroke::new(1.0, theme::colors::ACCENT_DIM))
            } else {
                egui::Frame::NONE
                    .fill(egui::Color32::TRANSPARENT)
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(6, 4))
            };

            frame.show(ui, |ui| {
                let response = ui
                    .horizontal(|ui| {
                        ui.label(
                            RichText::new(section.icon).size(16.0).color(if is_active {
                                theme::colors::ACCENT
                            } else {
                                theme::colors::TEXT_SECONDARY
                            }),
                        );
                        ui.add_space(4.0);

                        let title = responsive::truncate_text(section.title, 28);
                        let text = if is_active {
                            RichText::new(title).strong()
                        } else {
                            RichText::new(title)
                        };
                        ui.add(
                            egui::Label::new(text)
                                .selectable(false)
                                .sense(egui::Sense::click()),
                        )
                    })
                    .inner;

                if response.clicked() {
                    self.select_section(section.id);
                }
                if is_active {
                    response.scroll_to_me(None);
                }
            });
            ui.add_space(2.0);
        }
    }

    /// Collapsed sidebar: icon-only strip with an expand toggle on top.
    pub(super) fn display_collapsed_sidebar(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            if ui
                .add(
                    egui::Button::new(icons::CARET_RIGHT)
                        .min_size(egui::vec2(24.0, 24.0))
                        .frame(false),
                )
                .on_hover_text("Expand panel")
                .clicked()
            {
                self.sidebar_collapsed = false;
                self.persist_layout();
            }

            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            for section in SECTIONS {
                let is_active = self.active_section == section.id;
                let btn = ui
                    .add(
                        egui::Button::new(RichText::new(section.icon).size(16.0))
                            .min_size(egui::vec2(28.0, 28.0))
                            .selected(is_active),
                    )
                    .on_hover_text(section.title);
                if btn.clicked() {
                    self.select_section(section.id);
                }
                ui.add_space(2.0);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DEFAULT_SECTION;

    #[test]
    fn test_active_marker_is_unique() {
        let app = Docpane::new(crate::app::ViewerConfig::default());
        let active: Vec<&str> = SECTIONS
            .iter()
            .filter(|s| app.active_section == s.id)
            .map(|s| s.id)
            .collect();
        assert_eq!(active, vec![DEFAULT_SECTION]);
    }
}
