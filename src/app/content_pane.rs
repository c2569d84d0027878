//! Renders the resolved document for the active section.
//!
//! An unknown active section resolves to nothing and the pane stays empty;
//! that state is only reachable by injecting an identifier directly.

use crate::app::Docpane;
use crate::content::{self, Block, CalloutKind, Endpoint, Feature, HttpMethod, ListItem};
use crate::ui::responsive::{self, LayoutMode};
use crate::ui::theme;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::syntax_highlighting::{code_view_ui, CodeTheme};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

impl Docpane {
    pub(super) fn display_content_pane(&mut self, ui: &mut Ui) {
        let doc = match content::resolve(&self.active_section) {
            Some(doc) => doc,
            None => return,
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(doc.title)
                        .size(22.0)
                        .strong()
                        .color(theme::colors::TEXT_PRIMARY),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(doc.intro).color(theme::colors::TEXT_SECONDARY));
                ui.add_space(10.0);

                for (i, block) in doc.blocks.iter().enumerate() {
                    ui.push_id(i, |ui| display_block(ui, block));
                }
                ui.add_space(16.0);
            });
    }
}

fn display_block(ui: &mut Ui, block: &Block) {
    match block {
        Block::Heading(text) => {
            ui.add_space(10.0);
            ui.label(RichText::new(*text).size(17.0).strong());
            ui.add_space(4.0);
        }
        Block::SubHeading(text) => {
            ui.add_space(6.0);
            ui.label(RichText::new(*text).size(14.5).strong());
            ui.add_space(2.0);
        }
        Block::Paragraph(text) => {
            ui.label(RichText::new(*text).color(theme::colors::TEXT_SECONDARY));
            ui.add_space(4.0);
        }
        Block::Step { number, title } => {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                egui::Frame::NONE
                    .fill(theme::colors::ACCENT)
                    .corner_radius(10)
                    .inner_margin(egui::Margin::symmetric(7, 2))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(number.to_string())
                                .strong()
                                .color(theme::colors::BG_DARK),
                        );
                    });
                ui.add_space(4.0);
                ui.label(RichText::new(*title).size(14.5).strong());
            });
            ui.add_space(2.0);
        }
        Block::Code { lang, source } => {
            display_code(ui, lang, source);
        }
        Block::Bullets(items) => {
            for item in *items {
                display_list_item(ui, item);
            }
            ui.add_space(4.0);
        }
        Block::Table { headers, rows } => {
            display_table(ui, headers, rows);
        }
        Block::Callout { kind, text } => {
            display_callout(ui, *kind, text);
        }
        Block::FeatureGrid(features) => {
            display_feature_grid(ui, features);
        }
        Block::Endpoint(endpoint) => {
            display_endpoint(ui, endpoint);
        }
    }
}

fn display_code(ui: &mut Ui, lang: &str, source: &str) {
    ui.add_space(4.0);
    theme::code_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        let code_theme = CodeTheme::from_memory(ui.ctx(), ui.style().as_ref());
        let _ = code_view_ui(ui, &code_theme, source, lang);
    });
    ui.add_space(6.0);
}

fn display_list_item(ui: &mut Ui, item: &ListItem) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("•").color(theme::colors::ACCENT));
        if let Some(lead) = item.lead {
            ui.label(RichText::new(lead).strong());
        }
        ui.label(RichText::new(item.text).color(theme::colors::TEXT_SECONDARY));
    });
}

fn display_table(ui: &mut Ui, headers: &[&str], rows: &[&[&str]]) {
    ui.add_space(4.0);
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        let mut builder = TableBuilder::new(ui).striped(true).vscroll(false);
        for _ in 0..headers.len().saturating_sub(1) {
            builder = builder.column(Column::auto().at_least(110.0));
        }
        builder
            .column(Column::remainder())
            .header(24.0, |mut header| {
                for title in headers {
                    header.col(|ui| {
                        ui.label(RichText::new(*title).strong());
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(20.0, |mut table_row| {
                        for (col, cell) in row.iter().enumerate() {
                            table_row.col(|ui| {
                                // First column is the status code, shown as code
                                if col == 0 {
                                    ui.label(
                                        RichText::new(*cell)
                                            .monospace()
                                            .color(theme::colors::ACCENT),
                                    );
                                } else {
                                    ui.label(
                                        RichText::new(*cell).color(theme::colors::TEXT_SECONDARY),
                                    );
                                }
                            });
                        }
                    });
                }
            });
    });
    ui.add_space(6.0);
}

fn callout_color(kind: CalloutKind) -> Color32 {
    match kind {
        CalloutKind::Highlight => theme::colors::ACCENT,
        CalloutKind::Info => theme::colors::INFO,
        CalloutKind::Success => theme::colors::SUCCESS,
        CalloutKind::Warning => theme::colors::WARNING,
    }
}

fn callout_icon(kind: CalloutKind) -> &'static str {
    match kind {
        CalloutKind::Highlight => icons::LIGHTBULB,
        CalloutKind::Info => icons::INFO,
        CalloutKind::Success => icons::CHECK_CIRCLE,
        CalloutKind::Warning => icons::WARNING,
    }
}

fn display_callout(ui: &mut Ui, kind: CalloutKind, text: &str) {
    let color = callout_color(kind);
    ui.add_space(6.0);
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(4)
        .inner_margin(8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(callout_icon(kind)).size(16.0).color(color));
                ui.label(RichText::new(text).color(theme::colors::TEXT_PRIMARY));
            });
        });
    ui.add_space(6.0);
}

fn display_feature_grid(ui: &mut Ui, features: &[Feature]) {
    let columns = responsive::grid_columns(LayoutMode::from_ui(ui));
    let spacing = 8.0;
    let card_width =
        (ui.available_width() - spacing * (columns as f32 - 1.0)) / columns as f32;

    ui.add_space(6.0);
    for chunk in features.chunks(columns) {
        ui.horizontal(|ui| {
            for feature in chunk {
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(card_width - 22.0); // Account for card margins
                    ui.set_min_height(56.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(feature.icon)
                                    .size(16.0)
                                    .color(theme::colors::ACCENT),
                            );
                            ui.label(RichText::new(feature.title).strong());
                        });
                        ui.label(
                            RichText::new(feature.text)
                                .small()
                                .color(theme::colors::TEXT_MUTED),
                        );
                    });
                });
            }
        });
        ui.add_space(spacing);
    }
}

fn method_color(method: HttpMethod) -> Color32 {
    match method {
        HttpMethod::Get => theme::colors::SUCCESS,
        HttpMethod::Post => theme::colors::INFO,
        HttpMethod::Put => theme::colors::WARNING,
        HttpMethod::Delete => theme::colors::ERROR,
    }
}

fn display_endpoint(ui: &mut Ui, endpoint: &Endpoint) {
    ui.add_space(6.0);
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let color = method_color(endpoint.method);
            egui::Frame::NONE
                .fill(color.gamma_multiply(0.2))
                .stroke(egui::Stroke::new(1.0, color))
                .corner_radius(4)
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(endpoint.method.label())
                            .strong()
                            .monospace()
                            .color(color),
                    );
                });
            ui.add_space(4.0);
            ui.label(RichText::new(endpoint.path).monospace());

            if endpoint.admin_only {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{} Admin Only", icons::LOCK))
                        .small()
                        .color(theme::colors::ERROR),
                );
            }
        });
        ui.add_space(4.0);
        ui.label(RichText::new(endpoint.summary).color(theme::colors::TEXT_SECONDARY));
        ui.add_space(4.0);
        display_code(ui, "json", endpoint.example);
    });
    ui.add_space(4.0);
}
