// Core app structure and main update loop

use super::config::{save_cfg, ViewerConfig};
use super::nav;
use crate::registry::DEFAULT_SECTION;
use crate::ui::theme;

use eframe::egui;

pub struct Docpane {
    pub options: ViewerConfig,

    /// Identifier of the section currently shown in the content pane.
    /// The only piece of mutable view state in the application.
    pub active_section: String,

    // Panel collapse/resize state
    pub sidebar_collapsed: bool,
    pub sidebar_width: f32,
}

impl Docpane {
    pub fn new(options: ViewerConfig) -> Self {
        let sidebar_collapsed = options.sidebar.collapsed;
        let sidebar_width = options.sidebar.custom_width.unwrap_or(220.0);

        Self {
            options,
            active_section: DEFAULT_SECTION.to_string(),
            sidebar_collapsed,
            sidebar_width,
        }
    }

    /// Single entry point for selection changes, from clicks and key presses.
    /// Re-selecting the active section leaves state untouched.
    pub fn select_section(&mut self, id: &str) {
        if self.active_section != id {
            self.active_section = id.to_string();
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (up, down) = ctx.input(|input| {
            (
                input.key_pressed(egui::Key::ArrowUp),
                input.key_pressed(egui::Key::ArrowDown),
            )
        });
        if up {
            let next = nav::step_selection(&self.active_section, -1);
            self.select_section(next);
        }
        if down {
            let next = nav::step_selection(&self.active_section, 1);
            self.select_section(next);
        }
    }

    /// Write the current panel layout back into the persisted config.
    pub fn persist_layout(&mut self) {
        self.options.sidebar.collapsed = self.sidebar_collapsed;
        self.options.sidebar.custom_width = Some(self.sidebar_width);
        if let Err(e) = save_cfg(&self.options) {
            eprintln!("[docpane] Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for Docpane {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Paint full-screen background to fill any gaps between panels
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, theme::colors::BG_DARK);

        self.handle_keys(ctx);

        egui::TopBottomPanel::top("header_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_MID)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        // Left panel - section navigation (collapsible/resizable)
        let collapsed = self.sidebar_collapsed;
        let (width, width_range) = if collapsed {
            (36.0, 36.0..=36.0)
        } else {
            (self.sidebar_width, 160.0..=320.0)
        };

        egui::SidePanel::left("sections_panel")
            .resizable(!collapsed)
            .default_width(width)
            .width_range(width_range)
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_MID)
                    .inner_margin(if collapsed {
                        egui::Margin::symmetric(4, 8)
                    } else {
                        egui::Margin::same(8)
                    })
                    .stroke(egui::Stroke::new(1.0, theme::colors::BG_LIGHT)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                if collapsed {
                    self.display_collapsed_sidebar(ui);
                } else {
                    // Track width changes for persistence
                    let panel_width = ui.available_width() + 16.0; // Account for margins
                    if (panel_width - self.sidebar_width).abs() > 2.0 {
                        self.sidebar_width = panel_width;
                    }
                    self.display_sidebar(ui);
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_DARK)
                    .inner_margin(egui::Margin {
                        left: 16,
                        right: 16,
                        top: 8,
                        bottom: 8,
                    }),
            )
            .show(ctx, |ui| {
                self.display_content_pane(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_layout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn app() -> Docpane {
        Docpane::new(ViewerConfig::default())
    }

    #[test]
    fn test_initial_selection_is_overview() {
        let app = app();
        assert_eq!(app.active_section, "overview");
        let doc = content::resolve(&app.active_section).unwrap();
        assert_eq!(doc.title, "Project Overview");
    }

    #[test]
    fn test_select_switches_content() {
        let mut app = app();
        app.select_section("jwt");
        assert_eq!(app.active_section, "jwt");
        let doc = content::resolve(&app.active_section).unwrap();
        assert_eq!(doc.title, "JWT Authentication");
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut app = app();
        app.select_section("summary");
        let first = app.active_section.clone();
        app.select_section("summary");
        assert_eq!(app.active_section, first);
        assert!(std::ptr::eq(
            content::resolve(&app.active_section).unwrap(),
            content::resolve(&first).unwrap(),
        ));
    }

    #[test]
    fn test_injected_unknown_id_renders_nothing() {
        let mut app = app();
        // The UI can't produce this; simulate direct state injection
        app.active_section = "nonexistent".to_string();
        assert!(content::resolve(&app.active_section).is_none());
    }
}
