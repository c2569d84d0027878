//! Responsive layout utilities for adapting the content pane to available width
//!
//! Provides breakpoint-based layout decisions for egui UI elements.

use eframe::egui::Ui;

/// Layout mode based on available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// >720px - multi-column feature grids, full tables
    Wide,
    /// 440-720px - two-column grids, compact spacing
    Medium,
    /// <440px - single column, minimal chrome
    Narrow,
}

impl LayoutMode {
    /// Determine layout mode from pixel width
    pub fn from_width(width: f32) -> Self {
        if width > 720.0 {
            LayoutMode::Wide
        } else if width > 440.0 {
            LayoutMode::Medium
        } else {
            LayoutMode::Narrow
        }
    }

    /// Determine layout mode from UI's available width
    pub fn from_ui(ui: &Ui) -> Self {
        Self::from_width(ui.available_width())
    }
}

/// Number of columns a feature grid should use at this width.
pub fn grid_columns(mode: LayoutMode) -> usize {
    match mode {
        LayoutMode::Wide => 3,
        LayoutMode::Medium => 2,
        LayoutMode::Narrow => 1,
    }
}

/// Truncate text to max length with ellipsis if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else if max_len > 3 {
        format!("{}...", &text[..max_len - 3])
    } else {
        text[..max_len].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_breakpoints() {
        assert_eq!(LayoutMode::from_width(900.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(600.0), LayoutMode::Medium);
        assert_eq!(LayoutMode::from_width(300.0), LayoutMode::Narrow);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(LayoutMode::Wide), 3);
        assert_eq!(grid_columns(LayoutMode::Medium), 2);
        assert_eq!(grid_columns(LayoutMode::Narrow), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer string", 10), "a longe...");
    }
}
