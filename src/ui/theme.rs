pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, card_frame, code_frame, ACCENT, ACCENT_DIM, BG_DARK, BG_HOVER, BG_LIGHT, BG_MID,
    ERROR, INFO, SELECTION_BG, SUCCESS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, WARNING,
};
