mod app;
mod config;
mod content_pane;
mod nav;
mod sidebar;
mod top_bar;

pub use app::Docpane;
pub use config::{load_cfg, save_cfg, ViewerConfig};
