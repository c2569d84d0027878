use crate::paths::*;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

/// Persisted layout state for the sidebar panel.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct PanelLayout {
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub custom_width: Option<f32>,
}

/// Viewer preferences persisted between runs.
///
/// Only window chrome lives here. The active section is deliberately not
/// saved: the viewer always opens on the default section.
#[derive(Serialize, Deserialize, Clone)]
pub struct ViewerConfig {
    #[serde(default)]
    pub sidebar: PanelLayout,
    #[serde(default = "default_zoom")]
    pub zoom_factor: f32,
}

fn default_zoom() -> f32 {
    1.2
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            sidebar: PanelLayout::default(),
            zoom_factor: default_zoom(),
        }
    }
}

pub fn load_cfg() -> ViewerConfig {
    let path = PATH_DOCPANE.join("settings.json");

    if let Ok(file) = File::open(path) {
        if let Ok(config) = serde_json::from_reader::<_, ViewerConfig>(BufReader::new(file)) {
            return config;
        }
    }

    // Return default settings if file doesn't exist or has error
    ViewerConfig::default()
}

pub fn save_cfg(config: &ViewerConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_DOCPANE)?;
    let path = PATH_DOCPANE.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.sidebar.collapsed);
        assert!(config.sidebar.custom_width.is_none());
        assert_eq!(config.zoom_factor, 1.2);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = ViewerConfig::default();
        config.sidebar.collapsed = true;
        config.sidebar.custom_width = Some(240.0);

        let json = serde_json::to_string(&config).unwrap();
        let back: ViewerConfig = serde_json::from_str(&json).unwrap();
        assert!(back.sidebar.collapsed);
        assert_eq!(back.sidebar.custom_width, Some(240.0));
    }
}
