//! Application settings

use serde::{Deserialize, Serialize};

/// Grid and snapping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show grid lines
    pub visible: bool,
    /// Grid cell size in world units
    pub size: f32,
}

impl GridSettings {
    /// Selectable grid sizes for the toolbar
    pub fn size_options() -> &'static [f32] {
        &[10.0, 25.0, 50.0, 100.0]
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 50.0,
        }
    }
}

/// Viewport colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Grid line color RGB
    pub grid_color: [u8; 3],
    /// Selection ring color RGB
    pub selection_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [12, 16, 34],
            grid_color: [31, 36, 80],
            selection_color: [91, 124, 250],
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Grid settings
    pub grid: GridSettings,
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from the config file, or defaults if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "planar", "planar") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to the config file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "planar", "planar") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}
