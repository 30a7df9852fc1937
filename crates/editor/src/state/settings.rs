//! Application settings

use serde::{Deserialize, Serialize};

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Font size in points
    pub font_size: f32,
    /// Viewport background color RGB
    pub background_color: [u8; 3],
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            background_color: [24, 24, 28],
        }
    }
}

impl EditorSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "lumina", "lumina") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match serde_json::from_str(&json) {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!("ignoring malformed settings file: {e}"),
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "lumina", "lumina") {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_serde_roundtrip() {
        let settings = EditorSettings {
            font_size: 16.0,
            background_color: [10, 20, 30],
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: EditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.font_size, 16.0);
        assert_eq!(back.background_color, [10, 20, 30]);
    }
}
