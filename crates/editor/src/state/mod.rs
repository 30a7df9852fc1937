pub mod scene_info;
pub mod settings;

pub use scene_info::{FieldValue, SceneField, SceneInfoStore};
pub use settings::EditorSettings;

/// Combined application state
pub struct EditorState {
    pub scene_info: SceneInfoStore,
    pub settings: EditorSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            scene_info: SceneInfoStore::new(),
            settings: EditorSettings::load(),
            show_settings_window: false,
        }
    }
}
