//! Signal channel names and the payload carried on them.
//!
//! Every channel on the editor hub transports one tagged [`EditorEvent`].
//! Config updates are patches: `None` fields are left untouched, `Some`
//! values are applied verbatim, so an explicit zero size or division count
//! is honored instead of falling back to the previous value.

use serde::{Deserialize, Serialize};

/// Published when the viewport panel changes size.
pub const VIEWPORT_RESIZE: &str = "viewport_resize";
/// Grid helper configuration changed in the UI.
pub const GRID_CONFIG_UPDATE: &str = "grid_config_update";
/// Axes helper configuration changed in the UI.
pub const AXES_CONFIG_UPDATE: &str = "axes_config_update";
/// View-orientation cube configuration changed in the UI.
pub const VIEW_CUBE_CONFIG_UPDATE: &str = "view_cube_config_update";

/// Patch for the grid helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridConfigUpdate {
    pub visible: Option<bool>,
    /// Total grid width, centered on the origin.
    pub size: Option<f32>,
    /// Cell count per direction.
    pub divisions: Option<u32>,
    /// Line color (center lines are drawn at full alpha, the rest dimmed).
    pub color: Option<[u8; 3]>,
}

/// Patch for the axes helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxesConfigUpdate {
    pub visible: Option<bool>,
    /// Axis line length.
    pub size: Option<f32>,
}

/// Patch for the view-orientation cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewCubeConfigUpdate {
    pub visible: Option<bool>,
}

/// Payload dispatched on the editor's signal hub.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    ViewportResize { width: f32, height: f32 },
    GridConfig(GridConfigUpdate),
    AxesConfig(AxesConfigUpdate),
    ViewCubeConfig(ViewCubeConfigUpdate),
}

/// The hub instantiation every editor component shares.
pub type EditorHub = lumina_signals::SignalHub<EditorEvent>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_update_serde_roundtrip() {
        let update = GridConfigUpdate {
            visible: Some(true),
            size: Some(0.0),
            divisions: None,
            color: Some([136, 136, 136]),
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: GridConfigUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
        // Zero survives serialization as an explicit value.
        assert_eq!(back.size, Some(0.0));
    }

    #[test]
    fn test_event_serde_tagged() {
        let event = EditorEvent::ViewportResize {
            width: 800.0,
            height: 600.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ViewportResize"));
    }
}
