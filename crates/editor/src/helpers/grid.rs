//! Grid helper manager.
//!
//! Owns the grid overlay configuration and its line mesh. Line meshes are
//! immutable once built, so size/division/color changes rebuild the mesh.

use std::cell::RefCell;
use std::rc::Rc;

use lumina_signals::Listener;
use serde::{Deserialize, Serialize};

use crate::events::{self, EditorEvent, EditorHub, GridConfigUpdate};
use crate::viewport::mesh::{self, LineMeshData};

/// Grid overlay configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Show grid
    pub visible: bool,
    /// Total grid width, centered on the origin
    pub size: f32,
    /// Cell count per direction
    pub divisions: u32,
    /// Grid line color
    pub color: [u8; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            visible: true,
            size: 100.0,
            divisions: 100,
            color: [136, 136, 136],
        }
    }
}

/// Manages the grid overlay's configuration and rebuilds its mesh on change
pub struct GridHelper {
    config: GridConfig,
    lines: Option<LineMeshData>,
}

impl GridHelper {
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    pub fn with_config(config: GridConfig) -> Self {
        let mut helper = Self {
            config,
            lines: None,
        };
        if config.visible {
            helper.rebuild();
        }
        helper
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn is_visible(&self) -> bool {
        self.config.visible
    }

    /// Current line mesh; `None` while hidden or disposed.
    pub fn lines(&self) -> Option<&LineMeshData> {
        self.lines.as_ref()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.config.visible = visible;
        if visible {
            self.rebuild();
        } else {
            self.lines = None;
        }
    }

    /// Update extent and density. Zero is an explicit, valid value and
    /// produces an empty mesh rather than falling back to the old size.
    pub fn update_size(&mut self, size: f32, divisions: u32) {
        self.config.size = size;
        self.config.divisions = divisions;
        if self.config.visible {
            self.rebuild();
        }
    }

    pub fn update_color(&mut self, color: [u8; 3]) {
        self.config.color = color;
        if self.config.visible {
            self.rebuild();
        }
    }

    /// Apply a configuration patch, rebuilding only when a field changed.
    pub fn apply_update(&mut self, update: &GridConfigUpdate) {
        let visible_changed = update.visible.is_some_and(|v| v != self.config.visible);
        let color_changed = update.color.is_some_and(|c| c != self.config.color);
        let size_changed = update.size.is_some_and(|s| s != self.config.size)
            || update.divisions.is_some_and(|d| d != self.config.divisions);

        if size_changed {
            self.update_size(
                update.size.unwrap_or(self.config.size),
                update.divisions.unwrap_or(self.config.divisions),
            );
        }
        if color_changed {
            self.update_color(update.color.unwrap_or(self.config.color));
        }
        if visible_changed {
            self.set_visible(update.visible.unwrap_or(self.config.visible));
        }
    }

    /// Drop the mesh and leave the helper inert.
    pub fn dispose(&mut self) {
        self.lines = None;
    }

    /// Register a hub listener applying grid patches to this helper.
    /// Returns the listener handle so the caller can revoke it later.
    pub fn subscribe(helper: &Rc<RefCell<Self>>, hub: &EditorHub) -> Listener<EditorEvent> {
        let helper = Rc::clone(helper);
        let listener: Listener<EditorEvent> = Rc::new(move |event| {
            if let EditorEvent::GridConfig(update) = event {
                helper.borrow_mut().apply_update(update);
            }
        });
        hub.add(events::GRID_CONFIG_UPDATE, Rc::clone(&listener));
        listener
    }

    fn rebuild(&mut self) {
        self.lines = Some(mesh::grid(
            self.config.size,
            self.config.divisions,
            self.config.color,
        ));
    }
}

impl Default for GridHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_mesh_when_visible() {
        let helper = GridHelper::new();
        assert!(helper.lines().is_some());
    }

    #[test]
    fn test_hidden_helper_has_no_mesh() {
        let mut helper = GridHelper::new();
        helper.set_visible(false);
        assert!(helper.lines().is_none());

        helper.set_visible(true);
        assert!(helper.lines().is_some());
    }

    #[test]
    fn test_update_size_rebuilds() {
        let mut helper = GridHelper::new();
        let before = helper.lines().unwrap().segment_count();
        helper.update_size(100.0, 4);
        let after = helper.lines().unwrap().segment_count();
        assert_ne!(before, after);
        assert_eq!(after, 10);
    }

    #[test]
    fn test_apply_update_zero_size_is_explicit() {
        let mut helper = GridHelper::new();
        helper.apply_update(&GridConfigUpdate {
            size: Some(0.0),
            ..Default::default()
        });
        assert_eq!(helper.config().size, 0.0);
        // Zero extent means an empty mesh, not the previous grid.
        assert_eq!(helper.lines().unwrap().vertex_count(), 0);
    }

    #[test]
    fn test_apply_update_while_hidden_keeps_config() {
        let mut helper = GridHelper::new();
        helper.set_visible(false);
        helper.apply_update(&GridConfigUpdate {
            size: Some(40.0),
            divisions: Some(8),
            ..Default::default()
        });
        assert!(helper.lines().is_none());

        // Config survived; becoming visible builds to the new values.
        helper.set_visible(true);
        assert_eq!(helper.config().size, 40.0);
        assert_eq!(helper.lines().unwrap().segment_count(), 18);
    }

    #[test]
    fn test_apply_update_unchanged_fields_noop() {
        let mut helper = GridHelper::new();
        let config = helper.config();
        helper.apply_update(&GridConfigUpdate {
            visible: Some(config.visible),
            size: Some(config.size),
            divisions: Some(config.divisions),
            color: Some(config.color),
        });
        assert_eq!(helper.config(), config);
    }
}
