//! Axes helper manager: the X/Y/Z axis indicator lines.

use std::cell::RefCell;
use std::rc::Rc;

use lumina_signals::Listener;
use serde::{Deserialize, Serialize};

use crate::events::{self, AxesConfigUpdate, EditorEvent, EditorHub};
use crate::viewport::mesh::{self, LineMeshData};

/// Axes overlay configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Show axes
    pub visible: bool,
    /// Axis line length
    pub size: f32,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            visible: true,
            size: 5.0,
        }
    }
}

/// Manages the axes overlay's configuration and its line mesh
pub struct AxesHelper {
    config: AxesConfig,
    lines: Option<LineMeshData>,
}

impl AxesHelper {
    pub fn new() -> Self {
        Self::with_config(AxesConfig::default())
    }

    pub fn with_config(config: AxesConfig) -> Self {
        let mut helper = Self {
            config,
            lines: None,
        };
        if config.visible {
            helper.rebuild();
        }
        helper
    }

    pub fn config(&self) -> AxesConfig {
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

    /// Zero is a valid explicit length.
    pub fn update_size(&mut self, size: f32) {
        self.config.size = size;
        if self.config.visible {
            self.rebuild();
        }
    }

    /// Apply a configuration patch, rebuilding only when a field changed.
    pub fn apply_update(&mut self, update: &AxesConfigUpdate) {
        let visible_changed = update.visible.is_some_and(|v| v != self.config.visible);
        let size_changed = update.size.is_some_and(|s| s != self.config.size);

        if size_changed {
            self.update_size(update.size.unwrap_or(self.config.size));
        }
        if visible_changed {
            self.set_visible(update.visible.unwrap_or(self.config.visible));
        }
    }

    pub fn dispose(&mut self) {
        self.lines = None;
    }

    /// Register a hub listener applying axes patches to this helper.
    pub fn subscribe(helper: &Rc<RefCell<Self>>, hub: &EditorHub) -> Listener<EditorEvent> {
        let helper = Rc::clone(helper);
        let listener: Listener<EditorEvent> = Rc::new(move |event| {
            if let EditorEvent::AxesConfig(update) = event {
                helper.borrow_mut().apply_update(update);
            }
        });
        hub.add(events::AXES_CONFIG_UPDATE, Rc::clone(&listener));
        listener
    }

    fn rebuild(&mut self) {
        self.lines = Some(mesh::axes(self.config.size));
    }
}

impl Default for AxesHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_cycle() {
        let mut helper = AxesHelper::new();
        assert!(helper.lines().is_some());
        helper.set_visible(false);
        assert!(helper.lines().is_none());
        helper.set_visible(true);
        assert_eq!(helper.lines().unwrap().segment_count(), 3);
    }

    #[test]
    fn test_apply_update_size() {
        let mut helper = AxesHelper::new();
        helper.apply_update(&AxesConfigUpdate {
            visible: None,
            size: Some(12.0),
        });
        assert_eq!(helper.config().size, 12.0);
        let tip = helper.lines().unwrap().segments().next().unwrap().1;
        assert_eq!(tip, [12.0, 0.0, 0.0]);
    }

    #[test]
    fn test_apply_update_zero_size_is_explicit() {
        let mut helper = AxesHelper::new();
        helper.apply_update(&AxesConfigUpdate {
            visible: None,
            size: Some(0.0),
        });
        assert_eq!(helper.config().size, 0.0);
    }
}
