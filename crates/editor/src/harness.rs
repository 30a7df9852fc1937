//! Headless test harness wiring a hub, the scene-info store and a viewport
//! together the way the application does, without a window.

use std::rc::Rc;

use crate::events::EditorHub;
use crate::helpers::{AxesConfig, GridConfig, ViewDirection};
use crate::state::{FieldValue, SceneField, SceneInfoStore};
use crate::viewport::SceneViewport;

/// Headless editor: hub + store + viewport
pub struct TestHarness {
    pub hub: Rc<EditorHub>,
    pub scene_info: SceneInfoStore,
    pub viewport: SceneViewport,
}

impl TestHarness {
    pub fn new() -> Self {
        let hub = Rc::new(EditorHub::new());
        let viewport = SceneViewport::new(Rc::clone(&hub));
        Self {
            hub,
            scene_info: SceneInfoStore::new(),
            viewport,
        }
    }

    /// Assign a scene field through the store, publishing to the hub.
    pub fn set_field(&mut self, field: SceneField, value: FieldValue) {
        self.scene_info.set_field(&self.hub, field, value);
    }

    /// Publish a viewport resize.
    pub fn resize(&self, width: f32, height: f32) {
        self.viewport.notify_resize(width, height);
    }

    /// Start a view-cube transition and run it to completion.
    pub fn orbit_to_settled(&mut self, direction: ViewDirection) {
        self.viewport.orbit_to(direction);
        while self.viewport.advance_tween(0.05) {}
    }

    pub fn grid_config(&self) -> GridConfig {
        self.viewport.grid.borrow().config()
    }

    pub fn axes_config(&self) -> AxesConfig {
        self.viewport.axes.borrow().config()
    }

    pub fn view_cube_visible(&self) -> bool {
        self.viewport.view_cube.borrow().is_visible()
    }

    pub fn camera_aspect(&self) -> f32 {
        self.viewport.camera.borrow().aspect
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_grid_flow() {
        let mut h = TestHarness::new();
        h.set_field(SceneField::GridDivisions, FieldValue::Num(10.0));
        assert_eq!(h.grid_config().divisions, 10);
    }

    #[test]
    fn test_harness_resize_flow() {
        let h = TestHarness::new();
        h.resize(1920.0, 1080.0);
        assert!((h.camera_aspect() - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
