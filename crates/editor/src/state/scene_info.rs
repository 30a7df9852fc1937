//! Scene information store.
//!
//! Holds the user-facing scene properties. Field assignment goes through
//! [`SceneInfoStore::set_field`], which publishes the full configuration of
//! the affected helper on its hub channel — subscribers receive explicit
//! values for every field, so a legitimate zero is never coerced away.

use crate::events::{
    self, AxesConfigUpdate, EditorEvent, EditorHub, GridConfigUpdate, ViewCubeConfigUpdate,
};
use crate::helpers::{AxesConfig, GridConfig};

/// User-editable scene fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneField {
    Name,
    Desc,
    GridVisible,
    GridSize,
    GridDivisions,
    GridColor,
    AxesVisible,
    AxesSize,
    ViewCubeVisible,
}

/// Value assigned to a scene field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
    Num(f32),
    Color([u8; 3]),
}

/// Scene metadata plus helper configuration, as shown in the properties panel
pub struct SceneInfoStore {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub grid_visible: bool,
    pub grid_size: f32,
    pub grid_divisions: u32,
    pub grid_color: [u8; 3],
    pub axes_visible: bool,
    pub axes_size: f32,
    pub view_cube_visible: bool,
}

impl SceneInfoStore {
    pub fn new() -> Self {
        let grid = GridConfig::default();
        let axes = AxesConfig::default();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            desc: String::new(),
            grid_visible: grid.visible,
            grid_size: grid.size,
            grid_divisions: grid.divisions,
            grid_color: grid.color,
            axes_visible: axes.visible,
            axes_size: axes.size,
            view_cube_visible: true,
        }
    }

    /// Assign a field and notify the helper it belongs to. A value of the
    /// wrong type is logged and ignored.
    pub fn set_field(&mut self, hub: &EditorHub, field: SceneField, value: FieldValue) {
        use FieldValue as V;
        use SceneField as F;

        match (field, value) {
            (F::Name, V::Str(s)) => self.name = s,
            (F::Desc, V::Str(s)) => self.desc = s,
            (F::GridVisible, V::Bool(b)) => self.grid_visible = b,
            (F::GridSize, V::Num(n)) => self.grid_size = n,
            (F::GridDivisions, V::Num(n)) => self.grid_divisions = n.max(0.0).round() as u32,
            (F::GridColor, V::Color(c)) => self.grid_color = c,
            (F::AxesVisible, V::Bool(b)) => self.axes_visible = b,
            (F::AxesSize, V::Num(n)) => self.axes_size = n,
            (F::ViewCubeVisible, V::Bool(b)) => self.view_cube_visible = b,
            (field, value) => {
                tracing::warn!(?field, ?value, "scene field/value type mismatch, ignored");
                return;
            }
        }

        match field {
            F::GridVisible | F::GridSize | F::GridDivisions | F::GridColor => {
                self.publish_grid(hub)
            }
            F::AxesVisible | F::AxesSize => self.publish_axes(hub),
            F::ViewCubeVisible => self.publish_view_cube(hub),
            F::Name | F::Desc => {}
        }
    }

    /// Current grid configuration with every field explicit.
    pub fn grid_update(&self) -> GridConfigUpdate {
        GridConfigUpdate {
            visible: Some(self.grid_visible),
            size: Some(self.grid_size),
            divisions: Some(self.grid_divisions),
            color: Some(self.grid_color),
        }
    }

    pub fn axes_update(&self) -> AxesConfigUpdate {
        AxesConfigUpdate {
            visible: Some(self.axes_visible),
            size: Some(self.axes_size),
        }
    }

    pub fn view_cube_update(&self) -> ViewCubeConfigUpdate {
        ViewCubeConfigUpdate {
            visible: Some(self.view_cube_visible),
        }
    }

    fn publish_grid(&self, hub: &EditorHub) {
        hub.dispatch(
            events::GRID_CONFIG_UPDATE,
            &EditorEvent::GridConfig(self.grid_update()),
        );
    }

    fn publish_axes(&self, hub: &EditorHub) {
        hub.dispatch(
            events::AXES_CONFIG_UPDATE,
            &EditorEvent::AxesConfig(self.axes_update()),
        );
    }

    fn publish_view_cube(&self, hub: &EditorHub) {
        hub.dispatch(
            events::VIEW_CUBE_CONFIG_UPDATE,
            &EditorEvent::ViewCubeConfig(self.view_cube_update()),
        );
    }
}

impl Default for SceneInfoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capture_events(hub: &EditorHub, channel: &str) -> Rc<RefCell<Vec<EditorEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        hub.add(channel, Rc::new(move |event: &EditorEvent| {
            sink.borrow_mut().push(*event);
        }));
        seen
    }

    #[test]
    fn test_grid_field_publishes_full_config() {
        let hub = EditorHub::new();
        let seen = capture_events(&hub, events::GRID_CONFIG_UPDATE);
        let mut store = SceneInfoStore::new();

        store.set_field(&hub, SceneField::GridSize, FieldValue::Num(40.0));

        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            EditorEvent::GridConfig(update) => {
                assert_eq!(update.size, Some(40.0));
                // Untouched fields still travel as explicit values.
                assert_eq!(update.visible, Some(true));
                assert_eq!(update.divisions, Some(100));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_zero_size_is_published_verbatim() {
        let hub = EditorHub::new();
        let seen = capture_events(&hub, events::GRID_CONFIG_UPDATE);
        let mut store = SceneInfoStore::new();

        store.set_field(&hub, SceneField::GridSize, FieldValue::Num(0.0));

        let events = seen.borrow();
        match &events[0] {
            EditorEvent::GridConfig(update) => assert_eq!(update.size, Some(0.0)),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_name_field_does_not_publish() {
        let hub = EditorHub::new();
        let grid_seen = capture_events(&hub, events::GRID_CONFIG_UPDATE);
        let mut store = SceneInfoStore::new();

        store.set_field(&hub, SceneField::Name, FieldValue::Str("Demo".into()));
        assert_eq!(store.name, "Demo");
        assert!(grid_seen.borrow().is_empty());
    }

    #[test]
    fn test_type_mismatch_is_ignored() {
        let hub = EditorHub::new();
        let seen = capture_events(&hub, events::GRID_CONFIG_UPDATE);
        let mut store = SceneInfoStore::new();

        store.set_field(&hub, SceneField::GridSize, FieldValue::Bool(true));
        assert_eq!(store.grid_size, GridConfig::default().size);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_axes_field_publishes_axes_channel() {
        let hub = EditorHub::new();
        let axes_seen = capture_events(&hub, events::AXES_CONFIG_UPDATE);
        let mut store = SceneInfoStore::new();

        store.set_field(&hub, SceneField::AxesVisible, FieldValue::Bool(false));
        let events = axes_seen.borrow();
        match &events[0] {
            EditorEvent::AxesConfig(update) => assert_eq!(update.visible, Some(false)),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_divisions_rounded_from_num() {
        let hub = EditorHub::new();
        let mut store = SceneInfoStore::new();
        store.set_field(&hub, SceneField::GridDivisions, FieldValue::Num(12.6));
        assert_eq!(store.grid_divisions, 13);
    }
}
