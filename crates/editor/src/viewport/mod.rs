//! Viewport state: camera, helper overlays and their hub subscriptions.
//!
//! Painting lives in the binary crate; everything here is headless so the
//! harness and integration tests can drive it without a window.

pub mod camera;
pub mod mesh;
pub mod tween;

use std::cell::RefCell;
use std::rc::Rc;

use lumina_signals::Listener;

use crate::events::{self, EditorEvent, EditorHub};
use crate::helpers::{AxesHelper, GridHelper, ViewCube, ViewDirection};
use camera::ArcBallCamera;
use tween::OrbitTween;

/// Owns the camera and helper managers and wires them to the signal hub.
pub struct SceneViewport {
    hub: Rc<EditorHub>,
    pub camera: Rc<RefCell<ArcBallCamera>>,
    pub grid: Rc<RefCell<GridHelper>>,
    pub axes: Rc<RefCell<AxesHelper>>,
    pub view_cube: Rc<RefCell<ViewCube>>,
    /// Camera orbit transition in flight, if any
    active_tween: Option<OrbitTween>,
    /// Registered listeners, kept for revocation on dispose
    subscriptions: Vec<(&'static str, Listener<EditorEvent>)>,
}

impl SceneViewport {
    pub fn new(hub: Rc<EditorHub>) -> Self {
        let camera = Rc::new(RefCell::new(ArcBallCamera::new()));
        let grid = Rc::new(RefCell::new(GridHelper::new()));
        let axes = Rc::new(RefCell::new(AxesHelper::new()));
        let view_cube = Rc::new(RefCell::new(ViewCube::new()));

        let mut subscriptions: Vec<(&'static str, Listener<EditorEvent>)> = vec![
            (
                events::GRID_CONFIG_UPDATE,
                GridHelper::subscribe(&grid, &hub),
            ),
            (
                events::AXES_CONFIG_UPDATE,
                AxesHelper::subscribe(&axes, &hub),
            ),
            (
                events::VIEW_CUBE_CONFIG_UPDATE,
                ViewCube::subscribe(&view_cube, &hub),
            ),
        ];

        let resize: Listener<EditorEvent> = {
            let camera = Rc::clone(&camera);
            Rc::new(move |event| {
                if let EditorEvent::ViewportResize { width, height } = event {
                    if *height > 0.0 {
                        camera.borrow_mut().set_aspect(width / height);
                    }
                }
            })
        };
        hub.add(events::VIEWPORT_RESIZE, Rc::clone(&resize));
        subscriptions.push((events::VIEWPORT_RESIZE, resize));

        Self {
            hub,
            camera,
            grid,
            axes,
            view_cube,
            active_tween: None,
            subscriptions,
        }
    }

    /// Publish the panel size; listeners (including this viewport's own
    /// camera-aspect update) react synchronously.
    pub fn notify_resize(&self, width: f32, height: f32) {
        self.hub.dispatch(
            events::VIEWPORT_RESIZE,
            &EditorEvent::ViewportResize { width, height },
        );
    }

    /// Start a camera transition toward a view-cube face.
    pub fn orbit_to(&mut self, direction: ViewDirection) {
        tracing::debug!(?direction, "view cube orbit");
        self.active_tween = Some(ViewCube::orbit_to(&self.camera.borrow(), direction));
    }

    /// Advance the in-flight orbit transition; returns whether one is still
    /// running (callers use this to keep requesting frames).
    pub fn advance_tween(&mut self, dt: f32) -> bool {
        let Some(tween) = self.active_tween.as_mut() else {
            return false;
        };
        let orbit = tween.advance(dt);
        self.camera.borrow_mut().set_orbit(orbit);
        if tween.finished() {
            self.active_tween = None;
            return false;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.active_tween.is_some()
    }

    /// Revoke every hub registration and drop helper meshes.
    pub fn dispose(&mut self) {
        for (name, listener) in self.subscriptions.drain(..) {
            self.hub.remove(name, &listener);
        }
        self.active_tween = None;
        self.grid.borrow_mut().dispose();
        self.axes.borrow_mut().dispose();
    }
}

impl Drop for SceneViewport {
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            self.dispose();
        }
    }
}
