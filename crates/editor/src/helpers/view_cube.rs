//! View-orientation cube: six clickable faces that swing the camera onto a
//! canonical axis while preserving its distance from the target.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use lumina_signals::Listener;

use crate::events::{self, EditorEvent, EditorHub, ViewCubeConfigUpdate};
use crate::i18n;
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::tween::{OrbitTween, Spherical};

/// Fallback orbit radius when the camera sits exactly on its target.
const DEFAULT_DISTANCE: f32 = 10.0;
/// Keeps the polar angle off the exact poles so look-at stays well-defined.
const POLE_EPSILON: f32 = 1e-5;

/// One face of the orientation cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDirection {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl ViewDirection {
    pub const ALL: [ViewDirection; 6] = [
        ViewDirection::Top,
        ViewDirection::Bottom,
        ViewDirection::Front,
        ViewDirection::Back,
        ViewDirection::Left,
        ViewDirection::Right,
    ];

    /// Unit direction from the target toward the camera for this face
    pub fn offset(self) -> Vec3 {
        match self {
            ViewDirection::Top => Vec3::Y,
            ViewDirection::Bottom => Vec3::NEG_Y,
            ViewDirection::Front => Vec3::Z,
            ViewDirection::Back => Vec3::NEG_Z,
            ViewDirection::Left => Vec3::NEG_X,
            ViewDirection::Right => Vec3::X,
        }
    }

    /// Localized face label
    pub fn label(self) -> &'static str {
        match self {
            ViewDirection::Top => i18n::t("cube.top"),
            ViewDirection::Bottom => i18n::t("cube.bottom"),
            ViewDirection::Front => i18n::t("cube.front"),
            ViewDirection::Back => i18n::t("cube.back"),
            ViewDirection::Left => i18n::t("cube.left"),
            ViewDirection::Right => i18n::t("cube.right"),
        }
    }
}

/// View cube state: visibility plus the orbit-transition math
pub struct ViewCube {
    visible: bool,
}

impl ViewCube {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn apply_update(&mut self, update: &ViewCubeConfigUpdate) {
        if let Some(visible) = update.visible {
            self.visible = visible;
        }
    }

    /// Register a hub listener applying view-cube patches.
    pub fn subscribe(cube: &Rc<RefCell<Self>>, hub: &EditorHub) -> Listener<EditorEvent> {
        let cube = Rc::clone(cube);
        let listener: Listener<EditorEvent> = Rc::new(move |event| {
            if let EditorEvent::ViewCubeConfig(update) = event {
                cube.borrow_mut().apply_update(update);
            }
        });
        hub.add(events::VIEW_CUBE_CONFIG_UPDATE, Rc::clone(&listener));
        listener
    }

    /// Build the orbit transition toward a face.
    ///
    /// Distance is preserved (with a fallback when the camera sits on the
    /// target), the polar angle is clamped just short of the poles for the
    /// top/bottom faces, and the azimuth takes the shortest path even after
    /// the camera accumulated full turns.
    pub fn orbit_to(camera: &ArcBallCamera, direction: ViewDirection) -> OrbitTween {
        let current = camera.orbit();
        let radius = if current.radius > 0.0 {
            current.radius
        } else {
            DEFAULT_DISTANCE
        };

        let mut target = Spherical::from_direction(direction.offset(), radius);
        match direction {
            ViewDirection::Top => target.phi = POLE_EPSILON,
            ViewDirection::Bottom => target.phi = std::f32::consts::PI - POLE_EPSILON,
            _ => {}
        }

        // Shortest azimuth path, robust to yaw far outside [-PI, PI].
        let mut delta = (target.theta - current.theta).rem_euclid(std::f32::consts::TAU);
        if delta > std::f32::consts::PI {
            delta -= std::f32::consts::TAU;
        }
        target.theta = current.theta + delta;

        OrbitTween::new(current, target, 0.5)
    }
}

impl Default for ViewCube {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn settle(camera: &mut ArcBallCamera, direction: ViewDirection) {
        let mut tween = ViewCube::orbit_to(camera, direction);
        let orbit = tween.advance(10.0);
        camera.set_orbit(orbit);
    }

    #[test]
    fn test_orbit_to_front() {
        let mut camera = ArcBallCamera::new();
        camera.distance = 8.0;
        settle(&mut camera, ViewDirection::Front);

        let eye = camera.eye_position();
        assert!((eye - Vec3::new(0.0, 0.0, 8.0)).length() < 1e-3);
    }

    #[test]
    fn test_orbit_to_right_preserves_distance() {
        let mut camera = ArcBallCamera::new();
        camera.distance = 3.0;
        settle(&mut camera, ViewDirection::Right);

        assert!((camera.distance - 3.0).abs() < 1e-5);
        let eye = camera.eye_position();
        assert!((eye - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_orbit_to_top_avoids_pole() {
        let mut camera = ArcBallCamera::new();
        settle(&mut camera, ViewDirection::Top);

        // Just short of straight down the Y axis.
        assert!(camera.pitch < FRAC_PI_2);
        assert!(camera.pitch > FRAC_PI_2 - 1e-3);
        let eye = camera.eye_position();
        assert!(eye.y > 0.0);
    }

    #[test]
    fn test_orbit_to_bottom_avoids_pole() {
        let mut camera = ArcBallCamera::new();
        settle(&mut camera, ViewDirection::Bottom);
        assert!(camera.pitch > -FRAC_PI_2);
        assert!(camera.eye_position().y < 0.0);
    }

    #[test]
    fn test_azimuth_takes_shortest_path() {
        let mut camera = ArcBallCamera::new();
        camera.yaw = PI + 0.1;
        camera.pitch = 0.0;

        // Front is theta = 0; from just past the half-turn, continuing
        // forward to a full turn is shorter than rewinding to zero.
        let mut tween = ViewCube::orbit_to(&camera, ViewDirection::Front);
        let target = tween.advance(10.0);
        assert!((target.theta - TAU).abs() < 0.2);

        // Just short of the half-turn, rewinding wins instead.
        camera.yaw = PI - 0.1;
        let mut tween = ViewCube::orbit_to(&camera, ViewDirection::Front);
        let target = tween.advance(10.0);
        assert!(target.theta.abs() < 0.2);
    }

    #[test]
    fn test_azimuth_shortest_path_after_full_turns() {
        let mut camera = ArcBallCamera::new();
        camera.yaw = 3.0 * TAU + 0.3;
        camera.pitch = 0.0;

        let mut tween = ViewCube::orbit_to(&camera, ViewDirection::Front);
        let target = tween.advance(10.0);
        // Lands on a full-turn multiple, at most half a turn away.
        assert!((target.theta - camera.yaw).abs() <= PI + 1e-5);
        assert!((target.theta.rem_euclid(TAU)).min(TAU - target.theta.rem_euclid(TAU)) < 1e-3);
    }

    #[test]
    fn test_zero_distance_falls_back_to_default() {
        let mut camera = ArcBallCamera::new();
        camera.distance = 0.0;
        let mut tween = ViewCube::orbit_to(&camera, ViewDirection::Front);
        let target = tween.advance(10.0);
        assert_eq!(target.radius, DEFAULT_DISTANCE);
    }

    #[test]
    fn test_apply_update_visibility() {
        let mut cube = ViewCube::new();
        cube.apply_update(&ViewCubeConfigUpdate {
            visible: Some(false),
        });
        assert!(!cube.is_visible());
        cube.apply_update(&ViewCubeConfigUpdate { visible: None });
        assert!(!cube.is_visible());
    }
}
