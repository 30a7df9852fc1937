//! Spherical-orbit interpolation for view-cube camera transitions.
//!
//! The tween only describes and samples the path; the embedding app drives
//! it with frame deltas and applies each sample to the camera.

/// Camera orbit in spherical coordinates: radius, polar angle `phi` measured
/// from +Y, azimuth `theta` around Y measured from +Z toward +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Spherical coordinates of a direction vector scaled to `radius`.
    pub fn from_direction(dir: glam::Vec3, radius: f32) -> Self {
        let dir = dir.normalize_or_zero();
        Self {
            radius,
            phi: dir.y.clamp(-1.0, 1.0).acos(),
            theta: dir.x.atan2(dir.z),
        }
    }
}

/// In-flight interpolation between two orbits.
pub struct OrbitTween {
    from: Spherical,
    to: Spherical,
    duration: f32,
    elapsed: f32,
}

impl OrbitTween {
    /// `duration` is in seconds; non-positive durations finish immediately.
    pub fn new(from: Spherical, to: Spherical, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by a frame delta and return the eased orbit for this frame.
    /// The final sample is exactly the target orbit.
    pub fn advance(&mut self, dt: f32) -> Spherical {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        if self.finished() {
            return self.to;
        }
        self.sample(self.elapsed / self.duration)
    }

    fn sample(&self, t: f32) -> Spherical {
        let k = ease_in_out_quad(t.clamp(0.0, 1.0));
        Spherical {
            radius: lerp(self.from.radius, self.to.radius, k),
            phi: lerp(self.from.phi, self.to.phi, k),
            theta: lerp(self.from.theta, self.to.theta, k),
        }
    }
}

/// Quadratic ease-in-out, matching the feel of the original transition.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_endpoints_exact() {
        let from = Spherical::new(10.0, 1.0, 0.0);
        let to = Spherical::new(10.0, 0.5, 2.0);
        let mut tween = OrbitTween::new(from, to, 0.5);

        let first = tween.advance(0.0);
        assert_eq!(first, from);

        let last = tween.advance(10.0);
        assert_eq!(last, to);
        assert!(tween.finished());
    }

    #[test]
    fn test_tween_zero_duration_finishes_immediately() {
        let from = Spherical::new(1.0, 1.0, 1.0);
        let to = Spherical::new(2.0, 2.0, 2.0);
        let mut tween = OrbitTween::new(from, to, 0.0);
        assert_eq!(tween.advance(0.016), to);
        assert!(tween.finished());
    }

    #[test]
    fn test_tween_monotonic_theta() {
        let from = Spherical::new(5.0, 1.0, 0.0);
        let to = Spherical::new(5.0, 1.0, 3.0);
        let mut tween = OrbitTween::new(from, to, 1.0);

        let mut prev = f32::MIN;
        for _ in 0..60 {
            let s = tween.advance(1.0 / 60.0);
            assert!(s.theta >= prev);
            prev = s.theta;
        }
    }

    #[test]
    fn test_ease_boundaries() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quad(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spherical_from_direction() {
        let up = Spherical::from_direction(glam::Vec3::Y, 4.0);
        assert!(up.phi.abs() < 1e-6);
        assert_eq!(up.radius, 4.0);

        let front = Spherical::from_direction(glam::Vec3::Z, 1.0);
        assert!((front.phi - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(front.theta.abs() < 1e-6);

        let right = Spherical::from_direction(glam::Vec3::X, 1.0);
        assert!((right.theta - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
