//! Accumulation of per-frame rotation deltas into a stable orientation.
//!
//! Short-lived deltas are simple per-axis Euler totals (easy to accumulate
//! from 2D mouse motion); the long-lived orientation is quaternion-composed,
//! which avoids gimbal lock and drift across many frames. Once per frame the
//! controller folds the delta since the previous frame into the quaternion
//! and re-derives the single axis-angle pair the renderer consumes.

use crate::math::{Quaternion, Vector3};

/// Accumulates mouse-driven rotation deltas into a running quaternion and
/// exposes its per-frame axis-angle decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationController {
    /// Per-axis degree totals as of the last [`resolve`](Self::resolve).
    previous: Vector3,
    /// Per-axis degree totals including this frame's input.
    current: Vector3,
    /// The persistent orientation quaternion.
    orientation: Quaternion,
    resolved_angle: f32,
    resolved_axis: Vector3,
}

impl OrientationController {
    /// Create a controller at the identity orientation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: Vector3::ZERO,
            current: Vector3::ZERO,
            orientation: Quaternion::IDENTITY,
            resolved_angle: 0.0,
            resolved_axis: Vector3::Y,
        }
    }

    /// Add per-axis rotation degrees from one input event to this frame's
    /// totals.
    pub fn rotate_by(&mut self, delta_degrees: Vector3) {
        self.current += delta_degrees;
    }

    /// Fold this frame's rotation delta into the orientation and recompute
    /// the resolved axis-angle pair. Call once at the end of every frame.
    ///
    /// Each non-zero axis component is composed in fixed x, y, z order;
    /// the quaternion is renormalized afterwards so error cannot build up
    /// over long sessions.
    pub fn resolve(&mut self) {
        let delta = self.current - self.previous;

        if delta.x != 0.0 {
            self.orientation =
                Quaternion::from_axis_angle(delta.x, Vector3::X)
                    * self.orientation;
        }
        if delta.y != 0.0 {
            self.orientation =
                Quaternion::from_axis_angle(delta.y, Vector3::Y)
                    * self.orientation;
        }
        if delta.z != 0.0 {
            self.orientation =
                Quaternion::from_axis_angle(delta.z, Vector3::Z)
                    * self.orientation;
        }
        self.orientation = self.orientation.normalized();

        self.previous = self.current;
        let (angle, axis) = self.orientation.to_axis_angle();
        self.resolved_angle = angle;
        self.resolved_axis = axis;
    }

    /// Restore the identity orientation and zero the delta totals.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The accumulated orientation as of the last resolve.
    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Rotation angle in degrees for the renderer, paired with
    /// [`resolved_axis`](Self::resolved_axis).
    #[must_use]
    pub fn resolved_angle(&self) -> f32 {
        self.resolved_angle
    }

    /// Unit rotation axis for the renderer, paired with
    /// [`resolved_angle`](Self::resolved_angle).
    #[must_use]
    pub fn resolved_axis(&self) -> Vector3 {
        self.resolved_axis
    }
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(q: Quaternion) -> f32 {
        (q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z).sqrt()
    }

    #[test]
    fn starts_at_identity() {
        let controller = OrientationController::new();
        assert_eq!(controller.orientation(), Quaternion::IDENTITY);
        assert_eq!(controller.resolved_angle(), 0.0);
        assert_eq!(controller.resolved_axis(), Vector3::Y);
    }

    #[test]
    fn resolve_without_input_is_stable() {
        let mut controller = OrientationController::new();
        controller.rotate_by(Vector3::new(30.0, 0.0, 0.0));
        controller.resolve();
        let snapshot = controller.clone();

        // Idle frames must not move the orientation.
        for _ in 0..10 {
            controller.resolve();
        }
        assert_eq!(controller, snapshot);
    }

    #[test]
    fn resolved_pair_matches_single_rotation() {
        let mut controller = OrientationController::new();
        controller.rotate_by(Vector3::new(0.0, 60.0, 0.0));
        controller.resolve();
        assert!((controller.resolved_angle() - 60.0).abs() < 1e-3);
        assert!((controller.resolved_axis() - Vector3::Y).length() < 1e-4);
    }

    #[test]
    fn orientation_stays_unit_magnitude() {
        let mut controller = OrientationController::new();
        // A long, messy drag session across all axes.
        for i in 0..500 {
            let x = (i % 7) as f32 * 0.37;
            let y = (i % 11) as f32 * -0.23;
            let z = (i % 3) as f32 * 0.11;
            controller.rotate_by(Vector3::new(x, y, z));
            controller.resolve();
            assert!(
                (magnitude(controller.orientation()) - 1.0).abs() < 1e-5,
                "magnitude drifted at frame {i}"
            );
        }
    }

    #[test]
    fn incremental_composition_converges_to_whole() {
        // k frames of θ/k about one axis approximate the single rotation
        // of θ about that axis.
        let theta = 90.0_f32;
        let k = 100;
        let mut controller = OrientationController::new();
        for _ in 0..k {
            controller.rotate_by(Vector3::new(theta / k as f32, 0.0, 0.0));
            controller.resolve();
        }
        assert!((controller.resolved_angle() - theta).abs() < 1e-2);
        assert!((controller.resolved_axis() - Vector3::X).length() < 1e-3);
    }

    #[test]
    fn per_frame_delta_is_relative_to_previous_frame() {
        let mut controller = OrientationController::new();
        controller.rotate_by(Vector3::new(20.0, 0.0, 0.0));
        controller.resolve();
        // New frame: totals advance by another 25°, only the delta is
        // composed.
        controller.rotate_by(Vector3::new(25.0, 0.0, 0.0));
        controller.resolve();
        assert!((controller.resolved_angle() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn reset_reproduces_fresh_state() {
        let mut controller = OrientationController::new();
        for _ in 0..20 {
            controller.rotate_by(Vector3::new(3.0, -1.5, 0.5));
            controller.resolve();
        }
        controller.reset();
        assert_eq!(controller, OrientationController::new());
    }
}
