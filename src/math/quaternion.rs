use std::ops::Mul;

use super::vector::Vector3;

/// A rotation quaternion `(w, x, y, z)`.
///
/// Angles cross this API in **degrees**, matching the axis-angle contract
/// the renderer consumes. Composition is left-multiplication: applying
/// rotation `r` to an existing orientation `o` is `r * o` (the rightmost
/// operand is applied first).
///
/// `q` and `-q` represent the same rotation; extraction via
/// [`to_axis_angle`](Self::to_axis_angle) is only defined up to that double
/// cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Scalar part.
    pub w: f32,
    /// Vector part, x component.
    pub x: f32,
    /// Vector part, y component.
    pub y: f32,
    /// Vector part, z component.
    pub z: f32,
}

impl Quaternion {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Quaternion for a rotation of `angle_degrees` about `axis`.
    ///
    /// The axis need not be pre-normalized. A zero-length axis has no
    /// defined rotation plane; the choice here is to log a warning and
    /// return [`IDENTITY`](Self::IDENTITY) so a degenerate input can never
    /// corrupt an accumulated orientation.
    #[must_use]
    pub fn from_axis_angle(angle_degrees: f32, axis: Vector3) -> Self {
        let Some(unit) = axis.normalized() else {
            log::warn!("zero-length rotation axis, substituting identity");
            return Self::IDENTITY;
        };
        let half = angle_degrees.to_radians() * 0.5;
        let sin = half.sin();
        Self {
            w: half.cos(),
            x: unit.x * sin,
            y: unit.y * sin,
            z: unit.z * sin,
        }
    }

    /// Squared 4-tuple magnitude.
    fn magnitude_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Rescale to unit magnitude.
    ///
    /// A (near-)zero magnitude has no meaningful direction to preserve;
    /// normalization is a no-op in that case. Every quaternion this crate
    /// produces is already near unit length, so the guard exists only to
    /// keep the operation total.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude_squared().sqrt();
        if mag <= f32::EPSILON {
            return *self;
        }
        Self {
            w: self.w / mag,
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Rotation angle in degrees, canonically in `[0, 360]`.
    ///
    /// The scalar part is clamped to the arccosine domain before
    /// extraction, so accumulated floating-point error can never produce a
    /// domain fault.
    #[must_use]
    pub fn angle(&self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Unit rotation axis.
    ///
    /// At (or numerically indistinguishable from) the identity rotation the
    /// vector part is zero and the axis is undefined; this returns
    /// [`Vector3::Y`] so callers never receive a degenerate direction. The
    /// paired angle is 0° there, so the substitute axis has no visible
    /// effect.
    #[must_use]
    pub fn axis(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
            .normalized()
            .unwrap_or(Vector3::Y)
    }

    /// The equivalent axis-angle pair `(degrees, unit axis)`.
    #[must_use]
    pub fn to_axis_angle(&self) -> (f32, Vector3) {
        (self.angle(), self.axis())
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Hamilton product `self * rhs`: the rotation `rhs` is applied first,
    /// then `self`.
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}
