use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 3-component floating-point vector.
///
/// Equality is exact (derived), not approximate: the camera's axis-selection
/// logic compares incoming axes against the named unit constants, and those
/// constants are never produced by arithmetic that could perturb them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    /// Unit vector along +X.
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    ///
    /// Callers that cannot tolerate a degenerate direction must handle the
    /// `None` case explicitly; nothing in this crate silently divides by a
    /// zero length.
    #[must_use]
    pub fn normalized(&self) -> Option<Vector3> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Vector3::new(self.x / len, self.y / len, self.z / len))
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
