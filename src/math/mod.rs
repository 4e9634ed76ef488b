//! Minimal 3D math for orientation accumulation.
//!
//! The viewer keeps its own [`Vector3`] and [`Quaternion`] types rather than
//! exposing a math crate in its public API: rotation angles are carried in
//! degrees end to end (matching the renderer-facing axis-angle contract),
//! and axis-identity checks rely on exact equality against the named unit
//! constants. Conversions to [`glam`] types are provided for matrix
//! construction.

/// Unit quaternion with axis-angle construction and extraction.
pub mod quaternion;
/// 3-component vector with named unit-axis constants.
pub mod vector;

pub use quaternion::Quaternion;
pub use vector::Vector3;
