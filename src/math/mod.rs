//! Rotation math.
//!
//! A small quaternion algebra used to accumulate drag rotations and to
//! produce the rotation block of the view matrix.

/// Quaternion value type: exp/log maps, Hamilton product, matrix conversion.
pub mod quaternion;

pub use quaternion::Quaternion;
