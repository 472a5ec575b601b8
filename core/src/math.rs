//! Math type aliases.
//!
//! The parser only needs fixed-size float containers for the raw geometry
//! tables; no transform or linear-algebra behavior is used.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;
