//! GPU-agnostic mesh data structures.
//!
//! - [`VertexLayout`] - Describes the interleaved vertex attributes
//! - [`IndexedMesh`] - The final mesh artifact (vertex floats, u16 indices)

mod data;
mod layout;

pub use data::IndexedMesh;
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
