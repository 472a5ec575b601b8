//! Wavefront OBJ parsing.
//!
//! Parses the recognized directive subset of the OBJ grammar (`v`, `vn`,
//! `vt`, `f`, `usemtl`, `mtllib`, `o`, `g`, `s`, comments) and unifies the
//! per-face attribute-index triples into a GPU-ready [`IndexedMesh`]:
//! a flat interleaved `f32` vertex buffer plus a `u16` triangle index
//! buffer, channels packed as position(3), texcoord(2), normal(3).
//!
//! The pipeline runs strictly forward: tokenizer, line-oriented directive
//! parser (which fan-triangulates faces as it reads them), then the vertex
//! unifier. A parse either runs to completion or fails with an [`ObjError`]
//! carrying the offending line; no partial mesh is ever produced.
//!
//! # Example
//!
//! ```
//! use obj2webgl_core::obj::parse_obj;
//!
//! let document = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
//! assert_eq!(document.mesh.triangle_count(), 1);
//! assert_eq!(document.mesh.indices(), &[0, 1, 2]);
//! ```

mod error;
mod parser;
#[cfg(test)]
mod tests;
mod token;
mod unify;

pub use error::ObjError;
pub use token::{Token, TokenKind, Tokenizer};

use crate::mesh::IndexedMesh;

/// A parsed OBJ document: the unified mesh plus directive metadata.
///
/// The metadata fields record operands the grammar accepts but the mesh
/// does not use; they never affect the vertex or index buffers.
#[derive(Debug, Clone)]
pub struct ObjDocument {
    /// The GPU-ready mesh.
    pub mesh: IndexedMesh,
    /// Names from `o` directives, in order of appearance.
    pub objects: Vec<String>,
    /// Names from `g` directives.
    pub groups: Vec<String>,
    /// Material names referenced by `usemtl`.
    pub materials: Vec<String>,
    /// Material library paths from `mtllib`.
    pub material_libs: Vec<String>,
    /// Final state of the `s` smoothing flag. Inert parsed metadata:
    /// no smooth-normal generation is performed.
    pub smooth_shading: bool,
}

/// Parse an OBJ text stream into an [`ObjDocument`].
pub fn parse_obj(input: &str) -> Result<ObjDocument, ObjError> {
    let output = parser::parse_text(input)?;
    let mesh = unify::build_mesh(&output.geometry)?;
    Ok(ObjDocument {
        mesh,
        objects: output.objects,
        groups: output.groups,
        materials: output.materials,
        material_libs: output.material_libs,
        smooth_shading: output.smooth_shading,
    })
}
