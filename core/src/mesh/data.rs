//! The mesh artifact produced by the parser.

use super::layout::{VertexAttributeSemantic, VertexLayout};

/// A GPU-ready indexed triangle mesh.
///
/// Holds the flat interleaved vertex buffer and the triangle index buffer
/// described by a [`VertexLayout`]. Built once by the vertex unifier and
/// immutable afterwards; indices are `u16`, so the mesh never holds more
/// than 65536 unique vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    layout: VertexLayout,
    vertex_data: Vec<f32>,
    indices: Vec<u16>,
}

impl IndexedMesh {
    /// Create a mesh from interleaved vertex data and triangle indices.
    ///
    /// `vertex_data.len()` must be a multiple of the layout's component
    /// count; the unifier guarantees this by construction.
    pub(crate) fn new(layout: VertexLayout, vertex_data: Vec<f32>, indices: Vec<u16>) -> Self {
        debug_assert_eq!(vertex_data.len() % layout.components() as usize, 0);
        Self {
            layout,
            vertex_data,
            indices,
        }
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Get the interleaved vertex buffer.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    /// Get the triangle index buffer.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Get the number of unique vertices.
    pub fn vertex_count(&self) -> u32 {
        let components = self.layout.components();
        if components == 0 {
            return 0;
        }
        self.vertex_data.len() as u32 / components
    }

    /// Get the number of indices (one per triangle corner).
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Check whether vertices carry a texcoord channel.
    pub fn has_texcoords(&self) -> bool {
        self.layout.has(VertexAttributeSemantic::TexCoord0)
    }

    /// Check whether vertices carry a normal channel.
    pub fn has_normals(&self) -> bool {
        self.layout.has(VertexAttributeSemantic::Normal)
    }

    /// Stride in bytes between consecutive vertices.
    pub fn stride_bytes(&self) -> u32 {
        self.layout.stride()
    }

    /// Get the vertex buffer as raw bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }

    /// Get the index buffer as raw bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
