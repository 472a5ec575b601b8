//! Vertex identity unification.
//!
//! Collapses per-corner attribute-index triples into a minimal set of
//! unique vertices and packs them into the interleaved buffer. Slots are
//! assigned in strict first-occurrence order, so byte-identical input
//! always yields byte-identical buffers.

use std::collections::HashMap;

use crate::mesh::{IndexedMesh, VertexLayout};

use super::error::ObjError;
use super::parser::RawGeometry;

/// Identity of one GPU vertex: the attribute-index triple of a corner.
///
/// Structural equality and hashing; an absent channel is `None`, so
/// corners sharing a position but differing in any present channel get
/// distinct slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey {
    position: u32,
    texcoord: Option<u32>,
    normal: Option<u32>,
}

/// Build the final indexed mesh from triangulated raw geometry.
///
/// A channel is present in the output iff at least one corner referenced
/// it; texcoord or normal directives that no face uses leave no trace in
/// the vertex buffer.
pub(super) fn build_mesh(geometry: &RawGeometry) -> Result<IndexedMesh, ObjError> {
    let has_texcoords = !geometry.texcoord_indices.is_empty();
    let has_normals = !geometry.normal_indices.is_empty();
    let layout = VertexLayout::for_channels(has_texcoords, has_normals);

    let mut slots: HashMap<VertexKey, u16> = HashMap::new();
    let mut vertex_data: Vec<f32> = Vec::new();
    let mut indices: Vec<u16> = Vec::with_capacity(geometry.position_indices.len());

    for (corner, &position) in geometry.position_indices.iter().enumerate() {
        let key = VertexKey {
            position,
            texcoord: has_texcoords.then(|| geometry.texcoord_indices[corner]),
            normal: has_normals.then(|| geometry.normal_indices[corner]),
        };

        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let next = slots.len();
                if next > u16::MAX as usize {
                    return Err(ObjError::IndexOverflow { count: next + 1 });
                }

                let p = geometry.positions[key.position as usize];
                vertex_data.extend_from_slice(&[p.x, p.y, p.z]);
                if let Some(t) = key.texcoord {
                    let t = geometry.texcoords[t as usize];
                    vertex_data.extend_from_slice(&[t.x, t.y]);
                }
                if let Some(n) = key.normal {
                    let n = geometry.normals[n as usize];
                    vertex_data.extend_from_slice(&[n.x, n.y, n.z]);
                }

                let slot = next as u16;
                slots.insert(key, slot);
                slot
            }
        };
        indices.push(slot);
    }

    Ok(IndexedMesh::new(layout, vertex_data, indices))
}
