//! Vertex layout definitions for the interleaved mesh buffer.
//!
//! The unifier packs one vertex as position(3), then texcoord(2) if the
//! mesh uses texcoords, then normal(3) if the mesh uses normals. The
//! layout records that channel order once so the emitter can derive
//! strides and byte offsets instead of recomputing them inline.

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Texture coordinates (float2).
    TexCoord0,
    /// Vertex normal (float3).
    Normal,
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> u32 {
        match self {
            Self::Float2 => 8,
            Self::Float3 => 12,
        }
    }

    /// Get the number of f32 components in this format.
    pub fn components(&self) -> u32 {
        match self {
            Self::Float2 => 2,
            Self::Float3 => 3,
        }
    }
}

/// A single attribute within the interleaved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of the attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of the attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within one vertex.
    pub offset: u32,
}

/// Describes the structure of one interleaved vertex.
///
/// Attributes always appear in the fixed channel order position, texcoord,
/// normal; optional channels are simply absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
    stride: u32,
}

impl VertexLayout {
    /// Build the layout for the given channel presence flags.
    ///
    /// Position is always present; texcoord and normal are appended in
    /// that order when requested.
    pub fn for_channels(has_texcoords: bool, has_normals: bool) -> Self {
        let mut attributes = Vec::with_capacity(3);
        let mut offset = 0;

        let mut push = |semantic, format: VertexAttributeFormat| {
            attributes.push(VertexAttribute {
                semantic,
                format,
                offset,
            });
            offset += format.size();
        };

        push(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
        );
        if has_texcoords {
            push(
                VertexAttributeSemantic::TexCoord0,
                VertexAttributeFormat::Float2,
            );
        }
        if has_normals {
            push(
                VertexAttributeSemantic::Normal,
                VertexAttributeFormat::Float3,
            );
        }

        Self {
            attributes,
            stride: offset,
        }
    }

    /// Layout holding only positions.
    pub fn position_only() -> Self {
        Self::for_channels(false, false)
    }

    /// Get all attributes in channel order.
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Find an attribute by semantic.
    pub fn attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    /// Check whether the layout carries the given semantic.
    pub fn has(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attribute(semantic).is_some()
    }

    /// Stride in bytes between consecutive vertices.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of f32 components per vertex.
    pub fn components(&self) -> u32 {
        self.attributes.iter().map(|a| a.format.components()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only_layout() {
        let layout = VertexLayout::position_only();
        assert_eq!(layout.stride(), 12);
        assert_eq!(layout.components(), 3);
        assert!(layout.has(VertexAttributeSemantic::Position));
        assert!(!layout.has(VertexAttributeSemantic::TexCoord0));
        assert!(!layout.has(VertexAttributeSemantic::Normal));
    }

    #[test]
    fn test_full_layout_offsets() {
        let layout = VertexLayout::for_channels(true, true);
        assert_eq!(layout.stride(), 32);
        assert_eq!(layout.components(), 8);

        let position = layout.attribute(VertexAttributeSemantic::Position).unwrap();
        let texcoord = layout
            .attribute(VertexAttributeSemantic::TexCoord0)
            .unwrap();
        let normal = layout.attribute(VertexAttributeSemantic::Normal).unwrap();
        assert_eq!(position.offset, 0);
        assert_eq!(texcoord.offset, 12);
        assert_eq!(normal.offset, 20);
    }

    #[test]
    fn test_normal_without_texcoord_offset() {
        let layout = VertexLayout::for_channels(false, true);
        assert_eq!(layout.stride(), 24);
        let normal = layout.attribute(VertexAttributeSemantic::Normal).unwrap();
        assert_eq!(normal.offset, 12);
    }
}
