//! Error types for OBJ parsing.

use thiserror::Error;

use super::token::TokenKind;

/// Errors that can occur while parsing an OBJ stream.
///
/// All variants are fatal: the parse aborts and no partial mesh is
/// produced. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjError {
    /// The parser expected one token kind and saw another.
    #[error("line {line}: expected {expected}, got {found}")]
    UnexpectedToken {
        /// Line the offending token started on.
        line: u32,
        /// The token kind the grammar required here.
        expected: TokenKind,
        /// The token kind actually seen.
        found: TokenKind,
    },
    /// A number token did not parse as a numeric value.
    #[error("line {line}: malformed number '{text}'")]
    MalformedNumber {
        /// Line the token started on.
        line: u32,
        /// The offending lexeme.
        text: String,
    },
    /// Some corners of a face supply a texcoord or normal index and others do not.
    #[error("line {line}: face corners disagree on {channel} indices")]
    FaceChannelMismatch {
        /// Line of the face directive.
        line: u32,
        /// The channel that is only partially present.
        channel: &'static str,
    },
    /// A face directive listed fewer than three corners.
    #[error("line {line}: face has {corners} corners, at least 3 required")]
    FaceTooSmall {
        /// Line of the face directive.
        line: u32,
        /// Number of corners found.
        corners: usize,
    },
    /// A face referenced an attribute index outside its table.
    #[error("line {line}: index {index} out of range ({count} entries)")]
    IndexOutOfRange {
        /// Line of the face directive.
        line: u32,
        /// The 1-based index as written in the source.
        index: i64,
        /// Number of entries in the referenced table.
        count: usize,
    },
    /// The mesh needs more unique vertices than a u16 index can address.
    #[error("mesh has {count} unique vertices, exceeding the 16-bit index limit")]
    IndexOverflow {
        /// Number of unique vertices required.
        count: usize,
    },
}
