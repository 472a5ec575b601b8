//! Line-oriented directive parser and fan triangulator.
//!
//! The parser dispatches on the leading token of each line, fills the
//! append-only raw geometry tables, and triangulates faces into the flat
//! corner-index lists the unifier consumes. Unrecognized directives are
//! discarded silently; every recognized directive must be followed by an
//! end-of-line (or end-of-file) token.

use crate::math::{Vec2, Vec3, Vec4};

use super::error::ObjError;
use super::token::{Token, TokenKind, Tokenizer};

/// Raw geometry accumulated during one parse invocation.
///
/// Tables are append-only and hold values in directive order; indices are
/// 0-based (the source text is 1-based). The three corner-index lists are
/// parallel: if `texcoord_indices` is non-empty it has one entry per
/// triangle corner, and likewise for `normal_indices`.
#[derive(Debug, Default)]
pub(super) struct RawGeometry {
    pub positions: Vec<Vec4>,
    pub normals: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub position_indices: Vec<u32>,
    pub texcoord_indices: Vec<u32>,
    pub normal_indices: Vec<u32>,
}

/// Everything a successful parse produces: geometry plus directive metadata.
#[derive(Debug, Default)]
pub(super) struct ParseOutput {
    pub geometry: RawGeometry,
    pub objects: Vec<String>,
    pub groups: Vec<String>,
    pub materials: Vec<String>,
    pub material_libs: Vec<String>,
    pub smooth_shading: bool,
}

/// Parse the recognized OBJ directive subset from `input`.
pub(super) fn parse_text(input: &str) -> Result<ParseOutput, ObjError> {
    let mut parser = Parser::new(input);
    parser.parse()?;
    Ok(parser.output)
}

struct Parser<'a> {
    tokens: Tokenizer<'a>,
    current: Token,
    output: ParseOutput,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        let mut tokens = Tokenizer::new(input);
        let current = tokens.next_token();
        Self {
            tokens,
            current,
            output: ParseOutput::default(),
        }
    }

    fn advance(&mut self) {
        self.current = self.tokens.next_token();
    }

    fn unexpected(&self, expected: TokenKind) -> ObjError {
        ObjError::UnexpectedToken {
            line: self.current.line,
            expected,
            found: self.current.kind,
        }
    }

    /// Take the current number token's lexeme and line, then advance.
    fn expect_number(&mut self) -> Result<(String, u32), ObjError> {
        if self.current.kind != TokenKind::Number {
            return Err(self.unexpected(TokenKind::Number));
        }
        let line = self.current.line;
        let text = std::mem::take(&mut self.current.text);
        self.advance();
        Ok((text, line))
    }

    fn expect_number_f32(&mut self) -> Result<f32, ObjError> {
        let (text, line) = self.expect_number()?;
        parse_f32(&text, line)
    }

    fn accept_number_f32(&mut self) -> Result<Option<f32>, ObjError> {
        if self.current.kind == TokenKind::Number {
            Ok(Some(self.expect_number_f32()?))
        } else {
            Ok(None)
        }
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Read a free-text operand and record it via `record`.
    ///
    /// The dispatched keyword is the current token; the operand is read
    /// straight from the character stream, bypassing tokenization.
    fn parse_name(&mut self, record: impl FnOnce(&mut ParseOutput, String)) {
        let operand = self.tokens.rest_of_line();
        record(&mut self.output, operand.text.trim().to_string());
        self.advance();
    }

    /// Silently discard tokens through the end of the current line.
    fn skip_line(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::EndOfLine | TokenKind::EndOfFile
        ) {
            self.advance();
        }
    }

    fn parse(&mut self) -> Result<(), ObjError> {
        loop {
            match self.current.kind {
                TokenKind::EndOfFile => return Ok(()),
                TokenKind::EndOfLine => {
                    self.advance();
                    continue;
                }
                TokenKind::Comment => self.advance(),
                TokenKind::Vertex => self.parse_vertex()?,
                TokenKind::Normal => self.parse_normal()?,
                TokenKind::TexCoord => self.parse_texcoord()?,
                TokenKind::Face => self.parse_face()?,
                TokenKind::UseMtl => self.parse_name(|out, name| out.materials.push(name)),
                TokenKind::MtlLib => self.parse_name(|out, path| out.material_libs.push(path)),
                TokenKind::Object => self.parse_name(|out, name| out.objects.push(name)),
                TokenKind::Group => self.parse_name(|out, name| out.groups.push(name)),
                TokenKind::Shade => self.parse_shade()?,
                // Unrecognized directive: intentional leniency, no report.
                _ => self.skip_line(),
            }

            match self.current.kind {
                TokenKind::EndOfFile => return Ok(()),
                TokenKind::EndOfLine => self.advance(),
                _ => return Err(self.unexpected(TokenKind::EndOfLine)),
            }
        }
    }

    /// `v x y z [w]` — w defaults to 0 when absent, matching the source
    /// grammar this parser reproduces (not the usual homogeneous 1).
    fn parse_vertex(&mut self) -> Result<(), ObjError> {
        self.advance();
        let x = self.expect_number_f32()?;
        let y = self.expect_number_f32()?;
        let z = self.expect_number_f32()?;
        let w = self.accept_number_f32()?.unwrap_or(0.0);
        self.output.geometry.positions.push(Vec4::new(x, y, z, w));
        Ok(())
    }

    /// `vn x y z`
    fn parse_normal(&mut self) -> Result<(), ObjError> {
        self.advance();
        let x = self.expect_number_f32()?;
        let y = self.expect_number_f32()?;
        let z = self.expect_number_f32()?;
        self.output.geometry.normals.push(Vec3::new(x, y, z));
        Ok(())
    }

    /// `vt u [v]` — v defaults to 0.
    fn parse_texcoord(&mut self) -> Result<(), ObjError> {
        self.advance();
        let u = self.expect_number_f32()?;
        let v = self.accept_number_f32()?.unwrap_or(0.0);
        self.output.geometry.texcoords.push(Vec2::new(u, v));
        Ok(())
    }

    /// `f v[/t][/n] ...` — reads corner references, validates channel
    /// uniformity, and fan-triangulates from the first corner.
    fn parse_face(&mut self) -> Result<(), ObjError> {
        let line = self.current.line;
        self.advance();

        let mut v_indices: Vec<u32> = Vec::new();
        let mut t_indices: Vec<u32> = Vec::new();
        let mut n_indices: Vec<u32> = Vec::new();

        while self.current.kind == TokenKind::Number {
            let (text, corner_line) = self.expect_number()?;
            v_indices.push(face_index(
                &text,
                corner_line,
                self.output.geometry.positions.len(),
            )?);

            if self.accept(TokenKind::IndexSeparator) {
                if self.current.kind == TokenKind::Number {
                    let (text, corner_line) = self.expect_number()?;
                    t_indices.push(face_index(
                        &text,
                        corner_line,
                        self.output.geometry.texcoords.len(),
                    )?);
                }
                if self.accept(TokenKind::IndexSeparator) {
                    if self.current.kind == TokenKind::Number {
                        let (text, corner_line) = self.expect_number()?;
                        n_indices.push(face_index(
                            &text,
                            corner_line,
                            self.output.geometry.normals.len(),
                        )?);
                    }
                }
            }
        }

        if v_indices.len() < 3 {
            return Err(ObjError::FaceTooSmall {
                line,
                corners: v_indices.len(),
            });
        }
        if !t_indices.is_empty() && t_indices.len() != v_indices.len() {
            return Err(ObjError::FaceChannelMismatch {
                line,
                channel: "texcoord",
            });
        }
        if !n_indices.is_empty() && n_indices.len() != v_indices.len() {
            return Err(ObjError::FaceChannelMismatch {
                line,
                channel: "normal",
            });
        }

        // Fan triangulation: (c0, ci, ci+1) for i in 1..k-1. Each emitted
        // corner copies whichever channels the face supplied.
        let geometry = &mut self.output.geometry;
        for i in 1..v_indices.len() - 1 {
            for corner in [0, i, i + 1] {
                geometry.position_indices.push(v_indices[corner]);
                if !t_indices.is_empty() {
                    geometry.texcoord_indices.push(t_indices[corner]);
                }
                if !n_indices.is_empty() {
                    geometry.normal_indices.push(n_indices[corner]);
                }
            }
        }

        // The per-corner lists stay parallel across faces: a face may not
        // introduce a channel the mesh so far lacks, or drop one it has.
        if !geometry.texcoord_indices.is_empty()
            && geometry.texcoord_indices.len() != geometry.position_indices.len()
        {
            return Err(ObjError::FaceChannelMismatch {
                line,
                channel: "texcoord",
            });
        }
        if !geometry.normal_indices.is_empty()
            && geometry.normal_indices.len() != geometry.position_indices.len()
        {
            return Err(ObjError::FaceChannelMismatch {
                line,
                channel: "normal",
            });
        }

        Ok(())
    }

    /// `s 1` or `s off` — any other numeric operand is a warning, not an
    /// error. The flag is inert parsed metadata.
    fn parse_shade(&mut self) -> Result<(), ObjError> {
        self.advance();
        if self.current.kind == TokenKind::Number {
            if self.current.text == "1" {
                self.output.smooth_shading = true;
            } else {
                log::warn!(
                    "line {}: unknown shade type '{}'",
                    self.current.line,
                    self.current.text
                );
            }
            self.advance();
            Ok(())
        } else if self.accept(TokenKind::Off) {
            self.output.smooth_shading = false;
            Ok(())
        } else {
            Err(self.unexpected(TokenKind::Off))
        }
    }
}

fn parse_f32(text: &str, line: u32) -> Result<f32, ObjError> {
    text.parse().map_err(|_| ObjError::MalformedNumber {
        line,
        text: text.to_string(),
    })
}

/// Convert a 1-based source index into a bounds-checked 0-based index.
fn face_index(text: &str, line: u32, count: usize) -> Result<u32, ObjError> {
    let value: i64 = text.parse().map_err(|_| ObjError::MalformedNumber {
        line,
        text: text.to_string(),
    })?;
    if value < 1 || value as usize > count {
        return Err(ObjError::IndexOutOfRange {
            line,
            index: value,
            count,
        });
    }
    Ok((value - 1) as u32)
}
