//! Tokenizer for the OBJ directive grammar.
//!
//! Tokens are produced lazily, one per [`Tokenizer::next_token`] call; the
//! parser holds exactly the current token. A secondary mode,
//! [`Tokenizer::rest_of_line`], bypasses normal tokenization for directives
//! whose operand is free text (material names, library paths, object and
//! group names), since such text may contain characters the main rules
//! would misclassify.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Classification of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `#` through end of line.
    Comment,
    /// The `v` keyword.
    Vertex,
    /// The `vn` keyword.
    Normal,
    /// The `vt` keyword.
    TexCoord,
    /// The `f` keyword.
    Face,
    /// The `usemtl` keyword.
    UseMtl,
    /// The `mtllib` keyword.
    MtlLib,
    /// The `o` keyword.
    Object,
    /// The `g` keyword.
    Group,
    /// The `s` keyword.
    Shade,
    /// A `/` between face indices.
    IndexSeparator,
    /// Numeric literal text; parsed by the consumer, not validated here.
    Number,
    /// Free text produced by [`Tokenizer::rest_of_line`].
    String,
    /// A newline (CRLF and LFCR collapse to one token).
    EndOfLine,
    /// End of input; repeated calls keep returning it.
    EndOfFile,
    /// The `on` keyword.
    On,
    /// The `off` keyword.
    Off,
    /// Any word or character not recognized above.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comment => "comment",
            Self::Vertex => "'v'",
            Self::Normal => "'vn'",
            Self::TexCoord => "'vt'",
            Self::Face => "'f'",
            Self::UseMtl => "'usemtl'",
            Self::MtlLib => "'mtllib'",
            Self::Object => "'o'",
            Self::Group => "'g'",
            Self::Shade => "'s'",
            Self::IndexSeparator => "'/'",
            Self::Number => "number",
            Self::String => "string",
            Self::EndOfLine => "end of line",
            Self::EndOfFile => "end of file",
            Self::On => "'on'",
            Self::Off => "'off'",
            Self::Unknown => "unknown token",
        };
        f.write_str(name)
    }
}

/// One lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the token.
    pub kind: TokenKind,
    /// Raw lexeme; meaningful for number, string, comment, and unknown tokens.
    pub text: String,
    /// 1-based line the token started on.
    pub line: u32,
}

/// Lazy character-stream tokenizer.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the given input text.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    fn token(&self, kind: TokenKind, text: String, line: u32) -> Token {
        Token { kind, text, line }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        // Whitespace other than newlines never reaches the token stream.
        while matches!(self.chars.peek(), Some(&c) if c.is_whitespace() && c != '\n' && c != '\r') {
            self.chars.next();
        }

        let line = self.line;
        let Some(&c) = self.chars.peek() else {
            return self.token(TokenKind::EndOfFile, String::new(), line);
        };

        match c {
            '\n' | '\r' => {
                self.chars.next();
                // A paired \r\n or \n\r is one newline.
                if matches!((c, self.chars.peek()), ('\n', Some('\r')) | ('\r', Some('\n'))) {
                    self.chars.next();
                }
                self.line += 1;
                self.token(TokenKind::EndOfLine, String::new(), line)
            }
            c if c.is_alphabetic() => {
                let mut word = String::new();
                while let Some(&c) = self.chars.peek() {
                    if !c.is_alphanumeric() {
                        break;
                    }
                    word.push(c);
                    self.chars.next();
                }
                let kind = match word.as_str() {
                    "v" => TokenKind::Vertex,
                    "vn" => TokenKind::Normal,
                    "vt" => TokenKind::TexCoord,
                    "f" => TokenKind::Face,
                    "usemtl" => TokenKind::UseMtl,
                    "mtllib" => TokenKind::MtlLib,
                    "o" => TokenKind::Object,
                    "g" => TokenKind::Group,
                    "s" => TokenKind::Shade,
                    "on" => TokenKind::On,
                    "off" => TokenKind::Off,
                    _ => TokenKind::Unknown,
                };
                self.token(kind, word, line)
            }
            c if c.is_ascii_digit() || c == '-' => {
                let mut text = String::new();
                text.push(c);
                self.chars.next();
                while let Some(&c) = self.chars.peek() {
                    if !(c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E') {
                        break;
                    }
                    text.push(c);
                    self.chars.next();
                }
                self.token(TokenKind::Number, text, line)
            }
            '#' => {
                let mut text = String::new();
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                    text.push(c);
                    self.chars.next();
                }
                self.token(TokenKind::Comment, text, line)
            }
            '/' => {
                self.chars.next();
                self.token(TokenKind::IndexSeparator, "/".to_string(), line)
            }
            other => {
                self.chars.next();
                self.token(TokenKind::Unknown, other.to_string(), line)
            }
        }
    }

    /// Consume raw characters through (exclusive) end of line as one
    /// string token.
    pub fn rest_of_line(&mut self) -> Token {
        let line = self.line;
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        self.token(TokenKind::String, text, line)
    }
}
