//! Lexer for the schema language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! Input no rule accepts becomes a `Garbage` token spanning exactly one code point.
//! The lexer never stops early: after garbage it resumes right past that code point,
//! so a run of bad bytes yields one `Garbage` token per character.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Lazy token stream over a source buffer.
///
/// Spans are absolute offsets into the buffer, even when lexing starts mid-source.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, SyntaxKind>,
    base: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::at(source, 0)
    }

    /// Starts lexing at `offset`, which must lie on a char boundary.
    pub fn at(source: &'src str, offset: usize) -> Self {
        Self {
            source,
            inner: SyntaxKind::lexer(&source[offset..]),
            base: offset,
        }
    }

    /// Offset right after the last token produced.
    pub fn offset(&self) -> usize {
        self.base + self.inner.span().end
    }

    fn span(&self, start: usize, end: usize) -> TextRange {
        TextRange::new(
            TextSize::from((self.base + start) as u32),
            TextSize::from((self.base + end) as u32),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.inner.next()? {
            Ok(kind) => {
                let range = self.inner.span();
                Some(Token::new(kind, self.span(range.start, range.end)))
            }
            Err(()) => {
                let range = self.inner.span();
                let rest = &self.source[self.base + range.start..];
                let char_len = rest.chars().next().map_or(1, char::len_utf8);
                let end = range.start + char_len;
                if range.end != end {
                    // logos swallowed more than one code point: restart after the first one
                    let restart = self.base + end;
                    self.inner = SyntaxKind::lexer(&self.source[restart..]);
                    let token = Token::new(SyntaxKind::Garbage, self.span(range.start, end));
                    self.base = restart;
                    return Some(token);
                }
                Some(Token::new(SyntaxKind::Garbage, self.span(range.start, end)))
            }
        }
    }
}

/// Tokenizes all of `source` into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Tokenizes `source[offset..]`, keeping absolute spans.
pub fn lex_from(source: &str, offset: usize) -> Vec<Token> {
    Lexer::at(source, offset).collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
