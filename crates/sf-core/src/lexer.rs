//! Minimal SQL tokenizer for comment stripping and identifier scanning.
//!
//! This is not a SQL parser: it only knows enough to tell comments, string
//! literals and quoted identifiers apart from the rest of the text, so that
//! comment-like substrings inside literals are never mistaken for comments.

use std::borrow::Cow;

/// Kind of a lexed span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Bare identifier or keyword (`[A-Za-z0-9_$]+`, plus non-ASCII letters)
    Word,
    /// `"quoted"` or `` `quoted` `` identifier, quotes included
    QuotedIdent,
    /// `'single quoted'` string literal, quotes included
    StringLiteral,
    /// `-- ...` up to, but not including, the newline
    LineComment,
    /// `/* ... */`, possibly spanning lines
    BlockComment,
    /// Any other single character (whitespace, punctuation, operators)
    Other,
}

/// A span of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Other && self.text.chars().all(char::is_whitespace)
    }

    /// Identifier value for words and quoted identifiers, with quotes removed
    /// and doubled quote characters collapsed.
    pub fn ident_value(&self) -> Option<Cow<'a, str>> {
        match self.kind {
            TokenKind::Word => Some(Cow::Borrowed(self.text)),
            TokenKind::QuotedIdent => {
                let quote = self.text.chars().next()?;
                let inner = self.text[1..].strip_suffix(quote).unwrap_or(&self.text[1..]);
                let doubled = format!("{quote}{quote}");
                if inner.contains(&doubled) {
                    Some(Cow::Owned(inner.replace(&doubled, &quote.to_string())))
                } else {
                    Some(Cow::Borrowed(inner))
                }
            }
            _ => None,
        }
    }
}

/// Iterator over the tokens of a SQL string
pub(crate) struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = match first {
            '-' if rest.starts_with("--") => (
                TokenKind::LineComment,
                rest.find('\n').unwrap_or(rest.len()),
            ),
            '/' if rest.starts_with("/*") => (
                TokenKind::BlockComment,
                rest[2..].find("*/").map_or(rest.len(), |end| end + 4),
            ),
            '\'' => (TokenKind::StringLiteral, quoted_len(rest, '\'')),
            '"' | '`' => (TokenKind::QuotedIdent, quoted_len(rest, first)),
            c if is_ident_char(c) => (
                TokenKind::Word,
                rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len()),
            ),
            c => (TokenKind::Other, c.len_utf8()),
        };

        let text = &rest[..len];
        self.pos += len;
        Some(Token { kind, text })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Length of a quoted span starting at `rest[0] == quote`. A doubled quote
/// is an escaped quote; an unterminated span runs to the end of input.
///
/// Quoting follows standard SQL: a backslash is an ordinary character, so
/// `'C:\'` is a complete literal. MySQL's backslash escapes (`'it\'s'`) are
/// not recognised; write `'it''s'` instead or the literal ends at `\'`.
fn quoted_len(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices().skip(1).peekable();
    while let Some((idx, c)) = chars.next() {
        if c == quote {
            if matches!(chars.peek(), Some((_, next)) if *next == quote) {
                chars.next();
                continue;
            }
            return idx + c.len_utf8();
        }
    }
    rest.len()
}
