//! Whitespace normalization for type reference text.
//!
//! Type names are passed through verbatim except for whitespace: spaces inside
//! generic argument lists, array ranks and nullable markers are removed, a
//! comma is always followed by exactly one space, and words that were
//! separated by whitespace (tuple element names, `unsafe` pointer forms) keep a
//! single space between them. No token is ever renamed, added or dropped.

/// One lexical unit of a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Identifier or keyword, including a leading `@`.
    Word(&'a str),
    /// Any other non-whitespace character.
    Punct(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeToken<'a> {
    pub kind: TokenKind<'a>,
    /// Whether whitespace separated this token from the previous one.
    pub spaced: bool,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '@'
}

/// Split type text into words and punctuation, dropping whitespace.
#[must_use]
pub fn tokenize(text: &str) -> Vec<TypeToken<'_>> {
    let mut tokens = Vec::new();
    let mut spaced = false;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            spaced = true;
            continue;
        }
        let kind = if is_word_char(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            TokenKind::Word(&text[start..end])
        } else {
            TokenKind::Punct(c)
        };
        tokens.push(TypeToken { kind, spaced });
        spaced = false;
    }
    tokens
}

fn needs_space(prev: &TypeToken<'_>, next: &TypeToken<'_>) -> bool {
    if prev.kind == TokenKind::Punct(',') {
        return !matches!(next.kind, TokenKind::Punct(',' | ']'));
    }
    matches!(next.kind, TokenKind::Word(_))
        && next.spaced
        && matches!(
            prev.kind,
            TokenKind::Word(_) | TokenKind::Punct('>' | ']' | '?' | ')' | '*')
        )
}

/// Canonical spelling of a type reference.
#[must_use]
pub fn normalize_type(text: &str) -> String {
    let tokens = tokenize(text);
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<&TypeToken<'_>> = None;

    for token in &tokens {
        if prev.is_some_and(|p| needs_space(p, token)) {
            out.push(' ');
        }
        match token.kind {
            TokenKind::Word(word) => out.push_str(word),
            TokenKind::Punct(c) => out.push(c),
        }
        prev = Some(token);
    }
    out
}
