//! Opt-in checks for the strict generation path.
//!
//! Rejects model and field names that are not C# identifiers, type references
//! that do not parse as C# types, duplicate property names, and properties
//! named after their enclosing class. Resolution of type names is not checked.

use std::collections::HashSet;

use objdict_core::views::FieldView;

use crate::error::CodegenError;
use crate::normalize::{TokenKind, TypeToken, tokenize};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Keywords that name a type and may stand alone in a type reference.
const PREDEFINED_TYPES: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "float", "int", "long", "object", "sbyte",
    "short", "string", "uint", "ulong", "ushort",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

fn is_identifier_shape(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Check that `name` is a legal C# identifier (`@` escapes keywords).
///
/// # Errors
///
/// Returns `CodegenError::MalformedMetadata` naming `subject` otherwise.
pub fn validate_identifier(subject: &str, name: &str) -> Result<(), CodegenError> {
    if let Some(escaped) = name.strip_prefix('@') {
        if is_identifier_shape(escaped) {
            return Ok(());
        }
        return Err(CodegenError::malformed(subject, format!("'{name}' is not an identifier")));
    }
    if !is_identifier_shape(name) {
        return Err(CodegenError::malformed(subject, format!("'{name}' is not an identifier")));
    }
    if is_keyword(name) {
        return Err(CodegenError::malformed(subject, format!("'{name}' is a reserved keyword")));
    }
    Ok(())
}

/// Check that `text` parses as a C# type reference.
///
/// # Errors
///
/// Returns `CodegenError::MalformedMetadata` naming `subject` otherwise.
pub fn validate_type(subject: &str, text: &str) -> Result<(), CodegenError> {
    let tokens = tokenize(text);
    let mut parser = TypeParser { tokens: &tokens, pos: 0 };
    parser
        .parse_type()
        .and_then(|()| match parser.peek() {
            None => Ok(()),
            Some(token) => Err(format!("unexpected {} after type", describe(token))),
        })
        .map_err(|reason| CodegenError::malformed(subject, format!("type '{text}': {reason}")))
}

/// Run every strict check over a class and its fields.
///
/// # Errors
///
/// Returns the first `CodegenError::MalformedMetadata` found, in field order.
pub fn validate_class(name: &str, fields: &[FieldView]) -> Result<(), CodegenError> {
    validate_identifier("model", name)?;

    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        let subject = format!("field {}", field.name);
        validate_identifier(&subject, &field.name)?;
        validate_type(&subject, &field.type_name)?;
        if field.name == name {
            return Err(CodegenError::malformed(
                &subject,
                "member name matches its enclosing class",
            ));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(CodegenError::malformed(&subject, "duplicate property name"));
        }
    }
    Ok(())
}

fn describe(token: &TypeToken<'_>) -> String {
    match token.kind {
        TokenKind::Word(word) => format!("'{word}'"),
        TokenKind::Punct(c) => format!("'{c}'"),
    }
}

struct TypeParser<'t, 'a> {
    tokens: &'t [TypeToken<'a>],
    pos: usize,
}

impl<'a> TypeParser<'_, 'a> {
    fn peek(&self) -> Option<&TypeToken<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_punct(&self, c: char) -> bool {
        self.peek().is_some_and(|t| t.kind == TokenKind::Punct(c))
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.peek_punct(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, c: char) -> Result<(), String> {
        if self.eat_punct(c) {
            return Ok(());
        }
        match self.peek() {
            Some(token) => Err(format!("expected '{c}', found {}", describe(token))),
            None => Err(format!("expected '{c}', found end of input")),
        }
    }

    fn word(&mut self) -> Result<&'a str, String> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Word(word)) => {
                self.pos += 1;
                Ok(word)
            }
            Some(_) => Err(format!("expected a name, found {}", describe(&self.tokens[self.pos]))),
            None => Err("expected a name, found end of input".to_string()),
        }
    }

    fn parse_type(&mut self) -> Result<(), String> {
        if self.peek_punct('(') {
            self.parse_tuple()?;
        } else {
            self.parse_named()?;
        }
        self.parse_suffixes()
    }

    fn parse_named(&mut self) -> Result<(), String> {
        let first = self.word()?;
        if PREDEFINED_TYPES.contains(&first) {
            return Ok(());
        }
        check_name_segment(first)?;
        self.parse_type_args()?;

        loop {
            if self.eat_punct(':') {
                self.expect_punct(':')?;
            } else if !self.eat_punct('.') {
                return Ok(());
            }
            check_name_segment(self.word()?)?;
            self.parse_type_args()?;
        }
    }

    fn parse_type_args(&mut self) -> Result<(), String> {
        if !self.eat_punct('<') {
            return Ok(());
        }
        self.parse_type()?;
        while self.eat_punct(',') {
            self.parse_type()?;
        }
        self.expect_punct('>')
    }

    fn parse_tuple(&mut self) -> Result<(), String> {
        self.expect_punct('(')?;
        let mut elements = 0;
        loop {
            self.parse_type()?;
            if let Some(TokenKind::Word(name)) = self.peek().map(|t| t.kind) {
                self.pos += 1;
                check_name_segment(name)?;
            }
            elements += 1;
            if !self.eat_punct(',') {
                break;
            }
        }
        self.expect_punct(')')?;
        if elements < 2 {
            return Err("a tuple needs at least two elements".to_string());
        }
        Ok(())
    }

    fn parse_suffixes(&mut self) -> Result<(), String> {
        loop {
            if self.eat_punct('?') {
                continue;
            }
            if self.eat_punct('[') {
                while self.eat_punct(',') {}
                self.expect_punct(']')?;
                continue;
            }
            return Ok(());
        }
    }
}

fn check_name_segment(word: &str) -> Result<(), String> {
    let bare = word.strip_prefix('@').unwrap_or(word);
    if !is_identifier_shape(bare) {
        return Err(format!("'{word}' is not a type name"));
    }
    if bare.len() == word.len() && is_keyword(word) {
        return Err(format!("'{word}' is a reserved keyword"));
    }
    Ok(())
}
