//! Minimal declaration tree: one class holding auto-properties.
//!
//! Nodes are immutable values built with `with_*`/`add_*` methods that return
//! the updated node, so a declaration reads top-down like the text it prints.

use crate::normalize::normalize_type;

/// Declaration modifiers, printed in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
}

impl Modifier {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
        }
    }
}

/// A type reference. Holds the caller's text with whitespace normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(String);

impl TypeRef {
    /// Wrap `text` as a type reference without checking that it resolves.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(normalize_type(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

/// A bodiless accessor (`get;` / `set;`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accessor {
    pub kind: AccessorKind,
}

impl Accessor {
    #[must_use]
    pub const fn get() -> Self {
        Self {
            kind: AccessorKind::Get,
        }
    }

    #[must_use]
    pub const fn set() -> Self {
        Self {
            kind: AccessorKind::Set,
        }
    }
}

/// An auto-implemented property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub modifiers: Vec<Modifier>,
    pub type_ref: TypeRef,
    pub name: String,
    pub accessors: Vec<Accessor>,
}

impl PropertyDeclaration {
    #[must_use]
    pub fn new(type_ref: TypeRef, name: &str) -> Self {
        Self {
            modifiers: Vec::new(),
            type_ref,
            name: name.to_string(),
            accessors: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn add_accessor(mut self, accessor: Accessor) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Public property with `get; set;` accessors.
    #[must_use]
    pub fn public_read_write(type_ref: TypeRef, name: &str) -> Self {
        Self::new(type_ref, name)
            .add_modifier(Modifier::Public)
            .add_accessor(Accessor::get())
            .add_accessor(Accessor::set())
    }
}

/// A class declaration and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub members: Vec<PropertyDeclaration>,
}

impl ClassDeclaration {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.to_string(),
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn add_members(mut self, members: impl IntoIterator<Item = PropertyDeclaration>) -> Self {
        self.members.extend(members);
        self
    }
}
