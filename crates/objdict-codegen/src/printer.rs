//! Deterministic text rendering of declaration trees.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::syntax::{ClassDeclaration, Modifier, PropertyDeclaration};

/// Line terminator used between printed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    #[default]
    Crlf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            other => Err(format!("unknown line ending '{other}' (expected lf or crlf)")),
        }
    }
}

/// Whitespace settings shared by all printers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    pub line_ending: LineEnding,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_ending: LineEnding::Crlf,
        }
    }
}

/// Renders a declaration tree as source text.
///
/// Implementations must be pure: the same tree and options always give
/// byte-identical output.
pub trait DeclarationPrinter {
    fn print(&self, class: &ClassDeclaration) -> String;
}

/// C# surface syntax.
///
/// ```text
/// public class Invoice
/// {
///     public decimal Amount { get; set; }
///
///     public string Currency { get; set; }
/// }
/// ```
///
/// No trailing line terminator is emitted after the closing brace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CSharpPrinter {
    options: PrintOptions,
}

impl CSharpPrinter {
    #[must_use]
    pub const fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> PrintOptions {
        self.options
    }

    fn write_modifiers(out: &mut String, modifiers: &[Modifier]) {
        for modifier in modifiers {
            out.push_str(modifier.keyword());
            out.push(' ');
        }
    }

    fn write_property(&self, out: &mut String, property: &PropertyDeclaration) {
        out.push_str(&" ".repeat(self.options.indent_width));
        Self::write_modifiers(out, &property.modifiers);
        let _ = write!(out, "{} {} {{", property.type_ref.as_str(), property.name);
        for accessor in &property.accessors {
            let _ = write!(out, " {};", accessor.kind.keyword());
        }
        out.push_str(" }");
    }
}

impl DeclarationPrinter for CSharpPrinter {
    fn print(&self, class: &ClassDeclaration) -> String {
        let eol = self.options.line_ending.as_str();
        let mut out = String::new();

        Self::write_modifiers(&mut out, &class.modifiers);
        let _ = write!(out, "class {}{eol}{{{eol}", class.name);

        for (idx, property) in class.members.iter().enumerate() {
            if idx > 0 {
                out.push_str(eol);
            }
            self.write_property(&mut out, property);
            out.push_str(eol);
        }

        out.push('}');
        out
    }
}
