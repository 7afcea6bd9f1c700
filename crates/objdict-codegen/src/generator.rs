//! Model metadata → class declaration text.

use objdict_core::views::{FieldView, ModelView};

use crate::error::CodegenError;
use crate::printer::{CSharpPrinter, DeclarationPrinter, PrintOptions};
use crate::syntax::{ClassDeclaration, Modifier, PropertyDeclaration, TypeRef};
use crate::validate::validate_class;

/// Builds a declaration tree from field metadata and prints it.
#[derive(Debug, Clone, Default)]
pub struct ClassGenerator<P = CSharpPrinter> {
    printer: P,
}

impl ClassGenerator {
    /// C# generator with default whitespace options.
    #[must_use]
    pub const fn new() -> Self {
        Self::csharp(PrintOptions {
            indent_width: 4,
            line_ending: crate::printer::LineEnding::Crlf,
        })
    }

    /// Generator targeting C# with the given whitespace options.
    #[must_use]
    pub const fn csharp(options: PrintOptions) -> Self {
        Self {
            printer: CSharpPrinter::new(options),
        }
    }
}

impl<P: DeclarationPrinter> ClassGenerator<P> {
    #[must_use]
    pub const fn with_printer(printer: P) -> Self {
        Self { printer }
    }

    /// One public class named `name` with a public `get; set;` property per
    /// field, in field order. Names and types are not checked.
    #[must_use]
    pub fn build(name: &str, fields: &[FieldView]) -> ClassDeclaration {
        let properties = fields.iter().map(|field| {
            PropertyDeclaration::public_read_write(TypeRef::parse(&field.type_name), &field.name)
        });
        ClassDeclaration::new(name)
            .add_modifier(Modifier::Public)
            .add_members(properties)
    }

    /// Declaration text for `name` and `fields`.
    ///
    /// Never fails. Class, property and type names are emitted verbatim, so
    /// the layout is only guaranteed for identifier-shaped names: a name
    /// holding braces or keywords lands in the output as-is. Duplicate
    /// property names, a property named like the class, or an unresolvable
    /// type all come out as text a compiler would reject.
    #[must_use]
    pub fn generate(&self, name: &str, fields: &[FieldView]) -> String {
        tracing::trace!(model = name, fields = fields.len(), "generating class definition");
        self.printer.print(&Self::build(name, fields))
    }

    /// [`Self::generate`] over an aggregate view.
    #[must_use]
    pub fn generate_view(&self, view: &ModelView) -> String {
        self.generate(&view.name, &view.fields)
    }

    /// Like [`Self::generate`], but rejects names and types the target
    /// language cannot accept.
    ///
    /// # Errors
    ///
    /// Returns `CodegenError::MalformedMetadata` for the first offending name.
    pub fn try_generate(&self, name: &str, fields: &[FieldView]) -> Result<String, CodegenError> {
        validate_class(name, fields)?;
        Ok(self.generate(name, fields))
    }
}
