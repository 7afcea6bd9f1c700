//! # objdict-codegen
//!
//! Turns a model name and its ordered field descriptors into the text of a C#
//! class declaration.
//!
//! Generation happens in two steps:
//! 1. [`syntax`] builds a small in-memory declaration tree (class, properties,
//!    accessors). Delimiters and keywords come from the tree shape; names are
//!    copied in verbatim, so the layout holds for identifier-shaped names.
//! 2. A [`printer::DeclarationPrinter`] renders the tree with fixed whitespace
//!    rules. [`printer::CSharpPrinter`] is the only target today.
//!
//! [`ClassGenerator::generate`] never inspects names or types. Callers that
//! want malformed metadata rejected use [`ClassGenerator::try_generate`].

pub mod error;
pub mod generator;
pub mod normalize;
pub mod printer;
pub mod syntax;
pub mod validate;

pub use error::CodegenError;
pub use generator::ClassGenerator;
pub use printer::{CSharpPrinter, DeclarationPrinter, LineEnding, PrintOptions};
