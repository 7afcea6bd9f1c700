//! Class generation settings.

use objdict_codegen::{ClassGenerator, LineEnding, PrintOptions};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const MAX_INDENT_WIDTH: usize = 16;

const fn default_indent_width() -> usize {
    4
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodegenConfig {
    /// Spaces per nesting level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// `lf` or `crlf`.
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Reject invalid identifiers and type names instead of emitting them.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            line_ending: LineEnding::default(),
            strict: false,
        }
    }
}

impl CodegenConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `indent_width` is zero or
    /// larger than 16.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "codegen.indent_width".to_string(),
                reason: format!(
                    "must be between 1 and {MAX_INDENT_WIDTH}, got {}",
                    self.indent_width
                ),
            });
        }
        Ok(())
    }

    pub const fn print_options(&self) -> PrintOptions {
        PrintOptions {
            indent_width: self.indent_width,
            line_ending: self.line_ending,
        }
    }

    pub const fn generator(&self) -> ClassGenerator {
        ClassGenerator::csharp(self.print_options())
    }
}
