//! Code generation error types.

use thiserror::Error;

/// Errors raised by the strict generation path.
///
/// The default path ([`crate::ClassGenerator::generate`]) never raises these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    /// A model or field name is not usable in the target language.
    #[error("Malformed metadata for '{subject}': {reason}")]
    MalformedMetadata { subject: String, reason: String },
}

impl CodegenError {
    pub(crate) fn malformed(subject: &str, reason: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            subject: subject.to_string(),
            reason: reason.into(),
        }
    }
}
