use thiserror::Error;

/// Errors returned by requests that resolve a language name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextsiftError {
    /// No stoplist is registered under the requested language name.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
