//! Error types for the gamedeck plugin.
//!
//! This module defines the centralized error type [`GamedeckError`] and a type alias
//! [`Result`] used throughout the crate. Catalog problems are fatal configuration
//! errors shown in place of the browser.

use thiserror::Error;

/// The main error type for gamedeck operations.
///
/// # Examples
///
/// ```
/// use gamedeck::GamedeckError;
///
/// fn validate() -> Result<(), GamedeckError> {
///     Err(GamedeckError::Catalog("duplicate item id: 7".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum GamedeckError {
    /// The catalog violates one of its invariants.
    ///
    /// Raised for empty collections, duplicate ids and blank required fields.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed, or a required field is missing.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for gamedeck operations.
pub type Result<T> = std::result::Result<T, GamedeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_render_their_prefix() {
        let err = GamedeckError::Theme("bad color".to_string());
        assert_eq!(err.to_string(), "Theme error: bad color");

        let err: GamedeckError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("Parse error: "));
    }
}
