//! Error types for the mode-aware color transform.
//!
//! Every error is fatal for the invocation that raised it: the transform is
//! deterministic, so the caller has to fix the configuration and run again.

use thiserror::Error;

use crate::config::ColorSlot;

/// Errors that can occur while transforming a configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Synthesizing a semantic color would overwrite an existing entry.
    #[error("adding the '{name}' mode-aware color to {slot} would overwrite an existing color")]
    Collision { name: String, slot: ColorSlot },

    /// A light or dark leaf is not a recognizable color string.
    #[error("mode-aware color '{name}': '{leaf}' is '{value}', not a valid color: {source}")]
    MalformedColor {
        name: String,
        leaf: String,
        value: String,
        #[source]
        source: ColorParseError,
    },

    /// A palette node is neither a color string nor a nested color map.
    #[error("color '{path}' must be a string or a nested color map, found {found}")]
    MalformedLeaf { path: String, found: &'static str },

    /// Two pairs would declare the same state variable with different values.
    #[error("{slot} would redeclare '{variable}' with a different value")]
    VariableCollision { variable: String, slot: ColorSlot },

    /// The dark-mode selector is the same as the light partition's.
    #[error("dark-mode selector '{selector}' would replace the light declarations")]
    InvalidDarkSelector { selector: String },

    /// A light/dark identifier cannot be used to detect pairs.
    #[error("invalid mode identifier '{token}': {reason}")]
    InvalidToken { token: String, reason: &'static str },

    /// The configuration could not be converted to or from JSON.
    #[error("configuration serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a color string could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("hex colors must have 3, 4, 6 or 8 digits, got {0}")]
    HexLength(usize),

    #[error("invalid hex digits '{0}'")]
    HexDigits(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("unsupported color function '{0}()'")]
    UnknownFunction(String),

    #[error("{function}() expects {expected} components, got {found}")]
    Arity {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("unexpected input in color value")]
    Syntax,
}

/// Result type for mode-aware color operations.
pub type Result<T> = std::result::Result<T, Error>;
