// src/error.rs

//! Error types raised at the host binding boundary.
//!
//! The `Color` type itself never fails: out-of-range channels are clamped and
//! missing ones collapse to the zero color. Errors only come from the dynamic
//! layer that turns host call arguments into a color and that resolves
//! properties by name.

use thiserror::Error;

/// Invalid arguments passed to the `Color` constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// More arguments were supplied than the constructor accepts.
    #[error("Color() takes at most {max} arguments ({given} given)")]
    TooManyArguments {
        /// Positional plus keyword arguments supplied.
        given: usize,
        /// Number of parameters the constructor declares.
        max: usize,
    },

    /// A keyword that is not one of the constructor's parameters.
    #[error("'{0}' is an invalid keyword argument for Color()")]
    UnexpectedKeyword(String),

    /// A parameter was given both positionally and by keyword.
    #[error("argument for Color() given by name ('{name}') and position ({position})")]
    DuplicateArgument {
        name: &'static str,
        /// 1-based position of the positional argument.
        position: usize,
    },

    /// The value is not an integer.
    #[error("argument '{name}' must be an integer, not {found}")]
    WrongType {
        name: &'static str,
        found: &'static str,
    },

    /// The integer does not fit in a 32-bit signed channel argument.
    #[error("argument '{name}' is out of range for a signed 32-bit integer: {value}")]
    Overflow { name: &'static str, value: String },
}

/// Failed by-name attribute access on a registered type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("'{type_name}' object has no attribute '{name}'")]
    Unknown {
        type_name: &'static str,
        name: String,
    },

    #[error("attribute '{name}' of '{type_name}' objects is not writable")]
    NotWritable {
        type_name: &'static str,
        name: &'static str,
    },
}
