// src/lib.rs

//! `colorext` provides the packed ARGB [`Color`] value type used by the
//! declarative UI layer, together with the argument binding and type
//! registration a dynamic host needs to construct colors and read their
//! properties by name.

pub mod args;
pub mod color;
pub mod error;
pub mod module;

pub use args::ColorArgs;
pub use color::{Color, TkData};
pub use error::{ArgumentError, AttributeError};
pub use module::{PropertyValue, MODULE};
