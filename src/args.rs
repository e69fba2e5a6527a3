// src/args.rs

//! Constructor arguments for [`Color`](crate::color::Color).
//!
//! `ColorArgs` holds the four optional channel arguments by name. It can be
//! built directly, deserialized from a named-field object, or bound from a
//! dynamic host call (`Color(*args, **kwargs)`) with [`ColorArgs::parse`].

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ArgumentError;

/// Parameter names in positional order.
pub const KEYWORDS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Value used for an unspecified red, green or blue argument.
pub const UNSPECIFIED: i32 = -1;

/// Value used when alpha is not given.
pub const DEFAULT_ALPHA: i32 = 255;

/// Named constructor arguments. `None` means the argument was not passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorArgs {
    pub red: Option<i32>,
    pub green: Option<i32>,
    pub blue: Option<i32>,
    pub alpha: Option<i32>,
}

impl ColorArgs {
    /// Arguments for an opaque color.
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        ColorArgs {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: None,
        }
    }

    /// Arguments with an explicit alpha.
    pub fn rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        ColorArgs {
            alpha: Some(alpha),
            ..Self::rgb(red, green, blue)
        }
    }

    /// Binds host call arguments to the `red`, `green`, `blue`, `alpha`
    /// parameters. All parameters are optional integers.
    pub fn parse(args: &[Value], kwargs: Option<&Map<String, Value>>) -> Result<Self, ArgumentError> {
        let given = args.len() + kwargs.map_or(0, Map::len);
        if given > KEYWORDS.len() {
            return Err(ArgumentError::TooManyArguments {
                given,
                max: KEYWORDS.len(),
            });
        }

        let mut slots: [Option<i32>; 4] = [None; 4];
        for (idx, value) in args.iter().enumerate() {
            slots[idx] = Some(to_int(KEYWORDS[idx], value)?);
        }

        if let Some(kwargs) = kwargs {
            for (key, value) in kwargs {
                let idx = KEYWORDS
                    .iter()
                    .position(|k| *k == key.as_str())
                    .ok_or_else(|| ArgumentError::UnexpectedKeyword(key.clone()))?;
                if idx < args.len() {
                    return Err(ArgumentError::DuplicateArgument {
                        name: KEYWORDS[idx],
                        position: idx + 1,
                    });
                }
                slots[idx] = Some(to_int(KEYWORDS[idx], value)?);
            }
        }

        let [red, green, blue, alpha] = slots;
        let parsed = ColorArgs {
            red,
            green,
            blue,
            alpha,
        };
        trace!("Bound color arguments: {:?}", parsed);
        Ok(parsed)
    }

    /// Applies the construction rule and returns the packed `#AARRGGBB` value.
    ///
    /// A negative argument (including an omitted red, green or blue) yields
    /// zero. Otherwise every channel is clamped to `0..=255`.
    pub fn resolve(&self) -> u32 {
        let r = self.red.unwrap_or(UNSPECIFIED);
        let g = self.green.unwrap_or(UNSPECIFIED);
        let b = self.blue.unwrap_or(UNSPECIFIED);
        let a = self.alpha.unwrap_or(DEFAULT_ALPHA);
        if r < 0 || g < 0 || b < 0 || a < 0 {
            return 0;
        }
        pack(clamp(a), clamp(r), clamp(g), clamp(b))
    }
}

/// Packs channels into `#AARRGGBB` order.
pub const fn pack(alpha: u8, red: u8, green: u8, blue: u8) -> u32 {
    ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn to_int(name: &'static str, value: &Value) -> Result<i32, ArgumentError> {
    let found = match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return i32::try_from(v).map_err(|_| ArgumentError::Overflow {
                    name,
                    value: v.to_string(),
                });
            }
            if n.is_u64() {
                return Err(ArgumentError::Overflow {
                    name,
                    value: n.to_string(),
                });
            }
            "float"
        }
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    Err(ArgumentError::WrongType { name, found })
}
