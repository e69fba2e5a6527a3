// src/module.rs

//! Registration of the `colorext` module and by-name property access.
//!
//! A dynamic host does not call `Color::red()` directly; it looks attributes
//! up by name. `COLOR_PROPERTIES` is the table it resolves against, and
//! [`MODULE`] publishes the `Color` type under `colorext.Color` the first time
//! it is touched.

use std::rc::Rc;

use log::{info, trace};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::args::ColorArgs;
use crate::color::{Color, TkData};
use crate::error::{ArgumentError, AttributeError};

pub const MODULE_NAME: &str = "colorext";

/// A property value crossing the host boundary.
#[derive(Clone)]
pub enum PropertyValue {
    Int(u32),
    /// An opaque object, `None` standing in for the host's null.
    Object(Option<TkData>),
}

impl PropertyValue {
    pub fn as_int(&self) -> Option<u32> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            PropertyValue::Object(_) => None,
        }
    }

    pub fn into_object(self) -> Option<TkData> {
        match self {
            // Integers written to an object slot are boxed like any other value.
            PropertyValue::Int(v) => Some(Rc::new(v)),
            PropertyValue::Object(obj) => obj,
        }
    }
}

impl std::fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "Int({})", v),
            PropertyValue::Object(Some(_)) => write!(f, "Object(<opaque>)"),
            PropertyValue::Object(None) => write!(f, "Object(None)"),
        }
    }
}

type Getter = fn(&Color) -> PropertyValue;
type Setter = fn(&Color, PropertyValue);

/// One entry of a type's property table.
pub struct PropertyDef {
    pub name: &'static str,
    pub doc: &'static str,
    pub get: Getter,
    /// `None` for read-only properties.
    pub set: Option<Setter>,
}

impl PropertyDef {
    pub fn is_writable(&self) -> bool {
        self.set.is_some()
    }
}

fn get_alpha(color: &Color) -> PropertyValue {
    PropertyValue::Int(color.alpha().into())
}

fn get_red(color: &Color) -> PropertyValue {
    PropertyValue::Int(color.red().into())
}

fn get_green(color: &Color) -> PropertyValue {
    PropertyValue::Int(color.green().into())
}

fn get_blue(color: &Color) -> PropertyValue {
    PropertyValue::Int(color.blue().into())
}

fn get_argb(color: &Color) -> PropertyValue {
    PropertyValue::Int(color.argb())
}

fn get_tkdata(color: &Color) -> PropertyValue {
    PropertyValue::Object(color.tkdata())
}

fn set_tkdata(color: &Color, value: PropertyValue) {
    color.set_tkdata(value.into_object());
}

pub static COLOR_PROPERTIES: [PropertyDef; 6] = [
    PropertyDef {
        name: "alpha",
        doc: "Get the alpha value for the color.",
        get: get_alpha,
        set: None,
    },
    PropertyDef {
        name: "red",
        doc: "Get the red value for the color.",
        get: get_red,
        set: None,
    },
    PropertyDef {
        name: "green",
        doc: "Get the green value for the color.",
        get: get_green,
        set: None,
    },
    PropertyDef {
        name: "blue",
        doc: "Get the blue value for the color.",
        get: get_blue,
        set: None,
    },
    PropertyDef {
        name: "argb",
        doc: "Get the color as an #AARRGGBB unsigned long.",
        get: get_argb,
        set: None,
    },
    PropertyDef {
        name: "_tkdata",
        doc: "Get and set the toolkit specific color representation.",
        get: get_tkdata,
        set: Some(set_tkdata),
    },
];

/// A type published by a module.
pub struct TypeDef {
    pub name: &'static str,
    pub qualname: &'static str,
    pub properties: &'static [PropertyDef],
    constructor: fn(&[Value], Option<&Map<String, Value>>) -> Result<Color, ArgumentError>,
}

impl TypeDef {
    pub fn property(&self, name: &str) -> Option<&'static PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Constructs an instance from host call arguments.
    pub fn call(&self, args: &[Value], kwargs: Option<&Map<String, Value>>) -> Result<Color, ArgumentError> {
        (self.constructor)(args, kwargs)
    }
}

pub static COLOR_TYPE: TypeDef = TypeDef {
    name: "Color",
    qualname: "colorext.Color",
    properties: &COLOR_PROPERTIES,
    constructor: new_color,
};

fn new_color(args: &[Value], kwargs: Option<&Map<String, Value>>) -> Result<Color, ArgumentError> {
    ColorArgs::parse(args, kwargs).map(Color::new)
}

/// The set of types a module exposes.
pub struct Module {
    pub name: &'static str,
    types: Vec<&'static TypeDef>,
}

impl Module {
    fn new(name: &'static str) -> Self {
        Module {
            name,
            types: Vec::new(),
        }
    }

    fn add_type(&mut self, def: &'static TypeDef) {
        trace!("Adding type '{}' to module '{}'", def.name, self.name);
        self.types.push(def);
    }

    pub fn get_type(&self, name: &str) -> Option<&'static TypeDef> {
        self.types.iter().copied().find(|t| t.name == name)
    }

    pub fn types(&self) -> impl Iterator<Item = &'static TypeDef> + '_ {
        self.types.iter().copied()
    }
}

fn init() -> Module {
    let mut module = Module::new(MODULE_NAME);
    module.add_type(&COLOR_TYPE);
    info!(
        "Module '{}' registered with {} type(s)",
        module.name,
        module.types.len()
    );
    module
}

/// The `colorext` module, registered on first access.
pub static MODULE: Lazy<Module> = Lazy::new(init);

impl Color {
    /// Reads a property by name.
    pub fn getattr(&self, name: &str) -> Result<PropertyValue, AttributeError> {
        let def = COLOR_TYPE.property(name).ok_or_else(|| AttributeError::Unknown {
            type_name: COLOR_TYPE.qualname,
            name: name.to_string(),
        })?;
        Ok((def.get)(self))
    }

    /// Writes a property by name. Only `_tkdata` is writable.
    pub fn setattr(&self, name: &str, value: PropertyValue) -> Result<(), AttributeError> {
        let def = COLOR_TYPE.property(name).ok_or_else(|| AttributeError::Unknown {
            type_name: COLOR_TYPE.qualname,
            name: name.to_string(),
        })?;
        let set = def.set.ok_or(AttributeError::NotWritable {
            type_name: COLOR_TYPE.qualname,
            name: def.name,
        })?;
        set(self, value);
        Ok(())
    }
}
