// src/color.rs

//! Defines the packed ARGB `Color` value type.
//!
//! A `Color` stores its four channels in a single `u32` using `#AARRGGBB`
//! byte order, alongside an optional toolkit-specific handle (`tkdata`) that
//! the embedding UI framework caches on the color so it does not have to
//! rebuild its native representation every time the color is used.
//!
//! Channels are fixed at construction. Only the cached handle can change.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::args::{pack, ColorArgs};

/// Opaque toolkit handle cached on a color. Never interpreted by this crate.
pub type TkData = Rc<dyn Any>;

/// An RGBA color packed into a 32-bit integer.
pub struct Color {
    /// Toolkit specific color representation.
    tkdata: RefCell<Option<TkData>>,
    /// Stored using `#AARRGGBB` byte order.
    argb: u32,
}

impl Color {
    /// Builds a color from named arguments.
    ///
    /// Negative or omitted red/green/blue (or a negative alpha) give the zero
    /// color, fully transparent black. Otherwise channels are clamped to
    /// `0..=255`.
    pub fn new(args: ColorArgs) -> Self {
        let argb = args.resolve();
        if argb == 0 {
            debug!("Color arguments {:?} resolved to the zero color", args);
        }
        Color::from_argb(argb)
    }

    /// Opaque color; alpha is 255.
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Color::new(ColorArgs::rgb(red, green, blue))
    }

    pub fn rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Color::new(ColorArgs::rgba(red, green, blue, alpha))
    }

    /// Wraps an already packed `#AARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        Color {
            tkdata: RefCell::new(None),
            argb,
        }
    }

    pub fn alpha(&self) -> u8 {
        (self.argb >> 24) as u8
    }

    pub fn red(&self) -> u8 {
        (self.argb >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.argb >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.argb as u8
    }

    /// The color as an `#AARRGGBB` unsigned integer.
    pub fn argb(&self) -> u32 {
        self.argb
    }

    /// Returns a shared reference to the cached toolkit handle, if any.
    pub fn tkdata(&self) -> Option<TkData> {
        self.tkdata.borrow().clone()
    }

    /// Returns the cached handle if it holds a `T`.
    pub fn tkdata_as<T: Any>(&self) -> Option<Rc<T>> {
        self.tkdata().and_then(|data| data.downcast::<T>().ok())
    }

    /// Replaces the cached toolkit handle, releasing the previous one.
    ///
    /// Passing the color itself is ignored: the color would own a reference
    /// to itself and never be freed.
    pub fn set_tkdata(&self, value: Option<TkData>) {
        if let Some(data) = &value {
            if std::ptr::eq(Rc::as_ptr(data) as *const (), self as *const Self as *const ()) {
                debug!("Ignoring request to cache {} as its own toolkit data", self);
                return;
            }
        }
        // Release outside the borrow; dropping the old handle may run
        // arbitrary toolkit code.
        let old = self.tkdata.replace(value);
        drop(old);
    }

    /// Drops the cached toolkit handle.
    pub fn clear_tkdata(&self) {
        self.set_tkdata(None);
    }
}

impl Default for Color {
    /// The zero color, as produced by constructing with no arguments.
    fn default() -> Self {
        Color::new(ColorArgs::default())
    }
}

impl From<ColorArgs> for Color {
    fn from(args: ColorArgs) -> Self {
        Color::new(args)
    }
}

impl From<[u8; 4]> for Color {
    /// `[alpha, red, green, blue]`.
    fn from([a, r, g, b]: [u8; 4]) -> Self {
        Color::from_argb(pack(a, r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(red={}, green={}, blue={}, alpha={})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("argb", &format_args!("{:#010X}", self.argb))
            .field("tkdata", &self.tkdata.borrow().is_some())
            .finish()
    }
}
