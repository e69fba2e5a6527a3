// tests/color_api.rs

//! Drives `Color` through the public API the way an embedding toolkit does:
//! construct through the registered type, cache a native handle, read back
//! properties by name.

use std::rc::Rc;

use colorext::module::COLOR_TYPE;
use colorext::{Color, ColorArgs, PropertyValue, MODULE};
use serde_json::json;
use test_log::test;

/// Stand-in for a toolkit's native color object.
struct NativeColor {
    rgba: (u8, u8, u8, u8),
}

fn to_native(color: &Color) -> Rc<NativeColor> {
    if let Some(native) = color.tkdata_as::<NativeColor>() {
        return native;
    }
    let native = Rc::new(NativeColor {
        rgba: (color.red(), color.green(), color.blue(), color.alpha()),
    });
    color.set_tkdata(Some(native.clone()));
    native
}

#[test]
fn constructs_through_registered_type() {
    let color_type = MODULE.get_type("Color").expect("Color registered");
    let kwargs = json!({ "red": 10, "green": 20, "blue": 30 });
    let color = color_type.call(&[], kwargs.as_object()).unwrap();
    assert_eq!(color.to_string(), "Color(red=10, green=20, blue=30, alpha=255)");
    assert_eq!(color.argb(), 0xFF0A_141E);
}

#[test]
fn constructor_errors_propagate() {
    let kwargs = json!({ "red": 1, "green": 2, "blue": 3, "alpha": 4, "extra": 5 });
    assert!(COLOR_TYPE.call(&[], kwargs.as_object()).is_err());
}

#[test]
fn toolkit_handle_is_cached_once() {
    let color = Color::new(ColorArgs::rgba(200, 150, 100, 50));
    let first = to_native(&color);
    let second = to_native(&color);
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.rgba, (200, 150, 100, 50));

    drop(color);
    assert_eq!(Rc::strong_count(&first), 2);
}

#[test]
fn properties_by_name_match_accessors() {
    let color = Color::rgb(0x12, 0x34, 0x56);
    for (name, expected) in [
        ("red", 0x12),
        ("green", 0x34),
        ("blue", 0x56),
        ("alpha", 0xFF),
        ("argb", 0xFF12_3456),
    ] {
        assert_eq!(color.getattr(name).unwrap().as_int(), Some(expected), "{}", name);
    }
    assert!(color.setattr("argb", PropertyValue::Int(0)).is_err());
    assert_eq!(color.argb(), 0xFF12_3456);
}
