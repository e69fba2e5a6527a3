// src/main.rs

//! `colorext` command line: constructs a color the way the host would and
//! prints its text form and packed value.
//!
//! ```text
//! colorext 10 20 30 alpha=128
//! colorext --json '{"red": 10, "green": 20, "blue": 30}'
//! ```

use anyhow::{anyhow, Context};
use log::{debug, info};
use serde_json::{Map, Value};

use colorext::{Color, ColorArgs, MODULE};

fn main() -> anyhow::Result<()> {
    // Default filter is "warn" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let color = match tokens.first().map(String::as_str) {
        Some("--json") => {
            let raw = tokens.get(1).ok_or_else(|| anyhow!("--json requires an object argument"))?;
            let args: ColorArgs =
                serde_json::from_str(raw).with_context(|| format!("Failed to parse color arguments from '{}'", raw))?;
            Color::new(args)
        }
        _ => {
            let (args, kwargs) = split_tokens(&tokens);
            debug!("Positional: {:?}, keywords: {:?}", args, kwargs);
            let color_type = MODULE
                .get_type("Color")
                .ok_or_else(|| anyhow!("Color type is not registered"))?;
            color_type
                .call(&args, Some(&kwargs))
                .with_context(|| format!("Failed to construct {}", color_type.qualname))?
        }
    };

    info!("Constructed {:?}", color);
    println!("{}", color);
    println!("argb=0x{:08X}", color.argb());
    Ok(())
}

/// Splits `name=value` tokens into keywords and the rest into positionals.
/// Values are read as JSON scalars; anything else is passed on as a string.
fn split_tokens(tokens: &[String]) -> (Vec<Value>, Map<String, Value>) {
    let mut args = Vec::new();
    let mut kwargs = Map::new();
    for token in tokens {
        match token.split_once('=') {
            Some((name, raw)) => {
                kwargs.insert(name.to_string(), parse_value(raw));
            }
            None => args.push(parse_value(token)),
        }
    }
    (args, kwargs)
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
