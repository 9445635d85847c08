//! Generic operation call.

use calendly_core::{Params, PathParams};
use clap::Parser;
use serde_json::Value;

/// Run any catalog operation by name.
#[derive(Debug, Parser)]
pub struct CallCommand {
    /// Operation name, as printed by `operations`.
    pub operation: String,

    /// Path parameter (repeatable).
    #[arg(long = "path", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub path: Vec<(String, String)>,

    /// Query or body parameter (repeatable). Values that parse as JSON are
    /// sent as JSON, anything else as a string.
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

impl CallCommand {
    pub fn path_params(&self) -> PathParams {
        self.path
            .iter()
            .fold(PathParams::new(), |acc, (name, value)| {
                acc.with(name.as_str(), value.as_str())
            })
    }

    pub fn params(&self) -> Params {
        self.params
            .iter()
            .fold(Params::new(), |acc, (name, value)| {
                acc.with(name.as_str(), parse_value(value))
            })
    }
}

/// Split `name=value` at the first `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
