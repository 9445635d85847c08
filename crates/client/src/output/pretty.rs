//! Pretty output formatting.

use calendly_core::Operation;
use serde_json::{Map, Value};

/// Fields shown under a resource title, when present.
const DETAIL_FIELDS: &[(&str, &str)] = &[
    ("uri", "URI"),
    ("status", "Status"),
    ("email", "Email"),
    ("start_time", "Start"),
    ("end_time", "End"),
    ("scheduling_url", "Scheduling URL"),
    ("booking_url", "Booking URL"),
    ("created_at", "Created"),
];

/// Format an API response for display.
///
/// Calendly wraps single objects in `resource` and lists in `collection` +
/// `pagination`; anything else is printed as indented JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "No content.".to_string(),
        Value::Object(map) => match (map.get("resource"), map.get("collection")) {
            (Some(Value::Object(resource)), _) => format_resource(resource),
            (_, Some(Value::Array(items))) => format_collection(items, map.get("pagination")),
            _ => indented(value),
        },
        other => indented(other),
    }
}

/// Format a single resource for display.
pub fn format_resource(resource: &Map<String, Value>) -> String {
    let mut output = resource_title(resource);
    for (key, label) in DETAIL_FIELDS {
        if let Some(value) = resource.get(*key).and_then(scalar) {
            output.push_str(&format!("\n  {}: {}", label, value));
        }
    }
    output
}

/// Format a page of resources for display.
pub fn format_collection(items: &[Value], pagination: Option<&Value>) -> String {
    if items.is_empty() {
        return "No results found.".to_string();
    }
    let mut output = format!("RESULTS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        let formatted = match item {
            Value::Object(resource) => format_resource(resource),
            other => indented(other),
        };
        output.push_str(&format!("\n{}", formatted));
        output.push('\n');
    }
    if let Some(token) = pagination
        .and_then(|p| p.get("next_page_token"))
        .and_then(Value::as_str)
    {
        output.push_str(&format!("\nNext page token: {}", token));
    }
    output
}

/// Format the operation catalog for display.
pub fn format_operations(operations: &[Operation]) -> String {
    let mut output = format!("OPERATIONS ({})\n", operations.len());
    output.push_str(&"-".repeat(40));
    for op in operations {
        output.push_str(&format!("\n{} {} {}", op.name, op.method, op.path));
        output.push_str(&format!("\n  {}", op.summary));
        if !op.params.is_empty() {
            output.push_str(&format!("\n  Params: {}", op.params.join(", ")));
        }
        output.push('\n');
    }
    output
}

fn resource_title(resource: &Map<String, Value>) -> String {
    ["name", "email", "uri"]
        .iter()
        .find_map(|key| resource.get(*key).and_then(Value::as_str))
        .unwrap_or("(unnamed)")
        .to_string()
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn indented(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
