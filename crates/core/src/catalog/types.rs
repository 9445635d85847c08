use std::fmt;

use serde::Serialize;

/// HTTP method used by a catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Upper-case method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an operation's optional parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    /// Appended to the URL as a query string.
    Query,
    /// Sent as a JSON object in the request body.
    Body,
}

/// Shape of a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// The body must be a JSON document.
    Json,
    /// The body may be empty; when present it is decoded as JSON.
    NoContent,
}

/// Static descriptor of one Calendly API call.
///
/// `path` is a template whose `{name}` segments are filled from
/// `path_params`. `params` lists the optional parameter names in the order
/// they are emitted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub path_params: &'static [&'static str],
    pub params: &'static [&'static str],
    pub location: ParamLocation,
    pub response: ResponseKind,
    pub summary: &'static str,
}

impl Operation {
    /// Whether `name` is one of this operation's optional parameters.
    pub fn accepts(&self, name: &str) -> bool {
        self.params.contains(&name)
    }
}
