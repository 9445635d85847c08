//! Request assembly.
//!
//! Pure functions turning an [`Operation`] plus caller parameters into a
//! fully resolved [`Request`]. Nothing here performs I/O.

use std::collections::HashMap;

use serde_json::{Map, Value};
use url::Url;

use super::{BuildError, Params, PathParams};
use crate::catalog::{Method, Operation, ParamLocation};

/// A resolved request, ready for a transport to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation: &'static str,
    pub method: Method,
    pub url: Url,
    /// JSON body. Always `Some` for body-carrying operations, even when empty.
    pub body: Option<Map<String, Value>>,
}

impl Request {
    /// Decoded query pairs in wire order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// The URL path, without the query string.
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// Assemble a request for `operation` against `base_url`.
///
/// Fails without side effects when a path parameter is missing, blank or a
/// dot segment, or when `params` names a parameter the operation does not
/// declare. Absent
/// parameters are dropped; present ones are emitted in catalog order.
pub fn build_request(
    base_url: &Url,
    operation: &'static Operation,
    path: &PathParams,
    params: &Params,
) -> Result<Request, BuildError> {
    let resolved = resolve_path(operation, path)?;

    if let Some(name) = params.names().find(|name| !operation.accepts(name)) {
        return Err(BuildError::UnknownParameter {
            operation: operation.name,
            name: name.to_string(),
        });
    }

    let mut url = join_url(base_url, &resolved)?;

    let body = match operation.location {
        ParamLocation::Query => {
            let pairs = query_pairs(operation, params);
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
            None
        }
        ParamLocation::Body => Some(body_fields(operation, params)),
    };

    Ok(Request {
        operation: operation.name,
        method: operation.method,
        url,
        body,
    })
}

/// Substitute every `{placeholder}` in the operation's path template.
pub fn resolve_path(operation: &Operation, path: &PathParams) -> Result<String, BuildError> {
    let mut resolved = operation.path.to_string();
    for name in operation.path_params {
        let value = path
            .get(name)
            .ok_or_else(|| BuildError::MissingParameter(name.to_string()))?;
        if is_dot_segment(value) {
            return Err(BuildError::InvalidParameter {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        resolved = resolved.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    Ok(resolved)
}

/// `.` and `..` survive percent-encoding and are collapsed by URL parsing.
fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

fn join_url(base_url: &Url, path: &str) -> Result<Url, BuildError> {
    let mut origin = base_url.clone();
    origin.set_query(None);
    origin.set_fragment(None);
    let joined = format!("{}{}", origin.as_str().trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| BuildError::InvalidUrl(format!("{joined}: {e}")))
}

/// Present parameters, keyed by name.
fn present_params(params: &Params) -> HashMap<&str, &Value> {
    params.present().collect()
}

fn query_pairs(operation: &Operation, params: &Params) -> Vec<(&'static str, String)> {
    let present = present_params(params);
    let mut pairs = Vec::new();
    for name in operation.params {
        match present.get(name).copied() {
            Some(Value::Array(items)) => {
                pairs.extend(items.iter().map(|item| (*name, query_value(item))));
            }
            Some(value) => pairs.push((*name, query_value(value))),
            None => {}
        }
    }
    pairs
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn body_fields(operation: &Operation, params: &Params) -> Map<String, Value> {
    let present = present_params(params);
    operation
        .params
        .iter()
        .filter_map(|name| present.get(name).map(|v| (name.to_string(), (*v).clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::find_operation;

    fn base() -> Url {
        Url::parse("https://api.calendly.com").unwrap()
    }

    fn op(name: &str) -> &'static Operation {
        find_operation(name).unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let request = build_request(
            &base(),
            op("get_event"),
            &PathParams::new().with("uuid", "abc-123"),
            &Params::new(),
        )
        .unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://api.calendly.com/scheduled_events/abc-123"
        );
        assert!(request.body.is_none());
        assert!(request.query_pairs().is_empty());
    }

    #[test]
    fn test_list_emits_only_present_params_in_catalog_order() {
        let params = Params::new()
            .with("count", 20)
            .with("status", "active")
            .with_opt("user", None::<String>);
        let request = build_request(&base(), op("list_events"), &PathParams::new(), &params)
            .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://api.calendly.com/scheduled_events?status=active&count=20"
        );
    }

    #[test]
    fn test_falsy_values_are_sent() {
        let params = Params::new()
            .with("active", false)
            .with("count", 0)
            .with("sort", "");
        let request = build_request(&base(), op("list_event_types"), &PathParams::new(), &params)
            .unwrap();

        assert_eq!(
            request.query_pairs(),
            vec![
                ("active".to_string(), "false".to_string()),
                ("sort".to_string(), String::new()),
                ("count".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_array_params_repeat_the_key() {
        let params = Params::new().with("action", json!(["Add", "Remove"]));
        let request = build_request(
            &base(),
            op("list_activity_log_entries"),
            &PathParams::new(),
            &params,
        )
        .unwrap();

        assert_eq!(
            request.url.query(),
            Some("action=Add&action=Remove")
        );
    }

    #[test]
    fn test_post_body_contains_only_present_fields() {
        let request = build_request(
            &base(),
            op("invite_user_to_organization"),
            &PathParams::new().with("uuid", "org-1"),
            &Params::new().with("email", "a@b.com"),
        )
        .unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url.as_str(),
            "https://api.calendly.com/organizations/org-1/invitations"
        );
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({ "email": "a@b.com" })
        );
    }

    #[test]
    fn test_post_without_fields_sends_empty_object() {
        let request = build_request(
            &base(),
            op("create_invitee_no_show"),
            &PathParams::new(),
            &Params::new().with_opt("invitee", None::<String>),
        )
        .unwrap();

        assert_eq!(request.body, Some(Map::new()));
        assert!(request.url.query().is_none());
    }

    #[test]
    fn test_delete_has_no_body() {
        let request = build_request(
            &base(),
            op("remove_user_from_organization"),
            &PathParams::new().with("uuid", "mem-1"),
            &Params::new(),
        )
        .unwrap();

        assert_eq!(request.method, Method::Delete);
        assert_eq!(
            request.url.as_str(),
            "https://api.calendly.com/organization_memberships/mem-1"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_missing_path_param() {
        let result = build_request(
            &base(),
            op("get_event_invitee"),
            &PathParams::new().with("event_uuid", "ev-1"),
            &Params::new(),
        );

        assert_eq!(
            result.unwrap_err(),
            BuildError::MissingParameter("invitee_uuid".to_string())
        );
    }

    #[test]
    fn test_first_missing_path_param_is_reported() {
        let result = build_request(
            &base(),
            op("revoke_organization_invitation"),
            &PathParams::new(),
            &Params::new(),
        );

        assert_eq!(
            result.unwrap_err(),
            BuildError::MissingParameter("org_uuid".to_string())
        );
    }

    #[test]
    fn test_unknown_param_is_rejected() {
        let result = build_request(
            &base(),
            op("get_event"),
            &PathParams::new().with("uuid", "abc"),
            &Params::new().with("status", "active"),
        );

        assert!(matches!(
            result,
            Err(BuildError::UnknownParameter { operation: "get_event", .. })
        ));
    }

    #[test]
    fn test_path_values_are_percent_encoded() {
        let path = resolve_path(
            op("get_user"),
            &PathParams::new().with("uuid", "a/b c"),
        )
        .unwrap();
        assert_eq!(path, "/users/a%2Fb%20c");
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for (op_name, path) in [
            (
                "remove_user_from_organization",
                PathParams::new().with("uuid", ".."),
            ),
            (
                "get_event_invitee",
                PathParams::new()
                    .with("event_uuid", "..")
                    .with("invitee_uuid", "x"),
            ),
            ("get_user", PathParams::new().with("uuid", ".")),
        ] {
            let result = build_request(&base(), op(op_name), &path, &Params::new());
            assert!(
                matches!(result, Err(BuildError::InvalidParameter { .. })),
                "{op_name}: {result:?}"
            );
        }
    }

    #[test]
    fn test_dots_inside_identifiers_are_kept() {
        let path = resolve_path(op("get_user"), &PathParams::new().with("uuid", "a..b")).unwrap();
        assert_eq!(path, "/users/a..b");
    }

    #[test]
    fn test_post_body_keeps_falsy_fields() {
        let request = build_request(
            &base(),
            op("create_share"),
            &PathParams::new(),
            &Params::new()
                .with("hide_location", false)
                .with("duration", 0)
                .with("name", "")
                .with_opt("event_type", None::<String>),
        )
        .unwrap();

        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({ "duration": 0, "hide_location": false, "name": "" })
        );
    }

    #[test]
    fn test_base_url_query_and_fragment_are_dropped() {
        let base = Url::parse("http://127.0.0.1:8080/?x=1#frag").unwrap();
        let request = build_request(
            &base,
            op("list_groups"),
            &PathParams::new(),
            &Params::new().with("count", 5),
        )
        .unwrap();
        assert_eq!(request.url.as_str(), "http://127.0.0.1:8080/groups?count=5");
    }

    #[test]
    fn test_base_url_with_trailing_slash_and_prefix() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();
        let request = build_request(&base, op("get_current_user"), &PathParams::new(), &Params::new())
            .unwrap();
        assert_eq!(request.url.as_str(), "http://127.0.0.1:8080/proxy/users/me");
    }
}
