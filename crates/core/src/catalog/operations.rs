//! The Calendly operation table.
//!
//! One descriptor per endpoint. Parameter names and their order follow the
//! Calendly public API reference.

use super::types::{Method, Operation, ParamLocation, ResponseKind};

const fn read(
    name: &'static str,
    path: &'static str,
    path_params: &'static [&'static str],
    params: &'static [&'static str],
    summary: &'static str,
) -> Operation {
    Operation {
        name,
        method: Method::Get,
        path,
        path_params,
        params,
        location: ParamLocation::Query,
        response: ResponseKind::Json,
        summary,
    }
}

const fn create(
    name: &'static str,
    path: &'static str,
    path_params: &'static [&'static str],
    params: &'static [&'static str],
    response: ResponseKind,
    summary: &'static str,
) -> Operation {
    Operation {
        name,
        method: Method::Post,
        path,
        path_params,
        params,
        location: ParamLocation::Body,
        response,
        summary,
    }
}

const fn remove(
    name: &'static str,
    path: &'static str,
    path_params: &'static [&'static str],
    summary: &'static str,
) -> Operation {
    Operation {
        name,
        method: Method::Delete,
        path,
        path_params,
        params: &[],
        location: ParamLocation::Query,
        response: ResponseKind::NoContent,
        summary,
    }
}

/// Every operation exposed by the client.
pub static OPERATIONS: &[Operation] = &[
    // Scheduled events
    read(
        "list_event_invitees",
        "/scheduled_events/{uuid}/invitees",
        &["uuid"],
        &["status", "sort", "email", "page_token", "count"],
        "List invitees of a scheduled event",
    ),
    read(
        "get_event",
        "/scheduled_events/{uuid}",
        &["uuid"],
        &[],
        "Get a scheduled event",
    ),
    read(
        "get_event_invitee",
        "/scheduled_events/{event_uuid}/invitees/{invitee_uuid}",
        &["event_uuid", "invitee_uuid"],
        &[],
        "Get one invitee of a scheduled event",
    ),
    read(
        "list_events",
        "/scheduled_events",
        &[],
        &[
            "user",
            "organization",
            "invitee_email",
            "status",
            "sort",
            "min_start_time",
            "max_start_time",
            "page_token",
            "count",
            "group",
        ],
        "List scheduled events",
    ),
    // Event types
    read(
        "get_event_type",
        "/event_types/{uuid}",
        &["uuid"],
        &[],
        "Get an event type",
    ),
    read(
        "list_event_types",
        "/event_types",
        &[],
        &[
            "active",
            "organization",
            "user",
            "user_availability_schedule",
            "sort",
            "admin_managed",
            "page_token",
            "count",
        ],
        "List event types of a user or organization",
    ),
    read(
        "list_event_type_hosts",
        "/event_type_memberships",
        &[],
        &["event_type", "count", "page_token"],
        "List the hosts of an event type",
    ),
    read(
        "list_event_type_available_times",
        "/event_type_available_times",
        &[],
        &["event_type", "start_time", "end_time"],
        "List available start times for an event type",
    ),
    create(
        "create_one_off_event_type",
        "/one_off_event_types",
        &[],
        &[
            "co_hosts",
            "date_setting",
            "duration",
            "host",
            "location",
            "name",
            "timezone",
        ],
        ResponseKind::Json,
        "Create a one-off event type",
    ),
    create(
        "create_share",
        "/shares",
        &[],
        &[
            "availability_rule",
            "duration",
            "end_date",
            "event_type",
            "hide_location",
            "location_configurations",
            "max_booking_time",
            "name",
            "period_type",
            "start_date",
        ],
        ResponseKind::Json,
        "Create a customized share of an event type",
    ),
    // Users
    read("get_user", "/users/{uuid}", &["uuid"], &[], "Get a user"),
    read(
        "get_current_user",
        "/users/me",
        &[],
        &[],
        "Get the user the credential belongs to",
    ),
    read(
        "list_user_busy_times",
        "/user_busy_times",
        &[],
        &["user", "start_time", "end_time"],
        "List a user's busy time ranges",
    ),
    read(
        "get_user_availability_schedule",
        "/user_availability_schedules/{uuid}",
        &["uuid"],
        &[],
        "Get an availability schedule",
    ),
    read(
        "list_user_availability_schedules",
        "/user_availability_schedules",
        &[],
        &["user"],
        "List a user's availability schedules",
    ),
    // Organizations
    read(
        "list_organization_invitations",
        "/organizations/{uuid}/invitations",
        &["uuid"],
        &["count", "page_token", "sort", "email", "status"],
        "List invitations of an organization",
    ),
    create(
        "invite_user_to_organization",
        "/organizations/{uuid}/invitations",
        &["uuid"],
        &["email"],
        ResponseKind::Json,
        "Invite a user to an organization",
    ),
    read(
        "get_organization_invitation",
        "/organizations/{org_uuid}/invitations/{uuid}",
        &["org_uuid", "uuid"],
        &[],
        "Get an organization invitation",
    ),
    remove(
        "revoke_organization_invitation",
        "/organizations/{org_uuid}/invitations/{uuid}",
        &["org_uuid", "uuid"],
        "Revoke an organization invitation",
    ),
    read(
        "get_organization_membership",
        "/organization_memberships/{uuid}",
        &["uuid"],
        &[],
        "Get an organization membership",
    ),
    remove(
        "remove_user_from_organization",
        "/organization_memberships/{uuid}",
        &["uuid"],
        "Remove a user from an organization",
    ),
    read(
        "list_organization_memberships",
        "/organization_memberships",
        &[],
        &["page_token", "count", "email", "organization", "user"],
        "List organization memberships",
    ),
    // Webhooks
    read(
        "get_webhook_subscription",
        "/webhook_subscriptions/{webhook_uuid}",
        &["webhook_uuid"],
        &[],
        "Get a webhook subscription",
    ),
    remove(
        "delete_webhook_subscription",
        "/webhook_subscriptions/{webhook_uuid}",
        &["webhook_uuid"],
        "Delete a webhook subscription",
    ),
    read(
        "list_webhook_subscriptions",
        "/webhook_subscriptions",
        &[],
        &["organization", "user", "page_token", "count", "sort", "scope"],
        "List webhook subscriptions",
    ),
    create(
        "create_webhook_subscription",
        "/webhook_subscriptions",
        &[],
        &[
            "events",
            "group",
            "organization",
            "scope",
            "signing_key",
            "url",
            "user",
        ],
        ResponseKind::Json,
        "Create a webhook subscription",
    ),
    read(
        "get_sample_webhook_data",
        "/sample_webhook_data",
        &[],
        &["event", "organization", "user", "scope"],
        "Get a sample webhook payload",
    ),
    // Scheduling links
    create(
        "create_single_use_scheduling_link",
        "/scheduling_links",
        &[],
        &["max_event_count", "owner", "owner_type"],
        ResponseKind::Json,
        "Create a single-use scheduling link",
    ),
    // Data compliance
    create(
        "delete_invitee_data",
        "/data_compliance/deletion/invitees",
        &[],
        &["emails"],
        ResponseKind::NoContent,
        "Request deletion of invitee data",
    ),
    create(
        "delete_scheduled_event_data",
        "/data_compliance/deletion/events",
        &[],
        &["end_time", "start_time"],
        ResponseKind::NoContent,
        "Request deletion of scheduled event data in a time range",
    ),
    // Invitee no-shows
    read(
        "get_invitee_no_show",
        "/invitee_no_shows/{uuid}",
        &["uuid"],
        &[],
        "Get an invitee no-show",
    ),
    remove(
        "delete_invitee_no_show",
        "/invitee_no_shows/{uuid}",
        &["uuid"],
        "Undo an invitee no-show",
    ),
    create(
        "create_invitee_no_show",
        "/invitee_no_shows",
        &[],
        &["invitee"],
        ResponseKind::Json,
        "Mark an invitee as a no-show",
    ),
    // Groups
    read("get_group", "/groups/{uuid}", &["uuid"], &[], "Get a group"),
    read(
        "list_groups",
        "/groups",
        &[],
        &["organization", "page_token", "count"],
        "List groups of an organization",
    ),
    read(
        "get_group_relationship",
        "/group_relationships/{uuid}",
        &["uuid"],
        &[],
        "Get a group relationship",
    ),
    read(
        "list_group_relationships",
        "/group_relationships",
        &[],
        &["count", "page_token", "organization", "owner", "group"],
        "List group relationships",
    ),
    // Routing forms
    read(
        "get_routing_form",
        "/routing_forms/{uuid}",
        &["uuid"],
        &[],
        "Get a routing form",
    ),
    read(
        "list_routing_forms",
        "/routing_forms",
        &[],
        &["organization", "count", "page_token", "sort"],
        "List routing forms of an organization",
    ),
    read(
        "get_routing_form_submission",
        "/routing_form_submissions/{uuid}",
        &["uuid"],
        &[],
        "Get a routing form submission",
    ),
    read(
        "list_routing_form_submissions",
        "/routing_form_submissions",
        &[],
        &["form", "count", "page_token", "sort"],
        "List submissions of a routing form",
    ),
    // Activity log
    read(
        "list_activity_log_entries",
        "/activity_log_entries",
        &[],
        &[
            "organization",
            "search_term",
            "actor",
            "sort",
            "min_occurred_at",
            "max_occurred_at",
            "page_token",
            "count",
            "namespace",
            "action",
        ],
        "List activity log entries of an organization",
    ),
];

/// Find an operation by name.
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Placeholder names embedded in a path template, in order of appearance.
pub fn template_placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        names.push(&rest[start + 1..start + len]);
        rest = &rest[start + len + 1..];
    }
    names
}
