//! Organization invitations and memberships.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::values::InvitationStatus;
use calendly_core::{Params, PathParams};
use serde_json::Value;

/// Query parameters for listing organization invitations.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListInvitationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvitationStatus>,
}

/// Request for inviting a user to an organization.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct InviteUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl InviteUserRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// Query parameters for listing organization memberships.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListMembershipsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

fn invitation_path(org_uuid: &str, uuid: &str) -> PathParams {
    PathParams::new()
        .with("org_uuid", org_uuid)
        .with("uuid", uuid)
}

impl<T: Transport> CalendlyClient<T> {
    /// List invitations of an organization.
    pub async fn list_organization_invitations(
        &self,
        uuid: &str,
        query: &ListInvitationsQuery,
    ) -> Result<Value> {
        self.call_with(
            "list_organization_invitations",
            PathParams::new().with("uuid", uuid),
            query,
        )
        .await
    }

    /// Invite a user to an organization by email.
    pub async fn invite_user_to_organization(
        &self,
        uuid: &str,
        req: &InviteUserRequest,
    ) -> Result<Value> {
        self.call_with(
            "invite_user_to_organization",
            PathParams::new().with("uuid", uuid),
            req,
        )
        .await
    }

    /// Get an organization invitation.
    pub async fn get_organization_invitation(&self, org_uuid: &str, uuid: &str) -> Result<Value> {
        self.call(
            "get_organization_invitation",
            invitation_path(org_uuid, uuid),
            Params::new(),
        )
        .await
    }

    /// Revoke a pending organization invitation.
    pub async fn revoke_organization_invitation(
        &self,
        org_uuid: &str,
        uuid: &str,
    ) -> Result<Value> {
        self.call(
            "revoke_organization_invitation",
            invitation_path(org_uuid, uuid),
            Params::new(),
        )
        .await
    }

    /// Get organization membership by UUID.
    pub async fn get_organization_membership(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_organization_membership", uuid).await
    }

    /// Remove a user from an organization by membership UUID.
    pub async fn remove_user_from_organization(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("remove_user_from_organization", uuid)
            .await
    }

    /// List organization memberships.
    pub async fn list_organization_memberships(
        &self,
        query: &ListMembershipsQuery,
    ) -> Result<Value> {
        self.call_with("list_organization_memberships", PathParams::new(), query)
            .await
    }
}
