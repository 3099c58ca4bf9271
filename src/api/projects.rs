//! Project operations

use super::models::Project;
use super::params;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::PaginatedData;
use crate::response::{Envelope, RequestBody, RequestContext};
use crate::schema::{Auth, Operation, Parameter, ResponseShape};
use crate::types::{Method, StringMap};

const PROJECT_ID: Parameter = Parameter {
    name: "id",
    description: "Project ID",
    type_name: "string",
    required: true,
    default: None,
};

const NAME: Parameter = Parameter {
    name: "name",
    description: "Project name. Max 255 characters.",
    type_name: "string",
    required: true,
    default: None,
};

static LIST: Operation = Operation {
    name: "projects.list",
    description: "List projects",
    method: Method::GET,
    path: "/projects",
    path_params: &[],
    query_params: &[
        Parameter {
            name: "limit",
            description: "The number of projects to return per page. No more than 100.",
            type_name: "number",
            required: false,
            default: Some("20"),
        },
        Parameter {
            name: "page",
            description: "The page number. No more than 2^32 (4294967296).",
            type_name: "number",
            required: false,
            default: Some("1"),
        },
    ],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "PaginatedData<Project>" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("projects.get.own"),
};

static CREATE: Operation = Operation {
    name: "projects.create",
    description: "Create a project",
    method: Method::POST,
    path: "/projects",
    path_params: &[],
    query_params: &[],
    body_params: &[NAME],
    returns: &[
        ResponseShape { status: 201, type_name: "Project" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("projects.create.own"),
};

static GET: Operation = Operation {
    name: "projects.get",
    description: "Get a project",
    method: Method::GET,
    path: "/projects/:id",
    path_params: &[PROJECT_ID],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "Project" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("projects.get.own"),
};

static UPDATE: Operation = Operation {
    name: "projects.update",
    description: "Update a project",
    method: Method::PATCH,
    path: "/projects/:id",
    path_params: &[PROJECT_ID],
    query_params: &[],
    body_params: &[NAME],
    returns: &[
        ResponseShape { status: 200, type_name: "Project" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("projects.update.own"),
};

static DELETE: Operation = Operation {
    name: "projects.delete",
    description: "Delete a project",
    method: Method::DELETE,
    path: "/projects/:id",
    path_params: &[PROJECT_ID],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 204, type_name: "()" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("projects.delete.own"),
};

/// Project operations
///
/// All of these require project scopes on the token.
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    client: &'a Client,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List projects
    pub async fn list(&self, limit: u32, page: u64) -> Result<Envelope<PaginatedData<Project>>> {
        let query = params([("limit", limit.to_string()), ("page", page.to_string())]);
        let ctx = RequestContext::new(&LIST, StringMap::new(), query, None);
        self.client.send(ctx, None).await
    }

    /// Create a project
    pub async fn create(&self, name: impl Into<String>) -> Result<Envelope<Project>> {
        let name: String = name.into();
        let body = serde_json::json!({ "name": name });
        let ctx = RequestContext::new(
            &CREATE,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// Get a project
    pub async fn get(&self, id: impl Into<String>) -> Result<Envelope<Project>> {
        let ctx = RequestContext::new(&GET, params([("id", id.into())]), StringMap::new(), None);
        self.client.send(ctx, None).await
    }

    /// Update a project
    pub async fn update(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Envelope<Project>> {
        let name: String = name.into();
        let body = serde_json::json!({ "name": name });
        let ctx = RequestContext::new(
            &UPDATE,
            params([("id", id.into())]),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// Delete a project
    pub async fn delete(&self, id: impl Into<String>) -> Result<Envelope<()>> {
        let ctx = RequestContext::new(&DELETE, params([("id", id.into())]), StringMap::new(), None);
        self.client.send(ctx, None).await
    }
}
