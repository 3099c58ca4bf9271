//! Token management operations

use super::models::{PartialToken, RequestDetails, ShortRequest, Token};
use super::params;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::PaginatedData;
use crate::response::{Envelope, RequestBody, RequestContext};
use crate::schema::{Auth, Operation, Parameter, ResponseShape};
use crate::types::{JsonObject, JsonValue, Method, StringMap};

const TOKEN_ID: Parameter = Parameter {
    name: "id",
    description: "The ID of the token. Specify `current` for the token that \
                  was used to authenticate the request.",
    type_name: "string | \"current\"",
    required: true,
    default: None,
};

const LIMIT: Parameter = Parameter {
    name: "limit",
    description: "The number of items to return per page. No more than 50.",
    type_name: "number",
    required: false,
    default: Some("10"),
};

const PAGE: Parameter = Parameter {
    name: "page",
    description: "The page number. No more than 2^32 (4294967296).",
    type_name: "number",
    required: false,
    default: Some("1"),
};

static LIST: Operation = Operation {
    name: "tokens.list",
    description: "List tokens of user",
    method: Method::GET,
    path: "/token",
    path_params: &[],
    query_params: &[
        LIMIT,
        PAGE,
        Parameter {
            name: "internal",
            description: "Internal tokens are returned as well if this parameter is present.",
            type_name: "any",
            required: false,
            default: None,
        },
    ],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "PaginatedData<PartialToken>" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("tokens.list.own"),
};

static CREATE: Operation = Operation {
    name: "tokens.create",
    description: "Create token",
    method: Method::POST,
    path: "/token",
    path_params: &[],
    query_params: &[],
    body_params: &[
        Parameter {
            name: "permissions",
            description: "List of permissions to grant to the token. You must \
                          already have each of these permissions with your \
                          current token.",
            type_name: "string[]",
            required: true,
            default: None,
        },
        Parameter {
            name: "lifetime",
            description: "Lifetime of the token in seconds. If null, the token \
                          will never expire (not recommended). Max: 31560000 \
                          (1 year). Min: 60 (1 minute).",
            type_name: "number",
            required: true,
            default: None,
        },
        Parameter {
            name: "note",
            description: "A user-specified note to label the token. Max length: \
                          2^8 (256) characters.",
            type_name: "string",
            required: false,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 201, type_name: "Token" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("tokens.create.own"),
};

static GET: Operation = Operation {
    name: "tokens.get",
    description: "Get token details",
    method: Method::GET,
    path: "/token/:id",
    path_params: &[TOKEN_ID],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "Token" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("tokens.get.own"),
};

static REVOKE: Operation = Operation {
    name: "tokens.revoke",
    description: "Revoke token",
    method: Method::DELETE,
    path: "/token/:id",
    path_params: &[TOKEN_ID],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 204, type_name: "()" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 400, type_name: "Error(MODIFICATION_NOT_ALLOWED)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("tokens.revoke.own"),
};

static LIST_REQUESTS: Operation = Operation {
    name: "tokens.list_requests",
    description: "Get list of recent requests made with the token",
    method: Method::GET,
    path: "/token/:id/requests",
    path_params: &[TOKEN_ID],
    query_params: &[LIMIT, PAGE],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "PaginatedData<ShortRequest>" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("tokens.get.own.requests"),
};

static GET_REQUEST: Operation = Operation {
    name: "tokens.get_request",
    description: "Get a recent request by ID",
    method: Method::GET,
    path: "/token/:id/requests/:request",
    path_params: &[
        TOKEN_ID,
        Parameter {
            name: "request",
            description: "The ID of the request.",
            type_name: "string",
            required: true,
            default: None,
        },
    ],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "RequestDetails" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("tokens.get.own.requests"),
};

static REFRESH: Operation = Operation {
    name: "tokens.refresh",
    description: "Refresh current token. The token that was used to \
                  authenticate the request will be deleted. A new token with a \
                  new ID but the same permissions will be created and returned. \
                  The lifespan of the new token will be the same as the old \
                  one, starting from the time of the request.",
    method: Method::POST,
    path: "/token/refresh",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 201, type_name: "Token" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("token.refresh"),
};

/// Token management operations
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    client: &'a Client,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List tokens of the authenticated user. With `internal`, internal
    /// tokens (e.g. session tokens) are returned as well.
    ///
    /// Requires the `tokens.list.own` scope.
    pub async fn list(
        &self,
        limit: u32,
        page: u64,
        internal: bool,
    ) -> Result<Envelope<PaginatedData<PartialToken>>> {
        let mut query = params([("limit", limit.to_string()), ("page", page.to_string())]);
        if internal {
            query.insert("internal".to_string(), "true".to_string());
        }
        let ctx = RequestContext::new(&LIST, StringMap::new(), query, None);
        self.client.send(ctx, None).await
    }

    /// Create a token. A `lifetime` of `None` means the token never expires
    /// (not recommended).
    ///
    /// Requires the `tokens.create.own` scope.
    pub async fn create(
        &self,
        permissions: Vec<String>,
        lifetime: Option<u64>,
        note: Option<String>,
    ) -> Result<Envelope<Token>> {
        let mut body = JsonObject::new();
        body.insert("permissions".to_string(), serde_json::to_value(permissions)?);
        body.insert("lifetime".to_string(), serde_json::to_value(lifetime)?);
        if let Some(note) = note {
            body.insert("note".to_string(), JsonValue::String(note));
        }
        let ctx = RequestContext::new(
            &CREATE,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(JsonValue::Object(body))),
        );
        self.client.send(ctx, None).await
    }

    /// Get token details.
    ///
    /// Requires the `tokens.get.own` scope.
    pub async fn get(&self, id: impl Into<String>) -> Result<Envelope<Token>> {
        let ctx = RequestContext::new(&GET, params([("id", id.into())]), StringMap::new(), None);
        self.client.send(ctx, None).await
    }

    /// Revoke a token.
    ///
    /// Requires the `tokens.revoke.own` scope.
    pub async fn revoke(&self, id: impl Into<String>) -> Result<Envelope<()>> {
        let ctx = RequestContext::new(&REVOKE, params([("id", id.into())]), StringMap::new(), None);
        self.client.send(ctx, None).await
    }

    /// List recent requests made with a token.
    ///
    /// Requires the `tokens.get.own.requests` scope.
    pub async fn list_requests(
        &self,
        id: impl Into<String>,
        limit: u32,
        page: u64,
    ) -> Result<Envelope<PaginatedData<ShortRequest>>> {
        let query = params([("limit", limit.to_string()), ("page", page.to_string())]);
        let ctx = RequestContext::new(&LIST_REQUESTS, params([("id", id.into())]), query, None);
        self.client.send(ctx, None).await
    }

    /// Get a recent request by ID.
    ///
    /// Requires the `tokens.get.own.requests` scope.
    pub async fn get_request(
        &self,
        id: impl Into<String>,
        request: impl Into<String>,
    ) -> Result<Envelope<RequestDetails>> {
        let ctx = RequestContext::new(
            &GET_REQUEST,
            params([("id", id.into()), ("request", request.into())]),
            StringMap::new(),
            None,
        );
        self.client.send(ctx, None).await
    }

    /// Refresh the current token: it is deleted and replaced by a new one
    /// with the same permissions and lifespan, counted from now.
    ///
    /// Requires the `token.refresh` scope.
    pub async fn refresh(&self) -> Result<Envelope<Token>> {
        self.client.send(RequestContext::bare(&REFRESH), None).await
    }
}
