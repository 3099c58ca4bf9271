//! Newsletter and subscription operations

use super::models::{DatedNewsletterSubscription, Newsletter, NewsletterSubscription};
use super::params;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::PaginatedData;
use crate::response::{Envelope, RequestBody, RequestContext};
use crate::schema::{Auth, Operation, Parameter, ResponseShape};
use crate::types::{JsonObject, JsonValue, Method, StringMap};
use std::collections::HashMap;

const LIMIT: Parameter = Parameter {
    name: "limit",
    description: "The number of newsletters to return per page. No more than 50.",
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
    name: "newsletters.list",
    description: "List newsletters",
    method: Method::GET,
    path: "/newsletter",
    path_params: &[],
    query_params: &[LIMIT, PAGE],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "PaginatedData<Newsletter>" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::None,
};

static GET: Operation = Operation {
    name: "newsletters.get",
    description: "Get newsletter",
    method: Method::GET,
    path: "/newsletter/:id",
    path_params: &[Parameter {
        name: "id",
        description: "A newsletter ID",
        type_name: "string",
        required: true,
        default: None,
    }],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "Newsletter" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::None,
};

static SUBSCRIBE: Operation = Operation {
    name: "newsletters.subscribe",
    description: "Subscribe to newsletter",
    method: Method::POST,
    path: "/newsletter/:id/subscribe",
    path_params: &[Parameter {
        name: "id",
        description: "A newsletter ID",
        type_name: "string",
        required: true,
        default: None,
    }],
    query_params: &[],
    body_params: &[
        Parameter {
            name: "email",
            description: "Subscriber's email address",
            type_name: "string",
            required: true,
            default: None,
        },
        Parameter {
            name: "data",
            description: "Additional data that this newsletter requires",
            type_name: "map<string, string | number | boolean>",
            required: false,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 201, type_name: "NewsletterSubscription" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 409, type_name: "Error(CONFLICT)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::None,
};

static UNSUBSCRIBE: Operation = Operation {
    name: "newsletters.unsubscribe",
    description: "Revoke a subscription (unsubscribe)",
    method: Method::POST,
    path: "/newsletters/unsubscribe",
    path_params: &[],
    query_params: &[],
    body_params: &[Parameter {
        name: "subscription",
        description: "The ID of the subscription to revoke",
        type_name: "string",
        required: true,
        default: None,
    }],
    returns: &[
        ResponseShape { status: 204, type_name: "()" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::None,
};

static LIST_SUBSCRIPTIONS: Operation = Operation {
    name: "newsletters.list_subscriptions",
    description: "List subscriptions of the authenticated user",
    method: Method::GET,
    path: "/newsletters/subscriptions",
    path_params: &[],
    query_params: &[LIMIT, PAGE],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "PaginatedData<DatedNewsletterSubscription>" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("newsletter.subscriptions.list.own"),
};

/// Newsletter and subscription operations
#[derive(Debug, Clone, Copy)]
pub struct Newsletters<'a> {
    client: &'a Client,
}

impl<'a> Newsletters<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List newsletters
    pub async fn list(&self, limit: u32, page: u64) -> Result<Envelope<PaginatedData<Newsletter>>> {
        let query = params([("limit", limit.to_string()), ("page", page.to_string())]);
        let ctx = RequestContext::new(&LIST, StringMap::new(), query, None);
        self.client.send(ctx, None).await
    }

    /// Get a newsletter
    pub async fn get(&self, id: impl Into<String>) -> Result<Envelope<Newsletter>> {
        let ctx = RequestContext::new(&GET, params([("id", id.into())]), StringMap::new(), None);
        self.client.send(ctx, None).await
    }

    /// Subscribe to a newsletter. `data` supplies any additional fields the
    /// newsletter declares as required.
    pub async fn subscribe(
        &self,
        id: impl Into<String>,
        email: impl Into<String>,
        data: Option<HashMap<String, JsonValue>>,
    ) -> Result<Envelope<NewsletterSubscription>> {
        let mut body = JsonObject::new();
        body.insert("email".to_string(), JsonValue::String(email.into()));
        if let Some(data) = data {
            body.insert("data".to_string(), serde_json::to_value(data)?);
        }
        let ctx = RequestContext::new(
            &SUBSCRIBE,
            params([("id", id.into())]),
            StringMap::new(),
            Some(RequestBody::Json(JsonValue::Object(body))),
        );
        self.client.send(ctx, None).await
    }

    /// Revoke a subscription (unsubscribe)
    pub async fn unsubscribe(&self, subscription: impl Into<String>) -> Result<Envelope<()>> {
        let subscription: String = subscription.into();
        let body = serde_json::json!({ "subscription": subscription });
        let ctx = RequestContext::new(
            &UNSUBSCRIBE,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// List subscriptions of the authenticated user.
    ///
    /// Requires the `newsletter.subscriptions.list.own` scope.
    pub async fn list_subscriptions(
        &self,
        limit: u32,
        page: u64,
    ) -> Result<Envelope<PaginatedData<DatedNewsletterSubscription>>> {
        let query = params([("limit", limit.to_string()), ("page", page.to_string())]);
        let ctx = RequestContext::new(&LIST_SUBSCRIPTIONS, StringMap::new(), query, None);
        self.client.send(ctx, None).await
    }
}
