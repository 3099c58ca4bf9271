//! Operations on the authenticated account

use super::models::{
    AccountDetails, AccountEmail, AccountIdentity, DatedPrimaryEmail, Permission,
};
use crate::client::Client;
use crate::error::Result;
use crate::response::{Envelope, RequestBody, RequestContext};
use crate::schema::{Auth, Operation, Parameter, ResponseShape};
use crate::types::{JsonObject, JsonValue, Method, StringMap};

const USERNAME: Parameter = Parameter {
    name: "username",
    description: "Your unique username. Between 3 and 64 characters. Only \
                  letters, numbers, dashes and underscores. May not start \
                  with `user_`.",
    type_name: "string",
    required: true,
    default: None,
};

static GET: Operation = Operation {
    name: "account.get",
    description: "Get account details",
    method: Method::GET,
    path: "/account",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "AccountDetails" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details"),
};

static GET_IDENTITY: Operation = Operation {
    name: "account.get_identity",
    description: "Get account identity",
    method: Method::GET,
    path: "/account/identity",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "AccountIdentity" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.identity"),
};

static UPDATE_IDENTITY: Operation = Operation {
    name: "account.update_identity",
    description: "Update account identity",
    method: Method::PATCH,
    path: "/account/identity",
    path_params: &[],
    query_params: &[],
    body_params: &[
        USERNAME,
        Parameter {
            name: "name",
            description: "Your full name. Set to `null` to remove.",
            type_name: "string | null",
            required: false,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 200, type_name: "AccountIdentity" },
        ResponseShape { status: 204, type_name: "()" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 409, type_name: "Error(CONFLICT)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.identity.update"),
};

static REPLACE_IDENTITY: Operation = Operation {
    name: "account.replace_identity",
    description: "Replace account identity",
    method: Method::PUT,
    path: "/account/identity",
    path_params: &[],
    query_params: &[],
    body_params: &[
        USERNAME,
        Parameter {
            name: "name",
            description: "Your full name. Set to `null` to remove.",
            type_name: "string | null",
            required: true,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 200, type_name: "AccountIdentity" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 409, type_name: "Error(CONFLICT)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.identity.update"),
};

static LIST_EMAILS: Operation = Operation {
    name: "account.list_emails",
    description: "List account e-mail addresses",
    method: Method::GET,
    path: "/account/email",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "Vec<AccountEmail>" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.email.list"),
};

static GET_EMAIL: Operation = Operation {
    name: "account.get_email",
    description: "Get your primary e-mail address",
    method: Method::GET,
    path: "/account/email/primary",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "DatedPrimaryEmail" },
        ResponseShape { status: 404, type_name: "Error(RESOURCE_NOT_FOUND)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.email"),
};

static SET_EMAIL: Operation = Operation {
    name: "account.set_email",
    description: "Set your primary e-mail address",
    method: Method::PUT,
    path: "/account/email/primary",
    path_params: &[],
    query_params: &[],
    body_params: &[Parameter {
        name: "email",
        description: "E-mail address to set as primary.",
        type_name: "string",
        required: true,
        default: None,
    }],
    returns: &[
        ResponseShape { status: 204, type_name: "()" },
        ResponseShape { status: 409, type_name: "Error(CONFLICT)" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.email.update"),
};

static CHANGE_PASSWORD: Operation = Operation {
    name: "account.change_password",
    description: "Change account password",
    method: Method::PUT,
    path: "/account/password",
    path_params: &[],
    query_params: &[],
    body_params: &[
        Parameter {
            name: "currentPassword",
            description: "Your current password.",
            type_name: "string",
            required: true,
            default: None,
        },
        Parameter {
            name: "newPassword",
            description: "The new password. Must be at least 15 characters, or \
                          8 characters if it contains a mix of letters, numbers \
                          and symbols.",
            type_name: "string",
            required: true,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 204, type_name: "()" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details.password.update"),
};

static LIST_PERMISSIONS: Operation = Operation {
    name: "account.list_permissions",
    description: "List account permissions with user-friendly descriptions. \
                  Some permissions (such as wildcard ones) may be excluded in \
                  this list if they don't have a description.",
    method: Method::GET,
    path: "/account/permissions",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[
        ResponseShape { status: 200, type_name: "Vec<Permission>" },
        ResponseShape { status: 401, type_name: "Error(UNAUTHORIZED)" },
        ResponseShape { status: 403, type_name: "Error(NO_PERMISSION)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: Auth::Scope("account.details"),
};

/// Operations on the authenticated account
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    client: &'a Client,
}

impl<'a> Account<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get account details.
    ///
    /// Requires the `account.details` scope.
    pub async fn get(&self) -> Result<Envelope<AccountDetails>> {
        self.client.send(RequestContext::bare(&GET), None).await
    }

    /// Get the account identity.
    ///
    /// Requires the `account.details.identity` scope.
    pub async fn get_identity(&self) -> Result<Envelope<AccountIdentity>> {
        self.client
            .send(RequestContext::bare(&GET_IDENTITY), None)
            .await
    }

    /// Update the account identity. A `name` of `None` leaves the full name
    /// unchanged; the data is `None` when the server answered 204 because
    /// nothing was changed.
    ///
    /// Requires the `account.details.identity.update` scope.
    pub async fn update_identity(
        &self,
        username: impl Into<String>,
        name: Option<String>,
    ) -> Result<Envelope<Option<AccountIdentity>>> {
        let mut body = JsonObject::new();
        body.insert("username".to_string(), JsonValue::String(username.into()));
        if let Some(name) = name {
            body.insert("name".to_string(), JsonValue::String(name));
        }
        let ctx = RequestContext::new(
            &UPDATE_IDENTITY,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(JsonValue::Object(body))),
        );
        self.client.send(ctx, None).await
    }

    /// Replace the account identity. A `name` of `None` removes the full
    /// name.
    ///
    /// Requires the `account.details.identity.update` scope.
    pub async fn replace_identity(
        &self,
        username: impl Into<String>,
        name: Option<String>,
    ) -> Result<Envelope<AccountIdentity>> {
        let username: String = username.into();
        let body = serde_json::json!({
            "username": username,
            "name": name,
        });
        let ctx = RequestContext::new(
            &REPLACE_IDENTITY,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// List account e-mail addresses.
    ///
    /// Requires the `account.details.email.list` scope.
    pub async fn list_emails(&self) -> Result<Envelope<Vec<AccountEmail>>> {
        self.client
            .send(RequestContext::bare(&LIST_EMAILS), None)
            .await
    }

    /// Get the primary e-mail address.
    ///
    /// Requires the `account.details.email` scope.
    pub async fn get_email(&self) -> Result<Envelope<DatedPrimaryEmail>> {
        self.client
            .send(RequestContext::bare(&GET_EMAIL), None)
            .await
    }

    /// Set the primary e-mail address.
    ///
    /// Requires the `account.details.email.update` scope.
    pub async fn set_email(&self, email: impl Into<String>) -> Result<Envelope<()>> {
        let email: String = email.into();
        let body = serde_json::json!({ "email": email });
        let ctx = RequestContext::new(
            &SET_EMAIL,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// Change the account password.
    ///
    /// Requires the `account.details.password.update` scope.
    pub async fn change_password(
        &self,
        current_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Result<Envelope<()>> {
        let (current_password, new_password): (String, String) =
            (current_password.into(), new_password.into());
        let body = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        let ctx = RequestContext::new(
            &CHANGE_PASSWORD,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// List account permissions with user-friendly descriptions.
    ///
    /// Requires the `account.details` scope.
    pub async fn list_permissions(&self) -> Result<Envelope<Vec<Permission>>> {
        self.client
            .send(RequestContext::bare(&LIST_PERMISSIONS), None)
            .await
    }
}
