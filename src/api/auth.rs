//! Account registration and login
//!
//! Both operations accept any authenticated caller: credentials are
//! attached when the client holds a token, but none is required to call
//! them.

use super::models::Session;
use crate::client::Client;
use crate::error::Result;
use crate::response::{Envelope, RequestBody, RequestContext};
use crate::schema::{self, Operation, Parameter, ResponseShape};
use crate::types::{Method, StringMap};

static REGISTER: Operation = Operation {
    name: "auth.register",
    description: "Create an account and session. After signing up, a welcome \
                  e-mail is sent to confirm your e-mail address.",
    method: Method::POST,
    path: "/auth/register",
    path_params: &[],
    query_params: &[],
    body_params: &[
        Parameter {
            name: "username",
            description: "The username to use for the account. Must be between \
                          3 and 32 characters long. Cannot start with `user_`. \
                          May contain only letters, numbers, dashes and \
                          underscores. Must be unique.",
            type_name: "string",
            required: true,
            default: None,
        },
        Parameter {
            name: "email",
            description: "The e-mail address to register. A valid unique \
                          non-disposable e-mail that can receive mail is \
                          required.",
            type_name: "string",
            required: true,
            default: None,
        },
        Parameter {
            name: "password",
            description: "The password to use for the account. Must be at \
                          least 15 characters, or 8 characters if it contains \
                          a mix of letters, numbers and symbols.",
            type_name: "string",
            required: true,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 201, type_name: "Session" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 403, type_name: "Error(IP_REJECTED)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: schema::Auth::AnyToken,
};

static LOGIN: Operation = Operation {
    name: "auth.login",
    description: "Create a session using user ID/username/e-mail and password.",
    method: Method::POST,
    path: "/auth/login",
    path_params: &[],
    query_params: &[],
    body_params: &[
        Parameter {
            name: "user",
            description: "User ID (starts with `user_`), username or e-mail \
                          address.",
            type_name: "string",
            required: true,
            default: None,
        },
        Parameter {
            name: "password",
            description: "The password of the account.",
            type_name: "string",
            required: true,
            default: None,
        },
    ],
    returns: &[
        ResponseShape { status: 201, type_name: "Session" },
        ResponseShape { status: 422, type_name: "Error(INVALID_DATA)" },
        ResponseShape { status: 403, type_name: "Error(IP_REJECTED)" },
        ResponseShape { status: 429, type_name: "Error(RATE_LIMITED)" },
        ResponseShape { status: 500, type_name: "Error(INTERNAL_SERVER_ERROR)" },
        ResponseShape { status: 503, type_name: "Error(MAINTENANCE)" },
    ],
    auth: schema::Auth::AnyToken,
};

/// Account registration and login
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a Client,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an account and session. The session token is also returned in
    /// the `Set-Cookie` header.
    ///
    /// > **Note**: Registering an account can only be performed from a
    /// > residential IP. Creating multiple/alternate accounts is not allowed
    /// > as per the Terms of Service.
    pub async fn register(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Envelope<Session>> {
        let (username, email, password): (String, String, String) =
            (username.into(), email.into(), password.into());
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let ctx = RequestContext::new(
            &REGISTER,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }

    /// Create a session using user ID/username/e-mail and password.
    ///
    /// It is normally not recommended to use this operation to gain API
    /// access; create a token from your account instead.
    pub async fn login(
        &self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Envelope<Session>> {
        let (user, password): (String, String) = (user.into(), password.into());
        let body = serde_json::json!({
            "user": user,
            "password": password,
        });
        let ctx = RequestContext::new(
            &LOGIN,
            StringMap::new(),
            StringMap::new(),
            Some(RequestBody::Json(body)),
        );
        self.client.send(ctx, None).await
    }
}
