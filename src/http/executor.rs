//! Single-call request executor

use crate::api::models::ApiErrorBody;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::response::{decode_body, Envelope, ErrorResponse, RequestBody, RequestContext, ResponseMeta};
use crate::types::StringMap;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

impl Client {
    /// Perform exactly one HTTP call for the given request context.
    ///
    /// A 2xx response decodes into an [`Envelope`]; any other status is
    /// raised as [`Error::Api`] carrying the same envelope shape. Transport
    /// failures surface as [`Error::Http`].
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
    ) -> Result<Envelope<T>> {
        let url = self.operation_url(ctx)?;
        let operation = ctx.operation;

        let mut request = self.transport().request(operation.method.into(), url.clone());

        // The Authorization header is attached only when the client holds a
        // token AND the operation declares a requirement (any-token or
        // scoped). Operations without a requirement never send it.
        if operation.auth.required() {
            if let Some(token) = self.token() {
                request = request.bearer_auth(token);
            }
        }

        if operation.method.allows_body() {
            match &ctx.body {
                Some(RequestBody::Json(value)) => request = request.json(value),
                Some(RequestBody::Text(text)) => {
                    request = request
                        .header(CONTENT_TYPE, "text/plain")
                        .body(text.clone());
                }
                None => {}
            }
        }

        debug!(
            operation = operation.name,
            method = %operation.method,
            url = %url,
            "dispatching request"
        );

        let response = request.send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let final_url = response.url().clone();
        let redirected = final_url != url;
        let headers: StringMap = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let text = response.text().await?;
        let body = decode_body(
            status.as_u16(),
            headers.get("content-type").map(String::as_str),
            &text,
        )?;

        let meta = ResponseMeta {
            status: status.as_u16(),
            status_text,
            ok: status.is_success(),
            redirected,
            url: final_url,
            headers,
            request: ctx.clone(),
        };

        if status.is_success() {
            let data = serde_json::from_value(body).map_err(|e| {
                Error::decode(format!(
                    "response body of {} does not match its declared shape: {e}",
                    operation.name
                ))
            })?;
            Ok(Envelope::new(data, meta))
        } else {
            let error = serde_json::from_value::<ApiErrorBody>(body.clone()).ok();
            Err(Error::api(ErrorResponse { error, body, meta }))
        }
    }

    /// Build the target URL: substitute each `:name` path placeholder, then
    /// append the query parameters.
    pub(crate) fn operation_url(&self, ctx: &RequestContext) -> Result<Url> {
        let mut path = ctx.operation.path.trim_start_matches('/').to_string();
        for (name, value) in &ctx.path_params {
            path = path.replace(&format!(":{name}"), value);
        }

        let mut url = self.config().base_url.join(&path)?;
        if !ctx.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &ctx.query_params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}
