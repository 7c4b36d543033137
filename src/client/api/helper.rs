use reqwest::{multipart::Form, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    client::model::error::ApiError,
    model::{
        api::{ItemResult, ListResult},
        operation::Operation,
    },
};

/// HTTP client for the remote operation API.
///
/// Keeps a cookie store so a `Login` signs in every later call, and optionally sends a
/// bearer token instead. Clones share the cookie store and connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::new(0, format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            bearer: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends `token` as `Authorization: Bearer` on every later call, `None` stops sending it.
    pub fn set_bearer(&mut self, token: Option<String>) {
        self.bearer = token;
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Invokes `op` with a JSON parameter object.
    ///
    /// # Returns
    /// - `Ok(ItemResult)` - The server's envelope, whether successful or not
    /// - `Err(ApiError)` - Transport failure or a response that is not an envelope
    pub async fn invoke<P, T>(&self, op: &Operation, params: &P) -> Result<ItemResult<T>, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.post(op)?.json(params);
        let response = send_request(request).await?;
        parse_envelope(response).await
    }

    /// Invokes an operation that takes no parameters.
    pub async fn invoke_empty<T>(&self, op: &Operation) -> Result<ItemResult<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.invoke(op, &serde_json::json!({})).await
    }

    /// Invokes a paged list operation.
    pub async fn invoke_list<P, T>(&self, op: &Operation, params: &P) -> Result<ListResult<T>, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.post(op)?.json(params);
        let response = send_request(request).await?;
        parse_envelope(response).await
    }

    /// Invokes `op` with a multipart body.
    pub async fn upload<T>(&self, op: &Operation, form: Form) -> Result<ItemResult<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self.post(op)?.multipart(form);
        let response = send_request(request).await?;
        parse_envelope(response).await
    }

    fn post(&self, op: &Operation) -> Result<RequestBuilder, ApiError> {
        let url = self
            .base_url
            .join(&op.path())
            .map_err(|e| ApiError::new(0, format!("Invalid operation URL: {}", e)))?;

        let request = self.http.post(url);
        Ok(match &self.bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }
}

/// Sends a request and handles transport errors.
async fn send_request(request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(0, format!("Failed to send request: {}", e)))
}

/// Decodes an envelope from any response status.
///
/// Authorization failures and server errors carry envelopes too, so the status only
/// decides which error to report when the body is not one.
async fn parse_envelope<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::new(status.as_u16(), format!("Failed to read response: {}", e)))?;

    match serde_json::from_slice::<R>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if status.is_success() => Err(ApiError::new(
            status.as_u16(),
            format!("Failed to parse response: {}", e),
        )),
        Err(_) => {
            let message = String::from_utf8_lossy(&body).trim().to_string();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                message
            };
            Err(ApiError::new(status.as_u16(), message))
        }
    }
}
