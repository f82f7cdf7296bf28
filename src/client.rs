//! HTTP client for the Edmtrain API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{EventQuery, LocationQuery, Query, QueryParams},
    types::{Event, EventsResponse, Location, LocationsResponse},
    Error,
};

/// Base URL all requests are issued against.
const DEFAULT_BASE_URL: &str = "https://edmtrain.com/api";

/// Timeout applied when the caller does not supply a transport.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Edmtrain API.
///
/// Holds the API token that is appended to every request as the trailing
/// `client` parameter. Each terminal call performs exactly one GET and is
/// never retried. Timeouts and other transport concerns belong to the
/// caller: supply a preconfigured [`reqwest::Client`] via
/// [`Client::with_http_client`], or each request builds a fresh one with a
/// 30-second timeout.
pub struct Client {
    /// Token identifying the caller, sent as `client=<token>`.
    token: String,
    /// Base URL for the API. Defaults to `https://edmtrain.com/api`.
    base_api_url: String,
    /// Caller-supplied transport, if any.
    http: Option<reqwest::Client>,
}

impl Client {
    /// Creates a new client pointing at the production Edmtrain API.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            token: token.to_string(),
            base_api_url: base_url.to_string(),
            http: None,
        }
    }

    /// Supplies a preconfigured transport, e.g. to change the timeout.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Returns an empty event query to chain filters onto.
    pub fn event_query(&self) -> EventQuery {
        EventQuery::default()
    }

    /// Returns an empty location query to chain filters onto.
    pub fn location_query(&self) -> LocationQuery {
        LocationQuery::default()
    }

    /// Fetches the events matching the given query.
    pub async fn get_events(&self, query: &EventQuery) -> Result<Vec<Event>, Error> {
        let resp = self
            .get::<EventsResponse, EventQuery>("/events", query)
            .await?;
        check_success(resp.success, resp.message, resp.events)
    }

    /// Fetches the locations matching the given query.
    pub async fn get_locations(&self, query: &LocationQuery) -> Result<Vec<Location>, Error> {
        let resp = self
            .get::<LocationsResponse, LocationQuery>("/locations", query)
            .await?;
        check_success(resp.success, resp.message, resp.locations)
    }

    fn request_url(&self, path: &str, params: &QueryParams) -> Result<Url, Error> {
        let raw = format!(
            "{}{}?{}",
            self.base_api_url,
            path,
            params.to_query_string(&self.token)
        );
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidArgument(format!("invalid request URL {:?}: {}", raw, e))
        })
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        if let Some(reason) = query.rejected() {
            return Err(Error::InvalidArgument(reason.to_string()));
        }
        let url = self.request_url(path, query.params())?;
        let client = match &self.http {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .map_err(|e| {
                    tracing::error!("Failed to build HTTP client: {}", e);
                    Error::Transport(e)
                })?,
        };
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Api(format!("HTTP {}: {}", status, snippet)));
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Api(format!("unexpected response body: {}", e))
        })?;

        Ok(parsed)
    }
}

/// Applies the envelope's success flag: a failure carries the server
/// message when one was provided.
fn check_success<T>(
    success: bool,
    message: Option<String>,
    records: Vec<T>,
) -> Result<Vec<T>, Error> {
    if success {
        return Ok(records);
    }
    let message = message.unwrap_or_else(|| "API reported failure without a message".to_string());
    tracing::error!("API rejected the request: {}", message);
    Err(Error::Api(message))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so the slice never splits a multibyte
    // character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
