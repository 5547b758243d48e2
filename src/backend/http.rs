//! HTTP backend over the portal's REST API.
//!
//! Issues `GET <base>/<resource>?<query>` and maps the three failure shapes
//! onto [`CoreError`]: transport failures surface as `Http`, non-success
//! responses as `Server` (preferring the structured `{message, status}`
//! payload when the body carries one), and well-formed responses that do not
//! match the expected page shape as `Contract`.

use reqwest::Client;
use reqwest::header;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{ListBackend, QueryResult};
use crate::config::Config;
use crate::error::{CoreError, Result};

/// Structured error payload the backend returns on failures.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: String,
    status: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    /// Build from an existing client, e.g. one that already carries session
    /// middleware configured elsewhere.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

impl<T> ListBackend<T> for HttpBackend
where
    T: DeserializeOwned + Send,
{
    async fn fetch_page(&self, resource: &str, query: &str) -> Result<QueryResult<T>> {
        let mut url = self.base_url.join(resource)?;
        url.set_query(Some(query));

        tracing::debug!(%url, "issuing list request");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Prefer the structured payload; fall back to the status line.
            return Err(
                match serde_json::from_slice::<ErrorPayload>(&body) {
                    Ok(payload) => CoreError::Server {
                        message: payload.message,
                        status: payload.status.unwrap_or_else(|| status.as_u16()),
                    },
                    Err(_) => CoreError::Server {
                        message: status.to_string(),
                        status: status.as_u16(),
                    },
                },
            );
        }

        serde_json::from_slice::<QueryResult<T>>(&body).map_err(|e| {
            tracing::warn!(resource, error = %e, "list response did not match the expected shape");
            CoreError::Contract(e.to_string())
        })
    }
}
