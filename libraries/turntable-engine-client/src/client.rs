//! HTTP client for the playback daemon.

use crate::error::{ClientError, Result};
use crate::types::ServerInfo;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for the playback daemon's HTTP API.
///
/// The daemon is the native engine process on the same machine (or a
/// trusted host); there is no authentication layer. One client value is
/// cheap to clone and safe to share: `reqwest::Client` pools
/// connections internally.
///
/// # Example
///
/// ```ignore
/// use turntable_engine_client::EngineClient;
///
/// let client = EngineClient::new("http://127.0.0.1:4533")?;
/// let info = client.test_connection().await?;
/// println!("Connected to {} v{}", info.name, info.version);
/// ```
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: Client,
    base_url: String,
}

impl EngineClient {
    /// Create a client for the daemon at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        if raw.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = raw.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Turntable/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The daemon base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Test the connection to the daemon.
    pub async fn test_connection(&self) -> Result<ServerInfo> {
        let info: ServerInfo = self.get_json("/api/info").await?;

        info!(
            name = %info.name,
            version = %info.version,
            "Connected to playback daemon"
        );

        Ok(info)
    }

    /// Issue a GET and decode the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, route);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::ParseError(format!("{route}: {e}")))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Issue a POST with a JSON body, expecting no response payload.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(&self, route: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, route);
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Issue a bodyless POST (pause, stop).
    pub(crate) async fn post_empty(&self, route: &str) -> Result<()> {
        self.post_json(route, &serde_json::json!({})).await
    }
}

fn map_send_error(err: reqwest::Error) -> ClientError {
    if err.is_connect() || err.is_timeout() {
        ClientError::ServerUnreachable(err.to_string())
    } else {
        ClientError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(EngineClient::new("http://localhost:4533").is_ok());
        assert!(EngineClient::new("https://example.com").is_ok());

        assert!(EngineClient::new("").is_err());
        assert!(EngineClient::new("not-a-url").is_err());
        assert!(EngineClient::new("ftp://example.com").is_err());
    }

    #[test]
    fn url_normalization_strips_trailing_slash() {
        let client = EngineClient::new("http://localhost:4533/").expect("valid url");
        assert_eq!(client.url(), "http://localhost:4533");
    }
}
