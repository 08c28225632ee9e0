//! HTTP client implementation for the Gemini API.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// HTTP client for the Gemini API.
///
/// The API key is sent as the `key` query parameter, which is how the
/// Generative Language endpoints authenticate.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
    max_retries: u32,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, api_key: String, max_retries: u32) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            max_retries,
        })
    }

    /// Makes a POST request to the API with retry support.
    pub async fn post<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let backoff = Duration::from_secs(1 << (attempt - 1));
                tokio::time::sleep(backoff).await;
            }

            match self.do_post(path, body).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if e.is_retryable() {
                        last_err = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| Error::Other("max retries exceeded".to_string())))
    }

    /// Performs a single POST request.
    async fn do_post<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}?key={}", self.base_url, path, self.api_key);

        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Deserializes a success body, or maps an error body to `Error::Api`.
    async fn handle_response<R>(&self, response: Response) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let http_status = response.status().as_u16();
        let body = response.text().await?;

        if (200..300).contains(&http_status) {
            return Ok(serde_json::from_str(&body)?);
        }

        Err(parse_api_error(http_status, &body))
    }
}

/// Error envelope returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Parses an error response body into `Error::Api`.
///
/// Falls back to the raw body as the message when the envelope does not
/// parse (e.g. an HTML error page from a proxy).
fn parse_api_error(http_status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) => Error::api(resp.error.status, resp.error.message, http_status),
        Err(_) => Error::api("", body.trim(), http_status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::status;

    #[test]
    fn test_parse_api_error_envelope() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = parse_api_error(429, body);
        match err {
            Error::Api { code, message, http_status } => {
                assert_eq!(code, status::RESOURCE_EXHAUSTED);
                assert_eq!(message, "Quota exceeded");
                assert_eq!(http_status, 429);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_api_error(429, body).is_retryable());
    }

    #[test]
    fn test_parse_api_error_non_json() {
        let err = parse_api_error(502, "<html>Bad Gateway</html>\n");
        match err {
            Error::Api { code, message, http_status } => {
                assert_eq!(code, "");
                assert_eq!(message, "<html>Bad Gateway</html>");
                assert_eq!(http_status, 502);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
