//! Gemini-backed response strategy.

use async_trait::async_trait;

use asna_gemini::{Client, Content, GenerateContentRequest};

use crate::AGENT_NAME;
use crate::responder::Responder;

/// Default model for the Gemini strategy.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Response strategy that delegates to the Gemini API.
///
/// Upholds the [`Responder`] contract by converting every failure — client
/// error or empty candidate — into an in-band `"Error: ..."` reply.
pub struct GeminiResponder {
    client: Client,
    model: String,
}

impl GeminiResponder {
    /// Creates a responder using [`DEFAULT_MODEL`].
    pub fn new(client: Client) -> Self {
        Self::with_model(client, DEFAULT_MODEL)
    }

    /// Creates a responder using a specific model.
    pub fn with_model(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Priming instruction sent with every request.
    fn priming() -> String {
        format!(
            "You are {AGENT_NAME}, a friendly and helpful AI assistant. \
             Always introduce yourself as {AGENT_NAME} and answer conversationally."
        )
    }
}

#[async_trait]
impl Responder for GeminiResponder {
    async fn respond(&self, text: &str) -> String {
        let request = GenerateContentRequest {
            contents: vec![Content::user(text)],
            system_instruction: Some(Content::text(Self::priming())),
            ..Default::default()
        };

        let result = self
            .client
            .generation()
            .generate_content(&self.model, &request)
            .await;

        match result {
            Ok(response) => match response.text() {
                Some(reply) => reply.trim().to_string(),
                None => {
                    tracing::warn!("gemini returned no text candidate");
                    "Error: the model returned an empty response".to_string()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "gemini request failed");
                format!("Error: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_selection() {
        let client = Client::new("test-key").unwrap();
        assert_eq!(GeminiResponder::new(client).model(), DEFAULT_MODEL);

        let client = Client::new("test-key").unwrap();
        let responder = GeminiResponder::with_model(client, "gemini-2.0-flash");
        assert_eq!(responder.model(), "gemini-2.0-flash");
    }

    #[test]
    fn test_priming_names_the_agent() {
        let priming = GeminiResponder::priming();
        assert!(priming.contains(AGENT_NAME));
    }
}
