//! HTTP server for the browser chat UI.
//!
//! API endpoints:
//! - GET /      - Embedded chat page
//! - POST /chat - {message} JSON in, {response} JSON out

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use asna_agent::Responder;
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

/// Chat request body. A missing `message` field reads as an empty string.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

/// Chat response body.
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

#[derive(Clone)]
struct ServerState {
    responder: Arc<dyn Responder>,
}

/// Starts the chat server and blocks until it exits.
pub async fn run(addr: &str, responder: Arc<dyn Responder>) -> Result<()> {
    let state = ServerState { responder };

    let app = Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .with_state(state);

    let addr = parse_addr(addr)?;
    println!("Server started at http://{}", addr);
    println!("  - GET  /      Chat UI");
    println!("  - POST /chat  {{\"message\": ...}} -> {{\"response\": ...}}");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse address string to SocketAddr.
fn parse_addr(addr: &str) -> Result<SocketAddr> {
    let addr = if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    };
    Ok(addr.parse()?)
}

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn chat(
    State(state): State<ServerState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    tracing::debug!(message = %request.message, "chat request");
    let response = state.responder.respond(&request.message).await;
    Json(ChatResponse { response })
}

/// Embedded chat page.
const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>asna.ai</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #000; color: #fff; }
        .chat-container { border: 1px solid #555; height: 400px; overflow-y: scroll; padding: 10px; margin-bottom: 10px; background-color: #111; }
        .message { margin: 10px 0; }
        .user { text-align: right; color: #0af; }
        .asna { text-align: left; color: #0f0; }
        input[type="text"] { width: 80%; padding: 10px; background-color: #222; color: #fff; border: 1px solid #555; }
        button { padding: 10px 20px; background-color: #333; color: #fff; border: 1px solid #555; cursor: pointer; }
    </style>
</head>
<body>
    <h1>Asna.ai</h1>
    <div class="chat-container" id="chatContainer">
        <div class="message asna"><strong>Asna:</strong> Hi! I'm Asna, your AI assistant. How can I help you today?</div>
    </div>
    <div>
        <input type="text" id="userInput" placeholder="Type your message here..." onkeypress="handleKeyPress(event)">
        <button onclick="sendMessage()">Send</button>
    </div>

    <script>
        function sendMessage() {
            const input = document.getElementById('userInput');
            const message = input.value.trim();
            if (!message) return;

            addMessage('You: ' + message, 'user');
            input.value = '';

            fetch('/chat', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ message: message })
            })
            .then(response => response.json())
            .then(data => {
                addMessage('Asna: ' + data.response, 'asna');
            });
        }

        function addMessage(text, className) {
            const container = document.getElementById('chatContainer');
            const div = document.createElement('div');
            div.className = 'message ' + className;
            div.textContent = text;
            container.appendChild(div);
            container.scrollTop = container.scrollHeight;
        }

        function handleKeyPress(event) {
            if (event.key === 'Enter') {
                sendMessage();
            }
        }
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl Responder for Echo {
        async fn respond(&self, text: &str) -> String {
            format!("echo: {text}")
        }
    }

    #[tokio::test]
    async fn test_chat_handler() {
        let state = ServerState {
            responder: Arc::new(Echo),
        };

        let Json(response) = chat(
            State(state),
            Json(ChatRequest {
                message: "hi".to_string(),
            }),
        )
        .await;

        assert_eq!(response.response, "echo: hi");
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message, "");
    }

    #[test]
    fn test_response_wire_shape() {
        let body = serde_json::to_string(&ChatResponse {
            response: "Hello!".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"response":"Hello!"}"#);
    }

    #[test]
    fn test_parse_addr() {
        assert_eq!(parse_addr(":5000").unwrap().port(), 5000);
        assert!(parse_addr(":5000").unwrap().ip().is_unspecified());

        let addr = parse_addr("127.0.0.1:5000").unwrap();
        assert_eq!(addr.port(), 5000);
        assert!(addr.ip().is_loopback());

        assert!(parse_addr("not an address").is_err());
    }
}
