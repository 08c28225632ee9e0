//! Google Gemini (Generative Language) API SDK for Rust.
//!
//! This crate provides a client for the Gemini `generateContent` API.
//!
//! # Example
//!
//! ```rust,no_run
//! use asna_gemini::{Client, Content, GenerateContentRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let request = GenerateContentRequest {
//!         contents: vec![Content::user("Hello!")],
//!         ..Default::default()
//!     };
//!
//!     let response = client
//!         .generation()
//!         .generate_content("gemini-1.5-flash", &request)
//!         .await?;
//!     println!("{}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod generation;
mod http;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES};
pub use error::{Error, Result, status};
pub use generation::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GenerationService, Part, UsageMetadata,
};
