//! LLM Provider Clients
//!
//! - [`LLMClient`] - The trait the chat handler talks to
//! - [`OpenAIClient`] - reqwest client for OpenAI-compatible chat completion endpoints
//!
//! Any service that speaks the `/v1/chat/completions` wire format works by
//! pointing `llm.api_url` (or `OPENAI_API_URL`) at it.

/// Core LLM client trait.
pub mod client;
/// OpenAI-compatible HTTP client.
pub mod openai;

pub use client::LLMClient;
pub use openai::OpenAIClient;
