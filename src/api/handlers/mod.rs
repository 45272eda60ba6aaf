//! API request handlers.

/// Chat completion proxy.
pub mod chat;
/// Root greeting and health check.
pub mod system;
