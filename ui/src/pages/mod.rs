//! Routed pages

pub mod chat;
pub mod legal;
pub mod login;
