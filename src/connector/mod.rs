//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat-completion clients (OpenRouter over HTTPS, offline mock)
//! - Container and CLI routing
//! - Web surface (HTML form, download, JSON API)

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
