//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence adapters behind the trivia features.

pub mod store;
