//! Tonecast - seasonal color analysis service
//!
//! HTTP and CLI front end for the `skin-tone` analysis pipeline.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
