//! Shadescope - photo quality check and shade matching
//!
//! Command-line front end for the `tone-engine` crate: decodes PNG photos,
//! applies configuration, and reports focus quality, color features and the
//! nearest shade-guide match as JSON.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
