//! Public API for the tone-engine crate.
//!
//! This module provides the high-level API: the [`ToneAnalyzer`] builder,
//! its [`ToneReport`] and the [`EngineError`] unified error type.

mod builder;
mod error;

pub use builder::{ShadeReading, ToneAnalyzer, ToneReport};
pub use error::EngineError;
