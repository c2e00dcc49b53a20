//! # Roster Core
//!
//! Core types, traits, and error definitions for Roster.
//! This crate provides the foundational abstractions used across all layers
//! of the user directory.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
