//! # Roster Config
//!
//! Configuration structures for Roster. Configuration is an explicit struct
//! built once at startup by the embedding application and passed by
//! reference into the store, cache, and object-store constructors; this
//! crate deliberately contains no environment or file loading.

mod app_config;
mod validation;

pub use app_config::*;
pub use validation::*;
