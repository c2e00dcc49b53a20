//! # Roster Repository
//!
//! Record store access for Roster.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (domain interface)
//! PostgresUserRepository         (SQLx implementation)
//!   ↓
//! PostgreSQL
//! ```
//!
//! The schema lives under the workspace `migrations/` directory and is
//! applied through [`DatabasePool::run_migrations`].

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
