//! Image blob storage for the service layer.
//!
//! An [`ObjectStore`] abstraction with an S3-compatible implementation
//! (MinIO in the development topology), plus upload naming helpers and the
//! public URL derivation used by the read path.

mod object_store;
mod s3_store;
pub mod upload;

pub use object_store::{ObjectStore, PublicObjectUrl};
pub use s3_store::S3ObjectStore;
