//! S3-compatible object store implementation.

use super::ObjectStore;
use async_trait::async_trait;
use aws_sdk_s3::config::timeout::TimeoutConfig;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use roster_config::ObjectStoreConfig;
use roster_core::{RosterError, RosterResult};
use tracing::{debug, info};

/// Object store backed by an S3-compatible service (MinIO, S3).
///
/// Uses path-style addressing and static credentials, with a bounded
/// per-operation timeout so a dead store cannot hang a request.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Creates a client from object-store configuration.
    #[must_use]
    pub fn from_config(config: &ObjectStoreConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "roster-static",
        );

        let timeouts = TimeoutConfig::builder()
            .operation_timeout(config.operation_timeout())
            .build();

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint.clone())
            .credentials_provider(credentials)
            .timeout_config(timeouts)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Anonymous-read policy document for the image bucket.
    fn public_read_policy(bucket: &str) -> String {
        serde_json::json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Principal": {"AWS": "*"},
                "Action": ["s3:GetObject"],
                "Resource": [format!("arn:aws:s3:::{}/*", bucket)],
            }]
        })
        .to_string()
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> RosterResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(name)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                RosterError::ObjectStore(format!("Failed to upload '{}': {}", name, e))
            })?;

        debug!("Uploaded object '{}' to bucket '{}'", name, self.bucket);
        Ok(())
    }

    async fn remove(&self, name: &str) -> RosterResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(name)
            .send()
            .await
            .map_err(|e| {
                RosterError::ObjectStore(format!("Failed to remove '{}': {}", name, e))
            })?;

        debug!("Removed object '{}' from bucket '{}'", name, self.bucket);
        Ok(())
    }

    async fn bucket_exists(&self) -> RosterResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(RosterError::ObjectStore(format!(
                        "Failed to check bucket '{}': {}",
                        self.bucket, service_err
                    )))
                }
            }
        }
    }

    async fn ensure_bucket(&self) -> RosterResult<()> {
        if self.bucket_exists().await? {
            debug!("Bucket '{}' already exists", self.bucket);
            return Ok(());
        }

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                RosterError::ObjectStore(format!(
                    "Failed to create bucket '{}': {}",
                    self.bucket, e
                ))
            })?;

        self.client
            .put_bucket_policy()
            .bucket(&self.bucket)
            .policy(Self::public_read_policy(&self.bucket))
            .send()
            .await
            .map_err(|e| {
                RosterError::ObjectStore(format!(
                    "Failed to set policy on bucket '{}': {}",
                    self.bucket, e
                ))
            })?;

        info!("Bucket '{}' created with public-read policy", self.bucket);
        Ok(())
    }
}

impl std::fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_builds_client() {
        let store = S3ObjectStore::from_config(&ObjectStoreConfig::default());
        assert_eq!(store.bucket, "user-images");
    }

    #[test]
    fn test_public_read_policy_document() {
        let policy = S3ObjectStore::public_read_policy("user-images");
        assert!(policy.contains("s3:GetObject"));
        assert!(policy.contains("arn:aws:s3:::user-images/*"));
        assert!(policy.contains("2012-10-17"));
    }
}
