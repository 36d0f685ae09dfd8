//! S3-backed object store.

use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;

use super::{ObjectStore, StorageError};

/// S3Store is an [`ObjectStore`] reading from a single S3 bucket.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Create a store over `bucket` using an already-configured client.
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(SdkError::ServiceError(service_err))
                if service_err.err().is_no_such_key() =>
            {
                return Ok(None);
            }
            Err(err) => return Err(StorageError::Request(err.to_string())),
        };

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?;

        Ok(Some(data.into_bytes().to_vec()))
    }
}
