use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::config::{SessionConfig, DEFAULT_REGION};
use crate::models::record::{BucketRecord, ObjectRecord};

/// Failure of a remote listing call, carrying a human-readable message. The
/// session layer never inspects anything beyond the rendered text.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Failed to list buckets: {source:#}")]
    ListBuckets { source: anyhow::Error },
    #[error("Failed to list objects in bucket {bucket}: {source:#}")]
    ListObjects {
        bucket: String,
        source: anyhow::Error,
    },
}

/// The three remote calls the browser needs, behind a seam so tests can
/// substitute hand-written fakes for the SDK client.
#[async_trait]
pub trait S3Endpoint: Send + Sync {
    async fn enumerate_buckets(&self) -> Result<Vec<BucketRecord>>;
    async fn resolve_bucket_region(&self, bucket: &str) -> Result<String>;
    async fn list_bucket_objects(&self, bucket: &str, limit: i32) -> Result<Vec<ObjectRecord>>;
}

/// Opens a connection handle scoped to a region.
#[async_trait]
pub trait EndpointProvider: Send + Sync {
    async fn open(&self, region: &str) -> Result<Arc<dyn S3Endpoint>>;
}

/// SDK-backed endpoint wrapping a single `aws_sdk_s3::Client`.
pub struct SdkEndpoint {
    client: Client,
}

impl SdkEndpoint {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn to_chrono(t: &aws_sdk_s3::primitives::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(t.secs(), 0).unwrap_or_default()
}

#[async_trait]
impl S3Endpoint for SdkEndpoint {
    async fn enumerate_buckets(&self) -> Result<Vec<BucketRecord>> {
        let resp = self
            .client
            .list_buckets()
            .send()
            .await
            .context("ListBuckets call failed")?;

        let buckets = resp
            .buckets()
            .iter()
            .map(|b| BucketRecord {
                name: b.name().map(String::from),
                creation_date: b.creation_date().map(to_chrono),
                region: DEFAULT_REGION.to_string(),
                object_count: 0,
            })
            .collect();
        Ok(buckets)
    }

    async fn resolve_bucket_region(&self, bucket: &str) -> Result<String> {
        let resp = self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .with_context(|| format!("GetBucketLocation call failed for {bucket}"))?;

        // An empty or absent constraint means us-east-1.
        let region = resp
            .location_constraint()
            .map(|c| c.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REGION)
            .to_string();
        Ok(region)
    }

    async fn list_bucket_objects(&self, bucket: &str, limit: i32) -> Result<Vec<ObjectRecord>> {
        let resp = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(limit)
            .send()
            .await
            .with_context(|| format!("ListObjectsV2 call failed for {bucket}"))?;

        let objects = resp
            .contents()
            .iter()
            .map(|obj| ObjectRecord {
                key: obj.key().map(String::from),
                size: obj.size(),
                last_modified: obj.last_modified().map(to_chrono),
                storage_class: obj.storage_class().map(|c| c.as_str().to_string()),
                etag: obj.e_tag().map(String::from),
            })
            .collect();
        Ok(objects)
    }
}

/// Builds region-scoped clients from the base SDK config, so every handle
/// shares the session's credentials and settings.
pub struct SdkEndpointProvider {
    sdk_config: aws_config::SdkConfig,
}

impl SdkEndpointProvider {
    pub fn new(sdk_config: aws_config::SdkConfig) -> Self {
        Self { sdk_config }
    }
}

#[async_trait]
impl EndpointProvider for SdkEndpointProvider {
    async fn open(&self, region: &str) -> Result<Arc<dyn S3Endpoint>> {
        let conf = aws_sdk_s3::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.to_string()))
            .build();
        Ok(Arc::new(SdkEndpoint::new(Client::from_conf(conf))))
    }
}

/// Remote Listing Client: wraps bucket enumeration, region resolution, and
/// capped object listing, with three process-lifetime caches:
/// object listings keyed by bucket name, resolved regions keyed by bucket
/// name, and one connection handle per distinct region.
pub struct S3Service {
    default_region: String,
    base: Arc<dyn S3Endpoint>,
    provider: Arc<dyn EndpointProvider>,
    object_cache: Mutex<HashMap<String, Vec<ObjectRecord>>>,
    region_cache: Mutex<HashMap<String, String>>,
    handle_pool: Mutex<HashMap<String, Arc<dyn S3Endpoint>>>,
}

impl S3Service {
    pub fn new(
        default_region: String,
        base: Arc<dyn S3Endpoint>,
        provider: Arc<dyn EndpointProvider>,
    ) -> Self {
        Self {
            default_region,
            base,
            provider,
            object_cache: Mutex::new(HashMap::new()),
            region_cache: Mutex::new(HashMap::new()),
            handle_pool: Mutex::new(HashMap::new()),
        }
    }

    /// SDK-backed construction from the session configuration: ambient
    /// credential resolution unless an explicit key pair was given.
    pub async fn connect(config: &SessionConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(credentials) = config.explicit_credentials() {
            loader = loader.credentials_provider(credentials);
        }
        let sdk_config = loader.load().await;

        let base = Arc::new(SdkEndpoint::new(Client::new(&sdk_config)));
        let provider = Arc::new(SdkEndpointProvider::new(sdk_config));
        Self::new(config.region.clone(), base, provider)
    }

    /// Lists all buckets and resolves each one's region. Per-bucket
    /// resolution failures are logged and default the region; only the
    /// enumeration call itself can fail the operation.
    pub async fn list_buckets(&self) -> Result<Vec<BucketRecord>, RemoteError> {
        let mut buckets = self
            .base
            .enumerate_buckets()
            .await
            .map_err(|source| RemoteError::ListBuckets { source })?;

        for bucket in &mut buckets {
            let Some(name) = bucket.name.clone() else {
                continue;
            };
            match self.base.resolve_bucket_region(&name).await {
                Ok(region) => {
                    bucket.region = region.clone();
                    self.region_cache.lock().await.insert(name, region);
                }
                Err(err) => {
                    warn!("could not get region for bucket {name}: {err:#}");
                }
            }
        }
        Ok(buckets)
    }

    /// Lists up to `limit` objects in a bucket through that bucket's
    /// regional handle. Listings are cached unconditionally by bucket name
    /// for the life of the process; the cache ignores `limit`, so a later
    /// call with a different cap is served the original result.
    pub async fn list_objects(
        &self,
        bucket: &str,
        limit: i32,
    ) -> Result<Vec<ObjectRecord>, RemoteError> {
        if let Some(objects) = self.object_cache.lock().await.get(bucket) {
            debug!("serving {bucket} from the object cache");
            return Ok(objects.clone());
        }

        let region = self.resolve_region(bucket).await;
        let endpoint = self
            .regional_endpoint(&region)
            .await
            .map_err(|source| RemoteError::ListObjects {
                bucket: bucket.to_string(),
                source,
            })?;

        let objects = endpoint
            .list_bucket_objects(bucket, limit)
            .await
            .map_err(|source| RemoteError::ListObjects {
                bucket: bucket.to_string(),
                source,
            })?;

        self.object_cache
            .lock()
            .await
            .insert(bucket.to_string(), objects.clone());
        Ok(objects)
    }

    /// Drops the object cache, the region cache, and all pooled handles.
    pub async fn clear_caches(&self) {
        self.object_cache.lock().await.clear();
        self.region_cache.lock().await.clear();
        self.handle_pool.lock().await.clear();
    }

    /// Resolves the bucket's region, reusing the cache. Resolution failure
    /// falls back to the session's default region and is not cached, so a
    /// later call may retry.
    async fn resolve_region(&self, bucket: &str) -> String {
        if let Some(region) = self.region_cache.lock().await.get(bucket) {
            return region.clone();
        }
        match self.base.resolve_bucket_region(bucket).await {
            Ok(region) => {
                self.region_cache
                    .lock()
                    .await
                    .insert(bucket.to_string(), region.clone());
                region
            }
            Err(err) => {
                warn!("could not get region for bucket {bucket}: {err:#}");
                self.default_region.clone()
            }
        }
    }

    async fn regional_endpoint(&self, region: &str) -> Result<Arc<dyn S3Endpoint>> {
        let mut pool = self.handle_pool.lock().await;
        if let Some(endpoint) = pool.get(region) {
            return Ok(endpoint.clone());
        }
        debug!("opening a client handle for region {region}");
        let endpoint = self.provider.open(region).await?;
        pool.insert(region.to_string(), endpoint.clone());
        Ok(endpoint)
    }
}
