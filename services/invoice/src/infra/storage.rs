use std::path::{Path, PathBuf};

use anyhow::{Context as _, anyhow};
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use uuid::Uuid;

use crate::domain::repository::DocumentStore;
use crate::domain::types::StoredDocumentKey;
use crate::error::InvoiceServiceError;

// ── Local directory ──────────────────────────────────────────────────────────

/// Documents as flat files under one directory.
#[derive(Clone, Debug)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Open the store, creating the directory when needed.
    pub async fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("create document dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &StoredDocumentKey) -> Result<PathBuf, InvoiceServiceError> {
        let name = key.as_str();
        if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
            return Err(InvoiceServiceError::StoreUnavailable(anyhow!(
                "refusing document key {name:?}"
            )));
        }
        Ok(self.root.join(name))
    }
}

impl DocumentStore for FsDocumentStore {
    async fn store(&self, key: &StoredDocumentKey, bytes: Bytes) -> Result<(), InvoiceServiceError> {
        let target = self.path_for(key)?;
        // Hidden temp name in the same directory so the rename stays atomic.
        let staging = self.root.join(format!(".{}.{}.part", key, Uuid::new_v4()));

        let written = async {
            tokio::fs::write(&staging, &bytes)
                .await
                .with_context(|| format!("write {}", staging.display()))?;
            tokio::fs::rename(&staging, &target)
                .await
                .with_context(|| format!("publish {}", target.display()))
        }
        .await;

        if written.is_err() {
            let _ = tokio::fs::remove_file(&staging).await;
        }
        written.map_err(InvoiceServiceError::StoreUnavailable)
    }

    async fn exists(&self, key: &StoredDocumentKey) -> Result<bool, InvoiceServiceError> {
        let target = self.path_for(key)?;
        tokio::fs::try_exists(&target)
            .await
            .with_context(|| format!("stat {}", target.display()))
            .map_err(InvoiceServiceError::StoreUnavailable)
    }
}

// ── S3-compatible bucket ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct S3DocumentStore {
    pub client: Client,
    pub bucket: String,
}

impl S3DocumentStore {
    /// Credentials come from the standard AWS provider chain.
    pub async fn connect(
        bucket: &str,
        endpoint: Option<&str>,
        region: Option<&str>,
    ) -> anyhow::Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_owned()));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            // Self-hosted S3 implementations rarely support virtual-host buckets.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: bucket.to_owned(),
        })
    }
}

impl DocumentStore for S3DocumentStore {
    async fn store(&self, key: &StoredDocumentKey, bytes: Bytes) -> Result<(), InvoiceServiceError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .content_type(key.content_type())
            .body(ByteStream::from(bytes))
            .send()
            .await
            .with_context(|| format!("put s3://{}/{}", self.bucket, key))
            .map_err(InvoiceServiceError::StoreUnavailable)?;
        Ok(())
    }

    async fn exists(&self, key: &StoredDocumentKey) -> Result<bool, InvoiceServiceError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
            Err(e) => Err(InvoiceServiceError::StoreUnavailable(
                anyhow::Error::new(e).context(format!("head s3://{}/{}", self.bucket, key)),
            )),
        }
    }
}

// ── Runtime selection ────────────────────────────────────────────────────────

/// Backend chosen at startup from `DOCUMENT_STORE`.
#[derive(Clone, Debug)]
pub enum AnyDocumentStore {
    Fs(FsDocumentStore),
    S3(S3DocumentStore),
}

impl DocumentStore for AnyDocumentStore {
    async fn store(&self, key: &StoredDocumentKey, bytes: Bytes) -> Result<(), InvoiceServiceError> {
        match self {
            Self::Fs(s) => s.store(key, bytes).await,
            Self::S3(s) => s.store(key, bytes).await,
        }
    }

    async fn exists(&self, key: &StoredDocumentKey) -> Result<bool, InvoiceServiceError> {
        match self {
            Self::Fs(s) => s.exists(key).await,
            Self::S3(s) => s.exists(key).await,
        }
    }
}
