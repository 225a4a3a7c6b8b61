//! Where artifact bytes come from.

use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use vital_config::ArtifactsConfig;
use vital_core::CollectionKind;
use vital_store::ArtifactStore;

use crate::CacheError;

/// A source of raw artifact bytes.
pub trait ArtifactSource: Send + Sync {
    /// Fetch the whole artifact for `kind`.
    fn fetch(
        &self,
        kind: CollectionKind,
    ) -> impl Future<Output = Result<Vec<u8>, CacheError>> + Send;
}

/// Reads artifacts from a local directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    store: ArtifactStore,
}

impl FsSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: ArtifactStore::new(dir),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ArtifactStore {
        &self.store
    }
}

impl ArtifactSource for FsSource {
    async fn fetch(&self, kind: CollectionKind) -> Result<Vec<u8>, CacheError> {
        let path = self.store.path(kind);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(error) if error.kind() == ErrorKind::NotFound => Err(CacheError::Missing { kind }),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }
}

/// Fetches artifacts from the site they are served from.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CacheError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("vital/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn url(&self, kind: CollectionKind) -> String {
        format!("{}/{}", self.base_url, kind.file_name())
    }
}

impl ArtifactSource for HttpSource {
    async fn fetch(&self, kind: CollectionKind) -> Result<Vec<u8>, CacheError> {
        let url = self.url(kind);
        tracing::debug!(%url, "fetching artifact");
        let resp = self.http.get(&url).send().await?;
        let resp = check_response(kind, resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Map non-success statuses to errors; 404 means the artifact is missing.
pub async fn check_response(
    kind: CollectionKind,
    resp: reqwest::Response,
) -> Result<reqwest::Response, CacheError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(CacheError::Missing { kind });
    }
    if !resp.status().is_success() {
        return Err(CacheError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// The source selected by configuration: HTTP when a base URL is set,
/// otherwise the local artifact directory.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Fs(FsSource),
    Http(HttpSource),
}

impl ConfiguredSource {
    /// # Errors
    ///
    /// Returns [`CacheError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &ArtifactsConfig) -> Result<Self, CacheError> {
        if config.is_remote() {
            let timeout = Duration::from_secs(config.timeout_secs);
            Ok(Self::Http(HttpSource::new(&config.base_url, timeout)?))
        } else {
            Ok(Self::Fs(FsSource::new(&config.dir)))
        }
    }
}

impl ArtifactSource for ConfiguredSource {
    async fn fetch(&self, kind: CollectionKind) -> Result<Vec<u8>, CacheError> {
        match self {
            Self::Fs(source) => source.fetch(kind).await,
            Self::Http(source) => source.fetch(kind).await,
        }
    }
}
