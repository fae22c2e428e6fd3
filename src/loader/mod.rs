use std::future::Future;
use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::menu::MenuError;

// `menu-data 1.json`, percent-encoded
pub const MENU_JSON_PATH: &str = "menu-data%201.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to request menu data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to load menu JSON ({status})")]
    Status { status: u16 },

    #[error("failed to read menu data: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid menu JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid menu URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error(transparent)]
    Shape(#[from] MenuError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSource {
    Url(Url),
    File(PathBuf),
}

impl MenuSource {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::File(PathBuf::from(trimmed)),
        }
    }

    pub fn from_base_url(base: &str) -> Result<Self, LoadError> {
        let invalid = |e: &dyn std::fmt::Display| LoadError::InvalidUrl {
            url: base.to_string(),
            message: e.to_string(),
        };
        let mut url = Url::parse(base.trim()).map_err(|e| invalid(&e))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        let url = url.join(MENU_JSON_PATH).map_err(|e| invalid(&e))?;
        Ok(Self::Url(url))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

pub trait MenuLoader {
    fn load(&self) -> impl Future<Output = Result<Value, LoadError>>;
}

pub fn parse_menu_json(bytes: &[u8]) -> Result<Value, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse { source })
}

fn no_store_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

#[derive(Clone, Debug)]
pub struct SourceLoader {
    source: MenuSource,
    client: reqwest::Client,
}

impl SourceLoader {
    pub fn new(source: MenuSource, client: reqwest::Client) -> Self {
        Self { source, client }
    }

    pub fn source(&self) -> &MenuSource {
        &self.source
    }

    async fn fetch(&self, url: &Url) -> Result<Value, LoadError> {
        let request_err = |source| LoadError::Request {
            url: url.to_string(),
            source,
        };
        let res = self
            .client
            .get(url.clone())
            .headers(no_store_headers())
            .send()
            .await
            .map_err(request_err)?;
        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }
        let body = res.bytes().await.map_err(request_err)?;
        debug!(url = %url, bytes = body.len(), "fetched menu data");
        parse_menu_json(&body)
    }

    async fn read(&self, path: &Path) -> Result<Value, LoadError> {
        let body = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = body.len(), "read menu data");
        parse_menu_json(&body)
    }
}

impl MenuLoader for SourceLoader {
    async fn load(&self) -> Result<Value, LoadError> {
        match &self.source {
            MenuSource::Url(url) => self.fetch(url).await,
            MenuSource::File(path) => self.read(path).await,
        }
    }
}
