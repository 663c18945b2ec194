//! Loading the project dataset.
//!
//! The dataset is read exactly once per run: no retries, no timeout and no
//! refresh. Any failure is reported to the caller, who leaves the dashboard
//! empty.

use std::{fmt, path::PathBuf, str::FromStr};

use url::Url;

use crate::models::Project;

/// Location of the dataset when none is given on the command line.
pub const DEFAULT_SOURCE: &str = "projects.json";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error fetching {url}: {source}")]
    Http { url: Url, source: reqwest::Error },
    /// The server answered with a non-2xx status.
    #[error("{url} returned {status}")]
    Status { url: Url, status: u16 },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse project data from {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("invalid dataset location {0:?}")]
    InvalidLocation(String),
}

/// Where the dataset lives: a remote document or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Http(Url),
    File(PathBuf),
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl FromStr for DatasetSource {
    type Err = SourceError;

    /// `http(s)://` and `file://` URLs are recognized; anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SourceError::InvalidLocation(s.to_string()));
        }
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(DatasetSource::Http(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(DatasetSource::File)
                .map_err(|_| SourceError::InvalidLocation(s.to_string())),
            _ => Ok(DatasetSource::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Http(url) => write!(f, "{url}"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DatasetSource {
    /// Fetch and parse the dataset. Single attempt.
    pub async fn fetch(&self) -> Result<Vec<Project>, SourceError> {
        let bytes = match self {
            DatasetSource::Http(url) => fetch_http(url).await?,
            DatasetSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        tracing::debug!(source = %self, bytes = bytes.len(), "dataset read");
        parse_projects(&bytes, &self.to_string())
    }
}

async fn fetch_http(url: &Url) -> Result<Vec<u8>, SourceError> {
    let response = reqwest::get(url.clone())
        .await
        .map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.clone(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await.map_err(|source| SourceError::Http {
        url: url.clone(),
        source,
    })?;
    Ok(body.to_vec())
}

/// Parse a JSON array of project records.
pub fn parse_projects(bytes: &[u8], origin: &str) -> Result<Vec<Project>, SourceError> {
    serde_json::from_slice(bytes).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}
