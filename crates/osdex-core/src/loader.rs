//! Loader — fetches the JSON resource, validates its shape, and publishes a
//! dataset.
//!
//! [`load_or_fallback`] is the entry point the application uses. It runs
//! exactly once per process. On any failure — unreachable resource, bad
//! status, malformed JSON, wrong shape — it substitutes the embedded
//! fallback dataset and hands the error back as data, so the caller always
//! ends up with something searchable. The error travels to the UI as an
//! informational notice; it is never fatal and never propagates past this
//! module.

use std::path::PathBuf;

use crate::config::DataConfig;
use crate::types::ServiceOrder;

/// The canned records used when the real resource cannot be loaded.
const FALLBACK_DATA: &str = r#"[
  {
    "CODIGO": "F003",
    "DESCRICAO_OS": "Bucha",
    "DESCRICAO_SUB_OS": "Inspeção de juntas e mangueiras",
    "SERVICO_REALIZADO": "Troca da junta do cárter e limpeza da área"
  },
  {
    "CODIGO": "F008",
    "DESCRICAO_OS": "Troca de bicos injetores",
    "DESCRICAO_SUB_OS": "Alto consumo de combustível (0.265L/H)",
    "SERVICO_REALIZADO": "Substituição dos bicos injetores e kit de vedação"
  }
]"#;

/// Why a load attempt failed. Every variant is recovered locally by
/// substituting fallback data; the variant only determines the notice shown
/// to the user.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The resource answered with a non-success status.
    #[error("data request failed with status {status}")]
    Http { status: u16 },
    /// The resource could not be reached at all (connection refused,
    /// missing file, ...).
    #[error("data source unreachable: {0}")]
    Transport(String),
    /// The body is not valid JSON.
    #[error("data is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    /// Valid JSON, wrong structure: not an array, empty, or missing the
    /// required fields.
    #[error("unexpected data shape: {0}")]
    Shape(String),
}

/// One fetch of the raw resource bytes.
///
/// Implemented by the HTTP and static-file layers below; tests inject
/// in-memory sources.
pub trait DataSource {
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<u8>, LoadError>> + Send;
}

/// Reads the resource from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|err| LoadError::Transport(format!("{}: {err}", self.path.display())))
    }
}

/// Fetches the resource with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| LoadError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
            });
        }
        let body = response
            .bytes()
            .await
            .map_err(|err| LoadError::Transport(err.to_string()))?;
        Ok(body.to_vec())
    }
}

/// The source selected by configuration: a URL when one is set, otherwise
/// the file path.
#[derive(Debug, Clone)]
pub enum AnySource {
    File(FileSource),
    Http(HttpSource),
}

impl AnySource {
    pub fn from_config(data: &DataConfig) -> Self {
        match data.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => AnySource::Http(HttpSource::new(url)),
            None => AnySource::File(FileSource::new(&data.path)),
        }
    }
}

impl DataSource for AnySource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            AnySource::File(source) => source.fetch().await,
            AnySource::Http(source) => source.fetch().await,
        }
    }
}

/// Fetch and validate the resource.
///
/// Validation order matches the error taxonomy: transport/status first, then
/// JSON well-formedness (`Parse`), then structure (`Shape`) — the body must
/// be a non-empty array whose first element carries both `CODIGO` and
/// `DESCRICAO_OS`.
pub async fn load<S: DataSource>(source: &S) -> Result<Vec<ServiceOrder>, LoadError> {
    let bytes = source.fetch().await?;
    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(LoadError::Parse)?;

    let items = value
        .as_array()
        .ok_or_else(|| LoadError::Shape("expected a JSON array of records".to_string()))?;
    let first = items
        .first()
        .ok_or_else(|| LoadError::Shape("record array is empty".to_string()))?;
    for key in ["CODIGO", "DESCRICAO_OS"] {
        if first.get(key).is_none() {
            return Err(LoadError::Shape(format!("first record is missing {key}")));
        }
    }

    serde_json::from_value(value).map_err(|err| LoadError::Shape(err.to_string()))
}

/// [`load`], with the failure policy applied: on error, substitute the
/// embedded fallback dataset and surface the error alongside it. The caller
/// always receives a non-empty dataset.
pub async fn load_or_fallback<S: DataSource>(
    source: &S,
) -> (Vec<ServiceOrder>, Option<LoadError>) {
    match load(source).await {
        Ok(orders) => {
            tracing::debug!(count = orders.len(), "dataset loaded");
            (orders, None)
        }
        Err(err) => {
            tracing::warn!(%err, "load failed; substituting embedded fallback data");
            (fallback_orders(), Some(err))
        }
    }
}

/// Parse the embedded fallback dataset.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed, which is checked by tests and
/// cannot happen at runtime.
pub fn fallback_orders() -> Vec<ServiceOrder> {
    serde_json::from_str(FALLBACK_DATA).expect("embedded fallback dataset must be valid JSON")
}
