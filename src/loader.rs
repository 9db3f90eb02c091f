use crate::error::CatalogError;
use crate::messages::CatalogMessage;
use crate::recipe::Recipe;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Fixed name of the exported collection file.
pub const EXPORT_FILE_NAME: &str = "recipes.json";

/// Where the startup collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    Remote(String),
    Local(PathBuf),
}

impl RecipeSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Remote(source.to_string())
        } else {
            Self::Local(PathBuf::from(source))
        }
    }
}

/// Parse a collection payload. The top-level value must be an array; entries
/// that are not objects are kept as empty records.
pub fn parse_collection(text: &str) -> Result<Vec<Recipe>, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CatalogError::NotArray);
    };
    let recipes = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::warn!(index, error = %e, "unreadable recipe record");
                Recipe::default()
            })
        })
        .collect();
    Ok(recipes)
}

/// Fetch the collection, always bypassing caches.
pub async fn load_collection(
    source: &RecipeSource,
    timeout: Duration,
) -> Result<Vec<Recipe>, CatalogError> {
    let text = match source {
        RecipeSource::Remote(url) => {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            let response = client
                .get(url)
                .header(CACHE_CONTROL, "no-cache, no-store")
                .header(PRAGMA, "no-cache")
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    status: status.as_u16(),
                    url: url.clone(),
                });
            }
            response.text().await?
        }
        RecipeSource::Local(path) => tokio::fs::read_to_string(path).await?,
    };
    parse_collection(&text)
}

/// Read and parse a user-selected import file.
pub async fn import_file(path: &Path) -> Result<Vec<Recipe>, CatalogError> {
    let text = tokio::fs::read_to_string(path).await?;
    parse_collection(&text)
}

/// Write the collection as pretty-printed JSON to `dir/recipes.json`.
pub fn export_collection(recipes: &[Recipe], dir: &Path) -> Result<PathBuf, CatalogError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(recipes)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

/// Run the startup load in the background and report through `tx`.
pub fn spawn_load(source: RecipeSource, timeout: Duration, tx: Sender<CatalogMessage>) {
    tokio::spawn(async move {
        tracing::debug!(?source, "loading recipe collection");
        let result = load_collection(&source, timeout).await;
        let _ = tx.send(CatalogMessage::Loaded(result));
    });
}

/// Run an import in the background and report through `tx`.
pub fn spawn_import(path: PathBuf, tx: Sender<CatalogMessage>) {
    tokio::spawn(async move {
        tracing::debug!(path = %path.display(), "importing recipe collection");
        let result = import_file(&path).await;
        let _ = tx.send(CatalogMessage::Imported { path, result });
    });
}
