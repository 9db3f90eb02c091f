use thiserror::Error;

/// Failures while loading, importing or exporting a recipe collection.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid JSON format: array expected")]
    NotArray,
}

impl CatalogError {
    /// Text shown to the user in the alert overlay.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Http(e) => format!("Network error: {}", e),
            CatalogError::Status { status, url } => {
                format!("Could not load {} (HTTP {})", url, status)
            }
            CatalogError::Io(e) => format!("Could not read file: {}", e),
            CatalogError::Parse(e) => format!("Could not read file: {}", e),
            CatalogError::NotArray => "Invalid JSON format. An array was expected.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_array_message_names_expectation() {
        let msg = CatalogError::NotArray.user_message();
        assert!(msg.contains("array was expected"));
    }

    #[test]
    fn test_parse_message_includes_reason() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let msg = CatalogError::from(err).user_message();
        assert!(msg.starts_with("Could not read file: "));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_status_message() {
        let err = CatalogError::Status {
            status: 404,
            url: "https://example.com/recipes.json".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Could not load https://example.com/recipes.json (HTTP 404)"
        );
    }
}
