use thiserror::Error;

/// Failures on the server side of the app
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog responded with status {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Malformed catalog payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database pool not available")]
    PoolUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_url() {
        let err = AppError::UpstreamStatus {
            url: "https://dummyjson.com/products".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "Catalog responded with status 503 for https://dummyjson.com/products"
        );
    }

    #[test]
    fn test_decode_message_includes_cause() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = AppError::Decode {
            url: "https://dummyjson.com/products/categories".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Malformed catalog payload from"));
    }
}
