use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Card not found")]
    NotFound,

    #[error("Invalid catalog url: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    /// Whether another attempt may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Transport(_) => true,
            CatalogError::Status { status, .. } => *status == 429 || *status >= 500,
            CatalogError::Decode(_) | CatalogError::NotFound | CatalogError::InvalidUrl(_) => {
                false
            }
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
