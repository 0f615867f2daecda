//! Error types for folio-core.
//!
//! Nothing here is ever shown to a visitor. Callers log these and carry on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    /// The flag store rejected or could not perform an operation.
    #[error("storage {op} failed: {detail}")]
    Storage { op: &'static str, detail: String },

    #[error("invalid page config: {0}")]
    Config(#[from] toml::de::Error),
}

impl FolioError {
    pub fn storage(op: &'static str, detail: impl Into<String>) -> Self {
        FolioError::Storage {
            op,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_message() {
        let err = FolioError::storage("write", "quota exceeded");
        assert_eq!(err.to_string(), "storage write failed: quota exceeded");
    }

    #[test]
    fn config_error_converts_from_toml() {
        let parse: Result<toml::Table, _> = toml::from_str("[nav");
        let err: FolioError = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("invalid page config"));
    }
}
