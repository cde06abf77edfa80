use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("expected a key-value table")]
    NotATable,

    #[error("invalid {field}: {reason}")]
    Invalid { field: String, reason: String }
}

impl SiteError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SiteError::Invalid {
            field: field.into(),
            reason: reason.into()
        }
    }
}
