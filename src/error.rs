use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Non-success status (`Some`) or transport failure (`None`) on the repository fetch.
    #[error("network error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Network { status: Option<u16>, message: String },

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preferences file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FolioError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FolioError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
