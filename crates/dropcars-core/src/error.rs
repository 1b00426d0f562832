use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropCarsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not authorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image URI: {0}")]
    InvalidUri(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// What the caller should do about a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Transient failure; offer the operator a retry.
    Retry,
    /// The session is no longer valid; clear it and ask for a new login.
    Logout,
    /// Not transient and not an auth problem; show the message.
    Report,
}

impl DropCarsError {
    /// Build the error for a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            _ => Self::Api { status, message },
        }
    }

    pub fn recovery(&self) -> Recovery {
        match self {
            Self::Unauthorized { .. } | Self::NotLoggedIn => Recovery::Logout,
            Self::Http(_) => Recovery::Retry,
            Self::Api { status, .. } if is_transient_status(*status) => Recovery::Retry,
            _ => Recovery::Report,
        }
    }

    pub fn is_auth(&self) -> bool {
        self.recovery() == Recovery::Logout
    }
}

fn is_transient_status(status: u16) -> bool {
    matches!(status, 408 | 429) || (500..600).contains(&status)
}

pub type Result<T> = std::result::Result<T, DropCarsError>;
