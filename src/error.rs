use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Request failed before a response was received (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a structured `{message, status}` payload.
    #[error("server error ({status}): {message}")]
    Server { message: String, status: u16 },

    /// The response arrived but did not match the expected page shape.
    #[error("unexpected response shape: {0}")]
    Contract(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Message suitable for a user-facing notification.
    ///
    /// Prefers whatever the server said; anything else falls back to the
    /// error's display form.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
