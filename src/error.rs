use thiserror::Error;

/// Application-wide error types.
///
/// Only `Unauthorized` changes control flow (it sends the visitor to the
/// login page); every other variant is rendered as an inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not signed in")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bookmark store error: {0}")]
    Storage(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// `true` for errors that must redirect to the login page.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

/// Helper conversion from anyhow::Error
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                AppError::Unauthorized
            } else {
                AppError::Status {
                    status: status.as_u16(),
                    message: err.to_string(),
                }
            }
        } else {
            AppError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unauthorized_redirects() {
        assert!(AppError::Unauthorized.is_unauthorized());
        assert!(!AppError::Network("down".into()).is_unauthorized());
        assert!(!AppError::Status {
            status: 403,
            message: "Forbidden".into()
        }
        .is_unauthorized());
    }

    #[test]
    fn test_display() {
        let err = AppError::Status {
            status: 500,
            message: "Failed to fetch articles".into(),
        };
        assert_eq!(err.to_string(), "Request failed (500): Failed to fetch articles");
        assert_eq!(AppError::Unauthorized.to_string(), "Not signed in");
    }

    #[test]
    fn test_from_anyhow() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err, AppError::Internal("boom".into()));
    }
}
