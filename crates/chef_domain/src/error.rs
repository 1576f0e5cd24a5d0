use thiserror::Error;

/// Failure of a single menu fetch. The loader makes one attempt per call, so
/// every variant is final for that request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to reach the menu service: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("Menu service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed menu data: {0}")]
    Shape(String),
}

impl FetchError {
    pub fn transport(err: impl Into<anyhow::Error>) -> Self {
        Self::Transport(err.into())
    }

    pub fn shape(message: impl ToString) -> Self {
        Self::Shape(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_error_message() {
        let fixture = FetchError::Status { status: 401, body: "Invalid API key".to_string() };
        let actual = fixture.to_string();
        let expected = "Menu service responded with status 401: Invalid API key";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_transport_error_keeps_cause() {
        let fixture = FetchError::transport(anyhow::anyhow!("connection refused"));
        let actual = std::error::Error::source(&fixture).map(|e| e.to_string());
        let expected = Some("connection refused".to_string());
        assert_eq!(actual, expected);
    }
}
