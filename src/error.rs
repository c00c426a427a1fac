use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("No response received from the server: {0}")]
    NoResponse(String),

    #[error("Request error: {0}")]
    RequestBuild(String),

    #[error("Decoding response error: {0}")]
    Decode(String),

    #[error("DataDragon error: {0}")]
    StaticData(String),
}

impl RiftError {
    /// Status code returned by the Riot API, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Every call either succeeds with the decoded payload or fails with a [`RiftError`].
pub type RiftResult<T> = Result<T, RiftError>;

#[cfg(test)]
mod tests {
    use super::RiftError;

    #[test]
    fn display_carries_status_and_message() {
        let err = RiftError::UpstreamStatus {
            status: 403,
            message: "Forbidden".into(),
        };

        assert_eq!(err.to_string(), "API error 403: Forbidden");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn non_status_errors_have_no_status() {
        assert_eq!(RiftError::Config("unknown region".into()).status(), None);
        assert_eq!(RiftError::NoResponse("timed out".into()).status(), None);
        assert_eq!(
            RiftError::StaticData("boom".into()).to_string(),
            "DataDragon error: boom"
        );
    }
}
