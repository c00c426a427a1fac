//! Mapping of transport failures onto [`RiftError`].
//!
//! Every authenticated endpoint funnels its failures through [`normalize`] so
//! callers only ever see [`RiftError::UpstreamStatus`], [`RiftError::NoResponse`]
//! or [`RiftError::RequestBuild`] for anything that went wrong on the wire.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::RiftError;

const UNKNOWN_ERROR: &str = "Unknown error";

/// A failure observed while talking to the Riot API, before normalization.
#[derive(Debug)]
pub enum TransportFailure {
    /// The service answered with a non-success status.
    Status { status: StatusCode, body: String },
    /// The request went out but no complete response came back.
    NoResponse(String),
    /// The request could not be built or sent at all.
    Build(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Build(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status,
                body: String::new(),
            }
        } else {
            Self::NoResponse(err.to_string())
        }
    }
}

/// Error payload shape used by the Riot API: `{"status": {"message": "...", "status_code": 404}}`.
#[derive(Deserialize)]
struct ErrorBody {
    status: Option<ErrorStatus>,
}

#[derive(Deserialize)]
struct ErrorStatus {
    message: Option<String>,
}

fn upstream_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.status)
        .and_then(|status| status.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

pub fn normalize(failure: TransportFailure) -> RiftError {
    match failure {
        TransportFailure::Status { status, body } => RiftError::UpstreamStatus {
            status: status.as_u16(),
            message: upstream_message(&body),
        },
        TransportFailure::NoResponse(reason) => RiftError::NoResponse(reason),
        TransportFailure::Build(reason) => RiftError::RequestBuild(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failure_keeps_service_message() {
        let err = normalize(TransportFailure::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"status":{"message":"Data not found","status_code":404}}"#.into(),
        });

        match err {
            RiftError::UpstreamStatus { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Data not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_message_defaults_to_unknown_error() {
        for body in ["", "not json", "{}", r#"{"status":{}}"#, r#"{"status":{"message":""}}"#] {
            let err = normalize(TransportFailure::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: body.into(),
            });

            assert!(
                matches!(&err, RiftError::UpstreamStatus { status: 500, message } if message == UNKNOWN_ERROR),
                "body {body:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn no_response_and_build_failures_keep_their_kind() {
        assert!(matches!(
            normalize(TransportFailure::NoResponse("operation timed out".into())),
            RiftError::NoResponse(_)
        ));
        assert!(matches!(
            normalize(TransportFailure::Build("relative URL without a base".into())),
            RiftError::RequestBuild(_)
        ));
    }

    #[tokio::test]
    async fn invalid_url_is_a_build_failure() {
        let err = reqwest::Client::new()
            .get("ht!tp://invalid-url")
            .send()
            .await
            .unwrap_err();

        assert!(matches!(
            TransportFailure::from(err),
            TransportFailure::Build(_)
        ));
    }

    #[tokio::test]
    async fn refused_connection_is_a_no_response_failure() {
        // Port 9 (discard) is closed on any sane test machine.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .unwrap_err();

        assert!(matches!(
            TransportFailure::from(err),
            TransportFailure::NoResponse(_)
        ));
    }
}
