use thiserror::Error;

/// Failure taxonomy for backend interactions.
///
/// Every variant is absorbed at the workflow boundary and turned into a
/// user-visible notice; nothing here ever propagates out of the console
/// as a raised fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, aborted)
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered, but with a non-success status or a body that
    /// does not match the expected shape
    #[error("API responded with status {status}: {message}")]
    Protocol { status: u16, message: String },

    /// A local precondition failed; no request was issued
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn bad_status(status: u16) -> Self {
        ApiError::Protocol {
            status,
            message: "request failed".to_string(),
        }
    }

    pub fn bad_payload(status: u16, detail: impl std::fmt::Display) -> Self {
        ApiError::Protocol {
            status,
            message: format!("failed to parse response: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_status() {
        let err = ApiError::bad_status(500);
        assert_eq!(err.to_string(), "API responded with status 500: request failed");
    }
}
