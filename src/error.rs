use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrialError>;

/// Coarse failure classes seen by callers of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required query parameter was missing. Raised before any fetch.
    Validation,
    /// The remote document could not be fetched or was not well-formed XML.
    FetchOrParse,
    /// The output encoder failed while writing an otherwise valid record set.
    Render,
}

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("invalid query: {0}")]
    Validation(String),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("failed to render {format}: {message}")]
    Render {
        format: &'static str,
        message: String,
    },
}

impl TrialError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrialError::Validation(_) => ErrorKind::Validation,
            TrialError::Request { .. } | TrialError::Status { .. } | TrialError::Malformed(_) => {
                ErrorKind::FetchOrParse
            }
            TrialError::Render { .. } => ErrorKind::Render,
        }
    }
}

impl From<quick_xml::Error> for TrialError {
    fn from(e: quick_xml::Error) -> Self {
        TrialError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_and_parse_failures_share_a_kind() {
        let status = TrialError::Status {
            url: "https://example.org".into(),
            status: 503,
        };
        let malformed = TrialError::Malformed("unexpected end of input".into());
        assert_eq!(status.kind(), ErrorKind::FetchOrParse);
        assert_eq!(malformed.kind(), ErrorKind::FetchOrParse);
        assert_eq!(
            TrialError::Validation("molecule".into()).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn status_error_names_the_url() {
        let e = TrialError::Status {
            url: "https://clinicaltrials.gov/ct2/show/NCT1".into(),
            status: 404,
        };
        assert_eq!(
            e.to_string(),
            "request to https://clinicaltrials.gov/ct2/show/NCT1 returned status 404"
        );
    }
}
