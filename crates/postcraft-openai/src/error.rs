use std::error::Error as StdError;

use postcraft_core::error::PostcraftError;
use reqwest::StatusCode;

/// Every failure mode the HTTP client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// Transport failure. The display includes every underlying cause, e.g.
    /// `tcp connect error: Connection refused (os error 111)`.
    #[error("request failed: {}", display_chain(.0))]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for PostcraftError {
    fn from(value: OpenAiError) -> Self {
        PostcraftError::Backend(Box::new(value))
    }
}

/// `err` followed by each `source()`, separated by `: `. Causes already
/// spelled out by an outer message are skipped.
fn display_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use std::{fmt, io};

    use super::*;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("error sending request")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn chain_includes_every_cause() {
        let err = Outer(io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused"));
        assert_eq!(display_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn backend_error_is_not_wrapped_twice() {
        let err: PostcraftError = OpenAiError::Format("response has no choices".into()).into();
        assert_eq!(err.to_string(), "OpenAI format error: response has no choices");
    }
}
