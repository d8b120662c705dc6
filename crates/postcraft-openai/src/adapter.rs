use std::{env, fs, path::PathBuf, sync::Arc, time::Duration};

use postcraft_core::error::{PostcraftError, Result};
use reqwest::Client as HttpClient;

use crate::client::OpenAiClient;

/// Environment variable holding the OpenAI secret.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Wires the HTTP client [`OpenAiClient`] into a value that implements
/// [`postcraft_core::provider::ChatCompletionProvider`].
///
/// It only exists fully configured: building it is where a missing
/// credential is detected, before any generation call is attempted.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use postcraft_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
///
/// A key file, when given, takes precedence over a key from the environment.
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) api_key_file: Option<PathBuf>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load [`API_KEY_ENV`].
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read the key from a file (surrounding whitespace is ignored).
    pub fn with_api_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.api_key_file = Some(path.into());
        self
    }

    /// Point at an OpenAI-compatible server instead of `api.openai.com`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Upper bound for a whole request. Without it the client waits for the
    /// server.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`PostcraftError::Configuration`] – if the API key is missing or
    ///   blank, the key file cannot be read, or the HTTP client cannot be
    ///   constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = match &self.api_key_file {
            Some(path) => Some(fs::read_to_string(path).map_err(|err| {
                PostcraftError::Configuration(format!(
                    "cannot read API key file `{}`: {err}",
                    path.display()
                ))
            })?),
            None => self.api_key,
        };

        let api_key = api_key
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| match &self.api_key_file {
                Some(path) => PostcraftError::Configuration(format!(
                    "API key file `{}` is empty",
                    path.display()
                )),
                None => PostcraftError::Configuration(format!(
                    "missing env variable: `{API_KEY_ENV}`"
                )),
            })?;

        let mut http = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(|err| {
            PostcraftError::Configuration(format!("cannot build HTTP client: {err}"))
        })?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(api_key, http, self.base_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, PostcraftError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn blank_key_is_a_configuration_error() {
        let err = OpenAiAdapterBuilder::new()
            .with_api_key("  \n")
            .build()
            .unwrap_err();
        assert!(matches!(err, PostcraftError::Configuration(_)));
    }

    #[test]
    fn key_file_wins_over_inline_key() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "sk-from-file").expect("write key");

        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-inline")
            .with_api_key_file(file.path())
            .with_base_url("http://localhost:9/v1/")
            .build()
            .expect("configured");

        assert_eq!(adapter.client().base_url(), "http://localhost:9/v1");
    }

    #[test]
    fn unreadable_key_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = OpenAiAdapterBuilder::new()
            .with_api_key_file(dir.path().join("absent"))
            .build()
            .unwrap_err();
        assert!(err.to_string().starts_with("configuration error: cannot read API key file"));
    }
}
