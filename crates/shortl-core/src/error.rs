//! Error types for shortl-core

/// Result type for shortl-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry and dispatch operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Provider name missing from both the built-in and custom tables
    #[error("provider '{name}' not found (available: {})", .available.join(", "))]
    NotFound {
        name: String,
        /// Every currently known provider name, built-ins first.
        available: Vec<String>,
    },

    /// Script-backed provider evaluated to something other than a string
    #[error("provider '{provider}' must return a string, got {got}")]
    NotAString {
        provider: String,
        got: &'static str,
    },

    /// Custom registration under a name the built-in table owns
    #[error("cannot overwrite built-in provider '{0}'")]
    BuiltinOverwrite(String),

    /// Deletion attempt against a built-in provider
    #[error("cannot delete built-in provider '{0}'")]
    BuiltinDelete(String),

    /// Registration with neither an explicit nor an intrinsic name
    #[error("custom provider has no name; pass one explicitly")]
    MissingName,

    /// Registration under an empty name
    #[error("provider name must not be empty")]
    EmptyName,

    /// Transport error or non-success status from a provider endpoint
    #[error("upstream request to '{provider}' failed: {source}")]
    Upstream {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Provider endpoint did not answer within the configured timeout
    #[error("upstream request to '{provider}' timed out")]
    UpstreamTimeout { provider: &'static str },

    /// Provider endpoint answered with a body the short URL could not be
    /// read from
    #[error("upstream response from '{provider}' had an unexpected shape: {message}")]
    UpstreamBody {
        provider: &'static str,
        message: String,
    },

    /// Failed to construct the shared HTTP client
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Script compilation or evaluation failure
    #[error(transparent)]
    Script(#[from] shortl_script::Error),

    /// Standard I/O error (configuration loading)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error (configuration loading)
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Wrap a transport error, keeping timeouts as their own kind.
    pub(crate) fn upstream(provider: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Error::UpstreamTimeout { provider }
        } else {
            Error::Upstream { provider, source }
        }
    }
}
