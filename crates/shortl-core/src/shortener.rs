//! Shortener facade: registration and dispatch

use std::sync::Arc;

use crate::config::ShortenerConfig;
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::providers::{IsGd, TinyUrl, Ulvis, Zws};
use crate::registry::{ProviderKind, ProviderRegistry};
use crate::script::ScriptProvider;

/// How a shorten request refers to its provider.
///
/// Either a registered name, resolved through the registry, or a provider
/// value invoked directly without ever touching the registry. The second
/// case serves one-off transformations that are not worth registering.
pub enum ProviderRef {
    Name(String),
    Callable(Arc<dyn Provider>),
}

impl From<&str> for ProviderRef {
    fn from(name: &str) -> Self {
        ProviderRef::Name(name.to_string())
    }
}

impl From<String> for ProviderRef {
    fn from(name: String) -> Self {
        ProviderRef::Name(name)
    }
}

impl From<Arc<dyn Provider>> for ProviderRef {
    fn from(provider: Arc<dyn Provider>) -> Self {
        ProviderRef::Callable(provider)
    }
}

/// What a custom registration supplies: a ready provider value, or source
/// text to compile with the restricted interpreter.
pub enum Registration {
    Callable(Arc<dyn Provider>),
    Source(String),
}

/// The main interface for URL shortening.
///
/// Owns the provider registry and the shared HTTP client the built-in
/// providers use. Construction registers the built-in set; everything after
/// that goes through [`Shortener::register_custom`],
/// [`Shortener::delete_custom`], and [`Shortener::shorten`].
///
/// ```no_run
/// # async fn example() -> shortl_core::Result<()> {
/// use shortl_core::Shortener;
///
/// let shortener = Shortener::new()?;
/// let short = shortener.shorten("https://www.example.com", "isgd").await?;
/// # Ok(())
/// # }
/// ```
pub struct Shortener {
    registry: Arc<ProviderRegistry>,
    client: reqwest::Client,
}

/// Builder for a [`Shortener`].
///
/// Overrides the configuration and, for tests and embedders, the built-in
/// provider set itself.
#[derive(Default)]
pub struct ShortenerBuilder {
    config: ShortenerConfig,
    builtins: Option<Vec<(String, Arc<dyn Provider>)>>,
}

impl ShortenerBuilder {
    pub fn config(mut self, config: ShortenerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default built-in set entirely. Entries register in the
    /// given order.
    pub fn builtins(mut self, builtins: Vec<(String, Arc<dyn Provider>)>) -> Self {
        self.builtins = Some(builtins);
        self
    }

    pub fn build(self) -> Result<Shortener> {
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout())
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(Error::HttpClient)?;

        let registry = Arc::new(ProviderRegistry::new());
        match self.builtins {
            Some(builtins) => {
                for (name, provider) in builtins {
                    registry.register_builtin(name, provider);
                }
            }
            None => {
                registry.register_builtin("isgd", Arc::new(IsGd::new(client.clone())));
                registry.register_builtin("tinyurl", Arc::new(TinyUrl::new(client.clone())));
                if self.config.extended_builtins {
                    registry.register_builtin("ulvis", Arc::new(Ulvis::new(client.clone())));
                    registry.register_builtin("zws", Arc::new(Zws::new(client.clone())));
                }
            }
        }

        tracing::debug!(
            builtins = ?registry.list_builtins(),
            "shortener constructed"
        );
        Ok(Shortener { registry, client })
    }
}

impl Shortener {
    /// Create a shortener with the default configuration and built-in set.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a shortener from explicit configuration.
    pub fn with_config(config: ShortenerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> ShortenerBuilder {
        ShortenerBuilder::default()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// The shared HTTP client, for embedders constructing their own
    /// endpoint-backed providers.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Register a custom provider and return its resolved name.
    ///
    /// An explicit `name` always wins; otherwise the provider's intrinsic
    /// name is used (for source text, the function name it defines).
    /// Registration with no resolvable name fails, as does a name already
    /// owned by a built-in. Re-registering an existing custom name
    /// overwrites it.
    pub fn register_custom(
        &self,
        registration: Registration,
        name: Option<&str>,
    ) -> Result<String> {
        let provider: Arc<dyn Provider> = match registration {
            Registration::Callable(provider) => provider,
            Registration::Source(source) => Arc::new(ScriptProvider::compile(&source)?),
        };
        let resolved = match name {
            Some(explicit) => explicit.to_string(),
            None => provider.name().ok_or(Error::MissingName)?.to_string(),
        };
        self.registry.register_custom(&resolved, provider)?;
        tracing::debug!(name = %resolved, "registered custom provider");
        Ok(resolved)
    }

    /// Remove a custom provider. `Ok(true)` if one was removed, `Ok(false)`
    /// if the name was never registered; built-in names fail.
    pub fn delete_custom(&self, name: &str) -> Result<bool> {
        let deleted = self.registry.delete_custom(name)?;
        if deleted {
            tracing::debug!(name, "deleted custom provider");
        }
        Ok(deleted)
    }

    /// Built-in provider names in registration order.
    pub fn list_builtins(&self) -> Vec<String> {
        self.registry.list_builtins()
    }

    /// Custom provider names in insertion order.
    pub fn list_custom(&self) -> Vec<String> {
        self.registry.list_custom()
    }

    /// All provider names with their kind, built-ins first.
    pub fn list_all(&self) -> Vec<(String, ProviderKind)> {
        self.registry.list_all()
    }

    /// Shorten `url` with the referenced provider.
    ///
    /// Name references resolve through the registry; a miss fails with an
    /// error listing every currently known name. The provider itself runs
    /// with no registry lock held, so a slow upstream call never blocks
    /// registration, deletion, or listing.
    pub async fn shorten(&self, url: &str, provider: impl Into<ProviderRef>) -> Result<String> {
        let provider = match provider.into() {
            ProviderRef::Name(name) => {
                tracing::debug!(url, provider = %name, "dispatching by name");
                match self.registry.resolve(&name) {
                    Some(provider) => provider,
                    None => {
                        return Err(Error::NotFound {
                            available: self.registry.known_names(),
                            name,
                        });
                    }
                }
            }
            ProviderRef::Callable(provider) => {
                tracing::debug!(url, "dispatching ad-hoc provider");
                provider
            }
        };
        provider.shorten(url).await
    }
}
