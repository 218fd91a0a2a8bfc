//! The provider capability and adapters for plain functions

use async_trait::async_trait;

use crate::error::Result;

/// A URL-shortening transformation.
///
/// Implementations take the long URL and produce the short URL. Built-in
/// providers call out to third-party endpoints; custom providers can be any
/// value implementing this trait, including closures wrapped in
/// [`FnProvider`] and compiled scripts.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Name the provider carries on its own.
    ///
    /// Used when a registration does not supply a name explicitly; an
    /// explicit name always wins over this one.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Transform `url` into a short URL.
    async fn shorten(&self, url: &str) -> Result<String>;
}

/// Adapter turning a plain function or closure into a [`Provider`].
///
/// ```
/// use shortl_core::FnProvider;
///
/// let provider = FnProvider::named("tag", |url| Ok(format!("x-{url}")));
/// assert_eq!(provider.name(), Some("tag"));
/// ```
pub struct FnProvider {
    name: Option<String>,
    func: Box<dyn Fn(&str) -> Result<String> + Send + Sync>,
}

impl FnProvider {
    /// Wrap an anonymous function. Registration of the result requires an
    /// explicit name.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Box::new(func),
        }
    }

    /// Wrap a function under an intrinsic name.
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Box::new(func),
        }
    }

    /// The intrinsic name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[async_trait]
impl Provider for FnProvider {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        (self.func)(url)
    }
}
