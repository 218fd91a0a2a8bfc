//! Provider registry: the built-in and custom name tables

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::provider::Provider;

/// Which table a provider lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Builtin,
    Custom,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Builtin => "builtin",
            ProviderKind::Custom => "custom",
        }
    }
}

#[derive(Default)]
struct Tables {
    builtins: IndexMap<String, Arc<dyn Provider>>,
    custom: IndexMap<String, Arc<dyn Provider>>,
}

/// Registry mapping provider names to providers.
///
/// Two insertion-ordered tables share one lock: the built-in table is filled
/// once during construction and never changes afterwards; the custom table
/// mutates freely for the process lifetime. Names are unique within their
/// table, and a custom name may never shadow a built-in one, so the two
/// namespaces stay disjoint. The custom table has no capacity bound.
///
/// Listing and resolution take the read lock; registration and deletion take
/// the write lock. [`ProviderRegistry::resolve`] clones the provider handle
/// out, so callers invoke providers with no lock held.
#[derive(Default)]
pub struct ProviderRegistry {
    tables: RwLock<Tables>,
}

impl ProviderRegistry {
    /// Create a registry with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a built-in provider. Construction-time only; the caller
    /// controls the name set, so there is no collision checking.
    pub(crate) fn register_builtin(&self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.tables.write().builtins.insert(name.into(), provider);
    }

    /// Insert or overwrite a custom provider.
    ///
    /// Rejects empty names and names owned by the built-in table. An
    /// existing custom entry under the same name is replaced in place,
    /// keeping its position in the listing order.
    pub fn register_custom(&self, name: &str, provider: Arc<dyn Provider>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        let mut tables = self.tables.write();
        if tables.builtins.contains_key(name) {
            return Err(Error::BuiltinOverwrite(name.to_string()));
        }
        tables.custom.insert(name.to_string(), provider);
        Ok(())
    }

    /// Remove a custom provider.
    ///
    /// Returns `Ok(true)` if an entry was removed and `Ok(false)` if the
    /// name was never a custom provider. Built-in names are immutable and
    /// fail with a policy error.
    pub fn delete_custom(&self, name: &str) -> Result<bool> {
        let mut tables = self.tables.write();
        if tables.builtins.contains_key(name) {
            return Err(Error::BuiltinDelete(name.to_string()));
        }
        Ok(tables.custom.shift_remove(name).is_some())
    }

    /// Look up a provider by name, built-ins first.
    ///
    /// The returned handle is cloned out of the table, so the provider can
    /// be invoked after the lock is released.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Provider>> {
        let tables = self.tables.read();
        tables
            .builtins
            .get(name)
            .or_else(|| tables.custom.get(name))
            .cloned()
    }

    /// Whether `name` is present in either table.
    pub fn contains(&self, name: &str) -> bool {
        let tables = self.tables.read();
        tables.builtins.contains_key(name) || tables.custom.contains_key(name)
    }

    /// Built-in provider names in registration order.
    pub fn list_builtins(&self) -> Vec<String> {
        self.tables.read().builtins.keys().cloned().collect()
    }

    /// Custom provider names in insertion order.
    pub fn list_custom(&self) -> Vec<String> {
        self.tables.read().custom.keys().cloned().collect()
    }

    /// Both tables with their kind tag, built-ins first.
    pub fn list_all(&self) -> Vec<(String, ProviderKind)> {
        let tables = self.tables.read();
        tables
            .builtins
            .keys()
            .map(|name| (name.clone(), ProviderKind::Builtin))
            .chain(
                tables
                    .custom
                    .keys()
                    .map(|name| (name.clone(), ProviderKind::Custom)),
            )
            .collect()
    }

    /// The union of all known names, built-ins first. Used by not-found
    /// error messages.
    pub fn known_names(&self) -> Vec<String> {
        self.list_all().into_iter().map(|(name, _)| name).collect()
    }

    /// Total number of registered providers.
    pub fn len(&self) -> usize {
        let tables = self.tables.read();
        tables.builtins.len() + tables.custom.len()
    }

    /// Whether both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
