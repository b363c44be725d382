//! Default-backed accessor over an external key-value store
//!
//! [`DefaultBacked`] reads a key from a shared [`KeyValueStore`] and falls
//! back to a designated default when the key is missing. Writing a value
//! that serializes to JSON `null` (for example `None`) removes the key.
//!
//! Values cross the store boundary as [`serde_json::Value`], so any
//! `T: Serialize + DeserializeOwned` can be stored.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use nebula_wrapped::{DefaultBacked, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let launches = DefaultBacked::new("app.launches", 0_u32, Arc::clone(&store));
//!
//! assert_eq!(launches.get(), 0);
//! launches.set(3)?;
//! assert_eq!(launches.get(), 3);
//! # Ok::<(), nebula_wrapped::WrappedError>(())
//! ```

mod memory;

pub use memory::{MemoryStore, standard_store};

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::capability::Identity;
use crate::error::{Result, WrappedError};

// ============================================================================
// STORE CAPABILITY
// ============================================================================

/// Key-value store consumed by [`DefaultBacked`].
///
/// The store is shared and externally owned; implementations handle their
/// own synchronization.
pub trait KeyValueStore: Send + Sync {
    /// Looks up `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: Value);

    /// Removes the entry for `key`, if any.
    fn remove(&self, key: &str);
}

// ============================================================================
// DEFAULT-BACKED ACCESSOR
// ============================================================================

/// Typed accessor for one key of a [`KeyValueStore`].
pub struct DefaultBacked<T, S: ?Sized = dyn KeyValueStore> {
    key: String,
    default: T,
    store: Arc<S>,
}

impl<T, S> DefaultBacked<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore + ?Sized,
{
    /// Binds `key` in `store`, reading `default` while the key is missing.
    pub fn new(key: impl Into<String>, default: T, store: Arc<S>) -> Self {
        Self {
            key: key.into(),
            default,
            store,
        }
    }

    /// Binds `key` with the identity element of `T` as the default.
    pub fn with_identity(key: impl Into<String>, store: Arc<S>) -> Self
    where
        T: Identity,
    {
        Self::new(key, T::identity(), store)
    }

    /// Reads the stored value, or the default if it is missing or does not
    /// decode as `T`.
    pub fn get(&self) -> T {
        let Some(raw) = self.store.get(&self.key) else {
            return self.default.clone();
        };
        match serde_json::from_value(raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(key = %self.key, %error, "stored value did not decode, using default");
                self.default.clone()
            }
        }
    }

    /// Persists `value`; an absent value removes the key instead.
    ///
    /// Absence is decided on the encoded form: anything that serializes to
    /// JSON `null` removes the key, including `Some(None)` for a nested
    /// `Option` and `()`.
    pub fn set(&self, value: T) -> Result<()> {
        let raw = serde_json::to_value(&value)
            .map_err(|source| WrappedError::serialize(self.key.as_str(), source))?;
        if raw.is_null() {
            tracing::debug!(key = %self.key, "absent value written, removing key");
            self.store.remove(&self.key);
        } else {
            self.store.set(&self.key, raw);
        }
        Ok(())
    }

    /// Removes the key so reads fall back to the default.
    pub fn reset(&self) {
        self.store.remove(&self.key);
    }

    /// Returns `true` if the store currently holds an entry for the key.
    pub fn is_stored(&self) -> bool {
        self.store.get(&self.key).is_some()
    }

    /// A copy of this accessor bound to the same key, default and store.
    pub fn projected(&self) -> Self {
        self.clone()
    }
}

impl<T> DefaultBacked<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Binds `key` in the process-wide [`standard_store`].
    pub fn standard(key: impl Into<String>, default: T) -> Self {
        let store: Arc<dyn KeyValueStore> = standard_store();
        Self::new(key, default, store)
    }
}

impl<T, S: ?Sized> DefaultBacked<T, S> {
    /// The key this accessor reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value read while the key is missing.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<T: Clone, S: ?Sized> Clone for DefaultBacked<T, S> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            default: self.default.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: fmt::Debug, S: ?Sized> fmt::Debug for DefaultBacked<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultBacked")
            .field("key", &self.key)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
