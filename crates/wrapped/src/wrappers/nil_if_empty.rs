//! Collapse-to-absent wrapper
//!
//! Unifies "absent" and "zero-like" into a single representation: an
//! `Option<String>` holding `Some("")` becomes `None`, an `Option<i32>`
//! holding `Some(0)` becomes `None`.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

use crate::capability::{Emptiable, Identity, Nilable};

/// Collapses empty values into the absent state on every write.
///
/// # Examples
///
/// ```
/// use nebula_wrapped::NilIfEmpty;
///
/// let mut name = NilIfEmpty::new(Some(String::new()));
/// assert_eq!(*name, None);
/// name.set(Some("17".to_string()));
/// assert_eq!(name.as_deref(), Some("17"));
/// name.set(Some(String::new()));
/// assert_eq!(*name, None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NilIfEmpty<T> {
    value: T,
}

/// Alias for numeric fields, where "empty" reads as zero.
pub type NilIfZero<T> = NilIfEmpty<T>;

impl<T> NilIfEmpty<T>
where
    T: Nilable + Emptiable,
{
    /// Wraps `value`, collapsing it immediately if it is empty.
    pub fn new(value: T) -> Self {
        let mut this = Self { value };
        this.collapse();
        this
    }

    /// Replaces the value, collapsing it if it is empty.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.collapse();
    }

    /// Mutates the value in place, then collapses it if it became empty.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.collapse();
    }

    fn collapse(&mut self) {
        if !self.value.is_absent() && self.value.is_empty() {
            tracing::trace!(wrapper = "NilIfEmpty", "empty value collapsed to absent");
            self.value.set_absent();
        }
    }
}

impl<T> NilIfEmpty<T> {
    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Default for NilIfEmpty<T>
where
    T: Nilable + Emptiable + Identity,
{
    fn default() -> Self {
        Self::new(T::identity())
    }
}

impl<T> Deref for NilIfEmpty<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for NilIfEmpty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NilIfEmpty").field(&self.value).finish()
    }
}

impl<T: PartialEq> PartialEq<T> for NilIfEmpty<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: Serialize> Serialize for NilIfEmpty<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
