//! Generic restriction wrapper
//!
//! [`Restrict`] pairs a value with a rule that adjusts it in place. The rule
//! runs once on construction and again after every write, so a read never
//! observes a value the rule has not seen.
//!
//! # Examples
//!
//! ```
//! use nebula_wrapped::Restrict;
//!
//! let mut age = Restrict::new(18, |v: &mut i32| *v = (*v).clamp(18, 100));
//! age.set(17);
//! assert_eq!(*age, 18);
//! age.set(101);
//! assert_eq!(*age, 100);
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::capability::Identity;

/// Shared, in-place constraint rule.
///
/// Rules must be total and idempotent: applying one twice gives the same
/// result as applying it once.
pub type Rule<T> = Arc<dyn Fn(&mut T) + Send + Sync>;

/// A value that is re-constrained by its rule on every write.
pub struct Restrict<T> {
    value: T,
    rule: Rule<T>,
}

impl<T> Restrict<T> {
    /// Wraps `value`, applying `rule` before it becomes observable.
    pub fn new<F>(value: T, rule: F) -> Self
    where
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        Self::from_rule(value, Arc::new(rule))
    }

    /// Wraps `value` with an already shared rule.
    pub fn from_rule(mut value: T, rule: Rule<T>) -> Self {
        rule(&mut value);
        Self { value, rule }
    }

    /// Wraps the identity element of `T`.
    pub fn with_rule<F>(rule: F) -> Self
    where
        T: Identity,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        Self::new(T::identity(), rule)
    }

    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and re-applies the rule.
    pub fn set(&mut self, value: T) {
        self.value = value;
        (self.rule)(&mut self.value);
    }

    /// Replaces the value, returning the previous one.
    pub fn replace(&mut self, value: T) -> T {
        let mut value = value;
        (self.rule)(&mut value);
        std::mem::replace(&mut self.value, value)
    }

    /// Mutates the value in place, then re-applies the rule.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        (self.rule)(&mut self.value);
    }

    /// Returns the rule shared by this wrapper.
    pub fn rule(&self) -> &Rule<T> {
        &self.rule
    }

    /// Consumes the wrapper, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Restrict<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Restrict<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Restrict<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Restrict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restrict")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display> fmt::Display for Restrict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Restrict<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialEq> PartialEq<T> for Restrict<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: Serialize> Serialize for Restrict<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
