//! Length truncation wrapper

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

use crate::capability::{Identity, Truncate, Wrapped};
use crate::restrict::Restrict;

/// Keeps a sequence at most `max_length` elements long.
///
/// Writes longer than the limit are cut down to their prefix. Strings are
/// measured in extended grapheme clusters, so a combining accent or a flag
/// is never split.
///
/// # Examples
///
/// ```
/// use nebula_wrapped::Truncated;
///
/// let mut code: Truncated<String> = Truncated::with_max_length(5);
/// code.set("1234567890".to_string());
/// assert_eq!(code.as_str(), "12345");
/// ```
pub struct Truncated<T> {
    restriction: Restrict<T>,
    max_length: usize,
}

impl<T> Truncated<T>
where
    T: Wrapped + 'static,
    T::Inner: Truncate,
{
    /// Wraps `value`, truncating it immediately.
    pub fn new(value: T, max_length: usize) -> Self {
        let restriction = Restrict::new(value, move |v: &mut T| {
            v.map_inner(|inner| {
                let length = inner.length();
                if length > max_length {
                    tracing::trace!(wrapper = "Truncated", length, max_length, "value truncated");
                    inner.truncate_to(max_length);
                }
            });
        });
        Self {
            restriction,
            max_length,
        }
    }

    /// Starts from the identity element of `T`.
    pub fn with_max_length(max_length: usize) -> Self
    where
        T: Identity,
    {
        Self::new(T::identity(), max_length)
    }

    /// Replaces the value, truncating it to `max_length`.
    pub fn set(&mut self, value: T) {
        self.restriction.set(value);
    }

    /// Mutates the value in place, then truncates it.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        self.restriction.update(f);
    }
}

impl<T> Truncated<T> {
    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> &T {
        self.restriction.get()
    }

    /// The longest value this wrapper holds.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Consumes the wrapper, returning the value.
    pub fn into_inner(self) -> T {
        self.restriction.into_inner()
    }
}

impl<T> Deref for Truncated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.restriction.get()
    }
}

impl<T: Clone> Clone for Truncated<T> {
    fn clone(&self) -> Self {
        Self {
            restriction: self.restriction.clone(),
            max_length: self.max_length,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Truncated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Truncated")
            .field("value", self.restriction.get())
            .field("max_length", &self.max_length)
            .finish()
    }
}

impl<T: PartialEq> PartialEq<T> for Truncated<T> {
    fn eq(&self, other: &T) -> bool {
        self.restriction.get() == other
    }
}

impl<T: Serialize> Serialize for Truncated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.restriction.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_string_truncated() {
        let mut sut: Truncated<String> = Truncated::with_max_length(5);
        sut.set("1234567890".into());
        assert_eq!(sut.get(), "12345");
        sut.set("abc".into());
        assert_eq!(sut.get(), "abc");
    }

    #[test]
    fn test_string_truncated_by_grapheme() {
        let mut sut: Truncated<String> = Truncated::with_max_length(2);
        sut.set("e\u{301}e\u{301}e\u{301}".into());
        assert_eq!(sut.get(), "e\u{301}e\u{301}");

        let mut flag: Truncated<String> = Truncated::with_max_length(1);
        flag.set("\u{1F1FA}\u{1F1F8}ab".into());
        assert_eq!(flag.get(), "\u{1F1FA}\u{1F1F8}");
    }

    #[test]
    fn test_vec_truncated() {
        let mut sut: Truncated<Vec<i32>> = Truncated::with_max_length(5);
        sut.set(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
        assert_eq!(*sut, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_initial_value_truncated_on_construction() {
        let sut = Truncated::new(VecDeque::from([1, 2, 3]), 2);
        assert_eq!(sut.into_inner(), VecDeque::from([1, 2]));
    }

    #[test]
    fn test_optional_string_truncated_when_present() {
        let mut sut: Truncated<Option<String>> = Truncated::with_max_length(3);
        assert_eq!(*sut, None);
        sut.set(Some("abcdef".into()));
        assert_eq!(sut.as_deref(), Some("abc"));
    }

    #[test]
    fn test_zero_max_length_empties() {
        let sut = Truncated::new("anything".to_string(), 0);
        assert!(sut.is_empty());
    }

    #[test]
    fn test_update_push_past_limit() {
        let mut sut = Truncated::new(vec!['a', 'b'], 2);
        sut.update(|v| v.push('c'));
        assert_eq!(*sut, vec!['a', 'b']);
        assert_eq!(sut.max_length(), 2);
    }
}
