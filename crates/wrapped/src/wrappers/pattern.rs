//! Regex-filtered string wrapper
//!
//! Unlike the other wrappers, [`RegEx`] does not coerce: a write whose
//! string fails the pattern is discarded and the previous value stays.
//! Matching is delegated to a [`Matcher`]; the default is [`WholeMatch`],
//! a whole-string test over the `regex` crate.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

use crate::capability::{Identity, Wrapped};

// ============================================================================
// MATCHER CAPABILITY
// ============================================================================

/// String-matching capability used by [`RegEx`].
pub trait Matcher {
    /// Returns `true` if the whole `candidate` is accepted.
    fn matches(&self, candidate: &str) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Whole-string regex matcher.
///
/// The pattern is anchored as `^(?:pattern)$`, so `[a-z]+` rejects
/// `"abc1"` even though a substring matches. When a top-level `(?x)` flag
/// is still on at the end of the pattern, a newline closes any trailing
/// `#` comment before the anchor.
#[derive(Debug, Clone)]
pub struct WholeMatch {
    pattern: String,
    regex: regex::Regex,
}

impl WholeMatch {
    /// Compiles `pattern` for whole-string matching.
    pub fn new(pattern: &str) -> crate::Result<Self> {
        let anchored = if ends_verbose(pattern) {
            format!("^(?:{pattern}\n)$")
        } else {
            format!("^(?:{pattern})$")
        };
        let regex = regex::Regex::new(&anchored)?;
        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as supplied, without the anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Whether a bare `(?flags)` group leaves verbose mode on at the end of
/// `pattern`. Scoped `(?x:...)` groups close before the end and are ignored.
fn ends_verbose(pattern: &str) -> bool {
    let mut verbose = false;
    let mut rest = pattern;
    while let Some(start) = rest.find("(?") {
        let after = &rest[start + 2..];
        let len = after
            .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
            .unwrap_or(after.len());
        let (flags, tail) = after.split_at(len);
        if tail.starts_with(')') {
            let (on, off) = flags.split_once('-').unwrap_or((flags, ""));
            if off.contains('x') {
                verbose = false;
            } else if on.contains('x') {
                verbose = true;
            }
        }
        rest = tail;
    }
    verbose
}

impl Matcher for WholeMatch {
    fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

// ============================================================================
// REGEX WRAPPER
// ============================================================================

/// A string that only accepts writes matching a pattern.
///
/// The initial value is taken as-is; only later writes are checked. A
/// rejected write leaves the last accepted value in place.
///
/// # Examples
///
/// ```
/// use nebula_wrapped::RegEx;
///
/// let mut email: RegEx<String> =
///     RegEx::with_pattern(r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}")?;
/// email.set("test@test.com".to_string());
/// email.set("test.com".to_string());
/// assert_eq!(email.as_str(), "test@test.com");
/// # Ok::<(), nebula_wrapped::WrappedError>(())
/// ```
pub struct RegEx<T, M = WholeMatch> {
    value: T,
    matcher: M,
}

impl<T> RegEx<T, WholeMatch>
where
    T: Wrapped<Inner = String>,
{
    /// Wraps `value` with a whole-string `pattern`.
    ///
    /// Fails only if the pattern does not compile.
    pub fn new(value: T, pattern: &str) -> crate::Result<Self> {
        Ok(Self::with_matcher(value, WholeMatch::new(pattern)?))
    }

    /// Starts from the identity element of `T`, unchecked.
    pub fn with_pattern(pattern: &str) -> crate::Result<Self>
    where
        T: Identity,
    {
        Self::new(T::identity(), pattern)
    }
}

impl<T, M> RegEx<T, M>
where
    T: Wrapped<Inner = String>,
    M: Matcher,
{
    /// Wraps `value` with a caller-supplied matcher.
    pub fn with_matcher(value: T, matcher: M) -> Self {
        Self { value, matcher }
    }

    /// Writes `candidate` if it matches; otherwise keeps the current value.
    pub fn set(&mut self, candidate: T) {
        if self.accepts(&candidate) {
            self.value = candidate;
        } else {
            tracing::trace!(wrapper = "RegEx", "write rejected by pattern, previous value kept");
        }
    }

    /// Mutates a snapshot of the value and commits it only if it matches.
    pub fn update<F>(&mut self, f: F)
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        let mut candidate = self.value.clone();
        f(&mut candidate);
        self.set(candidate);
    }

    /// An absent candidate carries no string and is always accepted.
    fn accepts(&self, candidate: &T) -> bool {
        candidate
            .inner()
            .is_none_or(|s| self.matcher.matches(s))
    }
}

impl<T, M> RegEx<T, M> {
    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the matcher writes are checked against.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Consumes the wrapper, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, M> Deref for RegEx<T, M> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, M: Clone> Clone for RegEx<T, M> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            matcher: self.matcher.clone(),
        }
    }
}

impl<T: fmt::Debug, M> fmt::Debug for RegEx<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegEx")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq, M> PartialEq<T> for RegEx<T, M> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: Serialize, M> Serialize for RegEx<T, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";

    #[test]
    fn test_invalid_write_reverts() {
        let mut sut: RegEx<String> = RegEx::with_pattern(EMAIL).unwrap();
        sut.set("test@test.com".into());
        assert_eq!(sut.get(), "test@test.com");
        sut.set("test.com".into());
        assert_eq!(sut.get(), "test@test.com");
    }

    #[test]
    fn test_initial_value_not_checked() {
        let sut = RegEx::new("not an email".to_string(), EMAIL).unwrap();
        assert_eq!(sut.get(), "not an email");

        let sut: RegEx<String> = RegEx::with_pattern(EMAIL).unwrap();
        assert_eq!(sut.get(), "");
    }

    #[test]
    fn test_match_is_whole_string() {
        let matcher = WholeMatch::new("[a-z]+").unwrap();
        assert!(matcher.matches("abc"));
        assert!(!matcher.matches("abc1"));
        assert!(!matcher.matches("1abc"));
        assert_eq!(matcher.pattern(), "[a-z]+");
    }

    #[test]
    fn test_alternation_anchored_as_group() {
        let matcher = WholeMatch::new("cat|dog").unwrap();
        assert!(matcher.matches("dog"));
        assert!(!matcher.matches("dogs"));
        assert!(!matcher.matches("a cat"));
    }

    #[test]
    fn test_verbose_pattern_with_trailing_comment() {
        let matcher = WholeMatch::new("(?x) [a-z]+ # letters").unwrap();
        assert!(matcher.matches("abc"));
        assert!(!matcher.matches("abc1"));
        assert!(!matcher.matches("abc\n"));

        let mut sut = RegEx::new("seed".to_string(), "(?ix) [a-z]+ # letters").unwrap();
        sut.set("ABC".into());
        assert_eq!(sut.get(), "ABC");
    }

    #[test]
    fn test_hash_is_literal_outside_verbose_mode() {
        let matcher = WholeMatch::new("a#b").unwrap();
        assert!(matcher.matches("a#b"));
        assert!(!matcher.matches("a"));

        let matcher = WholeMatch::new("(?x)a (?-x)#b").unwrap();
        assert!(matcher.matches("a#b"));
        assert!(!matcher.matches("a#b\n"));
    }

    #[test]
    fn test_ends_verbose() {
        assert!(ends_verbose("(?x) a # c"));
        assert!(ends_verbose("(?xi)a"));
        assert!(!ends_verbose("(?x)a(?-x)b"));
        assert!(!ends_verbose("(?x:a)b"));
        assert!(!ends_verbose("(?i)a#b"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let result: crate::Result<RegEx<String>> = RegEx::with_pattern("(unclosed");
        assert!(matches!(result, Err(crate::WrappedError::InvalidPattern(_))));
    }

    #[test]
    fn test_optional_absent_accepted() {
        let mut sut: RegEx<Option<String>> = RegEx::with_pattern("[0-9]{3}").unwrap();
        sut.set(Some("123".into()));
        sut.set(Some("12".into()));
        assert_eq!(sut.as_deref(), Some("123"));
        sut.set(None);
        assert_eq!(*sut, None);
    }

    #[test]
    fn test_closure_matcher() {
        let mut sut = RegEx::with_matcher("ok".to_string(), |s: &str| s.starts_with('o'));
        sut.set("nope".into());
        assert_eq!(sut.get(), "ok");
        sut.set("okay".into());
        assert_eq!(sut.get(), "okay");
    }

    #[test]
    fn test_update_commits_or_discards() {
        let mut sut = RegEx::with_matcher("ab".to_string(), |s: &str| s.len() <= 3);
        sut.update(|s| s.push('c'));
        assert_eq!(sut.get(), "abc");
        sut.update(|s| s.push('d'));
        assert_eq!(sut.get(), "abc");
    }
}
