//! Value capabilities
//!
//! Small, independent traits a wrapped type may implement. Each constraint
//! wrapper asks for exactly the set it needs:
//!
//! - [`Emptiable`] - the value can report an "empty" state (`0`, `""`, `[]`)
//! - [`Nilable`] - the type has a representable absent state (`None`)
//! - [`Identity`] - the type has a designated identity element used as an
//!   implicit initial value
//! - [`Wrapped`] - projects the value a rule acts on, so one wrapper serves
//!   both `T` and `Option<T>`
//! - [`Numeric`] - ordered numeric domain, used by range clamping
//! - [`Truncate`] - sequence-like value that can be cut to a prefix

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::BuildHasher;

use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// A value that can report whether it is empty.
pub trait Emptiable {
    /// Returns `true` for the "zero-like" state of the value.
    fn is_empty(&self) -> bool;
}

/// A type with a representable absent state.
pub trait Nilable {
    /// Returns `true` if the value is currently absent.
    fn is_absent(&self) -> bool;

    /// Moves the value into its absent state.
    fn set_absent(&mut self);
}

/// A type with a designated identity element.
///
/// Wrappers use it as the initial value when none is given.
pub trait Identity {
    /// The identity element (`0`, `""`, `[]`, `None`).
    fn identity() -> Self;
}

/// Projection from a stored value to the value a rule operates on.
///
/// Plain values project to themselves. `Option<T>` projects through to
/// `T::Inner` when present and to nothing when absent, so rules skip an
/// absent optional instead of inventing a value for it.
pub trait Wrapped {
    /// The projected value type.
    type Inner;

    /// Returns the projected value, or `None` if there is nothing to project.
    fn inner(&self) -> Option<&Self::Inner>;

    /// Runs `f` on the projected value, if any.
    fn map_inner<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Inner);
}

/// Ordered numeric domain.
pub trait Numeric: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {}

/// Sequence-like value that can be cut down to a prefix.
pub trait Truncate {
    /// Number of elements in the sequence.
    fn length(&self) -> usize;

    /// Keeps only the first `max_length` elements. No-op if already shorter.
    fn truncate_to(&mut self, max_length: usize);
}

// ============================================================================
// PRIMITIVES
// ============================================================================

macro_rules! impl_numeric {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Emptiable for $t {
                #[inline]
                fn is_empty(&self) -> bool {
                    *self == $zero
                }
            }

            impl Identity for $t {
                #[inline]
                fn identity() -> Self {
                    $zero
                }
            }

            impl Numeric for $t {}

            impl_self_wrapped!($t);
        )*
    };
}

macro_rules! impl_self_wrapped {
    ($t:ty $(, $($gen:ident),+)?) => {
        impl$(<$($gen),+>)? Wrapped for $t {
            type Inner = Self;

            #[inline]
            fn inner(&self) -> Option<&Self::Inner> {
                Some(self)
            }

            #[inline]
            fn map_inner<F>(&mut self, f: F)
            where
                F: FnOnce(&mut Self::Inner),
            {
                f(self);
            }
        }
    };
}

impl_numeric! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

impl Identity for bool {
    fn identity() -> Self {
        false
    }
}

impl_self_wrapped!(bool);
impl_self_wrapped!(String);
impl_self_wrapped!(Vec<T>, T);
impl_self_wrapped!(VecDeque<T>, T);

// ============================================================================
// STRINGS AND COLLECTIONS
// ============================================================================

impl Emptiable for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl Identity for String {
    fn identity() -> Self {
        String::new()
    }
}

impl Truncate for String {
    /// Counted in extended grapheme clusters, one per user-perceived
    /// character.
    fn length(&self) -> usize {
        self.graphemes(true).count()
    }

    fn truncate_to(&mut self, max_length: usize) {
        // Byte offset of the first grapheme past the limit, if there is one.
        if let Some((idx, _)) = self.grapheme_indices(true).nth(max_length) {
            self.truncate(idx);
        }
    }
}

impl<T> Emptiable for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Identity for Vec<T> {
    fn identity() -> Self {
        Vec::new()
    }
}

impl<T> Truncate for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn truncate_to(&mut self, max_length: usize) {
        self.truncate(max_length);
    }
}

impl<T> Emptiable for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Identity for VecDeque<T> {
    fn identity() -> Self {
        VecDeque::new()
    }
}

impl<T> Truncate for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn truncate_to(&mut self, max_length: usize) {
        self.truncate(max_length);
    }
}

impl<K, V, S> Emptiable for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V, S: BuildHasher + Default> Identity for HashMap<K, V, S> {
    fn identity() -> Self {
        HashMap::with_hasher(S::default())
    }
}

impl<T, S> Emptiable for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<T, S: BuildHasher + Default> Identity for HashSet<T, S> {
    fn identity() -> Self {
        HashSet::with_hasher(S::default())
    }
}

impl<K, V> Emptiable for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<K, V> Identity for BTreeMap<K, V> {
    fn identity() -> Self {
        BTreeMap::new()
    }
}

impl<T> Emptiable for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<T> Identity for BTreeSet<T> {
    fn identity() -> Self {
        BTreeSet::new()
    }
}

// ============================================================================
// OPTION
// ============================================================================

impl<T> Nilable for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn set_absent(&mut self) {
        *self = None;
    }
}

/// `None` has no content and counts as empty.
impl<T: Emptiable> Emptiable for Option<T> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(Emptiable::is_empty)
    }
}

impl<T> Identity for Option<T> {
    fn identity() -> Self {
        None
    }
}

impl<T: Wrapped> Wrapped for Option<T> {
    type Inner = T::Inner;

    fn inner(&self) -> Option<&Self::Inner> {
        self.as_ref().and_then(Wrapped::inner)
    }

    fn map_inner<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Inner),
    {
        if let Some(value) = self {
            value.map_inner(f);
        }
    }
}
