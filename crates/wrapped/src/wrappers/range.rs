//! Range clamping wrapper

use std::fmt;
use std::ops::{Deref, RangeInclusive};

use serde::{Serialize, Serializer};

use crate::capability::{Identity, Numeric, Wrapped};
use crate::restrict::Restrict;

/// Keeps a numeric value inside a closed range.
///
/// Every write is clamped as `max(low, min(high, value))`. Works on plain
/// numbers and on `Option<number>`; an absent optional is left alone.
///
/// # Examples
///
/// ```
/// use nebula_wrapped::WithinRange;
///
/// let mut age: WithinRange<i32> = WithinRange::with_range(18..=100);
/// assert_eq!(*age, 18);
/// age.set(101);
/// assert_eq!(*age, 100);
/// ```
pub struct WithinRange<T>
where
    T: Wrapped,
    T::Inner: Numeric,
{
    restriction: Restrict<T>,
    low: T::Inner,
    high: T::Inner,
}

impl<T> WithinRange<T>
where
    T: Wrapped + 'static,
    T::Inner: Numeric,
{
    /// Wraps `value`, clamping it into `range` immediately.
    pub fn new(value: T, range: RangeInclusive<T::Inner>) -> Self {
        let (low, high) = range.into_inner();
        let restriction = Restrict::new(value, move |v: &mut T| {
            v.map_inner(|inner| {
                let clamped = clamp(*inner, low, high);
                if clamped != *inner {
                    tracing::trace!(wrapper = "WithinRange", ?low, ?high, "value clamped into range");
                }
                *inner = clamped;
            });
        });
        Self {
            restriction,
            low,
            high,
        }
    }

    /// Starts from the identity element of `T`, clamped into `range`.
    pub fn with_range(range: RangeInclusive<T::Inner>) -> Self
    where
        T: Identity,
    {
        Self::new(T::identity(), range)
    }

    /// Replaces the value, clamping it into range.
    pub fn set(&mut self, value: T) {
        self.restriction.set(value);
    }

    /// Mutates the value in place, then clamps it.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        self.restriction.update(f);
    }
}

impl<T> WithinRange<T>
where
    T: Wrapped,
    T::Inner: Numeric,
{
    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> &T {
        self.restriction.get()
    }

    /// The closed range values are clamped into.
    pub fn bounds(&self) -> RangeInclusive<T::Inner> {
        self.low..=self.high
    }

    /// Consumes the wrapper, returning the value.
    pub fn into_inner(self) -> T {
        self.restriction.into_inner()
    }
}

/// `max(low, min(high, value))` over a partial order.
///
/// NaN fails every comparison and lands on `low`. With `low > high` the
/// result is always `low`, which keeps the rule idempotent.
fn clamp<N: Numeric>(value: N, low: N, high: N) -> N {
    let upper = if value > high { high } else { value };
    if upper >= low { upper } else { low }
}

impl<T> Deref for WithinRange<T>
where
    T: Wrapped,
    T::Inner: Numeric,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.restriction.get()
    }
}

impl<T> Clone for WithinRange<T>
where
    T: Wrapped + Clone,
    T::Inner: Numeric,
{
    fn clone(&self) -> Self {
        Self {
            restriction: self.restriction.clone(),
            low: self.low,
            high: self.high,
        }
    }
}

impl<T> fmt::Debug for WithinRange<T>
where
    T: Wrapped + fmt::Debug,
    T::Inner: Numeric,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithinRange")
            .field("value", self.restriction.get())
            .field("bounds", &self.bounds())
            .finish()
    }
}

impl<T> PartialEq<T> for WithinRange<T>
where
    T: Wrapped + PartialEq,
    T::Inner: Numeric,
{
    fn eq(&self, other: &T) -> bool {
        self.restriction.get() == other
    }
}

impl<T> Serialize for WithinRange<T>
where
    T: Wrapped + Serialize,
    T::Inner: Numeric,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.restriction.serialize(serializer)
    }
}
