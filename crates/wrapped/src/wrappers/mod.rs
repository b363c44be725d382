//! Derived constraint wrappers
//!
//! | Wrapper | Requires | On write |
//! |---------|----------|----------|
//! | [`WithinRange`] | [`Wrapped`](crate::Wrapped) over [`Numeric`](crate::Numeric) | clamp into `low..=high` |
//! | [`Truncated`] | [`Wrapped`](crate::Wrapped) over [`Truncate`](crate::Truncate) | keep the first `max_length` elements |
//! | [`NilIfEmpty`] / [`NilIfZero`] | [`Nilable`](crate::Nilable) + [`Emptiable`](crate::Emptiable) | collapse empty to absent |
//! | [`RegEx`] | [`Wrapped`](crate::Wrapped) over `String` | reject non-matching writes |
//!
//! None of them report a violation. The first three correct the value, the
//! regex wrapper keeps the previous one.

mod nil_if_empty;
mod pattern;
mod range;
mod truncated;

pub use nil_if_empty::{NilIfEmpty, NilIfZero};
pub use pattern::{Matcher, RegEx, WholeMatch};
pub use range::WithinRange;
pub use truncated::Truncated;
