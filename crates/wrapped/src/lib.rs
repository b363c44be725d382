//! # nebula-wrapped
//!
//! Value wrappers that enforce an invariant at the moment a value is set.
//!
//! Each wrapper owns one value and one rule. The rule runs on construction
//! and after every write, so a read always sees a value that already
//! satisfies it. Violations are never reported: out-of-range numbers are
//! clamped, long sequences truncated, empty optionals collapsed to `None`,
//! and strings that fail a pattern are rejected in favor of the previous
//! value.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_wrapped::prelude::*;
//!
//! let mut age: WithinRange<i32> = WithinRange::with_range(18..=100);
//! age.set(17);
//! assert_eq!(*age, 18);
//!
//! let mut nickname = NilIfEmpty::new(Some(String::new()));
//! assert_eq!(*nickname, None);
//! nickname.set(Some("neb".to_string()));
//! assert_eq!(nickname.as_deref(), Some("neb"));
//! ```
//!
//! ## Building Blocks
//!
//! - **Capabilities**: [`Emptiable`], [`Nilable`], [`Identity`], [`Wrapped`],
//!   [`Numeric`], [`Truncate`]
//! - **Generic**: [`Restrict`] - any idempotent in-place rule
//! - **Derived**: [`WithinRange`], [`Truncated`], [`NilIfEmpty`] /
//!   [`NilIfZero`], [`RegEx`]
//! - **Persisted**: [`DefaultBacked`] over a [`KeyValueStore`]

pub mod capability;
pub mod error;
pub mod prelude;
pub mod restrict;
pub mod store;
pub mod wrappers;

pub use capability::{Emptiable, Identity, Nilable, Numeric, Truncate, Wrapped};
pub use error::{Result, WrappedError};
pub use restrict::{Restrict, Rule};
pub use store::{DefaultBacked, KeyValueStore, MemoryStore, standard_store};
pub use wrappers::{Matcher, NilIfEmpty, NilIfZero, RegEx, Truncated, WholeMatch, WithinRange};
