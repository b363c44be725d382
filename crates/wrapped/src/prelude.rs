//! Prelude module for convenient imports.
//!
//! ```rust
//! use nebula_wrapped::prelude::*;
//!
//! let mut code: Truncated<String> = Truncated::with_max_length(3);
//! code.set("abcdef".to_string());
//! assert_eq!(code.as_str(), "abc");
//! ```

pub use crate::capability::{Emptiable, Identity, Nilable, Numeric, Truncate, Wrapped};
pub use crate::error::WrappedError;
pub use crate::restrict::Restrict;
pub use crate::store::{DefaultBacked, KeyValueStore, MemoryStore};
pub use crate::wrappers::{Matcher, NilIfEmpty, NilIfZero, RegEx, Truncated, WithinRange};
