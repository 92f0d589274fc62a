// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Memoization for functions over primitive arguments.
//!
//! [`primitive_memo`] wraps a deterministic function and returns a
//! [`PrimitiveMemo`] with the same input/output behavior that only invokes the
//! wrapped function once per distinct argument combination.
//!
//! # Cache keys
//!
//! Keys are built by rendering every argument with its canonical text form
//! (numbers as JavaScript prints them, booleans as `true`/`false`, strings
//! verbatim) and joining them with `&`. Arguments that render the same share a
//! cache entry, so `0` and `"0"` hit the same value. Renderings containing `&`
//! may collide with longer argument lists as well; both are accepted
//! limitations of the key scheme.
//!
//! # Absent results
//!
//! A `None` or `Err(_)` result is never stored and never counts as a hit.
//! Lookups that fail are recomputed on every call instead of poisoning the
//! cache, and leave no entry behind. Return types without a [`CacheValue`]
//! impl can be wrapped in [`Cached`].
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use tzguard_memo::primitive_memo;
//!
//! let calls = Cell::new(0);
//! let square = primitive_memo(|n: u32| {
//!     calls.set(calls.get() + 1);
//!     n * n
//! });
//!
//! assert_eq!(square.call((12,)), 144);
//! assert_eq!(square.call((12,)), 144);
//! assert_eq!(calls.get(), 1);
//! ```

pub mod key;
mod memo;

pub use key::{ArgList, PrimitiveArg, KEY_DELIMITER};
pub use memo::{primitive_memo, CacheValue, Cached, MemoFn, PrimitiveMemo};
