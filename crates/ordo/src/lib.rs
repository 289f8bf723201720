//! # Ordo — composable ordering for Rust
//!
//! This crate provides functionality to easily define and apply order on
//! values. An ordering is described by one or more
//! [three-way comparison](https://en.wikipedia.org/wiki/Three-way_comparison)
//! functions of the form `Fn(&T, &T) -> Ordering`, composed with tie-break
//! semantics: when the leading function reports equality, the next function
//! in priority order decides.
//!
//! ## Supported tasks
//!
//! * `sort` / `sort_stable` - sort a sequence.
//! * `search` - binary search for a value in a sorted sequence.
//! * `min_max` - indices of the minimal and maximal values of a sequence.
//! * `select` - place the k-th smallest value at index k, in worst-case
//!   linear time, partitioning the sequence around it.
//! * `is_sorted` / `is_strict_sorted` - check if a sequence is sorted.
//! * `is` - a readable condition object bound to a left-hand value.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordo::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! // Order by name, then by age.
//! let cmp = Order::new()
//!     .by(|a: &Person, b: &Person| a.name.cmp(&b.name))
//!     .by(|a: &Person, b: &Person| a.age.cmp(&b.age))
//!     .build()?;
//!
//! let mut people = vec![
//!     Person { name: "joe".into(), age: 42 },
//!     Person { name: "ann".into(), age: 31 },
//!     Person { name: "joe".into(), age: 17 },
//! ];
//!
//! cmp.sort(&mut people);
//! assert_eq!(people[0].name, "ann");
//! assert_eq!(people[1].age, 17);
//! # Result::<(), OrderError>::Ok(())
//! ```
//!
//! ## Order statistics
//!
//! ```rust
//! use ordo::prelude::*;
//!
//! let cmp = Comparator::<i64>::natural();
//! let mut values = vec![9, 1, 8, 2, 7];
//!
//! // After select, index 2 holds the value that a full sort would put there,
//! // smaller values sit to its left and greater-or-equal values to its right.
//! cmp.select(&mut values, 2)?;
//! assert_eq!(values[2], 7);
//! # Result::<(), OrderError>::Ok(())
//! ```
//!
//! ## Conditions
//!
//! ```rust
//! use ordo::prelude::*;
//!
//! let cmp = Comparator::<i64>::natural();
//!
//! let is_five = cmp.is(5);
//! assert!(is_five.greater_equal(&1) && is_five.less(&9));
//! # Result::<(), OrderError>::Ok(())
//! ```
//!
//! ## Minimal usage (no_std)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ordo = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and the sequence view.
mod primitives;

// Layer 2: Compare - comparator composition and conditions.
mod compare;

// Layer 3: Algorithms - selection, search, and scanning.
mod algorithms;

// High-level fluent API for building and applying orderings.
mod api;

// Standard ordo prelude.
pub mod prelude {
    pub use crate::api::Order;
    pub use crate::compare::comparator::{Comparator, CompareFn};
    pub use crate::compare::condition::Condition;
    pub use crate::primitives::errors::OrderError;
    pub use crate::primitives::view::SequenceView;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod compare {
        pub use crate::compare::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
