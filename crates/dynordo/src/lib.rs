//! # Dynordo — dynamic ordering over the ordo core
//!
//! This crate layers a dynamically typed variant of the ordering engine over
//! the generic [`ordo`] core. Values are represented by the [`Value`] enum;
//! which values may be compared together is governed by a documented
//! conversion lattice ([`TypeDescriptor`]); and every ordering operation
//! validates its arguments fully, converts them to the comparator's type, and
//! then delegates to the statically typed core algorithms.
//!
//! A type `U` can be used where a comparator over `T` is expected when:
//!
//! * `U` is a pointer (or pointer chain) to `T`, or the other way around.
//! * `U` and `T` are of the same kind.
//! * `U` and `T` are numerics of the same category (signed, unsigned, float)
//!   and `U`'s bit width is less than or equal to `T`'s.
//! * `U` and `T` are records with identical field layouts.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynordo::prelude::*;
//!
//! let ty = TypeDescriptor::new(BaseKind::Int(64));
//! let cmp = DynOrder::new()
//!     .by(ty, |a, b| a.as_i64().cmp(&b.as_i64()))
//!     .build()?;
//!
//! // Narrower integers widen into the comparator's type; the stored
//! // values keep their own representation.
//! let mut seq = Value::from(vec![Value::I8(3), Value::I16(-2), Value::I64(7)]);
//! cmp.sort(&mut seq)?;
//! assert_eq!(seq, Value::from(vec![Value::I16(-2), Value::I8(3), Value::I64(7)]));
//! # Result::<(), DynOrderError>::Ok(())
//! ```
//!
//! ## Default comparators
//!
//! ```rust
//! use dynordo::prelude::*;
//!
//! let registry = Registry::default();
//!
//! let mut seq = Value::from(vec![
//!     Value::from("joe"),
//!     Value::from("ann"),
//!     Value::from("zoe"),
//! ]);
//! registry.sort(&mut seq)?;
//! assert_eq!(seq, Value::from(vec![
//!     Value::from("ann"),
//!     Value::from("joe"),
//!     Value::from("zoe"),
//! ]));
//! # Result::<(), DynOrderError>::Ok(())
//! ```

// Layer 1: Primitives - error types and the dynamic value representation.
mod primitives;

// Layer 2: Typing - type descriptors, compatibility, and conversion.
mod typing;

// Layer 3: Compare - dynamic comparator composition and conditions.
mod compare;

// Layer 4: Adapters - bridging dynamic sequences onto the ordo core.
mod adapters;

// Default-comparator resolution at the boundary.
mod registry;

// High-level fluent API for building and applying dynamic orderings.
mod api;

// Standard dynordo prelude.
pub mod prelude {
    pub use crate::api::DynOrder;
    pub use crate::compare::comparator::{DynCompareFn, DynComparator};
    pub use crate::compare::condition::DynCondition;
    pub use crate::primitives::errors::DynOrderError;
    pub use crate::primitives::value::{Record, Value};
    pub use crate::registry::Registry;
    pub use crate::typing::descriptor::{BaseKind, TypeDescriptor};
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
    pub mod typing {
        pub use crate::typing::*;
    }
    pub mod compare {
        pub use crate::compare::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod registry {
        pub use crate::registry::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
