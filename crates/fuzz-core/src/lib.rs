//! Core types for the fuzzcomb generator combinators.
//!
//! This crate provides the foundation every generator is built on:
//!
//! - [`Wrapped`] - a literal value or a deferred [`Thunk`] producing one
//! - [`Source`] - the random source threaded through evaluation
//! - [`Density`] / [`DensityBigInt`] - the injected randomness policy
//! - [`FuzzError`] - errors raised while evaluating a pipeline
//! - [`FuzzConfig`] - seed and retry settings loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! fuzz-core (this crate)
//!    │
//!    ├─── unicode-blocks   (static block table, no dependency on this crate)
//!    │
//!    └─── fuzz-generator   (scalar, logic, collection and string generators)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fuzz_core::{constant, Source, Wrapped};
//!
//! let mut src = Source::seeded(42);
//! let literal = Wrapped::Literal(3);
//! let deferred: Wrapped<i32> = constant(3).into();
//!
//! assert_eq!(literal.unwrap(&mut src).unwrap(), deferred.unwrap(&mut src).unwrap());
//! ```

pub mod config;
pub mod density;
pub mod error;
pub mod source;
pub mod wrapped;

// Re-exports for convenience
pub use config::{ConfigError, FuzzConfig, RetryPolicy};
pub use density::{Density, DensityBigInt};
pub use error::{FuzzError, Result};
pub use source::Source;
pub use wrapped::{constant, fmap, literals, Thunk, Value, Wrapped};

pub use num_bigint::BigInt;
