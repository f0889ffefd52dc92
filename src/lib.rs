//! fuzzcomb: composable randomized-value generators.
//!
//! This crate re-exports the workspace under one name and hosts the
//! `fuzzcomb` command-line sampler.
//!
//! - [`fuzz_core`] - wrapped values, thunks, the random source, errors and config
//! - [`generators`] - scalar, logic, collection, string and Unicode generators
//! - [`unicode_blocks`] - the static Unicode block table
//!
//! ```rust
//! use fuzzcomb::generators::{array, logic, number};
//! use fuzzcomb::{Fuzzer, Source};
//!
//! let mut src = Source::seeded(42);
//! let even = logic::filtered(|n: &i64| n % 2 == 0, number::uniform(0i64, 100));
//! let evens = array::from(even, 5);
//!
//! let mut fuzzer = Fuzzer::new(7);
//! let sample = fuzzer.next_sample(&evens).unwrap();
//! assert!(sample.iter().all(|n| n % 2 == 0));
//! assert_eq!(evens.generate(&mut src).unwrap().len(), 5);
//! ```

pub mod sample;

pub use fuzz_core;
pub use fuzz_generator::generators;
pub use unicode_blocks;

pub use fuzz_core::{
    constant, fmap, literals, BigInt, ConfigError, Density, DensityBigInt, FuzzConfig, FuzzError,
    Result, RetryPolicy, Source, Thunk, Value, Wrapped,
};
pub use fuzz_generator::{Fuzzer, SampleIterator, Uniform, UniformBigInt};
