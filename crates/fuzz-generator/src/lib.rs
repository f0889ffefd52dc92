//! Generators and combinators for fuzzcomb.
//!
//! Generators are plain functions returning a [`Thunk`]. They accept their
//! inputs as anything convertible into a [`Wrapped`] value, so a literal and
//! another generator can be passed interchangeably, and pipelines are built
//! by nesting calls. Nothing is sampled until the outermost thunk is run.
//!
//! # Architecture
//!
//! ```text
//!   number::uniform(1, 8)          string::lowercase_letter(Uniform)
//!            │                                  │
//!            └───────────────┬──────────────────┘
//!                            ▼
//!                 string::from(letter, size)
//!                            │
//!                            ▼
//! ┌─────────────────┐   next_sample()
//! │     Fuzzer      │ ──────────────▶  "qmtwz"
//! │                 │
//! │  - config       │
//! │  - source       │
//! │  - index        │
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use fuzz_generator::generators::{number, string};
//! use fuzz_generator::{Fuzzer, Uniform};
//!
//! let word = string::from(string::lowercase_letter(Uniform), number::uniform(1usize, 8));
//!
//! let mut fuzzer = Fuzzer::new(42);
//! let sample = fuzzer.next_sample(&word).unwrap();
//! assert!(sample.chars().all(|c| c.is_ascii_lowercase()));
//! ```
//!
//! # Generators
//!
//! - `number` - uniform integers and reals over a half-open range
//! - `big_int` - uniform arbitrary-precision integers
//! - `boolean` - constant and density-picked booleans
//! - `date` - uniform dates between two millisecond timestamps
//! - `logic` - `one_of`, `all_of`, `mapped`, `filtered`, `enumerate` and friends
//! - `array`, `set`, `object` - collection builders and subset selection
//! - `string` - string builders and character classes
//! - `unicode` - characters from named Unicode blocks
//! - `sequence` - lazy, restartable sequences

pub mod density;
pub mod fuzzer;
pub mod generators;

// Re-exports for convenience
pub use density::{Uniform, UniformBigInt};
pub use fuzzer::{Fuzzer, SampleIterator};
pub use fuzz_core::{Thunk, Wrapped};
