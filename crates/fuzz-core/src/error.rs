//! Error type shared by every generator.

use num_bigint::BigInt;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FuzzError>;

/// Errors raised while evaluating a generator pipeline.
///
/// Nothing is recovered locally: each error propagates to whoever unwrapped
/// the generator that detected it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FuzzError {
    /// Index selection over a sequence with no elements
    #[error("Cannot retrieve value from empty collection")]
    EmptyCollection,

    /// Key, value or entry selection over a map with no entries
    #[error("Cannot retrieve value from empty dictionary")]
    EmptyDictionary,

    /// Big-integer range whose span cannot be sampled without precision loss
    #[error("Range too large: {from}...{to} ({span} > {max})")]
    RangeTooLarge {
        from: BigInt,
        to: BigInt,
        span: BigInt,
        max: u64,
    },

    /// Block name missing from the Unicode block table
    #[error("Unknown unicode block: {0}")]
    UnknownUnicodeBlock(String),

    /// A bounded filter ran out of attempts
    #[error("Predicate not satisfied after {attempts} attempts")]
    PredicateUnsatisfiable { attempts: u64 },

    /// An injected density returned a value outside the range it was given
    #[error("Density returned {index}, expected a value in 0..{len}")]
    DensityOutOfRange { index: BigInt, len: BigInt },

    /// Real range whose span is not a finite number
    #[error("Invalid range: {from}..{to}")]
    InvalidRange { from: f64, to: f64 },

    /// Millisecond timestamp outside the representable date range
    #[error("Timestamp out of range: {0}ms")]
    InvalidTimestamp(i64),

    /// Integer that is not a Unicode scalar value
    #[error("Not a unicode scalar value: U+{0:04X}")]
    InvalidCodePoint(u32),
}

impl FuzzError {
    /// Build a [`FuzzError::DensityOutOfRange`] from any integer pair.
    pub fn density_out_of_range(index: impl Into<BigInt>, len: impl Into<BigInt>) -> Self {
        FuzzError::DensityOutOfRange {
            index: index.into(),
            len: len.into(),
        }
    }
}
