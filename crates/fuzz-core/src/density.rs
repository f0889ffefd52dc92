//! Density functions: the injected randomness policy.
//!
//! A density takes a wrapped lower and upper bound and returns a wrapped
//! value in `[from, to)`. Combinators that pick an index or a bound never
//! sample directly; they ask the density they were given. Any closure with
//! the right signature is a density, which makes deterministic densities
//! trivial to write in tests.

use crate::wrapped::Wrapped;
use num_bigint::BigInt;

/// Integer-range density.
pub trait Density: Send + Sync {
    fn sample(&self, from: Wrapped<i64>, to: Wrapped<i64>) -> Wrapped<i64>;
}

impl<F> Density for F
where
    F: Fn(Wrapped<i64>, Wrapped<i64>) -> Wrapped<i64> + Send + Sync,
{
    fn sample(&self, from: Wrapped<i64>, to: Wrapped<i64>) -> Wrapped<i64> {
        self(from, to)
    }
}

/// Big-integer-range density, for index spaces beyond `i64`.
pub trait DensityBigInt: Send + Sync {
    fn sample_big(&self, from: Wrapped<BigInt>, to: Wrapped<BigInt>) -> Wrapped<BigInt>;
}

impl<F> DensityBigInt for F
where
    F: Fn(Wrapped<BigInt>, Wrapped<BigInt>) -> Wrapped<BigInt> + Send + Sync,
{
    fn sample_big(&self, from: Wrapped<BigInt>, to: Wrapped<BigInt>) -> Wrapped<BigInt> {
        self(from, to)
    }
}
