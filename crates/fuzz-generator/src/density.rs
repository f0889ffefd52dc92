//! Uniform densities backed by the scalar generators.

use crate::generators::{big_int, number};
use fuzz_core::{BigInt, Density, DensityBigInt, Wrapped};

/// Uniform integer density over `[from, to)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Density for Uniform {
    fn sample(&self, from: Wrapped<i64>, to: Wrapped<i64>) -> Wrapped<i64> {
        number::uniform(from, to).into()
    }
}

/// Uniform big-integer density over `[from, to)`.
///
/// Inherits [`big_int::uniform`]'s span limit, so subset selection over 53
/// or more elements fails with `RangeTooLarge`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformBigInt;

impl DensityBigInt for UniformBigInt {
    fn sample_big(&self, from: Wrapped<BigInt>, to: Wrapped<BigInt>) -> Wrapped<BigInt> {
        big_int::uniform(from, to).into()
    }
}
