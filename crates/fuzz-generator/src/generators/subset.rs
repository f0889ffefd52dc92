//! Uniform subset selection by bit-mask.
//!
//! A collection of `n` items has `2^n` subsets. One subset index is drawn
//! from `[0, 2^n)`, written in binary and left-padded with zeros to `n`
//! digits; digit `i` (most significant first) decides whether item `i` is
//! kept. Every subset is equally likely, and kept items stay in their
//! original order.

use fuzz_core::{BigInt, DensityBigInt, FuzzError, Result, Source, Wrapped};
use num_traits::{One, Zero};

/// Keep the items whose bit is set in a density-drawn subset index.
pub(crate) fn select<T, D>(items: Vec<T>, density: &D, src: &mut Source) -> Result<Vec<T>>
where
    D: DensityBigInt + ?Sized,
{
    let n = items.len();
    let subset_count = BigInt::one() << n;
    let index = density
        .sample_big(Wrapped::Literal(BigInt::zero()), Wrapped::Literal(subset_count.clone()))
        .unwrap(src)?;

    let mask = match index.to_biguint() {
        Some(mask) if index < subset_count => mask,
        _ => return Err(FuzzError::DensityOutOfRange {
            index,
            len: subset_count,
        }),
    };

    let bits = mask.to_radix_be(2);
    let padding = n.saturating_sub(bits.len());

    Ok(items
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| *idx >= padding && bits[idx - padding] == 1)
        .map(|(_, item)| item)
        .collect())
}
