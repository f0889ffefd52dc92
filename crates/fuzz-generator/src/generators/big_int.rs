//! Arbitrary-precision integer generators.

use fuzz_core::{BigInt, FuzzError, Thunk, Wrapped};
use num_traits::{ToPrimitive, Zero};
use rand::Rng;

/// Largest span that can be sampled without precision loss (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Generate a random big integer in `[from, to)`.
///
/// The span `to - from` (not the bounds themselves) must not exceed
/// [`MAX_SAFE_INTEGER`]; wider spans fail with [`FuzzError::RangeTooLarge`]
/// rather than producing a biased sample. A span of zero or less returns
/// `from`.
pub fn uniform(from: impl Into<Wrapped<BigInt>>, to: impl Into<Wrapped<BigInt>>) -> Thunk<BigInt> {
    let from = from.into();
    let to = to.into();

    Thunk::new(move |src| {
        let lower = from.unwrap(src)?;
        let upper = to.unwrap(src)?;
        let span = &upper - &lower;

        if span <= BigInt::zero() {
            return Ok(lower);
        }

        match span.to_u64() {
            Some(width) if width <= MAX_SAFE_INTEGER => {
                let offset: u64 = src.gen_range(0..width);
                Ok(lower + offset)
            }
            _ => Err(FuzzError::RangeTooLarge {
                from: lower,
                to: upper,
                span,
                max: MAX_SAFE_INTEGER,
            }),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzz_core::Source;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_zero_range() {
        let mut src = Source::seeded(42);
        assert_eq!(uniform(big(0), big(0)).generate(&mut src).unwrap(), big(0));
        assert_eq!(uniform(big(17), big(17)).generate(&mut src).unwrap(), big(17));
    }

    #[test]
    fn test_always_in_range() {
        let mut src = Source::seeded(42);
        let gen = uniform(big(-50), big(50));

        for _ in 0..1_000 {
            let value = gen.generate(&mut src).unwrap();
            assert!(value >= big(-50) && value < big(50));
        }
    }

    #[test]
    fn test_range_too_large() {
        let mut src = Source::seeded(42);
        let upper: BigInt = BigInt::from(MAX_SAFE_INTEGER) + 1u32;
        let result = uniform(big(0), upper).generate(&mut src);

        assert!(matches!(result, Err(FuzzError::RangeTooLarge { .. })));
    }

    #[test]
    fn test_span_at_ceiling_is_allowed() {
        let mut src = Source::seeded(42);
        let upper = BigInt::from(MAX_SAFE_INTEGER);

        for _ in 0..100 {
            let value = uniform(big(0), upper.clone()).generate(&mut src).unwrap();
            assert!(value < upper);
        }
    }

    #[test]
    fn test_span_is_checked_not_bounds() {
        let mut src = Source::seeded(42);
        let lower: BigInt = BigInt::from(u64::MAX) * 1_000u32;
        let upper: BigInt = &lower + 10u32;

        let value = uniform(lower.clone(), upper.clone())
            .generate(&mut src)
            .unwrap();
        assert!(value >= lower && value < upper);
    }

    #[test]
    fn test_never_raises_below_ceiling() {
        let mut src = Source::seeded(42);
        let width = crate::generators::number::uniform(0u64, MAX_SAFE_INTEGER);

        for _ in 0..1_000 {
            let span = BigInt::from(width.generate(&mut src).unwrap());
            assert!(uniform(big(0), span).generate(&mut src).is_ok());
        }
    }
}
