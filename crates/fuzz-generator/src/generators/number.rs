//! Numeric value generators.

use fuzz_core::{FuzzError, Thunk, Value, Wrapped};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Primitive integer types that can be sampled uniformly.
pub trait Integer: SampleUniform + PartialOrd + Copy + Value {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(impl Integer for $t {})*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Generate a random integer in `[from, to)`.
///
/// When `from >= to` the range is degenerate and `from` is returned.
pub fn uniform<T: Integer>(from: impl Into<Wrapped<T>>, to: impl Into<Wrapped<T>>) -> Thunk<T> {
    let from = from.into();
    let to = to.into();

    Thunk::new(move |src| {
        let lower = from.unwrap(src)?;
        let upper = to.unwrap(src)?;

        if lower >= upper {
            return Ok(lower);
        }
        Ok(src.gen_range(lower..upper))
    })
}

/// Generate a random float in `[from, to)`.
///
/// When `from >= to` the range is degenerate and `from` is returned.
pub fn uniform_continuous(from: impl Into<Wrapped<f64>>, to: impl Into<Wrapped<f64>>) -> Thunk<f64> {
    let from = from.into();
    let to = to.into();

    Thunk::new(move |src| {
        let lower = from.unwrap(src)?;
        let upper = to.unwrap(src)?;

        if lower.is_nan() || upper.is_nan() || !(upper - lower).is_finite() {
            return Err(FuzzError::InvalidRange {
                from: lower,
                to: upper,
            });
        }
        if lower >= upper {
            return Ok(lower);
        }
        Ok(src.gen_range(lower..upper))
    })
}
