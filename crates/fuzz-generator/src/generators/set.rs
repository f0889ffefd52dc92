//! Set generators.

use super::subset;
use fuzz_core::{DensityBigInt, Thunk, Value, Wrapped};
use std::collections::BTreeSet;

/// Build a set from up to `size` unwraps of `elem`.
///
/// `size` is an upper limit: when `elem` yields duplicates the set ends up
/// with fewer members.
pub fn from<T>(elem: impl Into<Wrapped<T>>, size: impl Into<Wrapped<usize>>) -> Thunk<BTreeSet<T>>
where
    T: Ord + Value,
{
    let elem = elem.into();
    let size = size.into();

    Thunk::new(move |src| {
        let size_tgt = size.unwrap(src)?;
        (0..size_tgt).map(|_| elem.unwrap(src)).collect()
    })
}

/// Pick a uniformly random subset of `set`.
pub fn choose<T, D>(set: impl Into<Wrapped<BTreeSet<T>>>, density: D) -> Thunk<BTreeSet<T>>
where
    T: Ord + Value,
    D: DensityBigInt + 'static,
{
    let set = set.into();

    Thunk::new(move |src| {
        let members: Vec<T> = set.unwrap(src)?.into_iter().collect();
        Ok(subset::select(members, &density, src)?.into_iter().collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::UniformBigInt;
    use crate::generators::number;
    use fuzz_core::Source;

    #[test]
    fn test_from_constant_element_has_one_member() {
        let mut src = Source::seeded(42);
        let gen = from(1i32, number::uniform(1usize, 100));

        for _ in 0..1_000 {
            assert_eq!(gen.generate(&mut src).unwrap().len(), 1);
        }
    }

    #[test]
    fn test_from_size_is_upper_bound() {
        let mut src = Source::seeded(42);
        let upper = number::uniform(0usize, 10);

        for _ in 0..1_000 {
            let size_tgt = upper.generate(&mut src).unwrap();
            let set = from(number::uniform(0u8, 5), size_tgt)
                .generate(&mut src)
                .unwrap();
            assert!(set.len() <= size_tgt);
        }
    }

    #[test]
    fn test_from_zero_size() {
        let mut src = Source::seeded(42);
        assert!(from('a', 0).generate(&mut src).unwrap().is_empty());
    }

    #[test]
    fn test_choose_is_subset() {
        let mut src = Source::seeded(42);
        let full: BTreeSet<u32> = (0..6).collect();
        let gen = choose(full.clone(), UniformBigInt);

        let mut saw_full = false;
        let mut saw_empty = false;
        for _ in 0..1_000 {
            let chosen = gen.generate(&mut src).unwrap();
            assert!(chosen.is_subset(&full));
            saw_full |= chosen == full;
            saw_empty |= chosen.is_empty();
        }

        assert!(saw_full);
        assert!(saw_empty);
    }
}
