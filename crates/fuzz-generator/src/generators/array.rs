//! Array generators.

use super::subset;
use fuzz_core::{DensityBigInt, Thunk, Value, Wrapped};

/// Build an array of exactly `size` elements.
///
/// `size` is unwrapped once per call, then `elem` is unwrapped `size`
/// times. Duplicates are kept.
pub fn from<T: Value>(elem: impl Into<Wrapped<T>>, size: impl Into<Wrapped<usize>>) -> Thunk<Vec<T>> {
    let elem = elem.into();
    let size = size.into();

    Thunk::new(move |src| {
        let size_tgt = size.unwrap(src)?;
        (0..size_tgt).map(|_| elem.unwrap(src)).collect()
    })
}

/// Unwrap each generator once, in order, without flattening.
pub fn concat<T: Value>(elems: Vec<Wrapped<T>>) -> Thunk<Vec<T>> {
    Thunk::new(move |src| elems.iter().map(|elem| elem.unwrap(src)).collect())
}

/// Like [`concat`], with a freshly unwrapped `separator` between
/// consecutive elements.
///
/// No separator follows the last element, so one element yields a
/// one-item array and no elements yield an empty one.
pub fn intersperse<T: Value>(separator: impl Into<Wrapped<T>>, elems: Vec<Wrapped<T>>) -> Thunk<Vec<T>> {
    let separator = separator.into();

    Thunk::new(move |src| {
        let mut result = Vec::with_capacity(elems.len() * 2);

        for (idx, elem) in elems.iter().enumerate() {
            if idx > 0 {
                result.push(separator.unwrap(src)?);
            }
            result.push(elem.unwrap(src)?);
        }

        Ok(result)
    })
}

/// Pick a uniformly random subset of `elems`, preserving order.
pub fn choose<T, D>(elems: impl Into<Wrapped<Vec<T>>>, density: D) -> Thunk<Vec<T>>
where
    T: Value,
    D: DensityBigInt + 'static,
{
    let elems = elems.into();

    Thunk::new(move |src| {
        let concrete = elems.unwrap(src)?;
        subset::select(concrete, &density, src)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::UniformBigInt;
    use crate::generators::{logic, number};
    use fuzz_core::{constant, literals, Source};

    #[test]
    fn test_from_constructs_expected_size() {
        let mut src = Source::seeded(42);
        let upper = number::uniform(0usize, 10);

        for _ in 0..1_000 {
            let size_tgt = upper.generate(&mut src).unwrap();
            let value = from(0u8, size_tgt).generate(&mut src).unwrap();
            assert_eq!(value.len(), size_tgt);
        }
    }

    #[test]
    fn test_from_unwraps_size_per_call() {
        let mut src = Source::seeded(42);
        let gen = from('x', number::uniform(0usize, 10));
        let lengths: Vec<usize> = (0..100)
            .map(|_| gen.generate(&mut src).unwrap().len())
            .collect();

        assert!(lengths.iter().any(|len| *len != lengths[0]));
    }

    #[test]
    fn test_from_keeps_duplicates() {
        let mut src = Source::seeded(42);
        let value = from(constant(7), 5).generate(&mut src).unwrap();
        assert_eq!(value, vec![7; 5]);
    }

    #[test]
    fn test_concat() {
        let mut src = Source::seeded(42);
        let gen = concat(vec![
            Wrapped::Literal(1i64),
            number::uniform(10i64, 11).into(),
            Wrapped::Literal(3),
        ]);
        assert_eq!(gen.generate(&mut src).unwrap(), vec![1, 10, 3]);
    }

    #[test]
    fn test_intersperse() {
        let mut src = Source::seeded(42);
        let gen = intersperse("-", literals(["a", "b", "c"]));
        assert_eq!(gen.generate(&mut src).unwrap(), vec!["a", "-", "b", "-", "c"]);

        let single = intersperse("-", literals(["a"]));
        assert_eq!(single.generate(&mut src).unwrap(), vec!["a"]);

        let empty = intersperse("-", Vec::<Wrapped<&str>>::new());
        assert!(empty.generate(&mut src).unwrap().is_empty());
    }

    #[test]
    fn test_intersperse_unwraps_separator_per_gap() {
        let mut src = Source::seeded(42);
        let counter = logic::enumerate(0, 100, &mut src).unwrap();
        let gen = intersperse(counter, vec![Wrapped::Literal(-1i64); 4]);

        assert_eq!(gen.generate(&mut src).unwrap(), vec![-1, 0, -1, 1, -1, 2, -1]);
    }

    #[test]
    fn test_choose_is_ordered_subsequence() {
        let mut src = Source::seeded(42);
        let items: Vec<u32> = (0..8).collect();
        let gen = choose(items.clone(), UniformBigInt);

        for _ in 0..1_000 {
            let chosen = gen.generate(&mut src).unwrap();
            assert!(chosen.windows(2).all(|w| w[0] < w[1]));
            assert!(chosen.iter().all(|item| items.contains(item)));
        }
    }

    #[test]
    fn test_choose_empty_collection() {
        let mut src = Source::seeded(42);
        let gen = choose(Vec::<u8>::new(), UniformBigInt);

        for _ in 0..10 {
            assert!(gen.generate(&mut src).unwrap().is_empty());
        }
    }

    #[test]
    fn test_choose_covers_full_and_empty() {
        let mut src = Source::seeded(42);
        let items = vec!["a", "b", "c"];
        let gen = choose(items.clone(), UniformBigInt);

        let mut saw_full = false;
        let mut saw_empty = false;
        for _ in 0..1_000 {
            let chosen = gen.generate(&mut src).unwrap();
            saw_full |= chosen == items;
            saw_empty |= chosen.is_empty();
        }

        assert!(saw_full, "full collection never chosen");
        assert!(saw_empty, "empty subset never chosen");
    }
}
