//! Operations on generators themselves.
//!
//! These combinators are generic over the element type: they pick, collect,
//! transform and filter wrapped values without caring what the values are.

use fuzz_core::{fmap, Density, FuzzError, Result, RetryPolicy, Source, Thunk, Value, Wrapped};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Ask `density` for an index in `0..len` and check that it is one.
pub(crate) fn pick_index<D: Density + ?Sized>(
    density: &D,
    len: usize,
    src: &mut Source,
) -> Result<usize> {
    let upper = i64::try_from(len).unwrap_or(i64::MAX);
    let index = density
        .sample(Wrapped::Literal(0), Wrapped::Literal(upper))
        .unwrap(src)?;

    usize::try_from(index)
        .ok()
        .filter(|idx| *idx < len)
        .ok_or_else(|| FuzzError::density_out_of_range(index, len))
}

/// Pick one element, using `density` to choose its index.
///
/// Fails with [`FuzzError::EmptyCollection`] when `elems` unwraps to an
/// empty list; the density is never consulted in that case.
pub fn one_of<T, D>(density: D, elems: impl Into<Wrapped<Vec<Wrapped<T>>>>) -> Thunk<T>
where
    T: Value,
    D: Density + 'static,
{
    let elems = elems.into();

    Thunk::new(move |src| {
        let data = elems.unwrap(src)?;
        if data.is_empty() {
            return Err(FuzzError::EmptyCollection);
        }

        let idx = pick_index(&density, data.len(), src)?;
        data[idx].unwrap(src)
    })
}

/// Unwrap every element, in order.
pub fn all_of<T: Value>(elems: impl Into<Wrapped<Vec<Wrapped<T>>>>) -> Thunk<Vec<T>> {
    let elems = elems.into();

    Thunk::new(move |src| {
        elems
            .unwrap(src)?
            .iter()
            .map(|elem| elem.unwrap(src))
            .collect()
    })
}

fn pick_entry<K, V, D>(
    density: &D,
    record: &Wrapped<BTreeMap<K, Wrapped<V>>>,
    src: &mut Source,
) -> Result<(K, Wrapped<V>)>
where
    K: Ord + Value,
    V: Value,
    D: Density,
{
    let data = record.unwrap(src)?;
    if data.is_empty() {
        return Err(FuzzError::EmptyDictionary);
    }

    let len = data.len();
    let idx = pick_index(density, len, src)?;
    data.into_iter()
        .nth(idx)
        .ok_or_else(|| FuzzError::density_out_of_range(idx, len))
}

/// Pick one key of a record.
pub fn one_of_key<K, V, D>(
    density: D,
    record: impl Into<Wrapped<BTreeMap<K, Wrapped<V>>>>,
) -> Thunk<K>
where
    K: Ord + Value,
    V: Value,
    D: Density + 'static,
{
    let record = record.into();
    Thunk::new(move |src| Ok(pick_entry(&density, &record, src)?.0))
}

/// Pick one value of a record, unwrapped.
pub fn one_of_value<K, V, D>(
    density: D,
    record: impl Into<Wrapped<BTreeMap<K, Wrapped<V>>>>,
) -> Thunk<V>
where
    K: Ord + Value,
    V: Value,
    D: Density + 'static,
{
    let record = record.into();
    Thunk::new(move |src| pick_entry(&density, &record, src)?.1.unwrap(src))
}

/// Pick one `(key, value)` entry of a record, with the value unwrapped.
pub fn one_of_entry<K, V, D>(
    density: D,
    record: impl Into<Wrapped<BTreeMap<K, Wrapped<V>>>>,
) -> Thunk<(K, V)>
where
    K: Ord + Value,
    V: Value,
    D: Density + 'static,
{
    let record = record.into();
    Thunk::new(move |src| {
        let (key, value) = pick_entry(&density, &record, src)?;
        Ok((key, value.unwrap(src)?))
    })
}

/// Unwrap `value` and apply `f` to the result.
pub fn mapped<T, K, F>(f: F, value: impl Into<Wrapped<T>>) -> Thunk<K>
where
    T: Value,
    K: 'static,
    F: Fn(T) -> K + Send + Sync + 'static,
{
    let value = value.into();
    let lifted = fmap(f);
    Thunk::new(move |src| lifted(&value, src))
}

/// Resample `value` until `predicate` accepts.
///
/// There is no attempt limit: a predicate the underlying generator can never
/// satisfy makes this loop forever. Use [`filtered_with`] to bound it.
pub fn filtered<T, P>(predicate: P, value: impl Into<Wrapped<T>>) -> Thunk<T>
where
    T: Value,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    filtered_with(RetryPolicy::unbounded(), predicate, value)
}

/// Resample `value` until `predicate` accepts or `policy` runs out.
///
/// Fails with [`FuzzError::PredicateUnsatisfiable`] once the policy's
/// attempt budget is spent.
pub fn filtered_with<T, P>(
    policy: RetryPolicy,
    predicate: P,
    value: impl Into<Wrapped<T>>,
) -> Thunk<T>
where
    T: Value,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let value = value.into();

    Thunk::new(move |src| {
        let mut attempts: u64 = 0;
        loop {
            let candidate = value.unwrap(src)?;
            attempts += 1;

            if predicate(&candidate) {
                tracing::trace!(attempts, "filter accepted sample");
                return Ok(candidate);
            }
            if policy.is_exhausted(attempts) {
                tracing::warn!(attempts, "filter predicate rejected every sample");
                return Err(FuzzError::PredicateUnsatisfiable { attempts });
            }
        }
    })
}

/// Cycle through `from..to`, one value per call.
///
/// The bounds are unwrapped once, here, rather than on every call. The
/// returned thunk owns a cursor: each call returns the cursor and advances
/// it, wrapping back to `from` when it reaches `to`. Clones of the thunk
/// share the cursor; separate calls to `enumerate` do not.
pub fn enumerate(
    from: impl Into<Wrapped<i64>>,
    to: impl Into<Wrapped<i64>>,
    src: &mut Source,
) -> Result<Thunk<i64>> {
    let lower = from.into().unwrap(src)?;
    let upper = to.into().unwrap(src)?;
    let cursor = Arc::new(Mutex::new(lower));

    Ok(Thunk::new(move |_| {
        let mut cursor = cursor.lock().unwrap_or_else(PoisonError::into_inner);
        let current = *cursor;

        *cursor = match current.checked_add(1) {
            Some(next) if next < upper => next,
            _ => {
                tracing::trace!(lower, upper, "enumerator wrapped");
                lower
            }
        };
        Ok(current)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::Uniform;
    use crate::generators::{number, string};
    use fuzz_core::{constant, literals};

    fn record() -> BTreeMap<String, Wrapped<i64>> {
        BTreeMap::from([
            ("a".to_string(), Wrapped::Literal(1)),
            ("b".to_string(), Wrapped::Literal(2)),
            ("c".to_string(), Wrapped::Deferred(constant(3))),
        ])
    }

    #[test]
    fn test_one_of_fails_for_empty_collections() {
        let mut src = Source::seeded(42);
        let gen = one_of(Uniform, Vec::<Wrapped<i64>>::new());

        assert_eq!(gen.generate(&mut src), Err(FuzzError::EmptyCollection));
    }

    #[test]
    fn test_one_of_empty_check_precedes_density() {
        let mut src = Source::seeded(42);
        let broken = |_: Wrapped<i64>, _: Wrapped<i64>| -> Wrapped<i64> { Wrapped::Literal(-1) };
        let gen = one_of(broken, Vec::<Wrapped<i64>>::new());

        assert_eq!(gen.generate(&mut src), Err(FuzzError::EmptyCollection));
    }

    #[test]
    fn test_one_of_returns_member() {
        let mut src = Source::seeded(42);
        let items = vec![3, 5, 8, 13];
        let gen = one_of(Uniform, literals(items.clone()));

        for _ in 0..1_000 {
            assert!(items.contains(&gen.generate(&mut src).unwrap()));
        }
    }

    #[test]
    fn test_one_of_unwraps_chosen_element() {
        let mut src = Source::seeded(42);
        let gen = one_of(
            Uniform,
            vec![Wrapped::from(number::uniform(100i64, 200))],
        );

        let value = gen.generate(&mut src).unwrap();
        assert!((100..200).contains(&value));
    }

    #[test]
    fn test_one_of_rejects_out_of_range_density() {
        let mut src = Source::seeded(42);
        let past_end = |_: Wrapped<i64>, to: Wrapped<i64>| -> Wrapped<i64> { to };
        let gen = one_of(past_end, literals([1, 2]));

        assert!(matches!(
            gen.generate(&mut src),
            Err(FuzzError::DensityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_all_of() {
        let mut src = Source::seeded(42);
        let gen = all_of(vec![
            Wrapped::Literal("x".to_string()),
            string::space().into(),
            "y".into(),
        ]);
        assert_eq!(gen.generate(&mut src).unwrap(), vec!["x", " ", "y"]);

        let empty = all_of(Vec::<Wrapped<u8>>::new());
        assert!(empty.generate(&mut src).unwrap().is_empty());
    }

    #[test]
    fn test_one_of_key_value_entry_empty() {
        let mut src = Source::seeded(42);
        let empty: BTreeMap<String, Wrapped<i64>> = BTreeMap::new();

        assert_eq!(
            one_of_key(Uniform, empty.clone()).generate(&mut src),
            Err(FuzzError::EmptyDictionary)
        );
        assert_eq!(
            one_of_value(Uniform, empty.clone()).generate(&mut src),
            Err(FuzzError::EmptyDictionary)
        );
        assert_eq!(
            one_of_entry(Uniform, empty).generate(&mut src),
            Err(FuzzError::EmptyDictionary)
        );
    }

    #[test]
    fn test_one_of_key_value_entry_members() {
        let mut src = Source::seeded(42);
        let keys = one_of_key(Uniform, record());
        let values = one_of_value(Uniform, record());
        let entries = one_of_entry(Uniform, record());
        let expected = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);

        for _ in 0..100 {
            let key = keys.generate(&mut src).unwrap();
            assert!(expected.contains_key(key.as_str()));

            let value = values.generate(&mut src).unwrap();
            assert!(expected.values().any(|v| *v == value));

            let (key, value) = entries.generate(&mut src).unwrap();
            assert_eq!(expected.get(key.as_str()), Some(&value));
        }
    }

    #[test]
    fn test_mapped() {
        let mut src = Source::seeded(42);
        let gen = mapped(|n: i64| n * 10, number::uniform(1i64, 4));

        for _ in 0..100 {
            let value = gen.generate(&mut src).unwrap();
            assert!([10, 20, 30].contains(&value));
        }
    }

    #[test]
    fn test_mapped_identity() {
        let inner = number::uniform(0i64, 1_000_000);
        let gen = mapped(|n: i64| n, inner.clone());
        let mut src1 = Source::seeded(42);
        let mut src2 = Source::seeded(42);

        for _ in 0..1_000 {
            assert_eq!(gen.generate(&mut src1), inner.generate(&mut src2));
        }
    }

    #[test]
    fn test_filtered_satisfies_predicate() {
        let mut src = Source::seeded(42);
        let gen = filtered(|n: &i64| n % 2 == 0, number::uniform(0i64, 100));

        for _ in 0..1_000 {
            assert_eq!(gen.generate(&mut src).unwrap() % 2, 0);
        }
    }

    #[test]
    fn test_filtered_with_ceiling() {
        let mut src = Source::seeded(42);
        let gen = filtered_with(RetryPolicy::at_most(25), |n: &i64| *n > 10, number::uniform(0i64, 5));

        assert_eq!(
            gen.generate(&mut src),
            Err(FuzzError::PredicateUnsatisfiable { attempts: 25 })
        );
    }

    #[test]
    fn test_enumerate_wraps() {
        let mut src = Source::seeded(42);
        let gen = enumerate(0, 2, &mut src).unwrap();

        let values: Vec<i64> = (0..6).map(|_| gen.generate(&mut src).unwrap()).collect();
        assert_eq!(values, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_enumerate_unwraps_bounds_once() {
        let mut src = Source::seeded(42);
        let gen = enumerate(number::uniform(0i64, 3), 10, &mut src).unwrap();

        let first = gen.generate(&mut src).unwrap();
        assert_eq!(gen.generate(&mut src).unwrap(), first + 1);
        assert_eq!(gen.generate(&mut src).unwrap(), first + 2);
    }

    #[test]
    fn test_enumerate_clones_share_cursor() {
        let mut src = Source::seeded(42);
        let first = enumerate(0, 3, &mut src).unwrap();
        let shared = first.clone();
        let independent = enumerate(0, 3, &mut src).unwrap();

        assert_eq!(first.generate(&mut src).unwrap(), 0);
        assert_eq!(shared.generate(&mut src).unwrap(), 1);
        assert_eq!(independent.generate(&mut src).unwrap(), 0);
        assert_eq!(first.generate(&mut src).unwrap(), 2);
        assert_eq!(shared.generate(&mut src).unwrap(), 0);
    }

    #[test]
    fn test_enumerate_degenerate_range() {
        let mut src = Source::seeded(42);
        let gen = enumerate(5, 5, &mut src).unwrap();

        for _ in 0..3 {
            assert_eq!(gen.generate(&mut src).unwrap(), 5);
        }
    }
}
