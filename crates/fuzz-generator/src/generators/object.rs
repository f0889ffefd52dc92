//! Object (key/value map) generators.

use super::subset;
use fuzz_core::{DensityBigInt, Thunk, Value, Wrapped};
use std::collections::BTreeMap;

/// Build a map from up to `size` unwraps of `key` and `val`.
///
/// `size` is an upper limit: when `key` repeats, the later value replaces
/// the earlier one and the map ends up with fewer entries.
pub fn from<K, V>(
    key: impl Into<Wrapped<K>>,
    val: impl Into<Wrapped<V>>,
    size: impl Into<Wrapped<usize>>,
) -> Thunk<BTreeMap<K, V>>
where
    K: Ord + Value,
    V: Value,
{
    let key = key.into();
    let val = val.into();
    let size = size.into();

    Thunk::new(move |src| {
        let size_tgt = size.unwrap(src)?;
        let mut record = BTreeMap::new();

        for _ in 0..size_tgt {
            let k = key.unwrap(src)?;
            let v = val.unwrap(src)?;
            record.insert(k, v);
        }

        Ok(record)
    })
}

/// Pick a uniformly random subset of the entries of `obj`.
pub fn choose<K, V, D>(obj: impl Into<Wrapped<BTreeMap<K, V>>>, density: D) -> Thunk<BTreeMap<K, V>>
where
    K: Ord + Value,
    V: Value,
    D: DensityBigInt + 'static,
{
    let obj = obj.into();

    Thunk::new(move |src| {
        let entries: Vec<(K, V)> = obj.unwrap(src)?.into_iter().collect();
        Ok(subset::select(entries, &density, src)?.into_iter().collect())
    })
}
