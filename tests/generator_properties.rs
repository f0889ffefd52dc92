//! Distribution and contract properties of the generators, checked over
//! many seeded trials.

use fuzzcomb::generators::{array, big_int, logic, number, set, string, unicode};
use fuzzcomb::{constant, literals, BigInt, FuzzError, Source, Thunk, Uniform, UniformBigInt, Wrapped};
use std::collections::{BTreeMap, BTreeSet};

const TRIALS: usize = 1_000;

#[test]
fn test_uniform_int_half_open() {
    let mut src = Source::seeded(42);
    let bounds = number::uniform(-1_000i64, 1_000);

    for _ in 0..TRIALS {
        let a = bounds.generate(&mut src).unwrap();
        let b = bounds.generate(&mut src).unwrap();
        let (lo, hi) = (a.min(b), a.max(b));

        let value = number::uniform(lo, hi).generate(&mut src).unwrap();
        if lo == hi {
            assert_eq!(value, lo);
        } else {
            assert!(value >= lo && value < hi, "{value} not in [{lo}, {hi})");
        }
        assert_eq!(number::uniform(lo, lo).generate(&mut src).unwrap(), lo);
    }
}

#[test]
fn test_uniform_real_half_open() {
    let mut src = Source::seeded(42);
    let bounds = number::uniform_continuous(-1e6, 1e6);

    for _ in 0..TRIALS {
        let a = bounds.generate(&mut src).unwrap();
        let b = bounds.generate(&mut src).unwrap();
        let (lo, hi) = (a.min(b), a.max(b));

        let value = number::uniform_continuous(lo, hi).generate(&mut src).unwrap();
        assert!(value >= lo && (value < hi || lo == hi));
        assert_eq!(number::uniform_continuous(lo, lo).generate(&mut src).unwrap(), lo);
    }
}

#[test]
fn test_array_from_exact_length() {
    let mut src = Source::seeded(42);
    let size = number::uniform(0usize, 10);
    let gen = array::from(number::uniform(0u32, 100), size.clone());

    for _ in 0..TRIALS {
        let n = size.generate(&mut src).unwrap();
        let value = array::from(number::uniform(0u32, 100), n).generate(&mut src).unwrap();
        assert_eq!(value.len(), n);
        assert!(gen.generate(&mut src).unwrap().len() < 10);
    }
}

#[test]
fn test_set_from_size_upper_bound() {
    let mut src = Source::seeded(42);
    let size = number::uniform(0usize, 10);

    for _ in 0..TRIALS {
        let n = size.generate(&mut src).unwrap();
        let value = set::from(number::uniform(0u8, 4), n).generate(&mut src).unwrap();
        assert!(value.len() <= n);

        let constant_elem = set::from(constant('z'), n).generate(&mut src).unwrap();
        assert_eq!(constant_elem.len(), usize::from(n > 0));
    }
}

#[test]
fn test_choose_subsequence_and_coverage() {
    let mut src = Source::seeded(42);

    for k in 2..6usize {
        let items: Vec<usize> = (0..k).collect();
        let gen = array::choose(items.clone(), UniformBigInt);
        let mut saw_full = false;
        let mut saw_empty = false;

        for _ in 0..TRIALS {
            let chosen = gen.generate(&mut src).unwrap();
            let mut rest = items.iter();
            assert!(chosen.iter().all(|c| rest.any(|item| item == c)));
            saw_full |= chosen == items;
            saw_empty |= chosen.is_empty();
        }

        assert!(saw_full && saw_empty, "coverage failed for k = {k}");
    }

    let empty = array::choose(Vec::<u8>::new(), UniformBigInt);
    assert!(empty.generate(&mut src).unwrap().is_empty());
}

#[test]
fn test_choose_set_and_object() {
    let mut src = Source::seeded(42);
    let members: BTreeSet<&str> = ["a", "b", "c"].into_iter().collect();
    let record: BTreeMap<&str, i32> = BTreeMap::from([("x", 1), ("y", 2)]);

    let sets = set::choose(members.clone(), UniformBigInt);
    let records = fuzzcomb::generators::object::choose(record.clone(), UniformBigInt);
    for _ in 0..100 {
        assert!(sets.generate(&mut src).unwrap().is_subset(&members));

        let sub = records.generate(&mut src).unwrap();
        assert!(sub.iter().all(|(k, v)| record.get(k) == Some(v)));
    }
}

#[test]
fn test_one_of_membership() {
    let mut src = Source::seeded(42);
    let items = vec!["red", "green", "blue"];
    let gen = logic::one_of(Uniform, literals(items.clone()));

    for _ in 0..TRIALS {
        assert!(items.contains(&gen.generate(&mut src).unwrap()));
    }

    let empty = logic::one_of(Uniform, Vec::<Wrapped<&str>>::new());
    for _ in 0..10 {
        assert_eq!(empty.generate(&mut src), Err(FuzzError::EmptyCollection));
    }
}

#[test]
fn test_one_of_key_value_entry() {
    let mut src = Source::seeded(42);
    let record: BTreeMap<u8, Wrapped<char>> =
        BTreeMap::from([(1, Wrapped::Literal('a')), (2, Wrapped::Literal('b'))]);

    let keys = logic::one_of_key(Uniform, record.clone());
    let values = logic::one_of_value(Uniform, record.clone());
    let entries = logic::one_of_entry(Uniform, record);
    for _ in 0..TRIALS {
        assert!([1, 2].contains(&keys.generate(&mut src).unwrap()));
        assert!(['a', 'b'].contains(&values.generate(&mut src).unwrap()));
        let entry = entries.generate(&mut src).unwrap();
        assert!(entry == (1, 'a') || entry == (2, 'b'));
    }

    let empty: BTreeMap<u8, Wrapped<char>> = BTreeMap::new();
    assert_eq!(
        logic::one_of_key(Uniform, empty.clone()).generate(&mut src),
        Err(FuzzError::EmptyDictionary)
    );
    assert_eq!(
        logic::one_of_value(Uniform, empty.clone()).generate(&mut src),
        Err(FuzzError::EmptyDictionary)
    );
    assert_eq!(
        logic::one_of_entry(Uniform, empty).generate(&mut src),
        Err(FuzzError::EmptyDictionary)
    );
}

fn random_unicode_string() -> Thunk<String> {
    let block = logic::one_of(
        Uniform,
        vec![
            Wrapped::from(unicode::basic_latin(Uniform)),
            Wrapped::from(unicode::cyrillic(Uniform)),
            Wrapped::from(unicode::hangul_syllables(Uniform)),
            Wrapped::from(unicode::emoticons(Uniform)),
        ],
    );
    string::from(block, number::uniform(0usize, 20))
}

#[test]
fn test_mapped_identity_law() {
    let gen = random_unicode_string();
    let identity = logic::mapped(|s: String| s, gen.clone());
    let mut src1 = Source::seeded(42);
    let mut src2 = Source::seeded(42);

    for _ in 0..TRIALS {
        let expected = gen.generate(&mut src1).unwrap();
        assert_eq!(identity.generate(&mut src2).unwrap(), expected);
    }
}

#[test]
fn test_filtered_always_satisfies() {
    let mut src = Source::seeded(42);
    let gen = logic::filtered(|s: &String| s.len() % 3 == 0, random_unicode_string());

    for _ in 0..TRIALS {
        assert_eq!(gen.generate(&mut src).unwrap().len() % 3, 0);
    }
}

#[test]
fn test_intersperse_pattern() {
    let mut src = Source::seeded(42);
    let gen = array::intersperse('|', literals(['a', 'b', 'c']));
    assert_eq!(gen.generate(&mut src).unwrap(), vec!['a', '|', 'b', '|', 'c']);

    let single = array::intersperse('|', literals(['a']));
    assert_eq!(single.generate(&mut src).unwrap(), vec!['a']);
}

#[test]
fn test_enumerate_cycles() {
    let mut src = Source::seeded(42);
    let gen = logic::enumerate(0, 2, &mut src).unwrap();

    let values: Vec<i64> = (0..10).map(|_| gen.generate(&mut src).unwrap()).collect();
    assert_eq!(values, vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
}

#[test]
fn test_big_int_range_ceiling() {
    let mut src = Source::seeded(42);
    let ceiling = BigInt::from(big_int::MAX_SAFE_INTEGER);
    let lower = BigInt::from(-123_456_789i64);

    let at_ceiling = big_int::uniform(lower.clone(), &lower + &ceiling);
    for _ in 0..TRIALS {
        let value = at_ceiling.generate(&mut src).unwrap();
        assert!(value >= lower && value < &lower + &ceiling);
    }

    let above = big_int::uniform(lower.clone(), &lower + &ceiling + 1u32);
    assert!(matches!(
        above.generate(&mut src),
        Err(FuzzError::RangeTooLarge { .. })
    ));
}
