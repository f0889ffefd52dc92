//! Wrapped values: a concrete value, or a deferred computation of one.
//!
//! Every generator in the workspace consumes and produces [`Wrapped`] values.
//! Nothing is sampled when a pipeline is built; sampling happens when the
//! outermost value is unwrapped, and unwrapping again re-runs the whole chain.

use crate::error::Result;
use crate::source::Source;
use num_bigint::BigInt;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Anything that can flow through a generator pipeline.
///
/// Thunks are shared across threads and may be evaluated many times, so
/// values must be cloneable and thread-safe.
pub trait Value: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Value for T {}

type ThunkFn<T> = dyn Fn(&mut Source) -> Result<T> + Send + Sync;

/// A deferred computation producing a `T`.
///
/// The only argument is the evaluation context; the closure may draw from
/// its random source. Cloning a thunk clones the handle, not the closure.
pub struct Thunk<T> {
    f: Arc<ThunkFn<T>>,
}

impl<T> Thunk<T> {
    /// Wrap a closure as a thunk.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Source) -> Result<T> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Run the computation once.
    pub fn generate(&self, src: &mut Source) -> Result<T> {
        (self.f)(src)
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// Either a literal value or a thunk producing one.
///
/// The tag is explicit, so `T` may itself be any type (closures included)
/// without being mistaken for a deferred computation. Common scalar and
/// collection types convert into a literal with `.into()`; anything else
/// is built with [`Wrapped::Literal`].
#[derive(Debug, Clone)]
pub enum Wrapped<T> {
    Literal(T),
    Deferred(Thunk<T>),
}

impl<T: Clone> Wrapped<T> {
    /// Collapse the wrapped value.
    ///
    /// Literals are returned unchanged (cloned) and consume no randomness;
    /// thunks are invoked exactly once.
    pub fn unwrap(&self, src: &mut Source) -> Result<T> {
        match self {
            Wrapped::Literal(value) => Ok(value.clone()),
            Wrapped::Deferred(thunk) => thunk.generate(src),
        }
    }
}

impl<T> Wrapped<T> {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Wrapped::Deferred(_))
    }
}

impl<T> From<Thunk<T>> for Wrapped<T> {
    fn from(thunk: Thunk<T>) -> Self {
        Wrapped::Deferred(thunk)
    }
}

// Literal conversions are listed per type rather than as a blanket
// `From<T>` so that passing a `Thunk<T>` still infers `T`.
macro_rules! literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Wrapped<$ty> {
                fn from(value: $ty) -> Self {
                    Wrapped::Literal(value)
                }
            }
        )*
    };
}

literal_from!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    BigInt,
);

impl<'a> From<&'a str> for Wrapped<&'a str> {
    fn from(value: &'a str) -> Self {
        Wrapped::Literal(value)
    }
}

impl From<&str> for Wrapped<String> {
    fn from(value: &str) -> Self {
        Wrapped::Literal(value.to_string())
    }
}

impl<T> From<Vec<T>> for Wrapped<Vec<T>> {
    fn from(value: Vec<T>) -> Self {
        Wrapped::Literal(value)
    }
}

impl<T> From<BTreeSet<T>> for Wrapped<BTreeSet<T>> {
    fn from(value: BTreeSet<T>) -> Self {
        Wrapped::Literal(value)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Wrapped<BTreeMap<K, V>> {
    fn from(value: BTreeMap<K, V>) -> Self {
        Wrapped::Literal(value)
    }
}

/// Lift a plain transform so it accepts wrapped input.
///
/// The returned function unwraps its argument and applies `f` to the result.
pub fn fmap<T, K, F>(f: F) -> impl Fn(&Wrapped<T>, &mut Source) -> Result<K>
where
    T: Clone,
    F: Fn(T) -> K,
{
    move |value, src| Ok(f(value.unwrap(src)?))
}

/// A thunk that always returns `value`.
pub fn constant<T: Value>(value: T) -> Thunk<T> {
    Thunk::new(move |_| Ok(value.clone()))
}

/// Wrap each item of an iterator as a literal.
pub fn literals<T, I>(items: I) -> Vec<Wrapped<T>>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(Wrapped::Literal).collect()
}
