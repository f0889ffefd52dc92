//! Sampling driver for generator pipelines.

use crate::generators::logic;
use fuzz_core::{FuzzConfig, Result, Source, Thunk, Value, Wrapped};

/// Runs generator pipelines against one owned random source.
///
/// With a seed in the config, the same sequence of calls produces the same
/// samples on every run.
pub struct Fuzzer {
    /// Seed and filter settings
    config: FuzzConfig,
    /// Random source handed to every thunk
    source: Source,
    /// Number of samples produced so far
    index: u64,
}

impl Fuzzer {
    /// Create a fuzzer with a fixed seed and default settings.
    pub fn new(seed: u64) -> Self {
        Self::from_config(FuzzConfig::default().with_seed(seed))
    }

    /// Create a fuzzer from a loaded config.
    ///
    /// Without a seed in the config, the source is seeded from entropy.
    pub fn from_config(config: FuzzConfig) -> Self {
        let source = Source::from_seed_option(config.seed);
        Self {
            config,
            source,
            index: 0,
        }
    }

    /// Set the starting sample index.
    ///
    /// For seeded fuzzers the source is re-seeded from the base seed and the
    /// index, so a run can be resumed at a given position without replaying
    /// everything before it. Resumed runs are deterministic but do not
    /// reproduce the samples an uninterrupted run would have produced.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        if let Some(seed) = self.config.seed {
            self.source = Source::seeded(seed_for_index(seed, index));
        }
        self
    }

    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Number of samples produced so far, including the start index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// The underlying source, for building stateful generators such as
    /// [`logic::enumerate`].
    pub fn source(&mut self) -> &mut Source {
        &mut self.source
    }

    /// Run `generator` once.
    pub fn next_sample<T>(&mut self, generator: &Thunk<T>) -> Result<T> {
        let sample = generator.generate(&mut self.source)?;
        tracing::debug!(index = self.index, "generated sample");
        self.index += 1;
        Ok(sample)
    }

    /// Run `generator` `count` times, lazily.
    pub fn samples<'a, T>(&'a mut self, generator: &'a Thunk<T>, count: u64) -> SampleIterator<'a, T> {
        SampleIterator {
            fuzzer: self,
            generator,
            remaining: count,
        }
    }

    /// [`logic::filtered_with`] using the configured retry policy.
    pub fn filtered<T, P>(&self, predicate: P, value: impl Into<Wrapped<T>>) -> Thunk<T>
    where
        T: Value,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        logic::filtered_with(self.config.filter, predicate, value)
    }
}

fn seed_for_index(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
}

/// Iterator that lazily draws samples from a [`Fuzzer`].
///
/// Stops after the first error.
pub struct SampleIterator<'a, T> {
    fuzzer: &'a mut Fuzzer,
    generator: &'a Thunk<T>,
    remaining: u64,
}

impl<T> Iterator for SampleIterator<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        let sample = self.fuzzer.next_sample(self.generator);
        if sample.is_err() {
            self.remaining = 0;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> ExactSizeIterator for SampleIterator<'_, T> {}
