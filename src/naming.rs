//! Randomized identifiers for generated files and directories.

use crate::config::FixtureConfig;
use crate::constants::MAX_RESAMPLE_ATTEMPTS;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Draws identifiers from a fixed alphabet.
///
/// Characters are sampled without replacement, so no character repeats within
/// one identifier.
pub struct NameAllocator<R: Rng> {
    rng: R,
    alphabet: Vec<char>,
    lengths: RangeInclusive<usize>,
}

impl NameAllocator<StdRng> {
    /// Allocator seeded from `seed`, or from OS entropy when `None`.
    pub fn from_config(config: &FixtureConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::new(
            rng,
            config.alphabet_chars(),
            config.name_min_length..=config.name_max_length,
        )
    }

    /// Allocator with the default alphabet and length range and a fixed seed.
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::from_config(&FixtureConfig {
            seed: Some(seed),
            ..FixtureConfig::default()
        })
    }
}

impl<R: Rng> NameAllocator<R> {
    /// # Arguments
    /// * `rng` - Random source
    /// * `alphabet` - Characters to draw from; repeats are dropped
    /// * `lengths` - Length range used by [`NameAllocator::random_fileset`]
    ///
    /// # Errors
    /// * `Error::ConfigError` if the alphabet is empty
    pub fn new(rng: R, alphabet: Vec<char>, lengths: RangeInclusive<usize>) -> Result<Self> {
        let alphabet: Vec<char> = alphabet
            .into_iter()
            .collect::<IndexSet<char>>()
            .into_iter()
            .collect();
        if alphabet.is_empty() {
            return Err(Error::ConfigError("alphabet is empty".to_string()));
        }
        Ok(Self {
            rng,
            alphabet,
            lengths,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Returns an identifier of exactly `length` characters.
    ///
    /// # Errors
    /// * `Error::NameLengthError` if `length` exceeds the alphabet size
    pub fn random_name(&mut self, length: usize) -> Result<String> {
        if length > self.alphabet.len() {
            return Err(Error::NameLengthError {
                requested: length,
                available: self.alphabet.len(),
            });
        }
        let name = index::sample(&mut self.rng, self.alphabet.len(), length)
            .into_iter()
            .map(|i| self.alphabet[i])
            .collect();
        Ok(name)
    }

    /// Returns `count` identifiers, each with a random length from the
    /// configured range. The identifiers are pairwise distinct, so they can
    /// be used as sibling names under one parent.
    ///
    /// # Errors
    /// * `Error::NameSpaceExhausted` if the alphabet cannot form `count`
    ///   distinct identifiers, or resampling keeps colliding
    /// * `Error::NameLengthError` if the range exceeds the alphabet size
    pub fn random_fileset(&mut self, count: usize) -> Result<Vec<String>> {
        let (min_length, max_length) = (*self.lengths.start(), *self.lengths.end());
        let exhausted = || Error::NameSpaceExhausted {
            count,
            min_length,
            max_length,
        };
        if (count as u128) > self.capacity() {
            return Err(exhausted());
        }

        let mut names = IndexSet::with_capacity(count);
        while names.len() < count {
            self.unique_name(&mut names)?;
        }
        Ok(names.into_iter().collect())
    }

    /// Draws one identifier not yet in `taken`, records it there and returns it.
    ///
    /// # Errors
    /// * `Error::NameSpaceExhausted` after `MAX_RESAMPLE_ATTEMPTS` collisions
    pub fn unique_name(&mut self, taken: &mut IndexSet<String>) -> Result<String> {
        for _ in 0..MAX_RESAMPLE_ATTEMPTS {
            let length = self.rng.random_range(self.lengths.clone());
            let name = self.random_name(length)?;
            if taken.insert(name.clone()) {
                return Ok(name);
            }
            debug!("Sibling name collision on '{}', resampling", name);
        }
        Err(Error::NameSpaceExhausted {
            count: taken.len() + 1,
            min_length: *self.lengths.start(),
            max_length: *self.lengths.end(),
        })
    }

    /// Number of distinct identifiers the length range can produce.
    pub fn capacity(&self) -> u128 {
        let n = self.alphabet.len() as u128;
        self.lengths
            .clone()
            .map(|length| permutations(n, length as u128))
            .fold(0u128, u128::saturating_add)
    }
}

/// Ordered selections of `k` out of `n` distinct items.
fn permutations(n: u128, k: u128) -> u128 {
    if k > n {
        return 0;
    }
    (n - k + 1..=n).fold(1u128, u128::saturating_mul)
}
