//! Opaque identifiers for commits and merges.
//!
//! Nothing downstream inspects an id's format; the model only needs each
//! value to be unique within one graph.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of unique commit/merge identifiers.
pub trait IdentifierProvider {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;
}

/// Random version-4 style identifiers (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`).
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Seed from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierProvider for RandomIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0_u8; 16];
        self.rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }
}

/// Deterministic `prefix-0001`, `prefix-0002`, ... identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    counter: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("c")
    }
}

impl IdentifierProvider for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{:04}", self.prefix, self.counter)
    }
}

impl<T: IdentifierProvider + ?Sized> IdentifierProvider for Box<T> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
