// Candidate message selection.

use rand::Rng;

use crate::error::{Error, Result};

/// Non-empty pool of candidate messages supplied on the command line.
///
/// The pool is consumed once per invocation: one candidate is picked, the
/// rest are discarded.
#[derive(Debug, Clone)]
pub struct MessagePool {
    messages: Vec<String>,
}

impl MessagePool {
    /// Builds a pool, rejecting an empty candidate list up front.
    pub fn new(messages: Vec<String>) -> Result<Self> {
        if messages.is_empty() {
            return Err(Error::EmptyMessagePool);
        }
        Ok(Self { messages })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the sole candidate, or one chosen uniformly at random.
    ///
    /// The RNG is passed in so callers control the entropy source and tests
    /// can seed it.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        if self.messages.len() == 1 {
            return &self.messages[0];
        }
        let index = rng.gen_range(0..self.messages.len());
        &self.messages[index]
    }
}
