//! Brute-force generation of valid BSNs.
//!
//! Candidates are drawn uniformly from `0..=999_999_999` and zero-padded. This
//! is the same distribution as drawing nine independent uniform digits. About
//! one draw in eleven passes the 11-proof.

use crate::core::bsn::{passes_eleven_proof, BsnValidator};
use crate::domain::model::{Bsn, MAX_BSN_NUMBER};
use crate::utils::error::{Result, ToolsError};
use rand::rngs::ThreadRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default cap on draws per generated number.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

pub struct BsnGenerator<R: RngCore> {
    rng: R,
    max_attempts: usize,
    validator: BsnValidator,
}

impl BsnGenerator<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl BsnGenerator<ChaCha8Rng> {
    /// Reproducible generator: the same seed always yields the same numbers.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> BsnGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            validator: BsnValidator::new(),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draws candidates until one passes the 11-proof.
    pub fn generate(&mut self) -> Result<Bsn> {
        for attempt in 1..=self.max_attempts {
            let value = self.rng.random_range(0..=MAX_BSN_NUMBER);
            let bsn = Bsn::from_number(value)?;

            if passes_eleven_proof(&bsn) {
                tracing::debug!("Found valid BSN after {} attempts", attempt);
                self.validator.validate_bsn(&bsn);
                return Ok(bsn);
            }
            tracing::debug!("Rejected candidate {}", bsn);
        }

        Err(ToolsError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    pub fn generate_many(&mut self, count: usize) -> Result<Vec<Bsn>> {
        let mut numbers = Vec::with_capacity(count);
        for _ in 0..count {
            numbers.push(self.generate()?);
        }
        Ok(numbers)
    }
}

/// Generates one valid BSN from the thread-local RNG.
pub fn generate_valid_bsn() -> Result<Bsn> {
    BsnGenerator::from_thread_rng().generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bsn::is_valid_bsn;

    /// RNG that only ever yields zero, so every draw is `000000000`.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn test_generated_numbers_are_valid() {
        let mut generator = BsnGenerator::seeded(7);
        for bsn in generator.generate_many(50).unwrap() {
            assert_eq!(bsn.as_str().len(), 9);
            assert!(bsn.as_str().bytes().all(|b| b.is_ascii_digit()));
            assert!(is_valid_bsn(&bsn).unwrap(), "{} should validate", bsn);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let first = BsnGenerator::seeded(42).generate_many(10).unwrap();
        let second = BsnGenerator::seeded(42).generate_many(10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let first = BsnGenerator::seeded(1).generate_many(10).unwrap();
        let second = BsnGenerator::seeded(2).generate_many(10).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_broken_rng_exhausts() {
        let mut generator = BsnGenerator::new(ZeroRng).with_max_attempts(25);
        match generator.generate() {
            Err(ToolsError::GenerationExhausted { attempts }) => assert_eq!(attempts, 25),
            other => panic!("expected GenerationExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_thread_rng_generation() {
        let bsn = generate_valid_bsn().unwrap();
        assert!(is_valid_bsn(&bsn).unwrap());
    }

    #[test]
    fn test_default_bound() {
        assert_eq!(BsnGenerator::seeded(0).max_attempts(), DEFAULT_MAX_ATTEMPTS);
    }
}
