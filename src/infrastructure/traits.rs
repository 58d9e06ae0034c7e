//! Boundary traits for testability
//!
//! Randomness is the only external input of the store; it is abstracted here
//! so services can be tested with a deterministic source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::PickupCode;

/// Source of pickup codes for newly stored parcels.
pub trait PickupCodeSource: Send {
    /// Produce the next pickup code. Collisions with earlier codes are allowed.
    fn next_code(&mut self) -> PickupCode;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Uniform random codes: each character drawn independently from the alphabet.
#[derive(Debug)]
pub struct RandomCodeSource {
    rng: StdRng,
}

impl RandomCodeSource {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PickupCodeSource for RandomCodeSource {
    fn next_code(&mut self) -> PickupCode {
        PickupCode::from_picks(|alphabet_len| self.rng.gen_range(0..alphabet_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PICKUP_CODE_LEN;

    #[test]
    fn random_codes_use_alphabet_only() {
        let mut source = RandomCodeSource::from_entropy();
        for _ in 0..200 {
            let code = source.next_code();
            assert_eq!(code.as_str().len(), PICKUP_CODE_LEN);
            assert!(code
                .as_str()
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomCodeSource::seeded(7);
        let mut b = RandomCodeSource::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.next_code(), b.next_code());
        }
    }
}
