//! Reproducible generation of random vectors for property checks

use rand::{Rng, SeedableRng};
use vectors::{Float, GenericVector, LorentzVector, Vector3};

// Select random number generation engine in use
#[cfg(feature = "f32")]
type Engine = rand_xoshiro::Xoshiro128Plus;
#[cfg(not(feature = "f32"))]
type Engine = rand_xoshiro::Xoshiro256Plus;

/// Number of random samples drawn by each property check
pub const NUM_SAMPLES: usize = 1_000;

/// Seeded generator of vectors with components in [-10, 10)
#[derive(Clone)]
pub struct RandGenerator {
    rng: Engine,
}
//
impl RandGenerator {
    // Spawn a new random number generator
    pub fn new() -> Self {
        Self {
            rng: Engine::seed_from_u64(12345),
        }
    }

    // Generate a random floating-point number in [-10, 10)
    pub fn random(&mut self) -> Float {
        self.rng.gen_range(-10.0..10.0)
    }

    /// Generate an array of random numbers
    pub fn random_array<const N: usize>(&mut self) -> [Float; N] {
        let mut result = [0.0; N];
        for component in result.iter_mut() {
            *component = self.random();
        }
        result
    }

    /// Generate a random vector of any dimension
    pub fn generic<const N: usize>(&mut self) -> GenericVector<N> {
        GenericVector::new(self.random_array())
    }

    /// Generate a random 3-vector
    pub fn vector3(&mut self) -> Vector3 {
        Vector3::from(self.random_array())
    }

    /// Generate a random 4-vector
    pub fn lorentz(&mut self) -> LorentzVector {
        LorentzVector::from(self.random_array())
    }
}
