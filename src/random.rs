//! Seedable source of random floats and vectors for building example inputs.
//!
//! The generator is an owned value handed to whoever needs it; nothing here
//! touches process-wide state.

use crate::error::VectorError;
use crate::vector::{Vector2D, Vector3D, Vector4D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Reproducible source: the same seed yields the same sequence.
    pub fn from_seed(seed: u64) -> RandomSource {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds once from the system clock.
    pub fn from_clock() -> RandomSource {
        // A clock before the epoch falls back to seed 0 rather than failing.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "seeded random source from system clock");
        RandomSource::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[min, max]`.
    ///
    /// # Errors
    ///
    /// `VectorError::InvalidRange` when `min > max`, when either bound is not
    /// finite, or when the span `max - min` overflows `f32`.
    pub fn rand_float(&mut self, min: f32, max: f32) -> Result<f32, VectorError> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(VectorError::InvalidRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.rng.random_range(min..=max))
    }

    pub fn rand_vector2(&mut self, min: f32, max: f32) -> Result<Vector2D, VectorError> {
        Ok(Vector2D::new(
            self.rand_float(min, max)?,
            self.rand_float(min, max)?,
        ))
    }

    pub fn rand_vector3(&mut self, min: f32, max: f32) -> Result<Vector3D, VectorError> {
        Ok(Vector3D::new(
            self.rand_float(min, max)?,
            self.rand_float(min, max)?,
            self.rand_float(min, max)?,
        ))
    }

    pub fn rand_vector4(&mut self, min: f32, max: f32) -> Result<Vector4D, VectorError> {
        Ok(Vector4D::new(
            self.rand_float(min, max)?,
            self.rand_float(min, max)?,
            self.rand_float(min, max)?,
            self.rand_float(min, max)?,
        ))
    }
}
