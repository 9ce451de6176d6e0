//! Procedural traveling waves summed over the surface.

use crate::float::Float;
use alloc::vec::Vec as AllocVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of waves in the default wave set.
pub const DEFAULT_WAVE_COUNT: usize = 7;

/// A single sinusoidal traveling wave.
///
/// Contributes `offset + amplitude * sin(frequency * x + phase * t)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Wave<F: Float> {
    /// Constant vertical bias.
    pub offset: F,
    pub amplitude: F,
    /// Spatial frequency, radians per scene unit.
    pub frequency: F,
    /// Temporal rate, radians per second. Negative values travel right.
    pub phase: F,
}

impl<F: Float> Wave<F> {
    pub fn new(offset: F, amplitude: F, frequency: F, phase: F) -> Self {
        Wave { offset, amplitude, frequency, phase }
    }

    /// Draw a wave with offset in [-3, 3], amplitude in [-5, 5],
    /// frequency in [0, 0.1] and phase in [-4, 0].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Wave {
            offset: rng.gen_range(F::from_f32(-3.0)..=F::from_f32(3.0)),
            amplitude: rng.gen_range(F::from_f32(-5.0)..=F::from_f32(5.0)),
            frequency: rng.gen_range(F::zero()..=F::from_f32(0.1)),
            phase: rng.gen_range(F::from_f32(-4.0)..=F::zero()),
        }
    }

    /// Contribution of this wave at horizontal position `x` and time `t`.
    #[inline]
    pub fn evaluate(&self, x: F, t: F) -> F {
        self.offset + self.amplitude * (self.frequency * x + self.phase * t).sin()
    }
}

/// A fixed collection of waves whose contributions are summed.
///
/// Immutable once built; the simulation holds one for its whole lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaveSet<F: Float> {
    waves: AllocVec<Wave<F>>,
}

impl<F: Float> WaveSet<F> {
    pub fn new(waves: AllocVec<Wave<F>>) -> Self {
        WaveSet { waves }
    }

    /// A wave set with no waves. Contributes exactly zero everywhere.
    pub fn calm() -> Self {
        WaveSet { waves: AllocVec::new() }
    }

    /// Generate `count` random waves from the supplied generator.
    pub fn generate_random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        WaveSet {
            waves: (0..count).map(|_| Wave::random(&mut *rng)).collect(),
        }
    }

    /// Generate `count` random waves from a seeded `StdRng`.
    pub fn from_seed(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_random(count, &mut rng)
    }

    /// Summed contribution of every wave at `(x, t)`.
    pub fn evaluate(&self, x: F, t: F) -> F {
        self.waves
            .iter()
            .fold(F::zero(), |total, wave| total + wave.evaluate(x, t))
    }

    pub fn waves(&self) -> &[Wave<F>] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}
