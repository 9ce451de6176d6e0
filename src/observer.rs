//! Step observer trait for monitoring surface simulation progress.

use crate::float::Float;
use crate::spring::SpringChain;

/// Trait for observing chain steps.
///
/// Implement this trait to monitor the stepper (e.g., for debugging,
/// energy plots, or profiling). All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after every sub-step has been committed to the chain.
    fn on_sub_step(&mut self, _sub_step: usize, _chain: &SpringChain<F>) {}

    /// Called when all sub-steps of a frame are complete.
    fn on_step_complete(&mut self, _chain: &SpringChain<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Records the chain's kinetic energy after each sub-step.
#[derive(Clone, Debug, Default)]
pub struct EnergyObserver<F: Float> {
    pub samples: alloc::vec::Vec<F>,
}

impl<F: Float> EnergyObserver<F> {
    pub fn new() -> Self {
        EnergyObserver { samples: alloc::vec::Vec::new() }
    }

    /// Largest recorded energy, or zero if nothing was recorded.
    pub fn peak(&self) -> F {
        self.samples.iter().fold(F::zero(), |a, &b| a.max(b))
    }

    pub fn last(&self) -> Option<F> {
        self.samples.last().copied()
    }
}

impl<F: Float> StepObserver<F> for EnergyObserver<F> {
    fn on_sub_step(&mut self, _sub_step: usize, chain: &SpringChain<F>) {
        self.samples.push(chain.kinetic_energy());
    }
}
