//! Sub-stepped damped update of a spring chain with neighbor coupling.

use crate::config::{CouplingSign, SimulationConfig};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::spring::SpringChain;
use alloc::vec::Vec as AllocVec;

/// Advances a [`SpringChain`] by a configurable number of sub-steps.
///
/// Every sub-step reads neighbor offsets from a snapshot of the previous
/// sub-step, so the result does not depend on iteration order. The snapshot
/// buffer is kept between frames.
#[derive(Clone, Debug, Default)]
pub struct ChainStepper<F: Float> {
    snapshot: AllocVec<F>,
}

impl<F: Float> ChainStepper<F> {
    pub fn new() -> Self {
        ChainStepper { snapshot: AllocVec::new() }
    }

    /// Apply `config.sub_steps` sub-steps to `chain`.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        chain: &mut SpringChain<F>,
        config: &SimulationConfig<F>,
        observer: &mut O,
    ) {
        let quarter = F::half() * F::half();

        for sub in 0..config.sub_steps {
            self.snapshot.clear();
            self.snapshot.extend(chain.offsets());
            let snapshot = &self.snapshot;

            for (i, spring) in chain.springs_mut().iter_mut().enumerate() {
                let left = neighbor_offset(snapshot, i, -1).unwrap_or(config.boundary_fallback);
                let right = neighbor_offset(snapshot, i, 1).unwrap_or(config.boundary_fallback);

                let coupling = config.stiffness * (left + right) * quarter;
                let self_force = config.stiffness * snapshot[i];
                let acceleration = match config.coupling_sign {
                    CouplingSign::Add => self_force + coupling,
                    CouplingSign::Subtract => self_force - coupling,
                };

                spring.velocity = acceleration + spring.velocity * config.dampening;
                spring.offset += spring.velocity;
            }

            observer.on_sub_step(sub, chain);
        }

        observer.on_step_complete(chain);
    }
}

/// Offset at `index + delta`, or `None` past either end. Never wraps.
#[inline]
fn neighbor_offset<F: Float>(offsets: &[F], index: usize, delta: isize) -> Option<F> {
    offsets.get(index.checked_add_signed(delta)?).copied()
}
