//! Spring states and the fixed-length chain that models the surface.

use crate::error::SimulationError;
use crate::float::Float;
use alloc::vec::Vec as AllocVec;

/// Vertical displacement state of one surface node.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spring<F: Float> {
    pub velocity: F,
    pub offset: F,
}

impl<F: Float> Spring<F> {
    /// A spring at rest.
    pub fn new() -> Self {
        Spring { velocity: F::zero(), offset: F::zero() }
    }
}

/// An ordered, fixed-length row of springs spread across the scene width.
///
/// Node `i` sits at `x = i / N * width - width / 2`, so the chain covers
/// `[-width / 2, width / 2)`. Length and x-coordinates never change after
/// construction.
#[derive(Clone, Debug)]
pub struct SpringChain<F: Float> {
    springs: AllocVec<Spring<F>>,
    xs: AllocVec<F>,
    scene_width: F,
}

impl<F: Float> SpringChain<F> {
    pub fn new(node_count: usize, scene_width: F) -> Result<Self, SimulationError> {
        if node_count == 0 {
            return Err(SimulationError::EmptyChain);
        }
        if !scene_width.is_finite() || scene_width <= F::zero() {
            return Err(SimulationError::InvalidSceneWidth);
        }

        let delta = F::one() / F::from_usize(node_count);
        let half_width = scene_width * F::half();
        let xs = (0..node_count)
            .map(|i| delta * F::from_usize(i) * scene_width - half_width)
            .collect();

        Ok(SpringChain {
            springs: alloc::vec![Spring::new(); node_count],
            xs,
            scene_width,
        })
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    /// Always false; a chain has at least one node.
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn scene_width(&self) -> F {
        self.scene_width
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// Mutable access to the spring states. The slice length is fixed.
    pub fn springs_mut(&mut self) -> &mut [Spring<F>] {
        &mut self.springs
    }

    /// Fixed horizontal coordinate of every node, in index order.
    pub fn xs(&self) -> &[F] {
        &self.xs
    }

    pub fn spring(&self, index: usize) -> Option<&Spring<F>> {
        self.springs.get(index)
    }

    pub fn x(&self, index: usize) -> Option<F> {
        self.xs.get(index).copied()
    }

    pub fn offsets(&self) -> impl ExactSizeIterator<Item = F> + '_ {
        self.springs.iter().map(|s| s.offset)
    }

    /// Sum of squared velocities.
    pub fn kinetic_energy(&self) -> F {
        self.springs
            .iter()
            .fold(F::zero(), |acc, s| acc + s.velocity * s.velocity)
    }

    /// Put every spring back at rest.
    pub fn reset(&mut self) {
        self.springs.fill(Spring::new());
    }
}
