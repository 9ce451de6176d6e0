//! Per-frame height profile: spring offsets plus the wave overlay.

use crate::float::Float;
use crate::spring::SpringChain;
use crate::wave::WaveSet;
use alloc::vec::Vec as AllocVec;

/// Surface height at one node for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SamplePoint<F: Float> {
    pub x: F,
    pub height: F,
}

/// Iterator over the sample points of a chain at a fixed time.
///
/// Borrows the chain and waves, computes each point on demand, and can be
/// cloned to walk the same profile again.
#[derive(Clone, Debug)]
pub struct Samples<'a, F: Float> {
    chain: &'a SpringChain<F>,
    waves: &'a WaveSet<F>,
    time: F,
    index: usize,
}

impl<'a, F: Float> Iterator for Samples<'a, F> {
    type Item = SamplePoint<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let spring = self.chain.spring(self.index)?;
        let x = self.chain.x(self.index)?;
        self.index += 1;
        Some(SamplePoint {
            x,
            height: spring.offset + self.waves.evaluate(x, self.time),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chain.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, F: Float> ExactSizeIterator for Samples<'a, F> {}

impl<'a, F: Float> core::iter::FusedIterator for Samples<'a, F> {}

/// Sample the surface at time `t`, one point per node in index order.
pub fn sample<'a, F: Float>(
    chain: &'a SpringChain<F>,
    waves: &'a WaveSet<F>,
    t: F,
) -> Samples<'a, F> {
    Samples { chain, waves, time: t, index: 0 }
}

/// Like [`sample`], but writes into `out` (cleared first) to reuse its allocation.
pub fn sample_into<F: Float>(
    chain: &SpringChain<F>,
    waves: &WaveSet<F>,
    t: F,
    out: &mut AllocVec<SamplePoint<F>>,
) {
    out.clear();
    out.extend(sample(chain, waves, t));
}
