//! Splash impulses: half-sine velocity bursts over a window of nodes.

use crate::error::SimulationError;
use crate::float::Float;
use crate::spring::SpringChain;

/// An impulse request in scene space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplashRequest<F: Float> {
    /// Horizontal scene coordinate of the impact.
    pub x: F,
    pub magnitude: F,
    /// Window half-width in nodes.
    pub radius: usize,
}

impl<F: Float> SplashRequest<F> {
    pub fn new(x: F, magnitude: F, radius: usize) -> Self {
        SplashRequest { x, magnitude, radius }
    }
}

/// Inclusive range of node indices a splash wrote to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SplashWindow {
    pub lower: usize,
    pub upper: usize,
}

impl SplashWindow {
    pub fn len(&self) -> usize {
        self.upper - self.lower + 1
    }

    /// Always false; an empty window is reported as `None` instead.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.lower..=self.upper).contains(&index)
    }
}

/// Overwrite node velocities around `request.x` with a half-sine ramp.
///
/// The impact maps to node `mid = floor((x + width/2) / width * N)` and the
/// window `[mid - radius, mid + radius]` is clipped to the chain. Node `i`
/// in the window gets `velocity = -magnitude * sin((i - lower) / (2 * radius) * pi)`.
/// Nodes outside the window are untouched. Returns `Ok(None)` when the
/// clipped window is empty.
pub fn inject_splash<F: Float>(
    chain: &mut SpringChain<F>,
    scene_width: F,
    request: &SplashRequest<F>,
) -> Result<Option<SplashWindow>, SimulationError> {
    if request.radius == 0 {
        return Err(SimulationError::InvalidRadius);
    }
    if !request.x.is_finite() || !request.magnitude.is_finite() {
        return Err(SimulationError::NonFiniteInput);
    }
    if !scene_width.is_finite() || scene_width <= F::zero() {
        return Err(SimulationError::InvalidSceneWidth);
    }

    let count = chain.len();
    let proportion = (request.x + scene_width * F::half()) / scene_width;
    let mid = (proportion * F::from_usize(count)).floor().to_i64();
    let radius = i64::try_from(request.radius).unwrap_or(i64::MAX);

    let lower = mid.saturating_sub(radius).max(0);
    let upper = mid
        .saturating_add(radius)
        .min(i64::try_from(count - 1).unwrap_or(i64::MAX));
    if lower > upper {
        log::warn!(
            "splash at x={} misses the chain (mid node {}, {} nodes)",
            request.x,
            mid,
            count
        );
        return Ok(None);
    }

    // Both bounds are within [0, count - 1] here.
    let window = SplashWindow { lower: lower as usize, upper: upper as usize };
    let span = F::from_usize(request.radius) * F::two();
    for (k, spring) in chain.springs_mut()[window.lower..=window.upper]
        .iter_mut()
        .enumerate()
    {
        spring.velocity = -request.magnitude * (F::from_usize(k) / span * F::pi()).sin();
    }

    log::trace!(
        "splash magnitude {} over nodes {}..={}",
        request.magnitude,
        window.lower,
        window.upper
    );
    Ok(Some(window))
}
