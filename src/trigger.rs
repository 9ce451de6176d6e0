//! Deferred splash: one falling object that splashes when it reaches the surface.

use crate::float::Float;

/// A splash released by a falling object reaching the surface line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release<F: Float> {
    pub x: F,
    pub magnitude: F,
}

/// Two-state tracker for a single in-flight object.
///
/// A new drop while one is already falling replaces it; drops are never queued.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SplashTrigger<F: Float> {
    #[default]
    Idle,
    Falling {
        x: F,
        /// Height above the surface line; the object lands once this goes below 0.
        y: F,
        /// Vertical velocity, positive upwards.
        velocity: F,
        magnitude: F,
    },
}

impl<F: Float> SplashTrigger<F> {
    pub fn new() -> Self {
        SplashTrigger::Idle
    }

    /// Start (or restart) a fall from `(x, y)` at rest.
    pub fn drop_at(&mut self, x: F, y: F, magnitude: F) {
        *self = SplashTrigger::Falling { x, y, velocity: F::zero(), magnitude };
    }

    pub fn is_falling(&self) -> bool {
        matches!(self, SplashTrigger::Falling { .. })
    }

    /// Current height of the falling object, if any.
    pub fn height(&self) -> Option<F> {
        match *self {
            SplashTrigger::Falling { y, .. } => Some(y),
            SplashTrigger::Idle => None,
        }
    }

    /// Overwrite the object's height, for callers that run their own physics.
    /// No effect while idle.
    pub fn set_height(&mut self, height: F) {
        if let SplashTrigger::Falling { y, .. } = self {
            *y = height;
        }
    }

    /// Integrate the fall over `dt` seconds under `gravity`, then [`check`](Self::check).
    pub fn advance(&mut self, dt: F, gravity: F) -> Option<Release<F>> {
        if let SplashTrigger::Falling { y, velocity, .. } = self {
            *velocity = *velocity - gravity * dt;
            *y += *velocity * dt;
        }
        self.check()
    }

    /// Land the object if it has dropped below the surface line.
    pub fn check(&mut self) -> Option<Release<F>> {
        match *self {
            SplashTrigger::Falling { x, y, magnitude, .. } if y < F::zero() => {
                *self = SplashTrigger::Idle;
                Some(Release { x, magnitude })
            }
            _ => None,
        }
    }
}
