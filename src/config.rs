//! Configuration types for the surface simulation.

use crate::error::SimulationError;
use crate::float::Float;

/// How the neighbor coupling term enters a spring's acceleration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CouplingSign {
    /// `acceleration = self_force + coupling`
    Add,
    /// `acceleration = self_force - coupling`
    #[default]
    Subtract,
}

/// What a touch on the surface does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TouchMode {
    /// Splash right under the touch point.
    #[default]
    Immediate,
    /// Drop an object from the touch point; it splashes when it reaches the surface.
    Deferred,
}

/// Configuration for the spring chain stepper and the touch/splash behavior.
///
/// # Builder Pattern
/// ```
/// use splashy::config::{CouplingSign, SimulationConfig};
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_stiffness(-0.0005)
///     .with_dampening(0.999)
///     .with_sub_steps(4)
///     .with_coupling_sign(CouplingSign::Add);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Spring coefficient in (-1, 0). Default: -0.0005.
    pub stiffness: F,
    /// Per-sub-step velocity retention in (0, 1). Default: 0.999.
    pub dampening: F,
    /// Sub-steps per frame. Default: 4.
    pub sub_steps: usize,
    /// Sign of the neighbor coupling term. Default: `Subtract`.
    pub coupling_sign: CouplingSign,
    /// Offset assumed for the missing neighbor at either end. Default: 0.
    pub boundary_fallback: F,
    /// Waves in a randomly generated wave set. Default: 7.
    pub wave_count: usize,
    /// Magnitude of an immediate touch splash. Default: 0.5.
    pub splash_magnitude: F,
    /// Half-width of a splash window, in nodes. Default: 32.
    pub splash_radius: usize,
    /// Deferred drops splash with `touch_y / touch_magnitude_divisor`. Default: 150.
    pub touch_magnitude_divisor: F,
    /// Downward acceleration of a deferred drop, scene units/s². Default: 980.
    pub fall_gravity: F,
    /// Default: `Immediate`.
    pub touch_mode: TouchMode,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    ///
    /// Defaults are written as `f32` literals, so with `f64` they carry
    /// `f32` rounding (stiffness is -5.000000237e-4, not -5e-4).
    pub fn new() -> Self {
        SimulationConfig {
            stiffness: F::from_f32(-0.0005),
            dampening: F::from_f32(0.999),
            sub_steps: 4,
            coupling_sign: CouplingSign::Subtract,
            boundary_fallback: F::zero(),
            wave_count: 7,
            splash_magnitude: F::half(),
            splash_radius: 32,
            touch_magnitude_divisor: F::from_f32(150.0),
            fall_gravity: F::from_f32(980.0),
            touch_mode: TouchMode::Immediate,
        }
    }

    /// Twelve sub-steps per frame: ripples travel three times as far per frame.
    pub fn responsive() -> Self {
        Self::new().with_sub_steps(12)
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_dampening(mut self, dampening: F) -> Self {
        self.dampening = dampening;
        self
    }

    /// Set the number of sub-steps. Clamped to at least 1.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    pub fn with_coupling_sign(mut self, sign: CouplingSign) -> Self {
        self.coupling_sign = sign;
        self
    }

    pub fn with_boundary_fallback(mut self, fallback: F) -> Self {
        self.boundary_fallback = fallback;
        self
    }

    pub fn with_wave_count(mut self, count: usize) -> Self {
        self.wave_count = count;
        self
    }

    pub fn with_splash(mut self, magnitude: F, radius: usize) -> Self {
        self.splash_magnitude = magnitude;
        self.splash_radius = radius;
        self
    }

    pub fn with_touch_magnitude_divisor(mut self, divisor: F) -> Self {
        self.touch_magnitude_divisor = divisor;
        self
    }

    pub fn with_fall_gravity(mut self, gravity: F) -> Self {
        self.fall_gravity = gravity;
        self
    }

    pub fn with_touch_mode(mut self, mode: TouchMode) -> Self {
        self.touch_mode = mode;
        self
    }

    /// Reject values that would make the chain blow up or index out of range.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let scalars = [
            self.stiffness,
            self.dampening,
            self.boundary_fallback,
            self.splash_magnitude,
            self.touch_magnitude_divisor,
            self.fall_gravity,
        ];
        if scalars.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::NonFiniteInput);
        }
        if self.stiffness >= F::zero() || self.stiffness <= -F::one() {
            return Err(SimulationError::InvalidStiffness);
        }
        if self.dampening <= F::zero() || self.dampening >= F::one() {
            return Err(SimulationError::InvalidDampening);
        }
        if self.sub_steps == 0 {
            return Err(SimulationError::InvalidSubSteps);
        }
        if self.splash_radius == 0 {
            return Err(SimulationError::InvalidRadius);
        }
        if self.touch_magnitude_divisor == F::zero() {
            return Err(SimulationError::InvalidTouchDivisor);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
