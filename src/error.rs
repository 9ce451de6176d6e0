//! Error types for simulation setup and splash requests.

use thiserror::Error;

/// Errors that can occur when building or driving a surface simulation.
///
/// Neighbor lookups past the chain ends and splash windows that fall outside
/// the chain are not errors; they resolve to boundary values and no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A spring chain needs at least one node.
    #[error("spring chain must have at least one node")]
    EmptyChain,
    /// Scene width must be positive and finite.
    #[error("scene width must be positive and finite")]
    InvalidSceneWidth,
    /// Splash radius must be at least one node.
    #[error("splash radius must be at least 1")]
    InvalidRadius,
    /// Stiffness must be negative and greater than -1.
    #[error("stiffness must be in (-1, 0)")]
    InvalidStiffness,
    /// Dampening must lie strictly inside (0, 1).
    #[error("dampening must be in (0, 1)")]
    InvalidDampening,
    /// At least one sub-step per frame is required.
    #[error("sub-step count must be at least 1")]
    InvalidSubSteps,
    /// A coordinate, magnitude or coefficient was NaN or infinite.
    #[error("input value must be finite")]
    NonFiniteInput,
    /// Touch magnitude divisor must be non-zero.
    #[error("touch magnitude divisor must be non-zero")]
    InvalidTouchDivisor,
}
