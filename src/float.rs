//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};
use rand::distributions::uniform::SampleUniform;

/// Trait abstracting the floating-point operations the surface simulation needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate builds
/// without `std`. `SampleUniform` lets wave sets be drawn from any `rand::Rng`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + SampleUniform
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert an index or count.
    fn from_usize(v: usize) -> Self;
    /// Truncating conversion to a signed integer. Saturates on overflow.
    fn to_i64(self) -> i64;
    /// True unless the value is NaN or infinite.
    fn is_finite(self) -> bool;

    /// Minimum of two values.
    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Maximum of two values.
    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sin(self) -> Self { libm::sinf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_i64(self) -> i64 { self as i64 }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sin(self) -> Self { libm::sin(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_i64(self) -> i64 { self as i64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
