//! Spring-chain water surfaces with procedural waves and splashes, for games.
//!
//! `splashy` simulates a one-dimensional deformable surface as a row of coupled,
//! damped springs, overlays a set of sinusoidal traveling waves, and lets you
//! poke it with splashes. Rendering is left to you: every frame the simulation
//! hands back a sequence of `(x, height)` samples.
//!
//! # Features
//!
//! - **Spring chain**: Fixed-length row of springs with neighbor coupling and sub-stepping
//! - **Wave overlay**: Seeded random wave sets, summed per sample
//! - **Splashes**: Half-sine velocity bursts over a clipped node window
//! - **Deferred splashes**: Drop an object and splash when it lands
//! - **Observable**: Monitor sub-steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use splashy::{Simulation, SimulationConfig, WaveSet};
//!
//! let mut sim: Simulation<f32> =
//!     Simulation::with_waves(200, 640.0, SimulationConfig::new(), WaveSet::from_seed(7, 42)).unwrap();
//! sim.on_touch(0.0, 100.0).unwrap();
//! let heights: Vec<f32> = sim.update(0.016).map(|p| p.height).collect();
//! assert_eq!(heights.len(), 200);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod wave;
pub mod spring;
pub mod stepper;
pub mod splash;
pub mod sampler;
pub mod trigger;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use wave::{Wave, WaveSet, DEFAULT_WAVE_COUNT};
pub use spring::{Spring, SpringChain};
pub use stepper::ChainStepper;
pub use splash::{inject_splash, SplashRequest, SplashWindow};
pub use sampler::{sample, sample_into, SamplePoint, Samples};
pub use trigger::{Release, SplashTrigger};
pub use simulation::Simulation;
pub use config::{CouplingSign, SimulationConfig, TouchMode};
pub use observer::{EnergyObserver, NoOpStepObserver, StepObserver};
pub use error::SimulationError;
