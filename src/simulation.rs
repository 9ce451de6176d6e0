//! The frame-driven surface simulation that ties the pieces together.

use crate::config::{SimulationConfig, TouchMode};
use crate::error::SimulationError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::sampler::{self, Samples};
use crate::splash::{self, SplashRequest, SplashWindow};
use crate::spring::SpringChain;
use crate::stepper::ChainStepper;
use crate::trigger::SplashTrigger;
use crate::wave::WaveSet;
use rand::Rng;

/// A water surface: spring chain, wave overlay and touch handling.
///
/// Drive it with one [`update`](Self::update) per frame and feed touches
/// through [`on_touch`](Self::on_touch) between frames.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    chain: SpringChain<F>,
    waves: WaveSet<F>,
    config: SimulationConfig<F>,
    stepper: ChainStepper<F>,
    trigger: SplashTrigger<F>,
    last_time: Option<F>,
}

impl<F: Float> Simulation<F> {
    /// Build a resting chain of `node_count` nodes across `scene_width` and a
    /// random wave set of `config.wave_count` waves drawn from `rng`.
    pub fn initialize<R: Rng + ?Sized>(
        node_count: usize,
        scene_width: F,
        config: SimulationConfig<F>,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let waves = WaveSet::generate_random(config.wave_count, rng);
        Self::with_waves(node_count, scene_width, config, waves)
    }

    /// Build a resting chain with an explicit wave set.
    pub fn with_waves(
        node_count: usize,
        scene_width: F,
        config: SimulationConfig<F>,
        waves: WaveSet<F>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let chain = SpringChain::new(node_count, scene_width)?;
        log::debug!(
            "surface simulation: {} nodes over width {}, {} waves, {} sub-steps/frame",
            node_count,
            scene_width,
            waves.len(),
            config.sub_steps
        );

        Ok(Simulation {
            chain,
            waves,
            config,
            stepper: ChainStepper::new(),
            trigger: SplashTrigger::new(),
            last_time: None,
        })
    }

    /// Advance one frame to `current_time` (seconds) and return the new height profile.
    pub fn update(&mut self, current_time: F) -> Samples<'_, F> {
        self.update_observed(current_time, &mut NoOpStepObserver)
    }

    /// [`update`](Self::update) with a step observer attached.
    pub fn update_observed<O: StepObserver<F>>(
        &mut self,
        current_time: F,
        observer: &mut O,
    ) -> Samples<'_, F> {
        let dt = self
            .last_time
            .map_or(F::zero(), |last| (current_time - last).max(F::zero()));
        self.last_time = Some(current_time);

        self.stepper.step(&mut self.chain, &self.config, observer);

        // A landing only writes velocities, so it cannot change this frame's heights.
        if let Some(release) = self.trigger.advance(dt, self.config.fall_gravity) {
            log::debug!(
                "dropped object landed at x={} with magnitude {}",
                release.x,
                release.magnitude
            );
            let request = SplashRequest::new(release.x, release.magnitude, self.config.splash_radius);
            let width = self.chain.scene_width();
            if let Err(err) = splash::inject_splash(&mut self.chain, width, &request) {
                log::warn!("dropped object splash rejected: {}", err);
            }
        }

        sampler::sample(&self.chain, &self.waves, current_time)
    }

    /// Height profile at `t` without stepping.
    pub fn samples(&self, t: F) -> Samples<'_, F> {
        sampler::sample(&self.chain, &self.waves, t)
    }

    /// Handle a touch released at scene point `(x, y)`.
    ///
    /// In [`TouchMode::Immediate`] this splashes right away with the configured
    /// magnitude and radius. In [`TouchMode::Deferred`] it drops an object from
    /// the point whose landing splashes with magnitude `y / touch_magnitude_divisor`.
    pub fn on_touch(&mut self, x: F, y: F) -> Result<(), SimulationError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SimulationError::NonFiniteInput);
        }
        match self.config.touch_mode {
            TouchMode::Immediate => {
                self.splash(x, self.config.splash_magnitude, self.config.splash_radius)?;
            }
            TouchMode::Deferred => {
                let magnitude = y / self.config.touch_magnitude_divisor;
                self.trigger.drop_at(x, y, magnitude);
            }
        }
        Ok(())
    }

    /// Splash at scene coordinate `x` right now.
    pub fn splash(
        &mut self,
        x: F,
        magnitude: F,
        radius: usize,
    ) -> Result<Option<SplashWindow>, SimulationError> {
        let width = self.chain.scene_width();
        splash::inject_splash(&mut self.chain, width, &SplashRequest::new(x, magnitude, radius))
    }

    /// Put the chain back at rest and forget any falling object. Waves are kept.
    pub fn reset(&mut self) {
        self.chain.reset();
        self.trigger = SplashTrigger::Idle;
        self.last_time = None;
    }

    pub fn kinetic_energy(&self) -> F {
        self.chain.kinetic_energy()
    }

    pub fn chain(&self) -> &SpringChain<F> {
        &self.chain
    }

    pub fn waves(&self) -> &WaveSet<F> {
        &self.waves
    }

    pub fn trigger(&self) -> &SplashTrigger<F> {
        &self.trigger
    }

    pub fn config(&self) -> &SimulationConfig<F> {
        &self.config
    }
}
