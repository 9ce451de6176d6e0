use splashy::{Simulation, SimulationConfig, TouchMode, WaveSet, DEFAULT_WAVE_COUNT};
use wasm_bindgen::prelude::*;

// ---- Waves Demo ----

#[wasm_bindgen]
pub struct WavesDemo {
    sim: Simulation<f32>,
    heights: Vec<f32>,
}

#[wasm_bindgen]
impl WavesDemo {
    /// `deferred` makes a tap drop a stone instead of splashing right away.
    #[wasm_bindgen(constructor)]
    pub fn new(nodes: usize, width: f32, seed: u64, deferred: bool) -> Result<WavesDemo, JsError> {
        let mode = if deferred { TouchMode::Deferred } else { TouchMode::Immediate };
        let config = if deferred {
            SimulationConfig::new().with_touch_mode(mode)
        } else {
            SimulationConfig::responsive().with_touch_mode(mode)
        };
        let waves = WaveSet::from_seed(DEFAULT_WAVE_COUNT, seed);
        let sim = Simulation::with_waves(nodes, width, config, waves)?;
        log::info!("waves demo: {} nodes, seed {}", nodes, seed);
        Ok(WavesDemo { sim, heights: Vec::with_capacity(nodes) })
    }

    /// Advance to `time` seconds. Read the result with `heights()`.
    pub fn update(&mut self, time: f32) {
        self.heights.clear();
        self.heights.extend(self.sim.update(time).map(|p| p.height));
    }

    /// Touch released at scene point (x, y); origin at the center of the surface.
    pub fn touch(&mut self, x: f32, y: f32) -> Result<(), JsError> {
        self.sim.on_touch(x, y)?;
        Ok(())
    }

    /// Returns [h0, h1, ...] for the last frame, in node order
    pub fn heights(&self) -> Vec<f32> {
        self.heights.clone()
    }

    /// Returns [x0, x1, ...]; fixed for the lifetime of the demo
    pub fn xs(&self) -> Vec<f32> {
        self.sim.chain().xs().to_vec()
    }

    /// Height of the falling stone, or NaN when nothing is falling.
    pub fn stone_height(&self) -> f32 {
        self.sim.trigger().height().unwrap_or(f32::NAN)
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.heights.clear();
    }

    pub fn node_count(&self) -> usize {
        self.sim.chain().len()
    }
}
