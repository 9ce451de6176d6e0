use rand::rngs::StdRng;
use rand::SeedableRng;
use splashy::{
    CouplingSign, EnergyObserver, Simulation, SimulationConfig, SimulationError, TouchMode,
    WaveSet,
};

fn calm(nodes: usize, width: f64, config: SimulationConfig<f64>) -> Simulation<f64> {
    Simulation::with_waves(nodes, width, config, WaveSet::calm()).unwrap()
}

#[test]
fn centered_splash_spreads_one_node_per_sub_step() {
    let config = SimulationConfig::new()
        .with_stiffness(-0.0005)
        .with_dampening(0.999)
        .with_sub_steps(4);
    let mut sim = calm(200, 640.0, config);

    let window = sim.splash(0.0, 1.0, 32).unwrap().unwrap();
    assert_eq!((window.lower, window.upper), (68, 132));

    let heights: Vec<f64> = sim.update(0.0).map(|p| p.height).collect();
    for i in 90..=110 {
        assert!(heights[i] != 0.0, "node {} should have moved", i);
    }
    assert!(heights[100] < 0.0);

    // Neighbor coupling moves the front at most one node per sub-step.
    for (i, &h) in heights.iter().enumerate() {
        if i < 68 - 4 || i > 132 + 4 {
            assert_eq!(h, 0.0, "node {} outside the splash moved", i);
        }
    }
}

#[test]
fn resting_surface_without_waves_stays_flat() {
    let mut sim = calm(300, 640.0, SimulationConfig::responsive());
    for frame in 0..300 {
        let t = frame as f64 / 60.0;
        assert!(sim.update(t).all(|p| p.height == 0.0));
    }
}

#[test]
fn flat_waves_leave_only_their_offset() {
    let waves = WaveSet::new(vec![splashy::Wave::new(0.0, 0.0, 0.05, -2.0)]);
    let mut sim = Simulation::with_waves(50, 100.0, SimulationConfig::new(), waves).unwrap();
    for t in [0.0, 3.0, 1.0e4] {
        assert!(sim.update(t).all(|p| p.height == 0.0));
    }
}

#[test]
fn initialize_draws_configured_wave_count() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = SimulationConfig::new().with_wave_count(3);
    let sim: Simulation<f32> = Simulation::initialize(256, 640.0, config, &mut rng).unwrap();
    assert_eq!(sim.waves().len(), 3);
    assert_eq!(sim.chain().len(), 256);
    assert!(sim.chain().springs().iter().all(|s| s.offset == 0.0 && s.velocity == 0.0));
}

#[test]
fn default_initialize_has_seven_waves() {
    let mut rng = StdRng::seed_from_u64(1);
    let sim: Simulation<f64> =
        Simulation::initialize(300, 640.0, SimulationConfig::new(), &mut rng).unwrap();
    assert_eq!(sim.waves().len(), 7);
}

#[test]
fn bad_setup_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let init = |n, w, c| Simulation::<f64>::initialize(n, w, c, &mut StdRng::seed_from_u64(0));
    assert_eq!(init(0, 640.0, SimulationConfig::new()).err(), Some(SimulationError::EmptyChain));
    assert_eq!(init(10, -1.0, SimulationConfig::new()).err(), Some(SimulationError::InvalidSceneWidth));
    assert_eq!(
        init(10, 640.0, SimulationConfig::new().with_dampening(1.0)).err(),
        Some(SimulationError::InvalidDampening)
    );
    assert_eq!(
        init(10, 640.0, SimulationConfig::new().with_splash(0.5, 0)).err(),
        Some(SimulationError::InvalidRadius)
    );
    for stiffness in [0.0005, 0.0, -1.0, -3.0] {
        assert_eq!(
            init(10, 640.0, SimulationConfig::new().with_stiffness(stiffness)).err(),
            Some(SimulationError::InvalidStiffness),
            "stiffness {}",
            stiffness
        );
    }
    assert_eq!(
        init(10, 640.0, SimulationConfig::new().with_touch_magnitude_divisor(0.0)).err(),
        Some(SimulationError::InvalidTouchDivisor)
    );
    assert_eq!(
        init(10, 640.0, SimulationConfig::new().with_stiffness(f64::NAN)).err(),
        Some(SimulationError::NonFiniteInput)
    );
    let mut config = SimulationConfig::new();
    config.sub_steps = 0;
    assert_eq!(
        Simulation::<f64>::initialize(10, 640.0, config, &mut rng).err(),
        Some(SimulationError::InvalidSubSteps)
    );
}

#[test]
fn immediate_touch_splashes_with_configured_magnitude() {
    let mut sim = calm(300, 640.0, SimulationConfig::new());
    sim.on_touch(0.0, 200.0).unwrap();
    let velocities: Vec<f64> = sim.chain().springs().iter().map(|s| s.velocity).collect();
    // Node 150 is the impact; the window starts 32 nodes to its left.
    assert!((velocities[150] + 0.5).abs() < 1e-12);
    assert_eq!(velocities[117], 0.0);
    assert_eq!(velocities[118], 0.0);
    assert!(velocities[119] < 0.0);
    assert_eq!(velocities[183], 0.0);
}

#[test]
fn deferred_touch_waits_for_the_landing() {
    let config = SimulationConfig::new().with_touch_mode(TouchMode::Deferred);
    let mut sim = calm(300, 640.0, config);
    sim.on_touch(-100.0, 150.0).unwrap();
    assert!(sim.trigger().is_falling());

    let mut landed_at = None;
    for frame in 0..120 {
        sim.update(frame as f64 / 60.0);
        if !sim.trigger().is_falling() {
            landed_at = Some(frame);
            break;
        }
        assert_eq!(sim.kinetic_energy(), 0.0, "splash fired early at frame {}", frame);
    }
    assert!(landed_at.is_some(), "object never landed");

    // Magnitude is touch height / 150; window peak is -magnitude.
    let mid = ((-100.0 + 320.0) / 640.0 * 300.0f64).floor() as usize;
    let peak = sim.chain().spring(mid).unwrap().velocity;
    assert!((peak + 1.0).abs() < 1e-12, "peak velocity {}", peak);
}

#[test]
fn second_touch_replaces_the_falling_object() {
    let config = SimulationConfig::new().with_touch_mode(TouchMode::Deferred);
    let mut sim = calm(100, 100.0, config);
    sim.on_touch(-40.0, 300.0).unwrap();
    sim.update(0.0);
    sim.on_touch(25.0, 30.0).unwrap();
    assert_eq!(sim.trigger().height(), Some(30.0));

    let mut frame = 1;
    while sim.trigger().is_falling() {
        assert!(frame < 120, "object never landed");
        sim.update(frame as f64 / 60.0);
        frame += 1;
    }
    let moved: Vec<usize> = sim
        .chain()
        .springs()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.velocity != 0.0)
        .map(|(i, _)| i)
        .collect();
    assert!(!moved.is_empty());
    assert!(moved.iter().all(|&i| i > 40), "splash landed in the wrong place: {:?}", moved);

    // The first drop was discarded, so nothing else lands.
    for _ in 0..120 {
        sim.update(frame as f64 / 60.0);
        frame += 1;
        assert!(!sim.trigger().is_falling());
    }
}

#[test]
fn non_finite_touch_is_rejected() {
    let mut sim = calm(10, 10.0, SimulationConfig::new());
    assert_eq!(sim.on_touch(f64::INFINITY, 0.0), Err(SimulationError::NonFiniteInput));
}

#[test]
fn reset_returns_to_rest_and_keeps_waves() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = SimulationConfig::new().with_touch_mode(TouchMode::Deferred);
    let mut sim: Simulation<f64> = Simulation::initialize(80, 160.0, config, &mut rng).unwrap();
    let waves = sim.waves().clone();
    sim.splash(0.0, 1.0, 10).unwrap();
    sim.on_touch(0.0, 50.0).unwrap();
    sim.update(0.0);
    sim.reset();
    assert_eq!(sim.kinetic_energy(), 0.0);
    assert!(sim.chain().springs().iter().all(|s| s.offset == 0.0));
    assert!(!sim.trigger().is_falling());
    assert_eq!(sim.waves(), &waves);
}

#[test]
fn observed_update_reports_every_sub_step() {
    for sign in [CouplingSign::Add, CouplingSign::Subtract] {
        let config = SimulationConfig::responsive().with_coupling_sign(sign);
        let mut sim = calm(64, 64.0, config);
        sim.splash(0.0, 1.0, 16).unwrap();
        let mut observer = EnergyObserver::new();
        for frame in 0..10 {
            sim.update_observed(frame as f64 / 60.0, &mut observer);
        }
        assert_eq!(observer.samples.len(), 120);
        assert_eq!(observer.last(), Some(sim.kinetic_energy()));
    }
}
