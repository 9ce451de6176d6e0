use proptest::prelude::*;
use splashy::{inject_splash, SimulationError, SplashRequest, SplashWindow, SpringChain};

const SENTINEL: f64 = 7.0;

fn sentinel_chain(n: usize, width: f64) -> SpringChain<f64> {
    let mut chain = SpringChain::new(n, width).unwrap();
    for s in chain.springs_mut() {
        s.velocity = SENTINEL;
    }
    chain
}

#[test]
fn half_sine_ramp_from_window_start() {
    // x = -68.5 maps to node 31 of 200, so the window is [0, 63].
    let mut chain = sentinel_chain(200, 200.0);
    let window = inject_splash(&mut chain, 200.0, &SplashRequest::new(-68.5, 2.0, 32))
        .unwrap()
        .unwrap();
    assert_eq!(window, SplashWindow { lower: 0, upper: 63 });
    assert_eq!(window.len(), 64);
    assert!(!window.is_empty());

    assert_eq!(chain.spring(0).unwrap().velocity, 0.0);
    assert!((chain.spring(32).unwrap().velocity + 2.0).abs() < 1e-12);
    for i in 0..=63 {
        let expected = -2.0 * ((i as f64) / 64.0 * std::f64::consts::PI).sin();
        assert!((chain.spring(i).unwrap().velocity - expected).abs() < 1e-12, "node {}", i);
    }
    for i in 64..200 {
        assert_eq!(chain.spring(i).unwrap().velocity, SENTINEL, "node {} was touched", i);
    }
}

#[test]
fn splash_overwrites_instead_of_adding() {
    let mut chain = sentinel_chain(100, 100.0);
    let request = SplashRequest::new(0.0, 1.0, 8);
    inject_splash(&mut chain, 100.0, &request).unwrap();
    let first: Vec<f64> = chain.springs().iter().map(|s| s.velocity).collect();
    inject_splash(&mut chain, 100.0, &request).unwrap();
    let second: Vec<f64> = chain.springs().iter().map(|s| s.velocity).collect();
    assert_eq!(first, second);
}

#[test]
fn splash_offsets_are_left_alone() {
    let mut chain: SpringChain<f64> = SpringChain::new(64, 64.0).unwrap();
    for s in chain.springs_mut() {
        s.offset = 1.5;
    }
    inject_splash(&mut chain, 64.0, &SplashRequest::new(0.0, 1.0, 4)).unwrap();
    assert!(chain.springs().iter().all(|s| s.offset == 1.5));
}

#[test]
fn window_is_clipped_at_the_right_edge() {
    let mut chain = sentinel_chain(100, 100.0);
    let window = inject_splash(&mut chain, 100.0, &SplashRequest::new(49.5, 1.0, 10))
        .unwrap()
        .unwrap();
    assert_eq!(window, SplashWindow { lower: 89, upper: 99 });
    assert_eq!(chain.spring(89).unwrap().velocity, 0.0);
    assert_eq!(chain.spring(88).unwrap().velocity, SENTINEL);
}

#[test]
fn far_away_splash_is_a_no_op() {
    let mut chain = sentinel_chain(50, 100.0);
    for x in [-1000.0, 1000.0, 1.0e30] {
        let result = inject_splash(&mut chain, 100.0, &SplashRequest::new(x, 1.0, 4)).unwrap();
        assert_eq!(result, None);
    }
    assert!(chain.springs().iter().all(|s| s.velocity == SENTINEL));
}

#[test]
fn invalid_requests_are_rejected() {
    let mut chain: SpringChain<f32> = SpringChain::new(10, 10.0).unwrap();
    assert_eq!(
        inject_splash(&mut chain, 10.0, &SplashRequest::new(0.0, 1.0, 0)),
        Err(SimulationError::InvalidRadius)
    );
    assert_eq!(
        inject_splash(&mut chain, 10.0, &SplashRequest::new(f32::NAN, 1.0, 3)),
        Err(SimulationError::NonFiniteInput)
    );
    assert_eq!(
        inject_splash(&mut chain, 0.0, &SplashRequest::new(0.0, 1.0, 3)),
        Err(SimulationError::InvalidSceneWidth)
    );
}

proptest! {
    #[test]
    fn only_the_reported_window_changes(
        n in 1usize..400,
        x in -1000.0f64..1000.0,
        magnitude in -5.0f64..5.0,
        radius in 1usize..100,
    ) {
        let width = 640.0;
        let mut chain = sentinel_chain(n, width);
        let window = inject_splash(&mut chain, width, &SplashRequest::new(x, magnitude, radius)).unwrap();
        match window {
            Some(w) => {
                prop_assert!(w.lower <= w.upper);
                prop_assert!(!w.is_empty());
                prop_assert!(w.upper < n);
                prop_assert!(w.len() <= 2 * radius + 1);
                for (i, s) in chain.springs().iter().enumerate() {
                    if w.contains(i) {
                        prop_assert!(s.velocity.abs() <= magnitude.abs() + 1e-12);
                    } else {
                        prop_assert_eq!(s.velocity, SENTINEL);
                    }
                }
            }
            None => prop_assert!(chain.springs().iter().all(|s| s.velocity == SENTINEL)),
        }
    }
}
