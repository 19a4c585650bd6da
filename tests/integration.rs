// Integration tests (native) for the `valentine-card` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use rand::SeedableRng;
use rand::rngs::StdRng;
use valentine_card::config::PARTICLE_COUNT;
use valentine_card::{
    CalendarState, CardConfig, CardFlow, ElementSize, PlacementInput, ParticleField, Region,
    TargetPlacement, View, place_evasive,
};

fn input(region: Region) -> PlacementInput {
    PlacementInput {
        region,
        element: ElementSize::new(80.0, 40.0),
        container: ElementSize::new(300.0, 500.0),
        padding: 16.0,
    }
}

// Portrait boundary filling the container: x in [16, 204], y in [16, 444].
#[test]
fn portrait_boundary_positions_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(14);
    let inp = input(Region::new(0.0, 0.0, 300.0, 500.0));
    for _ in 0..200 {
        let p = place_evasive(&inp, &mut rng).unwrap();
        assert!((16.0..=204.0).contains(&p.x), "x = {}", p.x);
        assert!((16.0..=444.0).contains(&p.y), "y = {}", p.y);
    }
}

// Region smaller than element + padding: the button stays put.
#[test]
fn tiny_region_leaves_position_unchanged() {
    let mut rng = StdRng::seed_from_u64(2);
    assert!(place_evasive(&input(Region::new(0.0, 0.0, 40.0, 40.0)), &mut rng).is_none());
}

// Full session: dodge a few times, say yes, add to calendar once.
#[test]
fn full_card_session() {
    let cfg = CardConfig::default();
    let mut flow = CardFlow::new(cfg.calendar.clone());
    let mut rng = StdRng::seed_from_u64(99);
    let inp = input(Region::new(0.0, 0.0, 300.0, 500.0));

    let mut last_instance = 0;
    for _ in 0..5 {
        let moved = flow.evade(&inp, &mut rng).unwrap();
        assert!(moved.instance > last_instance);
        last_instance = moved.instance;
    }
    match flow.view() {
        View::Question(t) => {
            assert!(matches!(t.placement, TargetPlacement::Free(_)));
            assert_eq!(t.instance, 5);
        }
        other => panic!("unexpected view {other:?}"),
    }

    assert!(flow.confirm());
    assert!(!flow.confirm());
    assert!(flow.evade(&inp, &mut rng).is_none());

    let opened: Vec<String> = (0..3).filter_map(|_| flow.add_to_calendar()).collect();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains("dates=20260212/20260212"));
    assert_eq!(flow.view(), View::Success(CalendarState::Added));
}

// Confetti keeps a constant particle count across many frames and resizes.
#[test]
fn confetti_field_is_fixed_size() {
    let cfg = CardConfig::default();
    let mut rng = StdRng::seed_from_u64(150);
    let mut field = ParticleField::spawn(&mut rng, PARTICLE_COUNT, 1280.0, 720.0, cfg.palette.len());
    let mut recycled = 0;
    for frame in 0..3_000 {
        if frame == 1_000 {
            field.resize(390.0, 844.0);
        }
        recycled += field.step(&mut rng);
        assert_eq!(field.len(), 150);
    }
    assert!(recycled > 0);
    for p in field.particles() {
        assert!(p.y <= field.height());
    }
}
