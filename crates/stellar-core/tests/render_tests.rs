mod common;

use common::{Op, RecordingCanvas};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stellar_core::*;

fn state_for(kind: StellarKind, mass: f64, gravity: f64, hydrogen: f64) -> StarState {
    StarState {
        stellar_type: kind.def(),
        effective_mass: effective_mass(mass, gravity),
        hydrogen_level: hydrogen,
        gravity_influence: gravity,
        mass,
    }
}

fn renderer(seed: u64) -> ObjectRenderer<StdRng> {
    ObjectRenderer::new(StdRng::seed_from_u64(seed))
}

#[test]
fn every_kind_leaves_the_transform_stack_balanced() {
    let mut r = renderer(7);
    for kind in StellarKind::ALL {
        for &time in &[0.0, 16.7, 12_345.0] {
            let mut canvas = RecordingCanvas::new(800.0, 450.0);
            r.render_frame(&mut canvas, &state_for(kind, 10.0, 1.3, 50.0), 1.7, time);
            assert_eq!(canvas.depth, 0, "{kind:?} at t={time}");
            assert!(canvas.max_depth >= 1, "{kind:?} applies the zoom transform");
            assert!(!canvas.ops.is_empty());
        }
    }
}

#[test]
fn zoom_is_applied_about_the_centre() {
    let mut canvas = RecordingCanvas::new(800.0, 400.0);
    renderer(1).render_frame(
        &mut canvas,
        &state_for(StellarKind::YellowDwarf, 1.0, 1.0, 73.0),
        2.0,
        0.0,
    );
    assert_eq!(
        &canvas.ops[..4],
        &[
            Op::Save,
            Op::Translate(400.0, 200.0),
            Op::Scale(2.0, 2.0),
            Op::Translate(-400.0, -200.0),
        ]
    );
    assert_eq!(canvas.ops.last(), Some(&Op::Restore));
}

#[test]
fn invalid_zoom_falls_back_to_unit_scale() {
    for zoom in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        renderer(1).render_frame(
            &mut canvas,
            &state_for(StellarKind::RedDwarf, 0.3, 1.0, 60.0),
            zoom,
            0.0,
        );
        assert_eq!(canvas.ops[2], Op::Scale(1.0, 1.0));
    }
}

#[test]
fn zero_area_surface_draws_nothing() {
    for (w, h) in [(0.0, 0.0), (640.0, 0.0), (0.0, 480.0)] {
        let mut canvas = RecordingCanvas::new(w, h);
        renderer(3).render_frame(
            &mut canvas,
            &state_for(StellarKind::BlackHole, 30.0, 1.0, 1.0),
            1.0,
            100.0,
        );
        assert!(canvas.ops.is_empty());
    }
}

#[test]
fn nebula_modes_fill_a_radial_gradient() {
    for kind in [StellarKind::PlanetaryNebula, StellarKind::SupernovaRemnant] {
        let mut canvas = RecordingCanvas::new(600.0, 600.0);
        renderer(2).render_frame(&mut canvas, &state_for(kind, 5.0, 1.0, 2.0), 1.0, 500.0);
        assert!(canvas.has_radial_fill(), "{kind:?}");
        assert_eq!(canvas.strokes(), 0);
        assert_eq!(canvas.fills(), 1);
    }
}

#[test]
fn black_hole_draws_disk_horizon_and_ring() {
    let mut canvas = RecordingCanvas::new(900.0, 500.0);
    renderer(4).render_frame(
        &mut canvas,
        &state_for(StellarKind::BlackHole, 30.0, 1.0, 1.0),
        1.0,
        2_000.0,
    );
    assert_eq!(canvas.strokes(), ACCRETION_SEGMENTS + 1);
    assert_eq!(canvas.fills(), 1);
    assert!(canvas
        .ops
        .iter()
        .any(|op| *op == Op::SetFill(Paint::Solid(Rgba::BLACK))));
    assert!(canvas.arcs().iter().all(|&(_, _, r)| r >= 0.0));
}

#[test]
fn neutron_star_sweeps_two_gradient_beams() {
    let mut canvas = RecordingCanvas::new(800.0, 450.0);
    let mut r = renderer(5);
    r.render_frame(
        &mut canvas,
        &state_for(StellarKind::NeutronStar, 12.0, 1.0, 1.0),
        1.0,
        1_000.0,
    );
    assert!(canvas.has_linear_stroke());
    assert_eq!(canvas.count(|op| matches!(op, Op::Rotate(_))), 1);
    assert_eq!(canvas.strokes(), 2);
    assert_eq!(canvas.max_depth, 2);
    assert!(r.pulse().t() > 0.0, "oscillator advanced");
}

#[test]
fn pulse_factor_stays_in_range() {
    let mut r = renderer(6);
    let state = state_for(StellarKind::NeutronStar, 60.0, 2.0, 0.0);
    for frame in 0..500 {
        let mut canvas = RecordingCanvas::new(320.0, 240.0);
        r.render_frame(&mut canvas, &state, 1.0, frame as f64 * 16.0);
        let f = r.pulse().factor();
        assert!((0.7..=1.3).contains(&f), "frame {frame}: {f}");
    }
}

#[test]
fn oscillator_reflects_at_bounds() {
    let mut osc = PulseOscillator::default();
    osc.advance(0.8);
    osc.advance(0.8);
    assert_eq!(osc.t(), 1.0);
    osc.advance(0.3);
    assert!((osc.t() - 0.7).abs() < 1e-12);
    for _ in 0..10 {
        osc.advance(0.3);
    }
    assert!((0.0..=1.0).contains(&osc.t()));
}

#[test]
fn quiet_star_has_no_flares() {
    let mut canvas = RecordingCanvas::new(500.0, 500.0);
    renderer(8).render_frame(
        &mut canvas,
        &state_for(StellarKind::YellowDwarf, 1.0, 1.0, 73.0),
        1.0,
        0.0,
    );
    assert!(canvas.has_radial_fill());
    assert_eq!(canvas.strokes(), 0);
    assert_eq!(canvas.fills(), 2);
}

#[test]
fn active_star_flares_within_bounds() {
    let state = state_for(StellarKind::BlueGiant, 10.0, 1.0, 50.0);
    let am = activity_modifier(&state);
    let expected = flare_count(StellarKind::BlueGiant.def().activity, am);
    assert!(expected >= 2 && expected <= 10);

    let mut r = renderer(9);
    for frame in 0..20 {
        let mut canvas = RecordingCanvas::new(500.0, 500.0);
        r.render_frame(&mut canvas, &state, 1.0, frame as f64 * 16.0);
        assert_eq!(canvas.strokes(), expected);
    }
}

#[test]
fn flare_count_matches_activity_formula() {
    assert_eq!(flare_count(1.0, 1.0), 5);
    assert_eq!(flare_count(1.5, 2.0), 15);
    assert_eq!(flare_count(0.9, 0.5), 2);
    assert_eq!(flare_count(f64::NAN, 1.0), 0);
    assert_eq!(flare_count(-1.0, 1.0), 0);
}

#[test]
fn activity_modifier_is_clamped() {
    let calm = state_for(StellarKind::RedDwarf, 0.1, 0.1, 0.0);
    assert_eq!(activity_modifier(&calm), ACTIVITY_MODIFIER_MIN);
    let wild = state_for(StellarKind::BlueGiant, 100.0, 2.0, 100.0);
    assert_eq!(activity_modifier(&wild), ACTIVITY_MODIFIER_MAX);
    let nan = state_for(StellarKind::BlueGiant, f64::NAN, 1.0, 50.0);
    assert_eq!(activity_modifier(&nan), ACTIVITY_MODIFIER_MIN);
}

#[test]
fn seeded_renderers_are_reproducible() {
    let state = state_for(StellarKind::OTypeSupergiant, 25.0, 1.4, 80.0);
    let mut a = RecordingCanvas::new(700.0, 394.0);
    let mut b = RecordingCanvas::new(700.0, 394.0);
    renderer(11).render_frame(&mut a, &state, 1.2, 3_000.0);
    renderer(11).render_frame(&mut b, &state, 1.2, 3_000.0);
    assert_eq!(a.ops, b.ops);
}
