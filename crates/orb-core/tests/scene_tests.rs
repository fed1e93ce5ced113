// Host-side tests for form generation.

use orb_core::*;

fn app_with(width: f32, height: f32, seed: u64) -> OrbApp {
    OrbApp::new(
        Viewport::new(width, height, 1.0).unwrap(),
        OrbParams::default(),
        seed,
    )
}

#[test]
fn full_form_at_reference_size() {
    let app = app_with(1000.0, 800.0, 42);
    assert_eq!(app.min_side(), 800.0);
    assert_eq!(app.scene.particles.len(), 100 + 140 + 180 + 220 + 260 + 300);
    assert_eq!(app.scene.particles.len(), 1200);
    assert_eq!(app.scene.blobs.len(), 20);
}

#[test]
fn particle_count_scales_with_min_side() {
    let small = app_with(400.0, 1000.0, 1);
    let expected: usize = (0..LAYER_COUNT)
        .map(|l| layer_particle_count(l, 400.0))
        .sum();
    assert_eq!(small.scene.particles.len(), expected);
    assert_eq!(expected, 50 + 70 + 90 + 110 + 130 + 150);
}

#[test]
fn colors_only_keeps_particles_and_blobs() {
    let mut app = app_with(1000.0, 800.0, 9);
    let particles = app.scene.particles.clone();
    let blobs = app.scene.blobs.clone();
    let hue = app.scene.hue_base;

    app.generate_form(true);

    assert_ne!(app.scene.hue_base, hue);
    assert_eq!(app.scene.particles, particles);
    assert_eq!(app.scene.blobs, blobs);
}

#[test]
fn full_regeneration_rebuilds_everything() {
    let mut app = app_with(1000.0, 800.0, 9);
    let blobs = app.scene.blobs.clone();
    app.generate_form(false);
    assert_eq!(app.scene.particles.len(), 1200);
    assert_eq!(app.scene.blobs.len(), 20);
    assert_ne!(app.scene.blobs, blobs);
}

#[test]
fn generated_values_fall_in_their_ranges() {
    let app = app_with(1000.0, 800.0, 1234);
    assert!((0.0..360.0).contains(&app.scene.hue_base));
    for p in &app.scene.particles {
        assert!((0.0..=std::f32::consts::TAU).contains(&p.angle));
        assert!((0.0..=1.0).contains(&p.dist_factor));
        assert!(p.size_factor > 0.0 && p.size_factor < 0.06);
        assert!((30.0..=70.0).contains(&p.lightness));
        assert!((0.03..=0.08).contains(&p.alpha));
        assert!((-30.0..=30.0).contains(&p.hue_offset));
        assert!((50.0..=80.0).contains(&p.saturation));
    }
    let vp = app.viewport;
    for b in &app.scene.blobs {
        assert!(vp.contains(b.pos));
        assert!(b.vel.x.abs() <= BLOB_SPEED_MAX && b.vel.y.abs() <= BLOB_SPEED_MAX);
        assert!((BLOB_SIZE_MIN..=BLOB_SIZE_MAX).contains(&b.size));
    }
}

#[test]
fn outer_layers_have_larger_particles() {
    let app = app_with(1000.0, 800.0, 5);
    let first_layer = &app.scene.particles[..100];
    let last_layer = &app.scene.particles[1200 - 300..];
    let max_inner = first_layer
        .iter()
        .map(|p| p.size_factor)
        .fold(0.0_f32, f32::max);
    // layer 0 is scaled by 1/6, so its sizes stay below 0.01
    assert!(max_inner < 0.01 + 1e-6);
    let mean_outer: f32 =
        last_layer.iter().map(|p| p.size_factor).sum::<f32>() / last_layer.len() as f32;
    assert!(mean_outer > max_inner);
}

#[test]
fn same_seed_same_form() {
    let a = app_with(1000.0, 800.0, 77);
    let b = app_with(1000.0, 800.0, 77);
    assert_eq!(a.scene.hue_base, b.scene.hue_base);
    assert_eq!(a.scene.particles, b.scene.particles);
}
