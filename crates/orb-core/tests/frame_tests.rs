// Host-side tests for the per-frame update and draw sequence.

use glam::Vec2;
use orb_core::*;

fn app() -> OrbApp {
    OrbApp::new(
        Viewport::new(1000.0, 800.0, 1.0).unwrap(),
        OrbParams::default(),
        31,
    )
}

#[test]
fn frame_draws_layers_in_order() {
    let mut app = app();
    let mut painter = RecordingPainter::new();
    frame::step(&mut app, 1000.0, &mut painter);
    let cmds = painter.take();

    assert_eq!(
        cmds[0],
        DrawCommand::Clear {
            width: 1000.0,
            height: 800.0
        }
    );
    assert!(matches!(
        cmds[1],
        DrawCommand::FillRect {
            color: Color::Hex("#050508"),
            ..
        }
    ));
    match &cmds[2] {
        DrawCommand::FillVerticalGradient { origin, size, .. } => {
            assert_eq!(*origin, Vec2::new(0.0, 380.0));
            assert_eq!(*size, Vec2::new(1000.0, 100.0));
        }
        other => panic!("expected horizon band, got {:?}", other),
    }
    match &cmds[3] {
        DrawCommand::StrokeLine { from, to, .. } => {
            assert_eq!(from.y, 480.0);
            assert_eq!(to.y, 480.0);
        }
        other => panic!("expected horizon line, got {:?}", other),
    }
    assert_eq!(cmds[4], DrawCommand::SetBlur(Some(BLOB_BLUR_PX)));
    let blobs = app.scene.blobs.len();
    assert_eq!(cmds[5 + blobs], DrawCommand::SetBlur(None));

    // halo + one dot per particle after the blur section
    let tail = &cmds[6 + blobs..];
    assert_eq!(tail.len(), 1 + app.scene.particles.len());
    match &tail[0] {
        DrawCommand::FillRadialCircle {
            center,
            inner_radius,
            outer_radius,
            ..
        } => {
            assert_eq!(*center, app.orb.pos);
            let halo = 800.0 * 0.27 * app.orb.scale * 1.2;
            assert!((outer_radius - halo).abs() < 1e-3);
            assert!((inner_radius - halo * 0.7).abs() < 1e-3);
        }
        other => panic!("expected halo, got {:?}", other),
    }
}

#[test]
fn particles_near_pointer_glow_brighter() {
    let mut app = app();
    app.interaction.pointer = app.orb.pos;
    let mut painter = RecordingPainter::new();
    frame::step(&mut app, 0.0, &mut painter);

    let blobs = app.scene.blobs.len();
    assert_eq!(
        painter.radial_circles().count(),
        blobs + 1 + app.scene.particles.len()
    );
    let dots = &painter.commands[7 + blobs..];
    let rotation = 0.0;
    for (p, cmd) in app.scene.particles.iter().zip(dots) {
        let DrawCommand::FillRadialCircle { center, inner, .. } = cmd else {
            panic!("expected particle dot, got {:?}", cmd);
        };
        let a = p.angle + rotation;
        let dist = p.dist_factor * app.main_radius() * app.orb.scale;
        let expected = app.orb.pos + Vec2::new(a.cos(), a.sin()) * dist;
        assert!((*center - expected).length() < 1e-2);

        let infl = frame::cursor_influence(app.interaction.pointer, *center, app.min_side());
        let Color::Hsla { l, a: alpha, s, .. } = *inner else {
            panic!("expected hsla color");
        };
        assert!((l - (p.lightness + 25.0 * infl)).abs() < 1e-3);
        assert!((alpha - (p.alpha + 0.25 * infl)).abs() < 1e-5);
        assert_eq!(s, p.saturation);
        assert!(l >= p.lightness);
    }
}

#[test]
fn influence_is_monotonic_in_distance() {
    let p = Vec2::new(500.0, 400.0);
    let min_side = 800.0;
    let mut prev = frame::cursor_influence(p, p, min_side);
    assert_eq!(prev, 1.0);
    for i in 1..=300 {
        let d = i as f32;
        let v = frame::cursor_influence(p + Vec2::new(d, 0.0), p, min_side);
        assert!(v <= prev);
        assert!(v >= 0.0);
        prev = v;
    }
    assert_eq!(frame::cursor_influence(p + Vec2::new(200.0, 0.0), p, min_side), 0.0);
}

#[test]
fn rotation_advances_each_frame() {
    let mut app = app();
    let mut painter = RecordingPainter::new();
    let mut runner = Runner::new(ManualClock::with_step(16.0));
    let frames = runner.run_until(&mut app, &mut painter, |_, n| n == 10);
    assert_eq!(frames, 10);
    assert_eq!(runner.frames(), 10);
    assert!((app.rotation - 10.0 * ROTATION_SPEED).abs() < 1e-6);
    assert_eq!(runner.clock().now_ms(), 160.0);
}

#[test]
fn blobs_move_every_frame_and_stay_near_viewport() {
    let mut app = app();
    let before: Vec<Vec2> = app.scene.blobs.iter().map(|b| b.pos).collect();
    let mut painter = RecordingPainter::new();
    let mut runner = Runner::new(ManualClock::with_step(16.0));
    runner.tick(&mut app, &mut painter);
    for (b, p0) in app.scene.blobs.iter().zip(&before) {
        // a bounce flips the sign but never the speed
        assert!(((b.pos - *p0).length() - b.vel.length()).abs() < 1e-3);
    }
    runner.run_until(&mut app, &mut painter, |_, n| n >= 5000);
    for b in &app.scene.blobs {
        assert!(b.pos.x > -1.0 && b.pos.x < 1001.0);
        assert!(b.pos.y > -1.0 && b.pos.y < 801.0);
    }
}

#[test]
fn affordance_reflects_hover_and_drag() {
    let mut app = app();
    let mut painter = RecordingPainter::new();

    app.interaction.pointer = Vec2::new(0.0, 0.0);
    assert_eq!(frame::step(&mut app, 0.0, &mut painter), Affordance::None);

    app.interaction.pointer = app.orb.pos;
    assert_eq!(frame::step(&mut app, 0.0, &mut painter), Affordance::Pointer);

    app.handle(InputEvent::SetMode(Mode::Move));
    assert_eq!(frame::step(&mut app, 0.0, &mut painter), Affordance::CanGrab);

    let c = app.orb.pos;
    app.handle(InputEvent::PointerDown(c));
    app.handle(InputEvent::PointerMove(Vec2::new(5.0, 5.0)));
    assert_eq!(frame::step(&mut app, 0.0, &mut painter), Affordance::Grabbing);
}

#[test]
fn rotation_keeps_its_pace_in_long_sessions() {
    let mut app = app();
    let mut painter = RecordingPainter::new();
    for start in [1.0_f32, 8192.0, 16384.0, 1.0e7] {
        app.rotation = start;
        // the first frame folds the angle back into one turn
        frame::step(&mut app, 0.0, &mut painter);
        assert!((0.0..std::f32::consts::TAU).contains(&app.rotation));
        for _ in 0..3 {
            let before = app.rotation;
            frame::step(&mut app, 0.0, &mut painter);
            let advance = (app.rotation - before).rem_euclid(std::f32::consts::TAU);
            assert!((advance - ROTATION_SPEED).abs() < 1e-5, "advance {advance} from {start}");
        }
        painter.take();
    }
}
