use fir_tree_wasm::config::{
    G_FACTOR, G_RATE, LINE_LENGTH, PERIOD, SPEED, SPIRALS, THETA_MAX, THETA_MIN,
};
use fir_tree_wasm::{adaptive_step, Controller, InputState, Key, Scene, SceneConfig, Spiral};

fn upper_bound(factor: f32) -> usize {
    let min_step = adaptive_step(THETA_MAX, LINE_LENGTH, G_RATE, factor);
    ((THETA_MAX - THETA_MIN) / min_step).ceil() as usize + 2
}

#[test]
fn every_default_spiral_produces_a_bounded_nonempty_set() {
    for spec in &SPIRALS {
        let mut spiral = Spiral::new(spec).unwrap();
        for dt in [0.0, 0.016, 0.1, 0.25] {
            spiral.recompute(dt);
            let n = spiral.lines().len();
            assert!(n > 0, "{} produced nothing", spec.name);
            assert!(n <= upper_bound(spiral.factor()), "{}: {n} segments", spec.name);
            assert!(spiral.segments().capacity() >= n);
        }
    }
}

#[test]
fn segment_count_is_recomputed_not_appended() {
    let mut spiral = Spiral::new(&SPIRALS[4]).unwrap();
    spiral.recompute(0.0);
    let first = spiral.lines().len();
    spiral.recompute(0.0);
    assert_eq!(spiral.lines().len(), first);
}

#[test]
fn phase_returns_after_one_period() {
    let mut spiral = Spiral::new(&SPIRALS[1]).unwrap();
    spiral.recompute(0.1);
    let before = spiral.phase_offset();
    let cycle = PERIOD / SPEED;
    for _ in 0..4 {
        spiral.recompute(cycle / 4.0);
        assert!((0.0..PERIOD).contains(&spiral.phase_offset()));
    }
    assert!(
        (spiral.phase_offset() - before).abs() < 1e-3,
        "before={before} after={}",
        spiral.phase_offset()
    );
}

#[test]
fn phase_lands_on_zero_at_exact_period() {
    let mut spiral = Spiral::new(&SPIRALS[0]).unwrap();
    spiral.recompute(PERIOD / SPEED);
    assert!(spiral.phase_offset() < 1e-3 || PERIOD - spiral.phase_offset() < 1e-3);
}

#[test]
fn dash_pattern_moves_with_phase() {
    let mut a = Spiral::new(&SPIRALS[5]).unwrap();
    let mut b = Spiral::new(&SPIRALS[5]).unwrap();
    a.recompute(0.0);
    b.recompute(0.05);
    assert_ne!(a.lines()[1].start, b.lines()[1].start);
}

#[test]
fn alpha_never_exceeds_one() {
    let mut spiral = Spiral::new(&SPIRALS[2]).unwrap();
    spiral.recompute(0.2);
    assert!(spiral.lines().iter().all(|l| l.alpha <= 1.0));
    assert!(spiral.factor() > 0.9 * G_FACTOR);
}

#[test]
fn eighteen_steps_right_is_a_full_ring() {
    let mut c = Controller::new(&SPIRALS).unwrap();
    let mut seen = Vec::new();
    for _ in 0..18 {
        c.select_next();
        seen.push((c.active_spiral(), c.active_channel()));
    }
    assert_eq!(c.active_spiral(), 0);
    assert_eq!(c.active_channel().index(), 0);
    seen.sort_by_key(|(s, ch)| s * 3 + ch.index());
    seen.dedup();
    assert_eq!(seen.len(), 18);
}

#[test]
fn color_values_wrap_at_byte_bounds() {
    let mut c = Controller::new(&SPIRALS).unwrap();
    // spiral 4 is pure red
    for _ in 0..12 {
        c.select_next();
    }
    assert_eq!(c.status().value, 255);
    c.increase();
    assert_eq!(c.status().value, 0);
    c.decrease();
    assert_eq!(c.status().value, 255);
}

#[test]
fn scene_frame_applies_input_then_draws() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    let mut input = InputState::new();
    input.key_down(Key::Right);
    input.key_down(Key::Down);
    scene.frame(1.0 / 60.0, 600.0, 800.0, &input);

    let status = scene.status();
    assert_eq!(status.spiral_name, "Spiral Left 3");
    assert_eq!(status.channel_label(), "Green Channel");
    assert_eq!(status.value, 255);

    assert_eq!(scene.camera().size(), (600.0, 800.0));
    let lines: Vec<_> = scene.draw_list().collect();
    assert_eq!(lines.len(), scene.segment_count());
    assert!(lines.iter().all(|l| l.start.is_finite() && l.end.is_finite()));
}
