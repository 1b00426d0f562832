use approx::assert_abs_diff_eq;

use dropcars_core::consts::{MAX_SCALE, MIN_SCALE};
use dropcars_core::transform::{
    ContentSize, DisplayRect, GestureEvent, GesturePhase, PanBounds, Translation,
    ViewportTransform,
};

fn viewer() -> ViewportTransform {
    ViewportTransform::new(ContentSize::new(300.0, 400.0))
}

/// Run a complete pinch gesture ending at `multiplier`.
fn pinch(t: &mut ViewportTransform, multiplier: f32) {
    t.pinch_begin();
    t.pinch_update(multiplier);
    t.pinch_end();
}

/// Run a complete pan gesture ending at `(dx, dy)`.
fn pan(t: &mut ViewportTransform, dx: f32, dy: f32) {
    t.pan_begin();
    t.pan_update(dx, dy);
    t.pan_end();
}

fn assert_within_bounds(t: &ViewportTransform) {
    let b = t.bounds();
    let tr = t.translation();
    assert!(
        tr.x.abs() <= b.max_x + 1e-4 && tr.y.abs() <= b.max_y + 1e-4,
        "translation {tr:?} escapes bounds {b:?} at scale {}",
        t.scale()
    );
}

// ---------------------------------------------------------------------------
// Initial state
// ---------------------------------------------------------------------------

#[test]
fn test_new_transform_is_identity() {
    let t = viewer();
    assert_eq!(t.scale(), MIN_SCALE);
    assert_eq!(t.translation(), Translation::ZERO);
    assert_eq!(t.saved_scale(), MIN_SCALE);
    assert_eq!(t.saved_translation(), Translation::ZERO);
    assert!(t.is_idle());
}

// ---------------------------------------------------------------------------
// Pinch
// ---------------------------------------------------------------------------

#[test]
fn test_pinch_scales_from_saved_scale() {
    let mut t = viewer();
    t.pinch_begin();
    t.pinch_update(2.5);
    assert_abs_diff_eq!(t.scale(), 2.5);
    // Not committed until the pinch ends.
    assert_abs_diff_eq!(t.saved_scale(), 1.0);
    t.pinch_end();
    assert_abs_diff_eq!(t.saved_scale(), 2.5);
}

#[test]
fn test_pinch_clamps_to_max_scale() {
    let mut t = viewer();
    pinch(&mut t, 10.0);
    assert_eq!(t.scale(), MAX_SCALE);
}

#[test]
fn test_pinch_clamps_to_min_scale() {
    let mut t = viewer();
    pinch(&mut t, 2.0);
    pinch(&mut t, 0.1);
    assert_eq!(t.scale(), MIN_SCALE);
}

#[test]
fn test_rapid_pinches_compose_multiplicatively() {
    let mut t = viewer();
    pinch(&mut t, 2.0);
    pinch(&mut t, 1.5);
    assert_abs_diff_eq!(t.scale(), 3.0);
    pinch(&mut t, 2.0);
    assert_eq!(t.scale(), MAX_SCALE);
}

#[test]
fn test_pinch_updates_do_not_accumulate_within_gesture() {
    // Each update is relative to the gesture start, not the previous update.
    let mut t = viewer();
    t.pinch_begin();
    t.pinch_update(1.5);
    t.pinch_update(1.8);
    t.pinch_update(2.0);
    assert_abs_diff_eq!(t.scale(), 2.0);
}

#[test]
fn test_scale_always_in_range_for_any_multiplier() {
    let multipliers = [0.0, 0.01, 0.25, 0.5, 0.99, 1.0, 1.01, 2.0, 3.99, 4.0, 7.5, 1e6];
    for start in [1.0_f32, 1.7, 2.0, 3.3, 4.0] {
        for &m in &multipliers {
            let mut t = viewer();
            pinch(&mut t, start);
            t.pinch_begin();
            t.pinch_update(m);
            let expected = (start * m).clamp(MIN_SCALE, MAX_SCALE);
            assert_abs_diff_eq!(t.scale(), expected, epsilon = 1e-5);
            assert!((MIN_SCALE..=MAX_SCALE).contains(&t.scale()));
        }
    }
}

// ---------------------------------------------------------------------------
// Pan
// ---------------------------------------------------------------------------

#[test]
fn test_pan_at_unit_scale_is_locked() {
    let mut t = viewer();
    for (dx, dy) in [(10.0, 0.0), (-500.0, 300.0), (0.0, -1.0), (1e5, 1e5)] {
        t.pan_begin();
        t.pan_update(dx, dy);
        assert_eq!(t.translation(), Translation::ZERO);
        t.pan_end();
    }
    assert_eq!(t.saved_translation(), Translation::ZERO);
}

#[test]
fn test_pan_is_relative_to_saved_translation() {
    let mut t = viewer();
    pinch(&mut t, 3.0);
    pan(&mut t, 50.0, 0.0);
    pan(&mut t, 30.0, 10.0);
    assert_abs_diff_eq!(t.translation().x, 80.0);
    assert_abs_diff_eq!(t.translation().y, 10.0);
}

#[test]
fn test_pan_clamps_symmetrically() {
    let mut t = viewer();
    pinch(&mut t, 2.0);
    pan(&mut t, -1000.0, -1000.0);
    assert_abs_diff_eq!(t.translation().x, -150.0);
    assert_abs_diff_eq!(t.translation().y, -200.0);
    pan(&mut t, 5000.0, 5000.0);
    assert_abs_diff_eq!(t.translation().x, 150.0);
    assert_abs_diff_eq!(t.translation().y, 200.0);
}

#[test]
fn test_pan_uses_live_scale_during_pinch() {
    let mut t = viewer();
    t.pinch_begin();
    t.pinch_update(2.0);
    // saved_scale is still 1, but bounds follow the live scale of 2.
    t.pan_begin();
    t.pan_update(100.0, 0.0);
    assert_abs_diff_eq!(t.translation().x, 100.0);
}

#[test]
fn test_pan_end_freezes_position() {
    let mut t = viewer();
    pinch(&mut t, 2.0);
    t.pan_begin();
    t.pan_update(40.0, -20.0);
    t.pan_end();
    assert_eq!(t.translation(), Translation::new(40.0, -20.0));
    assert_eq!(t.saved_translation(), Translation::new(40.0, -20.0));
}

#[test]
fn test_translation_within_bounds_for_any_input() {
    let deltas = [-1e4, -300.0, -150.0, -1.0, 0.0, 0.5, 149.0, 151.0, 800.0, 1e4];
    for m in [1.0_f32, 1.2, 2.0, 3.5, 4.0, 9.0] {
        for &dx in &deltas {
            for &dy in &deltas {
                let mut t = viewer();
                t.pinch_begin();
                t.pinch_update(m);
                t.pan_begin();
                t.pan_update(dx, dy);
                assert_within_bounds(&t);
                t.pinch_end();
                t.pan_end();
                assert_within_bounds(&t);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Zoom-out re-clamping
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_out_reclamps_translation_in_same_update() {
    let mut t = viewer();
    pinch(&mut t, 3.0);
    pan(&mut t, 1000.0, 0.0);
    assert_abs_diff_eq!(t.translation().x, 300.0);

    t.pinch_begin();
    t.pinch_update(0.5); // 3.0 * 0.5 = 1.5 -> max_x = 300 * 0.5 / 2 = 75
    assert_abs_diff_eq!(t.scale(), 1.5);
    assert_abs_diff_eq!(t.translation().x, 75.0);
}

#[test]
fn test_pinch_end_commits_reclamped_translation() {
    let mut t = viewer();
    pinch(&mut t, 4.0);
    pan(&mut t, 0.0, 600.0);
    pinch(&mut t, 0.5);
    assert_abs_diff_eq!(t.saved_scale(), 2.0);
    assert_abs_diff_eq!(t.saved_translation().y, 200.0);
}

#[test]
fn test_documented_scenario() {
    let mut t = viewer();

    t.pinch_begin();
    t.pinch_update(2.0);
    assert_abs_diff_eq!(t.scale(), 2.0);
    assert_eq!(
        t.bounds(),
        PanBounds {
            max_x: 150.0,
            max_y: 200.0
        }
    );

    t.pan_begin();
    t.pan_update(300.0, 0.0);
    assert_abs_diff_eq!(t.translation().x, 150.0);

    t.pinch_end();
    t.pan_end();
    assert_abs_diff_eq!(t.saved_scale(), 2.0);
    assert_eq!(t.saved_translation(), Translation::new(150.0, 0.0));

    t.pinch_begin();
    t.pinch_update(0.5);
    assert_abs_diff_eq!(t.scale(), 1.0);
    assert_eq!(t.translation(), Translation::ZERO);
}

// ---------------------------------------------------------------------------
// Idempotence and robustness
// ---------------------------------------------------------------------------

#[test]
fn test_committed_state_is_stable_without_input() {
    let mut t = viewer();
    pinch(&mut t, 2.2);
    pan(&mut t, -60.0, 35.0);
    let first = t.snapshot();
    for _ in 0..10 {
        assert_eq!(t.snapshot(), first);
    }
    assert_eq!(t.saved_scale(), t.scale());
    assert_eq!(t.saved_translation(), t.translation());
}

#[test]
fn test_non_finite_input_is_ignored() {
    let mut t = viewer();
    pinch(&mut t, 2.0);
    pan(&mut t, 20.0, 20.0);
    let before = t.snapshot();

    t.pinch_begin();
    t.pinch_update(f32::NAN);
    t.pinch_update(f32::INFINITY);
    t.pan_begin();
    t.pan_update(f32::NAN, 1.0);
    t.pan_update(1.0, f32::NEG_INFINITY);

    assert_eq!(t.snapshot(), before);
}

#[test]
fn test_gesture_latches_are_independent() {
    let mut t = viewer();
    t.pinch_begin();
    assert_eq!(t.pinch_phase(), GesturePhase::Active);
    assert_eq!(t.pan_phase(), GesturePhase::Idle);
    t.pan_begin();
    assert_eq!(t.pan_phase(), GesturePhase::Active);
    t.pinch_end();
    assert_eq!(t.pinch_phase(), GesturePhase::Idle);
    assert_eq!(t.pan_phase(), GesturePhase::Active);
    assert!(!t.is_idle());
    t.pan_end();
    assert!(t.is_idle());
}

#[test]
fn test_apply_dispatches_events() {
    let mut t = viewer();
    for event in [
        GestureEvent::PinchBegin,
        GestureEvent::PinchUpdate { multiplier: 2.0 },
        GestureEvent::PanBegin,
        GestureEvent::PanUpdate { dx: 10.0, dy: -5.0 },
        GestureEvent::PanEnd,
        GestureEvent::PinchEnd,
    ] {
        t.apply(event);
    }
    assert_abs_diff_eq!(t.saved_scale(), 2.0);
    assert_eq!(t.saved_translation(), Translation::new(10.0, -5.0));
}

#[test]
fn test_degenerate_content_size_never_pans() {
    let mut t = ViewportTransform::new(ContentSize::new(-10.0, f32::NAN));
    assert_eq!(t.content(), ContentSize::new(0.0, 0.0));
    pinch(&mut t, 3.0);
    pan(&mut t, 50.0, 50.0);
    assert_eq!(t.translation(), Translation::ZERO);
}

#[test]
fn test_one_bad_dimension_keeps_other_axis_pannable() {
    let content = ContentSize::new(-10.0, 400.0);
    assert_eq!((content.width(), content.height()), (0.0, 400.0));

    let bounds = PanBounds::for_scale(content, 2.0);
    assert_eq!(bounds.max_x, 0.0);
    assert_eq!(
        bounds.clamp(Translation::new(30.0, 500.0)),
        Translation::new(0.0, 200.0)
    );

    let mut t = ViewportTransform::new(content);
    t.pinch_update(2.0);
    t.pinch_end();
    pan(&mut t, 30.0, -500.0);
    assert_eq!(t.translation(), Translation::new(0.0, -200.0));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_snapshot_maps_translate_then_scale_about_center() {
    let mut t = viewer();
    pinch(&mut t, 2.0);
    pan(&mut t, 150.0, 0.0);
    let snap = t.snapshot();
    let content = t.content();

    let (x, y) = snap.map_point(content, 0.0, 0.0);
    assert_abs_diff_eq!(x, 0.0);
    assert_abs_diff_eq!(y, -200.0);

    let (cx, cy) = snap.map_point(content, 150.0, 200.0);
    assert_abs_diff_eq!(cx, 300.0);
    assert_abs_diff_eq!(cy, 200.0);
}

#[test]
fn test_image_rect_always_covers_box() {
    let content = ContentSize::new(300.0, 400.0);
    let frame = DisplayRect {
        x: 10.0,
        y: 20.0,
        width: 300.0,
        height: 400.0,
    };
    for m in [1.0_f32, 1.5, 2.0, 4.0] {
        for (dx, dy) in [(0.0, 0.0), (1e4, 1e4), (-1e4, 30.0), (75.0, -1e4)] {
            let mut t = ViewportTransform::new(content);
            pinch(&mut t, m);
            pan(&mut t, dx, dy);
            let rect = t.snapshot().image_rect(content, frame.x, frame.y);
            let covers = rect.x <= frame.x
                && rect.y <= frame.y
                && rect.right() >= frame.right()
                && rect.bottom() >= frame.bottom();
            assert!(
                covers,
                "image {rect:?} leaves blank area in {frame:?}"
            );
        }
    }
}
