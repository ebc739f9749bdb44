use approx::assert_relative_eq;

use radview_core::consts::{MAX_ZOOM, MIN_ZOOM};
use radview_core::viewport::{Size, Vec2, ViewportState};

fn make_viewport(container: (f32, f32), natural: (f32, f32)) -> ViewportState {
    let mut vp = ViewportState::new(0);
    vp.set_container_size(Size::new(container.0, container.1));
    vp.set_natural_size(Size::new(natural.0, natural.1));
    vp
}

// ---------------------------------------------------------------------------
// Zoom clamping
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_stays_within_bounds() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    for factor in [10.0, 0.001, 5000.0, 0.0001, 3.0, 0.5] {
        vp.zoom_by(factor);
        assert!(
            (MIN_ZOOM..=MAX_ZOOM).contains(&vp.zoom()),
            "zoom {} escaped bounds after factor {factor}",
            vp.zoom()
        );
    }
}

#[test]
fn test_double_zoom_by_ten_clamps_to_max() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.zoom_by(10.0);
    vp.zoom_by(10.0);
    assert_relative_eq!(vp.zoom(), MAX_ZOOM);
}

#[test]
fn test_zoom_out_clamps_to_min() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.zoom_by(1e-6);
    assert_relative_eq!(vp.zoom(), MIN_ZOOM);
}

// ---------------------------------------------------------------------------
// Fit / one-to-one
// ---------------------------------------------------------------------------

#[test]
fn test_fit_one_to_one_fit_round_trip() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.pan_by(30.0, -15.0);

    vp.fit();
    vp.one_to_one();
    // Container is 2x the natural size, so 1:1 means zoom 0.5.
    assert_relative_eq!(vp.zoom(), 0.5);
    vp.fit();

    assert_eq!(vp.pan(), Vec2::ZERO);
    assert_relative_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_one_to_one_renders_native_size() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.one_to_one();
    let displayed = vp.displayed_size();
    assert_relative_eq!(displayed.w, 100.0);
    assert_relative_eq!(displayed.h, 100.0);
}

#[test]
fn test_one_to_one_is_a_noop_before_sizes_known() {
    let mut vp = ViewportState::new(0);
    vp.one_to_one();
    assert_relative_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_fit_scale_accounts_for_quarter_turn() {
    let mut vp = make_viewport((200.0, 100.0), (100.0, 200.0));
    assert_relative_eq!(vp.fit_scale(), 0.5);
    vp.rotate_cw();
    // Effective extents swap: the portrait raster now fits the landscape
    // container exactly.
    assert_relative_eq!(vp.fit_scale(), 1.0);
}

// ---------------------------------------------------------------------------
// Pan clamping
// ---------------------------------------------------------------------------

#[test]
fn test_pan_clamped_to_keep_overlap() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.zoom_by(4.0);
    // Displayed 400x400 in a 100x100 container: max pan is 150 per axis.
    vp.pan_by(10_000.0, -10_000.0);
    assert_relative_eq!(vp.pan().x, 150.0);
    assert_relative_eq!(vp.pan().y, -150.0);
}

#[test]
fn test_pan_is_pinned_when_raster_fits() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    // At fit scale the raster fills the container; no pan slack exists.
    vp.pan_by(50.0, 50.0);
    assert_eq!(vp.pan(), Vec2::ZERO);
}

#[test]
fn test_zoom_out_re_clamps_pan() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.zoom_by(4.0);
    vp.pan_by(150.0, 150.0);
    vp.zoom_by(0.25);
    assert_eq!(vp.pan(), Vec2::ZERO);
}

#[test]
fn test_container_resize_re_clamps_pan() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.zoom_by(4.0);
    vp.pan_by(150.0, 0.0);
    // Shrinking the container halves the fit scale; the displayed raster is
    // now 200 against a 50 container, leaving 75 of pan slack.
    vp.set_container_size(Size::new(50.0, 50.0));
    assert_relative_eq!(vp.pan().x, 75.0);
    assert_relative_eq!(vp.pan().y, 0.0);
}

// ---------------------------------------------------------------------------
// Anchor-preserving zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_at_adjusts_pan_toward_cursor() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.zoom_at(2.0, Vec2::new(50.0, 0.0));
    assert_relative_eq!(vp.zoom(), 2.0);
    // pan += (1 - 2) * (50 - 0) on x.
    assert_relative_eq!(vp.pan().x, -50.0);
    assert_relative_eq!(vp.pan().y, 0.0);
}

#[test]
fn test_zoom_at_center_leaves_pan_unchanged() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.zoom_at(2.0, Vec2::ZERO);
    assert_eq!(vp.pan(), Vec2::ZERO);
}

// ---------------------------------------------------------------------------
// Rotation / flips / reset
// ---------------------------------------------------------------------------

#[test]
fn test_four_quarter_turns_normalize_to_zero() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    for _ in 0..4 {
        vp.rotate_cw();
    }
    assert_eq!(vp.normalized_rotation(), 0);
    assert_eq!(vp.rotation_degrees(), 360);
}

#[test]
fn test_counter_rotation_normalizes_positive() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.rotate_ccw();
    assert_eq!(vp.rotation_degrees(), -90);
    assert_eq!(vp.normalized_rotation(), 270);
    assert!(vp.is_quarter_turned());
}

#[test]
fn test_rotate_resets_pan() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.zoom_by(4.0);
    vp.pan_by(100.0, 100.0);
    vp.rotate_cw();
    assert_eq!(vp.pan(), Vec2::ZERO);
}

#[test]
fn test_flips_change_transform_scale_signs() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.toggle_flip_horizontal();
    let t = vp.transform();
    assert!(t.scale_x < 0.0);
    assert!(t.scale_y > 0.0);

    vp.toggle_flip_vertical();
    let t = vp.transform();
    assert!(t.scale_x < 0.0);
    assert!(t.scale_y < 0.0);

    // Toggling twice restores the original orientation.
    vp.toggle_flip_horizontal();
    vp.toggle_flip_vertical();
    let t = vp.transform();
    assert!(t.scale_x > 0.0 && t.scale_y > 0.0);
}

#[test]
fn test_reset_restores_default_rotation() {
    let mut vp = ViewportState::new(-90);
    vp.set_container_size(Size::new(200.0, 200.0));
    vp.set_natural_size(Size::new(100.0, 100.0));
    vp.rotate_cw();
    vp.rotate_cw();
    vp.zoom_by(3.0);
    vp.toggle_flip_horizontal();
    vp.toggle_invert();

    vp.reset();
    assert_eq!(vp.rotation_degrees(), -90);
    assert_relative_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Vec2::ZERO);
    assert!(!vp.flip_horizontal());
    assert!(!vp.invert_colors());
}

#[test]
fn test_replacing_raster_restores_defaults() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    vp.zoom_by(3.0);
    vp.rotate_cw();
    vp.set_natural_size(Size::new(64.0, 64.0));
    assert_relative_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.rotation_degrees(), 0);
}

// ---------------------------------------------------------------------------
// Overlay projection
// ---------------------------------------------------------------------------

#[test]
fn test_project_identity_at_unit_scale() {
    let vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    let p = vp.project(Vec2::new(25.0, 75.0));
    assert_relative_eq!(p.x, 25.0, epsilon = 1e-4);
    assert_relative_eq!(p.y, 75.0, epsilon = 1e-4);
}

#[test]
fn test_project_scales_about_center() {
    let mut vp = make_viewport((200.0, 200.0), (100.0, 100.0));
    // fit scale 2: source (0,0) lands at the container's top-left corner.
    let p = vp.project(Vec2::ZERO);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-4);

    vp.pan_by(0.0, 0.0);
    let center = vp.project(Vec2::new(50.0, 50.0));
    assert_relative_eq!(center.x, 100.0, epsilon = 1e-4);
    assert_relative_eq!(center.y, 100.0, epsilon = 1e-4);
}

#[test]
fn test_project_quarter_turn_clockwise() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.rotate_cw();
    // Source top-left corner moves to the container's top-right corner.
    let p = vp.project(Vec2::ZERO);
    assert_relative_eq!(p.x, 100.0, epsilon = 1e-3);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_project_horizontal_flip() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.toggle_flip_horizontal();
    let p = vp.project(Vec2::new(0.0, 50.0));
    assert_relative_eq!(p.x, 100.0, epsilon = 1e-4);
    assert_relative_eq!(p.y, 50.0, epsilon = 1e-4);
}

#[test]
fn test_project_tracks_pan() {
    let mut vp = make_viewport((100.0, 100.0), (100.0, 100.0));
    vp.zoom_by(4.0);
    vp.pan_by(20.0, -10.0);
    let before = vp.project(Vec2::new(50.0, 50.0));
    assert_relative_eq!(before.x, 70.0, epsilon = 1e-3);
    assert_relative_eq!(before.y, 40.0, epsilon = 1e-3);
}
