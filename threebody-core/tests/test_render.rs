//! Tests for world-to-screen mapping and circle style selection

use glam::Vec2;
use threebody_core::render::{draw, render_frame, CircleStyle, Viewport, BACKGROUND};
use threebody_core::tests::test_helpers::{state_at_rest, DrawCall, RecordingSurface};

fn center() -> Vec2 {
    Vec2::new(640.0, 360.0)
}

#[test]
fn test_viewport_identity_at_unit_scale() {
    let viewport = Viewport::new(center(), 1.0);
    assert_eq!(viewport.to_screen(Vec2::new(100.0, 50.0)), Vec2::new(100.0, 50.0));
    assert_eq!(viewport.radius(20.0), 20.0);
}

#[test]
fn test_viewport_scales_about_center() {
    let viewport = Viewport::new(center(), 0.5);
    assert_eq!(viewport.to_screen(Vec2::new(1040.0, 360.0)), Vec2::new(840.0, 360.0));
    assert_eq!(viewport.to_screen(center()), center());
    assert_eq!(viewport.radius(20.0), 10.0);
    // Floored so zoomed-out stars stay visible
    assert_eq!(viewport.radius(4.0), 3.0);
}

#[test]
fn test_style_by_count() {
    assert_eq!(CircleStyle::for_count(1), CircleStyle::Smooth);
    assert_eq!(CircleStyle::for_count(100), CircleStyle::Smooth);
    assert_eq!(CircleStyle::for_count(101), CircleStyle::Plain);
}

#[test]
fn test_small_count_draws_outlines() {
    let state = state_at_rest(
        &[
            (1000.0, Vec2::new(100.0, 100.0)),
            (1000.0, Vec2::new(200.0, 100.0)),
            (1000.0, Vec2::new(300.0, 100.0)),
        ],
        900.0,
        50.0,
    );
    let mut surface = RecordingSurface::default();
    draw(&state, &mut surface, &Viewport::new(center(), 1.0));

    assert_eq!(surface.outlines().len(), 3);
    assert_eq!(surface.filled().len(), 3);
    // Outline comes before the fill of the same star
    assert!(matches!(surface.calls[0], DrawCall::Outline { .. }));
    assert!(matches!(surface.calls[1], DrawCall::Filled { .. }));
}

#[test]
fn test_large_count_draws_plain_circles() {
    let bodies: Vec<(f32, Vec2)> = (0..101)
        .map(|i| (1000.0, Vec2::new(10.0 * i as f32, 100.0)))
        .collect();
    let state = state_at_rest(&bodies, 900.0, 50.0);
    let mut surface = RecordingSurface::default();
    draw(&state, &mut surface, &Viewport::new(center(), 1.0));

    assert!(surface.outlines().is_empty());
    assert_eq!(surface.filled().len(), 101);
}

#[test]
fn test_small_circles_skip_outline() {
    let state = state_at_rest(&[(100.0, Vec2::new(10.0, 10.0))], 900.0, 50.0);
    let mut surface = RecordingSurface::default();
    draw(&state, &mut surface, &Viewport::new(center(), 1.0));

    assert!(surface.outlines().is_empty());
    assert_eq!(
        surface.calls,
        vec![DrawCall::Filled {
            center: Vec2::new(10.0, 10.0),
            radius: 3.0,
            color: state.colors[0],
        }]
    );
}

#[test]
fn test_render_frame_clears_first_and_draws_heaviest_first() {
    let state = state_at_rest(
        &[(500.0, Vec2::new(100.0, 100.0)), (2000.0, Vec2::new(600.0, 300.0))],
        900.0,
        50.0,
    );
    let mut surface = RecordingSurface::default();
    render_frame(&state, &mut surface, &Viewport::new(center(), 2.0));

    assert_eq!(surface.calls[0], DrawCall::Clear(BACKGROUND));
    let radii: Vec<f32> = surface
        .filled()
        .iter()
        .map(|c| match c {
            DrawCall::Filled { radius, .. } => *radius,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(radii, vec![80.0, 20.0]);
    match surface.filled()[0] {
        DrawCall::Filled { center: c, .. } => assert_eq!(*c, Vec2::new(560.0, 240.0)),
        _ => unreachable!(),
    }
}
