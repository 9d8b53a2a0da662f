#![allow(clippy::float_cmp)]

use super::*;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 1.0)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// --- Viewport ---

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(Viewport::new(100.0, 100.0, 3.0).pixel_ratio, 2.0);
    assert_eq!(Viewport::new(100.0, 100.0, 1.5).pixel_ratio, 1.5);
}

#[test]
fn pixel_ratio_has_floor_of_one() {
    assert_eq!(Viewport::new(100.0, 100.0, 0.0).pixel_ratio, 1.0);
}

#[test]
fn aspect_of_collapsed_canvas_is_one() {
    assert_eq!(Viewport::new(0.0, 0.0, 1.0).aspect(), 1.0);
    assert!(Viewport::new(0.0, 10.0, 1.0).is_empty());
}

#[test]
fn backing_size_scales_by_ratio() {
    assert_eq!(Viewport::new(400.0, 300.0, 2.0).backing_size(), (800, 600));
}

// --- Projection ---

#[test]
fn origin_projects_to_center() {
    let p = Perspective::default().project(Vec3::new(0.0, 0.0, 0.0), viewport()).unwrap();
    assert_eq!(p.x, 400.0);
    assert_eq!(p.y, 300.0);
    assert_eq!(p.depth, 7.0);
}

#[test]
fn positive_y_is_up_on_screen() {
    let p = Perspective::default().project(Vec3::new(0.0, 1.0, 0.0), viewport()).unwrap();
    assert!(p.y < 300.0);
}

#[test]
fn positive_x_is_right_on_screen() {
    let p = Perspective::default().project(Vec3::new(1.0, 0.0, 0.0), viewport()).unwrap();
    assert!(p.x > 400.0);
}

#[test]
fn nearer_points_spread_further() {
    let cam = Perspective::default();
    let far = cam.project(Vec3::new(1.0, 0.0, -2.0), viewport()).unwrap();
    let near = cam.project(Vec3::new(1.0, 0.0, 2.0), viewport()).unwrap();
    assert!(near.x > far.x);
}

#[test]
fn points_behind_near_plane_are_culled() {
    let cam = Perspective::default();
    assert!(cam.project(Vec3::new(0.0, 0.0, 7.0), viewport()).is_none());
    assert!(cam.project(Vec3::new(0.0, 0.0, 8.0), viewport()).is_none());
}

#[test]
fn top_of_fov_maps_to_top_edge() {
    let cam = Perspective::default();
    let half = (cam.fov_deg.to_radians() / 2.0).tan() * cam.distance;
    let p = cam.project(Vec3::new(0.0, half, 0.0), viewport()).unwrap();
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn point_size_shrinks_with_depth() {
    let cam = Perspective::default();
    let close = cam.point_size(0.05, 5.0, viewport());
    let distant = cam.point_size(0.05, 10.0, viewport());
    assert!(approx_eq(close, 3.0));
    assert!(approx_eq(distant, 1.5));
}
