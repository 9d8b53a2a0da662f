#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// --- Drag ---

#[test]
fn move_without_press_is_ignored() {
    let mut motion = Motion::new();
    motion.pointer_move(Point::new(50.0, 50.0));
    assert_eq!(motion.target(), Rotation::default());
}

#[test]
fn drag_moves_target() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(10.0, 10.0));
    motion.pointer_move(Point::new(30.0, 15.0));
    assert!(approx_eq(motion.target().y, 0.2));
    assert!(approx_eq(motion.target().x, 0.05));
}

#[test]
fn drag_deltas_are_relative_to_last_move() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(0.0, 0.0));
    motion.pointer_move(Point::new(10.0, 0.0));
    motion.pointer_move(Point::new(20.0, 0.0));
    assert!(approx_eq(motion.target().y, 0.2));
}

#[test]
fn release_ends_drag() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(0.0, 0.0));
    assert!(motion.is_dragging());
    motion.pointer_up();
    assert!(!motion.is_dragging());
    motion.pointer_move(Point::new(100.0, 100.0));
    assert_eq!(motion.target(), Rotation::default());
}

// --- Frames ---

#[test]
fn idle_tick_auto_rotates() {
    let mut motion = Motion::new();
    motion.tick();
    assert!(approx_eq(motion.target().y, 0.003));
    assert!(approx_eq(motion.target().x, 0.001));
}

#[test]
fn no_auto_rotate_while_dragging() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(0.0, 0.0));
    motion.tick();
    assert_eq!(motion.target(), Rotation::default());
}

#[test]
fn current_eases_toward_target() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(0.0, 0.0));
    motion.pointer_move(Point::new(100.0, 0.0));
    motion.tick();
    assert!(approx_eq(motion.outer().y, 0.05));
    motion.tick();
    assert!(approx_eq(motion.outer().y, 0.05 + 0.95 * 0.05));
}

#[test]
fn inner_counter_rotates() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(0.0, 0.0));
    motion.pointer_move(Point::new(100.0, 100.0));
    motion.tick();
    assert!(approx_eq(motion.inner().y, -0.7 * motion.outer().y));
    assert!(approx_eq(motion.inner().x, -0.7 * motion.outer().x));
}

#[test]
fn particles_spin_every_frame() {
    let mut motion = Motion::new();
    motion.pointer_down(Point::new(0.0, 0.0));
    motion.tick();
    motion.tick();
    assert!(approx_eq(motion.particle_spin(), 0.002));
}
