//! End-to-end behavior of a single bounded mover.

use approx::assert_relative_eq;
use bounce_engine::{BoundedMover, RandomSource, Rng, VerticalRule, Wall};
use glam::{Vec2, Vec3};

fn mover(velocity: Vec3) -> BoundedMover {
    BoundedMover::from_parts(Vec3::ZERO, velocity, 1.0, 0.1, Vec2::new(5.0, 5.0))
}

#[test]
fn displacement_without_contact_is_velocity_times_speed() {
    let mut m = BoundedMover::from_parts(
        Vec3::new(-1.0, 2.0, 0.0),
        Vec3::new(0.3, -0.4, 0.0),
        0.5,
        0.1,
        Vec2::new(5.0, 5.0),
    );
    for _ in 0..4 {
        let before = m.position;
        let contacts = m.tick();
        assert!(contacts.is_empty());
        assert_eq!(m.position, before + m.velocity * m.speed);
    }
}

#[test]
fn x_reflection_keeps_y() {
    let mut m = BoundedMover::from_parts(
        Vec3::new(4.5, 0.0, 0.0),
        Vec3::new(0.5, 0.25, 0.0),
        1.0,
        0.1,
        Vec2::new(5.0, 5.0),
    );
    let contacts = m.tick();
    assert_eq!(contacts.x, Some(Wall::Right));
    assert_eq!(contacts.y, None);
    assert_eq!(m.velocity, Vec3::new(-0.5, 0.25, 0.0));
}

#[test]
fn y_reflection_keeps_x() {
    let mut m = BoundedMover::from_parts(
        Vec3::new(0.0, -5.0, 0.0),
        Vec3::new(0.25, -0.5, 0.0),
        1.0,
        0.1,
        Vec2::new(5.0, 5.0),
    );
    let contacts = m.tick();
    assert_eq!(contacts.x, None);
    assert_eq!(contacts.y, Some(Wall::Bottom));
    assert_eq!(m.velocity, Vec3::new(0.25, 0.5, 0.0));
}

#[test]
fn reflections_never_change_speed_of_travel() {
    let mut rng = Rng::new(1234);
    let mut m = BoundedMover::from_parts(
        Vec3::ZERO,
        Vec3::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0), 0.0),
        0.3,
        0.1,
        Vec2::new(2.0, 1.5),
    )
    .with_vertical_rule(VerticalRule::Contact);
    let magnitude = m.velocity.length();
    let mut bounces = 0;
    for _ in 0..2000 {
        bounces += m.tick().iter().count();
        assert_relative_eq!(m.velocity.length(), magnitude);
    }
    assert!(bounces > 0);
}

#[test]
fn scenario_a_right_wall_at_tick_five() {
    let mut m = mover(Vec3::X);

    assert!(m.tick().is_empty());
    assert_eq!(m.position, Vec3::new(1.0, 0.0, 0.0));

    for _ in 2..5 {
        assert!(m.tick().is_empty());
    }
    let contacts = m.tick();
    assert_eq!(m.position, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(contacts.x, Some(Wall::Right));
    assert_eq!(m.velocity, Vec3::new(-1.0, 0.0, 0.0));
}

/// The top/bottom checks only fire once the whole bounding circle is past
/// the wall, unlike the left/right checks which fire on contact. This pins
/// that behavior: the mover reaches y=6 before it turns around.
#[test]
fn scenario_b_top_wall_fires_only_after_full_passage() {
    let mut m = mover(Vec3::Y);

    for _ in 0..5 {
        assert!(m.tick().is_empty());
    }
    assert_eq!(m.position, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(m.velocity, Vec3::Y);

    let contacts = m.tick();
    assert_eq!(m.position, Vec3::new(0.0, 6.0, 0.0));
    assert_eq!(contacts.y, Some(Wall::Top));
    assert_eq!(m.velocity, Vec3::NEG_Y);

    // Re-entering: y=5 is no longer past the top, so it keeps heading down
    // and only reflects again once fully below the bottom edge at y=-6.
    let mut reflected_at = None;
    for tick in 7..=20 {
        if !m.tick().is_empty() {
            reflected_at = Some((tick, m.position.y));
            break;
        }
    }
    assert_eq!(reflected_at, Some((18, -6.0)));
}

#[test]
fn scenario_b_with_contact_rule_mirrors_x_axis() {
    let mut m = mover(Vec3::Y).with_vertical_rule(VerticalRule::Contact);
    for _ in 0..4 {
        assert!(m.tick().is_empty());
    }
    let contacts = m.tick();
    assert_eq!(m.position, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(contacts.y, Some(Wall::Top));
    assert_eq!(m.velocity, Vec3::NEG_Y);
}

#[test]
fn scenario_c_exact_boundary_with_zero_radius() {
    let mut m = BoundedMover::from_parts(
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(0.5, 0.5, 0.0),
        0.0,
        0.0,
        Vec2::new(5.0, 5.0),
    );
    assert!(m.track_position().is_empty());

    m.position.x = 5.0 + f32::EPSILON * 8.0;
    assert_eq!(m.track_position().x, Some(Wall::Right));
    assert_eq!(m.velocity, Vec3::new(-0.5, 0.5, 0.0));
}
