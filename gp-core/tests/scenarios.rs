//! End-to-end frame scenarios through the `Simulation` entry points.

use std::path::PathBuf;

use gp_core::presets::PresetLoader;
use gp_core::types::{constants, PhysicsObject, Vec3};
use gp_core::{PresetError, Simulation};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn presets_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("presets")
}

#[test]
fn drop_from_two_meters_bounces_at_contact_radius() {
    init_logging();
    let mut sim = Simulation::new();

    let position = sim.update_player_physics(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, 1.0);

    // 2 - 9.81 = -7.81 penetrates by 8.31, pushed out to the contact radius
    assert!((position.y - 0.5).abs() < 1e-5, "got y={}", position.y);
    assert!(
        (sim.player().velocity.y - 0.3 * constants::GRAVITY).abs() < 1e-5,
        "got vy={}",
        sim.player().velocity.y
    );
}

#[test]
fn full_step_returns_position_and_velocity() {
    init_logging();
    let mut sim = Simulation::new();

    let snapshot = sim.update_physics(0.1);
    let flat = snapshot.to_array();

    assert_eq!(flat[0..3], snapshot.position.to_array());
    assert_eq!(flat[3..6], snapshot.velocity.to_array());
    assert!((flat[4] + 0.981).abs() < 1e-5);
    assert!((flat[1] - (1.0 - 0.0981)).abs() < 1e-5);
}

#[test]
fn collision_queries_match_threshold() {
    init_logging();
    let sim = Simulation::new();
    let before = *sim.player();

    assert!(sim.check_collision(Vec3::new(0.0, 0.4, 0.0)));
    assert!(!sim.check_collision(Vec3::new(0.0, 0.6, 0.0)));
    assert_eq!(*sim.player(), before);
}

#[test]
fn sliding_player_slows_each_contact_frame() {
    init_logging();
    let mut sim = Simulation::new();
    let dt = 1.0 / 60.0;

    sim.update_player_physics(Vec3::new(0.0, 0.5, 0.0), Vec3::new(10.0, 0.0, 0.0), dt);
    let first = sim.player().velocity.x;
    sim.update_physics(dt);
    let second = sim.player().velocity.x;

    // Friction is per contact: 80% gone each frame regardless of dt
    assert!((first - 2.0).abs() < 1e-4, "got vx={first}");
    assert!((second - 0.4).abs() < 1e-4, "got vx={second}");
}

#[test]
fn terminal_velocity_holds_over_long_fall() {
    init_logging();
    let mut sim = Simulation::new();

    sim.update_player_physics(Vec3::new(0.0, 10_000.0, 0.0), Vec3::ZERO, 0.1);
    let snapshot = sim.step_n(0.1, 100);

    assert_eq!(snapshot.velocity.y, -constants::MAX_FALL_SPEED);
    assert!(sim.last_collision().is_none());
}

#[test]
fn loads_world_and_body_presets() {
    init_logging();
    let loader = PresetLoader::new(presets_path());

    let mut sim = Simulation::from_presets(&loader, "moon", "rubber_ball").unwrap();

    assert_eq!(sim.player().position, Vec3::new(0.0, 3.0, 0.0));
    assert!((sim.player().restitution - 0.85).abs() < 1e-6);

    let snapshot = sim.update_physics(1.0);
    assert!((snapshot.velocity.y + 1.62).abs() < 1e-5);
}

#[test]
fn earth_preset_behaves_like_defaults() {
    init_logging();
    let loader = PresetLoader::new(presets_path());
    let mut from_file = Simulation::from_presets(&loader, "earth", "player").unwrap();
    let mut built_in = Simulation::new();

    for _ in 0..120 {
        from_file.update_physics(1.0 / 60.0);
        built_in.update_physics(1.0 / 60.0);
    }

    assert_eq!(from_file.player(), built_in.player());
}

#[test]
fn missing_preset_is_reported() {
    let loader = PresetLoader::new(presets_path());

    let result = Simulation::from_presets(&loader, "jupiter", "player");

    assert!(matches!(result, Err(PresetError::NotFound(name)) if name == "jupiter"));
}

#[test]
fn cleanup_then_init_restores_spawn() {
    init_logging();
    let mut sim = Simulation::new();
    sim.update_player_physics(Vec3::new(4.0, 0.0, 4.0), Vec3::new(3.0, -3.0, 0.0), 0.5);

    sim.cleanup();
    sim.init();

    assert_eq!(*sim.player(), PhysicsObject::player());
}
