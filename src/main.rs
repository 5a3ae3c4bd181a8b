//! Strider - a deterministic 2D character controller
//!
//! This is the main entry point for the Strider sandbox: a headless scripted
//! run across a small course that exercises every movement mode.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use strider_controller::{CharacterController, ControllerConfig, InputLatch, ModeChange};
use strider_core::{Aabb, Cardinal, StepClock, StepConfig};
use strider_physics::{CollisionWorld, Surface};

/// Load tuning from a TOML file, or fall back to the defaults
fn load_config(path: &str) -> Result<ControllerConfig> {
    if !Path::new(path).exists() {
        info!("No tuning file at {}, using defaults", path);
        return Ok(ControllerConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tuning file {}", path))?;
    let config: ControllerConfig =
        toml::from_str(&content).with_context(|| format!("Failed to parse tuning file {}", path))?;
    config
        .validate()
        .with_context(|| format!("Rejected tuning values in {}", path))?;

    info!("Loaded tuning from {}", path);
    Ok(config)
}

/// Small test course: a floor, two side walls, and a drop-through platform
fn build_course() -> CollisionWorld {
    let mut world = CollisionWorld::new();
    world.add_box(
        Aabb::new(Vec2::new(0.0, -0.5), Vec2::new(20.0, 0.5)),
        Surface::solid(0.4),
    );
    world.add_box(
        Aabb::new(Vec2::new(-8.0, 2.5), Vec2::new(0.5, 3.0)),
        Surface::solid(0.2),
    );
    world.add_box(
        Aabb::new(Vec2::new(8.0, 2.5), Vec2::new(0.5, 3.0)),
        Surface::solid(0.2),
    );
    world.add_box(
        Aabb::new(Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.25)),
        Surface::one_way(0.6, Cardinal::Up),
    );
    world
}

/// Drives the input latch through a scripted tour of the course
fn scripted_input(frame: u64, input: &mut InputLatch) {
    match frame {
        // Run right and hop onto the platform through its underside.
        0 => input.set_horizontal_axis(1.0),
        30 => {
            input.press_jump();
            input.set_jump_held(true);
        }
        90 => input.set_jump_held(false),
        // By now the run has carried over the platform edge and into the far
        // wall; a jump at its face catches a wall slide.
        300 => input.press_jump(),
        // Peel off the wall and head back.
        330 => input.set_horizontal_axis(-1.0),
        // Stop and stand.
        450 => input.set_horizontal_axis(0.0),
        // One held jump back up through the platform.
        500 => {
            input.press_jump();
            input.set_jump_held(true);
        }
        540 => input.set_jump_held(false),
        _ => {}
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Strider sandbox...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tuning.toml".to_string());
    let config = load_config(&path)?;

    let world = build_course();
    let mut controller = CharacterController::new(config, Vec2::new(0.35, 0.5));
    controller.set_position(Vec2::new(-5.0, 0.5));
    controller.subscribe(|change: ModeChange| {
        info!("{} -> {}", change.previous, change.current);
    });

    let mut clock = StepClock::new(StepConfig::default());
    let mut input = InputLatch::new();
    let timestep = clock.config.fixed_timestep;

    for frame in 0..600 {
        scripted_input(frame, &mut input);
        clock.update(timestep);
        for _ in 0..clock.fixed_steps() {
            controller.tick(&world, &mut input, timestep);
        }
    }

    info!(
        "Run complete after {} frames: position ({:.2}, {:.2}), mode {}",
        clock.frame_count,
        controller.position().x,
        controller.position().y,
        controller.mode()
    );

    Ok(())
}
