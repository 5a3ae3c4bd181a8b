//! Velocity integration for a single fixed step

use strider_core::Vec2;

use crate::config::ControllerConfig;
use crate::friction::FrictionSample;
use crate::state::AxisFreeze;

/// Steps `current` toward `target` by at most `max_delta`
fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(diff)
    }
}

/// Advances velocity by one fixed step.
///
/// Horizontal: input eases the axis toward `axis * horizontal_speed`, then
/// the stronger of `horizontal_resistance` and the sampled surface damping
/// pulls it toward zero, then the result clamps to top speed. Vertical:
/// gravity accumulates down to `terminal_velocity`, then wall damping pulls
/// toward zero. Frozen axes pass through untouched, as does everything at a
/// zero timestep.
pub fn integrate(
    velocity: Vec2,
    axis: f32,
    damping: FrictionSample,
    freeze: AxisFreeze,
    config: &ControllerConfig,
    dt: f32,
) -> Vec2 {
    let mut velocity = velocity;

    if !freeze.horizontal {
        if axis.abs() > 0.0 {
            let t = (config.horizontal_speed * dt).clamp(0.0, 1.0);
            velocity.x += (axis * config.horizontal_speed - velocity.x) * t;
        }
        if dt > 0.0 {
            let decel = config
                .horizontal_resistance
                .max(damping.horizontal_damping);
            velocity.x = move_towards(velocity.x, 0.0, decel);
        }
        velocity.x = velocity
            .x
            .clamp(-config.horizontal_speed, config.horizontal_speed);
    }

    if !freeze.vertical {
        velocity.y = (velocity.y + config.gravity_accel * dt).max(config.terminal_velocity);
        if dt > 0.0 && damping.vertical_damping > 0.0 {
            velocity.y = move_towards(velocity.y, 0.0, damping.vertical_damping);
        }
    }

    velocity
}
