//! The movement state machine and its per-tick pipeline

use strider_core::{CollisionQuery, Vec2};
use tracing::debug;

use crate::body::CharacterBody;
use crate::bounds::MovementBounds;
use crate::config::ControllerConfig;
use crate::events::{ControllerListener, ModeChange};
use crate::friction::FrictionSample;
use crate::input::{InputSnapshot, InputSource};
use crate::integrator::integrate;
use crate::state::State;

/// Everything one fixed step produced
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Body state after the step
    pub body: CharacterBody,
    /// Transitions that fired, in order
    pub changes: Vec<ModeChange>,
    /// Bounds the step moved within
    pub bounds: MovementBounds,
}

/// Advances a body by one fixed step.
///
/// Pure with respect to its arguments: the same body, world contents, input,
/// and timestep always produce the same output. The step probes bounds and
/// friction at the starting position, integrates velocity under the current
/// mode's axis freezes, clamps the moved position into bounds, and finally
/// selects at most one transition from the post-move state. A non-positive
/// timestep returns the body untouched.
pub fn advance(
    body: CharacterBody,
    config: &ControllerConfig,
    world: &dyn CollisionQuery,
    input: InputSnapshot,
    dt: f32,
) -> TickOutput {
    let mut body = body;
    let mut changes = Vec::new();

    let bounds = MovementBounds::probe(
        world,
        body.position,
        body.half_extents,
        config.collision_mask,
        config.tolerance,
    );
    if dt <= 0.0 {
        return TickOutput {
            body,
            changes,
            bounds,
        };
    }

    let damping = FrictionSample::probe(
        world,
        body.position,
        body.half_extents,
        config.friction_probe_radius,
        config.collision_mask,
    );

    // Releasing jump early trims the launch down to the short hop.
    if body.mode == State::Jumping
        && !input.jump_held
        && body.velocity.y > config.low_jump_speed
    {
        body.velocity.y = config.low_jump_speed;
    }

    body.velocity = integrate(
        body.velocity,
        input.horizontal_axis,
        damping,
        body.mode.freezes(),
        config,
        dt,
    );

    if body.mode == State::WallSlide {
        body.velocity.y = body.velocity.y.max(config.wall_slide_speed);
    }

    body.position = bounds.clamp(body.position + body.velocity * dt);

    if let Some(next) = select_transition(&body, &bounds, input, config) {
        if next != body.mode {
            apply_transition(&mut body, next, config, input, &mut changes);
        }
    }

    TickOutput {
        body,
        changes,
        bounds,
    }
}

/// Picks the mode the post-move state calls for, highest priority first.
///
/// Wall contact outranks jumping, so a jump pressed during a wall slide is
/// swallowed; `WallJump` stays reserved until a launch rule claims that slot.
fn select_transition(
    body: &CharacterBody,
    bounds: &MovementBounds,
    input: InputSnapshot,
    config: &ControllerConfig,
) -> Option<State> {
    let tol = config.tolerance;
    let on_left = bounds.touches_left(body.position, tol);
    let on_right = bounds.touches_right(body.position, tol);
    let on_top = bounds.touches_top(body.position, tol);
    let on_bottom = bounds.touches_bottom(body.position, tol);
    let axis = input.horizontal_axis;

    if body.mode == State::WallSlide
        && !on_bottom
        && ((on_left && axis > tol && !on_right) || (on_right && axis < -tol && !on_left))
    {
        return Some(State::WallDismount);
    }
    if (on_left || on_right) && !on_top && !on_bottom {
        return Some(State::WallSlide);
    }
    if input.jump_pressed && body.jumps_remaining > 0 {
        return Some(State::Jumping);
    }
    if on_bottom && body.velocity.x.abs() <= tol && axis.abs() <= tol {
        return Some(State::Idle);
    }
    if (!on_bottom && body.velocity.y <= 0.0) || on_top {
        return Some(State::Falling);
    }
    if on_bottom && (axis.abs() > tol || body.velocity.x.abs() > tol) && !(on_left && on_right) {
        return Some(State::Running);
    }
    None
}

/// Applies a transition and its entry effects, recording each change
fn apply_transition(
    body: &mut CharacterBody,
    next: State,
    config: &ControllerConfig,
    input: InputSnapshot,
    changes: &mut Vec<ModeChange>,
) {
    let previous = body.mode;
    body.mode = next;
    enter_mode(body, next, config, input);
    changes.push(ModeChange {
        previous,
        current: next,
    });

    // Dismounting is transient: the character is airborne again before the
    // tick ends.
    if next == State::WallDismount {
        body.mode = State::Falling;
        enter_mode(body, State::Falling, config, input);
        changes.push(ModeChange {
            previous: State::WallDismount,
            current: State::Falling,
        });
    }
}

/// Entry effects for each mode
fn enter_mode(body: &mut CharacterBody, mode: State, config: &ControllerConfig, input: InputSnapshot) {
    match mode {
        State::Idle => {
            body.velocity = Vec2::ZERO;
            body.jumps_remaining = config.max_jumps;
        }
        State::Running => {
            body.velocity.y = 0.0;
            body.jumps_remaining = config.max_jumps;
        }
        State::Falling => {
            body.velocity.y = 0.0;
        }
        State::Jumping => {
            body.velocity.y = if input.jump_held {
                config.high_jump_speed
            } else {
                config.low_jump_speed
            };
            body.jumps_remaining = body.jumps_remaining.saturating_sub(1);
        }
        State::WallSlide => {
            body.velocity.x = 0.0;
        }
        State::Walking | State::WallStick | State::WallJump | State::WallDismount => {}
    }
}

/// Owns a body, its tuning, and the listeners watching it.
///
/// `tick` reads an input source, advances the body one fixed step against a
/// collision world, publishes the resulting transitions, and consumes the
/// input's edge flags.
pub struct CharacterController {
    config: ControllerConfig,
    body: CharacterBody,
    listeners: Vec<Box<dyn ControllerListener>>,
}

impl CharacterController {
    /// Controller with a body at the origin and a full jump budget
    pub fn new(config: ControllerConfig, half_extents: Vec2) -> CharacterController {
        let body = CharacterBody::new(Vec2::ZERO, half_extents, config.max_jumps);
        CharacterController {
            config,
            body,
            listeners: Vec::new(),
        }
    }

    /// Tuning the controller runs with
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current body state
    pub fn body(&self) -> CharacterBody {
        self.body
    }

    /// Center of the character
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Teleports the character, leaving velocity and mode alone
    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Current movement mode
    pub fn mode(&self) -> State {
        self.body.mode
    }

    /// Jumps left in the budget
    pub fn jumps_remaining(&self) -> u32 {
        self.body.jumps_remaining
    }

    /// Registers a listener; notification order follows subscription order
    pub fn subscribe(&mut self, listener: impl ControllerListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Forces a mode outside the normal predicates.
    ///
    /// Entry effects run as if the mode had been selected with neutral
    /// input, and listeners hear the change. Forcing the current mode does
    /// nothing.
    pub fn force_mode(&mut self, mode: State) {
        if mode == self.body.mode {
            return;
        }
        let mut changes = Vec::new();
        apply_transition(
            &mut self.body,
            mode,
            &self.config,
            InputSnapshot::default(),
            &mut changes,
        );
        self.notify_changes(&changes);
    }

    /// Advances one fixed step and publishes what happened
    pub fn tick(
        &mut self,
        world: &dyn CollisionQuery,
        input: &mut dyn InputSource,
        dt: f32,
    ) -> TickOutput {
        let snapshot = input.read();
        let output = advance(self.body, &self.config, world, snapshot, dt);
        self.body = output.body;
        self.notify_changes(&output.changes);
        for listener in &mut self.listeners {
            listener.mode_ticked(self.body.mode);
        }
        input.consume();
        output
    }

    fn notify_changes(&mut self, changes: &[ModeChange]) {
        for change in changes {
            debug!(from = %change.previous, to = %change.current, "mode change");
            for listener in &mut self.listeners {
                listener.mode_changed(*change);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::Aabb;
    use strider_physics::{CollisionWorld, Surface};

    const DT: f32 = 1.0 / 60.0;
    const HALF: Vec2 = Vec2::new(0.5, 0.5);

    fn ground_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();
        world.add_box(
            Aabb::new(Vec2::new(0.0, -1.0), Vec2::new(10.0, 0.5)),
            Surface::solid(0.3),
        );
        world
    }

    /// Tall wall centered at the given x
    fn wall_at(world: &mut CollisionWorld, center_x: f32) {
        world.add_box(
            Aabb::new(Vec2::new(center_x, 0.0), Vec2::new(0.5, 8.0)),
            Surface::solid(0.2),
        );
    }

    #[test]
    fn test_settled_idle_reports_no_changes() {
        let world = ground_world();
        let config = ControllerConfig::default();
        let body = CharacterBody::new(Vec2::new(0.0, 0.0), HALF, config.max_jumps);

        let output = advance(body, &config, &world, InputSnapshot::default(), DT);
        assert_eq!(output.body.mode, State::Idle);
        assert!(output.changes.is_empty());
        assert_eq!(output.body.position, body.position);
    }

    #[test]
    fn test_jump_press_outranks_idle() {
        let world = ground_world();
        let config = ControllerConfig::default();
        let body = CharacterBody::new(Vec2::new(0.0, 0.0), HALF, config.max_jumps);

        let input = InputSnapshot {
            jump_pressed: true,
            jump_held: false,
            horizontal_axis: 0.0,
        };
        let output = advance(body, &config, &world, input, DT);
        assert_eq!(output.body.mode, State::Jumping);
        assert_eq!(output.body.velocity.y, config.low_jump_speed);
        assert_eq!(output.body.jumps_remaining, config.max_jumps - 1);
    }

    #[test]
    fn test_airborne_wall_contact_starts_slide() {
        let mut world = CollisionWorld::new();
        wall_at(&mut world, -1.0);
        let config = ControllerConfig::default();
        let mut body = CharacterBody::new(Vec2::new(0.0, 0.0), HALF, config.max_jumps);
        body.mode = State::Falling;

        let output = advance(body, &config, &world, InputSnapshot::default(), DT);
        assert_eq!(output.body.mode, State::WallSlide);
        assert_eq!(output.body.velocity.x, 0.0);
        assert_eq!(
            output.changes,
            vec![ModeChange {
                previous: State::Falling,
                current: State::WallSlide,
            }]
        );
    }

    #[test]
    fn test_dismount_requires_open_far_side() {
        // Chimney: both walls flush, so pushing sideways cannot dismount.
        let mut chimney = CollisionWorld::new();
        wall_at(&mut chimney, -1.0);
        wall_at(&mut chimney, 1.0);
        let config = ControllerConfig::default();
        let mut body = CharacterBody::new(Vec2::new(0.0, 0.0), HALF, config.max_jumps);
        body.mode = State::WallSlide;

        let push = InputSnapshot {
            jump_pressed: false,
            jump_held: false,
            horizontal_axis: 1.0,
        };
        let output = advance(body, &config, &chimney, push, DT);
        assert_eq!(output.body.mode, State::WallSlide);
        assert!(output.changes.is_empty());

        // Single wall: the same push peels the character off through the
        // transient dismount.
        let mut single = CollisionWorld::new();
        wall_at(&mut single, -1.0);
        let output = advance(body, &config, &single, push, DT);
        assert_eq!(output.body.mode, State::Falling);
        assert_eq!(
            output.changes,
            vec![
                ModeChange {
                    previous: State::WallSlide,
                    current: State::WallDismount,
                },
                ModeChange {
                    previous: State::WallDismount,
                    current: State::Falling,
                },
            ]
        );
    }

    #[test]
    fn test_force_mode_runs_entry_effects_once() {
        let mut controller = CharacterController::new(ControllerConfig::default(), HALF);
        controller.force_mode(State::Jumping);
        assert_eq!(controller.mode(), State::Jumping);
        assert_eq!(controller.velocity().y, controller.config().low_jump_speed);
        assert_eq!(
            controller.jumps_remaining(),
            controller.config().max_jumps - 1
        );

        // Forcing the mode it is already in changes nothing.
        controller.force_mode(State::Jumping);
        assert_eq!(
            controller.jumps_remaining(),
            controller.config().max_jumps - 1
        );
    }
}
