use crate::game::state::Bubble;
use crate::game::systems::buoyancy::{self, GroundProbe};
use crate::game::systems::{hot_air, ownership, scale, squish};
use crate::util::vec3::Vec3;

/// Advance the bubble by one fixed step.
///
/// Order: scale timer, gravity gate + descent assist, air resistance, hot-air
/// lift then decay, squish recovery, hazard cooldown. Heat-zone overlap and contacts are
/// delivered separately by the engine between steps.
pub fn step(bubble: &mut Bubble, probe: &dyn GroundProbe, dt: f32) {
    bubble.round_time += dt;

    scale::update(bubble, dt);

    buoyancy::apply_gravity(bubble, probe, dt);
    buoyancy::apply_descent_assist(bubble, dt);
    buoyancy::apply_air_resistance(bubble);

    hot_air::apply_lift(bubble, dt);
    hot_air::decay_step(bubble, dt);

    squish::recover(bubble, dt);

    ownership::update_hazard_cooldown(bubble, dt);

    if !bubble.velocity.is_finite() {
        tracing::warn!("Fixed non-finite bubble velocity");
        bubble.velocity = Vec3::ZERO;
    }
}

impl Bubble {
    /// One fixed physics step
    pub fn step(&mut self, probe: &dyn GroundProbe, dt: f32) {
        step(self, probe, dt);
    }

    /// Write back the position integrated by the physics engine
    pub fn sync_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
