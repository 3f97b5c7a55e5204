//! Hot-air accumulator
//!
//! While the bubble overlaps a heat zone the upward force ramps toward a cap.
//! Every step the current force is applied as upward acceleration and then
//! decays back toward zero, so lift lingers after the bubble leaves a vent.
//! Overlap notifications for a step arrive before that step's lift and decay.

use crate::game::state::Bubble;

/// Force after one step of heat-zone overlap, clamped to `[0, cap]`
#[inline]
pub fn rise(force: f32, rise_rate: f32, dt: f32, cap: f32) -> f32 {
    (force + rise_rate * dt).clamp(0.0, cap)
}

/// Force after one step of decay, floored at zero
#[inline]
pub fn decay(force: f32, fall_rate: f32, dt: f32) -> f32 {
    (force - fall_rate * dt).max(0.0)
}

/// Heat-zone overlap for one step: ramp the accumulator toward its cap
pub fn notify_in_heat_zone(bubble: &mut Bubble, dt: f32) {
    let config = bubble.config();
    bubble.hot_air_force = rise(
        bubble.hot_air_force,
        config.hot_air_rise_rate,
        dt,
        config.max_hot_air_force,
    );
}

/// Continuous upward push from the current accumulator
pub fn apply_lift(bubble: &mut Bubble, dt: f32) {
    bubble.velocity.y += bubble.hot_air_force * dt;
}

/// Unconditional per-step decay
pub fn decay_step(bubble: &mut Bubble, dt: f32) {
    bubble.hot_air_force = decay(bubble.hot_air_force, bubble.config().hot_air_fall_rate, dt);
}

impl Bubble {
    /// Called by the trigger-volume collaborator each step the bubble overlaps heat
    pub fn on_heat_zone_overlap(&mut self, dt: f32) {
        notify_in_heat_zone(self, dt);
    }
}
