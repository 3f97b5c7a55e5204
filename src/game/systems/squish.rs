//! Squish and recovery visual
//!
//! An impact flattens the bubble vertically and widens it horizontally. The
//! squish is kept as a factor on the resting scale, so it relaxes at the same
//! rate while the bubble is shrinking.

use crate::game::constants::squish::SNAP_EPSILON;
use crate::game::state::Bubble;
use crate::util::vec3::Vec3;

/// Per-axis squish multipliers for a given squish amount
pub fn squish_factors(amount: f32) -> Vec3 {
    let widen = 1.0 + amount * 0.5;
    Vec3::new(widen, 1.0 - amount, widen)
}

/// Flatten the bubble relative to its current resting scale
pub fn apply(bubble: &mut Bubble) {
    bubble.squish_factor = squish_factors(bubble.config().squish_amount);
    bubble.visual_scale = bubble.resting_scale().scale(bubble.squish_factor);
    bubble.squished = true;
}

/// Relax the render scale for one step
pub fn recover(bubble: &mut Bubble, dt: f32) {
    let resting = bubble.resting_scale();

    if !bubble.squished {
        // Track shrinkage even without a recent impact
        bubble.visual_scale = resting;
        return;
    }

    let t = bubble.config().squish_recovery_speed * dt;
    bubble.squish_factor = bubble.squish_factor.lerp(Vec3::ONE, t);
    bubble.visual_scale = resting.scale(bubble.squish_factor);

    if bubble.visual_scale.distance_to(resting) < SNAP_EPSILON {
        bubble.visual_scale = resting;
        bubble.squish_factor = Vec3::ONE;
        bubble.squished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BubbleConfig;
    use crate::game::constants::physics::DT;

    fn create_bubble() -> Bubble {
        Bubble::new(BubbleConfig::default(), Vec3::ZERO).unwrap()
    }

    #[test]
    fn test_squish_factors() {
        let f = squish_factors(0.3);
        assert!((f.x - 1.15).abs() < 1e-6);
        assert!((f.y - 0.7).abs() < 1e-6);
        assert_eq!(f.x, f.z);
    }

    #[test]
    fn test_apply_flattens() {
        let mut bubble = create_bubble();
        apply(&mut bubble);
        assert!(bubble.squished);
        assert!(bubble.visual_scale.y < bubble.base_scale.y);
        assert!(bubble.visual_scale.x > bubble.base_scale.x);
    }

    #[test]
    fn test_recovers_to_resting() {
        let mut bubble = create_bubble();
        apply(&mut bubble);

        // 5s is far beyond 1 / squish_recovery_speed
        for _ in 0..(5.0 / DT) as usize {
            recover(&mut bubble, DT);
        }

        assert!(!bubble.squished);
        assert!(bubble.visual_scale.approx_eq(bubble.resting_scale(), SNAP_EPSILON));
    }

    #[test]
    fn test_recovery_moves_toward_resting() {
        let mut bubble = create_bubble();
        apply(&mut bubble);
        let before = bubble.visual_scale.distance_to(bubble.resting_scale());
        recover(&mut bubble, DT);
        let after = bubble.visual_scale.distance_to(bubble.resting_scale());
        assert!(after < before);
        assert!(bubble.squished);
    }

    #[test]
    fn test_recovers_while_shrinking() {
        let mut bubble = create_bubble();
        apply(&mut bubble);

        // Resting scale keeps moving each step; recovery must still settle
        for _ in 0..(2.0 / DT) as usize {
            bubble.base_scale = bubble.base_scale * 0.999;
            recover(&mut bubble, DT);
        }

        assert!(!bubble.squished);
        assert_eq!(bubble.squish_factor, Vec3::ONE);
        assert_eq!(bubble.visual_scale, bubble.resting_scale());
    }

    #[test]
    fn test_unsquished_tracks_resting() {
        let mut bubble = create_bubble();
        bubble.base_scale = Vec3::splat(4.0);
        recover(&mut bubble, DT);
        assert_eq!(bubble.visual_scale, Vec3::splat(4.0));
    }
}
