//! Scale timer
//!
//! Shrinks the bubble's resting size linearly from `start_size` to `min_size`
//! over `shrink_duration`, then holds the floor.

use crate::config::BubbleConfig;
use crate::game::state::Bubble;
use crate::util::vec3::Vec3;

/// Uniform size multiplier after `elapsed` seconds
pub fn scale_multiplier(elapsed: f32, config: &BubbleConfig) -> f32 {
    let t = (elapsed / config.shrink_duration).clamp(0.0, 1.0);
    let floor_ratio = config.min_size / config.start_size;
    1.0 + (floor_ratio - 1.0) * t
}

/// Timer-driven base scale after `elapsed` seconds, never below `min_size`
pub fn base_scale_at(elapsed: f32, config: &BubbleConfig) -> Vec3 {
    (Vec3::splat(config.start_size) * scale_multiplier(elapsed, config))
        .max_scalar(config.min_size)
}

/// Advance the shrink timer by one step. No-op once the floor is reached.
pub fn update(bubble: &mut Bubble, dt: f32) {
    let duration = bubble.config().shrink_duration;
    if bubble.shrink_elapsed >= duration {
        return;
    }
    bubble.shrink_elapsed += dt;
    bubble.base_scale = base_scale_at(bubble.shrink_elapsed, bubble.config());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::physics::DT;

    const EPSILON: f32 = 1e-4;

    fn create_bubble() -> Bubble {
        Bubble::new(BubbleConfig::default(), Vec3::ZERO).unwrap()
    }

    #[test]
    fn test_start_of_round_is_start_size() {
        let config = BubbleConfig::default();
        assert_eq!(base_scale_at(0.0, &config), Vec3::splat(10.0));
    }

    #[test]
    fn test_floor_reached_at_duration() {
        let config = BubbleConfig {
            start_size: 10.0,
            shrink_duration: 40.0,
            min_size: 0.1,
            ..BubbleConfig::default()
        };
        let scale = base_scale_at(40.0, &config);
        assert!(scale.approx_eq(Vec3::splat(0.1), EPSILON));
        assert!(scale.x >= 0.1);
    }

    #[test]
    fn test_floor_held_after_duration() {
        let config = BubbleConfig::default();
        for t in [40.0, 41.0, 100.0, 10_000.0] {
            let scale = base_scale_at(t, &config);
            let expected = config.start_size * config.min_size / config.start_size;
            assert!(scale.approx_eq(Vec3::splat(expected), EPSILON));
        }
    }

    #[test]
    fn test_halfway_is_linear() {
        let config = BubbleConfig::default();
        // lerp(1, 0.01, 0.5) = 0.505
        let scale = base_scale_at(20.0, &config);
        assert!((scale.y - 5.05).abs() < EPSILON);
    }

    #[test]
    fn test_update_shrinks_monotonically() {
        let mut bubble = create_bubble();
        let mut previous = bubble.base_scale.x;
        for _ in 0..500 {
            update(&mut bubble, DT);
            assert!(bubble.base_scale.x <= previous);
            previous = bubble.base_scale.x;
        }
        assert!(previous < 10.0);
    }

    #[test]
    fn test_update_is_idempotent_at_floor() {
        let mut bubble = create_bubble();
        let steps = (41.0 / DT) as usize;
        for _ in 0..steps {
            update(&mut bubble, DT);
        }
        let settled = bubble.base_scale;
        let elapsed = bubble.shrink_elapsed;
        update(&mut bubble, DT);
        assert_eq!(bubble.base_scale, settled);
        assert_eq!(bubble.shrink_elapsed, elapsed);
        assert!(settled.approx_eq(Vec3::splat(0.1), EPSILON));
    }
}
