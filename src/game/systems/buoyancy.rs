//! Buoyancy / fall controller
//!
//! Gives the bubble its "hover, then slow fall" feel: gravity is withheld for
//! a grace period after each bounce and while the bubble sits near the ground,
//! descent is softened by a small upward push, and air resistance damps the
//! whole velocity every step.

use crate::game::state::Bubble;
use crate::util::vec3::Vec3;

/// Ground probe failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbeError {
    #[error("Ground layer is not configured")]
    MissingLayer,
    #[error("Probe origin is not finite")]
    InvalidOrigin,
}

/// Short-range downward spatial query against the ground layer
pub trait GroundProbe {
    fn near_ground(&self, origin: Vec3, max_distance: f32) -> Result<bool, ProbeError>;
}

/// Probe for worlds without a ground layer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGround;

impl GroundProbe for NoGround {
    fn near_ground(&self, _origin: Vec3, _max_distance: f32) -> Result<bool, ProbeError> {
        Err(ProbeError::MissingLayer)
    }
}

/// Probe against the horizontal plane `y = height`
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub height: f32,
}

impl GroundProbe for FlatGround {
    fn near_ground(&self, origin: Vec3, max_distance: f32) -> Result<bool, ProbeError> {
        if !origin.is_finite() {
            return Err(ProbeError::InvalidOrigin);
        }
        let gap = origin.y - self.height;
        Ok((0.0..=max_distance).contains(&gap))
    }
}

/// Run the ground probe; a probe that cannot run counts as airborne
pub fn is_touching_ground(bubble: &Bubble, probe: &dyn GroundProbe) -> bool {
    match probe.near_ground(bubble.position, bubble.config().ground_probe_distance) {
        Ok(near) => near,
        Err(e) => {
            tracing::warn!("Ground probe failed ({}), treating bubble as airborne", e);
            false
        }
    }
}

/// Gravity applies once the float grace has expired and the bubble is airborne
#[inline]
pub fn gravity_applies(time_since_bounce: f32, float_grace: f32, touching_ground: bool) -> bool {
    time_since_bounce > float_grace && !touching_ground
}

/// Apply gravity if the gate allows it. Returns whether gravity was applied.
pub fn apply_gravity(bubble: &mut Bubble, probe: &dyn GroundProbe, dt: f32) -> bool {
    let touching = is_touching_ground(bubble, probe);
    if !gravity_applies(bubble.time_since_bounce(), bubble.config().float_grace, touching) {
        return false;
    }
    bubble.velocity.y += bubble.config().gravity * dt;
    true
}

/// Soften descent with a small upward acceleration
pub fn apply_descent_assist(bubble: &mut Bubble, dt: f32) {
    if bubble.velocity.y < 0.0 {
        bubble.velocity.y += bubble.config().descent_assist * dt;
    }
}

/// Multiplicative damping of the full velocity vector
pub fn apply_air_resistance(bubble: &mut Bubble) {
    bubble.velocity *= bubble.config().air_resistance;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BubbleConfig;
    use crate::game::constants::physics::DT;

    const EPSILON: f32 = 1e-5;

    fn create_bubble(height: f32) -> Bubble {
        Bubble::new(BubbleConfig::default(), Vec3::new(0.0, height, 0.0)).unwrap()
    }

    #[test]
    fn test_gate() {
        assert!(gravity_applies(1.0, 0.5, false));
        assert!(!gravity_applies(0.25, 0.5, false));
        assert!(!gravity_applies(1.0, 0.5, true));
        assert!(!gravity_applies(0.5, 0.5, false));
    }

    #[test]
    fn test_no_gravity_during_float_grace() {
        let mut bubble = create_bubble(20.0);
        bubble.round_time = 0.3;
        let applied = apply_gravity(&mut bubble, &FlatGround { height: 0.0 }, DT);
        assert!(!applied);
        assert_eq!(bubble.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_gravity_after_float_grace() {
        let mut bubble = create_bubble(20.0);
        bubble.round_time = 2.0;
        let applied = apply_gravity(&mut bubble, &FlatGround { height: 0.0 }, DT);
        assert!(applied);
        assert!((bubble.velocity.y - (-15.0 * DT)).abs() < EPSILON);
    }

    #[test]
    fn test_no_gravity_near_ground() {
        let mut bubble = create_bubble(1.0);
        bubble.round_time = 2.0;
        assert!(!apply_gravity(&mut bubble, &FlatGround { height: 0.0 }, DT));
    }

    #[test]
    fn test_failed_probe_allows_gravity() {
        let mut bubble = create_bubble(0.5);
        bubble.round_time = 2.0;
        assert!(!is_touching_ground(&bubble, &NoGround));
        assert!(apply_gravity(&mut bubble, &NoGround, DT));
    }

    #[test]
    fn test_flat_ground_probe() {
        let ground = FlatGround { height: 2.0 };
        assert!(ground.near_ground(Vec3::new(0.0, 3.0, 0.0), 1.1).unwrap());
        assert!(!ground.near_ground(Vec3::new(0.0, 3.5, 0.0), 1.1).unwrap());
        assert!(!ground.near_ground(Vec3::new(0.0, 1.0, 0.0), 1.1).unwrap());
        assert!(ground
            .near_ground(Vec3::new(f32::NAN, 0.0, 0.0), 1.1)
            .is_err());
    }

    #[test]
    fn test_descent_assist_only_when_falling() {
        let mut bubble = create_bubble(10.0);
        bubble.velocity = Vec3::new(0.0, 3.0, 0.0);
        apply_descent_assist(&mut bubble, DT);
        assert_eq!(bubble.velocity.y, 3.0);

        bubble.velocity = Vec3::new(0.0, -3.0, 0.0);
        apply_descent_assist(&mut bubble, DT);
        assert!((bubble.velocity.y - (-3.0 + 2.0 * DT)).abs() < EPSILON);
    }

    #[test]
    fn test_air_resistance_is_exponential() {
        let mut bubble = create_bubble(10.0);
        bubble.velocity = Vec3::new(10.0, -20.0, 5.0);
        apply_air_resistance(&mut bubble);
        assert!(bubble
            .velocity
            .approx_eq(Vec3::new(9.97, -19.94, 4.985), 1e-4));
    }
}
