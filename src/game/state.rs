//! Bubble entity state
//!
//! All mutable state of the bubble lives here and is written only by the
//! systems in `game::systems`. Collaborators read it through [`BubbleSnapshot`].

use serde::Serialize;

use crate::config::{BubbleConfig, ConfigError};
use crate::util::vec3::Vec3;

/// One of the two players on the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }
}

/// Colour identity shown on the bubble for the current owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tint {
    Neutral,
    Red,
    Blue,
}

impl Tint {
    pub fn for_owner(owner: Option<Player>) -> Tint {
        match owner {
            None => Tint::Neutral,
            Some(Player::PlayerA) => Tint::Red,
            Some(Player::PlayerB) => Tint::Blue,
        }
    }
}

/// The single dynamic body driven by this crate
#[derive(Debug, Clone)]
pub struct Bubble {
    config: BubbleConfig,
    spawn_position: Vec3,

    pub position: Vec3,
    pub velocity: Vec3,
    /// Timer-driven resting size (uniform)
    pub base_scale: Vec3,
    /// Permanent multiplier from spike hits, composed with `base_scale`
    pub hazard_scale: f32,
    /// Render scale including squish
    pub visual_scale: Vec3,
    /// Per-axis squish relative to the resting scale, `ONE` when relaxed
    pub squish_factor: Vec3,
    pub squished: bool,

    /// Seconds since round start
    pub round_time: f32,
    pub shrink_elapsed: f32,
    pub last_bounce_time: f32,

    pub hot_air_force: f32,

    pub hazard_cooldown_active: bool,
    pub hazard_cooldown_elapsed: f32,

    pub last_hitter: Option<Player>,
}

impl Bubble {
    /// Create a bubble at round start; rejects invalid tuning eagerly
    pub fn new(config: BubbleConfig, spawn_position: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        let start = Vec3::splat(config.start_size);
        Ok(Self {
            config,
            spawn_position,
            position: spawn_position,
            velocity: Vec3::ZERO,
            base_scale: start,
            hazard_scale: 1.0,
            visual_scale: start,
            squish_factor: Vec3::ONE,
            squished: false,
            round_time: 0.0,
            shrink_elapsed: 0.0,
            last_bounce_time: 0.0,
            hot_air_force: 0.0,
            hazard_cooldown_active: false,
            hazard_cooldown_elapsed: 0.0,
            last_hitter: None,
        })
    }

    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }

    /// Restore round-start state (external restart trigger)
    pub fn reset(&mut self) {
        let start = Vec3::splat(self.config.start_size);
        self.position = self.spawn_position;
        self.velocity = Vec3::ZERO;
        self.base_scale = start;
        self.hazard_scale = 1.0;
        self.visual_scale = start;
        self.squish_factor = Vec3::ONE;
        self.squished = false;
        self.round_time = 0.0;
        self.shrink_elapsed = 0.0;
        self.last_bounce_time = 0.0;
        self.hot_air_force = 0.0;
        self.hazard_cooldown_active = false;
        self.hazard_cooldown_elapsed = 0.0;
        self.last_hitter = None;
    }

    /// Un-squished size: timer scale composed with spike shrink, floored at `min_size`
    pub fn resting_scale(&self) -> Vec3 {
        (self.base_scale * self.hazard_scale).max_scalar(self.config.min_size)
    }

    /// Collision radius for a unit-diameter sphere mesh
    pub fn radius(&self) -> f32 {
        self.resting_scale().x * 0.5
    }

    /// Seconds since the last categorized contact
    pub fn time_since_bounce(&self) -> f32 {
        self.round_time - self.last_bounce_time
    }

    pub fn tint(&self) -> Tint {
        Tint::for_owner(self.last_hitter)
    }

    pub fn snapshot(&self) -> BubbleSnapshot {
        BubbleSnapshot {
            position: self.position,
            velocity: self.velocity,
            visual_scale: self.visual_scale,
            resting_scale: self.resting_scale(),
            owner: self.last_hitter,
            tint: self.tint(),
            hot_air_force: self.hot_air_force,
            squished: self.squished,
            hazard_cooldown_active: self.hazard_cooldown_active,
        }
    }
}

/// Read-only view for render, material and camera collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub visual_scale: Vec3,
    pub resting_scale: Vec3,
    pub owner: Option<Player>,
    pub tint: Tint,
    pub hot_air_force: f32,
    pub squished: bool,
    pub hazard_cooldown_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_bubble() -> Bubble {
        Bubble::new(BubbleConfig::default(), Vec3::new(0.0, 12.0, 0.0)).unwrap()
    }

    #[test]
    fn test_new_bubble_starts_at_start_size() {
        let bubble = create_bubble();
        assert_eq!(bubble.base_scale, Vec3::splat(10.0));
        assert_eq!(bubble.visual_scale, Vec3::splat(10.0));
        assert_eq!(bubble.last_hitter, None);
        assert_eq!(bubble.hot_air_force, 0.0);
        assert!(!bubble.squished);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = BubbleConfig {
            min_size: 20.0,
            ..BubbleConfig::default()
        };
        assert!(Bubble::new(config, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_reset_restores_round_start() {
        let mut bubble = create_bubble();
        bubble.position = Vec3::new(5.0, 1.0, 2.0);
        bubble.velocity = Vec3::new(1.0, -2.0, 0.0);
        bubble.base_scale = Vec3::splat(3.0);
        bubble.hazard_scale = 0.5;
        bubble.hot_air_force = 12.0;
        bubble.last_hitter = Some(Player::PlayerB);
        bubble.round_time = 33.0;
        bubble.hazard_cooldown_active = true;

        bubble.reset();

        assert_eq!(bubble.position, Vec3::new(0.0, 12.0, 0.0));
        assert_eq!(bubble.velocity, Vec3::ZERO);
        assert_eq!(bubble.resting_scale(), Vec3::splat(10.0));
        assert_eq!(bubble.hot_air_force, 0.0);
        assert_eq!(bubble.last_hitter, None);
        assert_eq!(bubble.round_time, 0.0);
        assert!(!bubble.hazard_cooldown_active);
    }

    #[test]
    fn test_resting_scale_is_floored() {
        let mut bubble = create_bubble();
        bubble.base_scale = Vec3::splat(0.15);
        bubble.hazard_scale = 0.25;
        assert_eq!(bubble.resting_scale(), Vec3::splat(0.1));
    }

    #[test]
    fn test_tint_follows_owner() {
        let mut bubble = create_bubble();
        assert_eq!(bubble.tint(), Tint::Neutral);
        bubble.last_hitter = Some(Player::PlayerA);
        assert_eq!(bubble.tint(), Tint::Red);
        bubble.last_hitter = Some(Player::PlayerB);
        assert_eq!(bubble.snapshot().tint, Tint::Blue);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::PlayerA.opponent(), Player::PlayerB);
        assert_eq!(Player::PlayerB.opponent(), Player::PlayerA);
    }
}
