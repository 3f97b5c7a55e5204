//! Collision response engine
//!
//! Classifies contact-begin events by the tags on the other collider and
//! rewrites the bubble's velocity with the policy for that category:
//!
//! - **Player**: a damped bounce away from the contact point, boosted for
//!   jumping hits and again for hits from directly underneath.
//! - **Ground**: a vertical rebound that keeps damped horizontal momentum and
//!   consumes ownership (the owner loses a life).
//! - **Hazard**: a one-off impulse off the spike plus a permanent shrink.
//!
//! Every categorized contact clamps speed to `max_bounce_velocity`, records
//! the bounce time for the fall controller, and squishes the bubble once.

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::config::BubbleConfig;
use crate::game::constants::hit::{BELOW_ANGLE_DEG, BELOW_MULTIPLIER};
use crate::game::constants::physics::IMPACT_SPEED_OFFSET;
use crate::game::state::{Bubble, Player};
use crate::game::systems::ownership::{self, LifeSink};
use crate::game::systems::squish;
use crate::util::vec3::Vec3;

/// Tag carried by a collider in the physics scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderTag {
    PlayerA,
    PlayerB,
    Ground,
    Hazard,
    /// Anything this crate has no response for (walls, props)
    Other,
}

pub type ColliderTags = SmallVec<[ColliderTag; 4]>;

/// Response category for a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactCategory {
    Player(Player),
    Ground,
    Hazard,
}

/// Contact-begin callback payload from the physics engine
#[derive(Debug, Clone)]
pub struct ContactEvent {
    pub tags: ColliderTags,
    /// World-space contact point
    pub point: Vec3,
    /// Contact normal pointing away from the other collider
    pub normal: Vec3,
    /// Velocity of the other body relative to the bubble
    pub relative_velocity: Vec3,
}

impl ContactEvent {
    pub fn new(tag: ColliderTag, point: Vec3, normal: Vec3, relative_velocity: Vec3) -> Self {
        Self {
            tags: smallvec![tag],
            point,
            normal,
            relative_velocity,
        }
    }

    pub fn category(&self) -> Option<ContactCategory> {
        classify(&self.tags)
    }
}

/// Pick exactly one category: Player > Ground > Hazard
pub fn classify(tags: &[ColliderTag]) -> Option<ContactCategory> {
    if tags.contains(&ColliderTag::PlayerA) {
        Some(ContactCategory::Player(Player::PlayerA))
    } else if tags.contains(&ColliderTag::PlayerB) {
        Some(ContactCategory::Player(Player::PlayerB))
    } else if tags.contains(&ColliderTag::Ground) {
        Some(ContactCategory::Ground)
    } else if tags.contains(&ColliderTag::Hazard) {
        Some(ContactCategory::Hazard)
    } else {
        None
    }
}

/// Outcome of a handled contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResponse {
    pub category: ContactCategory,
    pub velocity_before: Vec3,
    pub velocity_after: Vec3,
    /// Player reported to the life sink by this contact
    pub life_lost: Option<Player>,
}

/// Rebound speed for a force and impact speed: sqrt(2 * F * (v + offset))
#[inline]
pub fn bounce_speed(force: f32, impact_speed: f32) -> f32 {
    (2.0 * force * (impact_speed + IMPACT_SPEED_OFFSET)).max(0.0).sqrt()
}

/// Player hit force after jump and hit-from-below multipliers
pub fn player_bounce_force(
    config: &BubbleConfig,
    relative_velocity: Vec3,
    hit_direction: Vec3,
) -> f32 {
    let mut force = config.player_impact_force;
    if relative_velocity.y > 0.0 {
        force *= config.player_jump_multiplier;
        if Vec3::UP.angle_deg(hit_direction) < BELOW_ANGLE_DEG {
            force *= BELOW_MULTIPLIER;
        }
    }
    force
}

/// Hit direction with its horizontal part scaled, biased upward, normalized
pub fn player_bounce_direction(config: &BubbleConfig, hit_direction: Vec3) -> Vec3 {
    let lateral = hit_direction.horizontal() * config.horizontal_bounce_factor;
    (lateral + Vec3::UP * (hit_direction.y + config.upward_bias)).normalize()
}

/// Outgoing velocity after a player strike
pub fn player_bounce_velocity(
    config: &BubbleConfig,
    velocity: Vec3,
    center: Vec3,
    contact_point: Vec3,
    relative_velocity: Vec3,
) -> Vec3 {
    let hit_direction = (center - contact_point).normalize();
    let force = player_bounce_force(config, relative_velocity, hit_direction);
    let direction = player_bounce_direction(config, hit_direction);

    let mut bounced = velocity.horizontal() * config.bounce_damping
        + direction * bounce_speed(force, velocity.y.abs());

    // Vertical floor driven by the player's impact speed
    let min_y = bounce_speed(force, relative_velocity.length());
    bounced.y = bounced.y.max(min_y);

    bounced.clamp_length(config.max_bounce_velocity)
}

/// Outgoing velocity after hitting the ground
pub fn ground_bounce_velocity(config: &BubbleConfig, velocity: Vec3) -> Vec3 {
    let bounced = velocity.horizontal() * config.bounce_damping
        + Vec3::UP * bounce_speed(config.ground_bounce_force, velocity.y.abs());
    bounced.clamp_length(config.max_bounce_velocity)
}

/// One-off impulse away from a spike
pub fn hazard_impulse(config: &BubbleConfig, contact_normal: Vec3) -> Vec3 {
    let direction = (contact_normal + Vec3::UP).normalize();
    direction.horizontal() * config.hazard_horizontal_force
        + Vec3::UP * config.hazard_vertical_force
}

/// Permanent size multiplier after one more spike hit
pub fn shrunk_hazard_scale(config: &BubbleConfig, hazard_scale: f32) -> f32 {
    // Below this ratio the min_size floor already dominates
    let floor = config.min_size / config.start_size;
    (hazard_scale * config.hazard_shrink_factor).max(floor)
}

/// Dispatch one contact-begin event. Returns `None` when the contact is ignored.
pub fn handle_contact(
    bubble: &mut Bubble,
    event: &ContactEvent,
    sink: &mut dyn LifeSink,
) -> Option<ContactResponse> {
    let Some(category) = event.category() else {
        debug!("Ignoring contact with untagged collider {:?}", event.tags);
        return None;
    };

    let velocity_before = bubble.velocity;
    let mut life_lost = None;

    match category {
        ContactCategory::Player(player) => {
            bubble.velocity = player_bounce_velocity(
                bubble.config(),
                bubble.velocity,
                bubble.position,
                event.point,
                event.relative_velocity,
            );
            ownership::record_hit(bubble, player);
        }
        ContactCategory::Ground => {
            bubble.velocity = ground_bounce_velocity(bubble.config(), bubble.velocity);
            life_lost = ownership::consume_on_ground(bubble, sink);
        }
        ContactCategory::Hazard => {
            if ownership::hazard_suppressed(bubble) {
                debug!("Spike contact ignored during hazard cooldown");
                return None;
            }
            let impulse = hazard_impulse(bubble.config(), event.normal);
            bubble.velocity =
                (bubble.velocity + impulse).clamp_length(bubble.config().max_bounce_velocity);
            bubble.hazard_scale = shrunk_hazard_scale(bubble.config(), bubble.hazard_scale);
            ownership::start_hazard_cooldown(bubble);
        }
    }

    bubble.last_bounce_time = bubble.round_time;
    squish::apply(bubble);

    debug!(
        "Contact {:?}: speed {:.2} -> {:.2}",
        category,
        velocity_before.length(),
        bubble.velocity.length()
    );

    Some(ContactResponse {
        category,
        velocity_before,
        velocity_after: bubble.velocity,
        life_lost,
    })
}

impl Bubble {
    /// Contact-begin callback from the physics engine
    pub fn on_contact_begin(
        &mut self,
        event: &ContactEvent,
        sink: &mut dyn LifeSink,
    ) -> Option<ContactResponse> {
        handle_contact(self, event, sink)
    }
}
