//! Headless court
//!
//! A minimal stand-in for the physics engine: flat ground at `y = 0`, two
//! scripted players confined to their halves (the net sits at `x = 0`), and
//! an optional spike. It integrates the bubble's position, answers the ground
//! probe and produces contact-begin events. It never touches the bubble's
//! velocity.

use rand::Rng;
use smallvec::SmallVec;

use crate::game::constants::court::{
    HALF_LENGTH, HALF_WIDTH, PLAYER_JUMP_SPEED, PLAYER_RADIUS, PLAYER_SPEED,
};
use crate::game::state::{Bubble, Player};
use crate::game::systems::buoyancy::FlatGround;
use crate::game::systems::collision::{ColliderTag, ContactEvent};
use crate::game::systems::hazards::Spike;
use crate::util::vec3::Vec3;

/// Height of a jumping player's head above the ground
const HEAD_HEIGHT: f32 = 2.5;
/// Gap the bubble must clear before a new ground contact can begin
const GROUND_RELEASE: f32 = 0.05;
/// Range for how far behind the bubble a player lines up before a hit
const STANCE_RANGE: std::ops::Range<f32> = 0.3..3.0;

/// Scripted player that chases the bubble along its own half
#[derive(Debug, Clone)]
pub struct CourtPlayer {
    pub player: Player,
    pub position: Vec3,
    /// -1 for the negative-x half, +1 for the positive-x half
    side: f32,
    stance_offset: f32,
    touching: bool,
}

impl CourtPlayer {
    fn new(player: Player) -> Self {
        let side = match player {
            Player::PlayerA => -1.0,
            Player::PlayerB => 1.0,
        };
        Self {
            player,
            position: Self::home(side),
            side,
            stance_offset: 1.0,
            touching: false,
        }
    }

    fn home(side: f32) -> Vec3 {
        Vec3::new(side * HALF_LENGTH * 0.5, PLAYER_RADIUS, 0.0)
    }

    fn tag(&self) -> ColliderTag {
        match self.player {
            Player::PlayerA => ColliderTag::PlayerA,
            Player::PlayerB => ColliderTag::PlayerB,
        }
    }

    fn head(&self) -> Vec3 {
        Vec3::new(self.position.x, HEAD_HEIGHT, self.position.z)
    }

    /// Run toward a spot just behind the bubble, staying on our half
    fn chase(&mut self, target: Vec3, dt: f32) {
        let (min_x, max_x) = if self.side < 0.0 {
            (-HALF_LENGTH, -PLAYER_RADIUS)
        } else {
            (PLAYER_RADIUS, HALF_LENGTH)
        };
        let goal = Vec3::new(
            (target.x + self.side * self.stance_offset).clamp(min_x, max_x),
            PLAYER_RADIUS,
            target.z.clamp(-HALF_WIDTH, HALF_WIDTH),
        );
        let delta = goal - self.position;
        self.position += delta.clamp_length(PLAYER_SPEED * dt);
    }
}

#[derive(Debug, Clone)]
pub struct Court {
    pub players: [CourtPlayer; 2],
    ground_touching: bool,
    spike_touching: bool,
}

impl Default for Court {
    fn default() -> Self {
        Self::new()
    }
}

impl Court {
    pub fn new() -> Self {
        Self {
            players: [
                CourtPlayer::new(Player::PlayerA),
                CourtPlayer::new(Player::PlayerB),
            ],
            ground_touching: false,
            spike_touching: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Ground probe measured from the bubble's lowest point
    pub fn ground_probe(&self, bubble: &Bubble) -> FlatGround {
        FlatGround {
            height: bubble.radius(),
        }
    }

    pub fn move_players(&mut self, bubble: &Bubble, dt: f32) {
        for player in &mut self.players {
            player.chase(bubble.position, dt);
        }
    }

    /// Integrate the bubble's position; the ground is solid
    pub fn integrate(&self, bubble: &mut Bubble, dt: f32) {
        let radius = bubble.radius();
        let mut position = bubble.position + bubble.velocity * dt;
        if position.y < radius {
            position.y = radius;
        }
        bubble.sync_position(position);
    }

    /// Contact-begin events for this step, at most one per collider
    pub fn detect_contacts<R: Rng>(
        &mut self,
        bubble: &Bubble,
        spike: Option<&Spike>,
        rng: &mut R,
    ) -> SmallVec<[ContactEvent; 4]> {
        let mut contacts = SmallVec::new();
        let center = bubble.position;
        let radius = bubble.radius();

        for player in &mut self.players {
            let head = player.head();
            let overlapping = head.distance_to(center) <= radius + PLAYER_RADIUS;
            if overlapping && !player.touching {
                let toward_player = (head - center).normalize();
                contacts.push(ContactEvent::new(
                    player.tag(),
                    center + toward_player * radius,
                    -toward_player,
                    Vec3::new(0.0, PLAYER_JUMP_SPEED, 0.0) - bubble.velocity,
                ));
                player.stance_offset = rng.gen_range(STANCE_RANGE);
            }
            player.touching = overlapping;
        }

        let bottom = center.y - radius;
        if bottom <= 0.0 {
            if !self.ground_touching {
                contacts.push(ContactEvent::new(
                    ColliderTag::Ground,
                    Vec3::new(center.x, 0.0, center.z),
                    Vec3::UP,
                    -bubble.velocity,
                ));
            }
            self.ground_touching = true;
        } else if bottom > GROUND_RELEASE {
            self.ground_touching = false;
        }

        let overlapping_spike = spike.filter(|s| s.position.distance_to(center) <= radius + s.radius);
        match overlapping_spike {
            Some(s) if !self.spike_touching => {
                let normal = (center - s.position).normalize();
                contacts.push(ContactEvent::new(
                    ColliderTag::Hazard,
                    s.position + normal * s.radius,
                    normal,
                    -bubble.velocity,
                ));
                self.spike_touching = true;
            }
            Some(_) => {}
            None => self.spike_touching = false,
        }

        contacts
    }
}
