//! Ownership and hazard cooldown tracking
//!
//! The last player to strike the bubble owns it until the next ground contact,
//! which consumes ownership and reports a lost life for the owner.

use tracing::info;

use crate::game::state::{Bubble, Player};

/// Outbound interface to the life/score collaborator
pub trait LifeSink {
    fn life_lost(&mut self, player: Player);
}

/// Collects life-loss signals in order
impl LifeSink for Vec<Player> {
    fn life_lost(&mut self, player: Player) {
        self.push(player);
    }
}

/// Record a player strike
#[inline]
pub fn record_hit(bubble: &mut Bubble, player: Player) {
    bubble.last_hitter = Some(player);
}

/// Consume ownership on ground contact, signalling at most one lost life
pub fn consume_on_ground(bubble: &mut Bubble, sink: &mut dyn LifeSink) -> Option<Player> {
    let owner = bubble.last_hitter.take()?;
    info!("Bubble grounded while owned by {:?}, life lost", owner);
    sink.life_lost(owner);
    Some(owner)
}

/// Start (or restart) the hazard cooldown window
pub fn start_hazard_cooldown(bubble: &mut Bubble) {
    bubble.hazard_cooldown_active = true;
    bubble.hazard_cooldown_elapsed = 0.0;
}

/// Advance the hazard cooldown, clearing the flag once the window has passed
pub fn update_hazard_cooldown(bubble: &mut Bubble, dt: f32) {
    if !bubble.hazard_cooldown_active {
        return;
    }
    bubble.hazard_cooldown_elapsed += dt;
    if bubble.hazard_cooldown_elapsed >= bubble.config().hazard_cooldown {
        bubble.hazard_cooldown_active = false;
        bubble.hazard_cooldown_elapsed = 0.0;
    }
}

/// Whether a spike contact should be ignored right now
#[inline]
pub fn hazard_suppressed(bubble: &Bubble) -> bool {
    bubble.config().hazard_immunity && bubble.hazard_cooldown_active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BubbleConfig;
    use crate::game::constants::physics::DT;
    use crate::util::vec3::Vec3;

    fn create_bubble(config: BubbleConfig) -> Bubble {
        Bubble::new(config, Vec3::ZERO).unwrap()
    }

    #[test]
    fn test_ground_consumes_owner_once() {
        let mut bubble = create_bubble(BubbleConfig::default());
        let mut lost: Vec<Player> = Vec::new();

        record_hit(&mut bubble, Player::PlayerA);
        assert_eq!(consume_on_ground(&mut bubble, &mut lost), Some(Player::PlayerA));
        assert_eq!(bubble.last_hitter, None);

        assert_eq!(consume_on_ground(&mut bubble, &mut lost), None);
        assert_eq!(lost, vec![Player::PlayerA]);
    }

    #[test]
    fn test_latest_hitter_wins() {
        let mut bubble = create_bubble(BubbleConfig::default());
        let mut lost: Vec<Player> = Vec::new();
        record_hit(&mut bubble, Player::PlayerA);
        record_hit(&mut bubble, Player::PlayerB);
        consume_on_ground(&mut bubble, &mut lost);
        assert_eq!(lost, vec![Player::PlayerB]);
    }

    #[test]
    fn test_hazard_cooldown_times_out() {
        let config = BubbleConfig {
            hazard_cooldown: 0.5,
            ..BubbleConfig::default()
        };
        let mut bubble = create_bubble(config);
        start_hazard_cooldown(&mut bubble);
        assert!(bubble.hazard_cooldown_active);

        for _ in 0..10 {
            update_hazard_cooldown(&mut bubble, DT);
        }
        assert!(bubble.hazard_cooldown_active);

        for _ in 0..20 {
            update_hazard_cooldown(&mut bubble, DT);
        }
        assert!(!bubble.hazard_cooldown_active);
        assert_eq!(bubble.hazard_cooldown_elapsed, 0.0);
    }

    #[test]
    fn test_restart_resets_elapsed() {
        let mut bubble = create_bubble(BubbleConfig::default());
        start_hazard_cooldown(&mut bubble);
        update_hazard_cooldown(&mut bubble, 0.4);
        start_hazard_cooldown(&mut bubble);
        assert_eq!(bubble.hazard_cooldown_elapsed, 0.0);
    }

    #[test]
    fn test_suppression_requires_immunity() {
        let mut bubble = create_bubble(BubbleConfig::default());
        start_hazard_cooldown(&mut bubble);
        assert!(!hazard_suppressed(&bubble));

        let mut immune = create_bubble(BubbleConfig {
            hazard_immunity: true,
            ..BubbleConfig::default()
        });
        assert!(!hazard_suppressed(&immune));
        start_hazard_cooldown(&mut immune);
        assert!(hazard_suppressed(&immune));
    }
}
