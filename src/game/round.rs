//! Round orchestration
//!
//! Owns everything that lives for one match and runs a fixed step: the
//! environment timers, player movement, heat-zone overlap, the bubble step,
//! position integration, and contact dispatch.

use rand::Rng;
use tracing::info;

use crate::config::{BubbleConfig, ConfigError, SimConfig};
use crate::game::constants::court::{
    HALF_LENGTH, HALF_WIDTH, SERVE_HEIGHT, SPIKE_COOLDOWN, SPIKE_LIFETIME, SPIKE_RADIUS,
    VENT_ACTIVE_DURATION, VENT_COOLDOWN,
};
use crate::game::court::Court;
use crate::game::lives::{check_match_end, determine_result, LifeBoard, MatchResult};
use crate::game::state::Bubble;
use crate::game::systems::collision::ContactResponse;
use crate::game::systems::hazards::{HazardEvent, HazardSpawner};
use crate::game::systems::vents::{HeatVent, VentCycle, VentEvent};
use crate::util::vec3::Vec3;

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    Contact(ContactResponse),
    Vent(VentEvent),
    Hazard(HazardEvent),
    MatchOver(MatchResult),
}

pub struct Round {
    pub bubble: Bubble,
    pub court: Court,
    pub lives: LifeBoard,
    pub vents: VentCycle,
    pub hazards: HazardSpawner,
    elapsed: f32,
    time_limit: f32,
    result: Option<MatchResult>,
}

impl Round {
    pub fn new(bubble_config: BubbleConfig, sim: &SimConfig) -> Result<Self, ConfigError> {
        sim.validate()?;
        let serve = Vec3::new(-HALF_LENGTH * 0.5, SERVE_HEIGHT, 0.0);
        Ok(Self {
            bubble: Bubble::new(bubble_config, serve)?,
            court: Court::new(),
            lives: LifeBoard::new(sim.lives_per_player),
            vents: VentCycle::new(default_vents(), VENT_ACTIVE_DURATION, VENT_COOLDOWN),
            hazards: HazardSpawner::new(
                Vec3::new(-HALF_LENGTH * 0.75, 1.0, -HALF_WIDTH * 0.8),
                Vec3::new(HALF_LENGTH * 0.75, 8.0, HALF_WIDTH * 0.8),
                SPIKE_RADIUS,
                SPIKE_LIFETIME,
                SPIKE_COOLDOWN,
            ),
            elapsed: 0.0,
            time_limit: sim.time_limit,
            result: None,
        })
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Run one fixed step. Does nothing once the match is over.
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        if self.result.is_some() {
            return events;
        }
        self.elapsed += dt;

        events.extend(self.vents.update(dt).into_iter().map(RoundEvent::Vent));
        events.extend(self.hazards.update(dt, rng).into_iter().map(RoundEvent::Hazard));

        self.court.move_players(&self.bubble, dt);

        if self.vents.in_heat_zone(self.bubble.position) {
            self.bubble.on_heat_zone_overlap(dt);
        }

        let probe = self.court.ground_probe(&self.bubble);
        self.bubble.step(&probe, dt);
        self.court.integrate(&mut self.bubble, dt);

        let contacts = self
            .court
            .detect_contacts(&self.bubble, self.hazards.spike(), rng);
        for contact in &contacts {
            if let Some(response) = self.bubble.on_contact_begin(contact, &mut self.lives) {
                events.push(RoundEvent::Contact(response));
            }
        }

        if let Some(reason) = check_match_end(&self.lives, self.elapsed, self.time_limit) {
            let result = determine_result(&self.lives, reason, self.elapsed);
            info!(
                "Match over ({:?}) after {:.1}s, winner: {:?}",
                reason, self.elapsed, result.winner
            );
            self.result = Some(result.clone());
            events.push(RoundEvent::MatchOver(result));
        }

        events
    }

    /// Reset every collaborator to round-start state
    pub fn restart(&mut self) {
        self.bubble.reset();
        self.court.reset();
        self.lives.reset();
        self.vents.reset();
        self.hazards.reset();
        self.elapsed = 0.0;
        self.result = None;
        info!("Round restarted");
    }
}

/// Three floor vents: one per half and one under the net
fn default_vents() -> Vec<HeatVent> {
    [-HALF_LENGTH * 0.5, 0.0, HALF_LENGTH * 0.5]
        .into_iter()
        .map(|x| HeatVent {
            min: Vec3::new(x - 2.0, 0.0, -3.0),
            max: Vec3::new(x + 2.0, 15.0, 3.0),
        })
        .collect()
}
