//! Spike spawner
//!
//! Alternates between an idle cooldown and a single live spike placed at a
//! random point inside the configured bounds.

use rand::Rng;

use crate::util::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spike {
    pub position: Vec3,
    pub radius: f32,
}

/// Spawner transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HazardEvent {
    Spawned { position: Vec3 },
    Despawned { position: Vec3 },
}

#[derive(Debug, Clone)]
pub struct HazardSpawner {
    bounds_min: Vec3,
    bounds_max: Vec3,
    radius: f32,
    lifetime: f32,
    cooldown: f32,
    timer: f32,
    spike: Option<Spike>,
}

impl HazardSpawner {
    pub fn new(bounds_min: Vec3, bounds_max: Vec3, radius: f32, lifetime: f32, cooldown: f32) -> Self {
        Self {
            bounds_min,
            bounds_max,
            radius,
            lifetime,
            cooldown,
            timer: 0.0,
            spike: None,
        }
    }

    /// Advance the spawner timer
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Vec<HazardEvent> {
        let mut events = Vec::new();
        self.timer += dt;

        match self.spike {
            Some(spike) if self.timer >= self.lifetime => {
                events.push(HazardEvent::Despawned {
                    position: spike.position,
                });
                self.spike = None;
                self.timer = 0.0;
            }
            None if self.timer >= self.cooldown => {
                let position = self.random_position(rng);
                events.push(HazardEvent::Spawned { position });
                self.spike = Some(Spike {
                    position,
                    radius: self.radius,
                });
                self.timer = 0.0;
            }
            _ => {}
        }

        events
    }

    pub fn spike(&self) -> Option<&Spike> {
        self.spike.as_ref()
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.spike = None;
    }

    fn random_position<R: Rng>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            sample(rng, self.bounds_min.x, self.bounds_max.x),
            sample(rng, self.bounds_min.y, self.bounds_max.y),
            sample(rng, self.bounds_min.z, self.bounds_max.z),
        )
    }
}

fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
