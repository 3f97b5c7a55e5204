//! Heat vent cycle
//!
//! Heat vents take turns: one vent is live for `active_duration`, then every
//! vent is idle for `cooldown`, then the next vent in order goes live.

use crate::util::vec3::Vec3;

/// Axis-aligned heat volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatVent {
    pub min: Vec3,
    pub max: Vec3,
}

impl HeatVent {
    pub fn contains(&self, point: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }
}

/// Vent transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VentEvent {
    Activated { index: usize },
    Deactivated { index: usize },
}

#[derive(Debug, Clone)]
pub struct VentCycle {
    vents: Vec<HeatVent>,
    active_duration: f32,
    cooldown: f32,
    timer: f32,
    current: usize,
    active: bool,
}

impl VentCycle {
    pub fn new(vents: Vec<HeatVent>, active_duration: f32, cooldown: f32) -> Self {
        Self {
            vents,
            active_duration,
            cooldown,
            timer: 0.0,
            current: 0,
            active: false,
        }
    }

    /// Advance the cycle timer
    pub fn update(&mut self, dt: f32) -> Vec<VentEvent> {
        let mut events = Vec::new();
        if self.vents.is_empty() {
            return events;
        }

        self.timer += dt;

        if self.active && self.timer >= self.active_duration {
            events.push(VentEvent::Deactivated {
                index: self.current,
            });
            self.current = (self.current + 1) % self.vents.len();
            self.active = false;
            self.timer = 0.0;
        } else if !self.active && self.timer >= self.cooldown {
            events.push(VentEvent::Activated {
                index: self.current,
            });
            self.active = true;
            self.timer = 0.0;
        }

        events
    }

    pub fn active_vent(&self) -> Option<&HeatVent> {
        if self.active {
            self.vents.get(self.current)
        } else {
            None
        }
    }

    /// Whether `point` is inside the live vent
    pub fn in_heat_zone(&self, point: Vec3) -> bool {
        self.active_vent().is_some_and(|vent| vent.contains(point))
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.current = 0;
        self.active = false;
    }
}
