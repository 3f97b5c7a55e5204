//! Bubble Volley physics core
//!
//! The behaviour of the single floating, shrinking, squishing bubble in a
//! two-player bubble volleyball match: force integration, per-category
//! collision responses, ownership for scoring, and the hot-air accumulator.
//! Collision detection and rigid-body integration belong to the host engine;
//! `game::court` is a minimal headless stand-in used by the binary and benches.

pub mod config;
pub mod game;
pub mod util;

pub use config::{BubbleConfig, ConfigError, SimConfig};
pub use game::state::{Bubble, BubbleSnapshot, Player, Tint};
pub use game::systems::buoyancy::{GroundProbe, ProbeError};
pub use game::systems::collision::{ColliderTag, ContactCategory, ContactEvent, ContactResponse};
pub use game::systems::ownership::LifeSink;
pub use util::vec3::Vec3;
