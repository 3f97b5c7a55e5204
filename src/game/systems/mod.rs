pub mod buoyancy;
pub mod collision;
pub mod hazards;
pub mod hot_air;
pub mod ownership;
pub mod physics;
pub mod scale;
pub mod squish;
pub mod vents;
