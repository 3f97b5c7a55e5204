/// Simulation step constants
pub mod physics {
    /// Fixed step rate in Hz
    pub const TICK_RATE: u32 = 50;
    /// Delta time per step in seconds
    pub const DT: f32 = 1.0 / 50.0;
    /// Offset added to impact speeds inside every bounce square root,
    /// so a resting bubble still gets a usable bounce
    pub const IMPACT_SPEED_OFFSET: f32 = 5.0;
}

/// Player hit constants
pub mod hit {
    /// Angle (degrees) between world-up and the hit direction below which a hit
    /// counts as coming from directly underneath
    pub const BELOW_ANGLE_DEG: f32 = 45.0;
    /// Extra force multiplier for hits from directly underneath
    pub const BELOW_MULTIPLIER: f32 = 1.5;
}

/// Squish visual constants
pub mod squish {
    /// Distance under which the visual scale snaps back to the resting scale
    pub const SNAP_EPSILON: f32 = 0.01;
}

/// Default tuning, matching the richest shipped bubble setup
pub mod defaults {
    pub const GRAVITY: f32 = -15.0;
    pub const AIR_RESISTANCE: f32 = 0.997;
    pub const FLOAT_GRACE: f32 = 0.5;
    /// Upward acceleration applied while the bubble is falling
    pub const DESCENT_ASSIST: f32 = 2.0;
    /// Downward probe length for the "touching ground" check
    pub const GROUND_PROBE_DISTANCE: f32 = 1.1;

    pub const GROUND_BOUNCE_FORCE: f32 = 45.0;
    pub const PLAYER_IMPACT_FORCE: f32 = 25.0;
    pub const PLAYER_JUMP_MULTIPLIER: f32 = 4.0;
    pub const MAX_BOUNCE_VELOCITY: f32 = 40.0;
    pub const HORIZONTAL_BOUNCE_FACTOR: f32 = 1.0;
    pub const BOUNCE_DAMPING: f32 = 0.98;
    pub const UPWARD_BIAS: f32 = 1.5;

    pub const SQUISH_AMOUNT: f32 = 0.3;
    pub const SQUISH_RECOVERY_SPEED: f32 = 8.0;

    pub const START_SIZE: f32 = 10.0;
    pub const SHRINK_DURATION: f32 = 40.0;
    pub const MIN_SIZE: f32 = 0.1;

    pub const HAZARD_HORIZONTAL_FORCE: f32 = 12.0;
    pub const HAZARD_VERTICAL_FORCE: f32 = 18.0;
    pub const HAZARD_SHRINK_FACTOR: f32 = 0.5;
    pub const HAZARD_COOLDOWN: f32 = 1.0;

    pub const HOT_AIR_RISE_RATE: f32 = 3.0;
    pub const HOT_AIR_FALL_RATE: f32 = 1.5;
    pub const MAX_HOT_AIR_FORCE: f32 = 30.0;
}

/// Match constants
pub mod rules {
    /// Lives each player starts a match with
    pub const LIVES_PER_PLAYER: u32 = 3;
    /// Headless match time limit in seconds
    pub const ROUND_TIME_LIMIT: f32 = 180.0;
}

/// Court layout used by the headless runner
pub mod court {
    /// Half extent of the court along X (the net sits at x = 0)
    pub const HALF_LENGTH: f32 = 20.0;
    /// Half extent of the court along Z
    pub const HALF_WIDTH: f32 = 10.0;
    /// Height the bubble is served from
    pub const SERVE_HEIGHT: f32 = 12.0;
    /// Player body radius
    pub const PLAYER_RADIUS: f32 = 1.0;
    /// Player run speed along the court
    pub const PLAYER_SPEED: f32 = 9.0;
    /// Upward velocity of a jumping player at contact
    pub const PLAYER_JUMP_SPEED: f32 = 8.0;
    /// Spike radius
    pub const SPIKE_RADIUS: f32 = 0.75;

    /// Seconds each heat vent stays active
    pub const VENT_ACTIVE_DURATION: f32 = 2.0;
    /// Idle seconds between vent activations
    pub const VENT_COOLDOWN: f32 = 3.0;
    /// Seconds a spike stays on court
    pub const SPIKE_LIFETIME: f32 = 6.0;
    /// Idle seconds between spikes
    pub const SPIKE_COOLDOWN: f32 = 8.0;
}
