use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::game::constants::{defaults, physics, rules};

/// Configuration errors, raised eagerly at construction time
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be positive (got {1})")]
    NotPositive(&'static str, f32),
    #[error("{0} must not be negative (got {1})")]
    Negative(&'static str, f32),
    #[error("{name} must be within {range} (got {value})")]
    OutOfRange {
        name: &'static str,
        range: &'static str,
        value: f32,
    },
    #[error("min_size ({min}) must be smaller than start_size ({start})")]
    SizeOrder { min: f32, start: f32 },
    #[error("{0} must be at least 1")]
    Zero(&'static str),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid tuning file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bubble tuning parameters, immutable per bubble instance
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    /// Downward acceleration once the float grace has run out (negative = down)
    pub gravity: f32,
    /// Per-step velocity retention factor
    pub air_resistance: f32,
    /// Seconds after a bounce during which gravity is withheld
    pub float_grace: f32,
    /// Upward acceleration applied whenever the bubble is moving down
    pub descent_assist: f32,
    /// Length of the downward ground probe
    pub ground_probe_distance: f32,

    pub ground_bounce_force: f32,
    pub player_impact_force: f32,
    pub player_jump_multiplier: f32,
    pub max_bounce_velocity: f32,
    /// Scales the horizontal part of a player's hit direction
    pub horizontal_bounce_factor: f32,
    /// Fraction of horizontal velocity kept through a bounce
    pub bounce_damping: f32,
    pub upward_bias: f32,

    pub squish_amount: f32,
    pub squish_recovery_speed: f32,

    pub start_size: f32,
    pub shrink_duration: f32,
    pub min_size: f32,

    pub hazard_horizontal_force: f32,
    pub hazard_vertical_force: f32,
    /// Multiplier applied to the bubble's size on every spike hit
    pub hazard_shrink_factor: f32,
    pub hazard_cooldown: f32,
    /// When set, spike hits are ignored while the hazard cooldown runs
    pub hazard_immunity: bool,

    pub hot_air_rise_rate: f32,
    pub hot_air_fall_rate: f32,
    pub max_hot_air_force: f32,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            gravity: defaults::GRAVITY,
            air_resistance: defaults::AIR_RESISTANCE,
            float_grace: defaults::FLOAT_GRACE,
            descent_assist: defaults::DESCENT_ASSIST,
            ground_probe_distance: defaults::GROUND_PROBE_DISTANCE,
            ground_bounce_force: defaults::GROUND_BOUNCE_FORCE,
            player_impact_force: defaults::PLAYER_IMPACT_FORCE,
            player_jump_multiplier: defaults::PLAYER_JUMP_MULTIPLIER,
            max_bounce_velocity: defaults::MAX_BOUNCE_VELOCITY,
            horizontal_bounce_factor: defaults::HORIZONTAL_BOUNCE_FACTOR,
            bounce_damping: defaults::BOUNCE_DAMPING,
            upward_bias: defaults::UPWARD_BIAS,
            squish_amount: defaults::SQUISH_AMOUNT,
            squish_recovery_speed: defaults::SQUISH_RECOVERY_SPEED,
            start_size: defaults::START_SIZE,
            shrink_duration: defaults::SHRINK_DURATION,
            min_size: defaults::MIN_SIZE,
            hazard_horizontal_force: defaults::HAZARD_HORIZONTAL_FORCE,
            hazard_vertical_force: defaults::HAZARD_VERTICAL_FORCE,
            hazard_shrink_factor: defaults::HAZARD_SHRINK_FACTOR,
            hazard_cooldown: defaults::HAZARD_COOLDOWN,
            hazard_immunity: false,
            hot_air_rise_rate: defaults::HOT_AIR_RISE_RATE,
            hot_air_fall_rate: defaults::HOT_AIR_FALL_RATE,
            max_hot_air_force: defaults::MAX_HOT_AIR_FORCE,
        }
    }
}

impl BubbleConfig {
    /// Parse a (possibly partial) TOML tuning table and validate it
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a tuning file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject tuning that would misbehave at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ground_bounce_force", self.ground_bounce_force)?;
        positive("player_impact_force", self.player_impact_force)?;
        positive("player_jump_multiplier", self.player_jump_multiplier)?;
        positive("max_bounce_velocity", self.max_bounce_velocity)?;
        positive("squish_recovery_speed", self.squish_recovery_speed)?;
        positive("start_size", self.start_size)?;
        positive("shrink_duration", self.shrink_duration)?;
        positive("min_size", self.min_size)?;

        non_negative("float_grace", self.float_grace)?;
        non_negative("descent_assist", self.descent_assist)?;
        non_negative("ground_probe_distance", self.ground_probe_distance)?;
        non_negative("horizontal_bounce_factor", self.horizontal_bounce_factor)?;
        non_negative("upward_bias", self.upward_bias)?;
        non_negative("hazard_horizontal_force", self.hazard_horizontal_force)?;
        non_negative("hazard_vertical_force", self.hazard_vertical_force)?;
        non_negative("hazard_cooldown", self.hazard_cooldown)?;
        non_negative("hot_air_rise_rate", self.hot_air_rise_rate)?;
        non_negative("hot_air_fall_rate", self.hot_air_fall_rate)?;
        non_negative("max_hot_air_force", self.max_hot_air_force)?;

        if !(self.gravity <= 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "gravity",
                range: "(-inf, 0]",
                value: self.gravity,
            });
        }
        if !(self.air_resistance > 0.0 && self.air_resistance <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "air_resistance",
                range: "(0, 1]",
                value: self.air_resistance,
            });
        }
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return Err(ConfigError::OutOfRange {
                name: "bounce_damping",
                range: "[0, 1]",
                value: self.bounce_damping,
            });
        }
        if !(0.0..1.0).contains(&self.squish_amount) {
            return Err(ConfigError::OutOfRange {
                name: "squish_amount",
                range: "[0, 1)",
                value: self.squish_amount,
            });
        }
        if !(self.hazard_shrink_factor > 0.0 && self.hazard_shrink_factor <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "hazard_shrink_factor",
                range: "(0, 1]",
                value: self.hazard_shrink_factor,
            });
        }
        if self.min_size >= self.start_size {
            return Err(ConfigError::SizeOrder {
                min: self.min_size,
                start: self.start_size,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name, value))
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(name, value))
    }
}

/// Headless runner configuration
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed step rate in Hz
    pub tick_rate: u32,
    /// Match time limit in seconds
    pub time_limit: f32,
    /// Lives each player starts with
    pub lives_per_player: u32,
    /// RNG seed for spikes and player jitter
    pub seed: u64,
    /// Optional bubble tuning file
    pub tuning_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: physics::TICK_RATE,
            time_limit: rules::ROUND_TIME_LIMIT,
            lives_per_player: rules::LIVES_PER_PLAYER,
            seed: 7,
            tuning_path: None,
        }
    }
}

impl SimConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(rate) = std::env::var("TICK_RATE") {
            match rate.parse::<u32>() {
                Ok(parsed) if (1..=1000).contains(&parsed) => config.tick_rate = parsed,
                Ok(_) => tracing::warn!("TICK_RATE must be 1-1000, using default"),
                Err(_) => tracing::warn!("Invalid TICK_RATE '{}', using default", rate),
            }
        }

        if let Ok(limit) = std::env::var("TIME_LIMIT") {
            match limit.parse::<f32>() {
                Ok(parsed) if parsed > 0.0 => config.time_limit = parsed,
                Ok(_) => tracing::warn!("TIME_LIMIT must be > 0, using default"),
                Err(_) => tracing::warn!("Invalid TIME_LIMIT '{}', using default", limit),
            }
        }

        if let Ok(lives) = std::env::var("LIVES") {
            match lives.parse::<u32>() {
                Ok(parsed) if parsed > 0 => config.lives_per_player = parsed,
                Ok(_) => tracing::warn!("LIVES must be > 0, using default"),
                Err(_) => tracing::warn!("Invalid LIVES '{}', using default", lives),
            }
        }

        if let Ok(seed) = std::env::var("SEED") {
            if let Ok(parsed) = seed.parse() {
                config.seed = parsed;
            } else {
                tracing::warn!("Invalid SEED '{}', using default", seed);
            }
        }

        if let Ok(path) = std::env::var("BUBBLE_TUNING") {
            config.tuning_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Zero("tick_rate"));
        }
        if self.lives_per_player == 0 {
            return Err(ConfigError::Zero("lives_per_player"));
        }
        positive("time_limit", self.time_limit)
    }

    /// Step length for the configured tick rate
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Bubble tuning from `tuning_path`, or defaults
    pub fn bubble_config(&self) -> Result<BubbleConfig, ConfigError> {
        match &self.tuning_path {
            Some(path) => BubbleConfig::load(path),
            None => Ok(BubbleConfig::default()),
        }
    }
}
