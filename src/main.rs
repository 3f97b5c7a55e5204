use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bubble_volley::config::SimConfig;
use bubble_volley::game::round::{Round, RoundEvent};
use bubble_volley::game::systems::hazards::HazardEvent;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Bubble Volley v{}", env!("CARGO_PKG_VERSION"));

    let sim = SimConfig::load_or_default();
    sim.validate().context("invalid simulation config")?;
    info!(
        "Configuration loaded: {} Hz, {} lives, {:.0}s limit, seed {}",
        sim.tick_rate, sim.lives_per_player, sim.time_limit, sim.seed
    );

    let tuning = sim.bubble_config().context("failed to load bubble tuning")?;
    let mut round = Round::new(tuning, &sim)?;
    let mut rng = StdRng::seed_from_u64(sim.seed);
    let dt = sim.dt();

    let result = 'run: loop {
        for event in round.tick(dt, &mut rng) {
            match event {
                RoundEvent::Contact(response) => debug!(
                    "{:.2}s {:?} -> {:.1} m/s",
                    round.elapsed(),
                    response.category,
                    response.velocity_after.length()
                ),
                RoundEvent::Vent(vent) => debug!("{:.2}s {:?}", round.elapsed(), vent),
                RoundEvent::Hazard(HazardEvent::Spawned { position }) => info!(
                    "Spike appeared at ({:.1}, {:.1}, {:.1})",
                    position.x, position.y, position.z
                ),
                RoundEvent::Hazard(HazardEvent::Despawned { .. }) => debug!("Spike removed"),
                RoundEvent::MatchOver(result) => break 'run result,
            }
        }
    };

    let summary = serde_json::json!({
        "result": result,
        "bubble": round.bubble.snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
