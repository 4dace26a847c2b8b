// ================================
// src/main.rs
// ================================
use anyhow::{Context, Result};
use fuzzy_drive::{SimConfig, Simulation};
use log::{info, warn};
use tokio::time::{self, Duration, MissedTickBehavior};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::load().context("failed to load simulation config")?;
    if config.debug_mode {
        info!("=== Loaded Parameters ===");
        info!("{:#?}", config);
    }

    let mut simulation = Simulation::new(&config)?;
    let mut interval = time::interval(Duration::from_secs_f64(config.tick_period_secs()));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        "Fuzzy drive running at {} Hz, press Ctrl-C to stop",
        config.tick_rate_hz
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = &mut shutdown => {
                if let Err(e) = result {
                    warn!("Ctrl-C handler failed: {}", e);
                }
                info!("Shutdown requested");
                break;
            }
            _ = interval.tick() => {
                let outcome = simulation.advance();
                let telemetry = &outcome.telemetry;

                if telemetry.tick % config.log_every_ticks == 0 {
                    info!("{}", telemetry);
                }
                if outcome.left_arena {
                    warn!(
                        "Vehicle left the arena at ({:.1}, {:.1})",
                        telemetry.pose.x, telemetry.pose.y
                    );
                }
                if outcome.finished {
                    info!("Reached max_ticks = {}", telemetry.tick);
                    break;
                }
            }
        }
    }

    let pose = simulation.vehicle().pose;
    info!(
        "Stopped after {} ticks at ({:.1}, {:.1}) heading {:.1}",
        simulation.tick(),
        pose.x,
        pose.y,
        pose.heading_deg
    );
    Ok(())
}
