//! Hex Bounce entry point
//!
//! Loads the startup config and runs the frame loop against the headless
//! presenter until it requests close.

use hex_bounce::platform::HeadlessPresenter;
use hex_bounce::sim::SimState;
use hex_bounce::{SimConfig, run};

fn main() {
    env_logger::init();
    log::info!("Hex Bounce starting...");

    let config = match SimConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Bad config ({}), falling back to defaults", e);
            SimConfig::default()
        }
    };

    let mut state = match SimState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Config rejected ({}), falling back to defaults", e);
            SimState::default()
        }
    };
    log::info!(
        "Hexagon r={} at ({}, {}) turning {}°/frame; ball r={} at ({}, {})",
        state.container.radius,
        state.container.center.x,
        state.container.center.y,
        state.container.angular_velocity,
        state.body.radius,
        state.body.pos.x,
        state.body.pos.y
    );

    let mut presenter = HeadlessPresenter::new(config.max_frames);
    let summary = run(&mut state, &mut presenter, config.target_fps);

    log::info!(
        "Finished: {} frames, {} edge bounces, {} screen bounces, {:.1} fps",
        summary.frames,
        summary.edge_bounces,
        summary.screen_bounces,
        presenter.fps().unwrap_or(0.0)
    );
}
