//! Monte Carlo equity estimation for heads-up No-Limit Texas Hold-Em.
//!
//! Given two hole cards and any known board, [`simulation::Engine`] deals the
//! unknown cards at random, runs both 7-card pools through the
//! [`cards::Evaluator`], and accumulates win/tie/category tallies into a
//! [`simulation::Summary`].

pub mod cards;
pub mod simulation;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging at INFO with source tags suppressed.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
