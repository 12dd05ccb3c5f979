//! Tabular reinforcement learning for a simplified Blackjack.
//!
//! - `cards`: Ranks, cards and a drawable deck
//! - `blackjack`: The game simulator, its states and actions
//! - `learning`: Monte Carlo, TD(0) and Q-learning over fixed tables
//! - `save`: Plain-text persistence of every learned table
pub mod blackjack;
pub mod cards;
pub mod learning;
pub mod save;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rewards, returns and value estimates.
pub type Utility = f32;
/// Exploration rates and learning rates.
pub type Probability = f32;

// ============================================================================
// LEARNING PARAMETERS
// ============================================================================
/// Discount (γ) applied per transition separating a visit from its reward.
pub const DISCOUNT: Utility = 0.95;
/// Default exploration rate for the Q-learning behavior policy.
pub const EPSILON: Probability = 0.4;
/// Numerator of the decaying learning rate α(n) = 10 / (9 + n).
pub const ALPHA_SCALE: Probability = 10.0;
/// Offset of the decaying learning rate α(n) = 10 / (9 + n).
pub const ALPHA_OFFSET: Probability = 9.0;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Best total above which a hand is bust.
pub const BLACKJACK: u8 = 21;
/// Extra value of an ace counted high instead of low.
pub const ACE_BONUS: u8 = 10;
/// The fixed evaluation policy stands at or above this best total.
pub const STAND_THRESHOLD: u8 = 14;
/// The dealer draws while its best total is below this.
pub const DEALER_THRESHOLD: u8 = 17;

// ============================================================================
// TRAINING INFRASTRUCTURE
// ============================================================================
/// Interval between progress log messages during training.
pub const TRAINING_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
