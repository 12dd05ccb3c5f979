use crate::TRAINING_LOG_INTERVAL;
use std::time::Duration;
use std::time::Instant;

/// Rate-limited episode progress for a single training run.
///
/// Logs at most once per `TRAINING_LOG_INTERVAL`, plus once on completion.
pub struct Progress {
    name: &'static str,
    total: usize,
    episode: usize,
    begin: Instant,
    check: Instant,
}

impl Progress {
    pub fn new(name: &'static str, total: usize) -> Self {
        log::info!("{:<32}{:<32}", format!("beginning {} training", name), total);
        let now = Instant::now();
        Self {
            name,
            total,
            episode: 0,
            begin: now,
            check: now,
        }
    }
    pub fn elapsed(&self) -> Duration {
        self.begin.elapsed()
    }
    pub fn tick(&mut self) {
        self.episode += 1;
        if self.check.elapsed() >= TRAINING_LOG_INTERVAL {
            self.check = Instant::now();
            log::info!("{}", self.format());
        }
        if self.episode == self.total {
            log::info!("{}", self.summary());
        }
    }
    /// Aligned columns with throughput.
    pub fn format(&self) -> String {
        let rates = self.episode as f64 / self.elapsed().as_secs_f64().max(1e-3);
        format!(
            "{:<20}{:<20}{:<20}",
            self.name,
            format!("episode {}/{}", self.episode, self.total),
            format!("E/sec {:.1}", rates),
        )
    }
    pub fn summary(&self) -> String {
        format!("training stopped {}", self.format())
    }
}
