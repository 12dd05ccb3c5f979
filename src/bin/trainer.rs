//! Trainer Binary
//!
//! Runs MC, TD and Q-learning against the Blackjack simulator,
//! optionally resuming from and saving to a tables file.
//!
//! Options: --mc, --td, --q, --epsilon, --seed, --load, --save, --autoplay

use clap::Parser;
use robojack::learning::Agent;
use robojack::save::Disk;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Tabular MC / TD / Q-learning for Blackjack")]
struct Args {
    /// Monte Carlo evaluation episodes
    #[arg(long, default_value_t = 0)]
    mc: usize,
    /// TD(0) evaluation episodes
    #[arg(long, default_value_t = 0)]
    td: usize,
    /// Q-learning episodes
    #[arg(long, default_value_t = 0)]
    q: usize,
    /// Q-learning exploration rate
    #[arg(long, default_value_t = robojack::EPSILON)]
    epsilon: f32,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Tables file to resume from
    #[arg(long)]
    load: Option<PathBuf>,
    /// Tables file to write after training
    #[arg(long)]
    save: Option<PathBuf>,
    /// Greedy hands to play after training
    #[arg(long, default_value_t = 0)]
    autoplay: usize,
}

fn main() -> anyhow::Result<()> {
    robojack::log()?;
    let args = Args::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.epsilon),
        "epsilon {} outside [0, 1]",
        args.epsilon
    );
    let mut agent = match args.seed {
        Some(seed) => Agent::seeded(seed),
        None => Agent::new(),
    };
    if let Some(ref path) = args.load {
        agent.load(path)?;
    }
    if args.mc > 0 {
        agent.mc_run(args.mc);
    }
    if args.td > 0 {
        agent.td_run(args.td);
    }
    if args.q > 0 {
        agent.q_run(args.q, args.epsilon);
    }
    if let Some(ref path) = args.save {
        agent.save(path)?;
    }
    if args.autoplay > 0 {
        log::info!("{:<32}{}", "autoplay", agent.autoplay(args.autoplay));
    }
    Ok(())
}
