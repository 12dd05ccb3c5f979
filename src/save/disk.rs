use super::literal::Literal;
use crate::learning::Agent;
use crate::learning::MonteCarlo;
use crate::learning::Policy;
use crate::learning::QLearning;
use crate::learning::Simulator;
use crate::learning::Table;
use crate::learning::Temporal;
use anyhow::Context;
use anyhow::bail;
use anyhow::ensure;
use std::path::Path;

/// Number of tables in a saved file, in order: MC values, TD values,
/// Q values, MC return sums, MC counts, TD counts, Q counts.
pub const BLOCKS: usize = 7;

/// for types that can be written to
/// and loaded from a plain-text file.
pub trait Disk {
    fn name() -> &'static str;
    fn render(&self) -> String;
    /// Overwrites entries from `text`. On error nothing is overwritten.
    fn parse(&mut self, text: &str) -> anyhow::Result<()>;
    fn save(&self, path: &Path) -> anyhow::Result<()> {
        log::info!("{:<32}{:<32}", format!("saving      {}", Self::name()), path.display());
        std::fs::write(path, self.render()).with_context(|| format!("write {}", path.display()))
    }
    fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        log::info!("{:<32}{:<32}", format!("loading     {}", Self::name()), path.display());
        let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        self.parse(&text)
            .with_context(|| format!("parse {}", path.display()))
    }
    /// check if file exists on disk
    fn done(path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

/// One `"<key> <value>"` line per state, each newline-terminated.
fn render<V>(table: &Table<V>) -> String
where
    V: Literal,
{
    table
        .iter()
        .map(|(state, value)| format!("{} {}\n", state.render(), value.render()))
        .collect()
}

fn fill<V>(table: &mut Table<V>, block: &str) -> anyhow::Result<()>
where
    V: Literal,
{
    for (i, line) in block.split('\n').enumerate() {
        let (key, value) = line
            .split_once(' ')
            .with_context(|| format!("line {}: expected '<key> <value>', got '{}'", i + 1, line))?;
        let key = crate::blackjack::State::parse(key).with_context(|| format!("line {}", i + 1))?;
        table[&key] = V::parse(value).with_context(|| format!("line {}", i + 1))?;
    }
    Ok(())
}

impl<S, P> Disk for Agent<S, P>
where
    S: Simulator,
    P: Policy,
{
    fn name() -> &'static str {
        "tables"
    }
    fn render(&self) -> String {
        [
            render(&self.mc.values),
            render(&self.td.values),
            render(&self.q.values),
            render(&self.mc.sums),
            render(&self.mc.counts),
            render(&self.td.counts),
            render(&self.q.counts),
        ]
        .into_iter()
        .map(|block| block + "\n")
        .collect()
    }
    fn parse(&mut self, text: &str) -> anyhow::Result<()> {
        let blocks = text.split("\n\n").collect::<Vec<_>>();
        let &[mc_values, td_values, q_values, mc_sums, mc_counts, td_counts, q_counts, rest] =
            blocks.as_slice()
        else {
            bail!(
                "expected {} blank-line separated blocks, found {}",
                BLOCKS,
                blocks.len().saturating_sub(1)
            );
        };
        ensure!(rest.is_empty(), "unexpected content after {} blocks", BLOCKS);
        let mut mc = MonteCarlo::clone(&self.mc);
        let mut td = Temporal::clone(&self.td);
        let mut q = QLearning::clone(&self.q);
        fill(&mut mc.values, mc_values).context("MC values")?;
        fill(&mut td.values, td_values).context("TD values")?;
        fill(&mut q.values, q_values).context("Q values")?;
        fill(&mut mc.sums, mc_sums).context("MC return sums")?;
        fill(&mut mc.counts, mc_counts).context("MC counts")?;
        fill(&mut td.counts, td_counts).context("TD counts")?;
        fill(&mut q.counts, q_counts).context("Q counts")?;
        self.mc = mc;
        self.td = td;
        self.q = q;
        Ok(())
    }
}
