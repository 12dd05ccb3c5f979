use crate::blackjack::State;
use anyhow::Context;
use anyhow::ensure;

/// Table entries as they appear on disk: a scalar, or a two-element list.
///
/// Rendering never emits spaces. Floats use the shortest representation
/// that parses back to the same bits.
pub trait Literal: Sized {
    fn render(&self) -> String;
    fn parse(s: &str) -> anyhow::Result<Self>;
}

impl Literal for f32 {
    fn render(&self) -> String {
        format!("{}", self)
    }
    fn parse(s: &str) -> anyhow::Result<Self> {
        s.parse::<f32>()
            .with_context(|| format!("invalid number literal '{}'", s))
    }
}

impl Literal for u32 {
    fn render(&self) -> String {
        format!("{}", self)
    }
    fn parse(s: &str) -> anyhow::Result<Self> {
        s.parse::<u32>()
            .with_context(|| format!("invalid count literal '{}'", s))
    }
}

impl<T> Literal for [T; 2]
where
    T: Literal,
{
    fn render(&self) -> String {
        format!("[{},{}]", self[0].render(), self[1].render())
    }
    fn parse(s: &str) -> anyhow::Result<Self> {
        let inner = s
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .with_context(|| format!("invalid pair literal '{}'", s))?;
        let (a, b) = inner
            .split_once(',')
            .with_context(|| format!("pair literal '{}' needs two elements", s))?;
        ensure!(!b.contains(','), "pair literal '{}' has too many elements", s);
        Ok([T::parse(a)?, T::parse(b)?])
    }
}

/// Keys are state tuples like `(20,0,10,1)`.
impl Literal for State {
    fn render(&self) -> String {
        self.to_string()
    }
    fn parse(s: &str) -> anyhow::Result<Self> {
        let inner = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .with_context(|| format!("invalid state key '{}'", s))?;
        let fields = inner
            .split(',')
            .map(|x| x.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid state key '{}'", s))?;
        State::try_from(fields.as_slice()).with_context(|| format!("invalid state key '{}'", s))
    }
}
