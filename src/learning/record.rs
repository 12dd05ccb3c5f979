use crate::Utility;

/// Win/draw/loss tally over a batch of played hands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Record {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.games().max(1) as f64
    }
    /// Mean reward per hand.
    pub fn edge(&self) -> f64 {
        (self.wins as f64 - self.losses as f64) / self.games().max(1) as f64
    }
    pub fn witness(self, reward: Utility) -> Self {
        match reward {
            r if r > 0. => Self {
                wins: self.wins + 1,
                ..self
            },
            r if r < 0. => Self {
                losses: self.losses + 1,
                ..self
            },
            _ => Self {
                draws: self.draws + 1,
                ..self
            },
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<16}{:<16}{:<16}{:<16}",
            format!("W {}", self.wins),
            format!("D {}", self.draws),
            format!("L {}", self.losses),
            format!("win {:.3}", self.win_rate()),
            format!("edge {:+.3}", self.edge()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally() {
        let record = [1., -1., 0., 1., -1., -1.]
            .into_iter()
            .fold(Record::default(), Record::witness);
        assert_eq!(record.wins, 2);
        assert_eq!(record.draws, 1);
        assert_eq!(record.losses, 3);
        assert_eq!(record.games(), 6);
        assert!((record.edge() + 1. / 6.).abs() < 1e-12);
        assert!((record.win_rate() - 1. / 3.).abs() < 1e-12);
        assert!(record.to_string().contains("win 0.333"));
    }
}
