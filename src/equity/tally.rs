//! Win/tie accumulator.
//!
//! Each trial credits either one win (a unique best score) or one tie to
//! every participant sharing the best score, never both. Workers own a
//! private `Tally` and merge at the end.

/// Per-participant win and tie counters over a number of trials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    trials: u64,
}

impl Tally {
    /// Create a tally for `participants` participants.
    pub fn new(participants: usize) -> Self {
        Self {
            wins: vec![0; participants],
            ties: vec![0; participants],
            trials: 0,
        }
    }

    /// Record one showdown given every participant's score (lower is better).
    pub fn record_showdown(&mut self, scores: &[f64]) {
        debug_assert_eq!(scores.len(), self.wins.len());
        let best = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let mut winners = scores.iter().enumerate().filter(|&(_, &s)| s == best).map(|(i, _)| i);

        match (winners.next(), winners.next()) {
            (Some(only), None) => self.wins[only] += 1,
            (Some(first), Some(second)) => {
                self.ties[first] += 1;
                self.ties[second] += 1;
                for rest in winners {
                    self.ties[rest] += 1;
                }
            }
            (None, _) => {}
        }
        self.trials += 1;
    }

    /// Record a trial directly from an outcome for participant `index`.
    pub fn record(&mut self, index: usize, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins[index] += 1,
            Outcome::Tie => self.ties[index] += 1,
            Outcome::Loss => {}
        }
        self.trials += 1;
    }

    /// Add another tally's counts into this one.
    pub fn merge(mut self, other: Tally) -> Tally {
        debug_assert_eq!(self.wins.len(), other.wins.len());
        for (w, o) in self.wins.iter_mut().zip(&other.wins) {
            *w += o;
        }
        for (t, o) in self.ties.iter_mut().zip(&other.ties) {
            *t += o;
        }
        self.trials += other.trials;
        self
    }

    /// Number of trials recorded.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Win count for a participant.
    pub fn wins(&self, index: usize) -> u64 {
        self.wins[index]
    }

    /// Tie count for a participant.
    pub fn ties(&self, index: usize) -> u64 {
        self.ties[index]
    }

    /// Win percentage (0-100) for a participant.
    pub fn win_pct(&self, index: usize) -> f64 {
        percent(self.wins[index], self.trials)
    }

    /// Tie percentage (0-100) for a participant.
    pub fn tie_pct(&self, index: usize) -> f64 {
        percent(self.ties[index], self.trials)
    }
}

/// Result of one trial from a single participant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

fn percent(count: u64, trials: u64) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    count as f64 / trials as f64 * 100.0
}
