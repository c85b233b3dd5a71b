//! Win/loss statistics for the current run

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n - 1]` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_tries: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_tries],
            ..Self::default()
        }
    }

    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
