//! Cumulative per-letter verdicts for the on-screen keyboard

use super::{Feedback, Verdict, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Best verdict seen so far for each letter
///
/// A key is only ever upgraded (`Absent < Present < Correct`), never downgraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the feedback of one guess into the keyboard
    ///
    /// Returns the letters whose verdict changed, once per letter in guess order.
    pub fn merge(&mut self, guess: &Word, feedback: &Feedback) -> Vec<(u8, Verdict)> {
        let mut seen: Vec<(u8, Option<Verdict>)> = Vec::with_capacity(WORD_LENGTH);

        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            if !seen.iter().any(|&(l, _)| l == letter) {
                seen.push((letter, self.keys.get(&letter).copied()));
            }
            self.keys
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }

        seen.into_iter()
            .filter_map(|(letter, before)| {
                let now = self.keys.get(&letter).copied()?;
                (before != Some(now)).then_some((letter, now))
            })
            .collect()
    }

    /// Current verdict for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(state: &mut KeyboardState, guess: &str, answer: &str) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new(answer).unwrap());
        state.merge(&guess, &feedback);
    }

    #[test]
    fn keyboard_never_downgrades_correct() {
        let mut state = KeyboardState::new();
        merge(&mut state, "apple", "apple");
        assert_eq!(state.get(b'A'), Some(Verdict::Correct));

        // A and P are only present this time
        merge(&mut state, "grasp", "apple");
        assert_eq!(state.get(b'A'), Some(Verdict::Correct));
        assert_eq!(state.get(b'P'), Some(Verdict::Correct));
        assert_eq!(state.get(b'G'), Some(Verdict::Absent));
    }

    #[test]
    fn keyboard_present_upgrades_to_correct() {
        let mut state = KeyboardState::new();
        merge(&mut state, "grape", "apple");
        assert_eq!(state.get(b'A'), Some(Verdict::Present));

        merge(&mut state, "angle", "apple");
        assert_eq!(state.get(b'A'), Some(Verdict::Correct));
    }

    #[test]
    fn keyboard_duplicate_in_one_guess_takes_best() {
        // First E absent, second E correct
        let mut state = KeyboardState::new();
        merge(&mut state, "eerie", "apple");
        assert_eq!(state.get(b'E'), Some(Verdict::Correct));
        assert_eq!(state.get(b'R'), Some(Verdict::Absent));
    }

    #[test]
    fn keyboard_reports_changes_once_per_letter() {
        let mut state = KeyboardState::new();
        let guess = Word::new("speed").unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new("erase").unwrap());
        let changed = state.merge(&guess, &feedback);

        let letters: Vec<u8> = changed.iter().map(|&(l, _)| l).collect();
        assert_eq!(letters, b"SPED");
        assert_eq!(state.get(b'e'), Some(Verdict::Present));
    }

    #[test]
    fn keyboard_unknown_letter() {
        let state = KeyboardState::new();
        assert_eq!(state.get(b'Q'), None);
    }
}
