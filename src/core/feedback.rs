//! Guess evaluation and feedback representation
//!
//! Feedback holds one [`Verdict`] per position of a submitted guess:
//! - Correct: letter in the correct position
//! - Present: letter in the word, wrong position
//! - Absent: letter not in the word (after duplicates are accounted for)

use super::{Verdict, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Evaluate `guess` against `answer`
    ///
    /// This implements the game's feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-wrong-position from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer);
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent)
    /// assert_eq!(feedback.to_string(), "Y-YY-");
    /// assert_eq!(feedback.verdicts()[1], Verdict::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Verdict::Correct;

                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut result {
            *slot = Verdict::from_code(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(result))
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f = Feedback::parse("GY-GY").unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eval(guess: &str, answer: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.to_string(), "GGGGG");
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.to_string(), "-----");
        assert!(feedback.verdicts().iter().all(|&v| v == Verdict::Absent));
    }

    #[test]
    fn feedback_duplicate_letters_speed_erase() {
        // ERASE has one S and two E's, no position matches
        let feedback = eval("speed", "erase");
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Present,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Present,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn feedback_duplicate_letters_correct_takes_priority() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        let feedback = eval("robot", "floor");
        assert_eq!(feedback.to_string(), "YY-G-");
    }

    #[test]
    fn feedback_duplicate_not_over_credited() {
        // Only one L in PLANT, so only the first L is credited
        let feedback = eval("lolly", "plant");
        assert_eq!(feedback.to_string(), "Y----");

        let feedback = eval("hello", "world");
        assert_eq!(feedback.to_string(), "---GY");
    }

    #[test]
    fn feedback_grape_apple() {
        let feedback = eval("grape", "apple");
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Present,
                Verdict::Correct,
            ]
        );
    }

    #[test]
    fn feedback_parse_valid() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.to_string(), "GYG--");
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none()); // Too long
        assert!(Feedback::parse("GYG").is_none()); // Too short
        assert!(Feedback::parse("GXGGY").is_none()); // Invalid char
        assert!(Feedback::parse("").is_none());
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        // Small alphabet so duplicates are common
        "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn evaluating_answer_against_itself_is_perfect(answer in word_strategy()) {
            prop_assert!(Feedback::evaluate(&answer, &answer).is_perfect());
        }

        #[test]
        fn letters_never_credited_beyond_answer_count(
            guess in word_strategy(),
            answer in word_strategy(),
        ) {
            let feedback = Feedback::evaluate(&guess, &answer);
            let counts = answer.char_counts();

            for letter in b'A'..=b'F' {
                let credited = guess
                    .chars()
                    .iter()
                    .zip(feedback.verdicts())
                    .filter(|&(&g, &v)| g == letter && v != Verdict::Absent)
                    .count();
                let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
                prop_assert!(credited <= available);
            }
        }

        #[test]
        fn correct_verdicts_match_positions(
            guess in word_strategy(),
            answer in word_strategy(),
        ) {
            let feedback = Feedback::evaluate(&guess, &answer);
            for i in 0..WORD_LENGTH {
                let same = guess.chars()[i] == answer.chars()[i];
                prop_assert_eq!(feedback.verdicts()[i] == Verdict::Correct, same);
            }
        }

        #[test]
        fn evaluation_is_idempotent(guess in word_strategy(), answer in word_strategy()) {
            prop_assert_eq!(
                Feedback::evaluate(&guess, &answer),
                Feedback::evaluate(&guess, &answer)
            );
        }
    }
}
