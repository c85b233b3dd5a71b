//! Evaluate a single guess against a chosen answer

use crate::core::{Feedback, Word};

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
///
/// # Examples
///
/// ```
/// use wordle_game::commands::evaluate_guess;
///
/// let result = evaluate_guess("speed", "erase").unwrap();
/// assert_eq!(result.feedback.to_string(), "Y-YY-");
/// ```
pub fn evaluate_guess(guess: &str, answer: &str) -> Result<Evaluation, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer '{answer}': {e}"))?;
    let feedback = Feedback::evaluate(&guess, &answer);

    Ok(Evaluation {
        guess,
        answer,
        feedback,
    })
}

impl Evaluation {
    /// Compare the computed feedback with a `G`/`Y`/`-` or emoji pattern
    ///
    /// # Errors
    ///
    /// Returns an error if `expected` is not a feedback pattern or differs from the result.
    pub fn check_expected(&self, expected: &str) -> Result<(), String> {
        let expected: Feedback = expected.parse()?;
        if expected == self.feedback {
            Ok(())
        } else {
            Err(format!("Expected {expected}, got {}", self.feedback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn evaluates_mixed_guess() {
        let result = evaluate_guess("GRAPE", "apple").unwrap();
        assert_eq!(
            result.feedback.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Present,
                Verdict::Correct
            ]
        );
    }

    #[test]
    fn expected_pattern_matches_codes_and_emoji() {
        let result = evaluate_guess("speed", "erase").unwrap();
        assert_eq!(result.check_expected("Y-YY-"), Ok(()));
        assert_eq!(result.check_expected("y_yy_"), Ok(()));
        assert_eq!(result.check_expected("🟨⬜🟨🟨⬜"), Ok(()));
    }

    #[test]
    fn expected_pattern_mismatch_names_both() {
        let result = evaluate_guess("speed", "erase").unwrap();
        let err = result.check_expected("GGGGG").unwrap_err();
        assert_eq!(err, "Expected GGGGG, got Y-YY-");
        assert!(result.check_expected("GYX").is_err());
    }

    #[test]
    fn rejects_bad_words() {
        assert!(evaluate_guess("toolong", "apple").is_err());
        assert!(evaluate_guess("apple", "ap").is_err());
        assert!(evaluate_guess("ap3le", "apple").is_err());
    }
}
