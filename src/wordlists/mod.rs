//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary: the fallback answer
//! pool and the offline dictionary.

pub mod loader;

// Generated by build.rs from data/answers.txt and data/allowed.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, uppercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        // Every fallback answer must be accepted offline
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS_COUNT);
    }

    #[test]
    fn fallback_pool_includes_classic_words() {
        for word in [
            "APPLE", "GRADE", "MUSIC", "LIGHT", "BRAIN", "CLOUD", "SMILE", "TRAIN", "HOUSE",
            "WATER",
        ] {
            assert!(ANSWERS.contains(&word), "missing {word}");
        }
    }
}
