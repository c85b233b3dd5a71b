//! Per-letter feedback classification

use std::fmt;

/// Feedback for one letter of a submitted guess
///
/// Variants are ordered by priority: `Absent < Present < Correct`. The
/// on-screen keyboard keeps the maximum verdict seen for each letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    /// Letter does not occur in the answer (after duplicates are matched)
    Absent,
    /// Letter occurs in the answer at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl Verdict {
    /// Single-character code used by the text feedback format
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse a feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
