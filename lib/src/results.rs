use thiserror::Error;

/// The feedback class a puzzle reports for one letter of a played word.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterMark {
    /// Grey: the letter is not in the word.
    Absent,
    /// Yellow: the letter is in the word, but somewhere else.
    PresentElsewhere,
    /// Green: the letter is in the word at exactly this position.
    Correct,
}

impl LetterMark {
    /// Parses a single feedback character ('X', 'Y', or 'G', case-insensitive).
    pub fn from_char(letter: char) -> Result<LetterMark, SolverError> {
        match letter.to_ascii_uppercase() {
            'X' => Ok(LetterMark::Absent),
            'Y' => Ok(LetterMark::PresentElsewhere),
            'G' => Ok(LetterMark::Correct),
            _ => Err(SolverError::InvalidMarkChar(letter)),
        }
    }
}

/// Indicates that some input could not be interpreted by the solver.
///
/// Validation failures are always surfaced to the caller; the solver never
/// corrects or retries malformed input on its own.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SolverError {
    /// Two sequences that must line up (word, feedback, prototype) have
    /// different lengths.
    #[error("expected {expected} characters but got {actual}")]
    MismatchedLengths { expected: usize, actual: usize },
    /// A feedback string contained something other than 'X', 'Y', or 'G'.
    #[error("invalid feedback character {0:?}; feedback may only contain 'X', 'Y', and 'G'")]
    InvalidMarkChar(char),
    /// A word prototype contained something other than 'a'-'z' or '?'.
    #[error("invalid prototype character {0:?}; prototypes may only contain 'a'-'z' and '?'")]
    InvalidPrototypeChar(char),
    /// A word contained a character outside 'a'-'z'.
    #[error("unsupported character {0:?}; words may only contain 'a'-'z'")]
    UnsupportedCharacter(char),
    /// A position index lies outside the puzzle's word length.
    #[error("position {position} is out of range for a {word_length}-letter word")]
    PositionOutOfRange { position: usize, word_length: usize },
}

/// One round of play: the word that was entered and the per-letter feedback
/// the puzzle returned for it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Round<'a> {
    pub word_played: &'a str,
    /// The mark for each letter, in the same letter order as the word.
    pub marks: Vec<LetterMark>,
}

impl<'a> Round<'a> {
    /// Parses a round from a played word and its raw feedback string.
    ///
    /// The feedback string must be the same length as the word and contain
    /// only the characters 'X' (grey), 'Y' (yellow), and 'G' (green),
    /// case-insensitive.
    pub fn from_feedback(word_played: &'a str, feedback: &str) -> Result<Round<'a>, SolverError> {
        if let Some(letter) = word_played.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(SolverError::UnsupportedCharacter(letter));
        }
        let word_length = word_played.chars().count();
        let feedback_length = feedback.chars().count();
        if word_length != feedback_length {
            return Err(SolverError::MismatchedLengths {
                expected: word_length,
                actual: feedback_length,
            });
        }
        Ok(Round {
            word_played,
            marks: feedback
                .chars()
                .map(LetterMark::from_char)
                .collect::<Result<Vec<LetterMark>, SolverError>>()?,
        })
    }
}

/// Parses a positional word prototype, e.g. `"?o?er"`, into typed slots.
///
/// A lowercase letter confirms that position; `'?'` leaves it unknown. The
/// prototype's length is not checked here, since only the caller knows the
/// puzzle's word length.
pub fn parse_prototype(prototype: &str) -> Result<Vec<Option<char>>, SolverError> {
    prototype
        .chars()
        .map(|letter| match letter {
            '?' => Ok(None),
            _ if letter.is_ascii_lowercase() => Ok(Some(letter)),
            _ => Err(SolverError::InvalidPrototypeChar(letter)),
        })
        .collect()
}

/// Renders typed positional slots back into the prototype encoding.
pub fn prototype_string(slots: &[Option<char>]) -> String {
    slots.iter().map(|slot| slot.unwrap_or('?')).collect()
}
