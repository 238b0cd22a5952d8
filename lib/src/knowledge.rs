use crate::data::WordBank;
use crate::results::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// The facts extracted from a single round of feedback, before they are
/// merged into a [`KnowledgeState`].
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundDelta {
    /// Letters marked grey this round.
    pub absent_letters: HashSet<char>,
    /// (letter, position) pairs marked yellow this round: the letter is in
    /// the word, but not at that position.
    pub excluded_positions: Vec<(char, usize)>,
    /// (position, letter) pairs marked green this round.
    pub confirmed_positions: Vec<(usize, char)>,
}

impl RoundDelta {
    /// Classifies each position of the given round by its mark.
    pub fn from_round(round: &Round) -> Result<RoundDelta, SolverError> {
        let letters: Vec<char> = round.word_played.chars().collect();
        if letters.len() != round.marks.len() {
            return Err(SolverError::MismatchedLengths {
                expected: letters.len(),
                actual: round.marks.len(),
            });
        }
        let mut delta = RoundDelta::default();
        for (index, (letter, mark)) in letters.iter().zip(round.marks.iter()).enumerate() {
            match mark {
                LetterMark::Absent => {
                    delta.absent_letters.insert(*letter);
                }
                LetterMark::PresentElsewhere => {
                    delta.excluded_positions.push((*letter, index));
                }
                LetterMark::Correct => {
                    delta.confirmed_positions.push((index, *letter));
                }
            }
        }
        Ok(delta)
    }
}

/// Everything learned about the answer over the rounds played so far.
///
/// One `KnowledgeState` belongs to one solving session. It starts empty,
/// absorbs one [`RoundDelta`] per round, and is discarded when the session
/// ends. Confirmed positions are monotonic: once a slot is set it is never
/// unset or changed, so on contradictory feedback the first confirmation
/// wins (which position "wins" in that case is undefined by the puzzle's
/// rules, not by this library).
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeState {
    word_length: usize,
    /// Letters known not to appear in any still-unknown slot. A letter can be
    /// both absent here and confirmed elsewhere when the answer repeats it
    /// fewer times than a guess did, which is why absence is only checked at
    /// unconfirmed slots.
    absent_letters: HashSet<char>,
    /// For each letter of the alphabet, the positions where it is known to be
    /// present-but-not-here. A letter with a non-empty set is known to be
    /// somewhere in the word.
    excluded_positions: HashMap<char, HashSet<usize>>,
    /// The partially solved answer.
    correct_positions: Vec<Option<char>>,
}

impl KnowledgeState {
    /// Creates an empty state for a puzzle of the given word length.
    pub fn new(word_length: usize) -> KnowledgeState {
        KnowledgeState {
            word_length,
            absent_letters: HashSet::new(),
            excluded_positions: ALPHABET.map(|letter| (letter, HashSet::new())).collect(),
            correct_positions: vec![None; word_length],
        }
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn absent_letters(&self) -> &HashSet<char> {
        &self.absent_letters
    }

    pub fn excluded_positions(&self) -> &HashMap<char, HashSet<usize>> {
        &self.excluded_positions
    }

    pub fn correct_positions(&self) -> &[Option<char>] {
        &self.correct_positions
    }

    /// Letters known to be somewhere in the word but not yet pinned to a
    /// confirmed position.
    pub fn present_letters(&self) -> HashSet<char> {
        self.excluded_positions
            .iter()
            .filter(|(_, positions)| !positions.is_empty())
            .map(|(letter, _)| *letter)
            .collect()
    }

    /// Returns `true` once every position has been confirmed.
    pub fn is_solved(&self) -> bool {
        self.correct_positions.iter().all(|slot| slot.is_some())
    }

    /// Validates the round against this puzzle's word length, then extracts
    /// its delta and merges it in.
    pub fn process_round(&mut self, round: &Round) -> Result<(), SolverError> {
        let word_length = round.word_played.chars().count();
        if word_length != self.word_length {
            return Err(SolverError::MismatchedLengths {
                expected: self.word_length,
                actual: word_length,
            });
        }
        let delta = RoundDelta::from_round(round)?;
        self.apply(&delta)
    }

    /// Merges one round's delta into the accumulated knowledge.
    ///
    /// Absent letters are unioned, exclusions are marked, and confirmations
    /// fill empty slots. A closing pass clears each confirmed position from
    /// the confirmed letter's excluded set: a green resolves any stale yellow
    /// recorded for that exact slot in an earlier round.
    ///
    /// A delta naming a position outside this puzzle's word length is
    /// rejected whole, before anything is merged.
    pub fn apply(&mut self, delta: &RoundDelta) -> Result<(), SolverError> {
        let named_positions = delta
            .excluded_positions
            .iter()
            .map(|(_, index)| *index)
            .chain(delta.confirmed_positions.iter().map(|(index, _)| *index));
        for position in named_positions {
            if position >= self.word_length {
                return Err(SolverError::PositionOutOfRange {
                    position,
                    word_length: self.word_length,
                });
            }
        }
        self.absent_letters.extend(delta.absent_letters.iter());
        for (letter, index) in &delta.excluded_positions {
            self.excluded_positions
                .entry(*letter)
                .or_default()
                .insert(*index);
        }
        for (index, letter) in &delta.confirmed_positions {
            let slot = &mut self.correct_positions[*index];
            if slot.is_none() {
                *slot = Some(*letter);
            }
        }
        for (index, slot) in self.correct_positions.iter().enumerate() {
            if let Some(letter) = slot {
                if let Some(positions) = self.excluded_positions.get_mut(letter) {
                    positions.remove(&index);
                }
            }
        }
        Ok(())
    }

    /// Returns `true` iff the given word is still consistent with everything
    /// learned so far.
    ///
    /// A word survives iff every confirmed slot matches, every known-present
    /// letter occurs somewhere in it, no letter sits at one of its own
    /// excluded positions, and no unconfirmed slot holds an absent letter.
    /// Absence is deliberately not checked at confirmed slots, so the true
    /// answer survives when it repeats a letter the feedback also greyed out.
    /// An exclusion beyond the word's length cannot reject it; such
    /// exclusions only enter through deserialized state.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() != self.word_length {
            return false;
        }
        for (index, slot) in self.correct_positions.iter().enumerate() {
            if let Some(letter) = slot {
                if letters[index] != *letter {
                    return false;
                }
            }
        }
        for (letter, positions) in &self.excluded_positions {
            if positions.is_empty() {
                continue;
            }
            if !letters.contains(letter) {
                return false;
            }
            if positions.iter().any(|index| letters.get(*index) == Some(letter)) {
                return false;
            }
        }
        letters
            .iter()
            .zip(self.correct_positions.iter())
            .all(|(letter, slot)| slot.is_some() || !self.absent_letters.contains(letter))
    }
}

/// Gets the words in the bank that are still consistent with the given state.
///
/// Pure and order-preserving; an empty result is a meaningful answer (it
/// signals a contradiction in the entered feedback).
pub fn get_candidate_words(state: &KnowledgeState, bank: &WordBank) -> Vec<Arc<str>> {
    bank.iter()
        .filter(|word| state.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}

/// Returns `true` iff the word matches the prototype's confirmed slots.
///
/// Words of a different length than the prototype never match.
pub fn matches_prototype(word: &str, prototype: &[Option<char>]) -> bool {
    word.chars().count() == prototype.len()
        && word
            .chars()
            .zip(prototype.iter())
            .all(|(letter, slot)| slot.map_or(true, |confirmed| letter == confirmed))
}

/// Returns `true` iff the word contains every one of the given letters.
pub fn contains_all_letters(word: &str, letters: impl IntoIterator<Item = char>) -> bool {
    letters.into_iter().all(|letter| word.contains(letter))
}

/// Returns `true` iff the word contains none of the given letters.
pub fn contains_no_letters(word: &str, letters: impl IntoIterator<Item = char>) -> bool {
    letters.into_iter().all(|letter| !word.contains(letter))
}
