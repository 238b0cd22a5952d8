//! A helper for solving Wordle-style puzzles.
//!
//! The library turns round-by-round letter feedback into a progressively
//! narrower set of candidate words. Feedback is parsed into a [`Round`],
//! folded into a [`KnowledgeState`], and applied to a [`WordBank`] with
//! [`get_candidate_words`]. When too many candidates remain,
//! [`suggest_words`] proposes maximally informative next guesses.
//!
//! ```
//! use std::sync::Arc;
//! use wordle_helper::*;
//!
//! let bank = WordBank::from_iterator(vec!["ghost", "noise", "mouth", "poise"], 5);
//! let mut state = KnowledgeState::new(5);
//!
//! // We played "ghost": 'o' is in the word but elsewhere, 's' is confirmed
//! // at position 3, and 'g', 'h', and 't' are absent.
//! let round = Round::from_feedback("ghost", "XXYGX").unwrap();
//! state.process_round(&round).unwrap();
//!
//! let candidates = get_candidate_words(&state, &bank);
//! let expected: Vec<Arc<str>> = vec![Arc::from("noise"), Arc::from("poise")];
//! assert_eq!(candidates, expected);
//! ```

mod data;
mod engine;
mod knowledge;
mod results;

pub use data::LetterCounter;
pub use data::WordBank;
pub use engine::suggest_words;
pub use engine::SuggestionQuery;
pub use knowledge::*;
pub use results::*;
