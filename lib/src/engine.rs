use crate::data::LetterCounter;
use crate::knowledge::contains_all_letters;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// The parameters of one call into the suggestion engine.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionQuery<'a> {
    /// The words the answer could still be.
    pub candidates: &'a [Arc<str>],
    /// The partially solved answer; letter frequencies are only collected
    /// from the unknown slots.
    pub correct_positions: &'a [Option<char>],
    /// How many of the most frequent letters a suggestion must contain.
    /// 3 or 4 usually gives useful results; 5 is worth trying first since it
    /// yields the most information on the rare occasions it matches anything.
    pub min_distinct_letters: usize,
    /// When supplied, suggestions must not place a present-elsewhere letter
    /// at one of its own excluded positions.
    pub excluded_positions: Option<&'a HashMap<char, HashSet<usize>>>,
}

/// Proposes words to play next that are likely to split the remaining
/// candidates well.
///
/// Suggestions are drawn from the whole universe, not just from the
/// candidates: a word that cannot be the answer can still be the most
/// informative play. The most frequent letters across the candidates'
/// unknown slots are selected, and the universe is scanned for words
/// containing all of them. An empty scan degrades step by step instead of
/// failing: first the least frequent selected letter is swapped for the next
/// one in the ranking (one rank further per retry), then the whole search is
/// retried with one fewer required letter, and as a last resort without the
/// excluded-position constraint. An empty universe is the only input that
/// produces an empty result when the candidates are drawn from the universe.
pub fn suggest_words(query: &SuggestionQuery, universe: &[Arc<str>]) -> Vec<Arc<str>> {
    if universe.is_empty() {
        return Vec::new();
    }

    let unknown_indices: Vec<usize> = query
        .correct_positions
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_none())
        .map(|(index, _)| index)
        .collect();
    let mut counter = LetterCounter::new();
    for word in query.candidates {
        for (index, letter) in word.char_indices() {
            if unknown_indices.contains(&index) {
                counter.add(letter);
            }
        }
    }
    let ranking = counter.ranked();

    let mut selected = counter.most_common(query.min_distinct_letters);
    let mut found = scan_universe(universe, &selected, query.excluded_positions);

    if found.is_empty() {
        // Swap the least frequent selected letter for the next-ranked letter
        // not yet tried, looking one rank further per failed attempt.
        let mut offset = 1;
        while query.min_distinct_letters + offset <= counter.num_distinct() {
            selected.pop();
            selected.push(ranking[query.min_distinct_letters + offset - 1]);
            let results = scan_universe(universe, &selected, query.excluded_positions);
            if !results.is_empty() {
                found = results;
                break;
            }
            offset += 1;
        }
    }
    if found.is_empty() && query.min_distinct_letters > 1 {
        found = suggest_words(
            &SuggestionQuery {
                min_distinct_letters: query.min_distinct_letters - 1,
                ..*query
            },
            universe,
        );
    }
    if found.is_empty() && query.excluded_positions.is_some() {
        found = suggest_words(
            &SuggestionQuery {
                excluded_positions: None,
                ..*query
            },
            universe,
        );
    }
    found
}

fn scan_universe(
    universe: &[Arc<str>],
    selected_letters: &[char],
    excluded_positions: Option<&HashMap<char, HashSet<usize>>>,
) -> Vec<Arc<str>> {
    universe
        .par_iter()
        .filter(|word| {
            contains_all_letters(word, selected_letters.iter().copied())
                && excluded_positions.map_or(true, |positions_per_letter| {
                    !word.char_indices().any(|(index, letter)| {
                        positions_per_letter
                            .get(&letter)
                            .map_or(false, |positions| positions.contains(&index))
                    })
                })
        })
        .map(Arc::clone)
        .collect()
}
