use std::sync::Arc;
use wordle_helper::*;

fn arc_str_vec(words: Vec<&'static str>) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

#[test]
fn suggestions_come_from_the_most_frequent_candidate_letters() {
    let candidates = arc_str_vec(vec!["dozer", "cover", "hover", "joker", "lover"]);
    let universe = WordBank::from_iterator(
        vec![
            "dozer", "cover", "hover", "joker", "lover", "power", "tower", "toast", "ghost",
            "dream",
        ],
        5,
    );
    let query = SuggestionQuery {
        candidates: &candidates,
        correct_positions: &[None; 5],
        min_distinct_letters: 3,
        excluded_positions: None,
    };

    let suggestions = suggest_words(&query, &universe);

    // 'o', 'e', and 'r' are the three most frequent letters across the
    // candidates, so every suggestion must contain all of them.
    assert!(suggestions.contains(&Arc::from("power")));
    assert!(suggestions.contains(&Arc::from("tower")));
    for word in &suggestions {
        assert!(contains_all_letters(word, ['o', 'e', 'r']));
    }
}

#[test]
fn suggestions_relax_down_from_an_impossible_letter_count() {
    let candidates = arc_str_vec(vec!["dozer", "cover", "hover", "joker", "lover"]);
    // No word here contains the top five candidate letters at once, so the
    // engine has to recurse down to a smaller count.
    let universe = WordBank::from_iterator(vec!["power", "tower"], 5);
    let query = SuggestionQuery {
        candidates: &candidates,
        correct_positions: &[None; 5],
        min_distinct_letters: 5,
        excluded_positions: None,
    };

    let suggestions = suggest_words(&query, &universe);

    assert_eq!(suggestions, arc_str_vec(vec!["power", "tower"]));
}

#[test]
fn suggestions_ignore_confirmed_slots_when_counting() {
    // With "?o?er" solved, only positions 0 and 2 contribute letters.
    let candidates = arc_str_vec(vec!["cover", "hover", "mover", "rover"]);
    let correct_positions = parse_prototype("?o?er").unwrap();
    let universe = WordBank::from_iterator(vec!["valve", "tease", "crumb"], 5);
    let query = SuggestionQuery {
        candidates: &candidates,
        correct_positions: &correct_positions,
        min_distinct_letters: 1,
        excluded_positions: None,
    };

    let suggestions = suggest_words(&query, &universe);

    // 'v' dominates the unknown slots; 'o', 'e', and 'r' are not counted at
    // all, so "valve" is the only match.
    assert_eq!(suggestions, arc_str_vec(vec!["valve"]));
}

#[test]
fn suggestion_pipeline_after_a_round() {
    let bank = WordBank::from_iterator(
        vec![
            "dozer", "cover", "hover", "joker", "lover", "mover", "power", "rover", "tower",
            "voter", "boxer", "ghost", "toast", "crane",
        ],
        5,
    );
    let mut state = KnowledgeState::new(5);
    state
        .process_round(&Round::from_feedback("crane", "XYXXY").unwrap())
        .unwrap();

    let candidates = get_candidate_words(&state, &bank.without_plurals());
    let query = SuggestionQuery {
        candidates: &candidates,
        correct_positions: state.correct_positions(),
        min_distinct_letters: 5,
        excluded_positions: Some(state.excluded_positions()),
    };

    let suggestions = suggest_words(&query, &bank);

    assert!(!suggestions.is_empty());
    // 'r' is excluded at position 1 and 'e' at position 4; no suggestion may
    // put them back there.
    for word in &suggestions {
        let letters: Vec<char> = word.chars().collect();
        assert_ne!(letters[1], 'r');
        assert_ne!(letters[4], 'e');
    }
}

#[test]
fn suggestions_always_terminate_with_a_result_for_a_nonempty_universe() {
    let universe = WordBank::from_iterator(vec!["ghost", "toast"], 5);
    // Candidates drawn from the universe, an over-restrictive letter count,
    // and an exclusion that rejects every universe word.
    let candidates = arc_str_vec(vec!["ghost"]);
    let excluded = std::collections::HashMap::from([
        ('t', std::collections::HashSet::from([4usize])),
        ('o', std::collections::HashSet::from([1usize, 2usize])),
    ]);
    let query = SuggestionQuery {
        candidates: &candidates,
        correct_positions: &[None; 5],
        min_distinct_letters: 5,
        excluded_positions: Some(&excluded),
    };

    let suggestions = suggest_words(&query, &universe);

    assert!(!suggestions.is_empty());
}
