use std::cmp::Reverse;
use std::collections::HashMap;
use std::io::BufRead;
use std::io::Result;
use std::ops::Deref;
use std::sync::Arc;

/// The universe of possible words for one puzzle configuration.
///
/// Once constructed the bank is immutable and freely shareable; filtering
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is converted to
    /// lower case; words that are not exactly `word_length` ASCII letters are
    /// skipped.
    pub fn from_reader<R: BufRead>(word_reader: R, word_length: usize) -> Result<WordBank> {
        Ok(WordBank {
            all_words: word_reader
                .lines()
                .map(|maybe_word| maybe_word.map(|word| word.trim().to_lowercase()))
                .filter(|maybe_word| {
                    maybe_word
                        .as_ref()
                        .map_or(true, |word| is_playable(word, word_length))
                })
                .map(|maybe_word| maybe_word.map(|word| Arc::from(word.as_str())))
                .collect::<Result<Vec<Arc<str>>>>()?,
            word_length,
        })
    }

    /// Constructs a new `WordBank` from the given words.
    ///
    /// Each word is converted to lower case; words that are not exactly
    /// `word_length` ASCII letters are skipped.
    pub fn from_iterator<S, I>(words: I, word_length: usize) -> WordBank
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .filter(|word| is_playable(word, word_length))
                .map(|word| Arc::from(word.as_str()))
                .collect(),
            word_length,
        }
    }

    /// The word length this bank was loaded for.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns a bank with likely plural nouns removed.
    ///
    /// This is a suffix heuristic standing in for a proper linguistic
    /// library: words ending in a lone 's' are dropped, words ending in
    /// "ss" are kept. A plural is never the answer, so candidates are drawn
    /// from this bank, while information-gathering guesses still come from
    /// the full bank.
    pub fn without_plurals(&self) -> WordBank {
        WordBank {
            all_words: self
                .all_words
                .iter()
                .filter(|word| !word.ends_with('s') || word.ends_with("ss"))
                .map(Arc::clone)
                .collect(),
            word_length: self.word_length,
        }
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.all_words
    }
}

fn is_playable(word: &str, word_length: usize) -> bool {
    word.chars().count() == word_length && word.chars().all(|letter| letter.is_ascii_lowercase())
}

/// Counts letter occurrences, duplicates included, and ranks letters by
/// frequency.
///
/// Ties are broken by first-seen order, so ranking is stable for a given
/// insertion sequence but otherwise arbitrary across equally common letters.
#[derive(Debug, Clone, Default)]
pub struct LetterCounter {
    counts: HashMap<char, u32>,
    first_seen: Vec<char>,
}

impl LetterCounter {
    pub fn new() -> LetterCounter {
        LetterCounter::default()
    }

    /// Counts one occurrence of the given letter.
    pub fn add(&mut self, letter: char) {
        let count = self.counts.entry(letter).or_insert(0);
        if *count == 0 {
            self.first_seen.push(letter);
        }
        *count += 1;
    }

    /// Retrieves the number of occurrences counted for the given letter.
    pub fn count(&self, letter: char) -> u32 {
        *self.counts.get(&letter).unwrap_or(&0)
    }

    /// The number of distinct letters counted so far.
    pub fn num_distinct(&self) -> usize {
        self.first_seen.len()
    }

    /// All counted letters, most frequent first.
    pub fn ranked(&self) -> Vec<char> {
        let mut ranking = self.first_seen.clone();
        ranking.sort_by_key(|letter| Reverse(self.count(*letter)));
        ranking
    }

    /// The `n` most frequent letters (fewer if fewer are known).
    pub fn most_common(&self, n: usize) -> Vec<char> {
        let mut ranking = self.ranked();
        ranking.truncate(n);
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn arc_str_vec(words: Vec<&'static str>) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    #[test]
    fn word_bank_from_reader_keeps_only_playable_words() -> Result<()> {
        let cursor = Cursor::new(String::from("WORDA\nwordb\nothers\nfew\n\ncan't\nsmore"));

        let bank = WordBank::from_reader(cursor, 5)?;

        assert_eq!(bank.to_vec(), arc_str_vec(vec!["worda", "wordb", "smore"]));
        assert_eq!(bank.word_length(), 5);
        Ok(())
    }

    #[test]
    fn word_bank_from_iterator_lowercases() {
        let bank = WordBank::from_iterator(vec!["Ghost", "toast"], 5);

        assert_eq!(bank.to_vec(), arc_str_vec(vec!["ghost", "toast"]));
    }

    #[test]
    fn word_bank_without_plurals() {
        let bank = WordBank::from_iterator(vec!["words", "glass", "sassy", "datum"], 5);

        let singular = bank.without_plurals();

        assert_eq!(singular.to_vec(), arc_str_vec(vec!["glass", "sassy", "datum"]));
        assert_eq!(singular.word_length(), 5);
    }

    #[test]
    fn letter_counter_counts_duplicates() {
        let mut counter = LetterCounter::new();
        for letter in "dozer".chars().chain("dozed".chars()) {
            counter.add(letter);
        }

        assert_eq!(counter.count('d'), 3);
        assert_eq!(counter.count('o'), 2);
        assert_eq!(counter.count('z'), 2);
        assert_eq!(counter.count('e'), 2);
        assert_eq!(counter.count('r'), 1);
        assert_eq!(counter.count('q'), 0);
        assert_eq!(counter.num_distinct(), 5);
    }

    #[test]
    fn letter_counter_ranks_by_count_then_first_seen() {
        let mut counter = LetterCounter::new();
        for letter in ['b', 'a', 'c', 'a', 'c', 'b', 'd'] {
            counter.add(letter);
        }

        // 'b', 'a', and 'c' are tied; first-seen order breaks the tie.
        assert_eq!(counter.ranked(), vec!['b', 'a', 'c', 'd']);
        assert_eq!(counter.most_common(2), vec!['b', 'a']);
        assert_eq!(counter.most_common(9), vec!['b', 'a', 'c', 'd']);
    }

    #[test]
    fn letter_counter_empty() {
        let counter = LetterCounter::new();

        assert_eq!(counter.num_distinct(), 0);
        assert!(counter.ranked().is_empty());
        assert!(counter.most_common(3).is_empty());
    }
}
