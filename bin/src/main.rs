use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::io::Write;
use wordle_helper::*;

/// More candidates than this and the helper suggests information-gathering
/// words instead of listing everything.
const CANDIDATE_DISPLAY_THRESHOLD: usize = 30;
const NUM_SUGGESTIONS: usize = 10;

/// Helper for solving Wordle-style puzzles: it accumulates your feedback
/// round by round and tells you what to play next.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of words, with one word on each
    /// line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The puzzle's word length.
    #[arg(short = 'l', long, default_value_t = 5)]
    length: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive solving session, entering feedback after each
    /// round.
    Play,
    /// Filter the dictionary directly from already-known constraints.
    Find {
        /// Positional constraint: lowercase letters for confirmed slots and
        /// '?' for unknown ones, e.g. "?o?er".
        #[arg(short, long)]
        prototype: Option<String>,

        /// Letters known to be in the word, position unknown (yellow).
        #[arg(short = 'y', long, default_value = "")]
        present: String,

        /// Letters known not to be in the word (grey).
        #[arg(short = 'x', long, default_value = "")]
        absent: String,

        /// Keep plural words in the results.
        #[arg(long)]
        keep_plurals: bool,
    },
    /// Print instructions for the interactive mode.
    Instructions,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let bank = WordBank::from_reader(words_reader, args.length)?;
    println!("Loaded {} {}-letter words.", bank.len(), args.length);

    match args.command {
        Command::Play => play(&bank),
        Command::Find {
            prototype,
            present,
            absent,
            keep_plurals,
        } => find(&bank, prototype.as_deref(), &present, &absent, keep_plurals),
        Command::Instructions => {
            print_instructions();
            Ok(())
        }
    }
}

fn play(bank: &WordBank) -> io::Result<()> {
    // Plurals are never the answer, but they can still be worth playing for
    // information, so suggestions are drawn from the full bank.
    let answer_bank = bank.without_plurals();
    let mut state = KnowledgeState::new(bank.word_length());

    println!("A strong opening word is \"soare\", but play whatever you like.\n");

    loop {
        let word_played = prompt("Enter the word you played (or 'q' to quit): ")?;
        if word_played == "q" {
            println!("[Game ended]");
            return Ok(());
        }

        let feedback = prompt("Enter the feedback you received (e.g. \"XXYGX\"): ")?;
        let round = match Round::from_feedback(&word_played, &feedback) {
            Ok(round) => round,
            Err(error) => {
                println!("Invalid input: {}.\n", error);
                continue;
            }
        };
        if let Err(error) = state.process_round(&round) {
            println!("Invalid input: {}.\n", error);
            continue;
        }
        let mut floating_letters: Vec<char> = state.present_letters().into_iter().collect();
        floating_letters.sort_unstable();
        if floating_letters.is_empty() {
            println!(
                "Known so far: {}\n",
                prototype_string(state.correct_positions())
            );
        } else {
            println!(
                "Known so far: {} (also somewhere in the word: {})\n",
                prototype_string(state.correct_positions()),
                floating_letters.iter().collect::<String>()
            );
        }
        if state.is_solved() {
            println!(
                "The answer is \"{}\".",
                prototype_string(state.correct_positions())
            );
            return Ok(());
        }

        let candidates = get_candidate_words(&state, &answer_bank);
        if candidates.len() == 1 {
            println!("The answer is \"{}\".", candidates[0]);
            return Ok(());
        } else if candidates.is_empty() {
            println!("No words match the entered feedback; check it for a contradiction.\n");
        } else if candidates.len() > CANDIDATE_DISPLAY_THRESHOLD {
            println!(
                "Not enough information yet; {} candidates remain.",
                candidates.len()
            );
            println!("Play one of these to extract the most information:\n");
            let query = SuggestionQuery {
                candidates: &candidates,
                correct_positions: state.correct_positions(),
                min_distinct_letters: bank.word_length(),
                excluded_positions: Some(state.excluded_positions()),
            };
            let suggestions = suggest_words(&query, bank);
            for (index, word) in suggestions.iter().take(NUM_SUGGESTIONS).enumerate() {
                println!("{}. {}", index + 1, word);
            }
            println!();
        } else {
            println!("The answer should be one of these {} words:\n", candidates.len());
            for word in &candidates {
                println!("  {}", word);
            }
            println!("\nCommon words are more likely than obscure ones.\n");
        }
    }
}

fn find(
    bank: &WordBank,
    prototype: Option<&str>,
    present: &str,
    absent: &str,
    keep_plurals: bool,
) -> io::Result<()> {
    let slots = match prototype {
        Some(prototype) => parse_prototype(prototype).map_err(to_invalid_input)?,
        None => vec![None; bank.word_length()],
    };
    if slots.len() != bank.word_length() {
        return Err(to_invalid_input(SolverError::MismatchedLengths {
            expected: bank.word_length(),
            actual: slots.len(),
        }));
    }
    for letter in present.chars().chain(absent.chars()) {
        if !letter.is_ascii_lowercase() {
            return Err(to_invalid_input(SolverError::UnsupportedCharacter(letter)));
        }
    }

    let searched_bank = if keep_plurals {
        bank.clone()
    } else {
        bank.without_plurals()
    };
    let found_words: Vec<_> = searched_bank
        .iter()
        .filter(|word| {
            matches_prototype(word, &slots)
                && contains_all_letters(word, present.chars())
                && contains_no_letters(word, absent.chars())
        })
        .collect();

    if found_words.is_empty() {
        println!("No words found.");
        return Ok(());
    }
    println!("The following words were found:\n");
    for word in &found_words {
        println!("  {}", word);
    }
    println!("\nCommon words are more likely than obscure ones.");
    Ok(())
}

fn print_instructions() {
    println!(
        "1. Each round, play a word in the puzzle.\n\
         2. Enter the word you played, then a string of characters describing\n\
         \x20  the feedback you received:\n\
         \x20    - GREY (not in the word): enter 'X' in the letter's position.\n\
         \x20    - YELLOW (in the word, somewhere else): enter 'Y'.\n\
         \x20    - GREEN (in the right spot): enter 'G'.\n\n\
         \x20  For example, if you play \"ghost\" and the 'g', 'h', and 't' come\n\
         \x20  back grey, the 'o' yellow, and the 's' green, enter \"XXYGX\".\n\n\
         3. Repeat until the game is over."
    );
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_lowercase())
}

fn to_invalid_input(error: SolverError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}
