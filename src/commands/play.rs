//! Interactive helper
//!
//! Suggests guesses for a game played elsewhere and narrows the candidates
//! from the feedback the player types in.

use crate::core::{ParsePatternError, Pattern, Word};
use crate::output::formatters::{format_letters, format_misplaced, join_words};
use crate::solver::{Game, Outcome, Selector, SolverError};
use std::io::{self, BufRead, Write};

/// Candidate lists longer than this are only counted
const SHOW_CANDIDATES: usize = 20;
/// Candidate lists up to this size are shown after running out of turns
const SHOW_LEFTOVERS: usize = 10;

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Undo,
    Feedback(Result<Pattern, ParsePatternError>),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Self::Quit,
            "new" => Self::New,
            "undo" => Self::Undo,
            "won" | "win" | "solved" => Self::Feedback(Ok(Pattern::PERFECT)),
            _ => Self::Feedback(line.parse()),
        }
    }
}

/// Run the interactive helper until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    dictionary: &[Word],
    selector: &Selector,
    max_turns: usize,
) -> io::Result<()> {
    print_banner(out, dictionary.len())?;

    let mut game = Game::new(dictionary, selector).with_max_turns(max_turns);
    let mut suggestion = announce(out, &game)?;
    let mut line = String::new();

    loop {
        if let Some(word) = suggestion {
            writeln!(out, "\nWhat feedback did you get for '{word}'?")?;
            writeln!(
                out,
                "(Enter colors as: GYBBB, 21000, 🟩🟨⬛⬛⬛, or 'undo', 'new', 'quit')"
            )?;
            write!(out, "Feedback: ")?;
        } else {
            write!(out, "Command: ")?;
        }
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\nThanks for playing!")?;
            return Ok(());
        }

        match Input::parse(&line) {
            Input::Quit => {
                writeln!(out, "Thanks for playing!")?;
                return Ok(());
            }
            Input::New => {
                game.reset();
                writeln!(out, "\n🔄 New game started!")?;
                suggestion = announce(out, &game)?;
            }
            Input::Undo => {
                if game.undo() {
                    writeln!(out, "✓ Undone! Back to turn {}", game.turn())?;
                    suggestion = announce(out, &game)?;
                } else {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            Input::Feedback(_) if suggestion.is_none() => {
                if game.is_finished() {
                    writeln!(out, "The game is over. Type 'new' to play again or 'quit' to exit.")?;
                } else {
                    writeln!(out, "Type 'new' to play again, 'undo' to go back, or 'quit' to exit.")?;
                }
            }
            Input::Feedback(Err(e)) => {
                writeln!(out, "Error: {e}")?;
                writeln!(out, "Please try again with a valid format.")?;
            }
            Input::Feedback(Ok(pattern)) => {
                let Some(guess) = suggestion else { continue };
                writeln!(out, "Interpreted as: {pattern}")?;
                let outcome = game.apply(guess, pattern);
                report(out, &game, outcome)?;
                suggestion = announce(out, &game)?;
            }
        }
    }
}

fn print_banner<W: Write>(out: &mut W, words: usize) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "INTERACTIVE WORDLE HELPER")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "I'll suggest a word, you play it and tell me the colors.")?;
    writeln!(out)?;
    writeln!(out, "Feedback formats you can use:")?;
    writeln!(out, "  G/Y/B:   GYBBB (Green/Yellow/Black)")?;
    writeln!(out, "  Numbers: 21000 (2=Green, 1=Yellow, 0=Black)")?;
    writeln!(out, "  Emojis:  🟩🟨⬛⬛⬛")?;
    writeln!(out, "  'win' if the word was right")?;
    writeln!(out, "Loaded {words} words")?;
    writeln!(out, "{}", "=".repeat(60))
}

/// Print the turn header and the next suggestion, if the game goes on
fn announce<W: Write>(out: &mut W, game: &Game<'_>) -> io::Result<Option<Word>> {
    let Ok(word) = game.suggest() else {
        return Ok(None);
    };

    let candidates = game.candidates();
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "TURN {}", game.turn())?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "Possible words remaining: {}", candidates.len())?;
    if candidates.len() <= SHOW_CANDIDATES {
        writeln!(out, "Remaining possibilities: {}", join_words(candidates, ", "))?;
    }

    writeln!(out, "\n🎯 SUGGESTED WORD: {word}")?;
    Ok(Some(word))
}

fn report<W: Write>(
    out: &mut W,
    game: &Game<'_>,
    outcome: Result<Outcome, SolverError>,
) -> io::Result<()> {
    let guesses = || join_words(game.history().iter().map(|(word, _)| word), " -> ");

    match outcome {
        Ok(Outcome::Solved { turns }) => {
            writeln!(out, "\n🎉 CONGRATULATIONS! Solved in {turns} tries!")?;
            writeln!(out, "Guesses: {}", guesses())?;
            writeln!(out, "Type 'new' to play again or 'quit' to exit.")
        }
        Ok(Outcome::Continue { .. }) => print_knowledge(out, game),
        Ok(Outcome::Exhausted { remaining }) => {
            print_knowledge(out, game)?;
            writeln!(out, "\n😞 Didn't solve it in {} tries!", game.max_turns())?;
            writeln!(out, "Final guesses: {}", guesses())?;
            if remaining <= SHOW_LEFTOVERS {
                writeln!(
                    out,
                    "Remaining possibilities were: {}",
                    join_words(game.candidates(), ", ")
                )?;
            }
            writeln!(out, "Type 'new' to play again or 'quit' to exit.")
        }
        Err(SolverError::NoCandidates) => {
            print_knowledge(out, game)?;
            writeln!(
                out,
                "\n❌ No valid words remaining! There might be an error in the feedback."
            )?;
            writeln!(out, "The target word might not be in my dictionary.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.")
        }
        Err(SolverError::GameOver) => {
            writeln!(out, "The game is over. Type 'new' to play again.")
        }
    }
}

fn print_knowledge<W: Write>(out: &mut W, game: &Game<'_>) -> io::Result<()> {
    let knowledge = game.knowledge();
    writeln!(out, "\nUpdated knowledge:")?;
    writeln!(out, "  Known letters:    {}", format_letters(knowledge.known()))?;
    writeln!(out, "  Excluded letters: {}", format_letters(knowledge.excluded()))?;
    writeln!(out, "  Misplaced:        {}", format_misplaced(knowledge))?;
    writeln!(out, "  Pattern:          {}", knowledge.revealed_pattern())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn play(script: &str, dictionary: &[Word], max_turns: usize) -> String {
        let mut out = Vec::new();
        run_play(
            Cursor::new(script),
            &mut out,
            dictionary,
            &Selector::default(),
            max_turns,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands_and_aliases() {
        assert_eq!(Input::parse("Quit\n"), Input::Quit);
        assert_eq!(Input::parse(" q "), Input::Quit);
        assert_eq!(Input::parse("EXIT"), Input::Quit);
        assert_eq!(Input::parse("new"), Input::New);
        assert_eq!(Input::parse("undo"), Input::Undo);
        assert_eq!(Input::parse("Won"), Input::Feedback(Ok(Pattern::PERFECT)));
        assert_eq!(Input::parse("solved"), Input::Feedback(Ok(Pattern::PERFECT)));
        assert_eq!(
            Input::parse("21000\n"),
            Input::Feedback(Ok("GYBBB".parse().unwrap()))
        );
        assert!(matches!(Input::parse("hello"), Input::Feedback(Err(_))));
    }

    #[test]
    fn session_solves_with_feedback() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("BBBBG\n22210\nwin\n", &dictionary, 6);

        assert!(output.contains("🎯 SUGGESTED WORD: COURT"));
        assert!(output.contains("Possible words remaining: 4"));
        assert!(output.contains("🎯 SUGGESTED WORD: SLATE"));
        assert!(output.contains("🎯 SUGGESTED WORD: SLANT"));
        assert!(output.contains("Solved in 3 tries!"));
        assert!(output.contains("Guesses: COURT -> SLATE -> SLANT"));
        assert!(output.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn knowledge_is_reported_after_feedback() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("BBBBG\nquit\n", &dictionary, 6);

        assert!(output.contains("Interpreted as: BBBBG"));
        assert!(output.contains("Known letters:    T"));
        assert!(output.contains("Excluded letters: C, O, R, U"));
        assert!(output.contains("Pattern:          ____T"));
        assert!(output.contains("Misplaced:        None"));
    }

    #[test]
    fn misplaced_letters_are_reported() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("BYBBB
quit
", &dictionary, 6);

        assert!(output.contains("Known letters:    O"));
        assert!(output.contains("Misplaced:        O@2"));
    }

    #[test]
    fn feedback_after_solving_points_to_new_game() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("win
BBBBB
quit
", &dictionary, 6);

        assert!(output.contains("Solved in 1 tries!"));
        assert!(output.contains("The game is over. Type 'new' to play again or 'quit' to exit."));
    }

    #[test]
    fn invalid_feedback_asks_again() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("GYB\nquit\n", &dictionary, 6);

        assert!(output.contains("Error: invalid feedback format"));
        assert!(output.contains("Please try again with a valid format."));
        assert_eq!(output.matches("TURN 1").count(), 1);
    }

    #[test]
    fn undo_returns_to_previous_turn() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("undo\nBBBBB\nundo\nquit\n", &dictionary, 6);

        assert!(output.contains("Nothing to undo!"));
        assert!(output.contains("✓ Undone! Back to turn 1"));
        assert_eq!(output.matches("TURN 1").count(), 2);
    }

    #[test]
    fn contradictory_feedback_reports_no_candidates() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("GGGGB\nBBBBB\nnew\nquit\n", &dictionary, 6);

        assert!(output.contains("No valid words remaining!"));
        assert!(output.contains("Type 'new' to play again, 'undo' to go back, or 'quit' to exit."));
        assert!(output.contains("🔄 New game started!"));
        assert_eq!(output.matches("TURN 1").count(), 2);
    }

    #[test]
    fn running_out_of_turns_lists_leftovers() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("BBBBG\n", &dictionary, 1);

        assert!(output.contains("Didn't solve it in 1 tries!"));
        assert!(output.contains("Final guesses: COURT"));
        assert!(output.contains("Remaining possibilities were: "));
        assert!(!output.contains("TURN 2"));
    }

    #[test]
    fn end_of_input_quits() {
        let dictionary = words_from_slice(&WORDS[..40]);
        let output = play("", &dictionary, 6);

        assert!(output.contains("Loaded 40 words"));
        assert!(output.ends_with("Thanks for playing!\n"));
    }
}
