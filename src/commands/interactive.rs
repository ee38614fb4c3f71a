//! Interactive assistant mode
//!
//! Suggests hard-mode guesses while a human plays the real puzzle and types
//! in the feedback they received.

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::session::{GameSession, Phase, SessionConfig};
use crate::solver::GuessSelector;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once the space is at most this small
const SHOW_CANDIDATES: usize = 10;

/// What the player typed at a prompt
enum Input {
    Quit,
    NewGame,
    Undo,
    Text(String),
}

/// Run the interactive assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
/// Malformed words and feedback are reported and re-prompted.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive(
    dictionary: &Dictionary,
    selector: &GuessSelector,
    config: SessionConfig,
) -> io::Result<()> {
    let mut session = GameSession::new(dictionary, selector, config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n{}", "Hard-mode solver - interactive mode".bright_cyan().bold());
    println!("After each guess, enter the feedback you got:\n");
    println!("  g - green  (right letter, right spot)");
    println!("  y - yellow (right letter, wrong spot)");
    println!("  x - grey   (letter not available)\n");
    println!("Commands: 'quit', 'new' for a new game, 'undo' to take back a guess\n");

    loop {
        match session.phase() {
            Phase::Solved => {
                print_victory(&session);
                match prompt(&mut input, "Play again? (yes/no)")? {
                    Input::Text(answer) if matches!(answer.as_str(), "yes" | "y") => {
                        new_game(&mut session);
                        continue;
                    }
                    _ => {
                        goodbye();
                        return Ok(());
                    }
                }
            }
            Phase::Failed => {
                println!(
                    "\n{}",
                    format!("❌ Out of guesses after {}", session.guesses_used())
                        .red()
                        .bold()
                );
                print_candidates(&session);
                match prompt(&mut input, "Command (undo/new/quit)")? {
                    Input::Undo => undo(&mut session),
                    Input::NewGame => new_game(&mut session),
                    _ => {
                        goodbye();
                        return Ok(());
                    }
                }
                continue;
            }
            _ => {}
        }

        let turn = session.guesses_used() + 1;
        let cap = session.config().max_guesses;
        let remaining = session.space().len();
        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}/{cap}: {remaining} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        let Some(suggestion) = session.suggest() else {
            return Err(io::Error::other("solution space is empty"));
        };
        let suggested = *suggestion.word;
        match suggestion.worst_case {
            Some(worst) => println!(
                "\n📊 Suggested guess: {}  (worst case {worst} left)\n",
                suggested.text().to_uppercase().bright_yellow().bold()
            ),
            None => println!(
                "\n📊 Suggested guess: {}  (opening)\n",
                suggested.text().to_uppercase().bright_yellow().bold()
            ),
        }
        if remaining <= SHOW_CANDIDATES {
            print_candidates(&session);
        }

        // Guess actually played, defaulting to the suggestion
        let guess = loop {
            match prompt(&mut input, &format!("Your guess (enter for {suggested})"))? {
                Input::Quit => {
                    goodbye();
                    return Ok(());
                }
                Input::NewGame => {
                    new_game(&mut session);
                    break None;
                }
                Input::Undo => {
                    undo(&mut session);
                    break None;
                }
                Input::Text(text) if text.is_empty() => break Some(suggested),
                Input::Text(text) => match Word::new(&text) {
                    Ok(word) => break Some(word),
                    Err(e) => eprintln!("Error: {e}"),
                },
            }
        };
        let Some(guess) = guess else {
            continue;
        };

        let pattern = loop {
            match prompt(&mut input, "Feedback (e.g. 'gyyxx', or 'win')")? {
                Input::Quit => {
                    goodbye();
                    return Ok(());
                }
                Input::NewGame => {
                    new_game(&mut session);
                    break None;
                }
                // Back to the guess prompt
                Input::Undo => break None,
                Input::Text(text) if matches!(text.as_str(), "win" | "correct" | "solved") => {
                    break Some(Pattern::PERFECT);
                }
                Input::Text(text) => match Pattern::parse(&text) {
                    Ok(pattern) => break Some(pattern),
                    Err(e) => eprintln!("Error: {e}"),
                },
            }
        };
        let Some(pattern) = pattern else {
            continue;
        };

        match session.submit(guess, pattern) {
            Ok(Phase::Narrowed) => {
                if let Some(answer) = session.space().solution() {
                    println!(
                        "\n✨ Only one word fits: {}\n",
                        answer.text().to_uppercase().bright_green().bold()
                    );
                }
            }
            Ok(_) => {}
            Err(err @ SolverError::ContradictoryFeedback { .. }) => {
                eprintln!("\n❌ {err}");
                eprintln!("Check the feedback and enter it again, or 'undo'.\n");
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

fn undo(session: &mut GameSession<'_, '_>) {
    match session.undo() {
        Some(record) => println!("✓ Took back {}\n", record.guess.text().to_uppercase()),
        None => println!("Nothing to undo!\n"),
    }
}

fn new_game(session: &mut GameSession<'_, '_>) {
    session.reset();
    println!("\n🔄 New game started!\n");
}

fn goodbye() {
    println!("\n👋 Thanks for playing!\n");
}

fn print_candidates(session: &GameSession<'_, '_>) {
    println!("Remaining candidates:");
    for candidate in session.space().iter().take(SHOW_CANDIDATES) {
        println!("  • {}", candidate.text().to_uppercase());
    }
    println!();
}

fn print_victory(session: &GameSession<'_, '_>) {
    let guesses = session.guesses_used();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "   🎉  S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );
    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.text().to_uppercase().bright_white().bold(),
            record.pattern.to_emoji()
        );
    }
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Read one line from the player, mapping commands; EOF counts as quit
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Input> {
    print!("{message}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Quit);
    }

    let text = line.trim().to_lowercase();
    Ok(match text.as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        _ => Input::Text(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_maps_commands() {
        let mut input = Cursor::new("QUIT\n");
        assert!(matches!(prompt(&mut input, "x").unwrap(), Input::Quit));

        let mut input = Cursor::new("undo\n");
        assert!(matches!(prompt(&mut input, "x").unwrap(), Input::Undo));

        let mut input = Cursor::new("  GYXXG \n");
        match prompt(&mut input, "x").unwrap() {
            Input::Text(text) => assert_eq!(text, "gyxxg"),
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn prompt_eof_is_quit() {
        let mut input = Cursor::new("");
        assert!(matches!(prompt(&mut input, "x").unwrap(), Input::Quit));
    }
}
