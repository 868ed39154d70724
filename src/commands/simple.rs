//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: the player guesses a hidden word and may
//! ask for a hint, extend the word list, or hand the game to the solver.

use crate::config::GameConfig;
use crate::error::{CommandError, GuessError};
use crate::lexicon::Lexicon;
use crate::output::formatters::{guess_row, guesses_label, keyboard_lines};
use crate::solver::{AutoSolver, GuessRecord, Outcome, Session};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Hint,
    Solve,
    Add(Option<String>),
    Guess(String),
    Empty,
}

impl Input {
    /// Command names win over guesses; prefix a guess with `!` to play a
    /// word that collides with one (e.g. `!solve`)
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(word) = line.strip_prefix('!') {
            return Self::Guess(word.trim().to_string());
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Self::Empty;
        };
        match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "hint" | "h" => Self::Hint,
            "solve" | "s" => Self::Solve,
            "add" | "a" => Self::Add(parts.next().map(str::to_string)),
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// lexicon is empty.
pub fn run_simple(config: &GameConfig, lexicon: &mut Lexicon) -> Result<(), CommandError> {
    let stdin = io::stdin();
    let mut rng = config.rng();
    run_simple_with(config, lexicon, &mut rng, stdin.lock(), io::stdout())
}

/// Run the game loop over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error on I/O failure or if the lexicon is empty.
pub fn run_simple_with<R, I, O>(
    config: &GameConfig,
    lexicon: &mut Lexicon,
    rng: &mut R,
    mut input: I,
    mut out: O,
) -> Result<(), CommandError>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    print_banner(&mut out)?;

    let solver = config.solver();
    let mut session = Session::random(lexicon, config.max_guesses, rng)?;

    loop {
        if session.is_over() {
            print_outcome(&mut out, &session)?;
            if !confirm(&mut input, &mut out, "Play again? (yes/no)")? {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            session = Session::random(lexicon, config.max_guesses, rng)?;
            writeln!(out, "\n🔄 New game started!\n")?;
        }

        let label = format!(
            "Guess {}/{}",
            session.history().len() + 1,
            session.max_guesses()
        );
        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            writeln!(out)?;
            return Ok(());
        };

        match Input::parse(&line) {
            Input::Empty => {}
            Input::Quit => {
                writeln!(out, "\nThe word was {}.", session.secret().as_str().bold())?;
                writeln!(out, "👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Input::New => {
                writeln!(out, "The word was {}.", session.secret().as_str().bold())?;
                session = Session::random(lexicon, config.max_guesses, rng)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Input::Hint => match solver.selector().hint(lexicon, rng) {
                Ok(word) => writeln!(out, "💡 Try {}", word.as_str().bright_cyan().bold())?,
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            Input::Solve => auto_finish(&mut out, &solver, &mut session, lexicon, rng)?,
            Input::Add(None) => writeln!(out, "Usage: add WORD")?,
            Input::Add(Some(word)) => {
                add_word(&mut out, lexicon, &word)?;
            }
            Input::Guess(text) => {
                guess(&mut input, &mut out, &mut session, lexicon, &text)?;
            }
        }
    }
}

fn guess<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    session: &mut Session,
    lexicon: &mut Lexicon,
    text: &str,
) -> Result<(), CommandError> {
    match session.submit(lexicon, text) {
        Ok(record) => print_record(out, &record, session),
        Err(GuessError::NotInLexicon(word)) => {
            let question = format!("{word} is not in the word list. Add it? (yes/no)");
            if confirm(input, out, &question)? && add_word(out, lexicon, &word)? {
                match session.submit(lexicon, &word) {
                    Ok(record) => print_record(out, &record, session)?,
                    Err(e) => writeln!(out, "❌ {e}")?,
                }
            }
            Ok(())
        }
        Err(e) => {
            writeln!(out, "❌ {e}")?;
            Ok(())
        }
    }
}

/// Returns whether the word was added
fn add_word<O: Write>(out: &mut O, lexicon: &mut Lexicon, word: &str) -> Result<bool, CommandError> {
    match lexicon.add_word(word) {
        Ok(word) => {
            writeln!(out, "✓ Added {} to the word list", word.as_str().bold())?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "❌ {e}")?;
            Ok(false)
        }
    }
}

fn auto_finish<R: Rng + ?Sized, O: Write>(
    out: &mut O,
    solver: &AutoSolver,
    session: &mut Session,
    lexicon: &Lexicon,
    rng: &mut R,
) -> Result<(), CommandError> {
    writeln!(out, "🤖 Solver taking over...")?;
    while let Some(record) = solver.step(session, lexicon, rng) {
        print_record(out, &record, session)?;
        if let Some(remaining) = record.candidates_after {
            writeln!(out, "   {remaining} candidates remain")?;
        }
    }
    Ok(())
}

fn print_banner<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Wordpie - Simple Mode                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Guess the hidden five-letter word. After each guess:\n")?;
    writeln!(out, "  🟩 letter is in the right spot")?;
    writeln!(out, "  🟨 letter is in the word, elsewhere")?;
    writeln!(out, "  ⬜ letter is not in that spot\n")?;
    writeln!(
        out,
        "Commands: 'hint', 'add WORD', 'solve', 'new', 'quit' ('!word' forces a guess)\n"
    )
}

fn print_record<O: Write>(out: &mut O, record: &GuessRecord, session: &Session) -> Result<(), CommandError> {
    writeln!(
        out,
        "\n  {}  {}",
        guess_row(&record.word, &record.evaluation),
        record.evaluation.to_emoji()
    )?;
    for line in keyboard_lines(&session.keyboard()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_outcome<O: Write>(out: &mut O, session: &Session) -> io::Result<()> {
    let secret = session.secret();
    match session.outcome() {
        Some(Outcome::Solved { guesses }) => {
            writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    ".bright_green().bold()
            )?;
            writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

            let performance = match *guesses {
                1 => "🏆 Perfect!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                _ => "👍 Solved!",
            };
            writeln!(out, "\n  {}", performance.bright_yellow().bold())?;
            writeln!(
                out,
                "  {} found in {}",
                secret.as_str().bright_white().bold(),
                guesses_label(*guesses).bright_cyan()
            )?;
        }
        Some(Outcome::Lost) => {
            writeln!(
                out,
                "\n❌ Out of guesses! The word was {}.",
                secret.as_str().bold()
            )?;
        }
        Some(Outcome::NoSolution(error)) => {
            writeln!(out, "\n⚠️  Solver gave up: {error}")?;
            writeln!(out, "The word was {}.", secret.as_str().bold())?;
        }
        None => return Ok(()),
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, record) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.as_str().bright_white().bold(),
            record.evaluation.to_emoji()
        )?;
    }
    writeln!(out)
}

/// Get user input with a prompt; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn confirm<I: BufRead, O: Write>(input: &mut I, out: &mut O, question: &str) -> io::Result<bool> {
    let answer = prompt(input, out, question)?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::FrequencyTable;
    use crate::wordlists::MemorySource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::build(
            MemorySource::from_slice(words),
            FrequencyTable::embedded().unwrap(),
        )
        .unwrap()
    }

    fn play(lexicon: &mut Lexicon, script: &str) -> String {
        colored::control::set_override(false);
        let mut rng = StdRng::seed_from_u64(5);
        let mut out = Vec::new();
        run_simple_with(
            &GameConfig::default(),
            lexicon,
            &mut rng,
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Input::parse("  QUIT "), Input::Quit);
        assert_eq!(Input::parse("hint"), Input::Hint);
        assert_eq!(Input::parse("solve"), Input::Solve);
        assert_eq!(Input::parse("add fjord"), Input::Add(Some("fjord".to_string())));
        assert_eq!(Input::parse("add"), Input::Add(None));
        assert_eq!(Input::parse("crane"), Input::Guess("crane".to_string()));
        assert_eq!(Input::parse("!solve"), Input::Guess("solve".to_string()));
        assert_eq!(Input::parse("   "), Input::Empty);
    }

    #[test]
    fn winning_game() {
        let mut lexicon = lexicon(&["CRANE"]);
        let output = play(&mut lexicon, "crane\nno\n");

        assert!(output.contains("S O L V E D"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn unknown_guess_can_be_added() {
        let mut lexicon = lexicon(&["CRANE", "SLATE"]);
        let output = play(&mut lexicon, "fjord\nyes\nquit\n");

        assert!(output.contains("FJORD is not in the word list"));
        assert!(output.contains("Added FJORD"));
        assert!(lexicon.contains("FJORD"));
    }

    #[test]
    fn declined_word_is_not_added() {
        let mut lexicon = lexicon(&["CRANE", "SLATE"]);
        play(&mut lexicon, "fjord\nno\nquit\n");
        assert!(!lexicon.contains("FJORD"));
    }

    #[test]
    fn hint_and_invalid_input() {
        let mut lexicon = lexicon(&["CRANE", "SLATE"]);
        let output = play(&mut lexicon, "hint\nab\nquit\n");

        assert!(output.contains("💡 Try"));
        assert!(output.contains("invalid guess"));
        assert!(output.contains("The word was"));
    }

    #[test]
    fn solver_takes_over() {
        let mut lexicon = lexicon(&["CRANE", "SLATE", "IRATE"]);
        let output = play(&mut lexicon, "solve\nno\n");

        assert!(output.contains("Solver taking over"));
        assert!(output.contains("S O L V E D"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut lexicon = lexicon(&["CRANE", "SLATE"]);
        let output = play(&mut lexicon, "");
        assert!(output.contains("Guess 1/6"));
    }
}
