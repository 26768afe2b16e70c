//! Interactive classification loop.
//!
//! The loop has two states, `Prompting` and `Terminated`, and advances one
//! prompt cycle at a time. Input comes through the [`LineReader`] capability
//! so the whole loop can be driven by a scripted reader in tests.

use crate::brand::classify;
use crate::card::CardNumber;
use crate::error::Result;
use crate::reporter::terminal::result_panel;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

const BANNER_WIDTH: usize = 50;

/// Keywords that terminate the session at the number prompt.
const EXIT_KEYWORDS: &[&str] = &["sair", "exit", "quit"];

/// Answers that continue the session after a result. Anything else stops.
const CONTINUE_KEYWORDS: &[&str] = &["s", "sim", "y", "yes"];

/// Capability to read one line of user input.
pub trait LineReader {
    /// Read the next line, `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Blocking reader over the process stdin.
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
        }
    }
}

enum LoopState {
    Prompting,
    Terminated,
}

pub struct Repl<R, W> {
    reader: R,
    out: W,
    quiet: bool,
}

impl Repl<StdinLineReader, io::Stdout> {
    /// A REPL wired to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(StdinLineReader, io::stdout())
    }
}

impl<R: LineReader, W: Write> Repl<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Drive the loop until the user leaves or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.prompt_cycle()? {
                LoopState::Prompting => {}
                LoopState::Terminated => {
                    self.goodbye()?;
                    return Ok(());
                }
            }
        }
    }

    /// One full cycle: banner, prompt, classify, continue question.
    fn prompt_cycle(&mut self) -> Result<LoopState> {
        self.banner()?;

        write!(self.out, "Card number: ")?;
        self.out.flush()?;
        let Some(line) = self.reader.read_line()? else {
            return Ok(LoopState::Terminated);
        };

        let input = line.trim();
        if EXIT_KEYWORDS.contains(&input.to_lowercase().as_str()) {
            return Ok(LoopState::Terminated);
        }

        let number = match CardNumber::parse(input) {
            Ok(number) => number,
            Err(e) => {
                debug!(error = %e, "Rejected interactive input");
                writeln!(self.out)?;
                writeln!(self.out, "{} {}", "Error:".red().bold(), e)?;
                writeln!(
                    self.out,
                    "Enter digits only, at least 13 of them (spaces and hyphens are fine)."
                )?;
                write!(self.out, "\nPress Enter to try again...")?;
                self.out.flush()?;
                return match self.reader.read_line()? {
                    Some(_) => Ok(LoopState::Prompting),
                    None => Ok(LoopState::Terminated),
                };
            }
        };

        let brand = classify(&number);
        debug!(number = %number, brand = %brand, "Classified card number");
        writeln!(self.out)?;
        write!(self.out, "{}", result_panel(&number.masked(), brand))?;

        write!(self.out, "\nClassify another card? (y/n): ")?;
        self.out.flush()?;
        match self.reader.read_line()? {
            Some(answer) if CONTINUE_KEYWORDS.contains(&answer.trim().to_lowercase().as_str()) => {
                Ok(LoopState::Prompting)
            }
            _ => Ok(LoopState::Terminated),
        }
    }

    fn banner(&mut self) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let bar = "═".repeat(BANNER_WIDTH);
        writeln!(self.out, "\n{}", bar)?;
        // Center on the plain text before styling so ANSI codes never skew
        // the layout.
        let title = format!("{:^width$}", "CARD BRAND IDENTIFIER", width = BANNER_WIDTH);
        writeln!(self.out, "{}", title.bold())?;
        writeln!(
            self.out,
            "{:^width$}",
            "Find out which network issued your card",
            width = BANNER_WIDTH
        )?;
        writeln!(self.out, "{}", bar)?;
        writeln!(self.out)?;
        writeln!(self.out, "Enter the full card number; spaces and hyphens are fine.")?;
        writeln!(self.out, "Type \"exit\" to leave.")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.out, "\nThanks for stopping by. Bye!")?;
        Ok(())
    }
}
