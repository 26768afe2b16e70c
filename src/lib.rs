pub mod brand;
pub mod card;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;
pub mod reporter;
pub mod run;

pub use brand::{Brand, Classification, ClassifyResult, Summary, classify};
pub use card::{CardNumber, mask};
pub use cli::{Cli, OutputFormat};
pub use error::{CardError, Result};
pub use output::OutputFormatter;
pub use repl::{LineReader, Repl, StdinLineReader};
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
pub use run::{exit_code_for, run_classify};
