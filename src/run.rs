//! Non-interactive batch classification.

use crate::brand::{Classification, ClassifyResult, classify};
use crate::card::CardNumber;
use crate::cli::Cli;
use std::process::ExitCode;
use tracing::debug;

/// Classify every number given on the command line.
pub fn run_classify(cli: &Cli) -> ClassifyResult {
    let mut cards = Vec::with_capacity(cli.numbers.len());

    for raw in &cli.numbers {
        match CardNumber::parse(raw) {
            Ok(number) => {
                let brand = classify(&number);
                debug!(number = %number, brand = %brand, "Classified card number");
                cards.push(Classification::classified(number.masked(), brand));
            }
            Err(e) => {
                debug!(error = %e, "Rejected input");
                // Fully mask invalid input; it may contain anything.
                let masked = "*".repeat(raw.chars().count());
                cards.push(Classification::invalid(masked, e.to_string()));
            }
        }
    }

    ClassifyResult::new(cards)
}

/// Exit code for a batch run.
///
/// Invalid input wins over strict-mode unknowns: 2 when any argument failed
/// validation, 1 when `--strict` and any number classified as Unknown,
/// 0 otherwise.
pub fn exit_code_for(result: &ClassifyResult, strict: bool) -> ExitCode {
    ExitCode::from(exit_status(result, strict))
}

fn exit_status(result: &ClassifyResult, strict: bool) -> u8 {
    if result.summary.invalid > 0 {
        2
    } else if strict && result.summary.unknown > 0 {
        1
    } else {
        0
    }
}
