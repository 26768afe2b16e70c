use card_brand::{Cli, OutputFormatter, Repl, exit_code_for, logging, run_classify};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // No numbers on the command line means an interactive session.
    if cli.numbers.is_empty() {
        return match Repl::stdio().with_quiet(cli.quiet).run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Interactive session aborted");
                eprintln!("Unexpected error: {e}. Exiting.");
                ExitCode::FAILURE
            }
        };
    }

    let result = run_classify(&cli);
    let output = OutputFormatter::new(cli.format)
        .with_quiet(cli.quiet)
        .format(&result);
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    exit_code_for(&result, cli.strict)
}
