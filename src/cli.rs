use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "card-brand",
    version,
    about = "Identify the network brand of a credit card number",
    long_about = "card-brand classifies credit card numbers into network brands (Visa, \
                  MasterCard, American Express, Discover, Diners Club, JCB) using prefix \
                  and length rules. Card numbers are always displayed masked. Run without \
                  arguments for an interactive session."
)]
pub struct Cli {
    /// Card numbers to classify (omit to start the interactive session)
    pub numbers: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Strict mode: exit non-zero when any number classifies as Unknown
    #[arg(short, long)]
    pub strict: bool,

    /// Suppress the banner in terminal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    pub verbose: bool,
}
