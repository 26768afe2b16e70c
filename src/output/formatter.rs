//! Output formatter for classification results.

use crate::brand::ClassifyResult;
use crate::cli::OutputFormat;
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};

/// Unified output formatter that selects the appropriate reporter.
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Format the classification result to a string.
    pub fn format(&self, result: &ClassifyResult) -> String {
        match self.format {
            OutputFormat::Terminal => {
                let reporter = TerminalReporter::new(self.quiet);
                reporter.report(result)
            }
            OutputFormat::Json => {
                let reporter = JsonReporter::new();
                reporter.report(result)
            }
        }
    }
}
