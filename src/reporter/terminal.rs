use crate::brand::{Brand, Classification, ClassifyResult};
use crate::reporter::Reporter;
use colored::{ColoredString, Colorize};

/// Interior width of the result panel, matching the 50-column banners.
const PANEL_WIDTH: usize = 48;

pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn status_label(card: &Classification) -> ColoredString {
        match card.brand {
            Some(brand) if brand.is_known() => format!("{:<9}", "[OK]").green().bold(),
            Some(_) => format!("{:<9}", "[UNKNOWN]").yellow(),
            None => format!("{:<9}", "[INVALID]").red().bold(),
        }
    }

    fn format_card(&self, card: &Classification) -> String {
        let label = Self::status_label(card);
        match card.brand {
            Some(brand) => format!("{} {}  {}\n", label, card.number, brand_label(brand)),
            None => {
                let reason = card.error.as_deref().unwrap_or("invalid input");
                format!("{} {}  {}\n", label, card.number, reason.dimmed())
            }
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ClassifyResult) -> String {
        let mut output = String::new();

        if !self.quiet {
            output.push_str(&format!("{}\n\n", "CARD BRAND ANALYSIS".bold()));
        }

        for card in &result.cards {
            output.push_str(&self.format_card(card));
        }

        let summary = &result.summary;
        output.push_str(&format!(
            "\n{} number(s) checked: {} recognized, {} unknown, {} invalid\n",
            summary.total, summary.recognized, summary.unknown, summary.invalid
        ));

        output
    }
}

/// Brand name with its display color.
pub fn brand_label(brand: Brand) -> ColoredString {
    match brand {
        Brand::Visa => brand.as_str().blue().bold(),
        Brand::MasterCard => brand.as_str().red().bold(),
        Brand::AmericanExpress => brand.as_str().cyan().bold(),
        Brand::Discover => brand.as_str().yellow().bold(),
        Brand::DinersClub => brand.as_str().magenta().bold(),
        Brand::Jcb => brand.as_str().green().bold(),
        Brand::Unknown => brand.as_str().dimmed(),
    }
}

/// Boxed analysis panel shown after each interactive classification.
///
/// Padding is computed on the plain text before color is applied, so ANSI
/// escape codes never skew the panel alignment.
pub fn result_panel(masked: &str, brand: Brand) -> String {
    let mut panel = String::new();

    panel.push_str(&format!("┌{}┐\n", "─".repeat(PANEL_WIDTH)));
    panel.push_str(&format!("│{:^width$}│\n", "ANALYSIS RESULT", width = PANEL_WIDTH));
    panel.push_str(&format!("├{}┤\n", "─".repeat(PANEL_WIDTH)));
    let brand_text = if brand.is_known() {
        format!("✓ {}", brand)
    } else {
        "? Unknown".to_string()
    };
    panel.push_str(&padded_row("Number:", masked, None));
    panel.push_str(&padded_row("Brand:", &brand_text, Some(brand)));
    panel.push_str(&format!("└{}┘\n", "─".repeat(PANEL_WIDTH)));

    panel
}

fn padded_row(field: &str, value: &str, brand: Option<Brand>) -> String {
    let plain = format!(" {:<8}{}", field, value);
    let pad = PANEL_WIDTH.saturating_sub(plain.chars().count());

    let rendered = match brand {
        Some(brand) => {
            let colored_value = match brand {
                Brand::Unknown => value.yellow().to_string(),
                _ => value.green().to_string(),
            };
            format!(" {:<8}{}", field, colored_value)
        }
        None => plain,
    };

    format!("│{}{}│\n", rendered, " ".repeat(pad))
}
