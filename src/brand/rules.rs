//! Ordered brand rules.
//!
//! The table is walked top to bottom and the first matching rule wins. Order
//! matters because the prefix ranges overlap: a 16-digit number starting
//! with `4` must classify as Visa even though nothing later would claim it,
//! and `35` must only reach the JCB rule after MasterCard and American
//! Express have had their chance at the two-digit prefix.

use crate::brand::types::Brand;
use crate::card::CardNumber;
use tracing::trace;

struct BrandRule {
    brand: Brand,
    matches: fn(&str) -> bool,
}

const RULES: &[BrandRule] = &[
    BrandRule {
        brand: Brand::Visa,
        matches: matches_visa,
    },
    BrandRule {
        brand: Brand::MasterCard,
        matches: matches_mastercard,
    },
    BrandRule {
        brand: Brand::AmericanExpress,
        matches: matches_amex,
    },
    BrandRule {
        brand: Brand::Discover,
        matches: matches_discover,
    },
    BrandRule {
        brand: Brand::DinersClub,
        matches: matches_diners_club,
    },
    BrandRule {
        brand: Brand::Jcb,
        matches: matches_jcb,
    },
];

/// Classify a normalized card number into a brand.
///
/// Total and deterministic: every input maps to exactly one brand, with
/// `Brand::Unknown` as the fallthrough when no rule matches.
pub fn classify(number: &CardNumber) -> Brand {
    let digits = number.as_str();
    trace!(
        length = digits.len(),
        rules = RULES.len(),
        "Checking number against brand rules"
    );

    RULES
        .iter()
        .find(|rule| (rule.matches)(digits))
        .map(|rule| rule.brand)
        .unwrap_or(Brand::Unknown)
}

/// Numeric value of the first `len` digits, if that many exist.
///
/// Prefix ranges are compared as integers rather than as string slices so
/// the bounds are unambiguous.
fn prefix_value(digits: &str, len: usize) -> Option<u32> {
    digits.get(..len).and_then(|p| p.parse().ok())
}

fn matches_visa(digits: &str) -> bool {
    digits.starts_with('4') && matches!(digits.len(), 13 | 16 | 19)
}

fn matches_mastercard(digits: &str) -> bool {
    digits.len() == 16 && prefix_value(digits, 2).is_some_and(|p| (51..=55).contains(&p))
}

fn matches_amex(digits: &str) -> bool {
    digits.len() == 15 && (digits.starts_with("34") || digits.starts_with("37"))
}

// Discover carries no length requirement.
fn matches_discover(digits: &str) -> bool {
    digits.starts_with("6011")
        || digits.starts_with("65")
        || prefix_value(digits, 3).is_some_and(|p| (644..=649).contains(&p))
}

// Length exactly 14 excludes some real 15/16/19-digit Diners Club numbers;
// the narrowing is intentional and kept as-is.
fn matches_diners_club(digits: &str) -> bool {
    digits.len() == 14
        && (prefix_value(digits, 3).is_some_and(|p| (300..=305).contains(&p))
            || digits.starts_with("36")
            || digits.starts_with("38"))
}

fn matches_jcb(digits: &str) -> bool {
    digits.len() == 16 && digits.starts_with("35")
}
