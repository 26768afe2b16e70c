use serde::{Deserialize, Serialize};

/// Card network brand inferred from number patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    Visa,
    MasterCard,
    AmericanExpress,
    Discover,
    DinersClub,
    Jcb,
    Unknown,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Visa => "Visa",
            Brand::MasterCard => "MasterCard",
            Brand::AmericanExpress => "American Express",
            Brand::Discover => "Discover",
            Brand::DinersClub => "Diners Club",
            Brand::Jcb => "JCB",
            Brand::Unknown => "Unknown",
        }
    }

    /// Whether the brand is a recognized network (anything but `Unknown`).
    pub fn is_known(&self) -> bool {
        !matches!(self, Brand::Unknown)
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome for a single input in batch mode.
///
/// `number` is always the masked rendering; invalid input is masked in full
/// so malformed entries are never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Classification {
    pub fn classified(masked: String, brand: Brand) -> Self {
        Self {
            number: masked,
            brand: Some(brand),
            valid: true,
            error: None,
        }
    }

    pub fn invalid(masked: String, error: String) -> Self {
        Self {
            number: masked,
            brand: None,
            valid: false,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub recognized: usize,
    pub unknown: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_cards(cards: &[Classification]) -> Self {
        let (recognized, unknown, invalid) =
            cards
                .iter()
                .fold((0, 0, 0), |(r, u, i), card| match card.brand {
                    Some(brand) if brand.is_known() => (r + 1, u, i),
                    Some(_) => (r, u + 1, i),
                    None => (r, u, i + 1),
                });

        Self {
            total: cards.len(),
            recognized,
            unknown,
            invalid,
        }
    }
}

/// Full batch result, the unit reporters render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub version: String,
    pub summary: Summary,
    pub cards: Vec<Classification>,
}

impl ClassifyResult {
    pub fn new(cards: Vec<Classification>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            summary: Summary::from_cards(&cards),
            cards,
        }
    }
}
