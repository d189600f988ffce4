use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The classifier reports this value for every label. It is a fixed
/// presentation constant, not derived from the scoring margin.
pub const DOMAIN_CONFIDENCE: f32 = 0.85;

const RESTAURANT_KEYWORDS: [&str; 7] = [
    "restaurant",
    "menu",
    "food",
    "order",
    "meal",
    "dish",
    "cuisine",
];
const ECOMMERCE_KEYWORDS: [&str; 6] = [
    "price", "product", "order", "customer", "sales", "revenue",
];
const SAAS_KEYWORDS: [&str; 5] = ["user", "subscription", "trial", "plan", "feature"];
const FINANCE_KEYWORDS: [&str; 5] = ["amount", "balance", "transaction", "account", "payment"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainLabel {
    Restaurant,
    #[serde(rename = "E-commerce")]
    Ecommerce,
    #[serde(rename = "SaaS")]
    Saas,
    Finance,
    General,
}

impl DomainLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Ecommerce => "E-commerce",
            Self::Saas => "SaaS",
            Self::Finance => "Finance",
            Self::General => "General",
        }
    }
}

impl Display for DomainLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexicon scores one point per keyword that appears as a substring of at
/// least one column name. Several keywords may hit the same column.
fn lexicon_score(columns_lower: &[String], keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| columns_lower.iter().any(|column| column.contains(*keyword)))
        .count()
}

/// Pick a business-domain label for a column schema.
///
/// The precedence chain is deliberately not a pure max-score rule: any
/// restaurant hit wins outright, then the remaining lexicons are compared
/// with ties resolved in e-commerce > SaaS > finance order. When no lexicon
/// scores at all, the label is `General`; the tie-break comparisons only
/// apply between lexicons that could still win.
#[must_use]
pub fn classify_domain(columns: &[String]) -> (DomainLabel, f32) {
    let columns_lower = columns
        .iter()
        .map(|column| column.to_lowercase())
        .collect::<Vec<_>>();

    let restaurant = lexicon_score(&columns_lower, &RESTAURANT_KEYWORDS);
    let ecommerce = lexicon_score(&columns_lower, &ECOMMERCE_KEYWORDS);
    let saas = lexicon_score(&columns_lower, &SAAS_KEYWORDS);
    let finance = lexicon_score(&columns_lower, &FINANCE_KEYWORDS);

    let label = if restaurant > 0 {
        DomainLabel::Restaurant
    } else if ecommerce + saas + finance == 0 {
        DomainLabel::General
    } else if ecommerce >= saas && ecommerce >= finance {
        DomainLabel::Ecommerce
    } else if saas >= finance {
        DomainLabel::Saas
    } else if finance > 0 {
        DomainLabel::Finance
    } else {
        DomainLabel::General
    };

    (label, DOMAIN_CONFIDENCE)
}
