//! Keyword-priority intent classification
//!
//! Rules are evaluated top to bottom and the first match wins. The table is
//! the single source of precedence: fraud keywords sit above the order-status
//! keywords they overlap with ("defective", "damaged"), so a query carrying
//! both is always a fraud claim.

use serde::Serialize;

use super::Query;

/// Handler a query is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Recommendation,
    GeneralQuery,
    FraudClaim,
    OrderStatus,
    OrderCreation,
    Fallback,
}

/// How a rule's keywords are located in the query text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Keyword must stand alone, delimited by non-alphanumeric characters
    WholeWord,
    /// Keyword may appear anywhere, including inside longer words
    Substring,
}

/// One row of the classification table
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub mode: MatchMode,
}

/// Matched as whole words: as substrings "hi" would fire inside "shipping"
/// and "something", and greeting outranks every other rule.
pub const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "how are you", "hey"];

pub const RECOMMENDATION_KEYWORDS: &[&str] = &["recommend", "show", "list", "suggest", "give"];

pub const GENERAL_QUERY_KEYWORDS: &[&str] = &[
    "allergen",
    "ingredients",
    "calories",
    "health",
    "explain",
    "details",
    "information",
];

pub const FRAUD_KEYWORDS: &[&str] = &[
    "fraud",
    "issue",
    "problem",
    "defective",
    "damaged",
    "broken",
];

pub const ORDER_STATUS_KEYWORDS: &[&str] = &[
    "order status",
    "shipping status",
    "defective",
    "spoiled",
    "damaged",
    "refund",
    "replace",
    "status of order",
    "track my order",
];

pub const ORDER_CREATION_KEYWORDS: &[&str] = &["place order"];

/// Classification rules in priority order. Anything unmatched is `Fallback`.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        keywords: GREETING_KEYWORDS,
        mode: MatchMode::WholeWord,
    },
    IntentRule {
        intent: Intent::Recommendation,
        keywords: RECOMMENDATION_KEYWORDS,
        mode: MatchMode::Substring,
    },
    IntentRule {
        intent: Intent::GeneralQuery,
        keywords: GENERAL_QUERY_KEYWORDS,
        mode: MatchMode::Substring,
    },
    IntentRule {
        intent: Intent::FraudClaim,
        keywords: FRAUD_KEYWORDS,
        mode: MatchMode::Substring,
    },
    IntentRule {
        intent: Intent::OrderStatus,
        keywords: ORDER_STATUS_KEYWORDS,
        mode: MatchMode::Substring,
    },
    IntentRule {
        intent: Intent::OrderCreation,
        keywords: ORDER_CREATION_KEYWORDS,
        mode: MatchMode::Substring,
    },
];

impl IntentRule {
    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| match self.mode {
            MatchMode::Substring => text.contains(keyword),
            MatchMode::WholeWord => contains_whole_word(text, keyword),
        })
    }
}

fn contains_whole_word(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(start, _)| {
        let end = start + keyword.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Outcome of routing: the chosen intent plus the query it was chosen for
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub intent: Intent,
    pub query: Query,
}

/// Intent for raw text, by the first matching rule
pub fn classify_text(text: &str) -> Intent {
    let lowered = text.trim().to_lowercase();

    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

pub fn classify(query: Query) -> Classification {
    Classification {
        intent: classify_text(query.text()),
        query,
    }
}
