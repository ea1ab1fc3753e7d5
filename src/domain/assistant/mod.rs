//! Assistant domain - query routing and workflow rules

mod claim;
mod cuisine;
mod intent;
pub mod messages;
mod order_flow;
mod query;
mod response;

pub use claim::{truncate_chars, ClaimDecision, ClaimRequest, REQUIRED_CLAIM_INPUTS};
pub use cuisine::{
    display_cuisine, CuisineNormalizer, DEFAULT_MAX_EDIT_DISTANCE, KNOWN_CUISINES,
    UNKNOWN_CUISINE,
};
pub use intent::{
    classify, classify_text, Classification, Intent, IntentRule, MatchMode, FRAUD_KEYWORDS,
    GENERAL_QUERY_KEYWORDS, GREETING_KEYWORDS, INTENT_RULES, ORDER_CREATION_KEYWORDS,
    ORDER_STATUS_KEYWORDS, RECOMMENDATION_KEYWORDS,
};
pub use order_flow::{OrderCreationStep, OrderDraft};
pub use query::{Attachments, Query};
pub use response::{AssistantResponse, ResponseBody};
