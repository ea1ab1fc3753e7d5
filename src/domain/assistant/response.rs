//! Caller-facing response shape

use serde::Serialize;

use super::ClaimDecision;
use crate::domain::catalog::{FoodItem, OrderDetails};

/// Payload carried under the `response` key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Text(String),
    Lines(Vec<String>),
    Order(OrderDetails),
}

/// Result of handling one query.
///
/// Serializes to `{"response": ...}`, `{"error": ...}`, `{"decision": ...}`
/// or, for order confirmation, `{"response": ..., "foodItem": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<ClaimDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_item: Option<FoodItem>,
}

impl AssistantResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response: Some(ResponseBody::Text(text.into())),
            ..Default::default()
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            response: Some(ResponseBody::Lines(lines)),
            ..Default::default()
        }
    }

    pub fn order(details: OrderDetails) -> Self {
        Self {
            response: Some(ResponseBody::Order(details)),
            ..Default::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn decision(decision: ClaimDecision) -> Self {
        Self {
            decision: Some(decision),
            ..Default::default()
        }
    }

    pub fn confirmation(prompt: impl Into<String>, food_item: FoodItem) -> Self {
        Self {
            response: Some(ResponseBody::Text(prompt.into())),
            food_item: Some(food_item),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The `response` payload when it is plain text
    #[cfg(test)]
    pub fn response_text(&self) -> Option<&str> {
        match &self.response {
            Some(ResponseBody::Text(text)) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_shape() {
        let json = serde_json::to_value(AssistantResponse::text("hello")).unwrap();
        assert_eq!(json, json!({ "response": "hello" }));
    }

    #[test]
    fn test_error_shape() {
        let json = serde_json::to_value(AssistantResponse::error("nope")).unwrap();
        assert_eq!(json, json!({ "error": "nope" }));
    }

    #[test]
    fn test_lines_shape() {
        let json =
            serde_json::to_value(AssistantResponse::lines(vec!["a".into(), "b".into()])).unwrap();
        assert_eq!(json, json!({ "response": ["a", "b"] }));
    }

    #[test]
    fn test_decision_shape() {
        let json =
            serde_json::to_value(AssistantResponse::decision(ClaimDecision::ReplaceOrder)).unwrap();
        assert_eq!(json, json!({ "decision": "Replace Order" }));
    }

    #[test]
    fn test_confirmation_shape() {
        let item = FoodItem::new("1", "Tacos", "Corn tortillas", 8.0, "Mexican");
        let json =
            serde_json::to_value(AssistantResponse::confirmation("Confirm?", item)).unwrap();

        assert_eq!(json["response"], "Confirm?");
        assert_eq!(json["foodItem"]["foodId"], "1");
        assert!(json.get("error").is_none());
    }
}
