//! System prompts and message assembly for completion calls

use crate::domain::assistant::{ClaimDecision, ClaimRequest};
use crate::domain::Message;

pub const CUISINE_EXTRACTION_PROMPT: &str = "You are an assistant that extracts cuisine types or keywords from user queries about food. \
Analyze the user's query and respond with only the cuisine type or food category if present. \
If the cuisine is misspelled, correct it based on common cuisines.";

pub const FOOD_EXPERT_PROMPT: &str = "You are a knowledgeable food expert. \
Answer questions about dishes, allergens, ingredients, calories, and health benefits accurately and concisely. \
If you are unsure about a specific dish, say so rather than guessing.";

pub const ASSISTANT_PERSONA_PROMPT: &str = "You are a helpful and friendly assistant specialized in food and cuisines. \
You can answer questions about food recommendations, allergens, ingredients, cooking methods, and health benefits. \
If someone asks 'What can you do?', explain your capabilities conversationally.";

/// Adjudication persona listing every outcome the decoder accepts
pub fn claim_adjudication_prompt() -> String {
    let outcomes: Vec<String> = ClaimDecision::ALL
        .iter()
        .enumerate()
        .map(|(i, decision)| format!("{}. {}", i + 1, decision.literal()))
        .collect();

    format!(
        "You are a customer service AI. Analyze the issue described below and the image provided. \
Determine if the product qualifies for:\n{}\nProvide only one of these responses.",
        outcomes.join("\n")
    )
}

pub fn cuisine_extraction_messages(query_text: &str) -> Vec<Message> {
    vec![
        Message::system(CUISINE_EXTRACTION_PROMPT),
        Message::user(format!("User Query: \"{}\"", query_text)),
    ]
}

/// `description` and `image_data` must already be truncated
pub fn claim_messages(claim: &ClaimRequest, description: &str, image_data: &str) -> Vec<Message> {
    vec![
        Message::system(claim_adjudication_prompt()),
        Message::user(format!("Order ID: {}", claim.order_id)),
        Message::user(format!("Description: {}", description)),
        Message::user(format!("Image Data (truncated): {}", image_data)),
    ]
}

pub fn persona_messages(system_prompt: &str, query_text: &str) -> Vec<Message> {
    vec![Message::system(system_prompt), Message::user(query_text)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attachment::UploadedFile;
    use crate::domain::MessageRole;

    #[test]
    fn test_adjudication_prompt_lists_outcomes_in_order() {
        let prompt = claim_adjudication_prompt();
        assert!(prompt.contains(
            "1. Refund Order\n2. Replace Order\n3. Escalate to Human Agent\n"
        ));
    }

    #[test]
    fn test_claim_messages_layout() {
        let claim = ClaimRequest {
            image: UploadedFile::new("a.jpg", vec![1u8]),
            description: "Lid cracked".to_string(),
            order_id: "ORD-9".to_string(),
        };

        let messages = claim_messages(&claim, "Lid", "QUJD");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].content_text(), "Order ID: ORD-9");
        assert_eq!(messages[2].content_text(), "Description: Lid");
        assert_eq!(messages[3].content_text(), "Image Data (truncated): QUJD");
    }
}
