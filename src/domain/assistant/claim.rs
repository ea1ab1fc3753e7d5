//! Damaged/fraudulent item claims: input validation and verdict decoding

use serde::{Deserialize, Serialize};

use super::Attachments;
use crate::domain::attachment::UploadedFile;
use crate::domain::DomainError;

/// Closed set of claim outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimDecision {
    #[serde(rename = "Refund Order")]
    RefundOrder,
    #[serde(rename = "Replace Order")]
    ReplaceOrder,
    #[serde(rename = "Escalate to Human Agent")]
    EscalateToHuman,
}

impl ClaimDecision {
    /// Outcomes in the order they are searched for in model output
    pub const ALL: [ClaimDecision; 3] = [
        ClaimDecision::RefundOrder,
        ClaimDecision::ReplaceOrder,
        ClaimDecision::EscalateToHuman,
    ];

    /// Literal the model is asked to answer with
    pub fn literal(&self) -> &'static str {
        match self {
            Self::RefundOrder => "Refund Order",
            Self::ReplaceOrder => "Replace Order",
            Self::EscalateToHuman => "Escalate to Human Agent",
        }
    }

    /// Finds the first outcome literal, in [`ClaimDecision::ALL`] order, that
    /// occurs in `raw`. Text with no literal is a decoding error.
    pub fn decode(raw: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|decision| raw.contains(decision.literal()))
            .ok_or_else(|| {
                DomainError::decoding(format!("Invalid decision received from model: {}", raw))
            })
    }
}

impl std::fmt::Display for ClaimDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}

/// Attachment keys a claim cannot be filed without, in reporting order
pub const REQUIRED_CLAIM_INPUTS: [&str; 3] = ["image", "description", "order_id"];

/// Validated claim inputs
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRequest {
    pub image: UploadedFile,
    pub description: String,
    pub order_id: String,
}

impl ClaimRequest {
    /// Validates claim attachments.
    ///
    /// Missing keys are reported together in one message. When all keys are
    /// present, every content problem is collected into the message.
    pub fn from_attachments(attachments: &Attachments) -> Result<Self, DomainError> {
        let (image, description, order_id) = match (
            &attachments.image,
            &attachments.description,
            &attachments.order_id,
        ) {
            (Some(image), Some(description), Some(order_id)) => (image, description, order_id),
            _ => {
                let present = [
                    attachments.image.is_some(),
                    attachments.description.is_some(),
                    attachments.order_id.is_some(),
                ];
                let missing: Vec<&str> = REQUIRED_CLAIM_INPUTS
                    .iter()
                    .zip(present)
                    .filter(|(_, present)| !present)
                    .map(|(key, _)| *key)
                    .collect();

                return Err(DomainError::validation(format!(
                    "Missing required inputs: {}",
                    missing.join(", ")
                )));
            }
        };

        let mut problems = Vec::new();

        if description.trim().is_empty() {
            problems.push("Description cannot be empty.");
        }
        if !image.is_genuine_upload() {
            problems.push("Invalid image file.");
        }
        if order_id.trim().is_empty() {
            problems.push("Order ID cannot be empty.");
        }

        if !problems.is_empty() {
            return Err(DomainError::validation(problems.join(" ")));
        }

        Ok(Self {
            image: image.clone(),
            description: description.clone(),
            order_id: order_id.clone(),
        })
    }
}

/// Keeps at most `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
