//! Damaged/fraudulent item claim adjudication

use std::sync::Arc;

use thiserror::Error;

use super::prompts::claim_messages;
use crate::domain::assistant::{
    messages, truncate_chars, AssistantResponse, Attachments, ClaimDecision, ClaimRequest,
};
use crate::domain::attachment::{encode_truncated, AttachmentStore};
use crate::domain::{CompletionClient, DomainError};

pub const DEFAULT_IMAGE_MAX_CHARS: usize = 10_000;
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 100;

/// Size caps applied to claim content before it reaches the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimLimits {
    pub image_max_chars: usize,
    pub description_max_chars: usize,
}

impl Default for ClaimLimits {
    fn default() -> Self {
        Self {
            image_max_chars: DEFAULT_IMAGE_MAX_CHARS,
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }
}

/// Why a claim produced no decision
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("{0}")]
    Invalid(String),

    #[error("image could not be saved: {0}")]
    Save(#[source] DomainError),

    #[error("image could not be encoded: {0}")]
    Encode(#[source] DomainError),

    #[error("claim could not be adjudicated: {0}")]
    Adjudication(#[source] DomainError),
}

impl ClaimError {
    /// Text shown to the customer; external detail stays in the logs
    pub fn customer_message(&self) -> String {
        match self {
            Self::Invalid(message) => message.clone(),
            Self::Save(_) => messages::IMAGE_SAVE_FAILED.to_string(),
            Self::Encode(_) => messages::IMAGE_ENCODE_FAILED.to_string(),
            Self::Adjudication(_) => messages::INTERNAL_ERROR.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FraudClaimService {
    completion: Arc<dyn CompletionClient>,
    attachments: Arc<dyn AttachmentStore>,
    limits: ClaimLimits,
}

impl FraudClaimService {
    pub fn new(completion: Arc<dyn CompletionClient>, attachments: Arc<dyn AttachmentStore>) -> Self {
        Self {
            completion,
            attachments,
            limits: ClaimLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ClaimLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates the claim, stores its image and asks the model for a verdict.
    /// Nothing external is touched when validation fails.
    pub async fn file_claim(&self, attachments: &Attachments) -> Result<ClaimDecision, ClaimError> {
        let claim = ClaimRequest::from_attachments(attachments).map_err(|e| match e {
            DomainError::Validation { message } => ClaimError::Invalid(message),
            other => ClaimError::Invalid(other.to_string()),
        })?;

        let handle = self
            .attachments
            .save(&claim.image)
            .await
            .map_err(ClaimError::Save)?;

        let stored = self
            .attachments
            .read(&handle)
            .await
            .map_err(ClaimError::Encode)?;
        let image_data = encode_truncated(&stored, self.limits.image_max_chars);
        let description = truncate_chars(&claim.description, self.limits.description_max_chars);

        let raw = self
            .completion
            .complete(claim_messages(&claim, description, &image_data))
            .await
            .map_err(ClaimError::Adjudication)?;

        let decision = ClaimDecision::decode(&raw).map_err(ClaimError::Adjudication)?;

        tracing::info!(order_id = %claim.order_id, %decision, attachment = %handle, "Claim adjudicated");
        Ok(decision)
    }

    pub async fn respond(&self, attachments: &Attachments) -> AssistantResponse {
        match self.file_claim(attachments).await {
            Ok(decision) => AssistantResponse::decision(decision),
            Err(ClaimError::Invalid(message)) => {
                tracing::debug!(%message, "Claim rejected");
                AssistantResponse::error(message)
            }
            Err(e) => {
                tracing::error!(error = %e, "Claim processing failed");
                AssistantResponse::error(e.customer_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::domain::attachment::{AttachmentHandle, UploadedFile};
    use crate::domain::llm::MockCompletionClient;
    use crate::infrastructure::attachment::InMemoryAttachmentStore;

    #[derive(Debug)]
    struct BrokenStore {
        fail_save: bool,
    }

    #[async_trait]
    impl AttachmentStore for BrokenStore {
        async fn save(&self, _file: &UploadedFile) -> Result<AttachmentHandle, DomainError> {
            if self.fail_save {
                Err(DomainError::attachment("disk full"))
            } else {
                Ok(AttachmentHandle::new("stored.jpg"))
            }
        }

        async fn read(&self, _handle: &AttachmentHandle) -> Result<Bytes, DomainError> {
            Err(DomainError::attachment("permission denied"))
        }
    }

    fn claim() -> Attachments {
        Attachments::new()
            .with_image(UploadedFile::new("box.jpg", vec![0xAAu8; 30_000]))
            .with_description("x".repeat(250))
            .with_order_id("ORD-12345")
    }

    fn service(completion: Arc<MockCompletionClient>) -> (FraudClaimService, Arc<InMemoryAttachmentStore>) {
        let store = Arc::new(InMemoryAttachmentStore::new());
        (FraudClaimService::new(completion, store.clone()), store)
    }

    #[tokio::test]
    async fn test_decision_from_verbose_reply() {
        let completion = Arc::new(
            MockCompletionClient::new().with_reply("After review: Replace Order is appropriate."),
        );
        let (service, store) = service(completion.clone());

        let decision = service.file_claim(&claim()).await.unwrap();
        assert_eq!(decision, ClaimDecision::ReplaceOrder);
        assert_eq!(store.len(), 1);

        let calls = completion.calls();
        let messages = &calls[0];
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content_text(), "Order ID: ORD-12345");
        assert_eq!(
            messages[2].content_text(),
            format!("Description: {}", "x".repeat(100))
        );

        let image_line = messages[3].content_text();
        let encoded = image_line
            .strip_prefix("Image Data (truncated): ")
            .unwrap();
        assert_eq!(encoded.len(), 10_000);
    }

    #[tokio::test]
    async fn test_custom_limits() {
        let completion = Arc::new(MockCompletionClient::new().with_reply("Refund Order"));
        let (service, _) = service(completion.clone());
        let service = service.with_limits(ClaimLimits {
            image_max_chars: 8,
            description_max_chars: 3,
        });

        service.file_claim(&claim()).await.unwrap();

        let calls = completion.calls();
        assert_eq!(calls[0][2].content_text(), "Description: xxx");
        assert_eq!(calls[0][3].content_text().len(), "Image Data (truncated): ".len() + 8);
    }

    #[tokio::test]
    async fn test_validation_happens_before_any_call() {
        let completion = Arc::new(MockCompletionClient::new());
        let (service, store) = service(completion.clone());

        let response = service
            .respond(&Attachments::new().with_description("crushed"))
            .await;

        assert_eq!(
            response.error.as_deref(),
            Some("Missing required inputs: image, order_id")
        );
        assert_eq!(completion.call_count(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_description() {
        let completion = Arc::new(MockCompletionClient::new());
        let (service, _) = service(completion);

        let attachments = claim().with_description("  \t ");
        let response = service.respond(&attachments).await;
        assert_eq!(response.error.as_deref(), Some("Description cannot be empty."));
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_internal_error() {
        let completion = Arc::new(MockCompletionClient::new().with_reply("I cannot decide."));
        let (service, _) = service(completion);

        let response = service.respond(&claim()).await;
        assert_eq!(response.error.as_deref(), Some(messages::INTERNAL_ERROR));
    }

    #[tokio::test]
    async fn test_completion_failure_is_internal_error() {
        let completion = Arc::new(MockCompletionClient::new().with_failure("503"));
        let (service, _) = service(completion);

        let result = service.file_claim(&claim()).await;
        assert!(matches!(result, Err(ClaimError::Adjudication(_))));
    }

    #[tokio::test]
    async fn test_save_failure() {
        let completion = Arc::new(MockCompletionClient::new());
        let service = FraudClaimService::new(
            completion.clone(),
            Arc::new(BrokenStore { fail_save: true }),
        );

        let response = service.respond(&claim()).await;
        assert_eq!(response.error.as_deref(), Some(messages::IMAGE_SAVE_FAILED));
        assert_eq!(completion.call_count(), 0);
    }

    #[tokio::test]
    async fn test_read_failure() {
        let completion = Arc::new(MockCompletionClient::new());
        let service = FraudClaimService::new(
            completion.clone(),
            Arc::new(BrokenStore { fail_save: false }),
        );

        let response = service.respond(&claim()).await;
        assert_eq!(response.error.as_deref(), Some(messages::IMAGE_ENCODE_FAILED));
        assert_eq!(completion.call_count(), 0);
    }
}
