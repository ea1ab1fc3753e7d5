//! Intent router: classifies each query and hands it to one workflow

use std::sync::Arc;

use super::food_query_service::FoodQueryService;
use super::fraud_claim_service::{ClaimLimits, FraudClaimService};
use super::order_workflow_service::{OrderWorkflowService, DEFAULT_FEATURED_FOOD_ITEM_ID};
use super::recommendation_service::RecommendationService;
use crate::domain::assistant::{
    classify, messages, AssistantResponse, Classification, CuisineNormalizer, Intent, Query,
    DEFAULT_MAX_EDIT_DISTANCE,
};
use crate::domain::{AttachmentStore, CatalogRepository, CompletionClient};

/// Tunables for the workflows behind the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    pub claim_limits: ClaimLimits,
    pub featured_food_item_id: String,
    pub cuisine_max_edit_distance: usize,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            claim_limits: ClaimLimits::default(),
            featured_food_item_id: DEFAULT_FEATURED_FOOD_ITEM_ID.to_string(),
            cuisine_max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

#[derive(Debug)]
pub struct AssistantService {
    recommendations: RecommendationService,
    claims: FraudClaimService,
    orders: OrderWorkflowService,
    food_queries: FoodQueryService,
}

impl AssistantService {
    pub fn new(
        completion: Arc<dyn CompletionClient>,
        catalog: Arc<dyn CatalogRepository>,
        attachments: Arc<dyn AttachmentStore>,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            recommendations: RecommendationService::new(completion.clone(), catalog.clone())
                .with_normalizer(
                    CuisineNormalizer::default()
                        .with_max_edit_distance(settings.cuisine_max_edit_distance),
                ),
            claims: FraudClaimService::new(completion.clone(), attachments)
                .with_limits(settings.claim_limits),
            orders: OrderWorkflowService::new(catalog)
                .with_featured_food_item(settings.featured_food_item_id),
            food_queries: FoodQueryService::new(completion),
        }
    }

    /// Classifies and dispatches; every outcome is a response, never an error
    pub async fn handle(&self, query: Query) -> AssistantResponse {
        let Classification { intent, query } = classify(query);
        tracing::info!(?intent, has_attachments = query.attachments().is_some(), "Routing query");

        let response = match intent {
            Intent::Greeting => AssistantResponse::text(messages::GREETING),
            Intent::Recommendation => self.recommendations.respond(query.text()).await,
            Intent::GeneralQuery => self.food_queries.answer_food_question(query.text()).await,
            Intent::FraudClaim => match query.attachments() {
                Some(attachments) => self.claims.respond(attachments).await,
                None => AssistantResponse::error(messages::FRAUD_INPUT_REQUIRED),
            },
            Intent::OrderStatus => self.orders.order_status(query.text()).await,
            Intent::OrderCreation => self.orders.create_order(query.attachments()).await,
            Intent::Fallback => self.food_queries.fallback(query.text()).await,
        };
        tracing::debug!(?intent, is_error = response.is_error(), "Query handled");
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::{Attachments, ClaimDecision, ResponseBody};
    use crate::domain::attachment::UploadedFile;
    use crate::domain::llm::MockCompletionClient;
    use crate::domain::storage::Storage;
    use crate::domain::{FoodItem, Order, UserDetails};
    use crate::infrastructure::attachment::InMemoryAttachmentStore;
    use crate::infrastructure::catalog::{sample_food_items, StorageCatalogRepository};
    use crate::infrastructure::storage::InMemoryStorage;

    struct Fixture {
        assistant: AssistantService,
        completion: Arc<MockCompletionClient>,
        orders: Arc<InMemoryStorage<Order>>,
    }

    fn fixture(completion: MockCompletionClient) -> Fixture {
        fixture_with(completion, AssistantSettings::default())
    }

    fn fixture_with(completion: MockCompletionClient, settings: AssistantSettings) -> Fixture {
        let completion = Arc::new(completion);
        let orders = Arc::new(InMemoryStorage::<Order>::new());
        let catalog = Arc::new(StorageCatalogRepository::new(
            Arc::new(InMemoryStorage::with_entities(sample_food_items())),
            orders.clone(),
        ));

        Fixture {
            assistant: AssistantService::new(
                completion.clone(),
                catalog,
                Arc::new(InMemoryAttachmentStore::new()),
                settings,
            ),
            completion,
            orders,
        }
    }

    #[tokio::test]
    async fn test_greeting_makes_no_calls() {
        let f = fixture(MockCompletionClient::new());

        let response = f.assistant.handle(Query::new("Hello!")).await;
        assert_eq!(response.response_text(), Some(messages::GREETING));
        assert_eq!(f.completion.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unmatched_query_calls_fallback_once() {
        let f = fixture(MockCompletionClient::new().with_reply("I answer food questions."));

        let response = f.assistant.handle(Query::new("what can you do?")).await;
        assert_eq!(response.response_text(), Some("I answer food questions."));
        assert_eq!(f.completion.call_count(), 1);
    }

    #[tokio::test]
    async fn test_recommendation_end_to_end() {
        let f = fixture(MockCompletionClient::new().with_reply("itallian"));

        let response = f.assistant.handle(Query::new("recommend something")).await;
        let Some(ResponseBody::Lines(lines)) = response.response else {
            panic!("expected recommendation lines");
        };
        assert!(lines.iter().any(|line| line.contains("Spaghetti Carbonara") && line.contains("$12.99")));
    }

    #[tokio::test]
    async fn test_misspelling_tolerance_follows_settings() {
        let settings = AssistantSettings {
            cuisine_max_edit_distance: 0,
            ..AssistantSettings::default()
        };
        let f = fixture_with(MockCompletionClient::new().with_reply("itallian"), settings);

        let response = f.assistant.handle(Query::new("recommend something")).await;
        assert_eq!(
            response.response_text(),
            Some("No recommendations found for Unknown cuisine.")
        );
    }

    #[tokio::test]
    async fn test_fraud_without_attachments() {
        let f = fixture(MockCompletionClient::new());

        let response = f.assistant.handle(Query::new("my food arrived damaged")).await;
        assert_eq!(response.error.as_deref(), Some(messages::FRAUD_INPUT_REQUIRED));
        assert_eq!(f.completion.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_attachments_count_as_none() {
        let f = fixture(MockCompletionClient::new());

        let query = Query::new("there is a problem").with_attachments(Attachments::new());
        let response = f.assistant.handle(query).await;
        assert_eq!(response.error.as_deref(), Some(messages::FRAUD_INPUT_REQUIRED));
    }

    #[tokio::test]
    async fn test_fraud_claim_with_attachments() {
        let f = fixture(MockCompletionClient::new().with_reply("Refund Order"));

        let attachments = Attachments::new()
            .with_image(UploadedFile::new("spill.jpg", vec![1u8, 2, 3]))
            .with_description("The soup leaked everywhere")
            .with_order_id("ORD-555555");
        let query = Query::new("my order is damaged and I want a refund").with_attachments(attachments);

        let response = f.assistant.handle(query).await;
        assert_eq!(response.decision, Some(ClaimDecision::RefundOrder));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"decision": "Refund Order"})
        );
    }

    #[tokio::test]
    async fn test_status_query_with_empty_repository() {
        let f = fixture(MockCompletionClient::new());

        let response = f
            .assistant
            .handle(Query::new("what is the status of order ORD-12345"))
            .await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"response": "No order found with the provided order ID."})
        );
    }

    #[tokio::test]
    async fn test_order_creation_flow() {
        let f = fixture(MockCompletionClient::new());

        let confirmation = f.assistant.handle(Query::new("I want to place order")).await;
        let featured: FoodItem = confirmation.food_item.clone().unwrap();
        assert_eq!(featured.id, "1");
        assert_eq!(f.orders.count().await.unwrap(), 0);

        let attachments = Attachments::new()
            .with_user_details(UserDetails {
                name: "Lena".to_string(),
                collecting_order: true,
                ..Default::default()
            })
            .with_food_item(featured)
            .with_quantity(1);
        let placed = f
            .assistant
            .handle(Query::new("place order").with_attachments(attachments))
            .await;

        assert!(placed.response_text().unwrap().contains("ORD-"));
        assert_eq!(f.orders.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_general_query_routes_to_food_expert() {
        let f = fixture(MockCompletionClient::new().with_reply("Contains gluten and egg."));

        let response = f
            .assistant
            .handle(Query::new("what allergens are in carbonara"))
            .await;
        assert_eq!(response.response_text(), Some("Contains gluten and egg."));
        assert_eq!(f.completion.call_count(), 1);
    }
}
