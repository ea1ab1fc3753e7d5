//! Assistant services: the intent router and the workflows it dispatches to

mod assistant_service;
mod food_query_service;
mod fraud_claim_service;
mod order_workflow_service;
mod prompts;
mod recommendation_service;

pub use assistant_service::{AssistantService, AssistantSettings};
pub use food_query_service::FoodQueryService;
pub use fraud_claim_service::{
    ClaimError, ClaimLimits, FraudClaimService, DEFAULT_DESCRIPTION_MAX_CHARS,
    DEFAULT_IMAGE_MAX_CHARS,
};
pub use order_workflow_service::{OrderWorkflowService, DEFAULT_FEATURED_FOOD_ITEM_ID};
pub use recommendation_service::{RecommendationService, Recommendations};
