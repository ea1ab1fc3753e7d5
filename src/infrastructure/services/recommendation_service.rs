//! Cuisine-based dish recommendations

use std::sync::Arc;

use super::prompts::cuisine_extraction_messages;
use crate::domain::assistant::{
    display_cuisine, messages, AssistantResponse, CuisineNormalizer, UNKNOWN_CUISINE,
};
use crate::domain::{CatalogRepository, CompletionClient, DomainError};

/// Outcome of a recommendation lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// One formatted line per matching dish
    Dishes(Vec<String>),
    /// The catalog holds nothing for this (normalized) cuisine
    NoneFound { cuisine: String },
}

impl Recommendations {
    pub fn into_response(self) -> AssistantResponse {
        match self {
            Self::Dishes(lines) => AssistantResponse::lines(lines),
            Self::NoneFound { cuisine } => {
                AssistantResponse::text(messages::no_recommendations(&display_cuisine(&cuisine)))
            }
        }
    }
}

#[derive(Debug)]
pub struct RecommendationService {
    completion: Arc<dyn CompletionClient>,
    catalog: Arc<dyn CatalogRepository>,
    normalizer: CuisineNormalizer,
}

impl RecommendationService {
    pub fn new(completion: Arc<dyn CompletionClient>, catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            completion,
            catalog,
            normalizer: CuisineNormalizer::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: CuisineNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Asks the model for the cuisine in the query and maps it onto a known one
    pub async fn extract_cuisine(&self, query_text: &str) -> Result<String, DomainError> {
        let raw = self
            .completion
            .complete(cuisine_extraction_messages(query_text))
            .await?;

        let cuisine = self.normalizer.normalize(&raw);
        tracing::debug!(extracted = %raw.trim(), normalized = %cuisine, "Extracted cuisine");

        Ok(cuisine)
    }

    pub async fn recommend(&self, query_text: &str) -> Result<Recommendations, DomainError> {
        let cuisine = self.extract_cuisine(query_text).await?;

        if cuisine == UNKNOWN_CUISINE {
            return Ok(Recommendations::NoneFound { cuisine });
        }

        let items = self.catalog.find_food_items_by_cuisine(&cuisine).await?;
        if items.is_empty() {
            return Ok(Recommendations::NoneFound { cuisine });
        }

        Ok(Recommendations::Dishes(
            items.iter().map(|item| item.recommendation_line()).collect(),
        ))
    }

    /// Recommendation as a caller-facing response; failures are logged and
    /// reported generically
    pub async fn respond(&self, query_text: &str) -> AssistantResponse {
        match self.recommend(query_text).await {
            Ok(recommendations) => recommendations.into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Recommendation lookup failed");
                AssistantResponse::error(messages::RECOMMENDATION_FAILED)
            }
        }
    }
}
