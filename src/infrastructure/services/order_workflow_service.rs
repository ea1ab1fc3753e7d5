//! Order status lookups and order placement

use std::sync::Arc;

use crate::domain::assistant::{messages, AssistantResponse, Attachments, OrderCreationStep, OrderDraft};
use crate::domain::{CatalogRepository, DomainError, Order, OrderId};

pub const DEFAULT_FEATURED_FOOD_ITEM_ID: &str = "1";

#[derive(Debug)]
pub struct OrderWorkflowService {
    catalog: Arc<dyn CatalogRepository>,
    featured_food_item_id: String,
}

impl OrderWorkflowService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog,
            featured_food_item_id: DEFAULT_FEATURED_FOOD_ITEM_ID.to_string(),
        }
    }

    /// Item offered on the confirmation card
    pub fn with_featured_food_item(mut self, id: impl Into<String>) -> Self {
        self.featured_food_item_id = id.into();
        self
    }

    /// Looks up the first `ORD-<digits>` identifier mentioned in the query
    pub async fn order_status(&self, query_text: &str) -> AssistantResponse {
        let Some(order_id) = OrderId::find_in(query_text) else {
            return AssistantResponse::text(messages::ORDER_ID_NOT_IN_QUERY);
        };

        match self.catalog.find_order(&order_id).await {
            Ok(Some(order)) => AssistantResponse::order(order.details()),
            Ok(None) => {
                tracing::debug!(%order_id, "Order not found");
                AssistantResponse::text(messages::ORDER_NOT_FOUND)
            }
            Err(e) => {
                tracing::error!(%order_id, error = %e, "Order lookup failed");
                AssistantResponse::error(messages::ORDER_LOOKUP_FAILED)
            }
        }
    }

    /// Writes one order under a fresh identifier. An identifier collision is
    /// surfaced as a conflict, not retried.
    pub async fn place_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let order = draft.into_order();
        tracing::info!(order_id = %order.order_id, food_item = %order.food_item_id, quantity = order.quantity, "Placing order");

        self.catalog.insert_order(order).await
    }

    /// Confirmation card while details are incomplete, placement once they are
    pub async fn create_order(&self, attachments: Option<&Attachments>) -> AssistantResponse {
        let step = match OrderCreationStep::from_attachments(attachments) {
            Ok(step) => step,
            Err(DomainError::Validation { message }) => return AssistantResponse::error(message),
            Err(e) => return AssistantResponse::error(e.to_string()),
        };

        match step {
            OrderCreationStep::AwaitingConfirmation => self.confirmation().await,
            OrderCreationStep::Confirmed(draft) => match self.place_order(draft).await {
                Ok(order) => AssistantResponse::text(messages::order_placed(order.order_id.as_str())),
                Err(e) => {
                    tracing::error!(error = %e, "Order placement failed");
                    AssistantResponse::error(messages::ORDER_PLACEMENT_FAILED)
                }
            },
        }
    }

    async fn confirmation(&self) -> AssistantResponse {
        match self.catalog.find_food_item(&self.featured_food_item_id).await {
            Ok(Some(item)) => AssistantResponse::confirmation(messages::ORDER_CONFIRMATION_PROMPT, item),
            Ok(None) => {
                tracing::warn!(food_item = %self.featured_food_item_id, "Featured food item missing from catalog");
                AssistantResponse::error(messages::NO_ITEMS_TO_ORDER)
            }
            Err(e) => {
                tracing::error!(error = %e, "Featured food item lookup failed");
                AssistantResponse::error(messages::ORDER_PLACEMENT_FAILED)
            }
        }
    }
}
