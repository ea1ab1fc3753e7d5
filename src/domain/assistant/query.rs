//! Customer query and its optional attachments

use crate::domain::attachment::UploadedFile;
use crate::domain::catalog::{FoodItem, UserDetails};

/// Extra inputs a workflow may need alongside the query text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachments {
    pub image: Option<UploadedFile>,
    pub description: Option<String>,
    pub order_id: Option<String>,
    pub quantity: Option<u32>,
    pub user_details: Option<UserDetails>,
    pub food_item: Option<FoodItem>,
}

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, image: UploadedFile) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_user_details(mut self, user_details: UserDetails) -> Self {
        self.user_details = Some(user_details);
        self
    }

    pub fn with_food_item(mut self, food_item: FoodItem) -> Self {
        self.food_item = Some(food_item);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
            && self.description.is_none()
            && self.order_id.is_none()
            && self.quantity.is_none()
            && self.user_details.is_none()
            && self.food_item.is_none()
    }
}

/// Immutable customer input
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    attachments: Option<Attachments>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: None,
        }
    }

    /// Attaches extra inputs; an empty set counts as no attachments
    pub fn with_attachments(mut self, attachments: Attachments) -> Self {
        self.attachments = (!attachments.is_empty()).then_some(attachments);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> Option<&Attachments> {
        self.attachments.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attachments_are_dropped() {
        let query = Query::new("my order is damaged").with_attachments(Attachments::new());
        assert!(query.attachments().is_none());
    }

    #[test]
    fn test_attachments_are_kept() {
        let query = Query::new("broken")
            .with_attachments(Attachments::new().with_order_id("ORD-1"));
        assert_eq!(
            query.attachments().and_then(|a| a.order_id.as_deref()),
            Some("ORD-1")
        );
    }
}
