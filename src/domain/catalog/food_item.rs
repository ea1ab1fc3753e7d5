//! Food item entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::StorageEntity;

/// A dish on the menu. Reference data maintained outside the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(rename = "foodId")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<String>,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: None,
            cuisine: cuisine.into(),
            spice_level: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_spice_level(mut self, level: impl Into<String>) -> Self {
        self.spice_level = Some(level.into());
        self
    }

    /// Human-readable recommendation line
    pub fn recommendation_line(&self) -> String {
        format!(
            "{} - {} (Price: ${:.2}, Spice Level: {})\nImage URL: {}",
            self.name,
            self.description,
            self.price,
            self.spice_level.as_deref().unwrap_or("Unknown"),
            self.image_url.as_deref().unwrap_or("")
        )
    }
}

impl StorageEntity for FoodItem {
    type Key = String;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
