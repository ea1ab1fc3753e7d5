//! Order entity and related types

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Prefix shared by every order identifier
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Number of digits in a generated order identifier
pub const GENERATED_ORDER_DIGITS: u32 = 6;

static ORDER_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ORD-\d+$").unwrap());

static ORDER_ID_IN_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bORD-\d+\b").unwrap());

/// Order identifier - `ORD-` followed by digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if !ORDER_ID_PATTERN.is_match(&id) {
            return Err(DomainError::validation(format!(
                "Invalid order ID '{}': expected {}<digits>",
                id, ORDER_ID_PREFIX
            )));
        }

        Ok(Self(id))
    }

    /// Random fixed-width identifier. Uniqueness against stored orders is
    /// not checked here.
    pub fn generate() -> Self {
        let low = 10u32.pow(GENERATED_ORDER_DIGITS - 1);
        let high = 10u32.pow(GENERATED_ORDER_DIGITS) - 1;
        let number = rand::thread_rng().gen_range(low..=high);
        Self(format!("{}{}", ORDER_ID_PREFIX, number))
    }

    /// First order identifier mentioned in free text
    pub fn find_in(text: &str) -> Option<Self> {
        ORDER_ID_IN_TEXT
            .find(text)
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StorageKey for OrderId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrderId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fulfilment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Who ordered and where it goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub collecting_order: bool,
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    pub user_details: UserDetails,
    pub food_item_id: String,
    pub food_item_name: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        order_id: OrderId,
        user_details: UserDetails,
        food_item_id: impl Into<String>,
        food_item_name: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            order_id,
            status: OrderStatus::Processing,
            delivery_date: None,
            user_details,
            food_item_id: food_item_id.into(),
            food_item_name: food_item_name.into(),
            quantity,
            created_at: Utc::now(),
        }
    }

    /// Customer-facing projection returned by status lookups
    pub fn details(&self) -> OrderDetails {
        OrderDetails {
            order_id: self.order_id.to_string(),
            user_id: self.user_details.user_id.clone(),
            food_item: self.food_item_name.clone(),
            name: self.user_details.name.clone(),
            phone_number: self.user_details.phone_number.clone(),
            email: self.user_details.email.clone(),
            quantity: self.quantity,
            delivery_address: self.user_details.delivery_address.clone(),
            collecting_order: self.user_details.collecting_order,
            status: self.status,
            delivery_date: self.delivery_date,
        }
    }
}

impl StorageEntity for Order {
    type Key = OrderId;

    fn key(&self) -> &Self::Key {
        &self.order_id
    }
}

/// Full detail record of an order, as shown to the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: String,
    pub user_id: Option<String>,
    pub food_item: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub quantity: u32,
    pub delivery_address: Option<String>,
    pub collecting_order: bool,
    pub status: OrderStatus,
    pub delivery_date: Option<NaiveDate>,
}
