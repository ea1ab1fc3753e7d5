//! Order creation states

use super::Attachments;
use crate::domain::catalog::{FoodItem, Order, OrderId, UserDetails};
use crate::domain::DomainError;

/// Everything needed to place an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub user_details: UserDetails,
    pub food_item: FoodItem,
    pub quantity: u32,
}

impl OrderDraft {
    /// Builds the order record under a freshly generated identifier
    pub fn into_order(self) -> Order {
        Order::new(
            OrderId::generate(),
            self.user_details,
            self.food_item.id,
            self.food_item.name,
            self.quantity,
        )
    }
}

/// Where a creation request stands
#[derive(Debug, Clone, PartialEq)]
pub enum OrderCreationStep {
    /// Details incomplete: the caller must confirm item and quantity first
    AwaitingConfirmation,
    /// Details complete: the order can be written
    Confirmed(OrderDraft),
}

impl OrderCreationStep {
    /// Decides the step from the structured details supplied with the query.
    /// Any missing detail keeps the flow in `AwaitingConfirmation`.
    pub fn from_attachments(attachments: Option<&Attachments>) -> Result<Self, DomainError> {
        let Some(attachments) = attachments else {
            return Ok(Self::AwaitingConfirmation);
        };

        match (
            &attachments.user_details,
            &attachments.food_item,
            attachments.quantity,
        ) {
            (Some(_), Some(_), Some(0)) => {
                Err(DomainError::validation("Quantity must be at least 1."))
            }
            (Some(user_details), Some(food_item), Some(quantity)) => {
                if user_details.name.trim().is_empty() {
                    return Err(DomainError::validation("Customer name cannot be empty."));
                }

                Ok(Self::Confirmed(OrderDraft {
                    user_details: user_details.clone(),
                    food_item: food_item.clone(),
                    quantity,
                }))
            }
            _ => Ok(Self::AwaitingConfirmation),
        }
    }
}
