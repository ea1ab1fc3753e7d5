//! Customer-facing copy

pub const GREETING: &str = "Hi, Welcome to Cuisine Connect! How may I assist you today?";

pub const FALLBACK_APOLOGY: &str =
    "I'm sorry, I couldn't generate a response. Please try again later.";

pub const FRAUD_INPUT_REQUIRED: &str =
    "Additional input (image, description, order_id) required for fraud detection.";

pub const IMAGE_SAVE_FAILED: &str = "Failed to save the uploaded image.";

pub const IMAGE_ENCODE_FAILED: &str = "Failed to encode the image.";

pub const INTERNAL_ERROR: &str = "Internal server error. Please try again later.";

pub const RECOMMENDATION_FAILED: &str = "Error fetching recommendations. Please try again later.";

pub const ORDER_ID_NOT_IN_QUERY: &str = "Order ID not found in the query.";

pub const ORDER_NOT_FOUND: &str = "No order found with the provided order ID.";

pub const ORDER_LOOKUP_FAILED: &str = "An error occurred while processing the order query.";

pub const ORDER_CONFIRMATION_PROMPT: &str = "Would you like to place an order for this item?";

pub const ORDER_PLACEMENT_FAILED: &str = "Error placing order. Please try again later.";

pub const NO_ITEMS_TO_ORDER: &str = "Sorry, there are no items available to order right now.";

pub fn order_placed(order_id: &str) -> String {
    format!(
        "Order placed successfully! Your Order ID is {}. Thank you for ordering!",
        order_id
    )
}

pub fn no_recommendations(display_cuisine: &str) -> String {
    format!("No recommendations found for {} cuisine.", display_cuisine)
}
