//! Sample menu loaded into an empty food-item store

use crate::domain::catalog::FoodItem;
use crate::domain::storage::Storage;
use crate::domain::DomainError;

pub fn sample_food_items() -> Vec<FoodItem> {
    vec![
        FoodItem::new(
            "1",
            "Spaghetti Carbonara",
            "Classic Italian pasta with creamy egg sauce, pancetta, and Parmesan cheese.",
            12.99,
            "Italian",
        )
        .with_image_url("/images/Spaghetti_Carbonara.jpg")
        .with_spice_level("Mild"),
        FoodItem::new(
            "2",
            "Margherita Pizza",
            "Wood-fired pizza with tomato, fresh mozzarella, and basil.",
            10.5,
            "Italian",
        )
        .with_image_url("/images/Margherita_Pizza.jpg")
        .with_spice_level("Mild"),
        FoodItem::new(
            "3",
            "Butter Chicken",
            "Tandoori chicken simmered in a spiced tomato and butter gravy.",
            13.75,
            "Indian",
        )
        .with_image_url("/images/Butter_Chicken.jpg")
        .with_spice_level("Medium"),
        FoodItem::new(
            "4",
            "Kung Pao Chicken",
            "Wok-fried chicken with peanuts, chillies, and Sichuan pepper.",
            11.25,
            "Chinese",
        )
        .with_image_url("/images/Kung_Pao_Chicken.jpg")
        .with_spice_level("Hot"),
        FoodItem::new(
            "5",
            "Chicken Tacos",
            "Soft corn tortillas with grilled chicken, salsa, and lime.",
            9.99,
            "Mexican",
        )
        .with_spice_level("Medium"),
        FoodItem::new(
            "6",
            "Green Curry",
            "Coconut green curry with Thai basil and bamboo shoots.",
            12.0,
            "Thai",
        )
        .with_image_url("/images/Green_Curry.jpg")
        .with_spice_level("Hot"),
        FoodItem::new(
            "7",
            "Tonkotsu Ramen",
            "Rich pork broth with noodles, chashu, and a soft egg.",
            14.0,
            "Japanese",
        )
        .with_image_url("/images/Tonkotsu_Ramen.jpg"),
        FoodItem::new(
            "8",
            "Classic Cheeseburger",
            "Beef patty with cheddar, pickles, and house sauce.",
            11.5,
            "American",
        )
        .with_image_url("/images/Cheeseburger.jpg")
        .with_spice_level("Mild"),
    ]
}

/// Inserts the sample menu when the store holds no food items.
/// Returns how many items were written.
pub async fn seed_food_items(storage: &dyn Storage<FoodItem>) -> Result<usize, DomainError> {
    if storage.count().await? > 0 {
        return Ok(0);
    }

    let items = sample_food_items();
    let total = items.len();

    for item in items {
        storage.create(item).await?;
    }

    tracing::info!(count = total, "Seeded sample food items");
    Ok(total)
}
