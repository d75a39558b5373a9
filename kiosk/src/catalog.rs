//! Built-in menu catalog
//!
//! Seed data used whenever no persisted state exists. IDs are stable:
//! persisted orders reference them and the demo flow adds by ID.

use rust_decimal::Decimal;
use shared::{Category, MenuItem};

fn item(id: &str, name: &str, description: &str, cents: i64, category: Category) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        category,
        is_available: true,
    }
}

/// The Luna Shop default menu
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        item(
            "m1",
            "Nasi Lemak",
            "Coconut rice with sambal, anchovies, peanuts and egg",
            850,
            Category::Rice,
        ),
        item(
            "m2",
            "Teh Tarik",
            "Pulled milk tea, frothy and sweet",
            350,
            Category::Drinks,
        ),
        item(
            "m3",
            "Roti Canai",
            "Flaky flatbread served with dhal curry",
            200,
            Category::Bread,
        ),
        item(
            "m4",
            "Char Kway Teow",
            "Wok-fried flat noodles with prawns and cockles",
            900,
            Category::Noodles,
        ),
        item(
            "m5",
            "Mee Goreng Mamak",
            "Spicy fried yellow noodles, mamak style",
            800,
            Category::Noodles,
        ),
        item(
            "m6",
            "Nasi Goreng Kampung",
            "Village fried rice with ikan bilis",
            950,
            Category::Rice,
        ),
        item(
            "m7",
            "Milo Ais",
            "Iced chocolate malt drink",
            400,
            Category::Drinks,
        ),
        item(
            "m8",
            "Cendol",
            "Shaved ice with pandan jelly, coconut milk and gula melaka",
            550,
            Category::Dessert,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_menu_ids_unique() {
        let menu = default_menu();
        let ids: HashSet<_> = menu.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), menu.len());
    }

    #[test]
    fn test_default_menu_all_available() {
        assert!(default_menu().iter().all(|i| i.is_available));
        assert!(default_menu().iter().all(|i| i.price > Decimal::ZERO));
    }
}
