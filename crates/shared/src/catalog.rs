//! Seed catalog used when the GUI starts without server-rendered data.
//!
//! Mirrors the sample rows the database initializer installs, ordered by
//! category then item name as the index page queries them.

use crate::domain::{MenuItem, MenuItemId, TableId, TableStatus, TableSummary};

pub fn sample_menu() -> Vec<MenuItem> {
    const ROWS: [(&str, &str, f64); 22] = [
        ("Chicken Wings", "Appetizer", 220.00),
        ("French Fries", "Appetizer", 100.00),
        ("Paneer Tikka", "Appetizer", 180.00),
        ("Veg Spring Roll", "Appetizer", 120.00),
        ("Cold Coffee", "Beverage", 100.00),
        ("Fresh Lime Soda", "Beverage", 60.00),
        ("Mango Lassi", "Beverage", 80.00),
        ("Masala Chai", "Beverage", 40.00),
        ("Butter Roti", "Bread", 25.00),
        ("Garlic Naan", "Bread", 50.00),
        ("Naan", "Bread", 40.00),
        ("Roti", "Bread", 20.00),
        ("Gulab Jamun", "Dessert", 80.00),
        ("Ice Cream", "Dessert", 100.00),
        ("Ras Malai", "Dessert", 120.00),
        ("Butter Chicken", "Main Course", 320.00),
        ("Chicken Biryani", "Main Course", 280.00),
        ("Chicken Curry", "Main Course", 280.00),
        ("Dal Tadka", "Main Course", 150.00),
        ("Fish Curry", "Main Course", 350.00),
        ("Paneer Butter Masala", "Main Course", 250.00),
        ("Veg Biryani", "Main Course", 200.00),
    ];

    ROWS.iter()
        .enumerate()
        .map(|(idx, &(name, category, price))| MenuItem {
            id: MenuItemId(idx as i64 + 1),
            name: name.to_string(),
            category: category.to_string(),
            price,
        })
        .collect()
}

pub fn sample_tables() -> Vec<TableSummary> {
    const ROWS: [(&str, u32); 8] = [
        ("T1", 2),
        ("T2", 2),
        ("T3", 4),
        ("T4", 4),
        ("T5", 4),
        ("T6", 6),
        ("T7", 6),
        ("T8", 8),
    ];

    ROWS.iter()
        .enumerate()
        .map(|(idx, &(number, capacity))| TableSummary {
            id: TableId(idx as i64 + 1),
            table_number: number.to_string(),
            capacity,
            status: TableStatus::Available,
        })
        .collect()
}
