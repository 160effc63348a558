//! Menu board: item cards grouped by category, filtered by search text.

use shared::domain::{MenuItem, MenuItemId};
use shared::money::format_inr;

pub struct MenuItemCard {
    pub item: MenuItem,
    /// The rendered price label (`₹120.00`); the order summary parses the
    /// amount back out of this text.
    pub price_text: String,
    pub visible: bool,
}

pub struct MenuCategory {
    pub name: String,
    pub visible: bool,
    pub cards: Vec<MenuItemCard>,
}

pub struct MenuBoard {
    pub categories: Vec<MenuCategory>,
}

impl MenuBoard {
    /// Group catalog items into category sections, preserving the incoming
    /// order (the server sorts by category, then item name).
    pub fn from_catalog(items: &[MenuItem]) -> Self {
        let mut categories: Vec<MenuCategory> = Vec::new();
        for item in items {
            let card = MenuItemCard {
                price_text: format_inr(item.price),
                item: item.clone(),
                visible: true,
            };
            match categories.last_mut() {
                Some(category) if category.name == item.category => category.cards.push(card),
                _ => categories.push(MenuCategory {
                    name: item.category.clone(),
                    visible: true,
                    cards: vec![card],
                }),
            }
        }
        Self { categories }
    }

    /// Show each card whose item name contains the term (case-insensitive),
    /// hide the rest, then hide any category left with no visible card.
    pub fn apply_search(&mut self, term: &str) {
        let needle = term.to_lowercase();
        for category in &mut self.categories {
            for card in &mut category.cards {
                card.visible = card.item.name.to_lowercase().contains(&needle);
            }
            category.visible = category.cards.iter().any(|card| card.visible);
        }
    }

    pub fn card(&self, id: MenuItemId) -> Option<&MenuItemCard> {
        self.categories
            .iter()
            .flat_map(|category| category.cards.iter())
            .find(|card| card.item.id == id)
    }

    #[cfg(test)]
    fn visible_card_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.visible)
            .flat_map(|c| c.cards.iter())
            .filter(|card| card.visible)
            .map(|card| card.item.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalog::sample_menu;

    #[test]
    fn search_matching_one_item_hides_the_rest() {
        let mut board = MenuBoard::from_catalog(&sample_menu());
        board.apply_search("gulab");
        assert_eq!(board.visible_card_names(), vec!["Gulab Jamun"]);
        let visible_categories: Vec<&str> = board
            .categories
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(visible_categories, vec!["Dessert"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut board = MenuBoard::from_catalog(&sample_menu());
        board.apply_search("BIRYANI");
        assert_eq!(
            board.visible_card_names(),
            vec!["Chicken Biryani", "Veg Biryani"]
        );
    }

    #[test]
    fn empty_term_restores_everything() {
        let mut board = MenuBoard::from_catalog(&sample_menu());
        board.apply_search("nothing matches this");
        assert!(board.visible_card_names().is_empty());
        board.apply_search("");
        assert_eq!(board.visible_card_names().len(), 22);
        assert!(board.categories.iter().all(|c| c.visible));
    }

    #[test]
    fn cards_carry_rendered_price_labels() {
        let board = MenuBoard::from_catalog(&sample_menu());
        let naan = board
            .categories
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| card.item.name == "Naan")
            .expect("naan card");
        assert_eq!(naan.price_text, "₹40.00");
    }
}
