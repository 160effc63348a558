//! Order form state and its derived UI: detail-panel toggles, the running
//! order summary, reset, and the submission guard.

use client_core::OrderFormSubmission;
use shared::domain::{MenuItemId, OrderType, PaymentMethod};
use shared::money::{format_inr, parse_inr};

use crate::controller::menu::MenuBoard;

/// Select value marking a walk-in customer that does not exist yet.
pub const NEW_CUSTOMER_SENTINEL: &str = "new";

pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No items selected";
pub const EMPTY_ORDER_ALERT: &str = "Please select at least one item";
pub const NEW_CUSTOMER_FIELDS_ALERT: &str =
    "Phone number and name are required for new customers";

pub struct SummaryLine {
    pub name: String,
    pub price_text: String,
}

/// Rebuilt from scratch on every change; never updated incrementally.
pub struct OrderSummaryView {
    pub lines: Vec<SummaryLine>,
    pub total_text: String,
}

impl OrderSummaryView {
    pub fn placeholder(&self) -> Option<&'static str> {
        self.lines.is_empty().then_some(EMPTY_SUMMARY_PLACEHOLDER)
    }
}

pub struct OrderFormState {
    /// `new` or an existing customer id rendered as the select option value.
    pub customer_choice: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
    pub customer_details_visible: bool,
    pub name_required: bool,
    pub phone_required: bool,
    pub order_type: OrderType,
    pub table_details_visible: bool,
    pub table_number: String,
    pub payment_method: PaymentMethod,
    pub discount_percent: f64,
    /// Checked menu items, kept in check order.
    pub selected: Vec<MenuItemId>,
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self {
            customer_choice: NEW_CUSTOMER_SENTINEL.to_string(),
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            customer_address: String::new(),
            customer_details_visible: false,
            name_required: false,
            phone_required: false,
            order_type: OrderType::DineIn,
            table_details_visible: false,
            table_number: String::new(),
            payment_method: PaymentMethod::Cash,
            discount_percent: 0.0,
            selected: Vec::new(),
        }
    }
}

impl OrderFormState {
    /// Sync the new-customer details panel with the select value. Idempotent;
    /// safe to run at load and on every change.
    pub fn toggle_customer_details(&mut self) {
        let is_new = self.customer_choice == NEW_CUSTOMER_SENTINEL;
        self.customer_details_visible = is_new;
        self.name_required = is_new;
        self.phone_required = is_new;
    }

    /// Sync the table details panel with the dine-in indicator. Idempotent.
    pub fn toggle_table_details(&mut self) {
        self.table_details_visible = self.order_type == OrderType::DineIn;
    }

    pub fn set_item_checked(&mut self, id: MenuItemId, checked: bool) {
        if checked {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        } else {
            self.selected.retain(|selected| *selected != id);
        }
    }

    pub fn is_item_checked(&self, id: MenuItemId) -> bool {
        self.selected.contains(&id)
    }

    /// Rebuild the order summary from the currently checked cards. Prices are
    /// parsed back out of the rendered labels; a malformed label contributes
    /// NaN to the total without any error surfaced.
    pub fn order_summary(&self, board: &MenuBoard) -> OrderSummaryView {
        if self.selected.is_empty() {
            return OrderSummaryView {
                lines: Vec::new(),
                total_text: format_inr(0.0),
            };
        }

        let mut total = 0.0;
        let mut lines = Vec::new();
        for id in &self.selected {
            // a checkbox without a card is a missing element: skip silently
            let Some(card) = board.card(*id) else {
                continue;
            };
            let price = parse_inr(&card.price_text);
            total += price;
            lines.push(SummaryLine {
                name: card.item.name.clone(),
                price_text: format_inr(price),
            });
        }

        OrderSummaryView {
            lines,
            total_text: format_inr(total),
        }
    }

    /// Total as a number, for the submission payload and local order rows.
    pub fn order_total(&self, board: &MenuBoard) -> f64 {
        self.selected
            .iter()
            .filter_map(|id| board.card(*id))
            .map(|card| parse_inr(&card.price_text))
            .sum()
    }

    /// Restore every field default, then re-run the toggles so derived UI
    /// state resynchronises; a plain field reset would leave them stale.
    pub fn reset(&mut self) {
        *self = Self::default();
        self.toggle_customer_details();
        self.toggle_table_details();
    }

    /// The guard that runs before the form submits. Returns the blocking
    /// alert text when submission must be cancelled.
    pub fn validate_for_submit(&self) -> Result<(), &'static str> {
        if self.selected.is_empty() {
            return Err(EMPTY_ORDER_ALERT);
        }
        if (self.name_required && self.customer_name.trim().is_empty())
            || (self.phone_required && self.customer_phone.trim().is_empty())
        {
            return Err(NEW_CUSTOMER_FIELDS_ALERT);
        }
        Ok(())
    }

    pub fn to_submission(&self) -> OrderFormSubmission {
        OrderFormSubmission {
            customer_choice: self.customer_choice.clone(),
            name: self.customer_name.trim().to_string(),
            phone: self.customer_phone.trim().to_string(),
            email: self.customer_email.trim().to_string(),
            address: self.customer_address.trim().to_string(),
            payment_method: self.payment_method,
            order_type: self.order_type,
            table_number: (self.table_details_visible && !self.table_number.is_empty())
                .then(|| self.table_number.clone()),
            discount_percent: self.discount_percent,
            items: self.selected.clone(),
        }
    }
}
