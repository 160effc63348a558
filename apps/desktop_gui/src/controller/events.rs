//! UI/backend events and error modeling for the POS desktop controller.

use client_core::OrderFormSubmission;
use shared::domain::{CustomerId, OrderId};
use url::Url;

pub enum UiEvent {
    OrderStatusUpdated {
        order_id: OrderId,
        status: String,
    },
    FiltersApplied {
        url: Url,
    },
    OrderPlaced {
        form: OrderFormSubmission,
        total: f64,
    },
    OrderDeleted {
        order_id: OrderId,
    },
    CustomerDeleted {
        customer_id: CustomerId,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    UpdateStatus,
    ApplyFilters,
    PlaceOrder,
    DeleteOrder,
    DeleteCustomer,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("required")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("unreachable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_connection_failures_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::UpdateStatus,
            "error sending request: connection refused",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn classifies_required_field_messages_as_validation() {
        let err = UiError::from_message(
            UiErrorContext::PlaceOrder,
            "Phone number and name are required for new customers",
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }

    #[test]
    fn unknown_messages_fall_through() {
        let err = UiError::from_message(UiErrorContext::UpdateStatus, "boom");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err_label(err.category()), "Unexpected");
    }
}
