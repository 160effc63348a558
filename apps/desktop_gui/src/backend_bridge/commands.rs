//! Backend commands queued from UI to the backend worker.

use client_core::OrderFormSubmission;
use shared::domain::{CustomerId, OrderId};

pub enum BackendCommand {
    UpdateStatus {
        order_id: OrderId,
        status: String,
    },
    ApplyOrderFilters {
        current_url: url::Url,
        status: String,
        order_type: String,
    },
    PlaceOrder {
        form: OrderFormSubmission,
        total: f64,
    },
    DeleteOrder {
        order_id: OrderId,
    },
    DeleteCustomer {
        customer_id: CustomerId,
    },
}
