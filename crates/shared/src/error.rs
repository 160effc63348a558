use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("unknown order status: {0}")]
    UnknownOrderStatus(String),
    #[error("unknown order type: {0}")]
    UnknownOrderType(String),
}
