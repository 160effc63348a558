use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(OrderId);
id_newtype!(CustomerId);
id_newtype!(MenuItemId);
id_newtype!(TableId);

/// Order lifecycle states accepted by the `/update_status` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Preparing" => Ok(OrderStatus::Preparing),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(DomainError::UnknownOrderStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "Dine-in")]
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::DineIn, OrderType::Takeaway, OrderType::Delivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "Dine-in",
            OrderType::Takeaway => "Takeaway",
            OrderType::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dine-in" => Ok(OrderType::DineIn),
            "Takeaway" => Ok(OrderType::Takeaway),
            "Delivery" => Ok(OrderType::Delivery),
            other => Err(DomainError::UnknownOrderType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "Available",
            TableStatus::Occupied => "Occupied",
            TableStatus::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the order-list status filter select; `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub const ALL_VALUES: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(OrderStatus::Pending),
        StatusFilter::Only(OrderStatus::Preparing),
        StatusFilter::Only(OrderStatus::Completed),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn admits(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => *only == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        Ok(StatusFilter::Only(s.parse()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Only(OrderType),
}

impl TypeFilter {
    pub const ALL_VALUES: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Only(OrderType::DineIn),
        TypeFilter::Only(OrderType::Takeaway),
        TypeFilter::Only(OrderType::Delivery),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Only(order_type) => order_type.as_str(),
        }
    }

    pub fn admits(&self, order_type: OrderType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(only) => *only == order_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(TypeFilter::All);
        }
        Ok(TypeFilter::Only(s.parse()?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub id: TableId,
    pub table_number: String,
    pub capacity: u32,
    pub status: TableStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// One row of the orders table as the index page renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: OrderId,
    pub customer_name: String,
    pub placed_at: String,
    pub total: f64,
    pub payment: PaymentMethod,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub table_number: Option<String>,
    pub items: String,
}
