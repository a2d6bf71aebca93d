//! Shipping order entity and its status lifecycle.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::OrderError;

/// Order status lifecycle.
///
/// `Delivered` and `Cancelled` are terminal: once reached the status can no
/// longer change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Setting the current status again is always allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        *self == next || !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A persisted shipping order owned by exactly one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,

    /// Owner, taken from the verified claims at creation time
    pub user_id: String,

    /// Free-form quote payload returned by the shipping carrier API
    pub order_details: serde_json::Value,

    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: OrderStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the client when placing an order
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_details: serde_json::Value,
    pub total_amount: f64,
    pub service_type: Option<String>,
    pub carrier_name: Option<String>,
    pub tracking_number: Option<String>,
}

/// Partial update applied by a status-transition call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub tracking_number: Option<String>,
}

impl Order {
    /// Creates a pending order for `user_id`, dated now
    pub fn new(user_id: impl Into<String>, new_order: NewOrder) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            order_details: new_order.order_details,
            order_date: now,
            total_amount: new_order.total_amount,
            status: OrderStatus::Pending,
            tracking_number: new_order.tracking_number,
            service_type: new_order.service_type,
            carrier_name: new_order.carrier_name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Moves the order to `next`, refusing to leave a terminal status
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        if self.status != next {
            self.status = next;
            self.touch();
        }
        Ok(())
    }

    pub fn set_tracking_number(&mut self, tracking_number: String) {
        self.tracking_number = Some(tracking_number);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = now_millis();
    }
}

/// Current time at the millisecond precision the store keeps
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Typed view of the carrier quote stored in `order_details`.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetails {
    pub collection_address: Option<Address>,
    pub delivery_address: Option<Address>,
    pub transit_time_estimate: Option<f64>,
    pub consignment: Option<Consignment>,
    pub service_results: Option<Vec<ServiceResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub city: String,
    pub postcode: String,
    pub country: Country,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Consignment {
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResult {
    pub service_name: String,
    pub carrier_name: String,
    pub transit_time_estimate: f64,
    pub total_cost: TotalCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TotalCost {
    pub total_cost_gross_with_collection: f64,
}

impl OrderDetails {
    /// Best-effort typed view of a quote payload.
    ///
    /// Returns `None` for arrays and scalars, and for objects whose known
    /// fields have an unexpected shape. The raw payload stays authoritative.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Sum of package weights in the consignment
    pub fn total_weight(&self) -> f64 {
        self.consignment
            .as_ref()
            .map(|c| c.packages.iter().map(|p| p.weight).sum())
            .unwrap_or(0.0)
    }
}
