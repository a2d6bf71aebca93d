//! Request and response bodies for the order API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use ship_core::domain::entities::{NewOrder, Order, OrderStatus, OrderUpdate};
use ship_core::errors::OrderError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(required(message = "Order details are required"))]
    pub order_details: Option<Value>,

    #[validate(range(min = 0.0, message = "Total amount must be a non-negative number"))]
    pub total_amount: f64,

    #[validate(length(min = 1, max = 100))]
    pub service_type: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub carrier_name: Option<String>,

    #[validate(length(min = 6, max = 40))]
    pub tracking_number: Option<String>,
}

impl CreateOrderRequest {
    /// Converts a validated request into the domain input
    pub fn into_new_order(self) -> NewOrder {
        NewOrder {
            order_details: self.order_details.unwrap_or(Value::Null),
            total_amount: self.total_amount,
            service_type: self.service_type,
            carrier_name: self.carrier_name,
            tracking_number: self.tracking_number,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub tracking_number: Option<String>,
}

impl UpdateOrderRequest {
    /// Parses the status string; an unknown value is an [`OrderError::InvalidStatus`]
    pub fn into_update(self) -> Result<OrderUpdate, OrderError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<OrderStatus>)
            .transpose()?;

        Ok(OrderUpdate {
            status,
            tracking_number: self.tracking_number,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// Mutation result carrying both a message and the stored order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderMutationResponse {
    pub message: String,
    pub order: Order,
}

impl OrderMutationResponse {
    pub fn new(message: impl Into<String>, order: Order) -> Self {
        Self {
            message: message.into(),
            order,
        }
    }
}
