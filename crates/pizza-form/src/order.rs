//! Order wire model and the submission seam
//!
//! [`ValidOrder`] is both the result of whole-form validation and the JSON
//! body of `POST /api/order`. Transport lives behind [`OrderClient`].

use crate::catalog::{Size, ToppingId};
use crate::error::SubmitError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A validated order, ready to send
///
/// Serializes as `{ "fullName": .., "size": "S"|"M"|"L", "toppings": ["1", ..] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidOrder {
    /// Customer full name
    pub full_name: String,
    /// Pizza size
    pub size: Size,
    /// Toppings in the order they were checked
    pub toppings: Vec<ToppingId>,
}

/// Server confirmation of a placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Message to show the customer
    pub message: String,
}

impl OrderConfirmation {
    /// Create confirmation
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sends orders to the backend
///
/// Implementations perform exactly one request per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Submit an order
    ///
    /// # Errors
    /// [`SubmitError`] describing why the order was not placed.
    async fn place_order(&self, order: &ValidOrder) -> Result<OrderConfirmation, SubmitError>;
}

#[async_trait]
impl<C: OrderClient + ?Sized> OrderClient for std::sync::Arc<C> {
    async fn place_order(&self, order: &ValidOrder) -> Result<OrderConfirmation, SubmitError> {
        (**self).place_order(order).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_in_wire_shape() {
        let order = ValidOrder {
            full_name: "Alice".into(),
            size: Size::M,
            toppings: vec![ToppingId::Pepperoni, ToppingId::GreenPeppers],
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "fullName": "Alice", "size": "M", "toppings": ["1", "2"] })
        );
    }

    #[test]
    fn order_reads_numeric_toppings() {
        let order: ValidOrder =
            serde_json::from_str(r#"{ "fullName": "Bob", "size": "L", "toppings": [3, "4"] }"#)
                .unwrap();
        assert_eq!(order.toppings, vec![ToppingId::Pineapple, ToppingId::Mushrooms]);
    }

    #[test]
    fn confirmation_reads_message() {
        let c: OrderConfirmation = serde_json::from_str(r#"{ "message": "Order placed" }"#).unwrap();
        assert_eq!(c, OrderConfirmation::new("Order placed"));
    }
}
