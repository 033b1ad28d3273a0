//! Placed orders.
//!
//! Orders are created by the external order-placement flow and only read
//! here, so the shapes are deliberately tolerant: newer records carry a
//! structured `totales` block, older ones only a preformatted `total`
//! string, and the time-of-day field may be missing entirely.

use serde::{Deserialize, Serialize};

use villa_markets_core::{DeliveryMethod, Money, OrderId, OrderStatus};

/// Structured order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub total: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Money>,
    #[serde(rename = "envio", default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,
}

/// One line of an order: product name, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio")]
    pub unit_price: Money,
}

impl OrderItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul_quantity(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "totales", default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<OrderTotals>,
    /// Legacy preformatted total string, present on older records.
    #[serde(rename = "total", default, skip_serializing_if = "Option::is_none")]
    pub legacy_total: Option<String>,
    #[serde(rename = "tipoEntrega", default)]
    pub delivery_method: DeliveryMethod,
    /// Store-location reference, usually an id like `M001`.
    #[serde(rename = "minimarket", default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(rename = "items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

impl Order {
    /// The displayable order total.
    ///
    /// Prefers the structured totals block; falls back to the legacy
    /// preformatted string; `$0` when neither is present.
    #[must_use]
    pub fn total_display(&self) -> String {
        if let Some(totals) = self.totals {
            return totals.total.to_string();
        }
        self.legacy_total
            .clone()
            .unwrap_or_else(|| Money::ZERO.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_structured_order() {
        let raw = r#"{
            "id": "VM-123456-789",
            "fecha": "2025-09-01",
            "hora": "15:30",
            "estado": "Entregado",
            "totales": { "total": 5480, "subtotal": 4980, "envio": 500 },
            "tipoEntrega": "recoger",
            "minimarket": "M001",
            "items": [
                { "nombre": "Leche Entera 1L", "cantidad": 2, "precio": 1200 },
                { "nombre": "Pan Marraqueta", "cantidad": 1, "precio": 1800 }
            ]
        }"#;
        let order: Order = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(order.id, OrderId::new("VM-123456-789"));
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.delivery_method, DeliveryMethod::Pickup);
        assert_eq!(order.total_display(), "$5.480");
        let items = order.items.expect("items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].line_total(), Money::from_pesos(2400));
    }

    #[test]
    fn test_legacy_order_falls_back_to_total_string() {
        let raw = r#"{
            "id": "P-100",
            "fecha": "2024-12-24",
            "estado": "Pendiente",
            "total": "$9.990"
        }"#;
        let order: Order = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(order.total_display(), "$9.990");
        assert_eq!(order.delivery_method, DeliveryMethod::Delivery);
        assert!(order.items.is_none());
    }

    #[test]
    fn test_order_without_any_total_displays_zero() {
        let raw = r#"{ "id": "VM-1-1", "fecha": "2025-01-01", "estado": "Cancelado" }"#;
        let order: Order = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(order.total_display(), "$0");
    }
}
