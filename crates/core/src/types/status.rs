//! Status enums for various entities.
//!
//! Wire values match the stored JSON produced by the original data
//! (`activo`, `Entregado`, `recoger`, ...), so existing records
//! deserialize unchanged.

use serde::{Deserialize, Serialize};

/// Catalog product status.
///
/// Independent of stock: `stock == 0` does not force `OutOfStock`; callers
/// may leave the two fields inconsistent and nothing reconciles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
    #[serde(rename = "oferta")]
    OnOffer,
    #[serde(rename = "agotado")]
    OutOfStock,
}

impl ProductStatus {
    /// The stored slug for this status.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Inactive => "inactivo",
            Self::OnOffer => "oferta",
            Self::OutOfStock => "agotado",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activo" | "active" => Ok(Self::Active),
            "inactivo" | "inactive" => Ok(Self::Inactive),
            "oferta" | "on-offer" => Ok(Self::OnOffer),
            "agotado" | "out-of-stock" => Ok(Self::OutOfStock),
            _ => Err(format!("invalid product status: {s}")),
        }
    }
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Entregado")]
    Delivered,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "Pendiente",
            Self::Delivered => "Entregado",
            Self::Cancelled => "Cancelado",
        };
        f.write_str(s)
    }
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryMethod {
    /// Customer picks the order up at the store.
    #[serde(rename = "recoger")]
    Pickup,
    /// Order is delivered to the customer.
    #[default]
    #[serde(rename = "delivery")]
    Delivery,
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pickup => "Recoger en tienda",
            Self::Delivery => "Delivery",
        };
        f.write_str(s)
    }
}

/// Role carried by the current-user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Chain administrator.
    Admin,
    /// Store owner (wire value `dueño`).
    #[serde(rename = "dueño")]
    Owner,
    /// Regular shopper.
    Customer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Owner => write!(f, "dueño"),
            Self::Customer => write!(f, "customer"),
        }
    }
}
