//! Data records persisted by the storefront.
//!
//! All records keep the original stored wire format: field names are the
//! Spanish keys the site has always written (`nombre`, `precio`,
//! `cantidad`, ...), mapped to Rust names via serde renames, so existing
//! stored data round-trips byte-compatibly.

pub mod cart;
pub mod location;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartLine;
pub use location::{LocationStatus, StoreLocation};
pub use order::{Order, OrderItem, OrderTotals};
pub use product::{Product, ProductDraft, ProductPatch};
pub use user::CurrentUser;
