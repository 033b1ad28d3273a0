//! Shopping cart commands.

use tracing::info;

use villa_markets_core::ProductId;
use villa_markets_storefront::CartError;
use villa_markets_storefront::cart::CartService;

/// Add a quantity of a catalog product to the cart.
///
/// # Errors
///
/// Returns an error if the product does not exist in the catalog or the
/// cart cannot be persisted.
pub fn add(product_id: i32, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::from(product_id);
    let repository = super::open_catalog()?;
    let product = repository
        .find(id)
        .ok_or(CartError::ProductNotFound(id))?
        .clone();

    let store = super::open_store()?;
    let mut cart = CartService::load(&store)?;
    cart.add_item(&product, quantity)?;
    info!(items = cart.total_item_count(), subtotal = %cart.subtotal(), "Cart updated");
    Ok(())
}

/// Remove a line from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded or persisted.
pub fn remove(product_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let mut cart = CartService::load(&store)?;
    cart.remove_item(ProductId::from(product_id))?;
    info!(id = product_id, items = cart.total_item_count(), "Removed from cart");
    Ok(())
}

/// Set the quantity of a cart line; zero removes the line.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded or persisted.
pub fn set_quantity(product_id: i32, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let mut cart = CartService::load(&store)?;
    cart.set_quantity(ProductId::from(product_id), quantity)?;
    info!(id = product_id, quantity, "Cart quantity set");
    Ok(())
}

/// Show the cart contents and totals.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let cart = CartService::load(&store)?;

    for line in cart.lines() {
        info!(
            id = %line.id,
            name = %line.name,
            price = %line.price,
            quantity = line.quantity,
            total = %line.line_total(),
            "Cart line"
        );
    }
    info!(
        items = cart.total_item_count(),
        subtotal = %cart.subtotal(),
        "Cart totals"
    );
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be persisted.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let mut cart = CartService::load(&store)?;
    cart.clear()?;
    info!("Cart cleared");
    Ok(())
}
