//! Order lookup commands.

use tracing::info;

use villa_markets_storefront::fixtures;
use villa_markets_storefront::locations::LocationDirectory;
use villa_markets_storefront::orders::OrderDirectory;

/// Look up a placed order by its number.
///
/// # Errors
///
/// Returns an error if the number is malformed, the order is not found,
/// or the store cannot be read.
pub fn lookup(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let directory = OrderDirectory::new(&store);
    let order = directory.lookup(id)?;

    let locations = LocationDirectory::new(fixtures::store_locations());
    let store_name = order
        .store
        .as_deref()
        .map(|reference| locations.display_name(reference).to_owned());

    info!(
        id = %order.id,
        date = %order.date,
        status = %order.status,
        total = %order.total_display(),
        delivery = %order.delivery_method,
        store = store_name.as_deref().unwrap_or("-"),
        "Order found"
    );
    if let Some(items) = &order.items {
        for item in items {
            info!(
                name = %item.name,
                quantity = item.quantity,
                unit_price = %item.unit_price,
                total = %item.line_total(),
                "Order item"
            );
        }
    }
    Ok(())
}
