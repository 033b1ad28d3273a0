//! Catalog management commands.

use tracing::info;

use villa_markets_core::{Category, Money, ProductId, ProductStatus};
use villa_markets_storefront::catalog::ProductFilter;
use villa_markets_storefront::models::{Product, ProductDraft, ProductPatch};

/// Fields for `products add`.
pub struct AddArgs {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub price: i64,
    pub stock: u32,
    pub description: String,
    pub image: Option<String>,
    pub status: ProductStatus,
    pub featured: bool,
}

/// Fields for `products update`; unset fields are left unchanged.
pub struct UpdateArgs {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<i64>,
    pub stock: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<ProductStatus>,
    pub featured: Option<bool>,
}

/// List catalog products, applying any given filters.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or read.
pub fn list(
    category: Option<Category>,
    status: Option<ProductStatus>,
    search: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = super::open_catalog()?;

    let filter = ProductFilter {
        category,
        status,
        search_text: search,
    };
    let products = repository.filter(&filter);

    for product in &products {
        describe(product);
    }
    info!(count = products.len(), "Products listed");
    Ok(())
}

/// Add a product to the catalog.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the catalog cannot
/// be persisted.
pub fn add(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = super::open_catalog()?;

    let draft = ProductDraft {
        code: args.code,
        name: args.name,
        category: args.category,
        price: Money::from_pesos(args.price),
        stock: args.stock,
        description: args.description,
        image: args.image.unwrap_or_default(),
        status: args.status,
        featured: args.featured,
    };
    let product = repository.create(draft)?;
    info!(id = %product.id, code = %product.code, "Product created");
    Ok(())
}

/// Update fields of an existing product.
///
/// # Errors
///
/// Returns an error if the product does not exist or the catalog cannot
/// be persisted.
pub fn update(id: i32, args: UpdateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = super::open_catalog()?;

    let patch = ProductPatch {
        code: args.code,
        name: args.name,
        category: args.category,
        price: args.price.map(Money::from_pesos),
        stock: args.stock,
        description: args.description,
        image: args.image,
        status: args.status,
        featured: args.featured,
    };
    let product = repository.update(ProductId::from(id), patch)?;
    info!(id = %product.id, name = %product.name, "Product updated");
    Ok(())
}

/// Delete a product from the catalog.
///
/// # Errors
///
/// Returns an error if the product does not exist or the catalog cannot
/// be persisted.
pub fn delete(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = super::open_catalog()?;

    let removed = repository.delete(ProductId::from(id))?;
    info!(id = %removed.id, name = %removed.name, "Product deleted");
    Ok(())
}

fn describe(product: &Product) {
    info!(
        id = %product.id,
        code = %product.code,
        name = %product.name,
        category = product.category.slug(),
        price = %product.price,
        stock = product.stock,
        status = product.status.slug(),
        featured = product.featured,
        "Product"
    );
}
