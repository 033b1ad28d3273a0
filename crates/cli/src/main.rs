//! Villa Markets CLI - Catalog, cart, and order management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the demo catalog
//! villa-cli seed
//!
//! # List and filter products
//! villa-cli products list
//! villa-cli products list -c lacteos -s activo -q yogurt
//!
//! # Manage the catalog
//! villa-cli products add -c ABAR002 -n "Fideos Espirales" --category abarrotes -p 1190 -k 35
//! villa-cli products update 3 --price 1390
//! villa-cli products delete 3
//!
//! # Cart operations
//! villa-cli cart add 1 -q 2
//! villa-cli cart show
//!
//! # Store locations and order lookup
//! villa-cli stores nearest --lat -33.45 --lng -70.66
//! villa-cli orders lookup VM-123456-789
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use villa_markets_core::{Category, ProductStatus};

mod commands;

#[derive(Parser)]
#[command(name = "villa-cli")]
#[command(author, version, about = "Villa Markets CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Query store locations
    Stores {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Look up placed orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Seed the catalog with demonstration data
    Seed {
        /// Replace an existing catalog instead of leaving it untouched
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products, optionally filtered
    List {
        /// Filter by category (e.g. lacteos, panaderia)
        #[arg(short, long)]
        category: Option<Category>,

        /// Filter by status (e.g. activo, oferta, agotado)
        #[arg(short, long)]
        status: Option<ProductStatus>,

        /// Case-insensitive search over name, code, and description
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// Add a product to the catalog
    Add {
        /// Product code (e.g. LACT003)
        #[arg(short, long)]
        code: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Category
        #[arg(long)]
        category: Category,

        /// Price in whole pesos
        #[arg(short, long)]
        price: i64,

        /// Units in stock
        #[arg(short = 'k', long, default_value_t = 0)]
        stock: u32,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Image reference
        #[arg(short, long)]
        image: Option<String>,

        /// Status
        #[arg(short, long, default_value = "activo")]
        status: ProductStatus,

        /// Mark as featured
        #[arg(short, long)]
        featured: bool,
    },
    /// Update fields of an existing product
    Update {
        /// Product id
        id: i32,

        #[arg(short, long)]
        code: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        /// Price in whole pesos
        #[arg(short, long)]
        price: Option<i64>,

        #[arg(short = 'k', long)]
        stock: Option<u32>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        image: Option<String>,

        #[arg(short, long)]
        status: Option<ProductStatus>,

        #[arg(short, long)]
        featured: Option<bool>,
    },
    /// Delete a product
    Delete {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: i32,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        product_id: i32,
    },
    /// Set the quantity of a cart line (0 removes it)
    SetQuantity {
        /// Product id
        product_id: i32,

        /// New quantity
        quantity: u32,
    },
    /// Show cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum StoreAction {
    /// List all store locations
    List,
    /// Find the store nearest to a coordinate
    Nearest {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Select a store as the preferred location
    Select {
        /// Location id (e.g. M001)
        id: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Look up an order by its number (e.g. VM-123456-789)
    Lookup {
        /// Order number
        id: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List {
                category,
                status,
                search,
            } => commands::products::list(category, status, search)?,
            ProductAction::Add {
                code,
                name,
                category,
                price,
                stock,
                description,
                image,
                status,
                featured,
            } => commands::products::add(commands::products::AddArgs {
                code,
                name,
                category,
                price,
                stock,
                description,
                image,
                status,
                featured,
            })?,
            ProductAction::Update {
                id,
                code,
                name,
                category,
                price,
                stock,
                description,
                image,
                status,
                featured,
            } => commands::products::update(
                id,
                commands::products::UpdateArgs {
                    code,
                    name,
                    category,
                    price,
                    stock,
                    description,
                    image,
                    status,
                    featured,
                },
            )?,
            ProductAction::Delete { id } => commands::products::delete(id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(product_id)?,
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => commands::cart::set_quantity(product_id, quantity)?,
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Stores { action } => match action {
            StoreAction::List => commands::stores::list(),
            StoreAction::Nearest { lat, lng } => commands::stores::nearest(lat, lng)?,
            StoreAction::Select { id } => commands::stores::select(&id)?,
        },
        Commands::Orders { action } => match action {
            OrderAction::Lookup { id } => commands::orders::lookup(&id)?,
        },
        Commands::Seed { force } => commands::seed::run(force)?,
    }
    Ok(())
}
