//! Demonstration seed data.
//!
//! Fixtures are plain functions handed to the seeding paths, not ambient
//! globals; tests inject their own smaller sets the same way.

use villa_markets_core::{Category, LocationId, Money, ProductId, ProductStatus};

use crate::models::{LocationStatus, Product, StoreLocation};

/// The demonstration catalog seeded on first run.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            code: "LACT001".to_owned(),
            name: "Leche Entera 1L".to_owned(),
            category: Category::Dairy,
            price: Money::from_pesos(1200),
            stock: 45,
            description: "Leche entera de vaca, envase tetrapak de 1 litro".to_owned(),
            image: "img/productos/leche.jpg".to_owned(),
            status: ProductStatus::Active,
            featured: true,
        },
        Product {
            id: ProductId::new(2),
            code: "PAN001".to_owned(),
            name: "Pan Marraqueta".to_owned(),
            category: Category::Bakery,
            price: Money::from_pesos(1800),
            stock: 30,
            description: "Pan marraqueta fresco, bolsa de 1kg".to_owned(),
            image: "img/productos/pan.jpg".to_owned(),
            status: ProductStatus::Active,
            featured: false,
        },
        Product {
            id: ProductId::new(3),
            code: "FRUT001".to_owned(),
            name: "Manzanas Rojas".to_owned(),
            category: Category::Produce,
            price: Money::from_pesos(1500),
            stock: 40,
            description: "Manzanas rojas frescas, bolsa de 1kg".to_owned(),
            image: "img/productos/manzanas.jpg".to_owned(),
            status: ProductStatus::OnOffer,
            featured: true,
        },
        Product {
            id: ProductId::new(4),
            code: "BEB001".to_owned(),
            name: "Coca-Cola 2L".to_owned(),
            category: Category::Beverages,
            price: Money::from_pesos(1700),
            stock: 60,
            description: "Bebida gaseosa Coca-Cola, botella de 2 litros".to_owned(),
            image: "img/productos/cocacola.jpg".to_owned(),
            status: ProductStatus::Active,
            featured: false,
        },
        Product {
            id: ProductId::new(5),
            code: "LIMP001".to_owned(),
            name: "Detergente Líquido 1L".to_owned(),
            category: Category::Cleaning,
            price: Money::from_pesos(2500),
            stock: 25,
            description: "Detergente líquido concentrado, envase de 1 litro".to_owned(),
            image: "img/productos/detergente.jpg".to_owned(),
            status: ProductStatus::Active,
            featured: false,
        },
        Product {
            id: ProductId::new(6),
            code: "ABAR001".to_owned(),
            name: "Arroz Grado 1".to_owned(),
            category: Category::Groceries,
            price: Money::from_pesos(1300),
            stock: 80,
            description: "Arroz grado 1, bolsa de 1kg".to_owned(),
            image: "img/productos/arroz.jpg".to_owned(),
            status: ProductStatus::Active,
            featured: true,
        },
        Product {
            id: ProductId::new(7),
            code: "LACT002".to_owned(),
            name: "Yogurt Natural".to_owned(),
            category: Category::Dairy,
            price: Money::from_pesos(890),
            stock: 0,
            description: "Yogurt natural sin azúcar, envase de 200g".to_owned(),
            image: "img/productos/yogurt.jpg".to_owned(),
            status: ProductStatus::OutOfStock,
            featured: false,
        },
    ]
}

/// The four stores of the chain.
#[must_use]
pub fn store_locations() -> Vec<StoreLocation> {
    const HOURS: &str = "Lun-Vie: 8:00-21:00, Sáb-Dom: 9:00-20:00";
    vec![
        StoreLocation {
            id: LocationId::new("M001"),
            name: "Villa Central".to_owned(),
            address: "Av. Central 123".to_owned(),
            municipality: "Santiago".to_owned(),
            latitude: -33.447_487,
            longitude: -70.673_676,
            opening_hours: HOURS.to_owned(),
            phone: "+56912345678".to_owned(),
            status: LocationStatus::Active,
        },
        StoreLocation {
            id: LocationId::new("M002"),
            name: "Villa Norte".to_owned(),
            address: "Av. Norte 456".to_owned(),
            municipality: "La Reina".to_owned(),
            latitude: -33.435_827,
            longitude: -70.569_067,
            opening_hours: HOURS.to_owned(),
            phone: "+56912345679".to_owned(),
            status: LocationStatus::Active,
        },
        StoreLocation {
            id: LocationId::new("M003"),
            name: "Villa Sur".to_owned(),
            address: "Av. Sur 789".to_owned(),
            municipality: "La Florida".to_owned(),
            latitude: -33.529_259,
            longitude: -70.599_28,
            opening_hours: HOURS.to_owned(),
            phone: "+56912345680".to_owned(),
            status: LocationStatus::Active,
        },
        StoreLocation {
            id: LocationId::new("M004"),
            name: "Villa Este".to_owned(),
            address: "Av. Este 321".to_owned(),
            municipality: "Ñuñoa".to_owned(),
            latitude: -33.457_462,
            longitude: -70.605_671,
            opening_hours: HOURS.to_owned(),
            phone: "+56912345681".to_owned(),
            status: LocationStatus::Active,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_product_ids_are_unique() {
        let products = demo_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_demo_includes_independent_stock_and_status() {
        // The yogurt fixture is both zero-stock and explicitly marked
        // out-of-stock; the fields stay independently settable.
        let products = demo_products();
        let yogurt = products
            .iter()
            .find(|p| p.code == "LACT002")
            .expect("yogurt fixture");
        assert_eq!(yogurt.stock, 0);
        assert_eq!(yogurt.status, ProductStatus::OutOfStock);
    }

    #[test]
    fn test_four_store_locations() {
        let locations = store_locations();
        assert_eq!(locations.len(), 4);
        assert!(locations.iter().all(|l| l.status == LocationStatus::Active));
    }
}
