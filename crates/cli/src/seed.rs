//! Built-in seed catalog used when no external catalog file is configured.

use rust_decimal::Decimal;

use gnouby_core::{Gender, Price, ProductId};
use gnouby_storefront::catalog::{Catalog, Product};

/// The catalog shipped with the CLI.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    Catalog::new(vec![
        product(1, "Nile Dusk", "Gnouby", 4999, Gender::Unisex, 45, "Amber and papyrus over a warm musk base."),
        product(2, "Golden Sand", "Gnouby", 6500, Gender::Women, 48, "Saffron and vanilla with a trace of desert rose."),
        product(3, "Desert Oud", "Kerma", 12900, Gender::Men, 47, "Smoked oud wrapped in leather and cardamom."),
        product(4, "Lotus Veil", "Gnouby", 3850, Gender::Women, 42, "Blue lotus and white tea, light as river mist."),
        product(5, "Kandake", "Meroe", 21000, Gender::Women, 49, "Royal jasmine, myrrh, and black honey."),
        product(6, "Cataract", "Kerma", 7200, Gender::Men, 44, "Vetiver and wet stone with a citrus opening."),
        product(7, "Ebony Court", "Meroe", 15500, Gender::Unisex, 46, "Dark woods and incense from the old kingdom."),
        product(8, "Morning Felucca", "Gnouby", 4500, Gender::Unisex, 40, "Sea breeze, bergamot, and sun-bleached cotton."),
    ])
}

fn product(
    id: i32,
    name: &str,
    brand: &str,
    price_cents: i64,
    gender: Gender,
    rating_tenths: i64,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        brand: brand.to_owned(),
        price: Price::usd(Decimal::new(price_cents, 2)),
        image: format!("images/products/{id}.jpg"),
        gender,
        rating: Decimal::new(rating_tenths, 1),
        description: description.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_ids_resolve() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.products().len(), 8);
        assert!(catalog.get(ProductId::new(1)).is_some());
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_seed_catalog_brands() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.brands(), vec!["Gnouby", "Kerma", "Meroe"]);
    }
}
