//! Catalog browsing.

use rust_decimal::Decimal;

use gnouby_core::Gender;
use gnouby_storefront::catalog::{PriceBand, ProductFilter, ProductSort};
use gnouby_storefront::state::Storefront;

/// Print the catalog, filtered and sorted.
pub fn catalog(
    storefront: &Storefront,
    bands: &[String],
    genders: &[String],
    min_rating: Option<Decimal>,
    brands: Vec<String>,
    sort: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = ProductFilter {
        price_bands: bands
            .iter()
            .map(|b| b.parse::<PriceBand>())
            .collect::<Result<_, _>>()?,
        genders: genders
            .iter()
            .map(|g| g.parse::<Gender>())
            .collect::<Result<_, _>>()?,
        min_rating,
        brands,
    };
    let sort: ProductSort = sort.parse()?;

    let products = storefront.catalog().search(&filter, sort);
    if products.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    for product in products {
        println!(
            "{:>3}  {:<16} {:<8} {:>9}  {:<6} {:.1}*",
            product.id, product.name, product.brand, product.price.to_string(),
            product.gender.to_string(), product.rating
        );
    }
    Ok(())
}
