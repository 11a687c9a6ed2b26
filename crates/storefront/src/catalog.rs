//! Read-only collaborators: the product catalog and the promo registry.
//!
//! The catalog is externally supplied and never mutated here; all price,
//! name, and image resolution for cart totals and order snapshots goes
//! through it. The promo registry is a static mapping of code to discount
//! fraction.

use std::collections::HashMap;
use std::io;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gnouby_core::{Gender, Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Price,
    pub image: String,
    pub gender: Gender,
    /// Star rating, 0 to 5 in half-star steps.
    pub rating: Decimal,
    pub description: String,
}

/// Errors loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("catalog decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from a product list. The input order is preserved
    /// and used as the default sort.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id, index))
            .collect();
        Self { products, by_id }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if reading or decoding fails.
    pub fn from_json_reader(reader: impl io::Read) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        Ok(Self::new(products))
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|index| self.products.get(*index))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Unique brands, sorted alphabetically.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = self.products.iter().map(|p| p.brand.as_str()).collect();
        brands.sort_unstable();
        brands.dedup();
        brands
    }

    /// Filter and sort the catalog. Empty filter criteria match everything;
    /// sorting is stable so equal products keep catalog order.
    #[must_use]
    pub fn search(&self, filter: &ProductFilter, sort: ProductSort) -> Vec<&Product> {
        let mut matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .collect();

        match sort {
            ProductSort::Default => {}
            ProductSort::PriceLowHigh => matched.sort_by_key(|p| p.price.amount),
            ProductSort::PriceHighLow => {
                matched.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
            ProductSort::Rating => matched.sort_by(|a, b| b.rating.cmp(&a.rating)),
            ProductSort::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        matched
    }
}

/// Price band buckets used by the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    /// Below $50.
    Under50,
    /// $50 up to (excluding) $100.
    From50To100,
    /// $100 up to (excluding) $200.
    From100To200,
    /// $200 and above.
    Over200,
}

impl PriceBand {
    fn matches(self, price: Price) -> bool {
        let amount = price.amount;
        match self {
            Self::Under50 => amount < Decimal::from(50),
            Self::From50To100 => amount >= Decimal::from(50) && amount < Decimal::from(100),
            Self::From100To200 => amount >= Decimal::from(100) && amount < Decimal::from(200),
            Self::Over200 => amount >= Decimal::from(200),
        }
    }
}

impl std::str::FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-50" => Ok(Self::Under50),
            "50-100" => Ok(Self::From50To100),
            "100-200" => Ok(Self::From100To200),
            "200+" => Ok(Self::Over200),
            _ => Err(format!("invalid price band: {s}")),
        }
    }
}

/// Catalog filter criteria. Each empty collection means "no restriction";
/// within price bands any selected band may match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub price_bands: Vec<PriceBand>,
    pub genders: Vec<Gender>,
    /// Lowest selected rating threshold wins.
    pub min_rating: Option<Decimal>,
    pub brands: Vec<String>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if !self.price_bands.is_empty()
            && !self.price_bands.iter().any(|band| band.matches(product.price))
        {
            return false;
        }

        if !self.genders.is_empty() && !self.genders.contains(&product.gender) {
            return false;
        }

        if let Some(min) = self.min_rating
            && product.rating < min
        {
            return false;
        }

        if !self.brands.is_empty() && !self.brands.iter().any(|b| b == &product.brand) {
            return false;
        }

        true
    }
}

/// Catalog sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Catalog order.
    #[default]
    Default,
    PriceLowHigh,
    PriceHighLow,
    /// Highest rating first.
    Rating,
    /// Alphabetical by name.
    Name,
}

impl std::str::FromStr for ProductSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-low" => Ok(Self::PriceLowHigh),
            "price-high" => Ok(Self::PriceHighLow),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            _ => Err(format!("invalid product sort: {s}")),
        }
    }
}

/// Static registry of promo codes and their discount fractions.
///
/// Codes are matched case-insensitively; the registry stores them uppercased.
#[derive(Debug, Clone)]
pub struct PromoRegistry {
    codes: HashMap<String, Decimal>,
}

impl PromoRegistry {
    /// Build a registry from code/fraction pairs. Codes are uppercased.
    #[must_use]
    pub fn new(codes: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        let codes = codes
            .into_iter()
            .map(|(code, fraction)| (code.to_uppercase(), fraction))
            .collect();
        Self { codes }
    }

    /// The codes shipped with the storefront.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            ("NUBIAN10".to_owned(), Decimal::new(10, 2)),
            ("WELCOME15".to_owned(), Decimal::new(15, 2)),
        ])
    }

    /// Look up the discount fraction for a code. The input is trimmed and
    /// uppercased before matching.
    #[must_use]
    pub fn discount(&self, code: &str) -> Option<Decimal> {
        self.codes.get(code.trim().to_uppercase().as_str()).copied()
    }

    /// Known codes, sorted, for "try one of these" hints.
    #[must_use]
    pub fn known_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.codes.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, brand: &str, price: &str, gender: Gender, rating: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            brand: brand.to_owned(),
            price: Price::usd(price.parse().unwrap()),
            image: format!("images/{id}.jpg"),
            gender,
            rating: rating.parse().unwrap(),
            description: String::new(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            product(1, "Nile Dusk", "Gnouby", "49.99", Gender::Unisex, "4.5"),
            product(2, "Golden Sand", "Kerma", "120.00", Gender::Women, "4.8"),
            product(3, "Desert Oud", "Gnouby", "220.00", Gender::Men, "4.2"),
            product(4, "Lotus Veil", "Meroe", "75.50", Gender::Women, "3.9"),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Golden Sand");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_brands_unique_sorted() {
        assert_eq!(sample().brands(), vec!["Gnouby", "Kerma", "Meroe"]);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let catalog = sample();
        let all = catalog.search(&ProductFilter::default(), ProductSort::Default);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_price_band_filter() {
        let catalog = sample();
        let filter = ProductFilter {
            price_bands: vec![PriceBand::Under50, PriceBand::Over200],
            ..ProductFilter::default()
        };
        let matched = catalog.search(&filter, ProductSort::Default);
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Nile Dusk", "Desert Oud"]);
    }

    #[test]
    fn test_gender_and_brand_filter() {
        let catalog = sample();
        let filter = ProductFilter {
            genders: vec![Gender::Women],
            brands: vec!["Meroe".to_owned()],
            ..ProductFilter::default()
        };
        let matched = catalog.search(&filter, ProductSort::Default);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.first().unwrap().name, "Lotus Veil");
    }

    #[test]
    fn test_min_rating_filter() {
        let catalog = sample();
        let filter = ProductFilter {
            min_rating: Some("4.5".parse().unwrap()),
            ..ProductFilter::default()
        };
        let matched = catalog.search(&filter, ProductSort::Default);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_sort_modes() {
        let catalog = sample();
        let by_price: Vec<&str> = catalog
            .search(&ProductFilter::default(), ProductSort::PriceLowHigh)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            by_price,
            vec!["Nile Dusk", "Lotus Veil", "Golden Sand", "Desert Oud"]
        );

        let by_rating: Vec<&str> = catalog
            .search(&ProductFilter::default(), ProductSort::Rating)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            by_rating,
            vec!["Golden Sand", "Nile Dusk", "Desert Oud", "Lotus Veil"]
        );
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[
            {
                "id": 1,
                "name": "Nile Dusk",
                "brand": "Gnouby",
                "price": { "amount": "49.99", "currency_code": "USD" },
                "image": "images/1.jpg",
                "gender": "Unisex",
                "rating": "4.5",
                "description": "Amber and papyrus."
            }
        ]"#;
        let catalog = Catalog::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(
            catalog.get(ProductId::new(1)).unwrap().price,
            Price::usd("49.99".parse().unwrap())
        );
    }

    #[test]
    fn test_promo_registry_case_insensitive() {
        let registry = PromoRegistry::builtin();
        let expected = Decimal::new(10, 2);
        assert_eq!(registry.discount("NUBIAN10"), Some(expected));
        assert_eq!(registry.discount("nubian10"), Some(expected));
        assert_eq!(registry.discount("  Nubian10  "), Some(expected));
        assert_eq!(registry.discount("SAVE99"), None);
    }

    #[test]
    fn test_promo_registry_known_codes() {
        assert_eq!(
            PromoRegistry::builtin().known_codes(),
            vec!["NUBIAN10", "WELCOME15"]
        );
    }
}
