use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product extracted from supplier chats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier.
    pub id: i64,

    /// Display name, e.g. "Birkin 30".
    pub name: String,

    /// Brand name.
    pub brand: String,

    /// Product kind, e.g. "Tote" or "Shoulder Bag".
    pub kind: String,

    /// Price as the supplier quoted it, currency symbol included.
    pub price: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Primary color.
    pub color: Option<String>,

    /// Material.
    pub material: Option<String>,

    /// Condition grade.
    pub condition: Option<String>,

    /// Hardware finish.
    pub hardware: Option<String>,

    /// Name of the chat the product was extracted from.
    pub source_chat: Option<String>,

    /// Image URL.
    pub image: Option<String>,

    /// When the product entered the catalog.
    pub created_at: DateTime<Utc>,
}

/// Sort orders offered by the product catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Name A–Z.
    #[default]
    NameAsc,
    /// Name Z–A.
    NameDesc,
    /// Price low to high.
    PriceAsc,
    /// Price high to low.
    PriceDesc,
}

/// Client-side filter state for the product catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive search over name, brand, and description.
    pub search: String,

    /// Restrict to a single brand; `None` means all brands.
    pub brand: Option<String>,

    /// Sort order for the result.
    pub sort: ProductSort,
}

impl ProductFilter {
    /// Apply search, brand filter, and sort to the catalog.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.search.to_lowercase();
        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|product| {
                if needle.is_empty() {
                    return true;
                }
                product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_ref()
                        .is_some_and(|description| description.to_lowercase().contains(&needle))
            })
            .filter(|product| {
                self.brand
                    .as_ref()
                    .is_none_or(|brand| &product.brand == brand)
            })
            .cloned()
            .collect();

        match self.sort {
            ProductSort::NameAsc => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
            ProductSort::NameDesc => filtered.sort_by(|a, b| b.name.cmp(&a.name)),
            ProductSort::PriceAsc => filtered.sort_by(|a, b| cmp_price(a, b)),
            ProductSort::PriceDesc => filtered.sort_by(|a, b| cmp_price(b, a)),
        }

        filtered
    }
}

fn cmp_price(a: &Product, b: &Product) -> Ordering {
    let left = parse_price(&a.price).unwrap_or(0.0);
    let right = parse_price(&b.price).unwrap_or(0.0);
    left.total_cmp(&right)
}

/// Parse a quoted price string like "$15,900" into its numeric value.
#[must_use]
pub fn parse_price(price: &str) -> Option<f64> {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// Distinct brand names present in the catalog, sorted.
#[must_use]
pub fn unique_brands(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The `count` newest catalog entries, newest first.
#[must_use]
pub fn recent_products(products: &[Product], count: usize) -> Vec<Product> {
    let mut sorted: Vec<Product> = products.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(count);
    sorted
}

/// The slice of `items` shown on 1-based `page`, `per_page` items at a time.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());
    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}

/// How many pages `len` items occupy at `per_page` items each.
#[must_use]
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 { 0 } else { len.div_ceil(per_page) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn catalog() -> Vec<Product> {
        sample::products()
    }

    #[test]
    fn default_filter_keeps_everything_sorted_by_name() {
        let products = catalog();
        let result = ProductFilter::default().apply(&products);

        assert_eq!(result.len(), products.len());
        for pair in result.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn search_matches_name_brand_and_description() {
        let products = catalog();

        let by_name = ProductFilter {
            search: "birkin".to_string(),
            ..Default::default()
        };
        assert!(by_name.apply(&products).iter().all(|p| p.name.contains("Birkin")));
        assert!(!by_name.apply(&products).is_empty());

        let by_brand = ProductFilter {
            search: "gucci".to_string(),
            ..Default::default()
        };
        assert!(by_brand.apply(&products).iter().all(|p| p.brand == "Gucci"));

        let by_description = ProductFilter {
            search: "caviar".to_string(),
            ..Default::default()
        };
        assert_eq!(by_description.apply(&products).len(), 1);
    }

    #[test]
    fn brand_filter_is_exact() {
        let products = catalog();
        let filter = ProductFilter {
            brand: Some("Hermès".to_string()),
            ..Default::default()
        };

        let result = filter.apply(&products);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.brand == "Hermès"));
    }

    #[test]
    fn price_sort_parses_quoted_prices() {
        let products = catalog();

        let ascending = ProductFilter {
            sort: ProductSort::PriceAsc,
            ..Default::default()
        }
        .apply(&products);
        let prices: Vec<f64> = ascending
            .iter()
            .map(|p| parse_price(&p.price).unwrap())
            .collect();
        for pair in prices.windows(2) {
            assert!(pair[0] <= pair[1]);
        }

        let descending = ProductFilter {
            sort: ProductSort::PriceDesc,
            ..Default::default()
        }
        .apply(&products);
        assert_eq!(parse_price(&descending[0].price), prices.last().copied());
    }

    #[test]
    fn parse_price_strips_currency_and_separators() {
        assert_eq!(parse_price("$15,900"), Some(15900.0));
        assert_eq!(parse_price("1960"), Some(1960.0));
        assert_eq!(parse_price("€2.550,00"), Some(2.55));
        assert_eq!(parse_price("ask"), None);
    }

    #[test]
    fn unique_brands_are_sorted_and_deduplicated() {
        let brands = unique_brands(&catalog());

        assert!(brands.len() < catalog().len());
        for pair in brands.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(brands.iter().any(|b| b == "Chanel"));
    }

    #[test]
    fn recent_products_returns_newest_first() {
        let products = catalog();
        let recent = recent_products(&products, 3);

        assert_eq!(recent.len(), 3);
        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn pagination_slices_and_counts() {
        let items: Vec<i32> = (0..10).collect();

        assert_eq!(page_slice(&items, 1, 6), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&items, 2, 6), &[6, 7, 8, 9]);
        assert!(page_slice(&items, 3, 6).is_empty());
        assert_eq!(page_count(10, 6), 2);
        assert_eq!(page_count(12, 6), 2);
        assert_eq!(page_count(0, 6), 0);
    }
}
