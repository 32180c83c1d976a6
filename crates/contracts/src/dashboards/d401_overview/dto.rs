use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Historical scrape volume that predates the live product table.
/// The overview hero counter adds it to the live product count.
pub const ARCHIVED_RECORD_BASELINE: u64 = 1_200_000;

/// Product row from `GET /googlemap_data`; only the fields the overview needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapProduct {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Distinct counts derived client-side from the product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub product_count: u64,
    pub city_count: u64,
    pub category_count: u64,
    pub city_category_count: u64,
}

impl OverviewCounts {
    /// A missing city or category counts as its own distinct value.
    pub fn from_products(products: &[MapProduct]) -> Self {
        let mut cities: HashSet<Option<&str>> = HashSet::new();
        let mut categories: HashSet<Option<&str>> = HashSet::new();
        let mut pairs: HashSet<(Option<&str>, Option<&str>)> = HashSet::new();

        for p in products {
            let city = p.city.as_deref();
            let category = p.category.as_deref();
            cities.insert(city);
            categories.insert(category);
            pairs.insert((city, category));
        }

        Self {
            product_count: products.len() as u64,
            city_count: cities.len() as u64,
            category_count: categories.len() as u64,
            city_category_count: pairs.len() as u64,
        }
    }

    pub fn aggregated_total(&self) -> u64 {
        ARCHIVED_RECORD_BASELINE + self.product_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(city: Option<&str>, category: Option<&str>) -> MapProduct {
        MapProduct {
            city: city.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_distinct_counts() {
        let products = vec![
            product(Some("Pune"), Some("cafe")),
            product(Some("Pune"), Some("cafe")),
            product(Some("Pune"), Some("gym")),
            product(Some("Delhi"), Some("cafe")),
            product(None, Some("gym")),
        ];
        let counts = OverviewCounts::from_products(&products);
        assert_eq!(counts.product_count, 5);
        assert_eq!(counts.city_count, 3);
        assert_eq!(counts.category_count, 2);
        assert_eq!(counts.city_category_count, 4);
        assert_eq!(counts.aggregated_total(), 1_200_005);
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        let counts = OverviewCounts::from_products(&[]);
        assert_eq!(counts, OverviewCounts::default());
        assert_eq!(counts.aggregated_total(), ARCHIVED_RECORD_BASELINE);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"[{"city": "Pune", "category": "cafe", "name": "Blue Tokai", "rating": 4.5}]"#;
        let products: Vec<MapProduct> = serde_json::from_str(raw).unwrap();
        assert_eq!(products[0].city.as_deref(), Some("Pune"));
    }
}
