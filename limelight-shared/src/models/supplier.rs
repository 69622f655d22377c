use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A product supplier reachable over a messaging chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    /// Supplier identifier.
    pub id: i64,

    /// Supplier name.
    pub name: String,

    /// What the supplier specializes in.
    pub specialty: Option<String>,

    /// City/country the supplier operates from.
    pub location: Option<String>,

    /// Contact phone number.
    pub phone_number: String,

    /// Relationship status, e.g. "Active" or "Pending".
    pub status: String,

    /// Number of catalog products sourced from this supplier.
    pub product_count: u32,
}

/// Client-side filter state for the supplier table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierFilter {
    /// Case-insensitive search over name and specialty; phone numbers match
    /// verbatim.
    pub search: String,

    /// Restrict to a single location; `None` means everywhere.
    pub location: Option<String>,
}

impl SupplierFilter {
    /// Apply search and location filter, preserving catalog order.
    #[must_use]
    pub fn apply(&self, suppliers: &[Supplier]) -> Vec<Supplier> {
        let needle = self.search.to_lowercase();
        suppliers
            .iter()
            .filter(|supplier| {
                supplier.name.to_lowercase().contains(&needle)
                    || supplier.phone_number.contains(&self.search)
                    || supplier
                        .specialty
                        .as_ref()
                        .is_some_and(|specialty| specialty.to_lowercase().contains(&needle))
            })
            .filter(|supplier| {
                self.location
                    .as_ref()
                    .is_none_or(|location| supplier.location.as_deref() == Some(location))
            })
            .cloned()
            .collect()
    }
}

/// Distinct locations present in the supplier list, sorted.
#[must_use]
pub fn unique_locations(suppliers: &[Supplier]) -> Vec<String> {
    suppliers
        .iter()
        .filter_map(|supplier| supplier.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn search_matches_specialty() {
        let suppliers = sample::suppliers();
        let filter = SupplierFilter {
            search: "hermès".to_string(),
            ..Default::default()
        };

        let result = filter.apply(&suppliers);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Luxury Supplier");
    }

    #[test]
    fn location_filter_is_exact() {
        let suppliers = sample::suppliers();
        let filter = SupplierFilter {
            location: Some("Paris, France".to_string()),
            ..Default::default()
        };

        let result = filter.apply(&suppliers);
        assert_eq!(result.len(), 2);
        assert!(
            result
                .iter()
                .all(|s| s.location.as_deref() == Some("Paris, France"))
        );
    }

    #[test]
    fn unique_locations_deduplicates() {
        let locations = unique_locations(&sample::suppliers());

        assert_eq!(
            locations,
            vec![
                "Hong Kong".to_string(),
                "Milan, Italy".to_string(),
                "Paris, France".to_string(),
            ]
        );
    }
}
