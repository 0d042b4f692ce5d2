use crate::error::Result;
use crate::product::Product;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::io::Read;

/// The product catalog: an immutable, insertion-ordered list of products
/// keyed by id.
///
/// Catalog data is treated as untrusted at load time only: records sharing
/// an id are collapsed to the first occurrence, so `find` always resolves
/// to a single product. After construction the catalog never changes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, dropping any record whose id was already seen.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .filter(|product| {
                let fresh = seen.insert(product.id);
                if !fresh {
                    tracing::debug!(id = product.id, "duplicate product id dropped");
                }
                fresh
            })
            .collect();
        Self { products }
    }

    /// Loads a catalog from a JSON array of products (e.g. a File or any
    /// other `Read` source). Duplicate ids are deduplicated here as well.
    pub fn from_json<R: Read>(source: R) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_reader(source)?;
        let catalog = Self::new(products);
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The built-in demo catalog of treadmill spare parts.
    pub fn sample() -> Self {
        Self::new(vec![
            Product {
                id: 101,
                name: "Treadmill Running Belt".to_string(),
                unit_price: dec!(4500),
                image_ref: "image/PRODUCT_IMAGE/sample_treadmill.jfif".to_string(),
                requires_dimensions: true,
                dimension_label: "L x W (mm)".to_string(),
            },
            Product {
                id: 102,
                name: "Motor Controller PCB (5HP)".to_string(),
                unit_price: dec!(7800),
                image_ref: "image/PRODUCT_IMAGE/motor.jfif".to_string(),
                requires_dimensions: false,
                dimension_label: String::new(),
            },
            Product {
                id: 103,
                name: "Incline Motor Actuator".to_string(),
                unit_price: dec!(3200),
                image_ref: "image/PRODUCT_IMAGE/sample_treadmill.jfif".to_string(),
                requires_dimensions: false,
                dimension_label: String::new(),
            },
            Product {
                id: 104,
                name: "Hydraulic Tension Spring".to_string(),
                unit_price: dec!(1500),
                image_ref: "image/PRODUCT_IMAGE/sample_spring.jfif".to_string(),
                requires_dimensions: true,
                dimension_label: "Length (mm)".to_string(),
            },
        ])
    }

    pub fn find(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    /// Case-insensitive substring match against the product name, or
    /// substring match against the stringified id. An empty query matches
    /// everything, preserving catalog order.
    pub fn filter(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&query)
                    || product.id.to_string().contains(&query)
            })
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.find(101).unwrap().name, "Treadmill Running Belt");
        assert!(catalog.find(999).is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut products = Catalog::sample().products().to_vec();
        let mut shadow = products[0].clone();
        shadow.name = "Counterfeit Belt".to_string();
        products.push(shadow);

        let catalog = Catalog::new(products);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find(101).unwrap().name, "Treadmill Running Belt");
    }

    #[test]
    fn test_filter_empty_query_returns_all_in_order() {
        let catalog = Catalog::sample();
        let all = catalog.filter("");
        assert_eq!(all.len(), 4);
        let ids: Vec<u32> = all.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![101, 102, 103, 104]);
    }

    #[test]
    fn test_filter_name_case_insensitive() {
        let catalog = Catalog::sample();
        let hits = catalog.filter("MOTOR");
        let ids: Vec<u32> = hits.iter().map(|product| product.id).collect();
        // "Motor Controller PCB (5HP)" and "Incline Motor Actuator"
        assert_eq!(ids, vec![102, 103]);
    }

    #[test]
    fn test_filter_by_partial_id() {
        let catalog = Catalog::sample();
        let hits = catalog.filter("104");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 104);

        // "10" is a prefix of every sample id.
        assert_eq!(catalog.filter("10").len(), 4);
    }

    #[test]
    fn test_filter_is_subset_of_all() {
        let catalog = Catalog::sample();
        let all: Vec<u32> = catalog.filter("").iter().map(|product| product.id).collect();
        for hit in catalog.filter("spring") {
            assert!(all.contains(&hit.id));
        }
    }

    #[test]
    fn test_from_json_dedupes() {
        let json = r#"[
            { "id": 7, "name": "Drive Roller", "unit_price": 2100 },
            { "id": 7, "name": "Drive Roller (old listing)", "unit_price": 1800 }
        ]"#;

        let catalog = Catalog::from_json(json.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(7).unwrap().name, "Drive Roller");
    }

    #[test]
    fn test_from_json_malformed() {
        let json = r#"{ "not": "an array" }"#;
        assert!(Catalog::from_json(json.as_bytes()).is_err());
    }
}
