use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry. Products are immutable once loaded; the cart embeds a
/// copy of the record in each line item.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub unit_price: Decimal,
    /// Relative path or URL of the product image, for the view layer.
    #[serde(default)]
    pub image_ref: String,
    /// Whether a quote for this part needs physical measurements.
    #[serde(default)]
    pub requires_dimensions: bool,
    /// Human-readable hint for the measurements, e.g. "L x W (mm)".
    #[serde(default)]
    pub dimension_label: String,
}
