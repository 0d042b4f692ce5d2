use crate::catalog::Catalog;
use crate::intent::Intent;
use crate::product::Product;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Physical measurements attached to a cart line when the product calls for
/// them. All fields start at zero; only values above zero ever appear in the
/// order message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub length: Decimal,
    pub width: Decimal,
    pub weight: Decimal,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKey {
    Length,
    Width,
    Weight,
}

/// One product's entry in the cart. The product record is embedded so the
/// line stays self-describing even if rendered long after the lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
    /// Present iff the product requires dimensions.
    pub dimensions: Option<Dimensions>,
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.product.unit_price
    }
}

/// Aggregate view of the cart: unit count across all lines plus the grand
/// total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_items: u64,
    pub total_price: Decimal,
}

/// The quotation cart. Holds insertion-ordered line items over an immutable
/// catalog; every mutation runs to completion under `&mut self`.
///
/// Operations referencing an unknown product or an item that is not in the
/// cart leave the state untouched. The only signal for an ignored operation
/// is a debug-level trace event.
#[derive(Debug, Clone)]
pub struct Cart {
    catalog: Catalog,
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            items: Vec::new(),
        }
    }

    /// Adds one unit of the given product. First add creates the line item
    /// (with a zeroed dimensions record when the product needs one); later
    /// adds bump the quantity.
    pub fn add_item(&mut self, product_id: u32) {
        let Some(product) = self.catalog.find(product_id) else {
            tracing::debug!(product = product_id, "add ignored, unknown product");
            return;
        };
        let product = product.clone();

        match self.position(product_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => {
                let dimensions = product.requires_dimensions.then(Dimensions::default);
                self.items.push(LineItem {
                    product,
                    quantity: 1,
                    dimensions,
                });
            }
        }
    }

    /// Applies a relative quantity change. Dropping to zero or below removes
    /// the line item entirely.
    pub fn adjust_quantity(&mut self, product_id: u32, delta: i64) {
        let Some(index) = self.position(product_id) else {
            tracing::debug!(product = product_id, "adjust ignored, not in cart");
            return;
        };
        let next = i64::from(self.items[index].quantity).saturating_add(delta);
        self.settle_quantity(index, next);
    }

    /// Sets an absolute quantity. Zero or below removes the line item, same
    /// as an exhausting adjustment.
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        let Some(index) = self.position(product_id) else {
            tracing::debug!(product = product_id, "set ignored, not in cart");
            return;
        };
        self.settle_quantity(index, quantity);
    }

    /// Updates one dimension on an existing line item. Items without a
    /// dimensions record are left alone; negative values clamp to zero.
    pub fn set_dimension(&mut self, product_id: u32, key: DimensionKey, value: Decimal) {
        let Some(index) = self.position(product_id) else {
            tracing::debug!(product = product_id, "dimension ignored, not in cart");
            return;
        };
        let Some(dimensions) = self.items[index].dimensions.as_mut() else {
            tracing::debug!(product = product_id, "dimension ignored, product has none");
            return;
        };
        let value = value.max(Decimal::ZERO);
        match key {
            DimensionKey::Length => dimensions.length = value,
            DimensionKey::Width => dimensions.width = value,
            DimensionKey::Weight => dimensions.weight = value,
        }
    }

    /// Removes the line item if present. Safe to repeat.
    pub fn remove_item(&mut self, product_id: u32) {
        match self.position(product_id) {
            Some(index) => {
                self.items.remove(index);
            }
            None => {
                tracing::debug!(product = product_id, "remove ignored, not in cart");
            }
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Add { product_id } => self.add_item(product_id),
            Intent::AdjustQuantity { product_id, delta } => {
                self.adjust_quantity(product_id, delta);
            }
            Intent::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(product_id, quantity),
            Intent::SetDimension {
                product_id,
                key,
                value,
            } => self.set_dimension(product_id, key, value),
            Intent::Remove { product_id } => self.remove_item(product_id),
        }
    }

    pub fn summarize(&self) -> Summary {
        Summary {
            total_items: self.items.iter().map(|item| u64::from(item.quantity)).sum(),
            total_price: self.items.iter().map(LineItem::subtotal).sum(),
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: u32) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product_id)
    }

    fn settle_quantity(&mut self, index: usize, quantity: i64) {
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }
}
