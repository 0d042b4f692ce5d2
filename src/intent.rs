use crate::cart::DimensionKey;
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One parsed cart operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Add { product_id: u32 },
    AdjustQuantity { product_id: u32, delta: i64 },
    SetQuantity { product_id: u32, quantity: i64 },
    SetDimension { product_id: u32, key: DimensionKey, value: Decimal },
    Remove { product_id: u32 },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum IntentAction {
    Add,
    Adjust,
    Set,
    Dimension,
    Remove,
}

/// Wire form of a record: `action, product, key, value`. The trailing
/// columns are optional; `value` stays raw text so quantity and dimension
/// coercion can happen here instead of failing the record.
#[derive(Debug, Deserialize)]
struct RawIntent {
    action: IntentAction,
    product: u32,
    #[serde(default)]
    key: Option<DimensionKey>,
    #[serde(default)]
    value: Option<String>,
}

impl TryFrom<RawIntent> for Intent {
    type Error = QuoteError;

    fn try_from(raw: RawIntent) -> Result<Self> {
        let product_id = raw.product;
        Ok(match raw.action {
            IntentAction::Add => Intent::Add { product_id },
            IntentAction::Adjust => Intent::AdjustQuantity {
                product_id,
                delta: coerce_quantity(raw.value.as_deref()),
            },
            IntentAction::Set => Intent::SetQuantity {
                product_id,
                quantity: coerce_quantity(raw.value.as_deref()),
            },
            IntentAction::Dimension => {
                let key = raw.key.ok_or_else(|| {
                    QuoteError::ValidationError(format!(
                        "dimension intent for product {product_id} is missing its key"
                    ))
                })?;
                Intent::SetDimension {
                    product_id,
                    key,
                    value: coerce_dimension(raw.value.as_deref()),
                }
            }
            IntentAction::Remove => Intent::Remove { product_id },
        })
    }
}

/// Quantity text that does not parse as an integer falls back to 1, the
/// same default a blank quantity input gets.
fn coerce_quantity(value: Option<&str>) -> i64 {
    value.and_then(|text| text.trim().parse().ok()).unwrap_or(1)
}

/// Dimension text that does not parse as a number falls back to 0.
fn coerce_dimension(value: Option<&str>) -> Decimal {
    value
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(Decimal::ZERO)
}

/// Streaming CSV reader for intent records.
///
/// Whitespace around fields is trimmed and short rows are allowed, so
/// `add, 101` and `dimension, 104, length, 150` both parse. Each record is
/// yielded independently; a malformed record surfaces as an `Err` without
/// poisoning the rest of the stream.
pub struct IntentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> IntentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn intents(self) -> impl Iterator<Item = Result<Intent>> {
        self.reader
            .into_deserialize::<RawIntent>()
            .map(|record| Intent::try_from(record?))
    }
}
