use crate::cart::{Cart, Dimensions};
use crate::config::StoreConfig;
use rust_decimal::Decimal;

/// Renders an amount as `<currency> <amount>` with two decimal places,
/// e.g. `₹ 4500.00`.
pub fn format_price(currency: &str, amount: Decimal) -> String {
    format!("{currency} {amount:.2}")
}

/// Serializes the cart into the quotation request text sent to the store.
///
/// Shape: a greeting naming the business, one numbered block per line item
/// (name, id, quantity, any recorded dimensions, line subtotal), a grand
/// total line, and a closing request to confirm stock and price. The text is
/// for humans; nothing parses it back.
pub fn order_message(cart: &Cart, config: &StoreConfig) -> String {
    let mut message = format!(
        "Hello {},\n\n*I need a quote for the following spare parts:*\n\n",
        config.business_name
    );

    for (index, item) in cart.items().iter().enumerate() {
        let dimensions = item
            .dimensions
            .as_ref()
            .and_then(dimension_fragment)
            .unwrap_or_default();
        message.push_str(&format!(
            "{}. *{}* (ID: {})\n  - Qty: {}{}\n  - Est. Total: {}\n\n",
            index + 1,
            item.product.name,
            item.product.id,
            item.quantity,
            dimensions,
            format_price(&config.currency, item.subtotal()),
        ));
    }

    message.push_str(&format!(
        "--- Total Estimated Price: {} ---\n\n*Please confirm stock and final price.* Thank you!",
        format_price(&config.currency, cart.summarize().total_price),
    ));
    message
}

/// ` [Dims: L: 1200, W: 420.5, Wt: 3kg]`, listing measurements above zero
/// only. A fully zeroed record yields nothing.
fn dimension_fragment(dimensions: &Dimensions) -> Option<String> {
    let mut parts = Vec::new();
    if dimensions.length > Decimal::ZERO {
        parts.push(format!("L: {}", dimensions.length.normalize()));
    }
    if dimensions.width > Decimal::ZERO {
        parts.push(format!("W: {}", dimensions.width.normalize()));
    }
    if dimensions.weight > Decimal::ZERO {
        parts.push(format!("Wt: {}kg", dimensions.weight.normalize()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!(" [Dims: {}]", parts.join(", ")))
    }
}
