use crate::engine::model::{ParsedItem, PricedItem};
use crate::errors::EngineError;

/// Derives the normalized unit price for one item. Rejects non-positive
/// quantities before dividing, so the result is always finite.
pub fn price_item(item: ParsedItem) -> Result<PricedItem, EngineError> {
    if item.quantity <= 0.0 {
        return Err(EngineError::InvalidQuantity { quantity: item.quantity });
    }

    let unit_price = item.price / item.quantity;
    Ok(PricedItem {
        quantity: item.quantity,
        price: item.price,
        unit_label: item.unit_label,
        label: item.label,
        unit_price,
    })
}

/// Stable ascending sort by unit price. Callers must not depend on the
/// relative order of items with equal unit prices.
pub fn rank(mut items: Vec<PricedItem>) -> Vec<PricedItem> {
    items.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
    items
}

#[cfg(test)]
mod tests {
    use super::{price_item, rank};
    use crate::engine::model::ParsedItem;
    use crate::errors::EngineError;

    fn item(quantity: f64, price: f64) -> ParsedItem {
        ParsedItem {
            quantity,
            price,
            unit_label: "ml".to_string(),
            label: format!("{quantity}ml"),
        }
    }

    #[test]
    fn unit_price_is_price_over_quantity() {
        let priced = price_item(item(500.0, 150.0)).expect("valid item");
        assert_eq!(priced.unit_price, 0.3);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(price_item(item(0.0, 150.0)), Err(EngineError::InvalidQuantity { quantity: 0.0 }));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(
            price_item(item(-2.0, 150.0)),
            Err(EngineError::InvalidQuantity { quantity: -2.0 })
        );
    }

    #[test]
    fn free_item_has_zero_unit_price() {
        let priced = price_item(item(500.0, 0.0)).expect("valid item");
        assert_eq!(priced.unit_price, 0.0);
    }

    #[test]
    fn rank_sorts_ascending_by_unit_price() {
        let items = vec![
            price_item(item(350.0, 128.0)).expect("valid"),
            price_item(item(500.0, 150.0)).expect("valid"),
            price_item(item(750.0, 300.0)).expect("valid"),
        ];

        let ranked = rank(items);
        let unit_prices: Vec<f64> = ranked.iter().map(|i| i.unit_price).collect();
        assert!(unit_prices.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(ranked[0].label, "500ml");
    }

    #[test]
    fn rank_is_idempotent() {
        let items = vec![
            price_item(item(350.0, 128.0)).expect("valid"),
            price_item(item(500.0, 150.0)).expect("valid"),
        ];

        let once = rank(items);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn rank_preserves_input_order_for_equal_unit_prices() {
        let items = vec![
            price_item(item(100.0, 30.0)).expect("valid"),
            price_item(item(200.0, 60.0)).expect("valid"),
        ];

        let ranked = rank(items);
        assert_eq!(ranked[0].label, "100ml");
        assert_eq!(ranked[1].label, "200ml");
    }
}
