use crate::catalog::MessageCatalog;
use crate::engine::model::PricedItem;
use crate::errors::EngineError;

/// Turns a ranked item list into the final reply text.
///
/// Two items get the "advantage" phrasing: the delta is the quantity the
/// cheapest item provides beyond what its price would have bought at the other
/// item's unit price, with precision chosen by magnitude (0 decimals at >= 1,
/// 1 decimal at >= 0.1, 3 decimals below). Any other count gets the leader
/// clause followed by one loss clause per remaining item at one decimal: the
/// quantity item i would need to match the cheapest unit price, minus what it
/// actually provides.
pub fn compose(ranked: &[PricedItem], catalog: &MessageCatalog) -> Result<String, EngineError> {
    let [cheapest, rest @ ..] = ranked else {
        return Err(EngineError::InsufficientItems);
    };

    if let [other] = rest {
        let delta_qty = cheapest.quantity - cheapest.price / other.unit_price;
        let delta = format_by_magnitude(delta_qty);
        return Ok(catalog.render_advantage_two(&cheapest.label, &delta, &cheapest.unit_label));
    }

    let mut message = catalog.render_advantage_many(&cheapest.label);
    for item in rest {
        let delta_qty = item.price / cheapest.unit_price - item.quantity;
        let delta = format!("{delta_qty:.1}");
        message.push_str(&catalog.render_loss_clause(&item.label, &delta, &item.unit_label));
    }

    Ok(message)
}

fn format_by_magnitude(delta_qty: f64) -> String {
    let precision = if delta_qty.abs() >= 1.0 {
        0
    } else if delta_qty.abs() >= 0.1 {
        1
    } else {
        3
    };
    format!("{:.*}", precision, delta_qty)
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::catalog::MessageCatalog;
    use crate::engine::model::PricedItem;
    use crate::errors::EngineError;

    fn priced(quantity: f64, price: f64, label: &str) -> PricedItem {
        PricedItem {
            quantity,
            price,
            unit_label: "ml".to_string(),
            label: label.to_string(),
            unit_price: price / quantity,
        }
    }

    #[test]
    fn two_items_use_advantage_phrasing_with_integer_precision() {
        let ranked = vec![priced(500.0, 150.0, "500ml"), priced(350.0, 128.0, "350ml")];
        let message = compose(&ranked, &MessageCatalog::default()).expect("message");

        assert_eq!(message, "500mlの方が90mlオトク");
    }

    #[test]
    fn two_items_with_sub_unit_delta_use_one_decimal() {
        // delta = 100 - 30 / 0.3015 ≈ 0.5
        let ranked = vec![priced(100.0, 30.0, "100ml"), priced(200.0, 60.3, "200ml")];
        let message = compose(&ranked, &MessageCatalog::default()).expect("message");

        assert_eq!(message, "100mlの方が0.5mlオトク");
    }

    #[test]
    fn two_items_with_tiny_delta_use_three_decimals() {
        // delta = 100 - 30 / 0.30003 ≈ 0.010
        let ranked = vec![priced(100.0, 30.0, "100ml"), priced(100_000.0, 30_003.0, "100000ml")];
        let message = compose(&ranked, &MessageCatalog::default()).expect("message");

        assert_eq!(message, "100mlの方が0.010mlオトク");
    }

    #[test]
    fn three_items_emit_leader_and_one_loss_clause_each() {
        // cheapest unit price 0.3; losses: 128/0.3 - 350 ≈ 76.7, 300/0.3 - 750 = 250.0
        let ranked = vec![
            priced(500.0, 150.0, "500ml"),
            priced(350.0, 128.0, "350ml"),
            priced(750.0, 300.0, "750ml"),
        ];
        let message = compose(&ranked, &MessageCatalog::default()).expect("message");

        assert_eq!(message, "500mlが一番オトク、350mlは76.7ml損、750mlは250.0ml損");
    }

    #[test]
    fn two_free_items_render_a_nan_delta() {
        // Documented contract: price 0 is valid on both sides, which makes
        // other.unit_price 0 and the delta 0/0. The NaN is rendered verbatim
        // instead of being promoted to an error.
        let ranked = vec![priced(100.0, 0.0, "100ml"), priced(200.0, 0.0, "200ml")];
        let message = compose(&ranked, &MessageCatalog::default()).expect("message");

        assert_eq!(message, "100mlの方がNaNmlオトク");
    }

    #[test]
    fn single_item_emits_leader_clause_without_losses() {
        let ranked = vec![priced(500.0, 150.0, "500ml")];
        let message = compose(&ranked, &MessageCatalog::default()).expect("message");

        assert_eq!(message, "500mlが一番オトク");
    }

    #[test]
    fn empty_list_is_an_explicit_error_not_a_panic() {
        assert_eq!(compose(&[], &MessageCatalog::default()), Err(EngineError::InsufficientItems));
    }
}
