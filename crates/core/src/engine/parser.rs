use std::sync::LazyLock;

use regex::Regex;

use crate::engine::model::ParsedItem;
use crate::errors::EngineError;

/// Two number/unit pairs in immediate succession, one quantity and one price.
/// A unit token is any run of non-digit, non-whitespace characters; both unit
/// tokens are optional. Compiled once and shared read-only for the lifetime of
/// the process.
static PAIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(\d+)([^\d\s]+)?\s*(\d+)([^\d\s]+)?").expect("valid pattern"));

/// Extracts one [`ParsedItem`] per pattern match in `text`. Non-matching
/// substrings are ignored.
///
/// Disambiguation: the number whose unit token equals `currency_marker` is the
/// price; the other number is the quantity and supplies the item's label. When
/// neither token matches the marker, the first pair is treated as the quantity
/// (the marker is assumed to sit on the second pair).
pub fn parse(text: &str, currency_marker: &str) -> Result<Vec<ParsedItem>, EngineError> {
    let items: Vec<ParsedItem> = PAIR_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let first = caps.get(1)?.as_str();
            let second = caps.get(3)?.as_str();
            let first_unit = caps.get(2).map_or("", |m| m.as_str());
            let second_unit = caps.get(4).map_or("", |m| m.as_str());

            let first_value: f64 = first.parse().ok()?;
            let second_value: f64 = second.parse().ok()?;

            let item = if first_unit == currency_marker {
                ParsedItem {
                    quantity: second_value,
                    price: first_value,
                    unit_label: second_unit.to_string(),
                    label: format!("{second}{second_unit}"),
                }
            } else {
                ParsedItem {
                    quantity: first_value,
                    price: second_value,
                    unit_label: first_unit.to_string(),
                    label: format!("{first}{first_unit}"),
                }
            };
            Some(item)
        })
        .collect();

    if items.is_empty() {
        return Err(EngineError::NoItemsRecognized);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::errors::EngineError;

    #[test]
    fn extracts_quantity_price_pairs_with_japanese_marker() {
        let items = parse("500ml 150円 350ml 128円", "円").expect("two items");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 500.0);
        assert_eq!(items[0].price, 150.0);
        assert_eq!(items[0].unit_label, "ml");
        assert_eq!(items[0].label, "500ml");
        assert_eq!(items[1].quantity, 350.0);
        assert_eq!(items[1].price, 128.0);
    }

    #[test]
    fn marker_on_first_pair_makes_second_pair_the_quantity() {
        let items = parse("150円 500ml", "円").expect("one item");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 500.0);
        assert_eq!(items[0].price, 150.0);
        assert_eq!(items[0].label, "500ml");
        assert_eq!(items[0].unit_label, "ml");
    }

    #[test]
    fn marker_absent_defaults_to_first_pair_as_quantity() {
        // Documented contract: when neither token equals the marker, the
        // parser keeps the original first-is-quantity guess.
        let items = parse("500ml 150g", "円").expect("one item");

        assert_eq!(items[0].quantity, 500.0);
        assert_eq!(items[0].price, 150.0);
        assert_eq!(items[0].label, "500ml");
    }

    #[test]
    fn marker_on_both_pairs_assigns_price_to_the_first() {
        let items = parse("150円 300円", "円").expect("one item");

        assert_eq!(items[0].price, 150.0);
        assert_eq!(items[0].quantity, 300.0);
        assert_eq!(items[0].unit_label, "円");
    }

    #[test]
    fn whitespace_between_number_and_unitless_token_is_tolerated() {
        let items = parse("  500 150円   350 128円 ", "円").expect("two items");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "500");
        assert_eq!(items[0].unit_label, "");
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let items = parse("どっちが安い? 500ml 150円 と 350ml 128円 で比べて", "円")
            .expect("two items");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "500ml");
        assert_eq!(items[1].label, "350ml");
    }

    #[test]
    fn text_without_pairs_is_a_parse_error() {
        assert_eq!(parse("which one is cheaper?", "円"), Err(EngineError::NoItemsRecognized));
        assert_eq!(parse("", "円"), Err(EngineError::NoItemsRecognized));
    }

    #[test]
    fn lone_number_with_unit_backtracks_into_a_degenerate_pair() {
        // Documented contract: the pattern needs two numbers per match, so a
        // lone `500ml` is split leftmost-first into `50` + `0ml` and parses
        // as quantity 50 at price 0 rather than failing.
        let items = parse("500ml", "円").expect("one item");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 50.0);
        assert_eq!(items[0].price, 0.0);
        assert_eq!(items[0].label, "50");
        assert_eq!(items[0].unit_label, "");
    }

    #[test]
    fn marker_is_a_parameter_not_a_constant() {
        let items = parse("500ml 150yen", "yen").expect("one item");

        assert_eq!(items[0].price, 150.0);
        assert_eq!(items[0].quantity, 500.0);
    }
}
