/// One priced good as extracted from the input text, before normalization.
///
/// `label` is the display string for the good: the quantity numeral
/// concatenated with `unit_label` (e.g. `500ml`).
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedItem {
    pub quantity: f64,
    pub price: f64,
    pub unit_label: String,
    pub label: String,
}

/// A parsed item enriched with its normalized comparison value.
#[derive(Clone, Debug, PartialEq)]
pub struct PricedItem {
    pub quantity: f64,
    pub price: f64,
    pub unit_label: String,
    pub label: String,
    /// `price / quantity`; only constructed for positive quantities.
    pub unit_price: f64,
}
