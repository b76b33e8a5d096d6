//! Admission of candidate line items into the ledger.
//!
//! The form delivers every field as the raw string the user typed; admission
//! parses and validates them and appends a [`LineItem`] on success. Rules are
//! checked in order and the first failure wins; the ledger is never touched
//! by a rejected draft:
//!
//! 1. quantity must parse as an integer ≥ 1 (empty defaults to 1);
//! 2. per-area pricing requires width and height to parse as positive
//!    decimals;
//! 3. unit price must parse as a non-negative decimal (empty defaults to 0).
//!
//! In fixed mode the dimension fields are deliberately lenient: empty or
//! unparsable input falls back to zero and is not validated.
//!
//! Numeric input tolerates surrounding whitespace and comma thousands
//! separators (e.g. `"1,250.50"`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Ledger, LineItem, PricingMode};

/// Raw form payload: every field exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemDraft {
    pub item_type: String,
    pub width_cm: String,
    pub height_cm: String,
    pub quantity: String,
    pub unit_price: String,
    pub pricing_mode: PricingMode,
}

/// Why a candidate item was rejected. One variant per validation rule;
/// the first failing rule wins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    /// The quantity field did not parse as an integer of at least 1.
    #[error("invalid quantity '{input}': expected a whole number of at least 1")]
    InvalidQuantity { input: String },

    /// Per-area pricing needs positive width and height in centimeters.
    #[error(
        "invalid dimensions '{width}' × '{height}': per-area pricing needs positive width and height in cm"
    )]
    InvalidDimensions { width: String, height: String },

    /// The price field did not parse as a non-negative decimal.
    #[error("invalid price '{input}': expected a non-negative number")]
    InvalidPrice { input: String },
}

/// Validates `draft` and appends it to `ledger`.
///
/// Returns a reference to the admitted item, or the first failing rule as an
/// [`AdmissionError`] with the ledger left unchanged.
pub fn admit<'a>(
    ledger: &'a mut Ledger,
    draft: &LineItemDraft,
) -> Result<&'a LineItem, AdmissionError> {
    let quantity =
        parse_quantity(&draft.quantity).ok_or_else(|| AdmissionError::InvalidQuantity {
            input: draft.quantity.clone(),
        })?;

    let (width_cm, height_cm) = match draft.pricing_mode {
        PricingMode::PerArea => {
            match (parse_decimal(&draft.width_cm), parse_decimal(&draft.height_cm)) {
                (Some(w), Some(h)) if w > Decimal::ZERO && h > Decimal::ZERO => (w, h),
                _ => {
                    return Err(AdmissionError::InvalidDimensions {
                        width: draft.width_cm.clone(),
                        height: draft.height_cm.clone(),
                    });
                }
            }
        }
        // Fixed mode: dimensions are optional and unvalidated.
        PricingMode::Fixed => (
            parse_decimal(&draft.width_cm).unwrap_or(Decimal::ZERO),
            parse_decimal(&draft.height_cm).unwrap_or(Decimal::ZERO),
        ),
    };

    let unit_price = match parse_decimal(&draft.unit_price) {
        Some(price) if price >= Decimal::ZERO => price,
        _ => {
            return Err(AdmissionError::InvalidPrice {
                input: draft.unit_price.clone(),
            });
        }
    };

    debug!(item_type = %draft.item_type, quantity, "admitting line item");

    Ok(ledger.push(LineItem {
        item_type: draft.item_type.clone(),
        width_cm,
        height_cm,
        quantity,
        unit_price,
        pricing_mode: draft.pricing_mode,
    }))
}

/// Normalizes numeric input: trims whitespace and removes commas
/// (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a decimal field. Empty input counts as zero; invalid input is
/// `None`.
fn parse_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Some(Decimal::ZERO);
    }
    normalized.parse().ok()
}

/// Parses the quantity field. Empty input defaults to 1; anything else must
/// be a whole number of at least 1.
fn parse_quantity(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(1);
    }
    trimmed.parse::<u32>().ok().filter(|q| *q >= 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn per_area_draft() -> LineItemDraft {
        LineItemDraft {
            item_type: "Окно".to_string(),
            width_cm: "180".to_string(),
            height_cm: "150".to_string(),
            quantity: "6".to_string(),
            unit_price: "300".to_string(),
            pricing_mode: PricingMode::PerArea,
        }
    }

    fn fixed_draft() -> LineItemDraft {
        LineItemDraft {
            item_type: "Дверь".to_string(),
            width_cm: "90".to_string(),
            height_cm: "200".to_string(),
            quantity: "4".to_string(),
            unit_price: "600".to_string(),
            pricing_mode: PricingMode::Fixed,
        }
    }

    // =========================================================================
    // successful admission
    // =========================================================================

    #[test]
    fn admit_appends_valid_per_area_item() {
        let mut ledger = Ledger::new();

        let item = admit(&mut ledger, &per_area_draft()).unwrap();

        assert_eq!(item.item_type, "Окно");
        assert_eq!(item.width_cm, dec!(180));
        assert_eq!(item.height_cm, dec!(150));
        assert_eq!(item.quantity, 6);
        assert_eq!(item.unit_price, dec!(300));
        assert_eq!(item.pricing_mode, PricingMode::PerArea);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn admit_appends_valid_fixed_item() {
        let mut ledger = Ledger::new();

        let item = admit(&mut ledger, &fixed_draft()).unwrap();

        assert_eq!(item.line_cost(), dec!(2400.00));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn admit_tolerates_whitespace_and_thousands_separators() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.width_cm = " 1,250 ".to_string();
        draft.unit_price = " 1,000.50 ".to_string();

        let item = admit(&mut ledger, &draft).unwrap();

        assert_eq!(item.width_cm, dec!(1250));
        assert_eq!(item.unit_price, dec!(1000.50));
    }

    #[test]
    fn empty_quantity_defaults_to_one() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.quantity = String::new();

        let item = admit(&mut ledger, &draft).unwrap();

        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn empty_price_defaults_to_zero() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.unit_price = String::new();

        let item = admit(&mut ledger, &draft).unwrap();

        assert_eq!(item.unit_price, dec!(0));
    }

    // =========================================================================
    // fixed-mode dimension leniency
    // =========================================================================

    #[test]
    fn fixed_mode_accepts_empty_dimensions_as_zero() {
        let mut ledger = Ledger::new();
        let mut draft = fixed_draft();
        draft.width_cm = String::new();
        draft.height_cm = String::new();

        let item = admit(&mut ledger, &draft).unwrap();

        assert_eq!(item.width_cm, dec!(0));
        assert_eq!(item.height_cm, dec!(0));
    }

    #[test]
    fn fixed_mode_accepts_unparsable_dimensions_as_zero() {
        let mut ledger = Ledger::new();
        let mut draft = fixed_draft();
        draft.width_cm = "wide".to_string();

        let item = admit(&mut ledger, &draft).unwrap();

        assert_eq!(item.width_cm, dec!(0));
        assert_eq!(item.height_cm, dec!(200));
    }

    // =========================================================================
    // rejection: quantity
    // =========================================================================

    #[test]
    fn zero_quantity_is_rejected_and_ledger_unchanged() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.quantity = "0".to_string();

        let result = admit(&mut ledger, &draft);

        assert_eq!(
            result.unwrap_err(),
            AdmissionError::InvalidQuantity {
                input: "0".to_string()
            }
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.quantity = "-2".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.quantity = "1.5".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.quantity = "many".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidQuantity { .. })
        ));
    }

    // =========================================================================
    // rejection: dimensions
    // =========================================================================

    #[test]
    fn per_area_zero_width_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.width_cm = "0".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidDimensions { .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn per_area_missing_height_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.height_cm = String::new();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn per_area_negative_width_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.width_cm = "-120".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidDimensions { .. })
        ));
    }

    // =========================================================================
    // rejection: price
    // =========================================================================

    #[test]
    fn negative_price_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.unit_price = "-5".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(result, Err(AdmissionError::InvalidPrice { .. })));
        assert!(ledger.is_empty());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.unit_price = "free".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(result, Err(AdmissionError::InvalidPrice { .. })));
    }

    // =========================================================================
    // rule ordering: first failure wins
    // =========================================================================

    #[test]
    fn invalid_quantity_is_reported_before_invalid_price() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.quantity = "0".to_string();
        draft.unit_price = "-5".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn invalid_dimensions_are_reported_before_invalid_price() {
        let mut ledger = Ledger::new();
        let mut draft = per_area_draft();
        draft.width_cm = "0".to_string();
        draft.unit_price = "-5".to_string();

        let result = admit(&mut ledger, &draft);

        assert!(matches!(
            result,
            Err(AdmissionError::InvalidDimensions { .. })
        ));
    }
}
