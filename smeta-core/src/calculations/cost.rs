//! Per-item and ledger-wide cost computation.
//!
//! A line item is priced one of two ways:
//!
//! | Mode | Formula |
//! |----------|--------------------------------------------|
//! | per-area | round2(area_m2 × unit price × quantity) |
//! | fixed | round2(unit price × quantity) |
//!
//! where `area_m2 = round5((width_cm / 100) × (height_cm / 100))`. The
//! per-area cost is derived from the *rounded* area, so the cost shown next
//! to an area column is always consistent with it. The ledger total is the
//! 2-dp rounding of the sum of the (already rounded) line costs.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use smeta_core::calculations::{area_m2, line_cost};
//! use smeta_core::models::{LineItem, PricingMode};
//!
//! let window = LineItem {
//!     item_type: "Окно".to_string(),
//!     width_cm: dec!(180),
//!     height_cm: dec!(150),
//!     quantity: 6,
//!     unit_price: dec!(300),
//!     pricing_mode: PricingMode::PerArea,
//! };
//!
//! assert_eq!(area_m2(window.width_cm, window.height_cm), dec!(2.7));
//! assert_eq!(line_cost(&window), dec!(4860.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{round_area, round_money};
use crate::models::{LineItem, PricingMode};

/// Area of one unit in square meters, rounded to five decimal places.
///
/// Dimensions are given in centimeters. Items without dimensions (fixed
/// mode) yield zero.
pub fn area_m2(
    width_cm: Decimal,
    height_cm: Decimal,
) -> Decimal {
    let width_m = width_cm / Decimal::ONE_HUNDRED;
    let height_m = height_cm / Decimal::ONE_HUNDRED;
    round_area(width_m * height_m)
}

/// Total cost of one row, rounded to two decimal places.
pub fn line_cost(item: &LineItem) -> Decimal {
    let quantity = Decimal::from(item.quantity);
    let cost = match item.pricing_mode {
        PricingMode::PerArea => {
            area_m2(item.width_cm, item.height_cm) * item.unit_price * quantity
        }
        PricingMode::Fixed => item.unit_price * quantity,
    };
    round_money(cost)
}

/// Grand total over the given items: the sum of the rounded line costs,
/// rounded to two decimal places.
pub fn ledger_total(items: &[LineItem]) -> Decimal {
    round_money(items.iter().map(line_cost).sum())
}
