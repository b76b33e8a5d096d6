use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PricingMode;

/// One row of the estimate.
///
/// Dimensions are stored in centimeters exactly as admitted. Derived figures
/// (area, line cost) are never stored and always recomputed; see
/// [`crate::calculations::cost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text material or object name.
    pub item_type: String,
    /// Width in centimeters. Zero when not supplied in fixed mode.
    pub width_cm: Decimal,
    /// Height in centimeters. Zero when not supplied in fixed mode.
    pub height_cm: Decimal,
    /// Number of identical units, at least 1.
    pub quantity: u32,
    /// Price per square meter (per-area mode) or per unit (fixed mode).
    pub unit_price: Decimal,
    pub pricing_mode: PricingMode,
}

impl LineItem {
    /// Area of a single unit in square meters, rounded to 5 decimal places.
    pub fn area_m2(&self) -> Decimal {
        crate::calculations::cost::area_m2(self.width_cm, self.height_cm)
    }

    /// Total cost of this row, rounded to 2 decimal places.
    pub fn line_cost(&self) -> Decimal {
        crate::calculations::cost::line_cost(self)
    }
}
