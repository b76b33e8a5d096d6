//! Pure projection of ledger state into display rows.
//!
//! All user-visible formatting happens here, exactly once. The table
//! renderer and both export serializers consume the same projected view, so
//! the figures the user saw on screen and the figures that land in a file can
//! never disagree.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Ledger, LineItem};

/// One fully formatted display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based position; contiguous, reassigned on every projection.
    pub position: usize,
    /// The item's free-text label, verbatim.
    pub label: String,
    /// Width in centimeters, as stored.
    pub width_cm: String,
    /// Height in centimeters, as stored.
    pub height_cm: String,
    /// Unit area in m², three decimal places.
    pub area_m2: String,
    pub quantity: u32,
    /// Human-readable pricing-mode label.
    pub mode_label: &'static str,
    /// Unit price, two decimal places.
    pub unit_price: String,
    /// Row cost, two decimal places.
    pub line_cost: String,
}

/// Snapshot of everything the table shows. Holds no state of its own and is
/// fully reconstructible from the ledger at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateView {
    pub rows: Vec<DisplayRow>,
    /// Grand total, two decimal places.
    pub total: String,
}

/// Projects the ledger into its display form.
pub fn project(ledger: &Ledger) -> EstimateView {
    let rows = ledger
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| project_row(index, item))
        .collect();

    EstimateView {
        rows,
        total: format_dp(ledger.total(), 2),
    }
}

fn project_row(
    index: usize,
    item: &LineItem,
) -> DisplayRow {
    DisplayRow {
        position: index + 1,
        label: item.item_type.clone(),
        width_cm: item.width_cm.to_string(),
        height_cm: item.height_cm.to_string(),
        area_m2: format_dp(item.area_m2(), 3),
        quantity: item.quantity,
        mode_label: item.pricing_mode.display_label(),
        unit_price: format_dp(item.unit_price, 2),
        line_cost: format_dp(item.line_cost(), 2),
    }
}

/// Fixed-point formatting: round half-up first, then pad to exactly `dp`
/// decimal places.
fn format_dp(
    value: Decimal,
    dp: u32,
) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}
