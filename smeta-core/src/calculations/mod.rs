//! Area and cost computations for the estimate ledger.
//!
//! Everything here is pure: derived figures are recomputed from line items
//! on demand and never stored.

pub mod common;
pub mod cost;

pub use cost::{area_m2, ledger_total, line_cost};
