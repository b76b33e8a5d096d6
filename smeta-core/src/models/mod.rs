mod ledger;
mod line_item;
mod pricing_mode;

pub use ledger::Ledger;
pub use line_item::LineItem;
pub use pricing_mode::PricingMode;
