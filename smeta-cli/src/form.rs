//! Persistent input-form state for the interactive session.

use smeta_core::admission::LineItemDraft;
use smeta_core::models::PricingMode;

/// The form fields as currently typed. Values persist between adds until the
/// user clears the form, like a form panel that is not wiped on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub item_type: String,
    pub width_cm: String,
    pub height_cm: String,
    pub quantity: String,
    pub unit_price: String,
    pub pricing_mode: PricingMode,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            item_type: String::new(),
            width_cm: String::new(),
            height_cm: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
            pricing_mode: PricingMode::PerArea,
        }
    }
}

impl FormState {
    /// Snapshot of the form as an admission draft.
    pub fn to_draft(&self) -> LineItemDraft {
        LineItemDraft {
            item_type: self.item_type.clone(),
            width_cm: self.width_cm.clone(),
            height_cm: self.height_cm.clone(),
            quantity: self.quantity.clone(),
            unit_price: self.unit_price.clone(),
            pricing_mode: self.pricing_mode,
        }
    }

    /// Clears the value fields and restores the quantity default. The label
    /// and the selected pricing mode stay as they are.
    pub fn clear(&mut self) {
        self.width_cm.clear();
        self.height_cm.clear();
        self.quantity = "1".to_string();
        self.unit_price.clear();
    }
}
