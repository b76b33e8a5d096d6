use serde::{Deserialize, Serialize};

/// How a line item's cost is derived from its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingMode {
    /// Cost = unit area (m²) × unit price × quantity.
    #[default]
    PerArea,
    /// Cost = unit price × quantity; dimensions are informational only.
    Fixed,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerArea => "sqm",
            Self::Fixed => "fixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sqm" => Some(Self::PerArea),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }

    /// Label shown in the table's mode column and in both export formats.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::PerArea => "за м²",
            Self::Fixed => "фикс",
        }
    }
}
