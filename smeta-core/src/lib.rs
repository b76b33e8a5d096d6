pub mod admission;
pub mod calculations;
pub mod export;
pub mod models;
pub mod projection;

pub use admission::{AdmissionError, LineItemDraft, admit};
pub use models::*;
pub use projection::{DisplayRow, EstimateView, project};
