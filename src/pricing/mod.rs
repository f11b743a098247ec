//! Pricing engine module for campground reservations.
//!
//! Provides the nightly/equipment/guest pricing and HST calculation behind
//! the booking summary panel.

pub mod calculators;
pub mod models;
pub mod quote;

// Re-export commonly used items
pub use calculators::{format_money, round_money};
pub use models::{EquipmentType, FormState};
pub use quote::{compute_quote, PricingQuote, Quote, TOTAL_PLACEHOLDER};
