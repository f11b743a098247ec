//! Campground reservation wizard.
//!
//! Pricing engine, summary panel and the three-step form state machine
//! behind a campground booking page.

pub mod config;
pub mod error;
pub mod pricing;
pub mod summary;
pub mod wizard;

pub use config::BookingConfig;
pub use error::{AppError, Result};
