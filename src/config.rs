//! Booking configuration.
//!
//! Defaults reproduce the published campground rates. Every value can be
//! overridden through `CAMPGROUND_*` environment variables (a `.env` file in
//! the working directory is honoured).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Rates and limits used by the pricing engine and step validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfig {
    /// Flat camping rate per night
    pub nightly_rate: Decimal,
    /// Surcharge for RV sites
    pub rv_fee: Decimal,
    /// Guests covered by the nightly rate
    pub included_guests: i64,
    /// Charge per guest above `included_guests`
    pub extra_guest_fee: Decimal,
    /// HST applied to the subtotal
    pub tax_rate: Decimal,
    /// Prefix for rendered amounts
    pub currency_symbol: String,
    /// Upper bound accepted by the guests field
    pub max_guests: i64,
    /// Text shown when payment is confirmed
    pub confirmation_message: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            nightly_rate: dec!(45),
            rv_fee: dec!(15),
            included_guests: 2,
            extra_guest_fee: dec!(5),
            tax_rate: dec!(0.13),
            currency_symbol: "$".to_string(),
            max_guests: 12,
            confirmation_message: "Payment confirmed! Your reservation is complete.".to_string(),
        }
    }
}

impl BookingConfig {
    /// Load configuration from the process environment (after reading `.env`).
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults; present but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("CAMPGROUND_NIGHTLY_RATE") {
            config.nightly_rate = parse_amount("CAMPGROUND_NIGHTLY_RATE", &v)?;
        }
        if let Some(v) = lookup("CAMPGROUND_RV_FEE") {
            config.rv_fee = parse_amount("CAMPGROUND_RV_FEE", &v)?;
        }
        if let Some(v) = lookup("CAMPGROUND_INCLUDED_GUESTS") {
            config.included_guests = parse_count("CAMPGROUND_INCLUDED_GUESTS", &v)?;
        }
        if let Some(v) = lookup("CAMPGROUND_EXTRA_GUEST_FEE") {
            config.extra_guest_fee = parse_amount("CAMPGROUND_EXTRA_GUEST_FEE", &v)?;
        }
        if let Some(v) = lookup("CAMPGROUND_TAX_RATE") {
            let rate = parse_amount("CAMPGROUND_TAX_RATE", &v)?;
            if rate > Decimal::ONE {
                return Err(AppError::config("CAMPGROUND_TAX_RATE", v));
            }
            config.tax_rate = rate;
        }
        if let Some(v) = lookup("CAMPGROUND_CURRENCY_SYMBOL") {
            config.currency_symbol = v;
        }
        if let Some(v) = lookup("CAMPGROUND_MAX_GUESTS") {
            let max = parse_count("CAMPGROUND_MAX_GUESTS", &v)?;
            if max == 0 {
                return Err(AppError::config("CAMPGROUND_MAX_GUESTS", v));
            }
            config.max_guests = max;
        }
        if let Some(v) = lookup("CAMPGROUND_CONFIRMATION_MESSAGE") {
            config.confirmation_message = v;
        }

        Ok(config)
    }
}

fn parse_amount(key: &str, raw: &str) -> Result<Decimal> {
    match Decimal::from_str(raw.trim()) {
        Ok(amount) if amount >= Decimal::ZERO => Ok(amount),
        _ => Err(AppError::config(key, raw)),
    }
}

fn parse_count(key: &str, raw: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(AppError::config(key, raw)),
    }
}
