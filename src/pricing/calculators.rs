//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no view access.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::config::BookingConfig;

use super::models::EquipmentType;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use campground_booking::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of nights billed for a stay.
///
/// Always at least one night, even when check-out is on or before check-in.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    days.max(1).try_into().unwrap_or(u32::MAX)
}

/// Nightly rate times nights
pub fn base_amount(nights: u32, config: &BookingConfig) -> Decimal {
    config.nightly_rate * Decimal::from(nights)
}

/// Site surcharge for the chosen equipment (only RVs pay one).
pub fn equipment_fee(equipment: Option<EquipmentType>, config: &BookingConfig) -> Decimal {
    match equipment {
        Some(EquipmentType::Rv) => config.rv_fee,
        _ => Decimal::ZERO,
    }
}

/// Charge for guests beyond those included in the nightly rate.
///
/// Never negative, whatever count the form produced.
pub fn guest_fee(guest_count: i64, config: &BookingConfig) -> Decimal {
    let extra = guest_count.saturating_sub(config.included_guests).max(0);
    Decimal::from(extra) * config.extra_guest_fee
}

/// HST on a subtotal, rounded to cents
pub fn tax_for(subtotal: Decimal, config: &BookingConfig) -> Decimal {
    round_money(subtotal * config.tax_rate, 2)
}

/// Render an amount with a currency prefix and exactly two decimals.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use campground_booking::pricing::format_money;
///
/// assert_eq!(format_money(dec!(180.8), "$"), "$180.80");
/// ```
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);
    format!("{}{}", symbol, rounded)
}
