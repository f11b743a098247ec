//! Price quote for the current trip parameters.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::BookingConfig;

use super::calculators::{base_amount, equipment_fee, format_money, guest_fee, nights_between, round_money, tax_for};
use super::models::FormState;

/// Placeholder shown instead of a total while the stay dates are unknown
pub const TOTAL_PLACEHOLDER: &str = "$$$";

/// Computed price breakdown.
///
/// Constructed fresh on every recomputation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingQuote {
    pub nights: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub equipment_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub guest_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl PricingQuote {
    /// Zero-valued breakdown used while pricing is unknown
    pub fn unknown() -> Self {
        Self {
            nights: 0,
            base_amount: Decimal::ZERO,
            equipment_amount: Decimal::ZERO,
            guest_amount: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Outcome of pricing a form snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Quote {
    /// At least one stay date is missing
    Unknown,
    Priced(PricingQuote),
}

impl Quote {
    /// Breakdown amounts; all zero while unknown
    pub fn breakdown(&self) -> PricingQuote {
        match self {
            Quote::Unknown => PricingQuote::unknown(),
            Quote::Priced(quote) => quote.clone(),
        }
    }

    pub fn is_priced(&self) -> bool {
        matches!(self, Quote::Priced(_))
    }

    /// Total as displayed: `"$180.80"`, or `"$$$"` when unknown.
    pub fn display_total(&self, config: &BookingConfig) -> String {
        match self {
            Quote::Unknown => TOTAL_PLACEHOLDER.to_string(),
            Quote::Priced(quote) => format_money(quote.total, &config.currency_symbol),
        }
    }
}

/// Price the current form values.
///
/// Pure function of its inputs: the same state and configuration always
/// produce the same quote.
pub fn compute_quote(state: &FormState, config: &BookingConfig) -> Quote {
    let Some((check_in, check_out)) = state.stay() else {
        return Quote::Unknown;
    };

    let nights = nights_between(check_in, check_out);
    let base_amount = base_amount(nights, config);
    let equipment_amount = equipment_fee(state.equipment, config);
    let guest_amount = guest_fee(state.guest_count(), config);

    let subtotal = round_money(base_amount + equipment_amount + guest_amount, 2);
    let tax = tax_for(subtotal, config);
    let total = subtotal + tax;

    Quote::Priced(PricingQuote {
        nights,
        base_amount,
        equipment_amount,
        guest_amount,
        subtotal,
        tax,
        total,
    })
}
