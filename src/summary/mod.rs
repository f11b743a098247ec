//! Booking summary panel.
//!
//! Turns a [`FormState`] into the text shown in the summary regions: the
//! guest name, the park, the ordered info labels and the total amount.

pub mod render;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::BookingConfig;
use crate::pricing::{compute_quote, format_money, FormState, Quote};

pub use render::render_summary_html;

/// Shown when neither first nor last name is filled in
pub const NAME_PLACEHOLDER: &str = "Name";
/// Shown when no park is selected
pub const LOCATION_PLACEHOLDER: &str = "Location";
/// Subtotal label while pricing is unknown
pub const SUBTOTAL_PLACEHOLDER: &str = "$$";
/// Last info label; extras are not priced yet
pub const EXTRAS_LABEL: &str = "Extras:";

/// Display format for stay dates, e.g. `Jul 1, 2025`
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Everything the summary regions display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPanel {
    pub name: String,
    pub location: String,
    /// From, To, Guests, Equipment, subtotal, tax, extras
    pub info_labels: Vec<String>,
    pub total: String,
    pub quote: Quote,
}

/// Build the summary panel for the current form values.
///
/// Pure and idempotent; safe to call after every keystroke.
pub fn build_summary(state: &FormState, config: &BookingConfig) -> SummaryPanel {
    let quote = compute_quote(state, config);

    SummaryPanel {
        name: display_name(&state.first_name, &state.last_name),
        location: if state.park.is_empty() {
            LOCATION_PLACEHOLDER.to_string()
        } else {
            state.park.clone()
        },
        info_labels: info_labels(state, &quote, config),
        total: quote.display_total(config),
        quote,
    }
}

/// `first last`, trimmed, or the placeholder when both are empty.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    if first_name.is_empty() && last_name.is_empty() {
        return NAME_PLACEHOLDER.to_string();
    }
    format!("{} {}", first_name, last_name).trim().to_string()
}

/// Short human-readable date; empty for a missing date.
pub fn format_display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn info_labels(state: &FormState, quote: &Quote, config: &BookingConfig) -> Vec<String> {
    let breakdown = quote.breakdown();

    let subtotal = if breakdown.subtotal > Decimal::ZERO {
        format_money(breakdown.subtotal, &config.currency_symbol)
    } else {
        SUBTOTAL_PLACEHOLDER.to_string()
    };
    let tax = if breakdown.tax > Decimal::ZERO {
        format_money(breakdown.tax, &config.currency_symbol)
    } else {
        String::new()
    };

    vec![
        format!("From: {}", format_display_date(state.check_in)),
        format!("To: {}", format_display_date(state.check_out)),
        format!("Guests: {}", state.guests),
        format!(
            "Equipment: {}",
            state.equipment.map(|e| e.as_str()).unwrap_or_default()
        ),
        subtotal,
        tax,
        EXTRAS_LABEL.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_summary() {
        let config = BookingConfig::default();
        let state =
            FormState::from_raw("Killarney", "2025-07-01", "2025-07-04", "4", "RV", "Ada", "Lovelace");
        let panel = build_summary(&state, &config);

        assert_eq!(panel.name, "Ada Lovelace");
        assert_eq!(panel.location, "Killarney");
        assert_eq!(panel.total, "$180.80");
        assert_eq!(
            panel.info_labels,
            vec![
                "From: Jul 1, 2025",
                "To: Jul 4, 2025",
                "Guests: 4",
                "Equipment: RV",
                "$160.00",
                "$20.80",
                "Extras:",
            ]
        );
    }

    #[test]
    fn test_empty_form_uses_placeholders() {
        let config = BookingConfig::default();
        let panel = build_summary(&FormState::default(), &config);

        assert_eq!(panel.name, "Name");
        assert_eq!(panel.location, "Location");
        assert_eq!(panel.total, "$$$");
        assert_eq!(
            panel.info_labels,
            vec!["From: ", "To: ", "Guests: ", "Equipment: ", "$$", "", "Extras:"]
        );
    }

    #[test]
    fn test_partial_name_is_trimmed() {
        assert_eq!(display_name("Ada", ""), "Ada");
        assert_eq!(display_name("", "Lovelace"), "Lovelace");
        assert_eq!(display_name("", ""), "Name");
    }

    #[test]
    fn test_one_date_only() {
        let config = BookingConfig::default();
        let state = FormState::from_raw("Killarney", "2025-01-05", "", "2", "Tent", "", "");
        let panel = build_summary(&state, &config);

        assert_eq!(panel.info_labels[0], "From: Jan 5, 2025");
        assert_eq!(panel.info_labels[1], "To: ");
        assert_eq!(panel.info_labels[4], "$$");
        assert_eq!(panel.total, "$$$");
    }

    #[test]
    fn test_build_summary_is_idempotent() {
        let config = BookingConfig::default();
        let state = FormState::from_raw("Killarney", "2025-07-01", "2025-07-04", "4", "RV", "", "");
        assert_eq!(build_summary(&state, &config), build_summary(&state, &config));
    }
}
