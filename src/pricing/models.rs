//! Form values consumed by the pricing engine.
//!
//! A [`FormState`] is a snapshot of the reservation fields taken at the moment
//! of a recomputation. Parsing is deliberately permissive: anything that does
//! not parse is treated as empty instead of failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by the `from` / `to` inputs.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Equipment the party is bringing to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    Tent,
    #[serde(rename = "RV")]
    Rv,
    Trailer,
    Van,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 4] = [
        EquipmentType::Tent,
        EquipmentType::Rv,
        EquipmentType::Trailer,
        EquipmentType::Van,
    ];

    /// Value as submitted by the equipment selector
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Tent => "Tent",
            EquipmentType::Rv => "RV",
            EquipmentType::Trailer => "Trailer",
            EquipmentType::Van => "Van",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentType::ALL
            .into_iter()
            .find(|e| e.as_str() == s.trim())
            .ok_or(())
    }
}

/// Snapshot of the reservation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub park: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Raw guests input; shown verbatim in the summary
    pub guests: String,
    pub equipment: Option<EquipmentType>,
    pub first_name: String,
    pub last_name: String,
}

impl FormState {
    /// Build a state from raw input values, as typed into the form.
    pub fn from_raw(
        park: &str,
        from: &str,
        to: &str,
        guests: &str,
        equipment: &str,
        first_name: &str,
        last_name: &str,
    ) -> Self {
        Self {
            park: park.to_string(),
            check_in: parse_input_date(from),
            check_out: parse_input_date(to),
            guests: guests.to_string(),
            equipment: equipment.parse().ok(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Guest count used for pricing.
    ///
    /// Reads the leading integer of the input; missing, unparseable or zero
    /// counts fall back to a single guest.
    pub fn guest_count(&self) -> i64 {
        match parse_leading_int(&self.guests) {
            Some(0) | None => 1,
            Some(n) => n,
        }
    }

    /// Both stay dates, if both are known
    pub fn stay(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.check_in?, self.check_out?))
    }
}

/// Parse a date input value; empty or malformed input yields `None`.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT).ok()
}

/// Parse an optional sign followed by digits, ignoring anything after them.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_round_trips_selector_values() {
        assert_eq!("RV".parse::<EquipmentType>(), Ok(EquipmentType::Rv));
        assert_eq!(" Tent ".parse::<EquipmentType>(), Ok(EquipmentType::Tent));
        assert!("rv".parse::<EquipmentType>().is_err());
        assert!("".parse::<EquipmentType>().is_err());
        assert_eq!(EquipmentType::Rv.to_string(), "RV");
    }

    #[test]
    fn test_guest_count_defaults_to_one() {
        let mut state = FormState::default();
        assert_eq!(state.guest_count(), 1);

        state.guests = "lots".to_string();
        assert_eq!(state.guest_count(), 1);

        state.guests = "0".to_string();
        assert_eq!(state.guest_count(), 1);
    }

    #[test]
    fn test_guest_count_reads_leading_integer() {
        let mut state = FormState::default();
        state.guests = "4".to_string();
        assert_eq!(state.guest_count(), 4);

        state.guests = " 6 people".to_string();
        assert_eq!(state.guest_count(), 6);

        state.guests = "-3".to_string();
        assert_eq!(state.guest_count(), -3);
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2025-07-01"),
            NaiveDate::from_ymd_opt(2025, 7, 1)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("07/01/2025"), None);
        assert_eq!(parse_input_date("2025-02-30"), None);
    }

    #[test]
    fn test_from_raw_is_permissive() {
        let state = FormState::from_raw("Algonquin", "2025-07-01", "bad", "", "Canoe", "", "");
        assert!(state.check_in.is_some());
        assert!(state.check_out.is_none());
        assert!(state.equipment.is_none());
        assert!(state.stay().is_none());
    }
}
