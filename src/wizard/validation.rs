//! Field-level validity rules for each step.
//!
//! A rule only runs when the bound view actually has the field, the same
//! way a form only checks the inputs it contains.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::BookingConfig;
use crate::pricing::models::{parse_input_date, EquipmentType};

use super::step::Step;
use super::view::{Field, View, ViewHandles};

/// A single invalid field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Why a step could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{step} has {} invalid field(s)", .errors.len())]
pub struct ValidationFailure {
    pub step: Step,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Check every rule of `step` against the current field values.
pub fn validate_step(
    step: Step,
    view: &dyn View,
    handles: &ViewHandles,
    config: &BookingConfig,
) -> Result<(), ValidationFailure> {
    let mut checker = Checker {
        view,
        handles,
        errors: Vec::new(),
    };

    match step {
        Step::TripDetails => check_trip_details(&mut checker),
        Step::GuestDetails => check_guest_details(&mut checker, config),
        Step::Payment => check_payment(&mut checker),
    }

    if checker.errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure {
            step,
            errors: checker.errors,
        })
    }
}

struct Checker<'a> {
    view: &'a dyn View,
    handles: &'a ViewHandles,
    errors: Vec<FieldError>,
}

impl Checker<'_> {
    /// Trimmed value of a bound field; `None` when the view lacks it.
    fn value(&self, field: Field) -> Option<String> {
        self.handles
            .has_field(field)
            .then(|| self.view.field_value(field).trim().to_string())
    }

    fn fail(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Value of a bound, non-blank field. Blank fields are reported.
    fn required(&mut self, field: Field, message: &str) -> Option<String> {
        let value = self.value(field)?;
        if value.is_empty() {
            self.fail(field, message);
            return None;
        }
        Some(value)
    }

    fn required_date(&mut self, field: Field, message: &str) -> Option<NaiveDate> {
        let raw = self.required(field, message)?;
        let date = parse_input_date(&raw);
        if date.is_none() {
            self.fail(field, "Enter a date as YYYY-MM-DD.");
        }
        date
    }
}

fn check_trip_details(c: &mut Checker<'_>) {
    c.required(Field::Park, "Please choose a park.");
    let check_in = c.required_date(Field::From, "Please select a check-in date.");
    let check_out = c.required_date(Field::To, "Please select a check-out date.");

    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_out <= check_in {
            c.fail(Field::To, "Check-out must be after check-in.");
        }
    }
}

fn check_guest_details(c: &mut Checker<'_>, config: &BookingConfig) {
    if let Some(raw) = c.required(Field::Guests, "Please enter the number of guests.") {
        match raw.parse::<i64>() {
            Ok(n) if (1..=config.max_guests).contains(&n) => {}
            Ok(_) => c.fail(
                Field::Guests,
                format!("Guests must be between 1 and {}.", config.max_guests),
            ),
            Err(_) => c.fail(Field::Guests, "Enter a whole number of guests."),
        }
    }

    if let Some(raw) = c.required(Field::Equipment, "Please choose your equipment.") {
        if raw.parse::<EquipmentType>().is_err() {
            c.fail(Field::Equipment, "Unknown equipment type.");
        }
    }

    c.required(Field::FirstName, "Please enter your first name.");
    c.required(Field::LastName, "Please enter your last name.");

    if let Some(email) = c.required(Field::Email, "Please enter your email address.") {
        if !looks_like_email(&email) {
            c.fail(Field::Email, "Enter a valid email address.");
        }
    }

    if let Some(phone) = c.value(Field::Phone) {
        if !phone.is_empty() && !looks_like_phone(&phone) {
            c.fail(Field::Phone, "Enter a valid phone number.");
        }
    }
}

fn check_payment(c: &mut Checker<'_>) {
    c.required(Field::CardName, "Please enter the name on the card.");

    if let Some(number) = c.required(Field::CardNumber, "Please enter a card number.") {
        let digits: String = number.chars().filter(|ch| *ch != ' ' && *ch != '-').collect();
        if !(12..=19).contains(&digits.len()) || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            c.fail(Field::CardNumber, "Enter a valid card number.");
        }
    }

    if let Some(expiry) = c.required(Field::CardExpiry, "Please enter the card expiry.") {
        if !is_valid_expiry(&expiry) {
            c.fail(Field::CardExpiry, "Use the format MM/YY.");
        }
    }

    if let Some(cvc) = c.required(Field::CardCvc, "Please enter the security code.") {
        if !(3..=4).contains(&cvc.len()) || !cvc.chars().all(|ch| ch.is_ascii_digit()) {
            c.fail(Field::CardCvc, "Enter the 3 or 4 digit security code.");
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn looks_like_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|ch| ch.is_ascii_digit() || " +-().".contains(ch));
    let digits = value.chars().filter(|ch| ch.is_ascii_digit()).count();
    allowed && digits >= 7
}

fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.chars().all(|ch| ch.is_ascii_digit());
    two_digits(month)
        && two_digits(year)
        && month.parse::<u32>().map_or(false, |m| (1..=12).contains(&m))
}
