//! The three wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

use super::view::Field;

/// One panel of the reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Park and stay dates
    TripDetails = 1,
    /// Guests, equipment and contact details
    GuestDetails = 2,
    Payment = 3,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::TripDetails, Step::GuestDetails, Step::Payment];

    pub const FIRST: Step = Step::TripDetails;

    /// 1-based step number
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position, used for progress markers
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Following step, or `None` for the last one
    pub fn next(self) -> Option<Step> {
        match self {
            Step::TripDetails => Some(Step::GuestDetails),
            Step::GuestDetails => Some(Step::Payment),
            Step::Payment => None,
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Input fields owned by this step's form
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::TripDetails => &[Field::Park, Field::From, Field::To],
            Step::GuestDetails => &[
                Field::Guests,
                Field::Equipment,
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Phone,
            ],
            Step::Payment => &[
                Field::CardName,
                Field::CardNumber,
                Field::CardExpiry,
                Field::CardCvc,
            ],
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = AppError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Step::TripDetails),
            2 => Ok(Step::GuestDetails),
            3 => Ok(Step::Payment),
            other => Err(AppError::UnknownStep(other)),
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> u8 {
        step.number()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}
