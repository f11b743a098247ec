//! Three-step reservation wizard.
//!
//! The Step Controller decides which step is shown and whether a submit may
//! advance; the Summary Calculator keeps the summary panel in sync with the
//! fields. Both work against a [`View`] through handles bound once.

pub mod booking;
pub mod calculator;
pub mod controller;
pub mod events;
pub mod payment;
pub mod step;
pub mod validation;
pub mod view;

// Re-export commonly used items
pub use booking::{Booking, BookingApp};
pub use calculator::SummaryCalculator;
pub use controller::{Confirmation, StepController, StepOutcome};
pub use events::{Event, EventKind, EventTable, Handler};
pub use payment::PaymentMethod;
pub use step::Step;
pub use validation::{FieldError, ValidationFailure};
pub use view::{Field, MemoryView, Region, View, ViewHandles};
