//! Step Controller: owns the current step and gates advancement on validity.

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::calculator::SummaryCalculator;
use super::step::Step;
use super::validation::{validate_step, ValidationFailure};
use super::view::{View, ViewHandles};

/// Local acknowledgment of a completed reservation.
///
/// No payment is processed; the reference only identifies the
/// acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub reference: Uuid,
    /// Total as displayed at the moment of confirmation
    pub total: String,
    pub message: String,
}

/// Result of submitting a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Advanced { from: Step, to: Step },
    /// The step stays put; feedback is shown on the offending fields
    Rejected(ValidationFailure),
    /// Final step accepted; the form has been cleared and is back at step 1
    Completed(Confirmation),
    /// A step that is not shown was submitted; nothing changes
    NotShown { submitted: Step, current: Step },
}

#[derive(Debug, Clone)]
pub struct StepController {
    current: Step,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: Step::FIRST,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Show `step`, update the progress markers and refresh the summary.
    pub fn go_to_step(
        &mut self,
        step: Step,
        view: &mut dyn View,
        handles: &ViewHandles,
        calculator: &SummaryCalculator,
    ) {
        for panel in &handles.panels {
            view.set_panel_active(*panel, false);
        }
        if handles.has_panel(step) {
            view.set_panel_active(step, true);
        }

        // Markers up to and including the current step are active
        for index in 0..handles.progress_markers {
            view.set_progress_marker(index, index <= step.index());
        }

        debug!("Showing {} (was {})", step, self.current);
        self.current = step;
        calculator.refresh(view, handles);
    }

    /// Validate `step` and move past it if every rule holds.
    ///
    /// Only the step currently shown can be submitted.
    pub fn submit_step(
        &mut self,
        step: Step,
        view: &mut dyn View,
        handles: &ViewHandles,
        calculator: &SummaryCalculator,
    ) -> StepOutcome {
        if step != self.current {
            warn!("Ignoring submit of {} while {} is shown", step, self.current);
            return StepOutcome::NotShown {
                submitted: step,
                current: self.current,
            };
        }

        if let Err(failure) = validate_step(step, view, handles, calculator.config()) {
            warn!("{} rejected: {:?}", step, failure.fields());
            view.clear_validity(step);
            view.report_validity(&failure);
            return StepOutcome::Rejected(failure);
        }

        view.clear_validity(step);
        let panel = calculator.refresh(view, handles);

        match step.next() {
            Some(next) => {
                self.go_to_step(next, view, handles, calculator);
                StepOutcome::Advanced {
                    from: step,
                    to: next,
                }
            }
            None => {
                let confirmation = Confirmation {
                    reference: Uuid::new_v4(),
                    total: panel.total,
                    message: calculator.config().confirmation_message.clone(),
                };
                view.acknowledge(&confirmation);
                info!(
                    "Reservation confirmed: {} ({})",
                    confirmation.reference, confirmation.total
                );
                self.reset(view, handles, calculator);
                StepOutcome::Completed(confirmation)
            }
        }
    }

    /// Clear every field of every step and return to the first step.
    pub fn reset(&mut self, view: &mut dyn View, handles: &ViewHandles, calculator: &SummaryCalculator) {
        for step in Step::ALL {
            for field in step.fields() {
                if handles.has_field(*field) {
                    view.set_field_value(*field, "");
                }
            }
            view.clear_validity(step);
        }
        self.go_to_step(Step::FIRST, view, handles, calculator);
    }
}
