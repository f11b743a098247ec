//! The reservation wizard as a single explicit state object.

use tracing::warn;

use crate::config::BookingConfig;
use crate::summary::SummaryPanel;

use super::calculator::SummaryCalculator;
use super::controller::{StepController, StepOutcome};
use super::events::{Event, EventTable};
use super::payment::{select_payment_tab, PaymentMethod};
use super::step::Step;
use super::view::{Field, View, ViewHandles};

/// Step Controller and Summary Calculator bound to one view.
#[derive(Debug, Clone)]
pub struct Booking {
    handles: ViewHandles,
    controller: StepController,
    calculator: SummaryCalculator,
}

impl Booking {
    /// Bind to `view`; the handles resolved here are reused for every event.
    pub fn new(config: BookingConfig, view: &dyn View) -> Self {
        Self {
            handles: ViewHandles::bind(view),
            controller: StepController::new(),
            calculator: SummaryCalculator::new(config),
        }
    }

    pub fn current_step(&self) -> Step {
        self.controller.current()
    }

    pub fn handles(&self) -> &ViewHandles {
        &self.handles
    }

    pub fn config(&self) -> &BookingConfig {
        self.calculator.config()
    }

    /// Initial render: first step visible, summary populated.
    pub fn start(&mut self, view: &mut dyn View) {
        self.controller
            .go_to_step(Step::FIRST, view, &self.handles, &self.calculator);
    }

    /// Store a new field value and refresh the summary.
    pub fn edit_field(&mut self, view: &mut dyn View, field: Field, value: &str) {
        if !self.handles.has_field(field) {
            warn!("Edit for field not present in view: {}", field);
            return;
        }
        view.set_field_value(field, value);
        self.calculator.refresh(view, &self.handles);
    }

    pub fn refresh_summary(&self, view: &mut dyn View) -> SummaryPanel {
        self.calculator.refresh(view, &self.handles)
    }

    /// Current summary without touching the view
    pub fn summary(&self, view: &dyn View) -> SummaryPanel {
        self.calculator.compute(&self.handles.read_form_state(view))
    }

    pub fn go_to_step(&mut self, view: &mut dyn View, step: Step) {
        self.controller
            .go_to_step(step, view, &self.handles, &self.calculator);
    }

    pub fn submit_step(&mut self, view: &mut dyn View, step: Step) -> StepOutcome {
        self.controller
            .submit_step(step, view, &self.handles, &self.calculator)
    }

    pub fn select_payment_tab(&mut self, view: &mut dyn View, method: PaymentMethod) -> bool {
        select_payment_tab(view, &self.handles, method)
    }
}

/// A [`Booking`] wired to an event table.
pub struct BookingApp {
    booking: Booking,
    events: EventTable,
}

impl BookingApp {
    /// Standard handlers for every event kind
    pub fn new(config: BookingConfig, view: &dyn View) -> Self {
        Self::with_events(Booking::new(config, view), EventTable::standard())
    }

    pub fn with_events(booking: Booking, events: EventTable) -> Self {
        Self { booking, events }
    }

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    pub fn events_mut(&mut self) -> &mut EventTable {
        &mut self.events
    }

    /// Run every handler registered for the event's kind, in order.
    pub fn dispatch(&mut self, view: &mut dyn View, event: &Event) -> Option<StepOutcome> {
        self.events.dispatch(&mut self.booking, view, event)
    }

    /// Dispatch a recorded session in order and collect every step outcome.
    pub fn replay(&mut self, view: &mut dyn View, events: &[Event]) -> Vec<StepOutcome> {
        events
            .iter()
            .filter_map(|event| self.dispatch(view, event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::view::MemoryView;

    fn started() -> (Booking, MemoryView) {
        let mut view = MemoryView::new();
        let mut booking = Booking::new(BookingConfig::default(), &view);
        booking.start(&mut view);
        (booking, view)
    }

    #[test]
    fn test_start_shows_first_step_with_placeholders() {
        let (booking, view) = started();
        assert_eq!(booking.current_step(), Step::TripDetails);
        assert_eq!(view.active_panels(), vec![Step::TripDetails]);
        assert_eq!(view.progress(), &[true, false, false]);
        assert_eq!(view.summary_name(), "Name");
        assert_eq!(view.summary_location(), "Location");
        assert_eq!(view.total_amount(), "$$$");
    }

    #[test]
    fn test_edit_field_refreshes_summary() {
        let (mut booking, mut view) = started();
        booking.edit_field(&mut view, Field::Park, "Killarney");
        booking.edit_field(&mut view, Field::From, "2025-07-01");
        assert_eq!(view.summary_location(), "Killarney");
        assert_eq!(view.total_amount(), "$$$");

        booking.edit_field(&mut view, Field::To, "2025-07-02");
        assert_eq!(view.total_amount(), "$50.85");
        assert_eq!(booking.summary(&view).total, "$50.85");
    }

    #[test]
    fn test_edit_unbound_field_is_ignored() {
        let mut view = MemoryView::new().without_field(Field::Phone);
        let mut booking = Booking::new(BookingConfig::default(), &view);
        booking.edit_field(&mut view, Field::Phone, "555-0199");
        assert_eq!(view.field(Field::Phone), None);
    }

    #[test]
    fn test_replay_demo_session() {
        let events: Vec<Event> =
            serde_json::from_str(include_str!("../../demos/killarney.json")).unwrap();
        let mut view = MemoryView::new();
        let mut app = BookingApp::new(BookingConfig::default(), &view);

        let outcomes = app.replay(&mut view, &events);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[0],
            StepOutcome::Advanced {
                from: Step::TripDetails,
                to: Step::GuestDetails
            }
        );
        match &outcomes[1] {
            StepOutcome::Rejected(failure) => {
                assert_eq!(failure.step, Step::GuestDetails);
                assert_eq!(failure.fields(), vec![Field::Email]);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(
            outcomes[2],
            StepOutcome::Advanced {
                from: Step::GuestDetails,
                to: Step::Payment
            }
        );

        assert_eq!(app.booking().current_step(), Step::Payment);
        assert_eq!(view.active_panels(), vec![Step::Payment]);
        assert_eq!(view.total_amount(), "$180.80");
        assert_eq!(view.summary_name(), "Ada Lovelace");
        assert_eq!(view.summary_location(), "Killarney");
        assert_eq!(view.active_payment_tabs(), vec![PaymentMethod::PayPal]);
        assert_eq!(view.validation_message(Field::Email), None);
        assert!(view.acknowledgements().is_empty());
    }

    #[test]
    fn test_replay_skips_out_of_order_submit() {
        let mut view = MemoryView::new();
        let mut app = BookingApp::new(BookingConfig::default(), &view);
        let events = vec![Event::Ready, Event::Submit { step: Step::Payment }];

        let outcomes = app.replay(&mut view, &events);

        assert_eq!(
            outcomes,
            vec![StepOutcome::NotShown {
                submitted: Step::Payment,
                current: Step::TripDetails
            }]
        );
        assert_eq!(view.total_amount(), "$$$");
        assert!(view.acknowledgements().is_empty());
    }
}
