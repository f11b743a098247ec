//! User events and the table that routes them to handlers.
//!
//! Handlers are plain functions run synchronously, one event at a time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::booking::Booking;
use super::controller::StepOutcome;
use super::payment::PaymentMethod;
use super::step::Step;
use super::view::{Field, View};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The view finished loading
    Ready,
    /// Keystroke in a field
    Input { field: Field, value: String },
    /// Committed change of a field
    Change { field: Field, value: String },
    /// A step form was submitted
    Submit { step: Step },
    /// A payment tab was clicked
    PaymentTab { method: PaymentMethod },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    Input,
    Change,
    Submit,
    PaymentTab,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Ready => EventKind::Ready,
            Event::Input { .. } => EventKind::Input,
            Event::Change { .. } => EventKind::Change,
            Event::Submit { .. } => EventKind::Submit,
            Event::PaymentTab { .. } => EventKind::PaymentTab,
        }
    }
}

pub type Handler = fn(&mut Booking, &mut dyn View, &Event) -> Option<StepOutcome>;

/// Event kind to handler registrations.
#[derive(Clone, Default)]
pub struct EventTable {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl EventTable {
    /// Empty table; nothing is handled
    pub fn new() -> Self {
        Self::default()
    }

    /// The wizard's own handlers.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table
            .register(EventKind::Ready, on_ready)
            .register(EventKind::Input, on_field_edit)
            .register(EventKind::Change, on_field_edit)
            .register(EventKind::Submit, on_submit)
            .register(EventKind::PaymentTab, on_payment_tab);
        table
    }

    pub fn register(&mut self, kind: EventKind, handler: Handler) -> &mut Self {
        self.handlers.entry(kind).or_default().push(handler);
        self
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Run the handlers for `event` in registration order.
    ///
    /// Returns the last step outcome any handler produced.
    pub fn dispatch(
        &self,
        booking: &mut Booking,
        view: &mut dyn View,
        event: &Event,
    ) -> Option<StepOutcome> {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::warn!("No handler registered for {:?}", event.kind());
            return None;
        };

        let mut outcome = None;
        for handler in handlers {
            if let Some(result) = handler(&mut *booking, &mut *view, event) {
                outcome = Some(result);
            }
        }
        outcome
    }
}

fn on_ready(booking: &mut Booking, view: &mut dyn View, _event: &Event) -> Option<StepOutcome> {
    booking.start(view);
    None
}

fn on_field_edit(booking: &mut Booking, view: &mut dyn View, event: &Event) -> Option<StepOutcome> {
    if let Event::Input { field, value } | Event::Change { field, value } = event {
        booking.edit_field(view, *field, value);
    }
    None
}

fn on_submit(booking: &mut Booking, view: &mut dyn View, event: &Event) -> Option<StepOutcome> {
    match event {
        Event::Submit { step } => Some(booking.submit_step(view, *step)),
        _ => None,
    }
}

fn on_payment_tab(booking: &mut Booking, view: &mut dyn View, event: &Event) -> Option<StepOutcome> {
    if let Event::PaymentTab { method } = event {
        booking.select_payment_tab(view, *method);
    }
    None
}
