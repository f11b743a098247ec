//! View boundary for the reservation wizard.
//!
//! The wizard never touches markup directly. Hosts implement [`View`];
//! [`ViewHandles`] records, once at start-up, which fields and regions the
//! host actually provides. [`MemoryView`] is the in-process implementation
//! used by the binary and the tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::pricing::FormState;

use super::controller::Confirmation;
use super::payment::PaymentMethod;
use super::step::Step;
use super::validation::ValidationFailure;

/// Named input fields, keyed by their form `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Park,
    From,
    To,
    Guests,
    Equipment,
    FirstName,
    LastName,
    Email,
    Phone,
    CardName,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Park,
        Field::From,
        Field::To,
        Field::Guests,
        Field::Equipment,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::CardName,
        Field::CardNumber,
        Field::CardExpiry,
        Field::CardCvc,
    ];

    /// Form `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            Field::Park => "park",
            Field::From => "from",
            Field::To => "to",
            Field::Guests => "guests",
            Field::Equipment => "equipment",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::CardName => "cardName",
            Field::CardNumber => "cardNumber",
            Field::CardExpiry => "cardExpiry",
            Field::CardCvc => "cardCvc",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

/// Summary display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SummaryName,
    SummaryLocation,
    /// Zero-based info label slot
    InfoLabel(usize),
    TotalAmount,
}

/// What the wizard needs from a host view.
pub trait View {
    fn has_field(&self, field: Field) -> bool;
    fn field_value(&self, field: Field) -> String;
    fn set_field_value(&mut self, field: Field, value: &str);

    fn has_panel(&self, step: Step) -> bool;
    fn set_panel_active(&mut self, step: Step, active: bool);

    fn progress_marker_count(&self) -> usize;
    fn set_progress_marker(&mut self, index: usize, active: bool);

    /// Number of info label slots in the summary panel
    fn info_label_count(&self) -> usize;
    fn set_region_text(&mut self, region: Region, text: &str);

    fn payment_tabs(&self) -> Vec<PaymentMethod>;
    fn set_payment_tab_active(&mut self, method: PaymentMethod, active: bool);

    /// Show inline feedback for a rejected step
    fn report_validity(&mut self, failure: &ValidationFailure);
    /// Remove inline feedback from a step's fields
    fn clear_validity(&mut self, step: Step);

    /// Completion acknowledgment
    fn acknowledge(&mut self, confirmation: &Confirmation);
}

/// Fields and regions resolved from a view at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandles {
    pub fields: Vec<Field>,
    pub panels: Vec<Step>,
    pub progress_markers: usize,
    pub info_labels: usize,
    pub payment_tabs: Vec<PaymentMethod>,
}

impl ViewHandles {
    /// Query the view once and remember what it provides.
    pub fn bind(view: &dyn View) -> Self {
        let handles = Self {
            fields: Field::ALL.into_iter().filter(|f| view.has_field(*f)).collect(),
            panels: Step::ALL.into_iter().filter(|s| view.has_panel(*s)).collect(),
            progress_markers: view.progress_marker_count(),
            info_labels: view.info_label_count(),
            payment_tabs: view.payment_tabs(),
        };
        tracing::debug!(
            "Bound view: {} fields, {} panels, {} progress markers, {} info labels",
            handles.fields.len(),
            handles.panels.len(),
            handles.progress_markers,
            handles.info_labels
        );
        handles
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn has_panel(&self, step: Step) -> bool {
        self.panels.contains(&step)
    }

    /// Value of a bound field; unbound fields read as empty.
    pub fn read(&self, view: &dyn View, field: Field) -> String {
        if self.has_field(field) {
            view.field_value(field)
        } else {
            String::new()
        }
    }

    /// Snapshot the pricing-relevant fields.
    pub fn read_form_state(&self, view: &dyn View) -> FormState {
        FormState::from_raw(
            &self.read(view, Field::Park),
            &self.read(view, Field::From),
            &self.read(view, Field::To),
            &self.read(view, Field::Guests),
            &self.read(view, Field::Equipment),
            &self.read(view, Field::FirstName),
            &self.read(view, Field::LastName),
        )
    }
}

/// In-memory view with the standard reservation layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryView {
    fields: BTreeMap<Field, String>,
    panels: BTreeMap<Step, bool>,
    progress: Vec<bool>,
    summary_name: String,
    summary_location: String,
    info_labels: Vec<String>,
    total_amount: String,
    payment_tabs: BTreeMap<PaymentMethod, bool>,
    validation: BTreeMap<Field, String>,
    acknowledgements: Vec<String>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    /// Every field, three panels, three progress markers, seven info labels
    /// and all payment tabs (card selected).
    pub fn new() -> Self {
        Self {
            fields: Field::ALL.into_iter().map(|f| (f, String::new())).collect(),
            panels: Step::ALL.into_iter().map(|s| (s, false)).collect(),
            progress: vec![false; Step::ALL.len()],
            summary_name: String::new(),
            summary_location: String::new(),
            info_labels: vec![String::new(); 7],
            total_amount: String::new(),
            payment_tabs: PaymentMethod::ALL
                .into_iter()
                .map(|m| (m, m == PaymentMethod::Card))
                .collect(),
            validation: BTreeMap::new(),
            acknowledgements: Vec::new(),
        }
    }

    pub fn without_field(mut self, field: Field) -> Self {
        self.fields.remove(&field);
        self
    }

    pub fn without_panel(mut self, step: Step) -> Self {
        self.panels.remove(&step);
        self
    }

    pub fn with_info_labels(mut self, count: usize) -> Self {
        self.info_labels = vec![String::new(); count];
        self
    }

    /// Type into a field directly, without going through the event table.
    pub fn fill(&mut self, field: Field, value: &str) -> &mut Self {
        self.set_field_value(field, value);
        self
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn active_panels(&self) -> Vec<Step> {
        self.panels
            .iter()
            .filter(|(_, active)| **active)
            .map(|(step, _)| *step)
            .collect()
    }

    pub fn progress(&self) -> &[bool] {
        &self.progress
    }

    pub fn summary_name(&self) -> &str {
        &self.summary_name
    }

    pub fn summary_location(&self) -> &str {
        &self.summary_location
    }

    pub fn info_labels(&self) -> &[String] {
        &self.info_labels
    }

    pub fn total_amount(&self) -> &str {
        &self.total_amount
    }

    pub fn active_payment_tabs(&self) -> Vec<PaymentMethod> {
        self.payment_tabs
            .iter()
            .filter(|(_, active)| **active)
            .map(|(method, _)| *method)
            .collect()
    }

    pub fn validation_message(&self, field: Field) -> Option<&str> {
        self.validation.get(&field).map(String::as_str)
    }

    pub fn acknowledgements(&self) -> &[String] {
        &self.acknowledgements
    }
}

impl View for MemoryView {
    fn has_field(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    fn field_value(&self, field: Field) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        if let Some(slot) = self.fields.get_mut(&field) {
            *slot = value.to_string();
        }
    }

    fn has_panel(&self, step: Step) -> bool {
        self.panels.contains_key(&step)
    }

    fn set_panel_active(&mut self, step: Step, active: bool) {
        if let Some(panel) = self.panels.get_mut(&step) {
            *panel = active;
        }
    }

    fn progress_marker_count(&self) -> usize {
        self.progress.len()
    }

    fn set_progress_marker(&mut self, index: usize, active: bool) {
        if let Some(marker) = self.progress.get_mut(index) {
            *marker = active;
        }
    }

    fn info_label_count(&self) -> usize {
        self.info_labels.len()
    }

    fn set_region_text(&mut self, region: Region, text: &str) {
        match region {
            Region::SummaryName => self.summary_name = text.to_string(),
            Region::SummaryLocation => self.summary_location = text.to_string(),
            Region::InfoLabel(i) => {
                if let Some(label) = self.info_labels.get_mut(i) {
                    *label = text.to_string();
                }
            }
            Region::TotalAmount => self.total_amount = text.to_string(),
        }
    }

    fn payment_tabs(&self) -> Vec<PaymentMethod> {
        self.payment_tabs.keys().copied().collect()
    }

    fn set_payment_tab_active(&mut self, method: PaymentMethod, active: bool) {
        if let Some(tab) = self.payment_tabs.get_mut(&method) {
            *tab = active;
        }
    }

    fn report_validity(&mut self, failure: &ValidationFailure) {
        for error in &failure.errors {
            self.validation.insert(error.field, error.message.clone());
        }
    }

    fn clear_validity(&mut self, step: Step) {
        for field in step.fields() {
            self.validation.remove(field);
        }
    }

    fn acknowledge(&mut self, confirmation: &Confirmation) {
        self.acknowledgements.push(confirmation.message.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_inputs() {
        assert_eq!(Field::FirstName.name(), "firstName");
        assert_eq!("cardCvc".parse::<Field>().unwrap(), Field::CardCvc);
        assert!("surname".parse::<Field>().is_err());
        assert_eq!(serde_json::to_string(&Field::LastName).unwrap(), "\"lastName\"");
    }

    #[test]
    fn test_bind_records_layout() {
        let view = MemoryView::new()
            .without_field(Field::Phone)
            .without_panel(Step::Payment)
            .with_info_labels(4);
        let handles = ViewHandles::bind(&view);

        assert!(!handles.has_field(Field::Phone));
        assert!(handles.has_field(Field::Park));
        assert_eq!(handles.panels, vec![Step::TripDetails, Step::GuestDetails]);
        assert_eq!(handles.progress_markers, 3);
        assert_eq!(handles.info_labels, 4);
        assert_eq!(handles.payment_tabs.len(), PaymentMethod::ALL.len());
    }

    #[test]
    fn test_read_form_state_ignores_unbound_fields() {
        let mut view = MemoryView::new();
        view.fill(Field::Park, "Killarney")
            .fill(Field::From, "2025-07-01")
            .fill(Field::Guests, "3");
        let handles = ViewHandles {
            fields: vec![Field::From, Field::Guests],
            ..ViewHandles::bind(&view)
        };

        let state = handles.read_form_state(&view);
        assert_eq!(state.park, "");
        assert_eq!(state.guests, "3");
        assert!(state.check_in.is_some());
    }

    #[test]
    fn test_memory_view_ignores_missing_slots() {
        let mut view = MemoryView::new().without_field(Field::Email).with_info_labels(2);
        view.set_field_value(Field::Email, "a@b.c");
        view.set_region_text(Region::InfoLabel(5), "ignored");

        assert_eq!(view.field(Field::Email), None);
        assert_eq!(view.info_labels(), &["".to_string(), "".to_string()]);
    }

    #[test]
    fn test_memory_view_serializes() {
        let json = serde_json::to_value(MemoryView::new()).unwrap();
        assert_eq!(json["fields"]["firstName"], "");
        assert_eq!(json["panels"]["1"], false);
        assert_eq!(json["payment_tabs"]["card"], true);
    }
}
