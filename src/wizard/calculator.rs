//! Summary Calculator: recomputes the summary panel and writes it to the view.

use crate::config::BookingConfig;
use crate::pricing::FormState;
use crate::summary::{build_summary, SummaryPanel};

use super::view::{Region, View, ViewHandles};

#[derive(Debug, Clone)]
pub struct SummaryCalculator {
    config: BookingConfig,
}

impl SummaryCalculator {
    pub fn new(config: BookingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Pure computation, no view access
    pub fn compute(&self, state: &FormState) -> SummaryPanel {
        build_summary(state, &self.config)
    }

    /// Read the fields, recompute, and rewrite every summary region.
    ///
    /// Idempotent: calling it twice in a row leaves the view unchanged.
    pub fn refresh(&self, view: &mut dyn View, handles: &ViewHandles) -> SummaryPanel {
        let state = handles.read_form_state(view);
        let panel = self.compute(&state);

        view.set_region_text(Region::SummaryName, &panel.name);
        view.set_region_text(Region::SummaryLocation, &panel.location);
        for (i, label) in panel.info_labels.iter().take(handles.info_labels).enumerate() {
            view.set_region_text(Region::InfoLabel(i), label);
        }
        view.set_region_text(Region::TotalAmount, &panel.total);

        tracing::debug!("Summary refreshed: total {}", panel.total);
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::view::{Field, MemoryView};

    fn killarney_view() -> MemoryView {
        let mut view = MemoryView::new();
        view.fill(Field::Park, "Killarney")
            .fill(Field::From, "2025-07-01")
            .fill(Field::To, "2025-07-04")
            .fill(Field::Guests, "4")
            .fill(Field::Equipment, "RV");
        view
    }

    #[test]
    fn test_refresh_writes_regions() {
        let mut view = killarney_view();
        let handles = ViewHandles::bind(&view);
        let calculator = SummaryCalculator::new(BookingConfig::default());

        let panel = calculator.refresh(&mut view, &handles);

        assert_eq!(panel.total, "$180.80");
        assert_eq!(view.summary_name(), "Name");
        assert_eq!(view.summary_location(), "Killarney");
        assert_eq!(view.info_labels()[3], "Equipment: RV");
        assert_eq!(view.info_labels()[4], "$160.00");
        assert_eq!(view.total_amount(), "$180.80");
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut view = killarney_view();
        let handles = ViewHandles::bind(&view);
        let calculator = SummaryCalculator::new(BookingConfig::default());

        calculator.refresh(&mut view, &handles);
        let once = view.clone();
        calculator.refresh(&mut view, &handles);
        assert_eq!(view, once);
    }

    #[test]
    fn test_refresh_fills_only_available_label_slots() {
        let mut view = killarney_view().with_info_labels(3);
        let handles = ViewHandles::bind(&view);
        SummaryCalculator::new(BookingConfig::default()).refresh(&mut view, &handles);

        assert_eq!(
            view.info_labels(),
            &["From: Jul 1, 2025", "To: Jul 4, 2025", "Guests: 4"]
        );
    }
}
