//! Payment method tabs.
//!
//! Single-select and presentational only: the chosen tab never affects
//! pricing or step validity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::view::{View, ViewHandles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "paypal")]
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Activate `method` and deactivate every other bound tab.
///
/// Returns `false` when the view has no such tab; nothing changes then.
pub fn select_payment_tab(view: &mut dyn View, handles: &ViewHandles, method: PaymentMethod) -> bool {
    if !handles.payment_tabs.contains(&method) {
        tracing::warn!("Payment tab not present in view: {}", method);
        return false;
    }
    for tab in &handles.payment_tabs {
        view.set_payment_tab_active(*tab, false);
    }
    view.set_payment_tab_active(method, true);
    tracing::debug!("Payment tab selected: {}", method);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::view::MemoryView;

    #[test]
    fn test_tabs_are_mutually_exclusive() {
        let mut view = MemoryView::new();
        let handles = ViewHandles::bind(&view);
        assert_eq!(view.active_payment_tabs(), vec![PaymentMethod::Card]);

        assert!(select_payment_tab(&mut view, &handles, PaymentMethod::PayPal));
        assert_eq!(view.active_payment_tabs(), vec![PaymentMethod::PayPal]);

        assert!(select_payment_tab(&mut view, &handles, PaymentMethod::BankTransfer));
        assert_eq!(view.active_payment_tabs(), vec![PaymentMethod::BankTransfer]);
    }

    #[test]
    fn test_unknown_tab_leaves_selection() {
        let mut view = MemoryView::new();
        let handles = ViewHandles {
            payment_tabs: vec![PaymentMethod::Card],
            ..ViewHandles::bind(&view)
        };

        assert!(!select_payment_tab(&mut view, &handles, PaymentMethod::PayPal));
        assert_eq!(view.active_payment_tabs(), vec![PaymentMethod::Card]);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::PayPal).unwrap(), "\"paypal\"");
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"bank_transfer\"").unwrap(),
            PaymentMethod::BankTransfer
        );
    }
}
