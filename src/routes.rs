use dioxus::prelude::*;

use crate::components::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::OnboardingWorkEmail {})]
    #[route("/onboarding/work-email")]
    OnboardingWorkEmail {},
    #[route("/onboarding/purpose")]
    OnboardingPurpose {},
    #[route("/onboarding/accounting")]
    OnboardingAccounting {},
    #[route("/settings/wallet/transfer-balance")]
    TransferBalance {},
    #[route("/settings/wallet/choose-transfer-account")]
    ChooseTransferAccount {},
    #[route("/settings/wallet/add-debit-card")]
    AddDebitCard {},
    #[route("/settings/wallet/add-bank-account")]
    PersonalBankSetup {},
}

/// Navigation requested by a handler, applied by the screen that owns the navigator
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    Navigate(Route),
    /// Pop back, or replace with the route when there is no history
    GoBack(Route),
}

impl NavigationAction {
    pub fn apply(self, navigator: Navigator) {
        match self {
            NavigationAction::Navigate(route) => {
                navigator.push(route);
            }
            NavigationAction::GoBack(fallback) => {
                if navigator.can_go_back() {
                    navigator.go_back();
                } else {
                    navigator.replace(fallback);
                }
            }
        }
    }
}
