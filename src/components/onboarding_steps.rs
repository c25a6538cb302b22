use dioxus::prelude::*;

use crate::actions::welcome;
use crate::components::header::HeaderWithBackButton;
use crate::hooks::use_store_value;
use crate::routes::{NavigationAction, Route};
use crate::store::{AppStore, StoreKey};
use crate::types::OnboardingPurpose as Purpose;

#[component]
pub fn OnboardingPurpose() -> Element {
    let store = use_context::<AppStore>();
    let selected = use_store_value::<Purpose>(StoreKey::OnboardingPurposeSelected);

    let on_back = EventHandler::new(move |_| NavigationAction::GoBack(Route::OnboardingWorkEmail {}).apply(navigator()));

    rsx! {
        div {
            class: "onboarding-overlay",
            div {
                class: "onboarding-container",
                HeaderWithBackButton { on_back: Some(on_back) }

                h1 { class: "onboarding-title", "What do you want to do today?" }

                div {
                    class: "selection-list",
                    for purpose in Purpose::all() {
                        button {
                            key: "{purpose.as_str()}",
                            class: if selected() == Some(purpose) { "selection-row selected" } else { "selection-row" },
                            onclick: {
                                let store = store.clone();
                                move |_| welcome::set_onboarding_purpose_selected(&*store, purpose.as_str())
                            },
                            "{purpose.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OnboardingAccounting() -> Element {
    let on_back = EventHandler::new(move |_| NavigationAction::GoBack(Route::OnboardingWorkEmail {}).apply(navigator()));

    rsx! {
        div {
            class: "onboarding-overlay",
            div {
                class: "onboarding-container",
                HeaderWithBackButton { on_back: Some(on_back) }
                h1 { class: "onboarding-title", "Do you use any accounting software?" }
                p {
                    class: "onboarding-description",
                    "We'll set up your workspace to export to it."
                }
            }
        }
    }
}
