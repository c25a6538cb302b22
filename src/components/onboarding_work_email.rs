// src/components/onboarding_work_email.rs
use dioxus::prelude::*;

use crate::actions::welcome;
use crate::components::header::HeaderWithBackButton;
use crate::onboarding::work_email::{skip_destination, WorkEmailForm, WORK_EMAIL_MAX_LENGTH};
use crate::routes::NavigationAction;
use crate::store::AppStore;

const EXPLANATION_ITEMS: [(&str, &str); 3] = [
    ("📨", "Forward receipts straight from your work inbox"),
    ("👥", "Find colleagues who already submit expenses here"),
    ("⚙️", "Connect company cards and accounting in a few taps"),
];

#[component]
pub fn OnboardingWorkEmail() -> Element {
    let store = use_context::<AppStore>();
    let mut form = use_signal(|| WorkEmailForm::from_draft(&*store));
    let mut submitted = use_signal(|| false);

    use_hook({
        let store = store.clone();
        move || welcome::set_onboarding_error_message(&*store, "")
    });

    let on_input = {
        let store = store.clone();
        move |e: FormEvent| {
            submitted.set(false);
            form.write().update(&*store, e.value());
        }
    };

    let on_submit = {
        let store = store.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let accepted = form.write().submit(&*store);
            submitted.set(accepted);
        }
    };

    let on_skip = {
        let store = store.clone();
        move |_| NavigationAction::Navigate(skip_destination(&*store)).apply(navigator())
    };

    let value = form.read().value().to_string();
    let field_error = form.read().field_error().map(str::to_string);

    rsx! {
        div {
            class: "onboarding-overlay",

            div {
                class: "onboarding-container",

                HeaderWithBackButton { progress: Some(1.0) }

                form {
                    class: "onboarding-step work-email-form",
                    onsubmit: on_submit,

                    h1 { class: "onboarding-title", "What's your work email?" }
                    p {
                        class: "onboarding-description",
                        "Expenses work best when you connect your work email."
                    }

                    div {
                        class: "onboarding-items",
                        for (icon, text) in EXPLANATION_ITEMS {
                            div {
                                key: "{text}",
                                class: "onboarding-item",
                                span { class: "onboarding-item-icon", "{icon}" }
                                span { class: "onboarding-item-text", "{text}" }
                            }
                        }
                    }

                    div {
                        class: "wallet-field",
                        label { r#for: "work-email", "Work email" }
                        input {
                            id: "work-email",
                            name: "workEmail",
                            r#type: "email",
                            aria_label: "Work email",
                            spellcheck: "false",
                            maxlength: "{WORK_EMAIL_MAX_LENGTH}",
                            value: "{value}",
                            oninput: on_input,
                        }
                        if let Some(error) = field_error {
                            div { class: "error-message", "{error}" }
                        }
                        if submitted() {
                            div { class: "info-message", "Work email saved" }
                        }
                    }

                    div {
                        class: "onboarding-buttons",
                        button {
                            class: "onboarding-button secondary",
                            r#type: "button",
                            onclick: on_skip,
                            "Skip this for now"
                        }
                        button {
                            class: "onboarding-button primary",
                            r#type: "submit",
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}
