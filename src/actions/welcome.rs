use serde_json::Value;

use crate::store::{set_as, StateRepository, StoreKey};

pub fn set_onboarding_work_email(store: &dyn StateRepository, work_email: &str) {
    log::info!("🔄 Saving onboarding work email");
    if let Err(e) = set_as(store, StoreKey::OnboardingWorkEmail, work_email) {
        log::error!("❌ Failed to save onboarding work email: {}", e);
    }
}

/// Empty message clears the stored error
pub fn set_onboarding_error_message(store: &dyn StateRepository, message: &str) {
    let value = if message.is_empty() { Value::Null } else { Value::String(message.to_string()) };
    if let Err(e) = store.set(StoreKey::OnboardingErrorMessage, value) {
        log::error!("❌ Failed to save onboarding error message: {}", e);
    }
}

pub fn set_onboarding_purpose_selected(store: &dyn StateRepository, purpose: &str) {
    if let Err(e) = set_as(store, StoreKey::OnboardingPurposeSelected, purpose) {
        log::error!("❌ Failed to save onboarding purpose: {}", e);
    }
}
