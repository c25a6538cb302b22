//! Work email step of the onboarding wizard.
//!
//! An address is accepted when it is syntactically valid and its domain is
//! not a free/consumer mail provider.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::actions::{form, welcome};
use crate::routes::Route;
use crate::store::{get_as, StateRepository, StoreKey};
use crate::types::form::add_error_message;
use crate::types::{FormErrors, OnboardingNvp, WORK_EMAIL};

pub const WORK_EMAIL_ERROR: &str = "Please enter a valid work email from a private domain e.g. mitch@company.com";

/// Input length cap for the work email field
pub const WORK_EMAIL_MAX_LENGTH: usize = 50;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Domain labels are two or more alphanumerics with single inner hyphens
    Regex::new(r"(?i)^[a-z0-9_'#%+-]+(?:\.[a-z0-9_'#%+-]+)*@(?:(?:[a-z0-9]+-?)+[a-z0-9]\.)+[a-z0-9]{2,63}$")
        .expect("email regex is valid")
});

static PUBLIC_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aol.com", "att.net", "bellsouth.net", "bigpond.com", "btinternet.com", "charter.net",
        "comcast.net", "cox.net", "earthlink.net", "email.com", "fastmail.com", "fastmail.fm",
        "free.fr", "freenet.de", "gmail.com", "gmx.com", "gmx.de", "gmx.net", "googlemail.com",
        "hey.com", "hotmail.co.uk", "hotmail.com", "hotmail.de", "hotmail.fr", "hotmail.it",
        "hushmail.com", "icloud.com", "inbox.com", "juno.com", "laposte.net", "libero.it",
        "live.ca", "live.co.uk", "live.com", "live.fr", "mac.com", "mail.com", "mail.ru",
        "me.com", "msn.com", "naver.com", "netzero.net", "optonline.net", "orange.fr",
        "outlook.com", "outlook.de", "outlook.fr", "proton.me", "protonmail.ch", "protonmail.com",
        "qq.com", "rediffmail.com", "rocketmail.com", "rogers.com", "sbcglobal.net", "shaw.ca",
        "sky.com", "sympatico.ca", "t-online.de", "telus.net", "tutanota.com", "verizon.net",
        "virginmedia.com", "wanadoo.fr", "web.de", "yahoo.ca", "yahoo.co.in", "yahoo.co.jp",
        "yahoo.co.uk", "yahoo.com", "yahoo.com.au", "yahoo.com.br", "yahoo.de", "yahoo.es",
        "yahoo.fr", "yahoo.in", "yahoo.it", "yandex.com", "yandex.ru", "ymail.com", "zoho.com",
    ]
    .into_iter()
    .collect()
});

/// Text between the first `@` and the next one, empty without an `@`
pub fn email_domain(input: &str) -> &str {
    input.split('@').nth(1).unwrap_or("")
}

pub fn is_public_domain(domain: &str) -> bool {
    PUBLIC_DOMAINS.contains(domain.to_lowercase().as_str())
}

pub fn is_valid_email(input: &str) -> bool {
    if input.len() < 3 || input.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(input) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    local.len() <= MAX_LOCAL_PART_LENGTH
        && domain.split('.').all(|label| label.len() <= MAX_DOMAIN_LABEL_LENGTH)
}

pub fn validate_work_email(input: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    if is_public_domain(email_domain(input)) || !is_valid_email(input) {
        add_error_message(&mut errors, WORK_EMAIL, WORK_EMAIL_ERROR);
    }
    errors
}

/// Form state for the work email step.
///
/// Validation first runs on submit; from then on every edit re-validates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkEmailForm {
    value: String,
    errors: FormErrors,
    validate_on_change: bool,
}

impl WorkEmailForm {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Starts from the saved draft, if any
    pub fn from_draft(store: &dyn StateRepository) -> Self {
        Self::new(form::work_email_draft(store).unwrap_or_default())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn field_error(&self) -> Option<&str> {
        self.errors.get(WORK_EMAIL).map(String::as_str)
    }

    pub fn validates_on_change(&self) -> bool {
        self.validate_on_change
    }

    pub fn validate(&mut self) -> bool {
        self.validate_on_change = true;
        self.errors = validate_work_email(&self.value);
        self.errors.is_empty()
    }

    /// Values are kept untrimmed
    pub fn update(&mut self, store: &dyn StateRepository, value: String) {
        self.value = value;
        form::set_work_email_draft(store, &self.value);
        if self.validate_on_change {
            self.validate();
        }
    }

    /// Validates, then hands a valid email to the onboarding state
    pub fn submit(&mut self, store: &dyn StateRepository) -> bool {
        if !self.validate() {
            log::debug!("Work email rejected");
            return false;
        }
        welcome::set_onboarding_work_email(store, &self.value);
        true
    }
}

/// Where "Skip this for now" leads
pub fn skip_destination(store: &dyn StateRepository) -> Route {
    let onboarding: Option<OnboardingNvp> = get_as(store, StoreKey::NvpOnboarding);
    if onboarding.map_or(false, |nvp| nvp.is_vsb()) {
        Route::OnboardingAccounting {}
    } else {
        Route::OnboardingPurpose {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("mitch@gmail.com")]
    #[case("mitch@GMAIL.COM")]
    #[case("someone@Yahoo.com")]
    #[case("first.last@outlook.com")]
    #[case("x@icloud.com")]
    fn test_public_domains_are_rejected(#[case] email: &str) {
        let errors = validate_work_email(email);
        assert_eq!(errors.get(WORK_EMAIL).map(String::as_str), Some(WORK_EMAIL_ERROR));
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("a@")]
    #[case("")]
    #[case("@company.com")]
    #[case("mitch@company")]
    #[case("mitch@@company.com")]
    #[case(" mitch@company.com")]
    #[case("mitch@company.com ")]
    #[case("mitch@-company.com")]
    #[case("mitch@company-.com")]
    #[case("a@x.com")]
    #[case("mitch@my--company.com")]
    #[case("mitch@company.c")]
    fn test_invalid_syntax_is_rejected(#[case] email: &str) {
        assert!(!validate_work_email(email).is_empty());
    }

    #[rstest]
    #[case("mitch@company.com")]
    #[case("Mitch.O'Brien+expenses@Sub.Company.co.uk")]
    #[case("ops-team@my-company.io")]
    #[case("finance@acme-co-op.org")]
    #[case("mitch@company.web3")]
    fn test_private_domains_are_accepted(#[case] email: &str) {
        assert!(validate_work_email(email).is_empty());
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("a@b.com"), "b.com");
        assert_eq!(email_domain("a@b.com@c.com"), "b.com");
        assert_eq!(email_domain("no-at-sign"), "");
    }

    #[test]
    fn test_overlong_local_part_is_rejected() {
        let email = format!("{}@company.com", "a".repeat(65));
        assert!(!is_valid_email(&email));
        let email = format!("{}@company.com", "a".repeat(64));
        assert!(is_valid_email(&email));
    }

    #[test]
    fn test_validate_on_change_latch() {
        let store = MemoryStore::new();
        let mut form = WorkEmailForm::new("");
        assert!(!form.validates_on_change());

        // Edits before the first validation don't produce errors
        form.update(&store, "nope".to_string());
        assert!(form.errors().is_empty());

        assert!(!form.validate());
        assert!(form.validates_on_change());
        assert_eq!(form.field_error(), Some(WORK_EMAIL_ERROR));

        form.update(&store, "mitch@company.com".to_string());
        assert!(form.errors().is_empty());
        assert!(form.validates_on_change());

        form.update(&store, "mitch@gmail.com".to_string());
        assert_eq!(form.field_error(), Some(WORK_EMAIL_ERROR));
    }

    #[test]
    fn test_submit_stores_valid_email_only() {
        let store = MemoryStore::new();
        let mut form = WorkEmailForm::new("mitch@hotmail.com");
        assert!(!form.submit(&store));
        assert!(store.get(StoreKey::OnboardingWorkEmail).is_none());

        form.update(&store, "mitch@company.com".to_string());
        assert!(form.submit(&store));
        assert_eq!(store.get(StoreKey::OnboardingWorkEmail), Some(json!("mitch@company.com")));
    }

    #[test]
    fn test_draft_is_restored() {
        let store = MemoryStore::new();
        let mut form = WorkEmailForm::from_draft(&store);
        assert_eq!(form.value(), "");

        form.update(&store, "mitch@comp".to_string());
        assert_eq!(WorkEmailForm::from_draft(&store).value(), "mitch@comp");
    }

    #[test]
    fn test_skip_routes_vsb_to_accounting() {
        let store = MemoryStore::new();
        store.set(StoreKey::NvpOnboarding, json!({"signupQualifier": "vsb"})).unwrap();
        assert_eq!(skip_destination(&store), Route::OnboardingAccounting {});
    }

    #[test]
    fn test_skip_routes_everyone_else_to_purpose() {
        let store = MemoryStore::new();
        assert_eq!(skip_destination(&store), Route::OnboardingPurpose {});

        store.set(StoreKey::NvpOnboarding, json!({"signupQualifier": "individual"})).unwrap();
        assert_eq!(skip_destination(&store), Route::OnboardingPurpose {});

        store.set(StoreKey::NvpOnboarding, json!({})).unwrap();
        assert_eq!(skip_destination(&store), Route::OnboardingPurpose {});
    }
}
