use std::collections::BTreeMap;

/// Input id of the work email field
pub const WORK_EMAIL: &str = "workEmail";

/// Field id -> error message. Empty means the form is valid.
pub type FormErrors = BTreeMap<String, String>;

pub fn add_error_message(errors: &mut FormErrors, input_id: &str, message: &str) {
    errors.insert(input_id.to_string(), message.to_string());
}
