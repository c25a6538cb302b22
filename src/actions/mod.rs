//! Writes to shared state on behalf of the screens.
//!
//! Every action logs and swallows store failures; the screens treat state
//! writes as always succeeding.

pub mod bank_accounts;
pub mod form;
pub mod payment_methods;
pub mod welcome;
