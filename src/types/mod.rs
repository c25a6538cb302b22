pub mod bank_account;
pub mod form;
pub mod onboarding;
pub mod wallet_transfer;

pub use bank_account::{AccountData, AdditionalData, BankAccountList, BankAccountRecord, PaymentMethodType};
pub use form::{FormErrors, WORK_EMAIL};
pub use onboarding::{OnboardingNvp, OnboardingPurpose, SignupQualifier};
pub use wallet_transfer::WalletTransferSelection;
