pub mod choose_transfer_account;
pub mod header;
pub mod onboarding_steps;
pub mod onboarding_work_email;
pub mod wallet_pages;

pub use choose_transfer_account::ChooseTransferAccount;
pub use header::HeaderWithBackButton;
pub use onboarding_steps::{OnboardingAccounting, OnboardingPurpose};
pub use onboarding_work_email::OnboardingWorkEmail;
pub use wallet_pages::{AddDebitCard, PersonalBankSetup, TransferBalance};
