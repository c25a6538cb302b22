//! Choosing the bank account or card that receives a wallet balance transfer.

use crate::actions::{bank_accounts, payment_methods};
use crate::bank_icons::{get_bank_icon, BankIcon};
use crate::routes::{NavigationAction, Route};
use crate::store::StateRepository;
use crate::types::{AccountData, BankAccountList, BankAccountRecord, PaymentMethodType, WalletTransferSelection};

/// One row of the account picker
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableRow {
    pub value: Option<u64>,
    pub text: String,
    pub icon: BankIcon,
    pub alternate_text: String,
    pub key_for_list: String,
    pub is_selected: bool,
    pub bank_account: BankAccountRecord,
}

pub fn last_four_digits(account_number: &str) -> String {
    let chars: Vec<char> = account_number.chars().collect();
    chars[chars.len().saturating_sub(4)..].iter().collect()
}

/// Rows for every stored account, in list order. No list means no rows.
pub fn project_transfer_accounts(
    accounts: Option<&BankAccountList>,
    selection: Option<&WalletTransferSelection>,
) -> Vec<SelectableRow> {
    let selected_id = selection.and_then(|s| s.selected_account_id.as_deref());
    let Some(accounts) = accounts else {
        return Vec::new();
    };

    accounts
        .iter()
        .map(|(list_key, bank_account)| {
            let account_data = bank_account.account_data.as_ref();
            let bank_name = account_data.map(AccountData::bank_name).unwrap_or("");
            let account_number = account_data
                .and_then(|data| data.account_number.as_deref())
                .unwrap_or("");
            let account_id = bank_account.account_id();
            let account_key = account_id.map(|id| id.to_string());

            SelectableRow {
                value: account_id,
                text: bank_account.title.clone(),
                icon: get_bank_icon(bank_name),
                alternate_text: format!("Account ending in {}", last_four_digits(account_number)),
                is_selected: account_key.is_some() && account_key.as_deref() == selected_id,
                key_for_list: account_key.unwrap_or_else(|| list_key.to_string()),
                bank_account: bank_account.clone(),
            }
        })
        .collect()
}

pub fn initially_focused_key(selection: Option<&WalletTransferSelection>) -> Option<String> {
    selection.and_then(|s| s.selected_account_id.clone())
}

/// Store the chosen account and head back to the transfer balance page.
///
/// Bank accounts are identified by `bankAccountID`, everything else by
/// `fundID`. An unresolvable id is stored as an empty string.
pub fn select_account_and_navigate_back(
    store: &dyn StateRepository,
    account_type: Option<&PaymentMethodType>,
    account: Option<&AccountData>,
) -> NavigationAction {
    let account_id = match account_type {
        Some(PaymentMethodType::PersonalBankAccount) => account.and_then(|data| data.bank_account_id),
        _ => account.and_then(|data| data.fund_id),
    }
    .map(|id| id.to_string())
    .unwrap_or_default();

    payment_methods::save_wallet_transfer_account_type_and_id(
        store,
        account_type.map(PaymentMethodType::as_str).unwrap_or(""),
        &account_id,
    );
    NavigationAction::GoBack(Route::TransferBalance {})
}

pub fn select_row(store: &dyn StateRepository, row: &SelectableRow) -> NavigationAction {
    select_account_and_navigate_back(
        store,
        row.bank_account.account_type.as_ref(),
        row.bank_account.account_data.as_ref(),
    )
}

pub fn navigate_to_add_payment_method(selection: Option<&WalletTransferSelection>) -> NavigationAction {
    match selection.and_then(|s| s.filter_payment_method_type.as_ref()) {
        Some(PaymentMethodType::DebitCard) => NavigationAction::Navigate(Route::AddDebitCard {}),
        _ => bank_accounts::open_personal_bank_account_setup_view(),
    }
}

pub fn add_payment_method_label(selection: Option<&WalletTransferSelection>) -> &'static str {
    match selection.and_then(|s| s.filter_payment_method_type.as_ref()) {
        Some(PaymentMethodType::PersonalBankAccount) => "Add new bank account",
        _ => "Add new debit card",
    }
}

/// Lets a row selection run once per screen visit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SingleExecution {
    executed: bool,
}

impl SingleExecution {
    /// `true` the first time only
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.executed, true)
    }
}
