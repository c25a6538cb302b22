use dioxus::prelude::*;

use crate::components::header::HeaderWithBackButton;
use crate::hooks::use_store_value;
use crate::routes::{NavigationAction, Route};
use crate::store::StoreKey;
use crate::types::{BankAccountList, WalletTransferSelection};
use crate::wallet_transfer::project_transfer_accounts;

#[component]
pub fn TransferBalance() -> Element {
    let bank_accounts = use_store_value::<BankAccountList>(StoreKey::BankAccountList);
    let wallet_transfer = use_store_value::<WalletTransferSelection>(StoreKey::WalletTransfer);

    let selected = use_memo(move || {
        project_transfer_accounts(bank_accounts.read().as_ref(), wallet_transfer.read().as_ref())
            .into_iter()
            .find(|row| row.is_selected)
    });

    rsx! {
        div {
            class: "screen transfer-balance",

            HeaderWithBackButton { title: Some("Transfer balance".to_string()) }

            div {
                class: "wallet-field",
                label { "Transfer to" }
                match selected() {
                    Some(row) => rsx! {
                        div {
                            class: "selection-row selected",
                            span { class: "selection-row-title", "{row.text}" }
                            span { class: "selection-row-subtitle", "{row.alternate_text}" }
                        }
                    },
                    None => rsx! {
                        div { class: "help-text", "No account selected" }
                    },
                }
            }

            button {
                class: "modal-button primary",
                onclick: move |_| NavigationAction::Navigate(Route::ChooseTransferAccount {}).apply(navigator()),
                "Choose account"
            }
        }
    }
}

#[component]
pub fn AddDebitCard() -> Element {
    let on_back = EventHandler::new(move |_| NavigationAction::GoBack(Route::ChooseTransferAccount {}).apply(navigator()));

    rsx! {
        div {
            class: "screen add-debit-card",
            HeaderWithBackButton { title: Some("Add a debit card".to_string()), on_back: Some(on_back) }
            p { class: "help-text", "Add a debit card to receive transfers instantly." }
        }
    }
}

#[component]
pub fn PersonalBankSetup() -> Element {
    let on_back = EventHandler::new(move |_| NavigationAction::GoBack(Route::ChooseTransferAccount {}).apply(navigator()));

    rsx! {
        div {
            class: "screen personal-bank-setup",
            HeaderWithBackButton { title: Some("Add bank account".to_string()), on_back: Some(on_back) }
            p { class: "help-text", "Connect a personal bank account to receive transfers." }
        }
    }
}
