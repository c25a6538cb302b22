// src/components/choose_transfer_account.rs
use dioxus::prelude::*;

use crate::components::header::HeaderWithBackButton;
use crate::hooks::use_store_value;
use crate::routes::{NavigationAction, Route};
use crate::store::{AppStore, StoreKey};
use crate::types::{BankAccountList, WalletTransferSelection};
use crate::wallet_transfer::{
    add_payment_method_label, initially_focused_key, navigate_to_add_payment_method,
    project_transfer_accounts, select_row, SelectableRow, SingleExecution,
};

#[component]
fn TransferAccountRow(row: SelectableRow, focused: bool, on_select: EventHandler<SelectableRow>) -> Element {
    let row_class = if row.is_selected { "selection-row selected" } else { "selection-row" };
    let icon_size = row.icon.size;
    let selected_row = row.clone();

    rsx! {
        button {
            class: "{row_class}",
            role: "radio",
            aria_checked: "{row.is_selected}",
            autofocus: focused,
            onclick: move |_| on_select.call(selected_row.clone()),

            span {
                class: "{row.icon.class_name()}",
                style: "width: {icon_size}px; height: {icon_size}px;",
                aria_hidden: "true",
                "{row.icon.glyph}"
            }
            div {
                class: "selection-row-text",
                span { class: "selection-row-title", "{row.text}" }
                span { class: "selection-row-subtitle", "{row.alternate_text}" }
            }
            if row.is_selected {
                span { class: "selection-row-check", "✓" }
            }
        }
    }
}

#[component]
pub fn ChooseTransferAccount() -> Element {
    let store = use_context::<AppStore>();
    let bank_accounts = use_store_value::<BankAccountList>(StoreKey::BankAccountList);
    let wallet_transfer = use_store_value::<WalletTransferSelection>(StoreKey::WalletTransfer);
    let mut row_guard = use_signal(SingleExecution::default);

    let rows = use_memo(move || {
        project_transfer_accounts(bank_accounts.read().as_ref(), wallet_transfer.read().as_ref())
    });
    let focused_key = initially_focused_key(wallet_transfer.read().as_ref());
    let add_label = add_payment_method_label(wallet_transfer.read().as_ref());

    let on_select = EventHandler::new({
        let store = store.clone();
        move |row: SelectableRow| {
            if !row_guard.write().try_begin() {
                log::debug!("Ignoring repeated selection of {}", row.key_for_list);
                return;
            }
            select_row(&*store, &row).apply(navigator());
        }
    });

    let on_back = EventHandler::new(move |_| NavigationAction::GoBack(Route::TransferBalance {}).apply(navigator()));

    let on_add = move |_| navigate_to_add_payment_method(wallet_transfer.read().as_ref()).apply(navigator());

    rsx! {
        div {
            class: "screen choose-transfer-account",

            HeaderWithBackButton {
                title: Some("Choose account".to_string()),
                on_back: Some(on_back),
            }

            div {
                class: "selection-list",
                role: "radiogroup",
                for row in rows() {
                    TransferAccountRow {
                        key: "{row.key_for_list}",
                        focused: focused_key.as_deref() == Some(row.key_for_list.as_str()),
                        row: row.clone(),
                        on_select: on_select,
                    }
                }
            }

            button {
                class: "menu-item",
                onclick: on_add,
                span { class: "menu-item-icon", "+" }
                span { class: "menu-item-title", "{add_label}" }
            }
        }
    }
}
