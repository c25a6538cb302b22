pub mod choose_account;

pub use choose_account::{
    add_payment_method_label, initially_focused_key, navigate_to_add_payment_method,
    project_transfer_accounts, select_account_and_navigate_back, select_row, SelectableRow,
    SingleExecution,
};
