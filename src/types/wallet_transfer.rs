use serde::{Deserialize, Serialize};

use super::PaymentMethodType;

/// Destination chosen for a wallet balance transfer (`walletTransfer`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransferSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_account_type: Option<String>,
    #[serde(rename = "selectedAccountID", default, skip_serializing_if = "Option::is_none")]
    pub selected_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_payment_method_type: Option<PaymentMethodType>,
}
