use serde_json::json;

use crate::store::{StateRepository, StoreKey};

/// Record the destination of the next wallet transfer
pub fn save_wallet_transfer_account_type_and_id(store: &dyn StateRepository, account_type: &str, account_id: &str) {
    log::info!("🔄 Saving transfer account {} ({})", account_id, account_type);
    let changes = json!({
        "selectedAccountType": account_type,
        "selectedAccountID": account_id,
    });
    if let Err(e) = store.merge(StoreKey::WalletTransfer, changes) {
        log::error!("❌ Failed to save wallet transfer account: {}", e);
    }
}
