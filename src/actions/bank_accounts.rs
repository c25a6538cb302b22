use serde_json::json;

use crate::routes::{NavigationAction, Route};
use crate::store::{StateRepository, StoreKey};

pub fn open_personal_bank_account_setup_view() -> NavigationAction {
    NavigationAction::Navigate(Route::PersonalBankSetup {})
}

/// Sample accounts for an empty store
pub fn seed_demo_bank_accounts(store: &dyn StateRepository) {
    if store.get(StoreKey::BankAccountList).is_some() {
        return;
    }
    log::info!("🔄 Seeding demo bank accounts");
    let accounts = json!({
        "101": {
            "methodID": 101,
            "title": "Chase Checking",
            "accountType": "bankAccount",
            "accountData": {
                "bankAccountID": 9001,
                "accountNumber": "XXXXXXXX4321",
                "additionalData": {"bankName": "chase"}
            }
        },
        "102": {
            "methodID": 102,
            "title": "Wells Fargo Savings",
            "accountType": "bankAccount",
            "accountData": {
                "bankAccountID": 9002,
                "accountNumber": "XXXXXXXX8765",
                "additionalData": {"bankName": "wells fargo"}
            }
        },
        "103": {
            "methodID": 103,
            "title": "Visa Debit",
            "accountType": "debitCard",
            "accountData": {
                "fundID": 7003,
                "accountNumber": "XXXXXXXXXXXX1111",
                "additionalData": {"bankName": "capital one"}
            }
        }
    });
    if let Err(e) = store.set(StoreKey::BankAccountList, accounts) {
        log::error!("❌ Failed to seed bank accounts: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{get_as, MemoryStore};
    use crate::types::BankAccountList;

    #[test]
    fn test_seed_only_fills_empty_store() {
        let store = MemoryStore::new();
        seed_demo_bank_accounts(&store);
        let list: BankAccountList = get_as(&store, StoreKey::BankAccountList).unwrap();
        assert_eq!(list.len(), 3);

        store.set(StoreKey::BankAccountList, json!({})).unwrap();
        seed_demo_bank_accounts(&store);
        let list: BankAccountList = get_as(&store, StoreKey::BankAccountList).unwrap();
        assert!(list.is_empty());
    }
}
