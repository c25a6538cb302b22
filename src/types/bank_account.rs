use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Payment method kinds a transfer can target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethodType {
    #[serde(rename = "bankAccount")]
    PersonalBankAccount,
    #[serde(rename = "debitCard")]
    DebitCard,
    #[serde(rename = "businessBankAccount")]
    BusinessBankAccount,
    #[serde(untagged)]
    Other(String),
}

impl PaymentMethodType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethodType::PersonalBankAccount => "bankAccount",
            PaymentMethodType::DebitCard => "debitCard",
            PaymentMethodType::BusinessBankAccount => "businessBankAccount",
            PaymentMethodType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

/// Ids arrive as numbers or numeric strings; anything else reads as absent
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    #[serde(
        rename = "bankAccountID",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(rename = "fundID", default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub fund_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<AdditionalData>,
}

impl AccountData {
    pub fn bank_name(&self) -> &str {
        self.additional_data
            .as_ref()
            .and_then(|data| data.bank_name.as_deref())
            .unwrap_or("")
    }
}

/// A stored payment method, keyed by `method_id` in the bank account list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRecord {
    #[serde(rename = "methodID", default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub method_id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PaymentMethodType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_data: Option<AccountData>,
}

impl BankAccountRecord {
    /// `bankAccountID` when the record carries one, otherwise the method id
    pub fn account_id(&self) -> Option<u64> {
        self.account_data
            .as_ref()
            .and_then(|data| data.bank_account_id)
            .or(self.method_id)
    }
}

/// Bank accounts and cards keyed by method id.
///
/// Entries are parsed one at a time so a malformed record drops only itself.
/// Iteration follows object key order: integer keys ascending by value, then
/// the remaining keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankAccountList {
    entries: Vec<(String, BankAccountRecord)>,
}

/// Keys that enumerate as array indices: canonical integers below 2^32 - 1
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl BankAccountList {
    pub fn from_map(raw: Map<String, Value>) -> Self {
        let mut entries: Vec<(String, BankAccountRecord)> = raw
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<BankAccountRecord>(value) {
                Ok(record) => Some((key, record)),
                Err(e) => {
                    log::warn!("⚠️ Skipping bank account {}: {}", key, e);
                    None
                }
            })
            .collect();
        entries.sort_by_key(|(key, _)| match array_index(key) {
            Some(index) => (0, index),
            None => (1, 0),
        });
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BankAccountRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for BankAccountList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_map(Map::deserialize(deserializer)?))
    }
}
