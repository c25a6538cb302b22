use serde_json::{Map, Value};

use crate::store::{get_as, StateRepository, StoreKey};
use crate::types::WORK_EMAIL;

/// Draft value of the work email form, if one was saved
pub fn work_email_draft(store: &dyn StateRepository) -> Option<String> {
    let draft: Map<String, Value> = get_as(store, StoreKey::OnboardingWorkEmailFormDraft)?;
    draft.get(WORK_EMAIL).and_then(|value| value.as_str()).map(str::to_string)
}

pub fn set_work_email_draft(store: &dyn StateRepository, value: &str) {
    let mut draft = Map::new();
    draft.insert(WORK_EMAIL.to_string(), Value::String(value.to_string()));
    if let Err(e) = store.merge(StoreKey::OnboardingWorkEmailFormDraft, Value::Object(draft)) {
        log::error!("❌ Failed to save work email draft: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_draft_round_trip() {
        let store = MemoryStore::new();
        assert!(work_email_draft(&store).is_none());

        set_work_email_draft(&store, "mitch@");
        assert_eq!(work_email_draft(&store).as_deref(), Some("mitch@"));
    }
}
