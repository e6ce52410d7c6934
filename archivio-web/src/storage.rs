//! Device-local persistence of declared aid attribute values.
//!
//! Keyed by the event time window so values from one live event never leak
//! into the next. Entries for past windows are left in place; there is no
//! eviction.

use archivio_core::aid::DeclaredValues;

fn values_key(window_key: &str) -> String {
    format!("archivio.aid-values.{window_key}")
}

#[must_use]
pub fn load_declared_values(window_key: &str) -> DeclaredValues {
    let Ok(storage) = crate::dom::local_storage() else {
        return DeclaredValues::new();
    };
    let Ok(Some(raw)) = storage.get_item(&values_key(window_key)) else {
        return DeclaredValues::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("discarding corrupt stored aid values: {e}");
        DeclaredValues::new()
    })
}

pub fn store_declared_values(window_key: &str, values: &DeclaredValues) {
    let Ok(storage) = crate::dom::local_storage() else {
        return;
    };
    match serde_json::to_string(values) {
        Ok(json) => {
            if storage.set_item(&values_key(window_key), &json).is_err() {
                log::warn!("failed to persist aid values");
            }
        }
        Err(e) => log::warn!("failed to encode aid values: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::values_key;

    #[test]
    fn key_is_namespaced_by_window() {
        assert_eq!(
            values_key("2025-06-14T18:00|2025-06-15T02:00"),
            "archivio.aid-values.2025-06-14T18:00|2025-06-15T02:00"
        );
        assert_ne!(values_key("a|b"), values_key("a|c"));
    }
}
