//! Per-record decoding of catalog collections.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decodes each record on its own; records that fail are skipped and logged,
/// the rest keep their order.
pub(crate) fn decode_records<T: DeserializeOwned>(collection: &str, items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(collection, index, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}
