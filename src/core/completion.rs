//! Read-only list of the distinct values of one field, used to offer
//! completions for Author and Source.

use crate::core::store::ExerciseStore;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::field::Field;

#[derive(Debug, Clone)]
pub struct DistinctValues {
    values: Vec<String>,
}

impl DistinctValues {
    /// Snapshot the distinct non-empty values of `field`, sorted ascending.
    pub fn load(store: &ExerciseStore, field: Field) -> AppResult<Self> {
        let values = queries::distinct_values(store.conn(), field)?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values starting with `prefix` (case-insensitive), in sorted order.
    pub fn matching(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.values
            .iter()
            .filter(|v| v.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }
}
