use serde::Serialize;

/// Replacement data for one persisted record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordUpdate<T> {
    pub id: i64,
    pub data: T,
}

/// Delete, create and update partitions for one child collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSet<T> {
    pub delete: Vec<i64>,
    pub create: Vec<T>,
    pub update: Vec<RecordUpdate<T>>,
}

impl<T> Default for ChangeSet<T> {
    fn default() -> Self {
        Self {
            delete: Vec::new(),
            create: Vec::new(),
            update: Vec::new(),
        }
    }
}

impl<T> ChangeSet<T> {
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.create.is_empty() && self.update.is_empty()
    }

    /// `(delete, create, update)` counts, for logging.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.delete.len(), self.create.len(), self.update.len())
    }

    /// Ids touched by the update partition.
    pub fn updated_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.update.iter().map(|u| u.id)
    }
}
