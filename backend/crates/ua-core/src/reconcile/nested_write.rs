use crate::{ChangeSet, RecordUpdate};

use serde::{Deserialize, Serialize};

/// `{ "id": { "in": [..] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteMany {
    pub id: IdFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdFilter {
    #[serde(rename = "in")]
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereId {
    pub id: i64,
}

/// `{ "where": { "id": .. }, "data": { .. } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedUpdate<T> {
    #[serde(rename = "where")]
    pub target: WhereId,
    pub data: T,
}

/// Wire form of a [`ChangeSet`] for the update endpoint.
///
/// Empty partitions are omitted, so an unchanged collection serializes to
/// `{}` and is dropped entirely by [`crate::UserUpdatePayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedWrite<T> {
    #[serde(rename = "deleteMany", default, skip_serializing_if = "Option::is_none")]
    pub delete_many: Option<DeleteMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<NestedUpdate<T>>>,
}

impl<T> NestedWrite<T> {
    pub fn is_empty(&self) -> bool {
        self.delete_many.is_none() && self.create.is_none() && self.update.is_none()
    }
}

impl<T> From<ChangeSet<T>> for NestedWrite<T> {
    fn from(changes: ChangeSet<T>) -> Self {
        let delete_many = (!changes.delete.is_empty()).then(|| DeleteMany {
            id: IdFilter {
                ids: changes.delete,
            },
        });
        let create = (!changes.create.is_empty()).then_some(changes.create);
        let update = (!changes.update.is_empty()).then(|| {
            changes
                .update
                .into_iter()
                .map(|u| NestedUpdate {
                    target: WhereId { id: u.id },
                    data: u.data,
                })
                .collect()
        });

        Self {
            delete_many,
            create,
            update,
        }
    }
}

impl<T> From<NestedWrite<T>> for ChangeSet<T> {
    fn from(write: NestedWrite<T>) -> Self {
        Self {
            delete: write.delete_many.map(|d| d.id.ids).unwrap_or_default(),
            create: write.create.unwrap_or_default(),
            update: write
                .update
                .unwrap_or_default()
                .into_iter()
                .map(|u| RecordUpdate {
                    id: u.target.id,
                    data: u.data,
                })
                .collect(),
        }
    }
}
