use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

pub mod manager;

/// Trait for managing avengers.
#[async_trait]
pub trait Manager {
    /// Find all avengers, ascending by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Avenger>>;
    /// Create a new avenger and return the persisted row.
    ///
    /// The generated key is taken from the insert's statement result, so the
    /// returned row is the one actually stored.
    async fn create(&self, name: &str) -> anyhow::Result<Avenger>;
    /// Delete an avenger by `id`. Succeeds whether or not a row matched.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
/// Model for an Avenger.
pub struct Avenger {
    /// Database-generated identifier, immutable once assigned.
    pub id: i64,
    /// Name of the avenger. No uniqueness or length constraint.
    pub name: String,
}

impl FromRow<'_, AnyRow> for Avenger {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

#[derive(Deserialize, Debug)]
/// Request payload for creating an Avenger.
///
/// Only `name` is read. A caller-supplied `id` (or any other field) is
/// ignored; the database assigns the identifier.
pub struct CreateAvenger {
    /// Name of the avenger to create.
    pub name: String,
}
