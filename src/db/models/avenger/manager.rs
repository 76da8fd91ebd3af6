//! Manager for the avenger model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::Avenger;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find all avengers, ascending by id.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self) -> anyhow::Result<Vec<Avenger>> {
        let statement = "
            SELECT id, name
            FROM avenger
            ORDER BY id ASC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Avenger>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Insert a new avenger into the database and return the persisted row.
    ///
    /// # Errors
    /// Errors if the avenger cannot be inserted into the database, or if the
    /// database does not report a generated key.
    async fn create(&self, name: &str) -> anyhow::Result<Avenger> {
        let statement = "
            INSERT INTO avenger ( name )
            VALUES ( $1 )
        ";
        let id = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(name)
                    .execute(&mut *connection)
                    .await?
                    .last_insert_id()
            }
        };
        let id = id.ok_or_else(|| anyhow::anyhow!("insert did not return a generated id"))?;
        Ok(Avenger {
            id,
            name: name.to_owned(),
        })
    }

    /// Delete an avenger by `id`.
    ///
    /// At most one row is removed. Deleting a nonexistent id is not an error.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        let statement = "
            DELETE FROM avenger
            WHERE id = $1
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }
}
