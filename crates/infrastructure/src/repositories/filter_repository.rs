use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};
use webfilter_application::ports::FilterRepository;
use webfilter_domain::{DomainError, Filter};

type FilterRow = (i64, String, String);

pub struct SqliteFilterRepository {
    pool: SqlitePool,
}

impl SqliteFilterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_filter(row: FilterRow) -> Filter {
        let (id, text, created_at) = row;
        Filter {
            id: Some(id),
            text: Arc::from(text.as_str()),
            created_at: Some(created_at),
        }
    }
}

#[async_trait]
impl FilterRepository for SqliteFilterRepository {
    #[instrument(skip(self))]
    async fn insert(&self, text: String) -> Result<Filter, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query("INSERT INTO filters (text, created_at) VALUES (?, ?)")
            .bind(&text)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("UNIQUE constraint failed") {
                    DomainError::DuplicateFilter(text.clone())
                } else {
                    error!(error = %e, "Failed to insert filter");
                    DomainError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id).await?.ok_or_else(|| {
            DomainError::DatabaseError("Failed to fetch created filter".to_string())
        })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Filter>, DomainError> {
        let row = sqlx::query_as::<_, FilterRow>(
            "SELECT id, text, created_at FROM filters WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query filter by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_filter))
    }

    /// Ascending id keeps list order equal to insertion order across
    /// restarts; `FilterStore::matches` relies on it for first-match
    /// tie-breaking.
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Filter>, DomainError> {
        let rows = sqlx::query_as::<_, FilterRow>(
            "SELECT id, text, created_at FROM filters ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all filters");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_filter).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM filters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete filter");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FilterNotFound(id));
        }

        Ok(())
    }
}
