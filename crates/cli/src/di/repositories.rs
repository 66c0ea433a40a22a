use sqlx::SqlitePool;
use std::sync::Arc;
use webfilter_infrastructure::repositories::SqliteFilterRepository;

pub struct Repositories {
    pub filter: Arc<SqliteFilterRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            filter: Arc::new(SqliteFilterRepository::new(pool)),
        }
    }
}
