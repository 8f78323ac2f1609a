use diesel::pg::PgConnection;
use diesel::Connection;

use crate::db::connection::PgPool;
use crate::db::repository::{AdminDao, PgAdminDao};
use crate::error::AppError;

/// Hands out DAOs scoped to one transaction per unit of work.
pub trait AdminStore: Send + Sync + 'static {
    /// Commits when `work` returns `Ok`, rolls back otherwise.
    fn transaction<R, F>(&self, work: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut dyn AdminDao) -> Result<R, AppError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdminStore for PgStore {
    fn transaction<R, F>(&self, work: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut dyn AdminDao) -> Result<R, AppError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;
        conn.transaction(|conn| work(&mut PgAdminDao::new(conn)))
    }
}
