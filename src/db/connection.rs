use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::AppError;
use crate::settings::DatabaseSettings;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn init_pool(settings: &DatabaseSettings) -> Result<PgPool, AppError> {
    let manager = ConnectionManager::<PgConnection>::new(settings.url.as_str());
    let pool = Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(Duration::from_secs(settings.timeout_seconds))
        .build(manager)?;
    Ok(pool)
}

pub fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let conn = &mut pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(AppError::Migration)?;
    for version in applied {
        tracing::info!(%version, "applied migration");
    }
    Ok(())
}
