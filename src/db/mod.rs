pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use connection::{init_pool, run_migrations, PgPool};
pub use repository::{AccountDao, AdminDao, OrderDao, PgAdminDao, ProductDao};
pub use store::{AdminStore, PgStore};
