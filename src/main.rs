use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use retail_admin::db::{self, PgStore};
use retail_admin::routes;
use retail_admin::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load().map_err(std::io::Error::other)?;
    let pool = db::init_pool(&settings.database).map_err(std::io::Error::other)?;
    db::run_migrations(&pool).map_err(std::io::Error::other)?;

    let store = web::Data::new(PgStore::new(pool));

    info!(bind = %settings.server.bind, "starting admin server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes::configure::<PgStore>)
    })
    .bind(&settings.server.bind)?
    .run()
    .await
}
