use actix_web::web;
use serde::Deserialize;

use crate::admin;
use crate::db::{AdminDao, AdminStore};
use crate::error::AppError;
use crate::security::{authorize, BasicCredentials, MANAGERS, STAFF};
use crate::validation::{ProductFormData, ProductFormValidator};
use crate::view::View;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page")]
    pub page: String,
}

fn first_page() -> String {
    "1".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

/// Runs `work` on the blocking pool inside one store transaction.
async fn in_transaction<S, F>(store: web::Data<S>, work: F) -> Result<View, AppError>
where
    S: AdminStore,
    F: FnOnce(&mut dyn AdminDao) -> Result<View, AppError> + Send + 'static,
{
    web::block(move || store.transaction(work)).await?
}

async fn login() -> View {
    admin::login()
}

async fn account_info<S: AdminStore>(
    store: web::Data<S>,
    credentials: BasicCredentials,
) -> Result<View, AppError> {
    in_transaction(store, move |dao| {
        let user = authorize(dao, &credentials, STAFF)?;
        admin::account_info(&user)
    })
    .await
}

async fn order_list<S: AdminStore>(
    store: web::Data<S>,
    credentials: BasicCredentials,
    query: web::Query<PageQuery>,
) -> Result<View, AppError> {
    let PageQuery { page } = query.into_inner();
    in_transaction(store, move |dao| {
        authorize(dao, &credentials, STAFF)?;
        admin::order_list(dao, &page)
    })
    .await
}

async fn product<S: AdminStore>(
    store: web::Data<S>,
    credentials: BasicCredentials,
    query: web::Query<ProductQuery>,
) -> Result<View, AppError> {
    let ProductQuery { code } = query.into_inner();
    in_transaction(store, move |dao| {
        authorize(dao, &credentials, MANAGERS)?;
        admin::product(dao, &code)
    })
    .await
}

async fn product_save<S: AdminStore>(
    store: web::Data<S>,
    credentials: BasicCredentials,
    form: web::Form<ProductFormData>,
) -> Result<View, AppError> {
    let (product_form, mut errors) = form.into_inner().bind();
    in_transaction(store, move |dao| {
        authorize(dao, &credentials, MANAGERS)?;
        ProductFormValidator.validate(&product_form, dao, &mut errors)?;
        admin::product_save(dao, product_form, &errors)
    })
    .await
}

async fn order_view<S: AdminStore>(
    store: web::Data<S>,
    credentials: BasicCredentials,
    query: web::Query<OrderQuery>,
) -> Result<View, AppError> {
    let OrderQuery { order_id } = query.into_inner();
    in_transaction(store, move |dao| {
        authorize(dao, &credentials, STAFF)?;
        admin::order_view(dao, &order_id)
    })
    .await
}

pub fn configure<S: AdminStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/login", web::get().to(login))
            .route("/accountInfo", web::get().to(account_info::<S>))
            .route("/orderList", web::get().to(order_list::<S>))
            .route("/product", web::get().to(product::<S>))
            .route("/product", web::post().to(product_save::<S>))
            .route("/order", web::get().to(order_view::<S>)),
    );
}
