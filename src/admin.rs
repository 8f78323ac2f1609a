//! Admin pages: one function per route, independent of the HTTP layer.
//!
//! Each function receives already-extracted request values plus the DAOs of
//! the current transaction and returns the [`View`] to show next.

use tracing::{debug, error, info};

use crate::db::{OrderDao, ProductDao};
use crate::error::{root_cause, AppError};
use crate::models::{ProductForm, UserDetails};
use crate::validation::BindingResult;
use crate::view::{Model, View};

pub const MAX_RESULT: i64 = 20;
pub const MAX_NAVIGATION_PAGE: i64 = 10;

pub const PRODUCT_LIST_REDIRECT: &str = "/productListManager";
pub const ORDER_LIST_REDIRECT: &str = "/admin/orderList";

/// Anything that is not a 32-bit integer falls back to the first page.
pub fn parse_page(page: &str) -> i64 {
    page.parse::<i32>().map(i64::from).unwrap_or(1)
}

pub fn login() -> View {
    info!("showing admin login page");
    View::page("login", Model::default())
}

pub fn account_info(user: &UserDetails) -> Result<View, AppError> {
    info!("fetching account details for the admin");
    let mut model = Model::default();
    model.add_attribute("userDetails", user)?;
    debug!(user = %user.username, "account details fetched");
    Ok(View::page("accountInfo", model))
}

pub fn order_list<D: OrderDao + ?Sized>(dao: &mut D, page: &str) -> Result<View, AppError> {
    let page = parse_page(page);
    info!(page, "fetching order list");
    let pagination_result = dao.list_order_info(page, MAX_RESULT, MAX_NAVIGATION_PAGE)?;
    debug!(
        total_records = pagination_result.total_records,
        "order list fetched"
    );

    let mut model = Model::default();
    model.add_attribute("paginationResult", &pagination_result)?;
    Ok(View::page("orderList", model))
}

pub fn product<D: ProductDao + ?Sized>(dao: &mut D, code: &str) -> Result<View, AppError> {
    let mut product_form = None;
    if !code.is_empty() {
        match dao.find_product(code)? {
            Some(product) => {
                debug!(code, name = %product.name, "editing existing product");
                product_form = Some(ProductForm::from(product));
            }
            None => info!(code, "no product with this code, showing a blank form"),
        }
    }
    let product_form = product_form.unwrap_or_else(ProductForm::new_product);

    let mut model = Model::default();
    model.add_attribute("productForm", &product_form)?;
    Ok(View::page("product", model))
}

/// `errors` holds everything binding and validation found for `product_form`.
pub fn product_save<D: ProductDao + ?Sized>(
    dao: &mut D,
    product_form: ProductForm,
    errors: &BindingResult,
) -> Result<View, AppError> {
    let mut model = Model::default();
    if errors.has_errors() {
        error!(code = %product_form.code, errors = errors.errors().len(), "product form rejected");
        model.add_attribute("productForm", &product_form)?;
        model.add_attribute("fieldErrors", errors)?;
        return Ok(View::page("product", model));
    }

    if let Err(err) = dao.save(&product_form) {
        let message = root_cause(&err).to_string();
        error!(code = %product_form.code, error = %message, "product could not be saved");
        model.add_attribute("productForm", &product_form)?;
        model.add_attribute("errorMessage", message)?;
        return Ok(View::page("product", model));
    }

    debug!(code = %product_form.code, name = %product_form.name, "product saved");
    Ok(View::redirect(PRODUCT_LIST_REDIRECT))
}

pub fn order_view<D: OrderDao + ?Sized>(dao: &mut D, order_id: &str) -> Result<View, AppError> {
    let Some(mut order_info) = dao.get_order_info(order_id)? else {
        error!(order_id, "order not found");
        return Ok(View::redirect(ORDER_LIST_REDIRECT));
    };
    order_info.details = dao.list_order_detail_infos(order_id)?;

    let mut model = Model::default();
    model.add_attribute("orderInfo", &order_info)?;
    info!(order_id, lines = order_info.details.len(), "order details displayed");
    Ok(View::page("order", model))
}
