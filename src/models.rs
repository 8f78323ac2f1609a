use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::models::Product;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub active: bool,
    pub new_product: bool,
}

impl ProductForm {
    /// Blank form for creating a product.
    pub fn new_product() -> Self {
        Self {
            active: true,
            new_product: true,
            ..Self::default()
        }
    }
}

impl From<Product> for ProductForm {
    fn from(product: Product) -> Self {
        Self {
            code: product.code,
            name: product.name,
            price: product.price,
            description: product.description,
            active: product.active,
            new_product: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub id: String,
    pub order_num: i32,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub amount: f64,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub details: Vec<OrderDetailInfo>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailInfo {
    pub id: String,
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub amount: f64,
}

/// The authenticated admin, as shown on the account page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub username: String,
    pub authorities: Vec<String>,
    pub enabled: bool,
}
