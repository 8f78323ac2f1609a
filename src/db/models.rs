use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

use crate::db::schema::{accounts, orders, products};
use crate::models::{OrderDetailInfo, OrderInfo, ProductForm};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = accounts)]
pub struct Account {
    pub user_name: String,
    pub encrypted_password: String,
    pub active: bool,
    pub user_role: String,
}

#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub active: bool,
    pub create_date: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub price: f64,
    pub description: &'a str,
    pub active: bool,
    pub create_date: NaiveDateTime,
}

impl<'a> NewProduct<'a> {
    pub fn from_form(form: &'a ProductForm, create_date: NaiveDateTime) -> Self {
        Self {
            code: &form.code,
            name: &form.name,
            price: form.price,
            description: &form.description,
            active: form.active,
            create_date,
        }
    }
}

/// Everything but the code, which stays fixed once a product exists.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = products)]
pub struct ProductChanges<'a> {
    pub name: &'a str,
    pub price: f64,
    pub description: &'a str,
    pub active: bool,
}

impl<'a> From<&'a ProductForm> for ProductChanges<'a> {
    fn from(form: &'a ProductForm) -> Self {
        Self {
            name: &form.name,
            price: form.price,
            description: &form.description,
            active: form.active,
        }
    }
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct Order {
    pub id: String,
    pub order_num: i32,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub amount: f64,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl From<Order> for OrderInfo {
    fn from(order: Order) -> Self {
        OrderInfo {
            id: order.id,
            order_num: order.order_num,
            order_date: order.order_date,
            status: order.status,
            amount: order.amount,
            customer_name: order.customer_name,
            customer_address: order.customer_address,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            details: Vec::new(),
        }
    }
}

/// One order line joined with its product's name.
#[derive(Queryable, Debug)]
pub struct OrderDetailRow {
    pub id: String,
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub amount: f64,
}

impl From<OrderDetailRow> for OrderDetailInfo {
    fn from(row: OrderDetailRow) -> Self {
        OrderDetailInfo {
            id: row.id,
            product_code: row.product_code,
            product_name: row.product_name,
            quantity: row.quantity,
            price: row.price,
            amount: row.amount,
        }
    }
}
