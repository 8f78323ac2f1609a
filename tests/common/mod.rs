#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use actix_web::http::header::{HeaderValue, AUTHORIZATION};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::NaiveDate;
use diesel::result::DatabaseErrorKind;

use retail_admin::db::models::{Account, Product};
use retail_admin::db::{AccountDao, AdminDao, AdminStore, OrderDao, ProductDao};
use retail_admin::models::{OrderDetailInfo, OrderInfo, ProductForm};
use retail_admin::pagination::{page_offset, PaginationResult};
use retail_admin::AppError;

pub const PASSWORD: &str = "123";

#[derive(Clone, Default)]
pub struct MemoryDb {
    pub accounts: Vec<Account>,
    pub products: Vec<Product>,
    pub orders: Vec<OrderInfo>,
    pub details: Vec<(String, OrderDetailInfo)>,
}

/// In-memory stand-in for the PostgreSQL store; rolls back on `Err`.
#[derive(Default)]
pub struct MemoryStore {
    db: Mutex<MemoryDb>,
    pub save_calls: AtomicUsize,
    pub fail_saves_with: Option<String>,
}

impl MemoryStore {
    pub fn new(db: MemoryDb) -> Self {
        Self {
            db: Mutex::new(db),
            ..Self::default()
        }
    }

    pub fn failing_saves(db: MemoryDb, message: &str) -> Self {
        Self {
            fail_saves_with: Some(message.to_string()),
            ..Self::new(db)
        }
    }

    pub fn saves(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn product(&self, code: &str) -> Option<Product> {
        let db = self.db.lock().unwrap();
        db.products.iter().find(|p| p.code == code).cloned()
    }
}

impl AdminStore for MemoryStore {
    fn transaction<R, F>(&self, work: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut dyn AdminDao) -> Result<R, AppError>,
    {
        let mut db = self.db.lock().unwrap();
        let mut working = db.clone();
        let mut dao = MemoryDao {
            db: &mut working,
            store: self,
        };
        let outcome = work(&mut dao)?;
        *db = working;
        Ok(outcome)
    }
}

struct MemoryDao<'a> {
    db: &'a mut MemoryDb,
    store: &'a MemoryStore,
}

impl AccountDao for MemoryDao<'_> {
    fn find_account(&mut self, user_name: &str) -> Result<Option<Account>, AppError> {
        Ok(self.db.accounts.iter().find(|a| a.user_name == user_name).cloned())
    }
}

impl OrderDao for MemoryDao<'_> {
    fn list_order_info(
        &mut self,
        page: i64,
        max_result: i64,
        max_navigation_page: i64,
    ) -> Result<PaginationResult<OrderInfo>, AppError> {
        let mut orders = self.db.orders.clone();
        orders.sort_by(|a, b| b.order_num.cmp(&a.order_num));
        let list = orders
            .into_iter()
            .skip(page_offset(page, max_result) as usize)
            .take(max_result as usize)
            .collect();
        Ok(PaginationResult::new(
            list,
            self.db.orders.len() as i64,
            page,
            max_result,
            max_navigation_page,
        ))
    }

    fn get_order_info(&mut self, order_id: &str) -> Result<Option<OrderInfo>, AppError> {
        Ok(self.db.orders.iter().find(|o| o.id == order_id).cloned())
    }

    fn list_order_detail_infos(&mut self, order_id: &str) -> Result<Vec<OrderDetailInfo>, AppError> {
        Ok(self
            .db
            .details
            .iter()
            .filter(|(id, _)| id == order_id)
            .map(|(_, detail)| detail.clone())
            .collect())
    }
}

impl ProductDao for MemoryDao<'_> {
    fn find_product(&mut self, code: &str) -> Result<Option<Product>, AppError> {
        Ok(self.db.products.iter().find(|p| p.code == code).cloned())
    }

    fn save(&mut self, form: &ProductForm) -> Result<(), AppError> {
        self.store.save_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.store.fail_saves_with {
            return Err(AppError::Persistence {
                operation: "save product",
                source: diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::Unknown,
                    Box::new(message.clone()),
                ),
            });
        }

        let product = Product {
            code: form.code.clone(),
            name: form.name.clone(),
            price: form.price,
            description: form.description.clone(),
            active: form.active,
            create_date: timestamp(),
        };
        match self.db.products.iter_mut().find(|p| p.code == form.code) {
            Some(existing) => {
                *existing = Product {
                    create_date: existing.create_date,
                    ..product
                }
            }
            None => self.db.products.push(product),
        }
        Ok(())
    }
}

pub fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 2)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

pub fn account(user_name: &str, role: &str) -> Account {
    Account {
        user_name: user_name.to_string(),
        encrypted_password: bcrypt::hash(PASSWORD, 4).unwrap(),
        active: true,
        user_role: role.to_string(),
    }
}

pub fn product(code: &str, name: &str, price: f64) -> Product {
    Product {
        code: code.to_string(),
        name: name.to_string(),
        price,
        description: format!("{name} description"),
        active: true,
        create_date: timestamp(),
    }
}

pub fn order(id: &str, order_num: i32) -> OrderInfo {
    OrderInfo {
        id: id.to_string(),
        order_num,
        order_date: timestamp(),
        status: "NEW".to_string(),
        amount: 42.0,
        customer_name: "Ana Pop".to_string(),
        customer_address: "Str. Lalelelor 1".to_string(),
        customer_email: "ana@example.com".to_string(),
        customer_phone: "0700000000".to_string(),
        details: Vec::new(),
    }
}

pub fn detail(id: &str, product: &Product, quantity: i32) -> OrderDetailInfo {
    OrderDetailInfo {
        id: id.to_string(),
        product_code: product.code.clone(),
        product_name: product.name.clone(),
        quantity,
        price: product.price,
        amount: product.price * quantity as f64,
    }
}

/// Two staff accounts, two products and one order with two lines.
pub fn seeded_db() -> MemoryDb {
    let tea = product("S001", "Green tea", 4.5);
    let mug = product("S002", "Mug", 12.0);
    MemoryDb {
        accounts: vec![account("manager1", "MANAGER"), account("employee1", "EMPLOYEE")],
        details: vec![
            ("order-1".to_string(), detail("d1", &tea, 2)),
            ("order-1".to_string(), detail("d2", &mug, 1)),
        ],
        products: vec![tea, mug],
        orders: vec![order("order-1", 1)],
    }
}

pub fn basic_auth(user_name: &str) -> (actix_web::http::header::HeaderName, HeaderValue) {
    let token = STANDARD.encode(format!("{user_name}:{PASSWORD}"));
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
    )
}
