use chrono::Utc;
use diesel::prelude::*;

use crate::db::models::*;
use crate::db::schema::*;
use crate::error::AppError;
use crate::models::{OrderDetailInfo, OrderInfo, ProductForm};
use crate::pagination::{page_offset, PaginationResult};

pub trait AccountDao {
    fn find_account(&mut self, user_name: &str) -> Result<Option<Account>, AppError>;
}

pub trait OrderDao {
    fn list_order_info(
        &mut self,
        page: i64,
        max_result: i64,
        max_navigation_page: i64,
    ) -> Result<PaginationResult<OrderInfo>, AppError>;

    /// The order summary; its `details` are left empty.
    fn get_order_info(&mut self, order_id: &str) -> Result<Option<OrderInfo>, AppError>;

    fn list_order_detail_infos(&mut self, order_id: &str) -> Result<Vec<OrderDetailInfo>, AppError>;
}

pub trait ProductDao {
    fn find_product(&mut self, code: &str) -> Result<Option<Product>, AppError>;

    /// Inserts the product when its code is unknown, updates it otherwise.
    fn save(&mut self, form: &ProductForm) -> Result<(), AppError>;
}

/// Every DAO the admin pages use, backed by one transaction.
pub trait AdminDao: AccountDao + OrderDao + ProductDao {}

impl<T: AccountDao + OrderDao + ProductDao + ?Sized> AdminDao for T {}

/// DAOs sharing a single PostgreSQL connection.
pub struct PgAdminDao<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgAdminDao<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

impl AccountDao for PgAdminDao<'_> {
    fn find_account(&mut self, user_name: &str) -> Result<Option<Account>, AppError> {
        let account = accounts::table
            .find(user_name)
            .select(Account::as_select())
            .first(self.conn)
            .optional()?;
        Ok(account)
    }
}

impl OrderDao for PgAdminDao<'_> {
    fn list_order_info(
        &mut self,
        page: i64,
        max_result: i64,
        max_navigation_page: i64,
    ) -> Result<PaginationResult<OrderInfo>, AppError> {
        let total_records: i64 = orders::table.count().get_result(self.conn)?;
        let rows: Vec<Order> = orders::table
            .select(Order::as_select())
            .order(orders::order_num.desc())
            .limit(max_result)
            .offset(page_offset(page, max_result))
            .load(self.conn)?;

        Ok(PaginationResult::new(
            rows.into_iter().map(OrderInfo::from).collect(),
            total_records,
            page,
            max_result,
            max_navigation_page,
        ))
    }

    fn get_order_info(&mut self, order_id: &str) -> Result<Option<OrderInfo>, AppError> {
        let order = orders::table
            .find(order_id)
            .select(Order::as_select())
            .first(self.conn)
            .optional()?;
        Ok(order.map(OrderInfo::from))
    }

    fn list_order_detail_infos(&mut self, order_id: &str) -> Result<Vec<OrderDetailInfo>, AppError> {
        let rows: Vec<OrderDetailRow> = order_details::table
            .inner_join(products::table)
            .filter(order_details::order_id.eq(order_id))
            .order(order_details::id.asc())
            .select((
                order_details::id,
                order_details::product_code,
                products::name,
                order_details::quantity,
                order_details::price,
                order_details::amount,
            ))
            .load(self.conn)?;
        Ok(rows.into_iter().map(OrderDetailInfo::from).collect())
    }
}

impl ProductDao for PgAdminDao<'_> {
    fn find_product(&mut self, code: &str) -> Result<Option<Product>, AppError> {
        let product = products::table
            .find(code)
            .select(Product::as_select())
            .first(self.conn)
            .optional()?;
        Ok(product)
    }

    fn save(&mut self, form: &ProductForm) -> Result<(), AppError> {
        // Savepoint, so a failed save leaves the request transaction usable.
        self.conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let exists = products::table
                    .find(form.code.as_str())
                    .select(products::code)
                    .first::<String>(conn)
                    .optional()?
                    .is_some();

                if exists {
                    diesel::update(products::table.find(form.code.as_str()))
                        .set(&ProductChanges::from(form))
                        .execute(conn)?;
                } else {
                    diesel::insert_into(products::table)
                        .values(&NewProduct::from_form(form, Utc::now().naive_utc()))
                        .execute(conn)?;
                }
                Ok(())
            })
            .map_err(|source| AppError::Persistence {
                operation: "save product",
                source,
            })
    }
}
