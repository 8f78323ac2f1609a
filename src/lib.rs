pub mod admin;
pub mod db;
pub mod error;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod security;
pub mod settings;
pub mod validation;
pub mod view;

pub use error::AppError;
pub use settings::Settings;
