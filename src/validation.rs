//! Request binding and validation for the admin forms.
//!
//! Binding turns the raw form fields into a typed form and records conversion
//! failures. Validators then add their own field errors to the same
//! [`BindingResult`], so the controller sees a single list of problems.

use serde::{Deserialize, Serialize};

use crate::db::ProductDao;
use crate::error::AppError;
use crate::models::ProductForm;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BindingResult {
    errors: Vec<FieldError>,
}

impl BindingResult {
    pub fn reject_value(&mut self, object_name: &str, field: &'static str, error_code: &str, message: &str) {
        self.errors.push(FieldError {
            field,
            code: format!("{error_code}.{object_name}.{field}"),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

const PRODUCT_FORM: &str = "productForm";

/// Raw `application/x-www-form-urlencoded` fields of the product form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub active: Option<String>,
    pub new_product: Option<String>,
}

impl ProductFormData {
    /// Trims every text field and converts the price and flags.
    pub fn bind(self) -> (ProductForm, BindingResult) {
        let mut result = BindingResult::default();

        let price = match trimmed(self.price).as_str() {
            "" => {
                result.reject_value(PRODUCT_FORM, "price", "NotEmpty", "Product price is required");
                0.0
            }
            raw => match raw.parse::<f64>() {
                Ok(price) if price.is_finite() => price,
                _ => {
                    result.reject_value(PRODUCT_FORM, "price", "typeMismatch", "Product price must be a number");
                    0.0
                }
            },
        };

        let form = ProductForm {
            code: trimmed(self.code),
            name: trimmed(self.name),
            price,
            description: trimmed(self.description),
            active: checked(self.active.as_deref()),
            new_product: checked(self.new_product.as_deref()),
        };
        (form, result)
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn checked(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("on" | "true" | "1")
    )
}

pub struct ProductFormValidator;

impl ProductFormValidator {
    pub fn validate<D: ProductDao + ?Sized>(
        &self,
        form: &ProductForm,
        dao: &mut D,
        errors: &mut BindingResult,
    ) -> Result<(), AppError> {
        if form.code.is_empty() {
            errors.reject_value(PRODUCT_FORM, "code", "NotEmpty", "Product code is required");
        } else if !form
            .code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            errors.reject_value(
                PRODUCT_FORM,
                "code",
                "Pattern",
                "Product code may only contain letters, digits, '-' and '_'",
            );
        } else if form.new_product && dao.find_product(&form.code)?.is_some() {
            errors.reject_value(PRODUCT_FORM, "code", "Duplicate", "Product code already exists");
        }

        if form.name.is_empty() {
            errors.reject_value(PRODUCT_FORM, "name", "NotEmpty", "Product name is required");
        }

        if !errors.has_field_errors("price") && form.price <= 0.0 {
            errors.reject_value(PRODUCT_FORM, "price", "Min", "Product price must be greater than 0");
        }

        Ok(())
    }
}
