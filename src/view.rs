use actix_web::body::BoxBody;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::AppError;

/// Named attributes handed to a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model(Map<String, Value>);

impl Model {
    pub fn add_attribute(&mut self, name: &str, value: impl Serialize) -> Result<(), AppError> {
        self.0.insert(name.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// What a controller function asks the front end to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Page { name: &'static str, model: Model },
    Redirect(String),
}

impl View {
    pub fn page(name: &'static str, model: Model) -> Self {
        View::Page { name, model }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        View::Redirect(location.into())
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            View::Page { name, .. } => Some(*name),
            View::Redirect(_) => None,
        }
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            View::Page { model, .. } => Some(model),
            View::Redirect(_) => None,
        }
    }
}

impl Responder for View {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            View::Page { name, model } => HttpResponse::Ok().json(json!({
                "view": name,
                "model": Value::Object(model.0),
            })),
            View::Redirect(location) => HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}
