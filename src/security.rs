use std::str::FromStr;

use actix_web::dev::Payload;
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::{FromRequest, HttpRequest};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::future::{ready, Ready};

use crate::db::AccountDao;
use crate::error::AppError;
use crate::models::UserDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Manager,
}

impl Role {
    pub fn authority(self) -> &'static str {
        match self {
            Role::Employee => "ROLE_EMPLOYEE",
            Role::Manager => "ROLE_MANAGER",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches("ROLE_").to_ascii_uppercase().as_str() {
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            other => Err(AppError::Forbidden(format!("unknown role {other}"))),
        }
    }
}

pub const STAFF: &[Role] = &[Role::Employee, Role::Manager];
pub const MANAGERS: &[Role] = &[Role::Manager];

/// `Authorization: Basic` credentials, not yet checked against an account.
#[derive(Clone)]
pub struct BasicCredentials {
    pub user_name: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user_name", &self.user_name)
            .finish_non_exhaustive()
    }
}

impl BasicCredentials {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let missing = || AppError::Unauthorized("Missing or invalid Authorization header".into());

        let value = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Basic "))
            .ok_or_else(missing)?;
        let decoded = STANDARD.decode(value.trim()).map_err(|_| missing())?;
        let decoded = String::from_utf8(decoded).map_err(|_| missing())?;
        let (user_name, password) = decoded.split_once(':').ok_or_else(missing)?;
        if user_name.is_empty() {
            return Err(missing());
        }
        Ok(Self::new(user_name, password))
    }
}

impl FromRequest for BasicCredentials {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req.headers()))
    }
}

/// Checks the credentials against the stored account and its role.
pub fn authorize<D: AccountDao + ?Sized>(
    dao: &mut D,
    credentials: &BasicCredentials,
    allowed: &[Role],
) -> Result<UserDetails, AppError> {
    let bad_credentials = || AppError::Unauthorized("Bad credentials".into());

    let account = dao
        .find_account(&credentials.user_name)?
        .ok_or_else(bad_credentials)?;
    let valid = bcrypt::verify(&credentials.password, &account.encrypted_password)
        .unwrap_or_else(|error| {
            tracing::warn!(user = %account.user_name, %error, "stored password hash is unreadable");
            false
        });
    if !valid {
        tracing::warn!(user = %credentials.user_name, "rejected login with wrong password");
        return Err(bad_credentials());
    }
    if !account.active {
        return Err(AppError::Unauthorized("Account is disabled".into()));
    }

    let role: Role = account.user_role.parse()?;
    if !allowed.contains(&role) {
        tracing::warn!(user = %account.user_name, role = role.authority(), "access denied");
        return Err(AppError::Forbidden(format!(
            "{} may not access this page",
            account.user_name
        )));
    }

    Ok(UserDetails {
        username: account.user_name,
        authorities: vec![role.authority().to_string()],
        enabled: account.active,
    })
}
