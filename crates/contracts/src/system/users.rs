use serde::{Deserialize, Serialize};

use crate::shared::validation::{parse_date, require, Validate, ValidationError, MIN_PASSWORD_LEN};

pub const DEFAULT_MANAGER_NAME: &str = "New Manager";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Unknown values from a select fall back to the default.
    pub fn from_form(value: &str) -> Self {
        match value.trim() {
            "female" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub login: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.login
        } else {
            &self.full_name
        }
    }
}

/// Учётные данные для создания пользователя или менеджера.
/// Payload of `POST /api/users`; the role field tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub login: String,
    pub password: String,
    pub full_name: String,
    pub birth_date: Option<String>,
    pub gender: Gender,
    pub role: Role,
}

impl CreateUserDto {
    /// Build from raw form input: trims text fields, maps an empty birth
    /// date to `None` and names unnamed managers.
    pub fn from_form(
        role: Role,
        login: &str,
        password: &str,
        full_name: &str,
        birth_date: &str,
        gender: &str,
    ) -> Self {
        let full_name = match (role, full_name.trim()) {
            (Role::Manager, "") => DEFAULT_MANAGER_NAME.to_string(),
            (_, name) => name.to_string(),
        };
        let birth_date = Some(birth_date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Self {
            login: login.trim().to_string(),
            password: password.to_string(),
            full_name,
            birth_date,
            gender: Gender::from_form(gender),
            role,
        }
    }
}

impl Validate for CreateUserDto {
    fn validate(&self) -> Result<(), ValidationError> {
        require("Login", &self.login)?;
        require("Password", &self.password)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        require("Full name", &self.full_name)?;
        match (&self.birth_date, self.role) {
            (Some(date), _) => {
                parse_date("Birth date", date)?;
            }
            (None, Role::Manager) => return Err(ValidationError::Required("Birth date")),
            (None, _) => {}
        }
        Ok(())
    }
}
