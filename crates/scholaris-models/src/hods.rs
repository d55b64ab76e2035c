//! Head-of-department records, approved by a Director.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use scholaris_core::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hod {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    /// Id of the Director that registered this HOD.
    pub approved_by: Uuid,
    pub department: String,
    pub city: String,
    pub state: String,
    pub age: i64,
    pub total_salary: f64,
    pub due_salary: f64,
    pub salary_paid: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterHodDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i64,
    #[validate(range(min = 0.0, message = "totalSalary must not be negative"))]
    pub total_salary: f64,
    #[validate(range(min = 0.0, message = "dueSalary must not be negative"))]
    pub due_salary: f64,
}

/// Salary replacement for a HOD. Both figures are always written; an
/// omitted figure is reset to zero.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHodSalaryDto {
    #[serde(default)]
    #[validate(range(min = 0.0, message = "totalSalary must not be negative"))]
    pub total_salary: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "dueSalary must not be negative"))]
    pub due_salary: Option<f64>,
}

impl UpdateHodSalaryDto {
    /// The `(total_salary, due_salary)` pair to store.
    pub fn resolved(&self) -> (f64, f64) {
        (
            self.total_salary.unwrap_or_default(),
            self.due_salary.unwrap_or_default(),
        )
    }
}
