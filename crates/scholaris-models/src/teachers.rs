//! Teacher records, approved by a HOD.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use scholaris_core::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    /// Id of the HOD that registered this Teacher.
    pub approved_by: Uuid,
    pub department: String,
    pub city: String,
    pub state: String,
    pub age: i64,
    pub total_salary: f64,
    pub due_salary: f64,
    pub salary_paid: f64,
    #[schema(value_type = Vec<String>)]
    pub subjects: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeacherDto {
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
    pub subjects: Vec<String>,
}

/// Partial salary update; only the figures present are changed.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherSalaryDto {
    #[serde(default)]
    #[validate(range(min = 0.0, message = "totalSalary must not be negative"))]
    pub total_salary: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "dueSalary must not be negative"))]
    pub due_salary: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeacherResponse {
    pub message: String,
    pub user: Teacher,
}
