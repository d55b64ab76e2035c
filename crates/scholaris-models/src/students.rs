//! Student records, approved by a Teacher, with fee bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use scholaris_core::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    /// Id of the Teacher that registered this Student.
    pub approved_by: Uuid,
    pub father_name: String,
    pub mother_name: String,
    pub course: String,
    pub age: i64,
    pub city: String,
    pub state: String,
    pub total_course_fee: f64,
    pub deposited_fee: f64,
    pub due_fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The subset of a Student echoed back on registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub approved_by: Uuid,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            role: student.role,
            approved_by: student.approved_by,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "fatherName is required"))]
    pub father_name: String,
    #[validate(length(min = 1, message = "motherName is required"))]
    pub mother_name: String,
    #[validate(length(min = 1, message = "course is required"))]
    pub course: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i64,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(range(min = 0.0, message = "totalCourseFee must not be negative"))]
    pub total_course_fee: f64,
    #[validate(range(min = 0.0, message = "depositedFee must not be negative"))]
    pub deposited_fee: f64,
    #[validate(range(min = 0.0, message = "dueFee must not be negative"))]
    pub due_fee: f64,
}

/// Partial fee update; only the figures present are changed.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentFeeDto {
    #[serde(default)]
    #[validate(range(min = 0.0, message = "totalCourseFee must not be negative"))]
    pub total_course_fee: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "depositedFee must not be negative"))]
    pub deposited_fee: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "dueFee must not be negative"))]
    pub due_fee: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentRegisteredResponse {
    pub message: String,
    pub user: StudentSummary,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub message: String,
    pub user: Student,
}
