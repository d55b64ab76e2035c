use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;
use tracing::{info, instrument};
use uuid::Uuid;

use scholaris_core::{AppError, Role, hash_password};
use scholaris_models::{RegisterTeacherDto, Teacher, UpdateTeacherSalaryDto};

use crate::modules::auth::service::AuthService;
use crate::modules::insert_error;

const CONFLICT: &str = "Email already registered";
pub const NOT_FOUND: &str = "Teacher not found";

pub struct TeacherService;

impl TeacherService {
    /// Registers a Teacher approved by `hod_id`.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(
        db: &SqlitePool,
        dto: RegisterTeacherDto,
        hod_id: Uuid,
        bcrypt_cost: u32,
    ) -> Result<Teacher, AppError> {
        AuthService::ensure_principal_exists(db, Role::Hod, hod_id).await?;

        if AuthService::email_taken(db, Role::Teacher, &dto.email).await? {
            return Err(AppError::conflict(CONFLICT));
        }

        let hashed_password = hash_password(&dto.password, bcrypt_cost)?;
        let now = Utc::now();

        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            INSERT INTO teachers (id, name, email, password, role, approved_by, department, city,
                                  state, age, total_salary, due_salary, salary_paid, subjects,
                                  created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?)
            RETURNING id, name, email, role, approved_by, department, city, state, age,
                      total_salary, due_salary, salary_paid, subjects, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(Role::Teacher.as_str())
        .bind(hod_id)
        .bind(&dto.department)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(dto.age)
        .bind(dto.total_salary)
        .bind(dto.due_salary)
        .bind(Json(&dto.subjects))
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| insert_error(e, CONFLICT))?;

        info!(role = %Role::Teacher, id = %teacher.id, approved_by = %hod_id, "Principal registered");
        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, name, email, role, approved_by, department, city, state, age,
                   total_salary, due_salary, salary_paid, subjects, created_at, updated_at
            FROM teachers
            ORDER BY created_at
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(teachers)
    }

    /// Overwrites only the salary figures present in `dto`.
    #[instrument(skip(db, dto))]
    pub async fn update_salary(
        db: &SqlitePool,
        id: Uuid,
        dto: UpdateTeacherSalaryDto,
    ) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            UPDATE teachers
            SET total_salary = COALESCE(?, total_salary),
                due_salary = COALESCE(?, due_salary),
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, email, role, approved_by, department, city, state, age,
                      total_salary, due_salary, salary_paid, subjects, created_at, updated_at
            "#,
        )
        .bind(dto.total_salary)
        .bind(dto.due_salary)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        info!(id = %id, "Teacher salary updated");
        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(NOT_FOUND));
        }

        info!(role = %Role::Teacher, id = %id, "Principal deleted");
        Ok(())
    }
}
