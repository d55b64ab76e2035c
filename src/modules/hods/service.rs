use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use scholaris_core::{AppError, Role, hash_password};
use scholaris_models::{Hod, RegisterHodDto, UpdateHodSalaryDto};

use crate::modules::auth::service::AuthService;
use crate::modules::insert_error;

const CONFLICT: &str = "HOD already exists";
pub const NOT_FOUND: &str = "HOD not found";

pub struct HodService;

impl HodService {
    /// Registers a HOD approved by `director_id`.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(
        db: &SqlitePool,
        dto: RegisterHodDto,
        director_id: Uuid,
        bcrypt_cost: u32,
    ) -> Result<Hod, AppError> {
        AuthService::ensure_principal_exists(db, Role::Director, director_id).await?;

        if AuthService::email_taken(db, Role::Hod, &dto.email).await? {
            return Err(AppError::conflict(CONFLICT));
        }

        let hashed_password = hash_password(&dto.password, bcrypt_cost)?;
        let now = Utc::now();

        let hod = sqlx::query_as::<_, Hod>(
            r#"
            INSERT INTO hods (id, name, email, password, role, approved_by, department, city,
                              state, age, total_salary, due_salary, salary_paid, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING id, name, email, role, approved_by, department, city, state, age,
                      total_salary, due_salary, salary_paid, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(Role::Hod.as_str())
        .bind(director_id)
        .bind(&dto.department)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(dto.age)
        .bind(dto.total_salary)
        .bind(dto.due_salary)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| insert_error(e, CONFLICT))?;

        info!(role = %Role::Hod, id = %hod.id, approved_by = %director_id, "Principal registered");
        Ok(hod)
    }

    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool) -> Result<Vec<Hod>, AppError> {
        let hods = sqlx::query_as::<_, Hod>(
            r#"
            SELECT id, name, email, role, approved_by, department, city, state, age,
                   total_salary, due_salary, salary_paid, created_at, updated_at
            FROM hods
            ORDER BY created_at
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(hods)
    }

    /// Replaces both salary figures; an omitted figure is written as zero.
    #[instrument(skip(db, dto))]
    pub async fn update_salary(
        db: &SqlitePool,
        id: Uuid,
        dto: UpdateHodSalaryDto,
    ) -> Result<Hod, AppError> {
        let (total_salary, due_salary) = dto.resolved();

        let hod = sqlx::query_as::<_, Hod>(
            r#"
            UPDATE hods
            SET total_salary = ?, due_salary = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, email, role, approved_by, department, city, state, age,
                      total_salary, due_salary, salary_paid, created_at, updated_at
            "#,
        )
        .bind(total_salary)
        .bind(due_salary)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        info!(id = %id, total_salary, due_salary, "HOD salary updated");
        Ok(hod)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM hods WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(NOT_FOUND));
        }

        info!(role = %Role::Hod, id = %id, "Principal deleted");
        Ok(())
    }
}
