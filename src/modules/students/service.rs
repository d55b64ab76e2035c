use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use scholaris_core::{AppError, Role, hash_password};
use scholaris_models::{RegisterStudentDto, Student, UpdateStudentFeeDto};

use crate::modules::auth::service::AuthService;
use crate::modules::insert_error;

const CONFLICT: &str = "Email already registered";
pub const NOT_FOUND: &str = "Student not found";

pub struct StudentService;

impl StudentService {
    /// Registers a Student approved by `teacher_id`.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(
        db: &SqlitePool,
        dto: RegisterStudentDto,
        teacher_id: Uuid,
        bcrypt_cost: u32,
    ) -> Result<Student, AppError> {
        AuthService::ensure_principal_exists(db, Role::Teacher, teacher_id).await?;

        if AuthService::email_taken(db, Role::Student, &dto.email).await? {
            return Err(AppError::conflict(CONFLICT));
        }

        let hashed_password = hash_password(&dto.password, bcrypt_cost)?;
        let now = Utc::now();

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, name, email, password, role, approved_by, father_name,
                                  mother_name, course, age, city, state, total_course_fee,
                                  deposited_fee, due_fee, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, email, role, approved_by, father_name, mother_name, course,
                      age, city, state, total_course_fee, deposited_fee, due_fee,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(Role::Student.as_str())
        .bind(teacher_id)
        .bind(&dto.father_name)
        .bind(&dto.mother_name)
        .bind(&dto.course)
        .bind(dto.age)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(dto.total_course_fee)
        .bind(dto.deposited_fee)
        .bind(dto.due_fee)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| insert_error(e, CONFLICT))?;

        info!(role = %Role::Student, id = %student.id, approved_by = %teacher_id, "Principal registered");
        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, role, approved_by, father_name, mother_name, course,
                   age, city, state, total_course_fee, deposited_fee, due_fee,
                   created_at, updated_at
            FROM students
            ORDER BY created_at
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(students)
    }

    /// Overwrites only the fee figures present in `dto`.
    #[instrument(skip(db, dto))]
    pub async fn update_fee(
        db: &SqlitePool,
        id: Uuid,
        dto: UpdateStudentFeeDto,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET total_course_fee = COALESCE(?, total_course_fee),
                deposited_fee = COALESCE(?, deposited_fee),
                due_fee = COALESCE(?, due_fee),
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, email, role, approved_by, father_name, mother_name, course,
                      age, city, state, total_course_fee, deposited_fee, due_fee,
                      created_at, updated_at
            "#,
        )
        .bind(dto.total_course_fee)
        .bind(dto.deposited_fee)
        .bind(dto.due_fee)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        info!(id = %id, "Student fee updated");
        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(NOT_FOUND));
        }

        info!(role = %Role::Student, id = %id, "Principal deleted");
        Ok(())
    }
}
