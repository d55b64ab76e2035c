#[allow(dead_code)]
mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{generate_unique_email, setup_test_app, teacher_body};

#[tokio::test]
async fn test_register_teacher_returns_record() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;
    let email = generate_unique_email();

    let (status, body) = app
        .send("POST", "/api/auth/register/teacher", Some(&hod.token), Some(teacher_body(&email)))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Teacher registered successfully");

    let user = &body["user"];
    assert_eq!(user["email"], email.as_str());
    assert_eq!(user["role"], "Teacher");
    assert_eq!(user["approvedBy"], hod.id.to_string());
    assert_eq!(user["subjects"], json!(["Mechanics", "Optics"]));
    assert_eq!(user["salaryPaid"], 0.0);
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn test_director_cannot_register_teacher_directly() {
    let app = setup_test_app().await;
    let director = app.create_director().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register/teacher",
            Some(&director.token),
            Some(teacher_body(&generate_unique_email())),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied. HOD only");

    let (status, _) = app
        .send("GET", "/api/auth/all/teachers", Some(&director.token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    assert_eq!(app.count("teachers").await, 0);
}

#[tokio::test]
async fn test_duplicate_teacher_email_is_conflict() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;
    let teacher = app.create_teacher(&hod).await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register/teacher",
            Some(&hod.token),
            Some(teacher_body(&teacher.email)),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");
    assert_eq!(app.count("teachers").await, 1);
}

#[tokio::test]
async fn test_register_teacher_requires_subjects() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;

    let mut body = teacher_body(&generate_unique_email());
    body.as_object_mut().unwrap().remove("subjects");

    let (status, response) = app
        .send("POST", "/api/auth/register/teacher", Some(&hod.token), Some(body))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "subjects is required");
    assert_eq!(app.count("teachers").await, 0);
}

#[tokio::test]
async fn test_list_teachers() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;
    app.create_teacher(&hod).await;
    app.create_teacher(&hod).await;

    let (status, body) = app
        .send("GET", "/api/auth/all/teachers", Some(&hod.token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_teacher_salary_is_partial() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;
    let teacher = app.create_teacher(&hod).await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/auth/update/teacher-salary/{}", teacher.id),
            Some(&hod.token),
            Some(json!({ "dueSalary": 0 })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher salary updated successfully");
    assert_eq!(body["user"]["dueSalary"], 0.0);
    assert_eq!(body["user"]["totalSalary"], 50000.0);

    let (_, body) = app
        .send(
            "PUT",
            &format!("/api/auth/update/teacher-salary/{}", teacher.id),
            Some(&hod.token),
            Some(json!({ "totalSalary": 55000, "dueSalary": null })),
        )
        .await;
    assert_eq!(body["user"]["totalSalary"], 55000.0);
    assert_eq!(body["user"]["dueSalary"], 0.0);
}

#[tokio::test]
async fn test_update_teacher_salary_without_body_changes_nothing() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;
    let teacher = app.create_teacher(&hod).await;

    let (status, bytes) = app
        .send_raw(
            "PUT",
            &format!("/api/auth/update/teacher-salary/{}", teacher.id),
            Some(&hod.token),
            None,
        )
        .await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher salary updated successfully");
    assert_eq!(body["user"]["id"], teacher.id.to_string());
    assert_eq!(body["user"]["totalSalary"], 50000.0);
    assert_eq!(body["user"]["dueSalary"], 5000.0);
}

#[tokio::test]
async fn test_update_missing_teacher_is_not_found() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/auth/update/teacher-salary/{}", Uuid::new_v4()),
            Some(&hod.token),
            Some(json!({ "totalSalary": 1 })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Teacher not found");
}

#[tokio::test]
async fn test_delete_teacher() {
    let app = setup_test_app().await;
    let director = app.create_director().await;
    let hod = app.create_hod(&director).await;
    let teacher = app.create_teacher(&hod).await;

    let (status, body) = app
        .send(
            "DELETE",
            &format!("/api/auth/delete/teacher/{}", teacher.id),
            Some(&hod.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher deleted successfully");

    let (_, teachers) = app
        .send("GET", "/api/auth/all/teachers", Some(&hod.token), None)
        .await;
    assert!(teachers.as_array().unwrap().is_empty());

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/api/auth/delete/teacher/{}", teacher.id),
            Some(&hod.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
