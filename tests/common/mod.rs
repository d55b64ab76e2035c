use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

use scholaris::router::init_router;
use scholaris::state::AppState;
use scholaris_auth::verify_token;
use scholaris_config::{CorsConfig, JwtConfig, PasswordConfig, RegistrationConfig};
use scholaris_db::{init_memory_pool, run_migrations};

pub const TEST_PASSWORD: &str = "password123";

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
}

/// A principal created through the API, with a fresh token.
#[allow(dead_code)]
pub struct TestPrincipal {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "scholaris-test-secret".to_string(),
        token_expiry: 86_400,
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(RegistrationConfig::default()).await
}

pub async fn setup_test_app_with(registration_config: RegistrationConfig) -> TestApp {
    let db = init_memory_pool().await.unwrap();
    run_migrations(&db).await.unwrap();

    let jwt_config = test_jwt_config();
    let state = AppState {
        db: db.clone(),
        jwt_config: jwt_config.clone(),
        cors_config: CorsConfig::from_list("http://localhost:3000"),
        password_config: PasswordConfig::with_cost(4),
        registration_config,
    };

    TestApp {
        router: init_router(state),
        db,
        jwt_config,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

impl TestApp {
    /// Sends a request and returns the status and raw body.
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, bytes.to_vec())
    }

    /// Sends a request and parses the JSON response body.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(method, uri, token, body).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn login(&self, role_path: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            &format!("/api/auth/login/{}", role_path),
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }

    async fn login_principal(&self, role_path: &str, email: String) -> TestPrincipal {
        let (status, body) = self.login(role_path, &email, TEST_PASSWORD).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        let token = body["token"].as_str().unwrap().to_string();
        let claims = verify_token(&token, &self.jwt_config).unwrap();

        TestPrincipal {
            id: Uuid::parse_str(&claims.id).unwrap(),
            email,
            token,
        }
    }

    pub async fn create_director(&self) -> TestPrincipal {
        let email = generate_unique_email();
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/register/director",
                None,
                Some(director_body(&email)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "director signup failed: {}", body);

        self.login_principal("director", email).await
    }

    pub async fn create_hod(&self, director: &TestPrincipal) -> TestPrincipal {
        let email = generate_unique_email();
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/register/hod",
                Some(&director.token),
                Some(hod_body(&email)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "hod registration failed: {}", body);

        self.login_principal("hod", email).await
    }

    pub async fn create_teacher(&self, hod: &TestPrincipal) -> TestPrincipal {
        let email = generate_unique_email();
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/register/teacher",
                Some(&hod.token),
                Some(teacher_body(&email)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "teacher registration failed: {}", body);

        self.login_principal("teacher", email).await
    }

    pub async fn create_student(&self, teacher: &TestPrincipal) -> TestPrincipal {
        let email = generate_unique_email();
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/register/student",
                Some(&teacher.token),
                Some(student_body(&email)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "student registration failed: {}", body);

        self.login_principal("student", email).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.db)
            .await
            .unwrap()
    }
}

pub fn director_body(email: &str) -> Value {
    json!({
        "name": "Director",
        "email": email,
        "password": TEST_PASSWORD
    })
}

pub fn hod_body(email: &str) -> Value {
    json!({
        "name": "Head",
        "email": email,
        "password": TEST_PASSWORD,
        "department": "Physics",
        "city": "Pune",
        "state": "MH",
        "age": 45,
        "totalSalary": 90000,
        "dueSalary": 10000
    })
}

pub fn teacher_body(email: &str) -> Value {
    json!({
        "name": "Teacher",
        "email": email,
        "password": TEST_PASSWORD,
        "department": "Physics",
        "city": "Pune",
        "state": "MH",
        "age": 32,
        "totalSalary": 50000,
        "dueSalary": 5000,
        "subjects": ["Mechanics", "Optics"]
    })
}

pub fn student_body(email: &str) -> Value {
    json!({
        "name": "Student",
        "email": email,
        "password": TEST_PASSWORD,
        "fatherName": "Father",
        "motherName": "Mother",
        "course": "BSc",
        "age": 19,
        "city": "Pune",
        "state": "MH",
        "totalCourseFee": 120000,
        "depositedFee": 20000,
        "dueFee": 100000
    })
}
