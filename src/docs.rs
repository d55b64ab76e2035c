use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use scholaris_auth::Claims;
use scholaris_core::Role;
use scholaris_models::{
    Director, Hod, LoginRequest, LoginResponse, MessageResponse, RegisterDirectorDto,
    RegisterHodDto, RegisterStudentDto, RegisterTeacherDto, Student, StudentRegisteredResponse,
    StudentResponse, StudentSummary, Teacher, TeacherResponse, UpdateHodSalaryDto,
    UpdateStudentFeeDto, UpdateTeacherSalaryDto,
};

use crate::modules::dashboard::controller::DashboardResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_director,
        crate::modules::auth::controller::login_hod,
        crate::modules::auth::controller::login_teacher,
        crate::modules::auth::controller::login_student,
        crate::modules::directors::controller::register_director,
        crate::modules::hods::controller::register_hod,
        crate::modules::hods::controller::get_hods,
        crate::modules::hods::controller::update_hod_salary,
        crate::modules::hods::controller::delete_hod,
        crate::modules::teachers::controller::register_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::update_teacher_salary,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::students::controller::register_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::update_student_fee,
        crate::modules::students::controller::delete_student,
        crate::modules::dashboard::controller::get_dashboard,
    ),
    components(
        schemas(
            Role,
            Claims,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            Director,
            RegisterDirectorDto,
            Hod,
            RegisterHodDto,
            UpdateHodSalaryDto,
            Teacher,
            RegisterTeacherDto,
            UpdateTeacherSalaryDto,
            TeacherResponse,
            Student,
            StudentSummary,
            RegisterStudentDto,
            UpdateStudentFeeDto,
            StudentRegisteredResponse,
            StudentResponse,
            DashboardResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login for each of the four roles"),
        (name = "Directors", description = "Hierarchy root registration"),
        (name = "HODs", description = "Heads of department, managed by Directors"),
        (name = "Teachers", description = "Teachers, managed by HODs"),
        (name = "Students", description = "Students and fees, managed by Teachers"),
        (name = "Dashboard", description = "Decoded token of the caller")
    ),
    info(
        title = "Scholaris API",
        version = "0.1.0",
        description = "Role-hierarchical school administration API: Director, HOD, Teacher, Student.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
