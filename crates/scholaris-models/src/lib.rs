//! # Scholaris Models
//!
//! Records and DTOs for the four principals of the hierarchy.
//!
//! - [`directors`]: the hierarchy root, no approver
//! - [`hods`]: heads of department, approved by a Director
//! - [`teachers`]: approved by a HOD, carry subjects
//! - [`students`]: approved by a Teacher, carry fee bookkeeping
//! - [`auth`]: login and generic message payloads
//!
//! Records never carry the password hash; the wire format is camelCase
//! (`approvedBy`, `totalSalary`, `dueFee`, ...).

pub mod auth;
pub mod directors;
pub mod hods;
pub mod students;
pub mod teachers;

pub use auth::{LoginRequest, LoginResponse, MessageResponse};
pub use directors::{Director, RegisterDirectorDto};
pub use hods::{Hod, RegisterHodDto, UpdateHodSalaryDto};
pub use students::{
    RegisterStudentDto, Student, StudentRegisteredResponse, StudentResponse, StudentSummary,
    UpdateStudentFeeDto,
};
pub use teachers::{RegisterTeacherDto, Teacher, TeacherResponse, UpdateTeacherSalaryDto};
