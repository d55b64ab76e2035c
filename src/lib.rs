//! # Scholaris API
//!
//! A REST API built with Rust, Axum and SQLite for a role-hierarchical school
//! administration: Directors manage HODs, HODs manage Teachers, Teachers
//! manage Students. Salaries and course fees are tracked along the way.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor and exact-role guards
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login for every role
//! │   ├── directors/   # Director registration
//! │   ├── hods/        # HOD registration, listing, salary, deletion
//! │   ├── teachers/    # Teacher registration, listing, salary, deletion
//! │   ├── students/    # Student registration, listing, fees, deletion
//! │   └── dashboard/   # Decoded token of the caller
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Route table, CORS, request logging
//! ├── state.rs          # Shared application state
//! └── validator.rs      # ValidatedJson extractor
//! ```
//!
//! Support crates live under `crates/`: `scholaris-core` (errors, roles,
//! password hashing), `scholaris-config`, `scholaris-auth` (tokens),
//! `scholaris-models`, `scholaris-db` (pool and migrations),
//! `scholaris-observability` and `scholaris-cli`.
//!
//! ## Role Hierarchy
//!
//! ```text
//! Director (self-registered or CLI-created, no approver)
//!     ↓ registers
//! HOD (approvedBy = Director id)
//!     ↓ registers
//! Teacher (approvedBy = HOD id)
//!     ↓ registers
//! Student (approvedBy = Teacher id)
//! ```
//!
//! Only the immediate superior may register, list, update or delete a
//! role's records. Guards match the role exactly, so a Director token is
//! refused on HOD-only routes.
//!
//! ## Authentication
//!
//! `POST /api/auth/login/{director,hod,teacher,student}` returns a token with
//! claims `{id, name, role, iat, exp}` valid for one day. Protected routes
//! expect `Authorization: Bearer <token>`.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://scholaris.db?mode=rwc
//! JWT_SECRET=your-secure-secret-key
//! PORT=5000
//! ```
//!
//! ```bash
//! cargo run --bin scholaris-cli -- create-director
//! cargo run
//! ```
//!
//! API documentation is served at `/scalar` and `/api-docs/openapi.json`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use scholaris_auth;
pub use scholaris_config;
pub use scholaris_core;
pub use scholaris_db;
pub use scholaris_models;
