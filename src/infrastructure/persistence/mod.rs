//! PostgreSQL repository implementations.
//!
//! Each repository translates storage conflicts into typed
//! [`crate::error::AppError`] values at this boundary: unique-constraint
//! violations become duplicate conflicts, foreign-key violations become
//! missing-parent not-found errors on write and dependents-exist conflicts
//! on delete. See [`db_error`] for the classification helpers.

pub mod db_error;
pub mod pg_department_repository;
pub mod pg_deviation_value_repository;
pub mod pg_faculty_repository;
pub mod pg_interviewer_repository;
pub mod pg_university_rank_repository;
pub mod pg_university_repository;
pub mod pg_user_repository;

pub use pg_department_repository::PgDepartmentRepository;
pub use pg_deviation_value_repository::PgDeviationValueRepository;
pub use pg_faculty_repository::PgFacultyRepository;
pub use pg_interviewer_repository::PgInterviewerRepository;
pub use pg_university_rank_repository::PgUniversityRankRepository;
pub use pg_university_repository::PgUniversityRepository;
pub use pg_user_repository::PgUserRepository;
