//! Repository trait definitions for the domain layer.
//!
//! Traits here define the persistence contract for each entity; concrete
//! implementations live in `crate::infrastructure::persistence`. Storage
//! conflicts are translated at the implementation boundary into typed
//! [`crate::error::AppError`] values — not-found, duplicate, and
//! dependents-exist — so services never match on engine-specific errors.
//! Unrecognized storage errors pass through as internal errors.
//!
//! # Available Repositories
//!
//! - [`UniversityRepository`] / [`UniversityRankRepository`]
//! - [`FacultyRepository`] / [`DeviationValueRepository`]
//! - [`DepartmentRepository`] / [`UserRepository`] / [`InterviewerRepository`]
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod department_repository;
pub mod deviation_value_repository;
pub mod faculty_repository;
pub mod interviewer_repository;
pub mod university_rank_repository;
pub mod university_repository;
pub mod user_repository;

pub use department_repository::DepartmentRepository;
pub use deviation_value_repository::DeviationValueRepository;
pub use faculty_repository::FacultyRepository;
pub use interviewer_repository::InterviewerRepository;
pub use university_rank_repository::UniversityRankRepository;
pub use university_repository::UniversityRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
#[cfg(test)]
pub use deviation_value_repository::MockDeviationValueRepository;
#[cfg(test)]
pub use faculty_repository::MockFacultyRepository;
#[cfg(test)]
pub use interviewer_repository::MockInterviewerRepository;
#[cfg(test)]
pub use university_rank_repository::MockUniversityRankRepository;
#[cfg(test)]
pub use university_repository::MockUniversityRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
