//! Core domain entities representing the recruitment data model.
//!
//! Entities wrap validated value objects and expose behavior methods that are
//! the only way to mutate state. Each behavior method revalidates its input,
//! applies the change only when it differs from the current state, and stamps
//! `updated_at`/`updated_by`. Identity comparison is by primary key.
//!
//! # Entity Types
//!
//! - [`University`] / [`UniversityRank`] - universities and their priority band
//! - [`Faculty`] / [`DeviationValue`] - faculties and their deviation values
//! - [`Department`] / [`User`] / [`Interviewer`] - organization and accounts

pub mod department;
pub mod deviation_value;
pub mod faculty;
pub mod interviewer;
pub mod university;
pub mod university_rank;
pub mod user;

pub use department::Department;
pub use deviation_value::DeviationValue;
pub use faculty::Faculty;
pub use interviewer::{Interviewer, InterviewerCategory};
pub use university::University;
pub use university_rank::{RankLevel, UniversityRank};
pub use user::{Gender, User, UserRole};
