//! Single-record CRUD services, one per entity.

pub mod department_service;
pub mod deviation_value_service;
pub mod faculty_service;
pub mod interviewer_service;
pub mod university_service;
pub mod user_service;

pub use department_service::DepartmentService;
pub use deviation_value_service::DeviationValueService;
pub use faculty_service::FacultyService;
pub use interviewer_service::InterviewerService;
pub use university_service::UniversityService;
pub use user_service::UserService;
