//! Shared application state wired from the PostgreSQL repositories.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::bulk::{
    FacultyBulkService, InterviewerBulkService, UniversityBulkService, UserBulkService,
};
use crate::application::services::{
    DepartmentService, DeviationValueService, FacultyService, InterviewerService,
    UniversityService, UserService,
};
use crate::infrastructure::persistence::{
    PgDepartmentRepository, PgDeviationValueRepository, PgFacultyRepository,
    PgInterviewerRepository, PgUniversityRankRepository, PgUniversityRepository, PgUserRepository,
};

pub type UniversitySvc = UniversityService<PgUniversityRepository, PgUniversityRankRepository>;
pub type FacultySvc = FacultyService<PgFacultyRepository>;
pub type DeviationValueSvc = DeviationValueService<PgDeviationValueRepository>;
pub type InterviewerSvc = InterviewerService<PgInterviewerRepository>;
pub type UserSvc = UserService<PgUserRepository>;
pub type DepartmentSvc = DepartmentService<PgDepartmentRepository>;
pub type UniversityBulkSvc = UniversityBulkService<
    PgUniversityRepository,
    PgUniversityRankRepository,
    PgFacultyRepository,
    PgDeviationValueRepository,
>;
pub type FacultyBulkSvc = FacultyBulkService<PgFacultyRepository, PgDeviationValueRepository>;
pub type InterviewerBulkSvc = InterviewerBulkService<PgInterviewerRepository>;
pub type UserBulkSvc = UserBulkService<PgUserRepository>;

/// Application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub university_service: Arc<UniversitySvc>,
    pub faculty_service: Arc<FacultySvc>,
    pub deviation_value_service: Arc<DeviationValueSvc>,
    pub interviewer_service: Arc<InterviewerSvc>,
    pub user_service: Arc<UserSvc>,
    pub department_service: Arc<DepartmentSvc>,
    pub university_bulk_service: Arc<UniversityBulkSvc>,
    pub faculty_bulk_service: Arc<FacultyBulkSvc>,
    pub interviewer_bulk_service: Arc<InterviewerBulkSvc>,
    pub user_bulk_service: Arc<UserBulkSvc>,
}

impl AppState {
    /// Wires services to PostgreSQL-backed repositories.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let university_repository = Arc::new(PgUniversityRepository::new(pool.clone()));
        let rank_repository = Arc::new(PgUniversityRankRepository::new(pool.clone()));
        let faculty_repository = Arc::new(PgFacultyRepository::new(pool.clone()));
        let deviation_value_repository = Arc::new(PgDeviationValueRepository::new(pool.clone()));
        let interviewer_repository = Arc::new(PgInterviewerRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let department_repository = Arc::new(PgDepartmentRepository::new(pool));

        let faculty_bulk_service = Arc::new(FacultyBulkService::new(
            faculty_repository.clone(),
            deviation_value_repository.clone(),
        ));

        Self {
            university_service: Arc::new(UniversityService::new(
                university_repository.clone(),
                rank_repository.clone(),
            )),
            faculty_service: Arc::new(FacultyService::new(faculty_repository.clone())),
            deviation_value_service: Arc::new(DeviationValueService::new(
                deviation_value_repository.clone(),
            )),
            interviewer_service: Arc::new(InterviewerService::new(
                interviewer_repository.clone(),
            )),
            user_service: Arc::new(UserService::new(user_repository.clone())),
            department_service: Arc::new(DepartmentService::new(department_repository)),
            university_bulk_service: Arc::new(UniversityBulkService::new(
                university_repository,
                rank_repository,
                faculty_bulk_service.clone(),
            )),
            faculty_bulk_service,
            interviewer_bulk_service: Arc::new(InterviewerBulkService::new(
                interviewer_repository,
            )),
            user_bulk_service: Arc::new(UserBulkService::new(user_repository)),
        }
    }
}
