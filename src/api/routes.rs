//! API route configuration.
//!
//! Session authentication runs in a reverse proxy in front of this service;
//! the authenticated user id is forwarded in the `x-user-id` header and
//! re-validated by the services.

use crate::api::handlers::{
    bulk_create_faculty_handler, bulk_create_interviewer_handler, bulk_create_university_handler,
    bulk_create_user_handler, bulk_update_interviewer_handler, create_department_handler,
    create_deviation_value_handler, create_faculty_handler, create_interviewer_handler,
    create_university_handler, create_user_handler, delete_department_handler,
    delete_deviation_value_handler, delete_faculty_handler, delete_interviewer_handler,
    delete_university_handler, delete_user_handler, get_department_handler, get_faculty_handler,
    get_interviewer_handler, get_university_handler, get_user_handler, update_department_handler,
    update_deviation_value_handler, update_faculty_handler, update_interviewer_handler,
    update_university_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /universities`          - Create a university (optional rank)
/// - `POST   /universities/bulk`     - University + rank + faculties as one unit
/// - `GET    /universities/{id}`     - Retrieve a university with its rank
/// - `PUT    /universities/{id}`     - Update (omitted rank is deleted)
/// - `DELETE /universities/{id}`     - Delete a university
/// - `POST   /faculties`             - Create a faculty
/// - `POST   /faculties/bulk`        - Batch create with duplicate recovery
/// - `GET    /faculties/{id}`        - Retrieve a faculty
/// - `PUT    /faculties/{id}`        - Rename a faculty
/// - `DELETE /faculties/{id}`        - Delete a faculty
/// - `POST   /faculties/{id}/deviation-value` - Record a deviation value
/// - `PUT    /faculties/{id}/deviation-value` - Update the deviation value
/// - `DELETE /faculties/{id}/deviation-value` - Remove the deviation value
/// - `POST   /interviewers`          - Register an interviewer
/// - `POST   /interviewers/bulk`     - Batch register (all-or-nothing)
/// - `PUT    /interviewers/bulk`     - Batch update (all-or-nothing)
/// - `GET    /interviewers/{user_id}` - Retrieve an interviewer
/// - `PUT    /interviewers/{user_id}` - Update an interviewer
/// - `DELETE /interviewers/{user_id}` - Remove an interviewer
/// - `POST   /users`                 - Create a user
/// - `POST   /users/bulk`            - Batch create (best-effort)
/// - `GET    /users/{id}`            - Retrieve a user
/// - `PUT    /users/{id}`            - Update a user
/// - `DELETE /users/{id}`            - Delete a user
/// - `POST   /departments`           - Create a department
/// - `GET    /departments/{id}`      - Retrieve a department
/// - `PUT    /departments/{id}`      - Rename a department
/// - `DELETE /departments/{id}`      - Delete a department (blocked while in use)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/universities", post(create_university_handler))
        .route("/universities/bulk", post(bulk_create_university_handler))
        .route(
            "/universities/{id}",
            get(get_university_handler)
                .put(update_university_handler)
                .delete(delete_university_handler),
        )
        .route("/faculties", post(create_faculty_handler))
        .route("/faculties/bulk", post(bulk_create_faculty_handler))
        .route(
            "/faculties/{id}",
            get(get_faculty_handler)
                .put(update_faculty_handler)
                .delete(delete_faculty_handler),
        )
        .route(
            "/faculties/{id}/deviation-value",
            post(create_deviation_value_handler)
                .put(update_deviation_value_handler)
                .delete(delete_deviation_value_handler),
        )
        .route("/interviewers", post(create_interviewer_handler))
        .route(
            "/interviewers/bulk",
            post(bulk_create_interviewer_handler).put(bulk_update_interviewer_handler),
        )
        .route(
            "/interviewers/{user_id}",
            get(get_interviewer_handler)
                .put(update_interviewer_handler)
                .delete(delete_interviewer_handler),
        )
        .route("/users", post(create_user_handler))
        .route("/users/bulk", post(bulk_create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/departments", post(create_department_handler))
        .route(
            "/departments/{id}",
            get(get_department_handler)
                .put(update_department_handler)
                .delete(delete_department_handler),
        )
}
