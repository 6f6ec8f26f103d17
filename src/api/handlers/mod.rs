//! HTTP request handlers.

pub mod departments;
pub mod faculties;
pub mod health;
pub mod interviewers;
pub mod universities;
pub mod users;

pub use departments::{
    create_department_handler, delete_department_handler, get_department_handler,
    update_department_handler,
};
pub use faculties::{
    bulk_create_faculty_handler, create_deviation_value_handler, create_faculty_handler,
    delete_deviation_value_handler, delete_faculty_handler, get_faculty_handler,
    update_deviation_value_handler, update_faculty_handler,
};
pub use health::health_handler;
pub use interviewers::{
    bulk_create_interviewer_handler, bulk_update_interviewer_handler, create_interviewer_handler,
    delete_interviewer_handler, get_interviewer_handler, update_interviewer_handler,
};
pub use universities::{
    bulk_create_university_handler, create_university_handler, delete_university_handler,
    get_university_handler, update_university_handler,
};
pub use users::{
    bulk_create_user_handler, create_user_handler, delete_user_handler, get_user_handler,
    update_user_handler,
};
