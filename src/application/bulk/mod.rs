//! Bulk orchestration services.
//!
//! Multi-record workflows that create or update related records as one
//! logical unit. Transactional policy differs per entity on purpose:
//!
//! - University bulk create: find-or-create with duplicate recovery;
//!   university + rank commit together when both are new.
//! - Faculty bulk create: sequential per-item attempts with duplicate
//!   recovery; a non-recoverable error aborts the call.
//! - Interviewer bulk create/update: all-or-nothing in one transaction.
//! - User bulk create: best-effort, one bad row never blocks the rest.
//!
//! Duplicate recovery always re-reads the authoritative row — a racing
//! writer may have changed other fields between the conflict and the
//! re-read.

pub mod faculty_bulk_service;
pub mod interviewer_bulk_service;
pub mod university_bulk_service;
pub mod user_bulk_service;

pub use faculty_bulk_service::{FacultyBulkItem, FacultyBulkService, FacultyWithDeviation};
pub use interviewer_bulk_service::{InterviewerBulkItem, InterviewerBulkService};
pub use university_bulk_service::{
    UniversityBulkInput, UniversityBulkResult, UniversityBulkService,
};
pub use user_bulk_service::{UserBulkFailure, UserBulkItem, UserBulkOutcome, UserBulkService};
