//! All-or-nothing interviewer batch operations.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::{Interviewer, InterviewerCategory};
use crate::domain::repositories::InterviewerRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// One interviewer row in a batch request.
#[derive(Debug, Clone)]
pub struct InterviewerBulkItem {
    pub user_id: String,
    pub category: InterviewerCategory,
    pub university_id: Option<String>,
    pub faculty_id: Option<String>,
}

/// Batch registration and update of interviewers.
///
/// Interviewer batches are small and curated, so the whole batch commits in
/// one transaction: a single bad row rejects everything. This is the
/// opposite policy from user bulk creation, where one bad CSV row must not
/// block the rest.
pub struct InterviewerBulkService<I: InterviewerRepository> {
    repository: Arc<I>,
}

impl<I: InterviewerRepository> InterviewerBulkService<I> {
    /// Creates a new interviewer bulk service.
    pub fn new(repository: Arc<I>) -> Self {
        Self { repository }
    }

    /// Registers a batch of interviewers in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the operator is missing or any
    /// item fails value validation. Any repository error aborts the whole
    /// batch.
    pub async fn create(
        &self,
        operator: Option<&str>,
        items: Vec<InterviewerBulkItem>,
    ) -> Result<Vec<Interviewer>, AppError> {
        let by = require_operator(operator)?;

        let mut batch = Vec::with_capacity(items.len());
        for item in items {
            batch.push(Interviewer::create(
                &item.user_id,
                item.category,
                item.university_id.as_deref(),
                item.faculty_id.as_deref(),
                &by,
            )?);
        }

        let created = self.repository.create_all(batch).await?;
        metrics::counter!("interviewer_bulk_created_total").increment(created.len() as u64);
        Ok(created)
    }

    /// Updates a batch of interviewers in one transaction.
    ///
    /// Every `user_id` must already be registered as an interviewer; the
    /// batch is validated in full before any write, so a single unknown id
    /// rejects everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when any user in the batch is not an
    /// interviewer — nothing is written in that case.
    pub async fn update(
        &self,
        operator: Option<&str>,
        items: Vec<InterviewerBulkItem>,
    ) -> Result<Vec<Interviewer>, AppError> {
        let by = require_operator(operator)?;

        let mut batch = Vec::with_capacity(items.len());
        for item in items {
            let user_id = Id::required(&item.user_id, "user id")?;
            let mut interviewer = self
                .repository
                .find_by_user_id(&user_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(
                        "Interviewer not found",
                        json!({ "user_id": user_id.as_str() }),
                    )
                })?;

            interviewer.change_category(item.category, &by);
            interviewer.change_educational_background(
                item.university_id.as_deref(),
                item.faculty_id.as_deref(),
                &by,
            )?;
            batch.push(interviewer);
        }

        let updated = self.repository.update_all(batch).await?;
        metrics::counter!("interviewer_bulk_updated_total").increment(updated.len() as u64);
        Ok(updated)
    }
}
