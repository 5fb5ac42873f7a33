use crate::error::Result;
use crate::types::{Course, Program, ScheduleEntry};
use async_trait::async_trait;

/// Read-only access to the admission backend.
///
/// Futures are not `Send`: in the browser the HTTP client is backed by
/// `fetch`, which lives on the single UI thread.
#[async_trait(?Send)]
pub trait DataService {
    async fn find_program_by_id(&self, program_id: &str) -> Result<Program>;

    async fn find_courses_by_program_id(&self, program_id: &str) -> Result<Vec<Course>>;

    async fn get_program_schedule_by_branch(&self, branch_id: &str) -> Result<Vec<ScheduleEntry>>;
}
