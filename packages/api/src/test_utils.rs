//! In-memory [`DataService`] for tests.
//!
//! Unknown ids resolve to empty lists (and a `NotFound` program), matching what
//! the HTTP implementation reports for a backend 404.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::service::DataService;
use crate::types::{Course, Program, ScheduleEntry};

#[derive(Debug, Default)]
pub struct FakeDataService {
    programs: HashMap<String, Program>,
    courses: HashMap<String, Vec<Course>>,
    schedules: HashMap<String, Vec<ScheduleEntry>>,
    failure: Option<Error>,
    calls: RefCell<Vec<String>>,
}

impl FakeDataService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program_id: &str, program_name: &str) -> Self {
        self.programs.insert(
            program_id.to_string(),
            Program {
                program_id: program_id.to_string(),
                program_name: program_name.to_string(),
            },
        );
        self
    }

    pub fn with_courses(mut self, program_id: &str, courses: Vec<Course>) -> Self {
        self.courses.insert(program_id.to_string(), courses);
        self
    }

    pub fn with_schedules(mut self, branch_id: &str, schedules: Vec<ScheduleEntry>) -> Self {
        self.schedules.insert(branch_id.to_string(), schedules);
        self
    }

    /// Every call fails with `err`.
    pub fn failing(mut self, err: Error) -> Self {
        self.failure = Some(err);
        self
    }

    /// Calls made so far, as `operation:id`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DataService for FakeDataService {
    async fn find_program_by_id(&self, program_id: &str) -> Result<Program> {
        self.record(format!("find_program_by_id:{program_id}"))?;
        self.programs
            .get(program_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("program {program_id}")))
    }

    async fn find_courses_by_program_id(&self, program_id: &str) -> Result<Vec<Course>> {
        self.record(format!("find_courses_by_program_id:{program_id}"))?;
        Ok(self.courses.get(program_id).cloned().unwrap_or_default())
    }

    async fn get_program_schedule_by_branch(&self, branch_id: &str) -> Result<Vec<ScheduleEntry>> {
        self.record(format!("get_program_schedule_by_branch:{branch_id}"))?;
        Ok(self.schedules.get(branch_id).cloned().unwrap_or_default())
    }
}

/// A course with the given id and derived display fields.
pub fn course(id: &str) -> Course {
    Course {
        course_id: id.to_string(),
        course_name: format!("Course {id}"),
        eligibility: format!("Eligibility {id}"),
        duration: "1 Year".to_string(),
    }
}

/// A schedule entry running through 2024 with derived descriptor fields.
pub fn schedule(id: &str) -> ScheduleEntry {
    use crate::types::ScheduleDescriptor;
    use chrono::NaiveDate;

    ScheduleEntry {
        scheduled_id: id.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
        descriptor: ScheduleDescriptor {
            branch_name: format!("Branch {id}"),
            institution_name: format!("University {id}"),
            college_name: format!("College {id}"),
            program_name: format!("Program {id}"),
            course_name: format!("Course {id}"),
            eligibility: format!("Eligibility {id}"),
            duration: "1 Year".to_string(),
            degree_offered: format!("Degree {id}"),
        },
    }
}
