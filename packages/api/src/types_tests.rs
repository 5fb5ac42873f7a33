#![cfg(test)]

use crate::types::{Course, Program, ScheduleEntry};
use chrono::NaiveDate;
use serde_json::json;

#[test]
fn program_without_id_uses_empty_string() {
    let program: Program = serde_json::from_value(json!({ "programName": "Test Program" })).unwrap();
    assert_eq!(program.program_id, "");
    assert_eq!(program.program_name, "Test Program");
}

#[test]
fn numeric_ids_are_kept_as_text() {
    let course: Course = serde_json::from_value(json!({
        "courseId": 42,
        "courseName": "B.Tech",
        "eligibility": "12th pass",
        "duration": "4 Years",
        "collegeName": "ignored",
    }))
    .unwrap();
    assert_eq!(course.course_id, "42");
    assert_eq!(course.course_name, "B.Tech");
}

#[test]
fn schedule_entry_reads_backend_shape() {
    let entry: ScheduleEntry = serde_json::from_value(json!({
        "scheduledId": "1",
        "programScheduledResponseDto": {
            "branchName": "Branch 1",
            "name": "University 1",
            "collegeName": "College 1",
            "programName": "Program 1",
            "courseName": "Course 1",
            "eligibility": "Eligibility 1",
            "duration": "1 Year",
            "degreeOffered": "Degree 1",
        },
        "startDate": "2024-01-01",
        "endDate": "2024-12-31",
    }))
    .unwrap();

    assert_eq!(entry.scheduled_id, "1");
    assert_eq!(entry.descriptor.institution_name, "University 1");
    assert_eq!(entry.descriptor.degree_offered, "Degree 1");
    assert_eq!(entry.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(entry.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
}

#[test]
fn malformed_date_is_rejected() {
    let res = serde_json::from_value::<ScheduleEntry>(json!({
        "scheduledId": 7,
        "startDate": "01/01/2024",
        "endDate": "2024-12-31",
    }));
    assert!(res.is_err());
}
