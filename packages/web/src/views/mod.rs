mod home;
pub use home::Home;

mod program_courses;
pub use program_courses::ProgramCourses;

mod branch_schedules;
pub use branch_schedules::BranchSchedules;

mod not_found;
pub use not_found::PageNotFound;
