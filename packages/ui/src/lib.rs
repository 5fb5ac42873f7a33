//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod i18n;
pub use i18n::{t, use_lang, I18nProvider, Lang, LangToggle};

mod navigation;
pub use navigation::{
    branch_path, program_schedule_path, schedule_by_course_path, use_navigator, Navigator,
    RouteContext, RouteParams,
};

mod actions;
pub use actions::{ActionRow, CardAction};

mod services;
pub use services::{use_data_service, use_data_service_provider};

mod status;
pub use status::{LoadFailed, LoadingCards};

mod view_state;
pub use view_state::{Listing, ViewError, ViewState};

mod courses;
pub use courses::{
    course_actions, empty_courses_message, load_program_courses, CourseListing, ProgramCourseView,
    PROGRAM_ID_PARAM,
};

mod schedules;
pub use schedules::{load_branch_schedules, schedule_actions, BranchScheduleView, BRANCH_ID_PARAM};

#[cfg(test)]
mod testing;
