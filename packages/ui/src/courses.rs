//! Program -> courses view.
//!
//! Resolves `programId` from the route, fetches the program name and its
//! courses together, then lists the courses with a "View Branches" and an
//! "Apply Now" control each.

use api::types::Course;
use api::DataService;
use dioxus::prelude::*;

use crate::actions::{ActionRow, CardAction};
use crate::navigation::{branch_path, schedule_by_course_path, RouteContext, RouteParams};
use crate::services::use_data_service;
use crate::status::{LoadFailed, LoadingCards};
use crate::view_state::{Listing, ViewError, ViewState};
use crate::Lang;

const ADMISSION_CSS: Asset = asset!("/assets/styling/admission.css");

pub const PROGRAM_ID_PARAM: &str = "programId";

#[derive(Debug, Clone, PartialEq)]
pub struct CourseListing {
    pub program_name: String,
    pub courses: Vec<Course>,
}

impl Listing for CourseListing {
    fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

pub async fn load_program_courses(
    service: &dyn DataService,
    route: &dyn RouteContext,
) -> ViewState<CourseListing> {
    ViewState::settle("program_courses", fetch_program_courses(service, route).await)
}

async fn fetch_program_courses(
    service: &dyn DataService,
    route: &dyn RouteContext,
) -> Result<CourseListing, ViewError> {
    let program_id = route
        .param(PROGRAM_ID_PARAM)
        .ok_or(ViewError::MissingRouteParam(PROGRAM_ID_PARAM))?;
    tracing::debug!("program_courses: program_id={program_id}");

    let (program, courses) = futures::join!(
        service.find_program_by_id(&program_id),
        service.find_courses_by_program_id(&program_id)
    );

    Ok(CourseListing {
        program_name: program?.program_name,
        courses: courses?,
    })
}

pub fn empty_courses_message(lang: Lang, program_name: &str) -> String {
    crate::t(lang, "courses.empty_in").replace("{program}", program_name)
}

/// "View Branches" then "Apply Now", both keyed on the course id.
pub fn course_actions(course: &Course) -> Vec<CardAction> {
    vec![
        CardAction {
            label_key: "courses.view_branches",
            path: branch_path(&course.course_id),
            primary: false,
        },
        CardAction {
            label_key: "common.apply",
            path: schedule_by_course_path(&course.course_id),
            primary: true,
        },
    ]
}

#[component]
pub fn ProgramCourseView(program_id: String) -> Element {
    let lang = crate::use_lang()();
    let service = use_data_service();
    let state = use_resource(move || {
        let service = service.clone();
        let route = RouteParams::new().with(PROGRAM_ID_PARAM, &program_id);
        async move { load_program_courses(service.as_ref(), &route).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ADMISSION_CSS }
        div { class: "page",
            match state().unwrap_or(ViewState::Loading) {
                ViewState::Loading => rsx! { LoadingCards { count: 3 } },
                ViewState::Failed(err) => rsx! { LoadFailed { detail: err.to_string() } },
                ViewState::Empty(listing) => rsx! {
                    p { class: "hint empty_state", {empty_courses_message(lang, &listing.program_name)} }
                },
                ViewState::Populated(listing) => rsx! {
                    div { class: "page_header",
                        h1 { "{listing.program_name}" }
                        span { class: "hint", {crate::t(lang, "courses.title")} }
                    }
                    div { class: "card_grid",
                        for course in listing.courses {
                            CourseCard { key: "{course.course_id}", course: course.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    let lang = crate::use_lang()();

    rsx! {
        div { class: "card",
            div { class: "card_top",
                h3 { "{course.course_name}" }
            }
            dl { class: "facts",
                dt { {crate::t(lang, "common.eligibility")} }
                dd { "{course.eligibility}" }
                dt { {crate::t(lang, "common.duration")} }
                dd { "{course.duration}" }
            }
            ActionRow { actions: course_actions(&course) }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::testing::{action_labelled, render_settled, RecordingNavigator};
    use api::test_utils::{course, FakeDataService};

    fn route(program_id: &str) -> RouteParams {
        RouteParams::new().with(PROGRAM_ID_PARAM, program_id)
    }

    fn courses_of_program_123() -> Element {
        rsx! {
            crate::I18nProvider {
                ProgramCourseView { program_id: "123" }
            }
        }
    }

    #[tokio::test]
    async fn renders_no_courses_message_when_no_courses_are_found() {
        let service = FakeDataService::new()
            .with_program("123", "Test Program")
            .with_courses("123", vec![]);

        let html = render_settled(
            courses_of_program_123,
            service,
            Rc::new(RecordingNavigator::default()),
        )
        .await;

        assert!(html.contains("No Course Found in Test Program"), "{html}");
        assert!(!html.contains("<button"), "{html}");
    }

    #[tokio::test]
    async fn renders_a_card_per_course_with_both_buttons() {
        let service = FakeDataService::new()
            .with_program("123", "Test Program")
            .with_courses("123", vec![course("1"), course("2")]);

        let html = render_settled(
            courses_of_program_123,
            service,
            Rc::new(RecordingNavigator::default()),
        )
        .await;

        assert!(html.contains("Test Program"), "{html}");
        assert!(html.contains("Course 1"), "{html}");
        assert!(html.contains("Course 2"), "{html}");
        assert!(html.contains(r#"data-path="/branch/1">View Branches</button>"#), "{html}");
        assert!(
            html.contains(r#"data-path="/programScheduledByCourse/1">Apply Now</button>"#),
            "{html}"
        );
        assert!(html.contains(r#"data-path="/branch/2">View Branches</button>"#), "{html}");

        let view = html.find("/branch/1").unwrap_or(usize::MAX);
        let apply = html.find("/programScheduledByCourse/1").unwrap_or(0);
        assert!(view < apply, "View Branches comes before Apply Now: {html}");
    }

    #[tokio::test]
    async fn unknown_program_renders_the_failure_panel() {
        let service = FakeDataService::new().with_courses("123", vec![course("1")]);

        let html = render_settled(
            courses_of_program_123,
            service,
            Rc::new(RecordingNavigator::default()),
        )
        .await;

        assert!(html.contains("Something went wrong while loading"), "{html}");
        assert!(!html.contains("Course 1"), "{html}");
    }

    #[tokio::test]
    async fn view_branches_navigates_to_branch_info() {
        let service = FakeDataService::new()
            .with_program("123", "Test Program")
            .with_courses("123", vec![course("1")]);
        let nav = RecordingNavigator::default();

        let ViewState::Populated(listing) = load_program_courses(&service, &route("123")).await
        else {
            panic!("expected populated state");
        };
        assert_eq!(listing.courses[0].course_name, "Course 1");

        action_labelled(&course_actions(&listing.courses[0]), "View Branches").run(&nav);
        assert_eq!(nav.paths(), vec!["/branch/1"]);
    }

    #[tokio::test]
    async fn apply_now_navigates_to_schedules_of_the_course() {
        let service = FakeDataService::new()
            .with_program("123", "Test Program")
            .with_courses("123", vec![course("1")]);
        let nav = RecordingNavigator::default();

        let ViewState::Populated(listing) = load_program_courses(&service, &route("123")).await
        else {
            panic!("expected populated state");
        };

        action_labelled(&course_actions(&listing.courses[0]), "Apply Now").run(&nav);
        assert_eq!(nav.paths(), vec!["/programScheduledByCourse/1"]);
    }

    #[tokio::test]
    async fn each_card_navigates_with_its_own_id() {
        let service = FakeDataService::new()
            .with_program("123", "Test Program")
            .with_courses("123", vec![course("7"), course("8"), course("9")]);
        let nav = RecordingNavigator::default();

        let ViewState::Populated(listing) = load_program_courses(&service, &route("123")).await
        else {
            panic!("expected populated state");
        };
        for c in listing.courses.iter().rev() {
            for action in course_actions(c) {
                action.run(&nav);
            }
        }

        assert_eq!(
            nav.paths(),
            vec![
                "/branch/9",
                "/programScheduledByCourse/9",
                "/branch/8",
                "/programScheduledByCourse/8",
                "/branch/7",
                "/programScheduledByCourse/7",
            ]
        );
    }

    #[test]
    fn apply_now_is_the_primary_control() {
        let actions = course_actions(&course("1"));
        assert_eq!(
            actions.iter().map(|a| a.primary).collect::<Vec<_>>(),
            vec![false, true]
        );
    }

    #[tokio::test]
    async fn fetches_program_and_courses_for_the_route_id() {
        let service = FakeDataService::new()
            .with_program("123", "Test Program")
            .with_courses("123", vec![course("1")]);

        let _ = load_program_courses(&service, &route("123")).await;

        let calls = service.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&"find_program_by_id:123".to_string()));
        assert!(calls.contains(&"find_courses_by_program_id:123".to_string()));
    }

    #[tokio::test]
    async fn missing_program_id_fails_without_fetching() {
        let service = FakeDataService::new();

        let state = load_program_courses(&service, &RouteParams::new()).await;

        assert_eq!(
            state,
            ViewState::Failed(ViewError::MissingRouteParam(PROGRAM_ID_PARAM))
        );
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn service_failure_settles_as_failed() {
        let service = FakeDataService::new().failing(api::Error::Status {
            status: 503,
            url: "http://backend/api/program/123".to_string(),
        });

        let state = load_program_courses(&service, &route("123")).await;

        assert!(matches!(
            state,
            ViewState::Failed(ViewError::Service(api::Error::Status { status: 503, .. }))
        ));
    }

    #[tokio::test]
    async fn unknown_program_is_a_failure_not_an_empty_list() {
        let service = FakeDataService::new().with_courses("123", vec![course("1")]);

        let state = load_program_courses(&service, &route("123")).await;

        assert_eq!(
            state,
            ViewState::Failed(ViewError::Service(api::Error::not_found("program 123")))
        );
    }

    #[test]
    fn empty_message_is_translated() {
        assert_eq!(
            empty_courses_message(Lang::Fr, "Ingénierie"),
            "Aucun cursus trouvé dans Ingénierie"
        );
    }
}
