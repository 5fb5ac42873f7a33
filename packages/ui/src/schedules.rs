//! Branch -> scheduled programs view.

use api::types::ScheduleEntry;
use api::DataService;
use dioxus::prelude::*;

use crate::actions::{ActionRow, CardAction};
use crate::navigation::{program_schedule_path, RouteContext, RouteParams};
use crate::services::use_data_service;
use crate::status::{LoadFailed, LoadingCards};
use crate::view_state::{ViewError, ViewState};

const ADMISSION_CSS: Asset = asset!("/assets/styling/admission.css");

pub const BRANCH_ID_PARAM: &str = "branchId";

pub async fn load_branch_schedules(
    service: &dyn DataService,
    route: &dyn RouteContext,
) -> ViewState<Vec<ScheduleEntry>> {
    ViewState::settle("branch_schedules", fetch_branch_schedules(service, route).await)
}

async fn fetch_branch_schedules(
    service: &dyn DataService,
    route: &dyn RouteContext,
) -> Result<Vec<ScheduleEntry>, ViewError> {
    let branch_id = route
        .param(BRANCH_ID_PARAM)
        .ok_or(ViewError::MissingRouteParam(BRANCH_ID_PARAM))?;
    tracing::debug!("branch_schedules: branch_id={branch_id}");
    Ok(service.get_program_schedule_by_branch(&branch_id).await?)
}

pub fn schedule_actions(entry: &ScheduleEntry) -> Vec<CardAction> {
    vec![CardAction {
        label_key: "common.apply",
        path: program_schedule_path(&entry.scheduled_id),
        primary: true,
    }]
}

#[component]
pub fn BranchScheduleView(branch_id: String) -> Element {
    let lang = crate::use_lang()();
    let service = use_data_service();
    let state = use_resource(move || {
        let service = service.clone();
        let route = RouteParams::new().with(BRANCH_ID_PARAM, &branch_id);
        async move { load_branch_schedules(service.as_ref(), &route).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ADMISSION_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "schedules.title")} }
            }
            match state().unwrap_or(ViewState::Loading) {
                ViewState::Loading => rsx! { LoadingCards { count: 2 } },
                ViewState::Failed(err) => rsx! { LoadFailed { detail: err.to_string() } },
                ViewState::Empty(_) => rsx! {
                    p { class: "hint empty_state", {crate::t(lang, "schedules.empty")} }
                },
                ViewState::Populated(entries) => rsx! {
                    div { class: "card_grid",
                        for entry in entries {
                            ScheduleCard { key: "{entry.scheduled_id}", entry: entry.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ScheduleCard(entry: ScheduleEntry) -> Element {
    let lang = crate::use_lang()();
    let actions = schedule_actions(&entry);
    let d = entry.descriptor.clone();
    let facts = [
        ("schedules.branch", d.branch_name),
        ("schedules.institution", d.institution_name),
        ("schedules.college", d.college_name),
        ("schedules.program", d.program_name),
        ("schedules.course", d.course_name),
        ("common.eligibility", d.eligibility),
        ("common.duration", d.duration),
        ("schedules.degree", d.degree_offered),
        ("schedules.start", entry.start_date.to_string()),
        ("schedules.end", entry.end_date.to_string()),
    ];

    rsx! {
        div { class: "card",
            dl { class: "facts",
                for (key, value) in facts {
                    dt { {crate::t(lang, key)} }
                    dd { "{value}" }
                }
            }
            ActionRow { actions }
        }
    }
}
