use dioxus::prelude::*;

#[component]
pub fn BranchSchedules(branch_id: String) -> Element {
    rsx! { ui::BranchScheduleView { branch_id } }
}
