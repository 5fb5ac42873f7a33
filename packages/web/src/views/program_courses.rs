use dioxus::prelude::*;

#[component]
pub fn ProgramCourses(program_id: String) -> Element {
    rsx! { ui::ProgramCourseView { program_id } }
}
