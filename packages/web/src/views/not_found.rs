use dioxus::prelude::*;

/// Catch-all, also reached by links into pages this app does not serve yet.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let lang = ui::use_lang()();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "panel",
            h1 { {ui::t(lang, "common.not_found")} }
            p { class: "hint", "{path}" }
            a { class: "btn", href: "/", {ui::t(lang, "common.home")} }
        }
    }
}
