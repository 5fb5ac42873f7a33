use dioxus::prelude::*;

/// Placeholder cards shown until a view settles.
#[component]
pub fn LoadingCards(count: usize) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        for _ in 0..count {
            div { class: "card skeleton",
                div { class: "card_top",
                    h3 { {crate::t(lang, "common.loading")} }
                }
                p { class: "summary", "…" }
            }
        }
    }
}

/// Generic failure panel; `detail` is the error text.
#[component]
pub fn LoadFailed(detail: String) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "panel",
            p { class: "error", {crate::t(lang, "common.load_failed")} }
            p { class: "hint", "{detail}" }
        }
    }
}
