use std::rc::Rc;

use dioxus::prelude::*;

use crate::navigation::{use_navigator, Navigator};

/// One card control: what it says and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub label_key: &'static str,
    pub path: String,
    pub primary: bool,
}

impl CardAction {
    pub fn run(&self, nav: &dyn Navigator) {
        nav.go_to(&self.path);
    }

    fn class(&self) -> &'static str {
        if self.primary {
            "btn primary"
        } else {
            "btn"
        }
    }
}

/// Buttons for `actions`, in order; each shows its label and goes to its path.
#[component]
pub fn ActionRow(actions: Vec<CardAction>) -> Element {
    let lang = crate::use_lang()();
    let nav: Rc<dyn Navigator> = use_navigator();

    rsx! {
        div { class: "cta_row",
            for action in actions {
                button {
                    key: "{action.label_key}",
                    class: action.class(),
                    "data-path": "{action.path}",
                    onclick: {
                        let nav = nav.clone();
                        let action = action.clone();
                        move |_| action.run(nav.as_ref())
                    },
                    {crate::t(lang, action.label_key)}
                }
            }
        }
    }
}
