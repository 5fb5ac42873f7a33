//! Test doubles and a headless renderer for the views.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::test_utils::FakeDataService;
use api::DataService;
use dioxus::prelude::*;

use crate::actions::CardAction;
use crate::navigation::Navigator;

/// Remembers every path it was asked to go to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

/// Mount `root` with `service` and `nav` injected, let its resources settle,
/// and return the HTML.
pub async fn render_settled(
    root: fn() -> Element,
    service: FakeDataService,
    nav: Rc<RecordingNavigator>,
) -> String {
    let mut dom = VirtualDom::new(root)
        .with_root_context(Rc::new(service) as Rc<dyn DataService>)
        .with_root_context(nav as Rc<dyn Navigator>);
    dom.rebuild_in_place();

    for _ in 0..4 {
        let work = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }

    dioxus_ssr::render(&dom)
}

/// The action whose English label reads `label`, like a user picking a button
/// by its text.
pub fn action_labelled<'a>(actions: &'a [CardAction], label: &str) -> &'a CardAction {
    actions
        .iter()
        .find(|action| crate::t(crate::Lang::En, action.label_key) == label)
        .unwrap_or_else(|| panic!("no action labelled {label:?}"))
}
