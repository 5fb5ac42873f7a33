//! Capabilities the views use to read the current route and move to another one.

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::{navigator, try_use_context};
use dioxus::router::Navigator as RouterNavigator;

/// Performs a client-side URL transition.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Path parameters of the current route.
pub trait RouteContext {
    fn param(&self, name: &str) -> Option<String>;
}

impl Navigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        tracing::debug!("navigate: path={path}");
        if self.push(path).is_some() {
            tracing::warn!("navigate: router refused path={path}");
        }
    }
}

/// Route parameters captured from a typed route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }
}

impl RouteContext for RouteParams {
    fn param(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

pub fn branch_path(course_id: &str) -> String {
    format!("/branch/{course_id}")
}

pub fn schedule_by_course_path(course_id: &str) -> String {
    format!("/programScheduledByCourse/{course_id}")
}

pub fn program_schedule_path(scheduled_id: &str) -> String {
    format!("/program-schedule/{scheduled_id}")
}

/// The injected navigator if one was provided, else the router's.
pub fn use_navigator() -> Rc<dyn Navigator> {
    try_use_context::<Rc<dyn Navigator>>().unwrap_or_else(|| Rc::new(navigator()))
}
