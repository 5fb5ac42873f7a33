use std::rc::Rc;

use api::config::ApiConfig;
use api::{DataService, HttpDataService};
use dioxus::prelude::*;

/// Install the data service every view below this component will use.
pub fn use_data_service_provider<S, F>(init: F) -> Rc<dyn DataService>
where
    S: DataService + 'static,
    F: FnOnce() -> S,
{
    use_context_provider(move || Rc::new(init()) as Rc<dyn DataService>)
}

pub fn use_data_service() -> Rc<dyn DataService> {
    if let Some(service) = try_use_context::<Rc<dyn DataService>>() {
        return service;
    }

    // No provider above this component.
    tracing::warn!("missing data service context, using {}", ApiConfig::default().base_url);
    use_hook(|| Rc::new(HttpDataService::new(ApiConfig::default())) as Rc<dyn DataService>)
}
