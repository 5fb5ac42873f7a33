use api::config::{ApiConfig, AppMode};
use api::HttpDataService;
use dioxus::prelude::*;
use tracing::{error, info, Level};

use views::{BranchSchedules, Home, PageNotFound, ProgramCourses};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/program/:program_id")]
    ProgramCourses { program_id: String },
    #[route("/programScheduleByBranch/:branch_id")]
    BranchSchedules { branch_id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let mode = AppMode::from_env();
    let level = match mode {
        AppMode::Local => Level::DEBUG,
        AppMode::Production => Level::INFO,
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("startup: logger already installed: {err}");
    }
    info!("startup: mode={mode:?}");
    dioxus::launch(App);
}

/// The REST client every view uses. A bad `ADMISSION_API_URL` is logged and
/// replaced by the default so the UI still renders.
fn connect_backend() -> HttpDataService {
    match HttpDataService::from_env() {
        Ok(service) => {
            info!("startup: api={}", redact_url(service.base_url()));
            service
        }
        Err(err) => {
            let fallback = ApiConfig::default();
            error!("startup: {err}; using {}", fallback.base_url);
            HttpDataService::new(fallback)
        }
    }
}

/// Hide credentials embedded in a URL before it reaches the logs.
fn redact_url(value: &str) -> String {
    if let Some((prefix, rest)) = value.split_once("://") {
        if let Some((creds, host)) = rest.split_once('@') {
            let user = creds.split(':').next().unwrap_or("user");
            return format!("{prefix}://{user}:***@{host}");
        }
    }
    value.to_string()
}

#[component]
fn App() -> Element {
    ui::use_data_service_provider(connect_backend);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "admission_nav",
            div { class: "admission_nav_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                div { class: "nav_links", ui::LangToggle {} }
            }
        }
        div { class: "admission_container route_view", Outlet::<Route> {} }
    }
}
