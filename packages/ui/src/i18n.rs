use dioxus::prelude::*;

const JS_LOAD_LANG: &str = r#"
(function(){
  try {
    const saved = localStorage.getItem("admission_lang");
    if(saved && typeof saved === "string" && saved.length > 0) return saved;
  } catch(e) {}
  return "";
})()
"#;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "en-in" => Some(Lang::En),
            "fr" | "fr-fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    fn other(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::En);
    use_context_provider(|| lang);

    // Only a choice made with LangToggle overrides English.
    use_effect(move || {
        spawn(async move {
            if let Ok(v) = document::eval(JS_LOAD_LANG).await {
                if let Some(next) = v.as_str().and_then(saved_lang) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

/// The language stored by `LangToggle`, if any.
fn saved_lang(value: &str) -> Option<Lang> {
    Lang::from_code(value.trim())
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::warn!("missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

/// Nav button flipping between the two languages and remembering the choice.
#[component]
pub fn LangToggle() -> Element {
    let mut lang = use_lang();
    let current = lang();

    rsx! {
        button {
            class: "btn lang_toggle",
            title: t(current, "lang.label"),
            onclick: move |_| {
                let next = lang().other();
                lang.set(next);
                spawn(async move {
                    let _ = document::eval(&format!(
                        r#"(function(){{ try {{ localStorage.setItem("admission_lang","{}"); }} catch(e) {{}} return ""; }})()"#,
                        next.code()
                    ))
                    .await;
                });
            },
            {current.other().code().to_uppercase()}
        }
    }
}

/// Translate a key for a given language. Falls back to English if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav / common
        (Lang::En, "app.name") => "Online Admission".to_string(),
        (Lang::Fr, "app.name") => "Admission en ligne".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),
        (Lang::Fr, "lang.label") => "Langue".to_string(),
        (Lang::En, "common.loading") => "Loading…".to_string(),
        (Lang::Fr, "common.loading") => "Chargement…".to_string(),
        (Lang::En, "common.load_failed") => "Something went wrong while loading. Please try again later.".to_string(),
        (Lang::Fr, "common.load_failed") => "Une erreur est survenue pendant le chargement. Veuillez réessayer plus tard.".to_string(),
        (Lang::En, "common.not_found") => "Page not found".to_string(),
        (Lang::Fr, "common.not_found") => "Page introuvable".to_string(),
        (Lang::En, "common.home") => "Back to home".to_string(),
        (Lang::Fr, "common.home") => "Retour à l'accueil".to_string(),
        (Lang::En, "common.eligibility") => "Eligibility".to_string(),
        (Lang::Fr, "common.eligibility") => "Éligibilité".to_string(),
        (Lang::En, "common.duration") => "Duration".to_string(),
        (Lang::Fr, "common.duration") => "Durée".to_string(),
        (Lang::En, "common.apply") => "Apply Now".to_string(),
        (Lang::Fr, "common.apply") => "Postuler".to_string(),

        // Home
        (Lang::En, "home.subtitle") => "Find a program, pick a course, and apply to a scheduled intake at a branch near you.".to_string(),
        (Lang::Fr, "home.subtitle") => "Trouvez un programme, choisissez un cursus et postulez à une session dans l'antenne la plus proche.".to_string(),

        // Courses
        (Lang::En, "courses.title") => "Courses".to_string(),
        (Lang::Fr, "courses.title") => "Cursus".to_string(),
        (Lang::En, "courses.empty_in") => "No Course Found in {program}".to_string(),
        (Lang::Fr, "courses.empty_in") => "Aucun cursus trouvé dans {program}".to_string(),
        (Lang::En, "courses.view_branches") => "View Branches".to_string(),
        (Lang::Fr, "courses.view_branches") => "Voir les antennes".to_string(),

        // Branch schedules
        (Lang::En, "schedules.title") => "Program Schedules".to_string(),
        (Lang::Fr, "schedules.title") => "Sessions programmées".to_string(),
        (Lang::En, "schedules.empty") => "No Program Schedule Found".to_string(),
        (Lang::Fr, "schedules.empty") => "Aucune session programmée trouvée".to_string(),
        (Lang::En, "schedules.branch") => "Branch".to_string(),
        (Lang::Fr, "schedules.branch") => "Antenne".to_string(),
        (Lang::En, "schedules.institution") => "Institution".to_string(),
        (Lang::En, "schedules.college") => "College".to_string(),
        (Lang::Fr, "schedules.college") => "Établissement".to_string(),
        (Lang::En, "schedules.program") => "Program".to_string(),
        (Lang::Fr, "schedules.program") => "Programme".to_string(),
        (Lang::En, "schedules.course") => "Course".to_string(),
        (Lang::Fr, "schedules.course") => "Cursus".to_string(),
        (Lang::En, "schedules.degree") => "Degree Offered".to_string(),
        (Lang::Fr, "schedules.degree") => "Diplôme délivré".to_string(),
        (Lang::En, "schedules.start") => "Start Date".to_string(),
        (Lang::Fr, "schedules.start") => "Date de début".to_string(),
        (Lang::En, "schedules.end") => "End Date".to_string(),
        (Lang::Fr, "schedules.end") => "Date de fin".to_string(),

        // Fallback: use the English string if present, else show key.
        (Lang::Fr, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}
