use dioxus::prelude::*;

use store::AppConfig;
use views::{Home, Login, Notice, Shell, Signup, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/tasks")]
        Tasks {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../taskdeck.toml");

/// Embedded config, with `TASKDECK_API_URL` (read at build time) taking
/// precedence for the API base URL.
fn app_config() -> AppConfig {
    AppConfig::resolve(CONFIG_TOML, option_env!("TASKDECK_API_URL"))
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(app_config);
    use_context_provider(|| Signal::new(Notice::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ApiProvider {
            config: config.api.clone(),
            ui::SessionProvider {
                namespace: config.session.namespace.clone(),
                Router::<Route> {}
            }
        }
    }
}

/// Unknown paths go back to the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Tasks {}.to_string(), "/tasks");
        assert_eq!("/signup".parse::<Route>().unwrap(), Route::Signup {});
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert!(matches!(
            "/somewhere/else".parse::<Route>().unwrap(),
            Route::NotFound { .. }
        ));
    }
}
