use api::ApiClient;
use dioxus::prelude::*;
use store::config::ApiConfig;

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Builds one [`ApiClient`] for the whole tree from `config`.
#[component]
pub fn ApiProvider(config: ApiConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::debug!("API base URL: {}", config.base_url);
        ApiClient::new(&config)
    });

    rsx! {
        {children}
    }
}
