use dioxus::prelude::*;

use crate::session::{use_session, LogoutButton};

const UI_CSS: Asset = asset!("/assets/ui.css");

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "TaskDeck" }
            div { class: "navbar-links", {children} }
        }
    }
}

/// Greeting and logout for the signed-in user; empty when signed out.
#[component]
pub fn UserMenu(on_logout: Option<EventHandler<()>>) -> Element {
    let session = use_session();
    let name = session.read().user().map(|u| u.display_name().to_string());

    rsx! {
        if let Some(name) = name {
            div {
                class: "navbar-user",
                span { "Hi, {name}" }
                LogoutButton {
                    class: "btn btn-secondary",
                    on_logout: move |_: ()| {
                        if let Some(handler) = on_logout {
                            handler.call(());
                        }
                    },
                }
            }
        }
    }
}
