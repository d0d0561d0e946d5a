//! Landing page.

use dioxus::prelude::*;

use crate::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "Organize",
        "Keep every task in one list with a title, notes and a due date.",
    ),
    (
        "Track progress",
        "Tick tasks off as you go and see how many are done at a glance.",
    ),
    (
        "Stay on time",
        "Overdue tasks stand out so nothing slips past its date.",
    ),
];

#[component]
pub fn Home() -> Element {
    let signed_in = ui::use_session().read().is_signed_in();

    rsx! {
        section {
            class: "hero",
            h1 { "Manage your tasks with ease" }
            p { "A simple list for the things you need to get done." }
            div {
                class: "hero-actions",
                if signed_in {
                    Link { class: "btn btn-primary", to: Route::Tasks {}, "Go to my tasks" }
                } else {
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Get started" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Log in" }
                }
            }
        }

        section {
            class: "features",
            for (title, body) in FEATURES {
                Link {
                    class: "feature-card",
                    to: Route::Tasks {},
                    h3 { "{title}" }
                    p { "{body}" }
                }
            }
        }
    }
}
