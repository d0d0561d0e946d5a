use dioxus::prelude::*;

use crate::Route;

/// Navigation bar above every page.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let session = ui::use_session();
    let signed_in = session.read().is_signed_in();

    rsx! {
        ui::Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Tasks {}, "Tasks" }
            if !signed_in {
                Link { to: Route::Signup {}, "Sign up" }
                Link { to: Route::Login {}, "Log in" }
            }
            ui::UserMenu {
                on_logout: move |_: ()| {
                    nav.push(Route::Login {});
                },
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
