use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Tasks() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::TaskList {
            on_login: move |_: ()| {
                nav.push(Route::Login {});
            },
        }
    }
}
