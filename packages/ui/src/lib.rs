//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod api_context;
pub use api_context::{use_api, ApiProvider};

mod session_store;
pub use session_store::make_session_store;

mod session;
pub use session::{sign_in, sign_out, use_session, LogoutButton, SessionProvider, SessionState};

mod navbar;
pub use navbar::{Navbar, UserMenu};

pub mod task_list;
pub use task_list::TaskList;
