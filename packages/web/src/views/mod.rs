mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod tasks;
pub use tasks::Tasks;

use dioxus::prelude::*;

/// One-shot message carried from one page to the next (e.g. signup to login).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice(pub Option<String>);

pub(crate) fn use_notice() -> Signal<Notice> {
    use_context::<Signal<Notice>>()
}
