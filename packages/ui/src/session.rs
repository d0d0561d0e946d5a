//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, User};

use crate::session_store::make_session_store;

/// Who is signed in, plus where that is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    namespace: String,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Persist `session` and make it current.
pub fn sign_in(state: &mut Signal<SessionState>, session: Session) {
    let namespace = state.peek().namespace.clone();
    if let Err(e) = make_session_store(&namespace).save(&session) {
        tracing::warn!("Could not persist session: {}", e);
    }
    tracing::debug!("Stored session for {}", session.user.display_name());
    state.write().session = Some(session);
}

/// Forget the stored session. The in-memory state is cleared even if
/// storage fails.
pub fn sign_out(state: &mut Signal<SessionState>) {
    let namespace = state.peek().namespace.clone();
    if let Err(e) = make_session_store(&namespace).clear() {
        tracing::warn!("Could not clear stored session: {}", e);
    }
    tracing::info!("Signed out");
    state.write().session = None;
}

/// Provider component that restores the persisted session on startup.
/// Wrap your app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(#[props(default)] namespace: String, children: Element) -> Element {
    let state = use_signal(move || SessionState {
        session: make_session_store(&namespace).load(),
        namespace,
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut state = use_session();

    let onclick = move |_| {
        sign_out(&mut state);
        if let Some(handler) = &on_logout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Session {
        Session::new(
            User {
                id: "u1".into(),
                username: "alice".into(),
                email: "a@b.com".into(),
            },
            "t1",
        )
    }

    fn namespace(name: &str) -> String {
        format!("test-{name}-{}", std::process::id())
    }

    #[component]
    fn SignInOnMount(sign_out_after: bool) -> Element {
        let mut state = use_session();
        use_hook(move || {
            sign_in(&mut state, alice());
            assert_eq!(state.peek().user().map(|u| u.id.as_str()), Some("u1"));
            if sign_out_after {
                sign_out(&mut state);
                assert!(!state.peek().is_signed_in());
            }
        });
        rsx! {}
    }

    #[component]
    fn Harness(namespace: String, sign_out_after: bool) -> Element {
        rsx! {
            SessionProvider {
                namespace,
                SignInOnMount { sign_out_after }
            }
        }
    }

    fn mount(namespace: &str, sign_out_after: bool) {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                namespace: namespace.to_string(),
                sign_out_after,
            },
        );
        dom.rebuild_in_place();
    }

    #[test]
    fn test_sign_in_persists_token_and_user() {
        let ns = namespace("sign-in");
        mount(&ns, false);

        let stored = make_session_store(&ns).load().unwrap();
        assert_eq!(stored.token, "t1");
        assert_eq!(stored.bearer(), "Bearer t1");
        assert_eq!(stored.user.username, "alice");

        make_session_store(&ns).clear().unwrap();
    }

    #[test]
    fn test_sign_out_clears_storage() {
        let ns = namespace("sign-out");
        mount(&ns, true);

        assert!(make_session_store(&ns).load().is_none());
    }
}
