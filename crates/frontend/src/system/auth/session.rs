//! Process-wide handling of expired sessions.
//!
//! The session lives in an HTTP-only cookie, so the only signal the client
//! ever gets is a 401. Every API call funnels that signal through
//! [`on_unauthorized`]; callers never special-case it.

use std::sync::atomic::{AtomicBool, Ordering};

use super::storage;

pub const SIGN_IN_PATH: &str = "/auth/sign-in";

/// Browser side effects the interceptor needs
pub trait SessionEnvironment {
    fn current_path(&self) -> String;
    fn clear_user_cache(&self);
    fn redirect_to(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedOutcome {
    /// Navigation to the sign-in page was started
    Redirected,
    /// Already on the sign-in page; nothing to do
    AlreadyOnSignIn,
    /// An earlier 401 already started the redirect
    RedirectPending,
}

pub struct SessionInterceptor {
    redirect_issued: AtomicBool,
}

impl SessionInterceptor {
    pub const fn new() -> Self {
        Self {
            redirect_issued: AtomicBool::new(false),
        }
    }

    /// Clears cached user data and redirects to sign-in at most once.
    pub fn handle_unauthorized(&self, env: &dyn SessionEnvironment) -> UnauthorizedOutcome {
        env.clear_user_cache();

        if env.current_path().contains(SIGN_IN_PATH) {
            return UnauthorizedOutcome::AlreadyOnSignIn;
        }
        if self.redirect_issued.swap(true, Ordering::SeqCst) {
            return UnauthorizedOutcome::RedirectPending;
        }

        log::warn!("Unauthorized: session expired or cookie missing, redirecting to sign-in");
        env.redirect_to(SIGN_IN_PATH);
        UnauthorizedOutcome::Redirected
    }

    /// Re-arms the guard after a fresh sign-in.
    pub fn reset(&self) {
        self.redirect_issued.store(false, Ordering::SeqCst);
    }
}

impl Default for SessionInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

static INTERCEPTOR: SessionInterceptor = SessionInterceptor::new();

pub fn interceptor() -> &'static SessionInterceptor {
    &INTERCEPTOR
}

/// `window.location` + local storage
pub struct BrowserSession;

impl SessionEnvironment for BrowserSession {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn clear_user_cache(&self) {
        storage::clear_user();
    }

    fn redirect_to(&self, path: &str) {
        // Full navigation: drops every in-memory signal along with the session.
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("Failed to redirect to {}: {:?}", path, e);
            }
        }
    }
}

pub fn on_unauthorized() -> UnauthorizedOutcome {
    interceptor().handle_unauthorized(&BrowserSession)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct RecordingSession {
        path: String,
        cache_clears: Cell<u32>,
        redirects: RefCell<Vec<String>>,
    }

    impl RecordingSession {
        fn at(path: &str) -> Self {
            Self {
                path: path.to_string(),
                cache_clears: Cell::new(0),
                redirects: RefCell::new(Vec::new()),
            }
        }
    }

    impl SessionEnvironment for RecordingSession {
        fn current_path(&self) -> String {
            self.path.clone()
        }

        fn clear_user_cache(&self) {
            self.cache_clears.set(self.cache_clears.get() + 1);
        }

        fn redirect_to(&self, path: &str) {
            self.redirects.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_401_on_dashboard_redirects_exactly_once() {
        let interceptor = SessionInterceptor::new();
        let env = RecordingSession::at("/dashboard/reports");

        assert_eq!(
            interceptor.handle_unauthorized(&env),
            UnauthorizedOutcome::Redirected
        );
        assert_eq!(
            interceptor.handle_unauthorized(&env),
            UnauthorizedOutcome::RedirectPending
        );

        assert_eq!(*env.redirects.borrow(), vec![SIGN_IN_PATH.to_string()]);
        assert_eq!(env.cache_clears.get(), 2);
    }

    #[test]
    fn test_401_on_sign_in_never_redirects() {
        let interceptor = SessionInterceptor::new();
        let env = RecordingSession::at("/auth/sign-in");

        assert_eq!(
            interceptor.handle_unauthorized(&env),
            UnauthorizedOutcome::AlreadyOnSignIn
        );
        assert!(env.redirects.borrow().is_empty());
        assert_eq!(env.cache_clears.get(), 1);
    }

    #[test]
    fn test_reset_rearms_the_guard() {
        let interceptor = SessionInterceptor::new();
        let env = RecordingSession::at("/dashboard/atm");

        interceptor.handle_unauthorized(&env);
        interceptor.reset();
        assert_eq!(
            interceptor.handle_unauthorized(&env),
            UnauthorizedOutcome::Redirected
        );
        assert_eq!(env.redirects.borrow().len(), 2);
    }
}
