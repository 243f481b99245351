//! Session controller and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only writer of [`AuthState`]. It owns the browser
//! [`SessionStore`] (and through it the expiry timer) in a thread-local, since
//! WASM runs on a single thread. Views get a read-only signal plus this
//! controller for login/logout.
//!
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ClientConfig;
use crate::error::TokenError;
use crate::state::auth::AuthState;
use crate::state::session::{ExpiryScheduler, SessionStore};
use crate::util::token::Role;
use crate::util::storage;

/// Slot holding the pending leg of an expiry timer. Dropping the last strong
/// reference clears the browser timeout.
#[cfg(feature = "csr")]
type Timer = std::rc::Rc<RefCell<Option<gloo_timers::callback::Timeout>>>;
#[cfg(not(feature = "csr"))]
type Timer = ();

/// Arms expiry timers on the browser event loop.
pub struct BrowserScheduler {
    controller: SessionController,
}

impl ExpiryScheduler for BrowserScheduler {
    type Handle = Timer;

    fn schedule(&self, delay: Duration) -> Timer {
        #[cfg(feature = "csr")]
        {
            let slot = Timer::default();
            arm_leg(&slot, delay, self.controller);
            slot
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.controller, delay);
        }
    }
}

/// Arm one leg of at most [`MAX_TIMER_MS`]; the last leg ends the session.
#[cfg(feature = "csr")]
fn arm_leg(slot: &Timer, delay: Duration, controller: SessionController) {
    let (millis, rest) = timer_leg(delay);
    let weak = std::rc::Rc::downgrade(slot);
    let timeout = gloo_timers::callback::Timeout::new(millis, move || {
        if rest.is_none() {
            crate::util::notice::alert(crate::util::notice::SESSION_EXPIRED_NOTICE);
        }
        // The fired timeout is replaced or dropped from here; defer so the
        // callback is not freed while it is still running.
        leptos::task::spawn_local(async move {
            match rest {
                Some(rest) => {
                    if let Some(slot) = weak.upgrade() {
                        arm_leg(&slot, rest, controller);
                    }
                }
                None => controller.expire(),
            }
        });
    });
    slot.replace(Some(timeout));
}

struct BrowserSession {
    store: SessionStore<BrowserScheduler>,
    storage_key: String,
}

thread_local! {
    static BROWSER_SESSION: RefCell<Option<BrowserSession>> = const { RefCell::new(None) };
}

/// Longest delay a browser timer accepts before firing immediately.
pub const MAX_TIMER_MS: u32 = 2_147_483_647;

/// Split `delay` into the next browser-safe leg and what remains after it.
#[must_use]
pub fn timer_leg(delay: Duration) -> (u32, Option<Duration>) {
    let max = Duration::from_millis(u64::from(MAX_TIMER_MS));
    if delay <= max {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(MAX_TIMER_MS);
        return (millis, None);
    }
    (MAX_TIMER_MS, Some(delay - max))
}

/// Current time in Unix milliseconds.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Single writer of the published session.
#[derive(Clone, Copy)]
pub struct SessionController {
    auth: RwSignal<AuthState>,
}

impl SessionController {
    /// Create the controller and its session store. Call once from the root.
    pub fn install(config: &ClientConfig) -> Self {
        let controller = Self { auth: RwSignal::new(AuthState::pending()) };
        let store = SessionStore::new(BrowserScheduler { controller }, config.expiry_notice_lead);
        let storage_key = config.token_storage_key.clone();
        BROWSER_SESSION.with(|cell| {
            // A previous store (hot reload, remount) is dropped with its timer.
            cell.replace(Some(BrowserSession { store, storage_key }));
        });
        controller
    }

    /// Read-only view of the session for components.
    pub fn reader(self) -> ReadSignal<AuthState> {
        self.auth.read_only()
    }

    /// Bootstrap from the persisted credential. Returns whether a session was
    /// published. A malformed credential is logged and treated as signed out.
    pub fn bootstrap_session(self) -> bool {
        let published = with_session(|s| {
            let credential = storage::read_item(&s.storage_key);
            match s.store.bootstrap(credential.as_deref(), now_ms()) {
                Ok(published) => published,
                Err(e) => {
                    log::warn!("ignoring stored credential: {e}");
                    false
                }
            }
        })
        .unwrap_or(false);
        self.publish();
        published
    }

    /// Persist `token` and bootstrap from it.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if the token cannot be decoded; nothing is stored.
    pub fn login(self, token: &str) -> Result<bool, TokenError> {
        let result = with_session(|s| {
            let published = s.store.bootstrap(Some(token), now_ms())?;
            if published {
                storage::write_item(&s.storage_key, token);
            }
            Ok(published)
        })
        .unwrap_or(Ok(false));
        self.publish();
        result
    }

    /// End the session, cancel its timer, and forget the credential.
    pub fn logout(self) {
        self.clear();
        log::info!("signed out");
    }

    #[cfg(feature = "csr")]
    fn expire(self) {
        self.clear();
        log::info!("session expired");
    }

    fn clear(self) {
        with_session(|s| {
            s.store.end();
            storage::remove_item(&s.storage_key);
        });
        self.publish();
    }

    fn publish(self) {
        let session = with_session(|s| s.store.session().cloned()).flatten();
        self.auth.set(AuthState { session, loading: false });
    }
}

fn with_session<R>(f: impl FnOnce(&mut BrowserSession) -> R) -> Option<R> {
    BROWSER_SESSION.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Whether a route guard should send the user to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Whether a signed-in user lacks the role a route requires.
#[must_use]
pub fn lacks_role(state: &AuthState, required: Role) -> bool {
    !state.loading && state.role().is_some_and(|role| role != required)
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` when the signed-in role does not match `required`.
pub fn install_role_guard<F>(auth: ReadSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if lacks_role(&auth.get(), required) {
            navigate("/", NavigateOptions::default());
        }
    });
}
