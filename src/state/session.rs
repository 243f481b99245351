//! Session bootstrap and ownership of the expiry timer.
//!
//! DESIGN
//! ======
//! `SessionStore` is the single writer of the signed-in session. Bootstrapping
//! arms exactly one expiry timer through an [`ExpiryScheduler`] and keeps the
//! returned handle; ending the session (logout, expiry, re-bootstrap) drops the
//! handle, which disarms the timer. Views only ever see a cloned [`Session`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use crate::error::TokenError;
use crate::util::token::{Role, decode_claims};

/// The signed-in user as seen by views.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Opaque user payload from the `data` claim.
    pub user: serde_json::Value,
    pub role: Role,
    /// The full decoded claim object.
    pub raw_claims: serde_json::Value,
    /// Expiry as Unix seconds.
    pub expires_at: i64,
}

impl Session {
    /// Numeric user id (`ID` field of the user payload), if present.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.get("ID").and_then(serde_json::Value::as_i64)
    }

    /// Display name (`Name` field of the user payload), if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.get("Name").and_then(serde_json::Value::as_str)
    }
}

/// Arms one-shot timers that fire the expiry notice.
///
/// Dropping the returned handle must disarm the timer.
pub trait ExpiryScheduler {
    type Handle;

    fn schedule(&self, delay: Duration) -> Self::Handle;
}

/// Owned expiry timer. Dropping it cancels the pending notice.
#[derive(Debug)]
pub struct ExpiryHandle<H> {
    timer: Option<H>,
    delay: Duration,
}

impl<H> ExpiryHandle<H> {
    /// Delay the timer was armed with.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Disarm the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.timer.take();
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }
}

/// Delay until the expiry notice, `lead` before the expiry instant.
#[must_use]
pub fn notice_delay(expires_at_ms: u64, now_ms: u64, lead: Duration) -> Duration {
    let ms_left = expires_at_ms.saturating_sub(now_ms);
    let lead_ms = u64::try_from(lead.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(ms_left.saturating_sub(lead_ms))
}

/// Single owner of the current session and its expiry timer.
pub struct SessionStore<S: ExpiryScheduler> {
    scheduler: S,
    lead: Duration,
    active: Option<(Session, ExpiryHandle<S::Handle>)>,
}

impl<S: ExpiryScheduler> SessionStore<S> {
    pub fn new(scheduler: S, lead: Duration) -> Self {
        Self { scheduler, lead, active: None }
    }

    /// Decode `credential` and publish a session if it has not expired.
    ///
    /// Returns `Ok(false)` with no state change when the credential is absent
    /// or expired. On success any previous session is replaced and its timer
    /// cancelled before the new one is armed.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] when the credential cannot be decoded. The store
    /// is left untouched.
    pub fn bootstrap(&mut self, credential: Option<&str>, now_ms: u64) -> Result<bool, TokenError> {
        let Some(credential) = credential.filter(|c| !c.trim().is_empty()) else {
            return Ok(false);
        };
        let (claims, raw_claims) = decode_claims(credential)?;
        let Some(expires_at_ms) = claims.expires_at_ms().filter(|_| claims.is_live_at(now_ms)) else {
            log::debug!("stored credential expired at {}", claims.exp);
            return Ok(false);
        };

        self.end();
        let delay = notice_delay(expires_at_ms, now_ms, self.lead);
        let timer = self.scheduler.schedule(delay);
        log::debug!("session expiry notice armed in {delay:?}");

        let session = Session {
            user: claims.data,
            role: claims.role,
            raw_claims,
            expires_at: claims.exp,
        };
        self.active = Some((session, ExpiryHandle { timer: Some(timer), delay }));
        Ok(true)
    }

    /// Drop the session and disarm its timer. Returns the ended session.
    pub fn end(&mut self) -> Option<Session> {
        self.active.take().map(|(session, mut handle)| {
            handle.cancel();
            session
        })
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref().map(|(session, _)| session)
    }

    #[must_use]
    pub fn expiry(&self) -> Option<&ExpiryHandle<S::Handle>> {
        self.active.as_ref().map(|(_, handle)| handle)
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
