/*
 * session.rs
 *
 * mvpboard-core - Product validation marketplace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! The signed-in user, passed explicitly to every page that needs it.

use crate::prelude::*;
use crate::Result;
use chrono::prelude::*;
use std::sync::Arc;

/// An authenticated user. Never changes once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: UserId,
    email: String,
    signed_in_at: DateTime<Utc>,
}

impl Session {
    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}

/// "Current user or none", as exposed by an authentication provider.
pub trait SessionProvider {
    fn current_user(&self) -> Option<&Session>;

    fn sign_out(&mut self);
}

/// Holds the current session, if any.
///
/// Only the owner (the authentication layer) can sign in or out,
/// everyone else is handed a shared reference and can only read.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session: Option<Arc<Session>>,
}

impl SessionContext {
    #[inline]
    pub fn new() -> Self {
        SessionContext::default()
    }

    /// Starts a new session, replacing any existing one.
    pub fn sign_in(&mut self, user_id: UserId, email: &str) -> Arc<Session> {
        info!("Signing in user ID {}", user_id);

        let session = Arc::new(Session {
            user_id,
            email: email.to_ascii_lowercase(),
            signed_in_at: Utc::now(),
        });

        self.session = Some(Arc::clone(&session));
        session
    }

    /// Ends the current session, returning it if there was one.
    pub fn sign_out(&mut self) -> Option<Arc<Session>> {
        let session = self.session.take();

        match session {
            Some(ref session) => info!("Signing out user ID {}", session.user_id),
            None => debug!("Sign out requested with no active session"),
        }

        session
    }

    #[inline]
    pub fn current(&self) -> Option<&Session> {
        self.session.as_deref()
    }

    /// A shared handle to the session, for pages which outlive this borrow.
    #[inline]
    pub fn handle(&self) -> Option<Arc<Session>> {
        self.session.clone()
    }

    #[inline]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Gets the current session, or sends the user to sign in.
    pub fn require_user<N>(&self, navigator: &N) -> Result<&Session>
    where
        N: Navigator + ?Sized,
    {
        match self.current() {
            Some(session) => Ok(session),
            None => {
                debug!("No active session, redirecting to sign in");

                navigator.navigate(Route::Auth);
                Err(Error::NotLoggedIn)
            }
        }
    }
}

impl SessionProvider for SessionContext {
    #[inline]
    fn current_user(&self) -> Option<&Session> {
        self.current()
    }

    #[inline]
    fn sign_out(&mut self) {
        SessionContext::sign_out(self);
    }
}

#[test]
fn session_lifecycle() {
    use crate::test::RecordingNavigator;

    let navigator = RecordingNavigator::default();
    let mut context = SessionContext::new();

    context
        .require_user(&navigator)
        .expect_err("Session exists before signing in");

    assert_eq!(navigator.routes(), vec![Route::Auth]);

    let user_id = UserId::from_raw(3);
    let session = context.sign_in(user_id, "Tester@Example.com");
    assert_eq!(session.email(), "tester@example.com");

    let current = context
        .require_user(&navigator)
        .expect("No session after signing in");

    assert_eq!(current.user_id(), user_id);
    assert_eq!(navigator.routes().len(), 1);

    let ended = context.sign_out().expect("No session to end");
    assert_eq!(ended.user_id(), user_id);
    assert!(!context.is_signed_in());
    assert!(context.sign_out().is_none());
}
