/*
 * error.rs
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

use crate::forms::FieldErrors;
use crate::route::{Navigator, Route};
use diesel::result::{ConnectionError, Error as DieselError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("error: {0}")]
    StaticMsg(&'static str),

    #[error("database error: {0}")]
    Database(#[from] DieselError),

    #[error("error connecting to database: {0}")]
    DatabaseConnection(#[from] ConnectionError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid form input: {0}")]
    Validation(FieldErrors),

    #[error("no such form field: {0}")]
    UnknownField(String),

    #[error("the form was already submitted")]
    FormCompleted,

    #[error("a submission for this form is already in progress")]
    SubmissionPending,

    #[error("{0}")]
    SubmissionFailed(String),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("the given listing was not found")]
    ListingNotFound,

    #[error("the given user was not found")]
    UserNotFound,

    #[error("the given question was not found")]
    QuestionNotFound,
}

impl Error {
    pub fn fixed_name(&self) -> &'static str {
        use self::Error::*;

        match *self {
            StaticMsg(_) => "custom",
            Database(_) => "database",
            DatabaseConnection(_) => "database-connection",
            InvalidConfig(_) => "invalid-config",
            Validation(_) => "validation",
            UnknownField(_) => "unknown-field",
            FormCompleted => "form-completed",
            SubmissionPending => "submission-pending",
            SubmissionFailed(_) => "submission-failed",
            NotLoggedIn => "not-logged-in",
            ListingNotFound => "listing-not-found",
            UserNotFound => "user-not-found",
            QuestionNotFound => "question-not-found",
        }
    }

    /// The page to fall back to after this error, if the current one can't be shown.
    pub fn redirect(&self) -> Option<Route> {
        use self::Error::*;

        match *self {
            NotLoggedIn => Some(Route::Auth),
            ListingNotFound | QuestionNotFound => Some(Route::Feed),
            UserNotFound => Some(Route::Profile),
            _ => None,
        }
    }

    /// The message to show the user, if any.
    ///
    /// Authentication failures only redirect, and a pending
    /// submission is ignored without comment.
    pub fn notice(&self) -> Option<String> {
        use self::Error::*;

        match *self {
            NotLoggedIn | SubmissionPending => None,
            _ => Some(self.to_string()),
        }
    }
}

/// Returns control to a usable page after an error.
///
/// Navigates away if the error calls for it, and gives back
/// the notice which should be displayed.
pub fn recover<N>(error: &Error, navigator: &N) -> Option<String>
where
    N: Navigator + ?Sized,
{
    debug!("Recovering from error: {}", error.fixed_name());

    if let Some(route) = error.redirect() {
        navigator.navigate(route);
    }

    error.notice()
}

#[test]
fn recover_redirects() {
    use crate::test::RecordingNavigator;

    let navigator = RecordingNavigator::default();

    assert_eq!(recover(&Error::NotLoggedIn, &navigator), None);
    assert_eq!(
        recover(&Error::ListingNotFound, &navigator),
        Some(String::from("the given listing was not found")),
    );
    assert_eq!(
        recover(&Error::SubmissionFailed(String::from("duplicate key")), &navigator),
        Some(String::from("duplicate key")),
    );

    assert_eq!(navigator.routes(), vec![Route::Auth, Route::Feed]);
}
