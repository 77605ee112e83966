/*
 * route.rs
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

//! The pages of the site and the seam used to move between them.

use crate::types::ListingId;
use std::fmt::{self, Display};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Auth,
    CreateAccount,
    Preferences,
    Feed,
    CreateListing,
    Profile,
    Listing(ListingId),
    TestListing(ListingId),
    AddFeedback(ListingId),
    QAndA,
    NotFound,
}

impl Route {
    pub fn path(self) -> String {
        use self::Route::*;

        match self {
            Home => "/".into(),
            Auth => "/auth".into(),
            CreateAccount => "/create-account".into(),
            Preferences => "/user-preferences".into(),
            Feed => "/feed".into(),
            CreateListing => "/create-mvp".into(),
            Profile => "/profile".into(),
            Listing(id) => format!("/mvp/{}", id),
            TestListing(id) => format!("/test-mvp/{}", id),
            AddFeedback(id) => format!("/add-feedback/{}", id),
            QAndA => "/qa".into(),
            NotFound => "/404".into(),
        }
    }

    /// Maps a path to its page. Anything unrecognized is `NotFound`.
    pub fn parse(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        let mut parts = path.split('/').skip(1);

        let route = match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) | (Some(""), None, _) => Route::Home,
            (Some("auth"), None, _) => Route::Auth,
            (Some("create-account"), None, _) => Route::CreateAccount,
            (Some("user-preferences"), None, _) => Route::Preferences,
            (Some("feed"), None, _) => Route::Feed,
            (Some("create-mvp"), None, _) => Route::CreateListing,
            (Some("profile"), None, _) => Route::Profile,
            (Some("qa"), None, _) => Route::QAndA,
            (Some(page), Some(id), None) => match parse_id(id) {
                Some(id) => match page {
                    "mvp" => Route::Listing(id),
                    "test-mvp" => Route::TestListing(id),
                    "add-feedback" => Route::AddFeedback(id),
                    _ => Route::NotFound,
                },
                None => Route::NotFound,
            },
            _ => Route::NotFound,
        };

        trace!("Parsed path '{}' as {:?}", path, route);
        route
    }

    /// Whether the page can only be shown to a signed-in user.
    pub fn requires_login(self) -> bool {
        use self::Route::*;

        match self {
            Home | Auth | CreateAccount | NotFound => false,
            _ => true,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

fn parse_id(value: &str) -> Option<ListingId> {
    value.parse::<i64>().ok().map(ListingId::from_raw)
}

/// Moves the user to another page.
///
/// Fire-and-forget: callers never inspect whether the transition happened.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[test]
fn route_paths() {
    let id = ListingId::from_raw(12);

    macro_rules! check {
        ($route:expr, $path:expr) => {
            assert_eq!($route.path(), $path);
            assert_eq!(Route::parse($path), $route);
        };
    }

    check!(Route::Home, "/");
    check!(Route::Auth, "/auth");
    check!(Route::CreateAccount, "/create-account");
    check!(Route::Preferences, "/user-preferences");
    check!(Route::Feed, "/feed");
    check!(Route::CreateListing, "/create-mvp");
    check!(Route::Profile, "/profile");
    check!(Route::Listing(id), "/mvp/12");
    check!(Route::TestListing(id), "/test-mvp/12");
    check!(Route::AddFeedback(id), "/add-feedback/12");
    check!(Route::QAndA, "/qa");
}

#[test]
fn route_unknown() {
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/feed/"), Route::Feed);
    assert_eq!(Route::parse("/mvp/abc"), Route::NotFound);
    assert_eq!(Route::parse("/mvp/1/extra"), Route::NotFound);
    assert_eq!(Route::parse("/settings"), Route::NotFound);
    assert_eq!(Route::parse("/other/5"), Route::NotFound);
}
