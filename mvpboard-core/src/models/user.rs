/*
 * models/user.rs
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

use super::prelude::*;
use crate::StdResult;
use std::convert::TryFrom;
use std::fmt::{self, Debug};

/// Interest ids a user can pick while setting up their account.
pub const INTERESTS: &[&str] = &[
    "mobile-apps",
    "web-apps",
    "games",
    "ai-tools",
    "productivity",
    "social",
];

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    Developer,
    Company,
    Tester,
}

impl UserType {
    pub const NAMES: &'static [&'static str] = &["developer", "company", "tester"];

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl Into<&'static str> for UserType {
    // Stored as-is in the users table
    fn into(self) -> &'static str {
        match self {
            UserType::Developer => "developer",
            UserType::Company => "company",
            UserType::Tester => "tester",
        }
    }
}

impl TryFrom<&'_ str> for UserType {
    type Error = ();

    fn try_from(value: &str) -> StdResult<Self, ()> {
        let case = match value {
            "developer" => UserType::Developer,
            "company" => UserType::Company,
            "tester" => UserType::Tester,
            _ => return Err(()),
        };

        Ok(case)
    }
}

/// A user's profile, as kept by the authentication service.
/// This crate only ever reads it.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct User {
    user_id: UserId,
    email: String,
    first_name: String,
    last_name: String,
    country: String,
    user_type: String,
    interests: Vec<String>,
    created_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns `None` if the stored value isn't a known user type.
    #[inline]
    pub fn user_type(&self) -> Option<UserType> {
        UserType::try_from(self.user_type.as_str()).ok()
    }

    #[inline]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// The completed account wizard, handed to the authentication provider.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub country: String,
    pub user_type: UserType,
    pub interests: Vec<String>,
}

impl Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("age", &self.age)
            .field("country", &self.country)
            .field("user_type", &self.user_type)
            .field("interests", &self.interests)
            .finish()
    }
}

#[test]
fn user_type_names() {
    for name in UserType::NAMES {
        let user_type = UserType::try_from(*name).expect("Name didn't parse");
        assert_eq!(user_type.name(), *name);
    }

    assert!(UserType::try_from("admin").is_err());
}
