/*
 * lib.rs
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

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

extern crate async_trait;
extern crate chrono;

#[macro_use]
extern crate diesel;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;
extern crate map_vec;
extern crate ref_map;
extern crate regex;

#[macro_use]
extern crate serde;

#[macro_use]
extern crate thiserror;

#[macro_use]
mod macros;

#[cfg(test)]
mod test;

pub mod client;
pub mod error;
pub mod feed;
pub mod forms;
pub mod models;
pub mod profile;
pub mod qa;
pub mod route;
pub mod session;
pub mod types;

pub mod prelude {
    pub use super::client::{FetchClient, ListingFilter, RatingFilter, SubmissionClient};
    pub use super::error::{recover, Error};
    pub use super::feed::{Feed, FeedConfig, FeedEntry, ListingMetric};
    pub use super::forms::{FieldErrors, Form, FormController, FormState};
    pub use super::models::*;
    pub use super::profile::ProfileStats;
    pub use super::route::{Navigator, Route};
    pub use super::session::{Session, SessionContext, SessionProvider};
    pub use super::types::*;
}

pub use self::prelude::*;

pub type StdResult<T, E> = std::result::Result<T, E>;
pub type Result<T> = StdResult<T, Error>;
