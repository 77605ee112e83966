/*
 * lib.rs
 *
 * mvpboard - Product validation marketplace service
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

#![deny(missing_debug_implementations)]

//! Postgres-backed service for the mvpboard product validation marketplace.
//!
//! The [`Server`] owns the database connection and exposes the page-level
//! operations. It also implements the submission and fetch clients from
//! `mvpboard_core`, so forms and the feed can be pointed straight at it.

extern crate async_trait;
extern crate chrono;

#[macro_use]
extern crate diesel;
extern crate futures;

#[macro_use]
extern crate log;
extern crate mvpboard_core;
extern crate ref_map;

#[macro_use]
extern crate serde;
extern crate toml;

#[macro_use]
mod macros;

#[cfg(test)]
mod test;

mod config;
mod listing;
mod question;
mod rating;
mod schema;
mod server;
mod user;
mod utils;

mod manager_prelude {
    pub use crate::schema::*;
    pub use crate::{Error, Result};
    pub use diesel::prelude::*;
    pub use mvpboard_core::models::*;
    pub use mvpboard_core::types::*;
    pub use std::fmt::{self, Debug};
    pub use std::sync::Arc;
}

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::server::{ListingDetails, Server, UserProfile};
    pub use mvpboard_core::prelude::*;
}

pub use self::prelude::*;
pub use mvpboard_core::{client, feed, forms, qa, route, session};
pub use mvpboard_core::{Result, StdResult};
