/*
 * client.rs
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

//! The external store, as seen from the domain logic.
//!
//! Both traits are `?Send`: everything runs on a single event loop and a
//! form never has more than one request outstanding.

use crate::types::{ListingId, UserId};
use crate::Result;
use async_trait::async_trait;

/// Persists a finished record and returns its generated identifier.
///
/// Constraint violations (foreign keys, uniqueness) are the store's job;
/// any failure comes back as an error which is reported as-is.
#[async_trait(?Send)]
pub trait SubmissionClient<R> {
    type Id;

    async fn create(&self, record: &R) -> Result<Self::Id>;
}

/// Retrieves a full collection of records, with no pagination.
#[async_trait(?Send)]
pub trait FetchClient<R> {
    type Filter;

    async fn list(&self, filter: Option<&Self::Filter>) -> Result<Vec<R>>;
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub owner: Option<UserId>,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RatingFilter {
    pub listing: Option<ListingId>,
    pub author: Option<UserId>,
}
