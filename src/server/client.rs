/*
 * server/client.rs
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

//! Lets forms submit to, and the feed fetch from, the database directly.

use super::Server;
use crate::manager_prelude::*;
use async_trait::async_trait;
use mvpboard_core::client::{FetchClient, ListingFilter, RatingFilter, SubmissionClient};

#[async_trait(?Send)]
impl SubmissionClient<NewListing> for Server {
    type Id = ListingId;

    async fn create(&self, record: &NewListing) -> Result<ListingId> {
        self.create_listing(record).await
    }
}

#[async_trait(?Send)]
impl SubmissionClient<NewRating> for Server {
    type Id = RatingId;

    async fn create(&self, record: &NewRating) -> Result<RatingId> {
        self.add_rating(record).await
    }
}

#[async_trait(?Send)]
impl SubmissionClient<NewQuestion> for Server {
    type Id = QuestionId;

    async fn create(&self, record: &NewQuestion) -> Result<QuestionId> {
        self.ask_question(record).await
    }
}

#[async_trait(?Send)]
impl FetchClient<Listing> for Server {
    type Filter = ListingFilter;

    async fn list(&self, filter: Option<&ListingFilter>) -> Result<Vec<Listing>> {
        self.get_listings(filter).await
    }
}

#[async_trait(?Send)]
impl FetchClient<Rating> for Server {
    type Filter = RatingFilter;

    async fn list(&self, filter: Option<&RatingFilter>) -> Result<Vec<Rating>> {
        self.get_ratings(filter).await
    }
}

#[async_trait(?Send)]
impl FetchClient<Question> for Server {
    type Filter = ();

    async fn list(&self, _filter: Option<&()>) -> Result<Vec<Question>> {
        self.get_questions(None).await
    }
}
