/*
 * test/mod.rs
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

//! In-memory stand-ins for the external collaborators.

mod factory;

pub use self::factory::*;

use crate::client::*;
use crate::prelude::*;
use crate::Result;
use async_trait::async_trait;
use chrono::prelude::*;
use std::cell::{Cell, RefCell};

/// Remembers every page it was asked to go to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

/// A store kept in vectors, counting every create call it receives.
#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: RefCell<Vec<Listing>>,
    ratings: RefCell<Vec<Rating>>,
    questions: RefCell<Vec<Question>>,
    accounts: RefCell<Vec<NewAccount>>,
    creates: Cell<usize>,
    failure: Cell<Option<&'static str>>,
}

impl MemoryStore {
    pub fn with_data(listings: Vec<Listing>, ratings: Vec<Rating>) -> Self {
        MemoryStore {
            listings: RefCell::new(listings),
            ratings: RefCell::new(ratings),
            ..MemoryStore::default()
        }
    }

    /// Makes every following create call fail with this message.
    pub fn fail_with(&self, message: &'static str) {
        self.failure.set(Some(message));
    }

    pub fn recover(&self) {
        self.failure.set(None);
    }

    #[inline]
    pub fn create_calls(&self) -> usize {
        self.creates.get()
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.listings.borrow().clone()
    }

    pub fn ratings(&self) -> Vec<Rating> {
        self.ratings.borrow().clone()
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.borrow().clone()
    }

    pub fn accounts(&self) -> Vec<NewAccount> {
        self.accounts.borrow().clone()
    }

    fn begin_create(&self) -> Result<()> {
        self.creates.set(self.creates.get() + 1);

        match self.failure.get() {
            Some(message) => Err(Error::StaticMsg(message)),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl SubmissionClient<NewListing> for MemoryStore {
    type Id = ListingId;

    async fn create(&self, record: &NewListing) -> Result<ListingId> {
        self.begin_create()?;

        let mut listings = self.listings.borrow_mut();
        let id = ListingId::from_raw(listings.len() as i64 + 1);
        listings.push(Listing::from_record(id, record.clone(), Utc::now()));

        Ok(id)
    }
}

#[async_trait(?Send)]
impl SubmissionClient<NewRating> for MemoryStore {
    type Id = RatingId;

    async fn create(&self, record: &NewRating) -> Result<RatingId> {
        self.begin_create()?;

        let exists = self
            .listings
            .borrow()
            .iter()
            .any(|listing| listing.id() == record.listing_id);

        if !exists {
            return Err(Error::ListingNotFound);
        }

        let mut ratings = self.ratings.borrow_mut();
        let id = RatingId::from_raw(ratings.len() as i64 + 1);
        ratings.push(Rating::from_record(id, record.clone(), Utc::now()));

        Ok(id)
    }
}

#[async_trait(?Send)]
impl SubmissionClient<NewQuestion> for MemoryStore {
    type Id = QuestionId;

    async fn create(&self, record: &NewQuestion) -> Result<QuestionId> {
        self.begin_create()?;

        let mut questions = self.questions.borrow_mut();
        let id = QuestionId::from_raw(questions.len() as i64 + 1);
        questions.push(Question::from_record(id, record.clone(), Utc::now()));

        Ok(id)
    }
}

#[async_trait(?Send)]
impl SubmissionClient<NewAccount> for MemoryStore {
    type Id = UserId;

    async fn create(&self, record: &NewAccount) -> Result<UserId> {
        self.begin_create()?;

        let mut accounts = self.accounts.borrow_mut();
        accounts.push(record.clone());

        Ok(UserId::from_raw(accounts.len() as i64))
    }
}

#[async_trait(?Send)]
impl FetchClient<Listing> for MemoryStore {
    type Filter = ListingFilter;

    async fn list(&self, filter: Option<&ListingFilter>) -> Result<Vec<Listing>> {
        let owner = filter.and_then(|filter| filter.owner);
        let listings = self
            .listings
            .borrow()
            .iter()
            .filter(|listing| owner.map(|id| listing.user_id() == id).unwrap_or(true))
            .cloned()
            .collect();

        Ok(listings)
    }
}

#[async_trait(?Send)]
impl FetchClient<Rating> for MemoryStore {
    type Filter = RatingFilter;

    async fn list(&self, filter: Option<&RatingFilter>) -> Result<Vec<Rating>> {
        let filter = filter.copied().unwrap_or_default();
        let ratings = self
            .ratings
            .borrow()
            .iter()
            .filter(|rating| {
                filter.listing.map(|id| rating.listing_id() == id).unwrap_or(true)
                    && filter.author.map(|id| rating.user_id() == id).unwrap_or(true)
            })
            .cloned()
            .collect();

        Ok(ratings)
    }
}
