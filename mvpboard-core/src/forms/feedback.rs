/*
 * forms/feedback.rs
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

use super::{Field, Form, Rule, Schema, Section, ValidValues};
use crate::models::NewRating;
use crate::route::Route;
use crate::types::{ListingId, RatingId, UserId};
use crate::{Error, Result};
use std::convert::TryFrom;

pub const RATING_REQUIRED: &str = "Please give this MVP a rating";
pub const COMMENT_REQUIRED: &str = "Please add a comment";

lazy_static! {
    static ref SCHEMA: Schema = Schema::new(vec![Section::new(
        "feedback",
        vec![
            // Zero stars is what an untouched star picker submits
            Field::new("rating")
                .rule_with_message(Rule::Required, RATING_REQUIRED)
                .rule_with_message(
                    Rule::Number {
                        min: Some(1),
                        max: Some(5),
                    },
                    RATING_REQUIRED,
                ),
            Field::new("feedback").rule_with_message(Rule::Required, COMMENT_REQUIRED),
        ],
    )]);
}

/// Star rating and comment, left after testing a listing.
#[derive(Debug, Copy, Clone)]
pub struct FeedbackForm {
    listing_id: ListingId,
    user_id: UserId,
}

impl FeedbackForm {
    #[inline]
    pub fn new(listing_id: ListingId, user_id: UserId) -> Self {
        FeedbackForm {
            listing_id,
            user_id,
        }
    }

    #[inline]
    pub fn listing_id(&self) -> ListingId {
        self.listing_id
    }
}

impl Form for FeedbackForm {
    type Record = NewRating;
    type Id = RatingId;

    #[inline]
    fn schema(&self) -> &Schema {
        &SCHEMA
    }

    fn build(&self, values: &ValidValues) -> Result<NewRating> {
        let rating = i16::try_from(values.number("rating")?)
            .map_err(|_| Error::StaticMsg("rating doesn't fit into i16"))?;

        Ok(NewRating {
            listing_id: self.listing_id,
            user_id: self.user_id,
            rating,
            feedback: values.text("feedback")?,
        })
    }

    #[inline]
    fn success_route(&self, _: RatingId) -> Route {
        Route::TestListing(self.listing_id)
    }
}
