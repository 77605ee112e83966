/*
 * models/rating.rs
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

/// One user's star score and comment on a listing.
///
/// Ratings are append-only: a user may rate the same listing
/// more than once, and nothing is ever updated or deleted.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    rating_id: RatingId,
    listing_id: ListingId,
    user_id: UserId,
    rating: i16,
    feedback: String,
    created_at: DateTime<Utc>,
}

impl Rating {
    pub fn from_record(id: RatingId, record: NewRating, created_at: DateTime<Utc>) -> Self {
        let NewRating {
            listing_id,
            user_id,
            rating,
            feedback,
        } = record;

        Rating {
            rating_id: id,
            listing_id,
            user_id,
            rating,
            feedback,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> RatingId {
        self.rating_id
    }

    #[inline]
    pub fn listing_id(&self) -> ListingId {
        self.listing_id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The star score, between 1 and 5 inclusive.
    #[inline]
    pub fn score(&self) -> i16 {
        self.rating
    }

    #[inline]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub listing_id: ListingId,
    pub user_id: UserId,
    pub rating: i16,
    pub feedback: String,
}
